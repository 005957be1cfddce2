use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

pub const INVALID_CHOICE: &str = "That is not a valid choice, please enter again.";

/// Line-oriented question and answer over any reader/writer pair.
///
/// ```
/// use hotseat_holdem::cli::prompt::Prompt;
///
/// let mut prompt = Prompt::new(&b"x\nr\n"[..], Vec::new());
/// let choice = prompt.ask_choice("Choose to (r)aise or (c)heck.", &['r', 'c']).unwrap();
/// assert_eq!(choice, 'r');
/// ```
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Screen clearing starts disabled; see [`Prompt::clearing`].
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, clear: false }
    }

    /// Clear the terminal between turns so players cannot see each other's cards.
    pub fn clearing(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print `question` and read one trimmed line.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the first character of the answer is one of `choices`.
    pub fn ask_choice(&mut self, question: &str, choices: &[char]) -> io::Result<char> {
        self.say(question)?;
        loop {
            let answer = self.ask("> ")?.to_ascii_lowercase();
            let mut chars = answer.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if choices.contains(&c) => return Ok(c),
                _ => {
                    self.say(INVALID_CHOICE)?;
                    self.say(question)?;
                }
            }
        }
    }

    /// Ask until the answer is a whole number inside `range`.
    pub fn ask_number(&mut self, question: &str, range: RangeInclusive<u64>) -> io::Result<u64> {
        let mut text = question.to_string();
        loop {
            match self.ask(&text)?.parse::<u64>() {
                Ok(n) if range.contains(&n) => return Ok(n),
                _ => {
                    text = format!(
                        "Enter a number between {} and {}: ",
                        range.start(),
                        range.end()
                    )
                }
            }
        }
    }

    /// Wait for the enter key.
    pub fn pause(&mut self, message: &str) -> io::Result<()> {
        self.ask(message).map(drop)
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        if self.clear {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
