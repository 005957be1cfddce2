use super::prompt::Prompt;
use crate::format::{join_long, join_natural, plural};
use crate::round::{Action, Decider, RoundReport, RoundResult, Turn};
use crate::table::{PlayerStake, Table};
use std::fmt;
use std::io::{self, BufRead, Write};

fn names_where(table: &Table, pred: impl Fn(&PlayerStake) -> bool) -> Vec<&str> {
    table.players().iter().filter(|p| pred(*p)).map(PlayerStake::name).collect()
}

/// Everything the acting player may see, as printed before they choose.
pub struct TurnView<'t, 'a>(pub &'t Turn<'a>);

impl fmt::Display for TurnView<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = self.0;
        let Some(player) = turn.player() else { return Ok(()) };
        let name = player.name();

        writeln!(f, "Round {}, {}", turn.round, turn.street)?;
        if turn.board.is_empty() {
            writeln!(f, "No community cards have been dealt yet.")?;
        } else {
            writeln!(f, "The community hand includes the {}", join_long(turn.board.as_slice()))?;
        }

        let all_in = names_where(turn.table, PlayerStake::is_all_in);
        if !all_in.is_empty() {
            let verb = if all_in.len() == 1 { "is" } else { "are" };
            writeln!(f, "{} {verb} all-in", join_natural(&all_in))?;
        }
        let folded = names_where(turn.table, PlayerStake::is_folded);
        if !folded.is_empty() {
            let verb = if folded.len() == 1 { "has" } else { "have" };
            writeln!(f, "{} {verb} folded", join_natural(&folded))?;
        }

        if let Some(hole) = player.hole() {
            writeln!(f, "{name} currently has the {}", join_long(&hole.as_array()))?;
        }
        let pots = turn.pots();
        write!(f, "The pot holds {}", pots.main)?;
        if !pots.sides.is_empty() {
            let sides: Vec<String> = pots.sides.iter().map(u64::to_string).collect();
            write!(f, " with side pots of {}", join_natural(&sides))?;
        }
        writeln!(f, ".")?;
        writeln!(
            f,
            "The current highest a player has bet is {}, and {name} has currently bet {}",
            turn.highest_bet,
            player.contribution()
        )?;
        write!(f, "{name} has {} remaining.", plural(player.chips(), "chip", "chips"))
    }
}

/// Summary shown to the whole table once a round is over.
pub struct ReportView<'r>(pub &'r RoundReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        write!(f, "Results of round {}", report.number)?;
        match &report.result {
            RoundResult::FoldOut { winner } => {
                write!(f, "\n{winner} won because everyone else folded.")?;
            }
            RoundResult::Showdown { standings } => {
                let tied = standings.iter().filter(|s| s.place == 0).count() > 1;
                for s in standings {
                    let verb = match (s.place, tied) {
                        (0, false) => "won with",
                        (0, true) => "tied with",
                        _ => "had",
                    };
                    write!(f, "\n{} {verb} {}", s.name, s.evaluation.rank)?;
                }
            }
        }
        for award in &report.awards {
            write!(f, "\n{} collects {}.", award.name, plural(award.amount, "chip", "chips"))?;
        }
        for name in &report.eliminated {
            write!(f, "\n{name} is out of chips and has been eliminated.")?;
        }
        Ok(())
    }
}

/// Pass-the-keyboard decisions: every player answers at the same terminal.
#[derive(Debug)]
pub struct HotseatDecider<R, W> {
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> HotseatDecider<R, W> {
    pub fn new(prompt: Prompt<R, W>) -> Self {
        Self { prompt }
    }

    pub fn prompt(&mut self) -> &mut Prompt<R, W> {
        &mut self.prompt
    }

    pub fn into_prompt(self) -> Prompt<R, W> {
        self.prompt
    }

    pub fn show_report(&mut self, report: &RoundReport) -> io::Result<()> {
        self.prompt.clear_screen()?;
        self.prompt.say(&ReportView(report).to_string())?;
        self.prompt.pause("Press 'enter' to continue...")
    }

    fn hand_over(&mut self, name: &str) -> io::Result<()> {
        self.prompt.clear_screen()?;
        self.prompt.pause(&format!("It is now {name}'s turn. Press 'enter' to continue..."))?;
        self.prompt.clear_screen()
    }
}

impl<R: BufRead, W: Write> Decider for HotseatDecider<R, W> {
    fn decide(&mut self, turn: &Turn<'_>) -> io::Result<Action> {
        let Some(player) = turn.player() else { return Ok(Action::Fold) };
        let name = player.name();

        self.hand_over(name)?;
        self.prompt.say(&TurnView(turn).to_string())?;

        if turn.must_go_all_in() {
            let question = format!(
                "{name} does not have enough chips to call, and can either go (a)ll-in or (f)old."
            );
            return match self.prompt.ask_choice(&question, &['a', 'f'])? {
                'a' => Ok(Action::AllIn),
                _ => Ok(Action::Fold),
            };
        }

        let (question, choices): (String, &[char]) = if turn.to_call() == 0 {
            (format!("{name} must decide to (r)aise or (c)heck."), &['r', 'c'])
        } else {
            (
                format!("{name} must decide to (r)aise, (c)all ({} chips) or (f)old.", turn.to_call()),
                &['r', 'c', 'f'],
            )
        };
        match self.prompt.ask_choice(&question, choices)? {
            'r' => {
                let max = turn.max_raise();
                let amount = self
                    .prompt
                    .ask_number(&format!("How much would you like to raise by? (1-{max}): "), 1..=max)?;
                Ok(if amount == max { Action::AllIn } else { Action::Raise(amount) })
            }
            'c' => Ok(Action::CheckCall),
            _ => Ok(Action::Fold),
        }
    }
}
