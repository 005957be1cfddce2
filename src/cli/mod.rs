//! Terminal front-end: table setup, the round loop and the final result.

pub mod hotseat;
pub mod prompt;

use crate::config::{check_names, check_player_count, ConfigError, GameConfig};
use crate::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::history::RoundLog;
use crate::round::{play_round, Blinds, RoundError, RoundReport};
use crate::table::Table;
use hotseat::HotseatDecider;
use log::{info, warn};
use prompt::Prompt;
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// How the game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub champion: String,
    pub chips: u64,
    pub rounds: u32,
}

/// Ask for the number of players until it is in range.
pub fn ask_player_count<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<usize> {
    let mut question = format!("Enter the number of players (max {MAX_PLAYERS}): ");
    loop {
        match prompt.ask(&question)?.parse::<usize>() {
            Ok(n) if check_player_count(n).is_ok() => return Ok(n),
            _ => {
                question =
                    format!("Enter a number of players between {MIN_PLAYERS} and {MAX_PLAYERS}: ")
            }
        }
    }
}

/// Player names from `config`, or asked for one seat at a time.
///
/// Blank and repeated names are refused and asked for again.
pub fn collect_names<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    config: &GameConfig,
) -> io::Result<Vec<String>> {
    if !config.names.is_empty() {
        return Ok(config.names.iter().map(|n| n.trim().to_string()).collect());
    }
    let count = match config.players {
        Some(n) => n,
        None => ask_player_count(prompt)?,
    };

    let mut names = Vec::with_capacity(count);
    for seat in 1..=count {
        let question = format!("Enter the name of Player {seat}: ");
        loop {
            names.push(prompt.ask(&question)?);
            match check_names(&names) {
                Ok(()) => break,
                Err(e) => {
                    names.pop();
                    prompt.say(&format!("{e}, please enter again."))?;
                }
            }
        }
    }
    Ok(names)
}

/// A game in progress: the table, who is deciding, and where rounds are logged.
#[derive(Debug)]
pub struct Game<R, W, L: Write> {
    table: Table,
    blinds: Blinds,
    decider: HotseatDecider<R, W>,
    log: Option<RoundLog<L>>,
    rounds: u32,
}

impl<R: BufRead, W: Write, L: Write> Game<R, W, L> {
    pub fn new(
        table: Table,
        blinds: Blinds,
        decider: HotseatDecider<R, W>,
        log: Option<RoundLog<L>>,
    ) -> Self {
        Self { table, blinds, decider, log, rounds: 0 }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// One player holds every chip.
    pub fn is_over(&self) -> bool {
        self.table.len() < MIN_PLAYERS
    }

    /// Play the next round from `deck`, record it and show the result.
    pub fn next_round(&mut self, deck: &mut Deck) -> Result<RoundReport, CliError> {
        let number = self.rounds + 1;
        let report = play_round(&mut self.table, deck, self.blinds, number, &mut self.decider)?;
        self.rounds = number;

        if let Some(log) = self.log.as_mut() {
            if let Err(e) = log.record_round(&report) {
                warn!("could not record round {number}: {e}");
            }
        }
        self.decider.show_report(&report)?;
        Ok(report)
    }

    /// Announce the champion and close the game.
    pub fn finish(mut self) -> Result<GameSummary, CliError> {
        let Some(winner) = self.table.champion() else {
            return Err(RoundError::NotEnoughPlayers(self.table.len()).into());
        };
        let summary = GameSummary {
            champion: winner.name().to_string(),
            chips: winner.chips(),
            rounds: self.rounds,
        };
        info!("{} wins after {} rounds", summary.champion, summary.rounds);

        if let Some(log) = self.log.as_mut() {
            if let Err(e) = log.record_champion(&summary.champion, summary.chips) {
                warn!("could not record the champion: {e}");
            }
        }
        let prompt = self.decider.prompt();
        prompt.clear_screen()?;
        prompt.say(&format!(
            "{} won the game with {} chips after {} rounds.",
            summary.champion, summary.chips, summary.rounds
        ))?;
        prompt.say("Game Over!")?;
        Ok(summary)
    }
}

/// Play a whole game at the terminal.
///
/// Rounds are dealt from decks seeded with `config.seed` (or a random seed)
/// plus the round number, so a seeded game deals the same cards every time.
pub fn run_game<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    output: W,
    clear: bool,
) -> Result<GameSummary, CliError> {
    config.validate()?;
    let mut prompt = Prompt::new(input, output).clearing(clear);
    let names = collect_names(&mut prompt, config)?;
    check_names(&names)?;

    let table = Table::with_names(names, config.starting_chips);
    let blinds = Blinds { small: config.small_blind, big: config.big_blind };
    let log: Option<RoundLog<File>> = match RoundLog::append_to(&config.log_path) {
        Ok(log) => Some(log),
        Err(e) => {
            warn!("cannot open {}: {e}", config.log_path.display());
            None
        }
    };

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("starting a {} player game with seed {seed}", table.len());

    let mut game = Game::new(table, blinds, HotseatDecider::new(prompt), log);
    while !game.is_over() {
        let mut deck = Deck::shuffled(seed.wrapping_add(u64::from(game.rounds() + 1)));
        game.next_round(&mut deck)?;
    }
    game.finish()
}
