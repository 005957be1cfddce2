//! Human-readable record of each round, one line per outcome.

use crate::format::join_long;
use crate::round::{RoundReport, RoundResult};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Lines describing how `report`'s round was won.
///
/// A single winner gets one "won" line. Players who tie for the best hand
/// each get a "split" line with their own cards.
pub fn round_lines(report: &RoundReport) -> Vec<String> {
    let n = report.number;
    match &report.result {
        RoundResult::FoldOut { winner } => {
            vec![format!("{winner} won round {n} because everyone else folded.")]
        }
        RoundResult::Showdown { standings } => {
            let best: Vec<_> = standings.iter().filter(|s| s.place == 0).collect();
            let verb = if best.len() > 1 { "split" } else { "won" };
            best.iter()
                .map(|s| {
                    format!(
                        "{} {verb} round {n} with {}, using the cards: {}",
                        s.name,
                        s.evaluation.rank,
                        join_long(&s.evaluation.best_five)
                    )
                })
                .collect()
        }
    }
}

pub fn champion_lines(name: &str, chips: u64) -> [String; 2] {
    [
        format!("{name} won the game!"),
        format!("{name} managed to win a total of {chips} chips. Congratulations!"),
    ]
}

/// Appends round outcomes to any writer.
#[derive(Debug)]
pub struct RoundLog<W: Write> {
    out: W,
}

impl RoundLog<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn append_to(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> RoundLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn record_round(&mut self, report: &RoundReport) -> io::Result<()> {
        self.write_lines(&round_lines(report))
    }

    pub fn record_champion(&mut self, name: &str, chips: u64) -> io::Result<()> {
        self.write_lines(&champion_lines(name, chips))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}
