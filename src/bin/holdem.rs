//! Pass-the-keyboard Texas Hold'em.
use anyhow::Result;
use clap::Parser;
use log::{error, LevelFilter};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use hotseat_holdem::cli::run_game;
use hotseat_holdem::config::{self, GameConfig};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Number of players, asked for when not given.
    #[clap(long, short, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: Option<u8>,
    /// A player name, once per seat in seating order.
    #[clap(long = "name", short)]
    names: Vec<String>,
    /// Chips each player starts with.
    #[clap(long, short, default_value_t = config::DEFAULT_STARTING_CHIPS)]
    chips: u64,
    /// The small blind.
    #[clap(long, default_value_t = config::DEFAULT_SMALL_BLIND)]
    small_blind: u64,
    /// The big blind.
    #[clap(long, default_value_t = config::DEFAULT_BIG_BLIND)]
    big_blind: u64,
    /// File the round results are appended to.
    #[clap(long, default_value = config::DEFAULT_LOG_PATH)]
    log_file: PathBuf,
    /// Seed for the shuffles, random when not given.
    #[clap(long)]
    seed: Option<u64>,
    /// Keep earlier turns on screen instead of clearing between players.
    #[clap(long)]
    no_clear: bool,
    /// Log more, repeat for debug output.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            players: self.players.map(usize::from),
            names: self.names.clone(),
            starting_chips: self.chips,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            log_path: self.log_file.clone(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let clear = !cli.no_clear && io::stdout().is_terminal();
    let stdin = io::stdin().lock();
    match run_game(&cli.config(), stdin, io::stdout(), clear) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("{e}");
            Err(e.into())
        }
    }
}
