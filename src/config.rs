use std::collections::HashSet;
use std::path::PathBuf;

pub const MIN_PLAYERS: usize = 2;
/// Seats at the table.
pub const MAX_PLAYERS: usize = 10;

pub const DEFAULT_STARTING_CHIPS: u64 = 50;
pub const DEFAULT_SMALL_BLIND: u64 = 1;
pub const DEFAULT_BIG_BLIND: u64 = 2;
pub const DEFAULT_LOG_PATH: &str = "game_stats.txt";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("player count must be between 2 and 10, got {0}")]
    PlayerCount(usize),
    #[error("{names} names given for {players} players")]
    NameCount { names: usize, players: usize },
    #[error("player names must not be empty")]
    EmptyName,
    #[error("player name '{0}' is used twice")]
    DuplicateName(String),
    #[error("blinds must satisfy 0 < small ({small}) <= big ({big})")]
    Blinds { small: u64, big: u64 },
    #[error("starting chips ({chips}) must cover the big blind ({big})")]
    StartingChips { chips: u64, big: u64 },
}

/// Game settings. Anything left unset is asked for interactively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub players: Option<usize>,
    pub names: Vec<String>,
    pub starting_chips: u64,
    pub small_blind: u64,
    pub big_blind: u64,
    pub log_path: PathBuf,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: None,
            names: Vec::new(),
            starting_chips: DEFAULT_STARTING_CHIPS,
            small_blind: DEFAULT_SMALL_BLIND,
            big_blind: DEFAULT_BIG_BLIND,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(n) = self.players {
            check_player_count(n)?;
            if !self.names.is_empty() && self.names.len() != n {
                return Err(ConfigError::NameCount { names: self.names.len(), players: n });
            }
        }
        if !self.names.is_empty() {
            check_player_count(self.names.len())?;
            check_names(&self.names)?;
        }
        if self.small_blind == 0 || self.small_blind > self.big_blind {
            return Err(ConfigError::Blinds { small: self.small_blind, big: self.big_blind });
        }
        if self.starting_chips < self.big_blind {
            return Err(ConfigError::StartingChips {
                chips: self.starting_chips,
                big: self.big_blind,
            });
        }
        Ok(())
    }
}

pub fn check_player_count(n: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount(n))
    }
}

/// Names must be non-blank and unique.
pub fn check_names<S: AsRef<str>>(names: &[S]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in names.iter().map(|n| n.as_ref().trim()) {
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateName(name.to_string()));
        }
    }
    Ok(())
}
