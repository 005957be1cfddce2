//! hotseat-holdem: pass-the-keyboard Texas Hold'em for the terminal
//!
//! The library half is the part worth reusing:
//! - [`evaluator`] ranks any 5 to 7 distinct cards into a totally ordered [`evaluator::HandRank`]
//! - [`showdown`] compares ranks and groups tied players
//! - [`pot`] splits contributions into main and side pots and pays them out
//! - [`table`] and [`round`] move the button, post blinds and run the betting
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use hotseat_holdem::evaluator::{evaluate_hand, Category};
//! use hotseat_holdem::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "As Ah".parse().unwrap();
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//!
//! let eval = evaluate_hand(&hole, &board).unwrap();
//! assert_eq!(eval.rank.category(), Category::Pair);
//! assert_eq!(eval.rank.to_string(), "a pair of Aces");
//! ```
//!
//! ## Settling a pot with an all-in player
//! ```
//! use hotseat_holdem::pot::{settle, Contributions, Outcome};
//!
//! let contributions = Contributions::from([(0, 50), (1, 100), (2, 100)]);
//! // player 0 has the best hand but only covered the main pot
//! let paid = settle(&contributions, &Outcome::Showdown(vec![vec![0], vec![1], vec![2]])).unwrap();
//! assert_eq!(paid.award(0), 150);
//! assert_eq!(paid.award(1), 100);
//! ```
//!
//! ## Playing
//! ```sh
//! cargo run --bin hotseat-holdem -- --players 3
//! ```

pub mod cards;
pub mod cli;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod format;
pub mod hand;
pub mod history;
pub mod pot;
pub mod round;
pub mod showdown;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
