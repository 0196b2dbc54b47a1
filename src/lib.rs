//! holdem-rs: a simplified Texas Hold'em engine.
//!
//! Goals:
//! - A small, pure hand evaluator over 0..=7 cards
//! - A deterministic round state machine (blinds, single-pass betting, phase
//!   advances, showdown) behind a presentation port
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a hand
//! ```
//! use holdem_rs::cards::parse_cards;
//! use holdem_rs::evaluator::{evaluate, HandRank};
//!
//! let hand = parse_cards("Ah Ad").unwrap();
//! let community = parse_cards("Kc Qd Jh 3s 2c").unwrap();
//! let result = evaluate(&hand, &community);
//! assert_eq!(result.rank, HandRank::Pair);
//! assert_eq!(result.rank.label(), "Pair");
//! ```
//!
//! ## Play a table
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin holdem
//! ```
//! or drive a headless game through [`session::Session`] with your own
//! [`port::Presenter`].

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod port;
pub mod session;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
