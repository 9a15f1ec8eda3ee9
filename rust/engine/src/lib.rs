//! # gambit-engine: Board Game Rule Engine
//!
//! A turn-based rule engine for an 8x8 chess-style board. It owns the board,
//! validates requested moves against per-piece movement rules, applies the
//! accepted ones, detects terminal conditions and hands the turn over.
//! Choosing moves, rendering and storing game history are left to callers.
//!
//! ## Core Modules
//!
//! - [`board`] - Coordinates, cells and the 64-slot board over a piece arena
//! - [`pieces`] - Sides, piece kinds and per-piece bookkeeping
//! - [`rules`] - Movement legality per piece kind, path blocking and castling
//! - [`moves`] - Immutable records of applied moves
//! - [`player`] - Seats: a side plus human or automated control
//! - [`game`] - The game state machine and its single mutating entry point
//! - [`session`] - Thread-safe handle that serializes requests on one game
//! - [`config`] - Rule set and seat configuration from TOML and environment
//! - [`errors`] - Error and rejection types
//!
//! ## Quick Start
//!
//! ```rust
//! use gambit_engine::game::{Game, MoveOutcome};
//! use gambit_engine::errors::Rejection;
//! use gambit_engine::pieces::Side;
//! use gambit_engine::player::Player;
//!
//! let light = Player::human(Side::Light);
//! let dark = Player::human(Side::Dark);
//! let mut game = Game::new(light, dark).unwrap();
//!
//! // Light pawn double step
//! assert!(game.request_move(&light, 1, 4, 3, 4).unwrap().is_accepted());
//!
//! // Light cannot move twice in a row
//! let outcome = game.request_move(&light, 1, 3, 2, 3).unwrap();
//! assert!(matches!(
//!     outcome,
//!     MoveOutcome::Rejected(Rejection::NotPlayersTurn { .. })
//! ));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use gambit_engine::config::from_toml_str;
//! use gambit_engine::game::{Game, TurnPolicy};
//! use gambit_engine::rules::RuleSet;
//!
//! let cfg = from_toml_str("rules = \"baseline\"\nturn_policy = \"freeze_on_terminal\"").unwrap();
//! assert_eq!(cfg.rules, RuleSet::Baseline);
//! let game = Game::from_config(&cfg).unwrap();
//! assert_eq!(game.turn_policy(), TurnPolicy::FreezeOnTerminal);
//! ```

pub mod board;
pub mod config;
pub mod errors;
pub mod game;
pub mod moves;
pub mod pieces;
pub mod player;
pub mod rules;
pub mod session;
