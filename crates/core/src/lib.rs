//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 playfield with collision detection and row clearing
//! - [`pieces`]: tetromino shape matrices, colors, and rotation
//! - [`bag`]: 7-bag random piece generation for fair distribution
//! - [`session`]: the full state machine - phases, turns, scoring, game end
//! - [`snapshot`]: read-only state copies for the render boundary
//!
//! # Game Rules
//!
//! This is a turn-based variant: there is no free-running gravity clock.
//!
//! - **7-Bag Randomizer**: every 7 draws contain each piece kind once
//! - **Turn Gravity**: every second accepted move pulls the piece down a row
//! - **Lock Delay**: a resting piece survives 2 further turns before locking
//! - **Line Clears**: completed rows flash for 120 ms, then collapse
//! - **Scoring**: 100/300/500/800 points for 1/2/3/4 simultaneous rows
//! - **Highscores**: top-10 table, name entry on a qualifying game
//!
//! # Example
//!
//! ```
//! use slowtris_core::Session;
//! use slowtris_store::MemoryStore;
//! use slowtris_types::{InputKey, Phase};
//!
//! let mut session = Session::new(12345, Box::new(MemoryStore::new()));
//! assert_eq!(session.phase(), Phase::Title);
//!
//! // Confirm on the title screen starts a game.
//! session.handle_input(InputKey::Confirm);
//! assert_eq!(session.phase(), Phase::Play);
//!
//! session.handle_input(InputKey::Left);
//! session.handle_input(InputKey::HardDrop);
//!
//! // The renderer polls snapshots; it never mutates the session.
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.phase, Phase::Play);
//! ```

pub mod bag;
pub mod board;
pub mod pieces;
pub mod session;
pub mod snapshot;

pub use slowtris_types as types;

// Re-export commonly used types for convenience
pub use bag::{PieceBag, SimpleRng};
pub use board::{Board, RowList};
pub use pieces::{color, shape, spawn_x, ShapeMatrix};
pub use session::{line_clear_points, ActivePiece, PendingClear, Session};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
