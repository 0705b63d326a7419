//! Persistence module - highscore table and its record store boundary.
//!
//! The simulation core only talks to the [`RecordStore`] trait; what backs
//! it (a file per record, or memory for tests) is the host's choice.

pub mod highscores;
pub mod kv;

pub use highscores::{HighscoreEntry, HighscoreTable, EMPTY_NAME, HIGHSCORE_KEY, TABLE_SIZE};
pub use kv::{FileStore, MemoryStore, RecordStore};
