//! Terminal input module.
//!
//! Maps `crossterm` key events into the symbolic [`slowtris_types::InputKey`]
//! vocabulary the session consumes. The session never sees raw key codes,
//! so an on-screen button or a touch translator could feed it the same
//! events.

pub mod map;

pub use slowtris_types as types;

pub use map::{should_quit, translate_key};
