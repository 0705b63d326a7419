//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: session snapshots are drawn into
//! a simple framebuffer of styled character cells, which is flushed to the
//! terminal with a diffing backend. No widget/layout framework involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - One screen per session phase, all derived from the snapshot alone
//! - Precise control over aspect ratio (e.g. 2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use slowtris_core as core;
pub use slowtris_types as types;

pub use fb::{FrameBuffer, Rgb, Style, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
