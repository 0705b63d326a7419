//! Render-boundary snapshot types.
//!
//! The presentation layer polls these once per frame and owns nothing else:
//! a snapshot is a read-only copy of the point-in-time session state, so a
//! renderer can never observe a half-applied turn.

use arrayvec::ArrayVec;

use crate::board::RowList;
use crate::pieces::ShapeMatrix;
use crate::session::ActivePiece;
use slowtris_store::HighscoreEntry;
use slowtris_types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The active piece as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    /// 0 = empty, otherwise piece kind index + 1.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub score: u32,
    /// Rows currently flashing before removal (empty when none).
    pub flash_rows: RowList,
    pub name_entry: String,
    pub highscores: Vec<HighscoreEntry>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Title,
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            flash_rows: ArrayVec::new(),
            name_entry: String::new(),
            highscores: Vec::new(),
        }
    }
}
