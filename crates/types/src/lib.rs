//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Render/timer loop granularity (milliseconds)
pub const TICK_MS: u32 = 16;

/// Duration of the line-clear flash before rows are removed (milliseconds)
pub const FLASH_EFFECT_MS: u32 = 120;

/// Accepted side moves/rotations before gravity forces the piece down a row
pub const MOVES_PER_GRAVITY_STEP: u32 = 2;

/// Moves a resting piece survives before it locks
pub const LOCK_MOVE_LIMIT: u32 = 2;

/// Name entry length (characters)
pub const NAME_LEN: usize = 4;

/// Points awarded per simultaneous line clear, indexed by line count
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds, in catalog order (index 0..6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// All piece kinds in catalog order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    /// Catalog index (0..6)
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Kind for a catalog index
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_KINDS.get(index).copied()
    }

    /// Board cell value for this kind (`index + 1`, so 0 stays "empty")
    pub fn cell_value(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Title,
    Play,
    GameOver,
    Highscores,
    NameEntry,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Title => "title",
            Phase::Play => "play",
            Phase::GameOver => "gameOver",
            Phase::Highscores => "highscores",
            Phase::NameEntry => "nameEntry",
        }
    }
}

/// Symbolic input vocabulary accepted by the session.
///
/// The session is agnostic to the event source; a physical keyboard,
/// an on-screen button, or a translated touch gesture all arrive here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Left,
    Right,
    Down,
    RotateCw,
    RotateCcw,
    HardDrop,
    Confirm,
    ToggleHighscores,
    Backspace,
    /// Alphanumeric character input (name entry)
    Char(char),
}
