//! Session module - the game state machine
//!
//! Owns the board, the piece bag, the active/next pieces, score, and the
//! pending line-clear flash, and drives every phase transition in response
//! to input events and the flash timer. Gravity is strictly turn-based:
//! the piece falls as a side effect of accepted player moves, never of
//! wall-clock time. The only timer-driven mutation is the line-clear
//! resolution in [`Session::tick`].

use arrayvec::ArrayVec;

use crate::bag::PieceBag;
use crate::board::{Board, RowList};
use crate::pieces::{self, ShapeMatrix};
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use slowtris_store::{HighscoreTable, RecordStore};
use slowtris_types::{
    InputKey, Phase, PieceKind, FLASH_EFFECT_MS, LINE_SCORES, LOCK_MOVE_LIMIT,
    MOVES_PER_GRAVITY_STEP, NAME_LEN,
};

/// Points awarded for clearing `lines` rows with one placement.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// The falling piece: kind, rotated shape copy, and board offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Working copy of the catalog shape; rotation replaces it in place.
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn position (centered, top row).
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = pieces::shape(kind);
        let x = pieces::spawn_x(&shape);
        Self { kind, shape, x, y: 0 }
    }

    /// Whether the piece fits the board at its current offset.
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_position(&self.shape, self.x, self.y)
    }

    /// Whether the piece cannot move down any further.
    pub fn is_resting(&self, board: &Board) -> bool {
        !board.is_valid_position(&self.shape, self.x, self.y + 1)
    }
}

/// A scheduled line-clear resolution.
///
/// At most one exists at a time: scheduling a new one replaces (cancels)
/// the previous schedule and carries a fresh token, so a stale resolution
/// can never fire against a board mutated after it was superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClear {
    /// Rows shown flashing until the timer resolves.
    pub rows: RowList,
    pub remaining_ms: u32,
    pub token: u32,
}

/// Complete session state: one owner for everything the game mutates.
pub struct Session {
    phase: Phase,
    board: Board,
    bag: PieceBag,
    current: Option<ActivePiece>,
    next: Option<PieceKind>,
    /// Accepted side moves/rotations since the last gravity step.
    move_count: u32,
    /// Turns survived while resting since the piece last touched down.
    lock_moves: u32,
    lock_move_limit: u32,
    score: u32,
    pending_clear: Option<PendingClear>,
    clear_token: u32,
    name_buffer: String,
    highscores: HighscoreTable,
    store: Box<dyn RecordStore>,
}

impl Session {
    /// Create a session on the title screen, loading persisted highscores.
    pub fn new(seed: u32, store: Box<dyn RecordStore>) -> Self {
        let highscores = HighscoreTable::load(store.as_ref());
        Self {
            phase: Phase::Title,
            board: Board::new(),
            bag: PieceBag::new(seed),
            current: None,
            next: None,
            move_count: 0,
            lock_moves: 0,
            lock_move_limit: LOCK_MOVE_LIMIT,
            score: 0,
            pending_clear: None,
            clear_token: 0,
            name_buffer: String::new(),
            highscores,
            store,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&ActivePiece> {
        self.current.as_ref()
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn name_buffer(&self) -> &str {
        &self.name_buffer
    }

    pub fn highscores(&self) -> &HighscoreTable {
        &self.highscores
    }

    pub fn pending_clear(&self) -> Option<&PendingClear> {
        self.pending_clear.as_ref()
    }

    /// Fill a caller-owned snapshot, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.phase = self.phase;
        self.board.write_u8_grid(&mut out.board);
        out.active = self.current.map(ActiveSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.flash_rows = match &self.pending_clear {
            Some(pending) => pending.rows.clone(),
            None => ArrayVec::new(),
        };
        out.name_entry.clear();
        out.name_entry.push_str(&self.name_buffer);
        out.highscores.clear();
        out.highscores.extend_from_slice(self.highscores.entries());
    }

    /// Point-in-time snapshot for the render boundary.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Process one discrete input event. All gameplay mutation happens
    /// synchronously in here; observers see pre- or post-turn state only.
    pub fn handle_input(&mut self, key: InputKey) {
        match self.phase {
            Phase::Title => match key {
                InputKey::Confirm => self.start_game(),
                InputKey::ToggleHighscores => self.phase = Phase::Highscores,
                _ => {}
            },
            Phase::Play => self.handle_play_input(key),
            Phase::GameOver | Phase::Highscores => {
                if key == InputKey::Confirm {
                    self.phase = Phase::Title;
                }
            }
            Phase::NameEntry => self.handle_name_entry_input(key),
        }
    }

    /// Advance the flash timer. This is the only timer-driven mutation:
    /// when the pending line-clear comes due, the rows are removed and the
    /// next piece spawns.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Play {
            return;
        }

        let due = match self.pending_clear.as_mut() {
            Some(pending) => {
                pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
                pending.remaining_ms == 0
            }
            None => false,
        };

        if !due {
            return;
        }
        if let Some(pending) = self.pending_clear.take() {
            self.board.clear_rows(&pending.rows);
            self.spawn_next();
        }
    }

    fn start_game(&mut self) {
        self.board.clear();
        self.bag.reset();
        self.next = Some(self.bag.draw());
        self.score = 0;
        self.move_count = 0;
        self.lock_moves = 0;
        self.lock_move_limit = LOCK_MOVE_LIMIT;
        self.pending_clear = None;
        self.phase = Phase::Play;
        self.spawn_next();
    }

    /// One Play-phase turn. Mirrors the turn-based ruleset: resolve the
    /// move, let the move counter pull the piece down every second accepted
    /// move, then update lock-delay bookkeeping.
    fn handle_play_input(&mut self, key: InputKey) {
        // A pending flash freezes gameplay; only the timer resolves it.
        if self.pending_clear.is_some() {
            return;
        }
        let Some(mut piece) = self.current else {
            return;
        };

        let was_resting = piece.is_resting(&self.board);
        let mut moved = false;
        let mut manual_down = false;

        match key {
            InputKey::Left => {
                if self.board.is_valid_position(&piece.shape, piece.x - 1, piece.y) {
                    piece.x -= 1;
                    moved = true;
                }
            }
            InputKey::Right => {
                if self.board.is_valid_position(&piece.shape, piece.x + 1, piece.y) {
                    piece.x += 1;
                    moved = true;
                }
            }
            InputKey::Down => {
                if self.board.is_valid_position(&piece.shape, piece.x, piece.y + 1) {
                    piece.y += 1;
                    moved = true;
                    manual_down = true;
                } else {
                    // Soft drop against the floor locks in place.
                    self.lock_piece(piece);
                    return;
                }
            }
            InputKey::RotateCw => {
                let rotated = piece.shape.rotated_cw();
                if self.board.is_valid_position(&rotated, piece.x, piece.y) {
                    piece.shape = rotated;
                    moved = true;
                }
            }
            InputKey::RotateCcw => {
                let rotated = piece.shape.rotated_ccw();
                if self.board.is_valid_position(&rotated, piece.x, piece.y) {
                    piece.shape = rotated;
                    moved = true;
                }
            }
            // Enter and the dedicated drop key both hard-drop during play.
            InputKey::HardDrop | InputKey::Confirm => {
                while self.board.is_valid_position(&piece.shape, piece.x, piece.y + 1) {
                    piece.y += 1;
                }
                self.lock_piece(piece);
                return;
            }
            _ => {}
        }

        if !moved {
            return;
        }

        // Turn-based gravity: every second accepted side move/rotation
        // forces the piece down one row. A manual down restarts the count.
        if manual_down {
            self.move_count = 0;
        } else {
            self.move_count += 1;
            if self.move_count >= MOVES_PER_GRAVITY_STEP {
                if self.board.is_valid_position(&piece.shape, piece.x, piece.y + 1) {
                    piece.y += 1;
                }
                self.move_count = 0;
            }
        }

        // Lock delay, counted in turns while resting.
        if piece.is_resting(&self.board) {
            if was_resting {
                self.lock_moves += 1;
            } else {
                self.lock_moves = 0;
            }
            if self.lock_moves >= self.lock_move_limit {
                self.lock_piece(piece);
                return;
            }
        } else {
            // Slid off a ledge: pull the piece back down one row.
            if was_resting && self.board.is_valid_position(&piece.shape, piece.x, piece.y + 1) {
                piece.y += 1;
            }
            self.lock_moves = 0;
        }

        self.current = Some(piece);
    }

    fn handle_name_entry_input(&mut self, key: InputKey) {
        match key {
            InputKey::Backspace => {
                self.name_buffer.pop();
            }
            InputKey::Char(c) => {
                if self.name_buffer.len() < NAME_LEN && c.is_ascii_alphanumeric() {
                    self.name_buffer.push(c.to_ascii_uppercase());
                }
            }
            InputKey::Confirm => {
                if !self.name_buffer.is_empty() {
                    let name = format!("{:-<width$}", self.name_buffer, width = NAME_LEN);
                    self.highscores.insert(&name, self.score);
                    // Gameplay never aborts over persistence; a failed write
                    // just means the next load sees the old table.
                    let _ = self.highscores.persist(self.store.as_mut());
                    self.phase = Phase::Highscores;
                }
            }
            _ => {}
        }
    }

    /// Write the piece into the board and resolve the lock sequence:
    /// either spawn immediately, or flash the completed rows first.
    fn lock_piece(&mut self, piece: ActivePiece) {
        self.board.place(&piece.shape, piece.x, piece.y, piece.kind);
        self.current = None;

        let full = self.board.full_rows();
        if full.is_empty() {
            self.spawn_next();
        } else {
            self.score += line_clear_points(full.len());
            self.schedule_clear(full);
        }
    }

    fn schedule_clear(&mut self, rows: RowList) {
        self.clear_token = self.clear_token.wrapping_add(1);
        self.pending_clear = Some(PendingClear {
            rows,
            remaining_ms: FLASH_EFFECT_MS,
            token: self.clear_token,
        });
    }

    /// Promote the queued piece to active, queue a fresh one, and check the
    /// spawn position; a blocked spawn ends the game.
    fn spawn_next(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.bag.draw(),
        };
        self.next = Some(self.bag.draw());

        let piece = ActivePiece::spawn(kind);
        self.move_count = 0;
        self.current = Some(piece);

        if !piece.is_valid(&self.board) {
            self.finish_game();
        }
    }

    /// The board is full at the spawn point: route to name entry when the
    /// final score makes the table, otherwise to the game-over screen.
    fn finish_game(&mut self) {
        if self.highscores.qualifies(self.score) {
            self.name_buffer.clear();
            self.phase = Phase::NameEntry;
        } else {
            self.phase = Phase::GameOver;
        }
    }
}
