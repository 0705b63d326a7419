//! GameView: maps session snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). One screen is drawn per session phase:
//! title, play field, game over, highscores, and name entry.

use slowtris_core::pieces;
use slowtris_core::snapshot::SessionSnapshot;
use slowtris_types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, NAME_LEN};

use crate::fb::{FrameBuffer, Rgb, Style, TermCell};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Renders one frame per snapshot.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into a fresh framebuffer.
    pub fn render(&self, snapshot: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.fill(TermCell::default());

        match snapshot.phase {
            Phase::Title => self.draw_title(&mut fb),
            Phase::Play => self.draw_play(&mut fb, snapshot),
            Phase::GameOver => {
                self.draw_play(&mut fb, snapshot);
                self.draw_game_over_overlay(&mut fb);
            }
            Phase::Highscores => self.draw_highscores(&mut fb, snapshot),
            Phase::NameEntry => self.draw_name_entry(&mut fb, snapshot),
        }

        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer) {
        let title = Style::plain(Rgb::new(240, 240, 120), Rgb::new(0, 0, 0)).bold();
        let hint = Style::default();

        let mid = fb.height() / 2;
        fb.put_str_centered(mid.saturating_sub(3), "S L O W T R I S", title);
        fb.put_str_centered(
            mid.saturating_sub(2),
            "a turn-based falling block game",
            Style::default().dim(),
        );
        fb.put_str_centered(mid, "[Enter] Start", hint);
        fb.put_str_centered(mid + 1, "[H] Highscores", hint);
        fb.put_str_centered(mid + 2, "[Q] Quit", hint);
    }

    fn draw_play(&self, fb: &mut FrameBuffer, snapshot: &SessionSnapshot) {
        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let bg = Style::plain(Rgb::new(80, 80, 90), FIELD_BG);
        let border = Style::default();

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, with flashing rows drawn solid white.
        for y in 0..BOARD_HEIGHT as usize {
            let flashing = snapshot.flash_rows.contains(&y);
            for x in 0..BOARD_WIDTH as usize {
                let value = snapshot.board[y][x];
                if flashing {
                    let style = Style::plain(Rgb::new(255, 255, 255), FIELD_BG).bold();
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', style);
                } else if value > 0 {
                    if let Some(kind) = PieceKind::from_index(value as usize - 1) {
                        self.draw_piece_cell(fb, start_x, start_y, x as u16, y as u16, kind);
                    }
                } else {
                    let style = Style::plain(Rgb::new(90, 90, 100), FIELD_BG).dim();
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '·', style);
                }
            }
        }

        // Active piece.
        if let Some(active) = &snapshot.active {
            for (dx, dy) in active.shape.occupied() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_piece_cell(fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snapshot, start_x, start_y, frame_w);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn piece_style(&self, kind: PieceKind) -> Style {
        Style::plain(pieces::color(kind).into(), FIELD_BG).bold()
    }

    fn draw_piece_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        kind: PieceKind,
    ) {
        self.fill_cell(fb, start_x, start_y, cell_x, cell_y, '█', self.piece_style(kind));
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &SessionSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= fb.width() || fb.width() - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(kind) = snapshot.next {
            let shape = pieces::shape(kind);
            let style = self.piece_style(kind);
            for (dx, dy) in shape.occupied() {
                let px = panel_x + (dx as u16) * self.cell_w;
                let py = y + dy as u16;
                fb.fill_rect(px, py, self.cell_w, 1, '█', style);
            }
        }
    }

    fn draw_game_over_overlay(&self, fb: &mut FrameBuffer) {
        let style = Style::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid = fb.height() / 2;
        fb.put_str_centered(mid, " GAME OVER ", style);
        fb.put_str_centered(mid + 1, " [Enter] Title ", Style::default());
    }

    fn draw_highscores(&self, fb: &mut FrameBuffer, snapshot: &SessionSnapshot) {
        let header = Style::plain(Rgb::new(240, 240, 120), Rgb::new(0, 0, 0)).bold();
        let row_style = Style::default();

        let top = fb
            .height()
            .saturating_sub(snapshot.highscores.len() as u16 + 4)
            / 2;
        fb.put_str_centered(top, "HIGHSCORES", header);

        for (i, entry) in snapshot.highscores.iter().enumerate() {
            let line = format!("{:>2}. {:<4} {:>7}", i + 1, entry.name, entry.score);
            fb.put_str_centered(top + 2 + i as u16, &line, row_style);
        }

        let hint_y = top + 3 + snapshot.highscores.len() as u16;
        fb.put_str_centered(hint_y, "[Enter] Title", Style::default().dim());
    }

    fn draw_name_entry(&self, fb: &mut FrameBuffer, snapshot: &SessionSnapshot) {
        let header = Style::plain(Rgb::new(240, 240, 120), Rgb::new(0, 0, 0)).bold();
        let mid = fb.height() / 2;

        fb.put_str_centered(mid.saturating_sub(2), "NEW HIGHSCORE!", header);
        fb.put_str_centered(
            mid.saturating_sub(1),
            &format!("Score: {}", snapshot.score),
            Style::default(),
        );

        // Typed characters plus underscores for the free slots.
        let mut name = String::with_capacity(NAME_LEN);
        name.push_str(&snapshot.name_entry);
        while name.len() < NAME_LEN {
            name.push('_');
        }
        fb.put_str_centered(mid + 1, &name, Style::default().bold());
        fb.put_str_centered(mid + 3, "[Enter] Confirm", Style::default().dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slowtris_core::snapshot::SessionSnapshot;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| row_text(fb, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_title_screen_lists_controls() {
        let view = GameView::default();
        let snapshot = SessionSnapshot::default();
        let fb = view.render(&snapshot, Viewport::new(60, 24));

        let text = screen_text(&fb);
        assert!(text.contains("S L O W T R I S"));
        assert!(text.contains("[Enter] Start"));
        assert!(text.contains("[H] Highscores"));
    }

    #[test]
    fn test_play_screen_draws_board_frame_and_score() {
        let view = GameView::default();
        let mut snapshot = SessionSnapshot::default();
        snapshot.phase = Phase::Play;
        snapshot.score = 1234;
        let fb = view.render(&snapshot, Viewport::new(60, 24));

        let text = screen_text(&fb);
        assert!(text.contains('┌'));
        assert!(text.contains('┘'));
        assert!(text.contains("SCORE"));
        assert!(text.contains("1234"));
    }

    #[test]
    fn test_flash_rows_render_solid() {
        let view = GameView::default();
        let mut snapshot = SessionSnapshot::default();
        snapshot.phase = Phase::Play;
        snapshot.flash_rows.push(19);
        let fb = view.render(&snapshot, Viewport::new(60, 24));

        // The flashing row renders as a run of solid blocks.
        let text = screen_text(&fb);
        assert!(text.contains("████████████████████"));
    }

    #[test]
    fn test_name_entry_pads_with_underscores() {
        let view = GameView::default();
        let mut snapshot = SessionSnapshot::default();
        snapshot.phase = Phase::NameEntry;
        snapshot.name_entry.push_str("AB");
        let fb = view.render(&snapshot, Viewport::new(60, 24));

        assert!(screen_text(&fb).contains("AB__"));
    }

    #[test]
    fn test_game_over_overlay() {
        let view = GameView::default();
        let mut snapshot = SessionSnapshot::default();
        snapshot.phase = Phase::GameOver;
        let fb = view.render(&snapshot, Viewport::new(60, 24));

        assert!(screen_text(&fb).contains("GAME OVER"));
    }
}
