//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any size change) is a full redraw; subsequent
//! frames only rewrite cells that differ from the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        let mut style: Option<Style> = None;
        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            for y in 0..fb.height() {
                self.stdout.queue(cursor::MoveTo(0, y))?;
                for x in 0..fb.width() {
                    let cell = fb.get(x, y).unwrap_or_default();
                    if style != Some(cell.style) {
                        self.apply_style(cell.style)?;
                        style = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                }
            }
        } else if let Some(prev) = &self.last {
            // Rewrite only changed cells; moving the cursor per cell keeps
            // this simple and the diff is small frame to frame.
            let mut changes = Vec::new();
            for y in 0..fb.height() {
                for x in 0..fb.width() {
                    let cell = fb.get(x, y).unwrap_or_default();
                    if prev.get(x, y).unwrap_or_default() != cell {
                        changes.push((x, y, cell));
                    }
                }
            }
            for (x, y, cell) in changes {
                self.stdout.queue(cursor::MoveTo(x, y))?;
                if style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last = Some(fb.clone());
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
