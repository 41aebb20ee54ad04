//! Cell-buffer renderer
//!
//! Maps the 640x480 game field onto whatever terminal grid is available,
//! draws into a back buffer, and flushes it as one queued batch per frame.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute, queue,
    style::{Print, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use game_core::{Aabb, Color, DisplaySurface, Params};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::BLACK,
};

/// Maps game coordinates (origin top-left, y down) onto terminal cells.
#[derive(Debug, Clone, Copy)]
struct Grid {
    cols: u16,
    rows: u16,
}

impl Grid {
    fn col(&self, x: f32) -> Option<u16> {
        let col = (x * self.cols as f32 / Params::SCREEN_WIDTH).floor();
        (col >= 0.0 && col < self.cols as f32).then(|| col as u16)
    }

    fn row(&self, y: f32) -> Option<u16> {
        let row = (y * self.rows as f32 / Params::SCREEN_HEIGHT).floor();
        (row >= 0.0 && row < self.rows as f32).then(|| row as u16)
    }

    /// Columns covered by the span `[min_x, max_x)`, clamped to the grid
    fn col_span(&self, min_x: f32, max_x: f32) -> std::ops::Range<u16> {
        let scale = self.cols as f32 / Params::SCREEN_WIDTH;
        let start = ((min_x * scale).floor().max(0.0) as u16).min(self.cols);
        let end = ((max_x * scale).ceil().max(0.0) as u16).min(self.cols);
        start.min(end)..end
    }

    fn row_span(&self, min_y: f32, max_y: f32) -> std::ops::Range<u16> {
        let scale = self.rows as f32 / Params::SCREEN_HEIGHT;
        let start = ((min_y * scale).floor().max(0.0) as u16).min(self.rows);
        let end = ((max_y * scale).ceil().max(0.0) as u16).min(self.rows);
        start.min(end)..end
    }

    /// Game-space position of a cell's center
    fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * Params::SCREEN_WIDTH / self.cols as f32,
            (row as f32 + 0.5) * Params::SCREEN_HEIGHT / self.rows as f32,
        )
    }
}

/// Terminal-backed display surface
///
/// Owns the terminal for its lifetime: raw mode and the alternate screen
/// are acquired in `new` and released on drop, including on panic unwind.
pub struct TermSurface {
    out: Stdout,
    grid: Grid,
    cells: Vec<Cell>,
}

impl TermSurface {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("could not enable raw mode")?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)
            .context("could not enter the alternate screen")?;
        let (cols, rows) = terminal::size().context("could not query the terminal size")?;
        log::debug!("terminal surface is {cols}x{rows} cells");

        Ok(Self {
            out,
            grid: Grid { cols, rows },
            cells: vec![BLANK; cols as usize * rows as usize],
        })
    }

    fn set(&mut self, col: u16, row: u16, ch: char, color: Color) {
        if col < self.grid.cols && row < self.grid.rows {
            self.cells[row as usize * self.grid.cols as usize + col as usize] =
                Cell { ch, color };
        }
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        let mut last_color = None;
        for row in 0..self.grid.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            for col in 0..self.grid.cols {
                let cell = self.cells[row as usize * self.grid.cols as usize + col as usize];
                if last_color != Some(cell.color) {
                    queue!(
                        self.out,
                        SetForegroundColor(crossterm::style::Color::Rgb {
                            r: cell.color.r,
                            g: cell.color.g,
                            b: cell.color.b,
                        })
                    )?;
                    last_color = Some(cell.color);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        self.out.flush()
    }
}

impl DisplaySurface for TermSurface {
    fn clear(&mut self, color: Color) {
        self.cells.fill(Cell { ch: ' ', color });
    }

    fn draw_rect(&mut self, rect: Aabb, color: Color) {
        for row in self.grid.row_span(rect.min.y, rect.max.y) {
            for col in self.grid.col_span(rect.min.x, rect.max.x) {
                self.set(col, row, '█', color);
            }
        }
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        for row in self.grid.row_span(center.y - radius, center.y + radius) {
            for col in self.grid.col_span(center.x - radius, center.x + radius) {
                if self.grid.cell_center(col, row).distance(center) <= radius {
                    self.set(col, row, '█', color);
                }
            }
        }
        // A small ball can fall between cell centers; never let it vanish.
        if let (Some(col), Some(row)) = (self.grid.col(center.x), self.grid.row(center.y)) {
            self.set(col, row, '█', color);
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        let (Some(start), Some(row)) = (self.grid.col(pos.x), self.grid.row(pos.y)) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            self.set(start + i as u16, row, ch, color);
        }
    }

    fn present(&mut self) {
        if let Err(err) = self.flush_frame() {
            log::error!("dropping frame: {err}");
        }
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
