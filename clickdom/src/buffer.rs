//! Cell grid that a frame is drawn into before being diffed onto the screen.

use crate::style::{Rgb, TextStyle};
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width symbol drawn in the cell before.
    pub continuation: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        symbol: ' ',
        fg: Rgb::WHITE,
        bg: Rgb::BLACK,
        style: TextStyle::new(),
        continuation: false,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Pen used by [`Buffer::put_str`]. `bg: None` keeps whatever background the
/// cells already have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ink {
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub style: TextStyle,
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    rows: Vec<Vec<Cell>>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::BLANK; width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.rows.get(y as usize)?.get(x as usize)
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.rows.get_mut(y as usize)?.get_mut(x as usize)
    }

    /// Write `text` on row `y` from column `x`, never past column `limit`.
    /// Returns the column after the last symbol written.
    pub fn put_str(&mut self, x: u16, y: u16, limit: u16, text: &str, ink: Ink) -> u16 {
        let limit = limit.min(self.width);
        let mut col = x;

        for symbol in text.chars() {
            let span = char_width(symbol).max(1) as u16;
            if col.saturating_add(span) > limit {
                break;
            }
            for offset in 0..span {
                if let Some(cell) = self.get_mut(col + offset, y) {
                    cell.symbol = if offset == 0 { symbol } else { ' ' };
                    cell.continuation = offset > 0;
                    cell.fg = ink.fg;
                    cell.bg = ink.bg.unwrap_or(cell.bg);
                    cell.style = ink.style;
                }
            }
            col += span;
        }

        col
    }

    /// The symbols of one row, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let Some(row) = self.rows.get(y as usize) else {
            return String::new();
        };
        let text: String = row
            .iter()
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.symbol)
            .collect();
        text.trim_end().to_string()
    }

    /// Cells that differ from `previous`, row by row.
    pub fn changes<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.rows
            .iter()
            .zip(&previous.rows)
            .enumerate()
            .flat_map(|(y, (row, old))| {
                row.iter()
                    .zip(old)
                    .enumerate()
                    .filter(|(_, (cell, before))| cell != before)
                    .map(move |(x, (cell, _))| (x as u16, y as u16, cell))
            })
    }

    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::BLANK);
        }
    }
}
