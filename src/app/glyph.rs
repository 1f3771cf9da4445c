use crossterm::style::{Color, Stylize};

use std::fmt;

/// What one character slot of the rendered maze shows.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Glyph {
    #[default]
    Empty,
    Wall,
    /// Part of the path currently being explored.
    Path,
    /// Explored and abandoned.
    Backtrack,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Empty => "  ".with(Color::Reset),
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Path => "🟥".with(Color::Red),
            Glyph::Backtrack => "▒▒".with(Color::DarkGrey),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Character-slot picture of a maze, `2 * cols + 1` by `2 * rows + 1`.
/// Cell `(x, y)` sits at `(2x + 1, 2y + 1)`; walls and corners fill the slots between.
pub struct GlyphBuffer {
    data: Box<[Glyph]>,
    width: u16,
    height: u16,
}

impl GlyphBuffer {
    pub fn new(col_count: u16, row_count: u16) -> Self {
        let width = col_count.saturating_mul(2).saturating_add(1);
        let height = row_count.saturating_mul(2).saturating_add(1);
        let mut buffer = GlyphBuffer {
            data: vec![Glyph::Wall; width as usize * height as usize].into_boxed_slice(),
            width,
            height,
        };
        for y in 0..row_count as i32 {
            for x in 0..col_count as i32 {
                buffer.set(Self::cell_slot(x, y), Glyph::Empty);
            }
        }
        buffer
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_slot(x: i32, y: i32) -> (i32, i32) {
        (x * 2 + 1, y * 2 + 1)
    }

    /// Slot of the wall between two adjacent cell locations. The second one may
    /// lie off the grid, which gives an outer wall.
    pub fn between(a: (i32, i32), b: (i32, i32)) -> (i32, i32) {
        (a.0 + b.0 + 1, a.1 + b.1 + 1)
    }

    fn ravel_index(&self, slot: (i32, i32)) -> Option<usize> {
        let (x, y) = slot;
        ((0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y))
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Sets a slot and reports whether it changed. Slots off the buffer are ignored.
    pub fn set(&mut self, slot: (i32, i32), glyph: Glyph) -> bool {
        match self.ravel_index(slot) {
            Some(idx) if self.data[idx] != glyph => {
                self.data[idx] = glyph;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, slot: (i32, i32)) -> Option<Glyph> {
        self.ravel_index(slot).map(|idx| self.data[idx])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        self.data.chunks(self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_closed_cells() {
        let buffer = GlyphBuffer::new(2, 1);
        assert_eq!((buffer.width(), buffer.height()), (5, 3));
        assert_eq!(buffer.get((1, 1)), Some(Glyph::Empty));
        assert_eq!(buffer.get((3, 1)), Some(Glyph::Empty));
        assert_eq!(buffer.get((2, 1)), Some(Glyph::Wall));
        assert_eq!(buffer.get((0, 0)), Some(Glyph::Wall));
        assert_eq!(buffer.get((5, 0)), None);
    }

    #[test]
    fn test_between_cells() {
        assert_eq!(GlyphBuffer::between((0, 0), (1, 0)), (2, 1));
        assert_eq!(GlyphBuffer::between((1, 1), (1, 0)), (3, 2));
        // Top wall of (0,0) sits towards the off-grid (0,-1)
        assert_eq!(GlyphBuffer::between((0, 0), (0, -1)), (1, 0));
    }

    #[test]
    fn test_set_reports_change() {
        let mut buffer = GlyphBuffer::new(1, 1);
        assert!(buffer.set((1, 0), Glyph::Empty));
        assert!(!buffer.set((1, 0), Glyph::Empty));
        assert!(!buffer.set((-1, 0), Glyph::Empty));
    }
}
