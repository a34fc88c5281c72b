//! Painted grid of marks

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use std::fmt;
use util::raise_error;

// Internal
use super::{merge, Bounds, LineEnding};
use crate::loc::Position;
use crate::traverse::{Mark, Traverse};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Character drawn in cells the rover never visited.
pub const BLANK: char = ' ';

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A grid covering the bounds of a traverse with the resolved mark of every
/// visited cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    bounds: Bounds,

    /// Row-major cells, row 0 is the most northern
    cells: Vec<Option<Mark>>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Canvas {
    /// Paint the traverse onto a new canvas.
    ///
    /// The most recent visit is marked [`Mark::Current`] whatever it recorded.
    /// Visits are painted newest first, each one merged with what newer visits
    /// left in the cell.
    pub fn paint(traverse: &Traverse) -> Self {
        let bounds = match Bounds::from_positions(traverse.positions()) {
            Some(b) => b,
            None => raise_error!("Cannot paint a traverse with no positions"),
        };

        let mut canvas = Canvas {
            bounds,
            cells: vec![None; bounds.width() * bounds.height()],
        };

        let last = traverse.len() - 1;

        for (i, (position, mark)) in traverse.iter().enumerate().rev() {
            let mark = if i == last { Mark::Current } else { mark };

            if let Some(idx) = canvas.cell_index(position) {
                canvas.cells[idx] = Some(merge(canvas.cells[idx], mark));
            }
        }

        canvas
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The resolved mark at a position, `None` if the position was never
    /// visited or lies outside the canvas.
    pub fn mark_at(&self, position: Position) -> Option<Mark> {
        self.cell_index(position).and_then(|idx| self.cells[idx])
    }

    /// Draw the canvas as text, terminating every row with the line ending.
    pub fn to_string_with(&self, line_ending: LineEnding) -> String {
        let width = self.bounds.width();
        let eol = line_ending.as_str();

        let mut s = String::with_capacity(self.cells.len() + self.bounds.height() * eol.len());

        for row in self.cells.chunks(width) {
            s.extend(row.iter().map(|c| c.map_or(BLANK, |m| m.glyph())));
            s.push_str(eol);
        }

        s
    }

    fn cell_index(&self, position: Position) -> Option<usize> {
        self.bounds
            .to_cell(position)
            .map(|(row, col)| row * self.bounds.width() + col)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(LineEnding::Platform))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_paint() {
        let mut traverse = Traverse::new();
        traverse.push(Position::new(1, 0), Mark::Turn);
        traverse.push(Position::new(1, 1), Mark::Sample);

        let canvas = Canvas::paint(&traverse);

        assert_eq!(canvas.mark_at(Position::new(0, 0)), Some(Mark::Start));
        assert_eq!(canvas.mark_at(Position::new(1, 0)), Some(Mark::Turn));
        // The newest visit is always the current position
        assert_eq!(canvas.mark_at(Position::new(1, 1)), Some(Mark::Current));
        // Inside the bounds but never visited
        assert_eq!(canvas.mark_at(Position::new(0, 1)), None);
        assert_eq!(canvas.mark_at(Position::new(5, 5)), None);

        assert_eq!(canvas.to_string_with(LineEnding::Lf), " *\nX+\n");
        assert_eq!(canvas.to_string_with(LineEnding::Crlf), " *\r\nX+\r\n");
    }

    #[test]
    fn test_paint_landing_only() {
        let canvas = Canvas::paint(&Traverse::new());

        assert_eq!(canvas.mark_at(Position::ORIGIN), Some(Mark::Current));
        assert_eq!(canvas.to_string_with(LineEnding::Lf), "*\n");
    }
}
