//! Bounding box of a traverse

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

use crate::loc::Position;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The smallest axis-aligned rectangle containing a set of positions.
///
/// All limits are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Bounds {
    /// Compute the bounds of the given positions, or `None` if there are no
    /// positions.
    pub fn from_positions(positions: &[Position]) -> Option<Self> {
        let first = positions.first()?;

        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(positions.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        (self.max_y - self.min_y + 1) as usize
    }

    pub fn contains(&self, position: Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }

    /// Convert a position into a `(row, column)` cell. Row 0 is the most
    /// northern row, column 0 the most western.
    pub fn to_cell(&self, position: Position) -> Option<(usize, usize)> {
        if !self.contains(position) {
            return None;
        }

        Some((
            (self.max_y - position.y) as usize,
            (position.x - self.min_x) as usize,
        ))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
