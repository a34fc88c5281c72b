//! # Traverse module
//!
//! The traverse is the rover's record of where it has been. It holds two
//! parallel histories: every visited position, and the mark made on each
//! visit. The histories are append-only, except that the mark of the most
//! recent visit may be amended (a turn or a sample at the current position).

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod mark;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
pub use mark::*;
use crate::loc::Position;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Position and mark histories of a rover.
///
/// Both histories always have the same, non-zero, length. The first entry is
/// the landing site at the origin marked with [`Mark::Start`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traverse {
    positions: Vec<Position>,
    marks: Vec<Mark>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Traverse {
    /// Create a new traverse containing only the landing site.
    pub fn new() -> Self {
        Self {
            positions: vec![Position::ORIGIN],
            marks: vec![Mark::Start],
        }
    }

    /// Record a visit to a new position.
    pub fn push(&mut self, position: Position, mark: Mark) {
        self.positions.push(position);
        self.marks.push(mark);
    }

    /// Replace the mark of the most recent visit with the result of `f`.
    pub fn amend_last<F>(&mut self, f: F)
    where
        F: FnOnce(Mark) -> Mark,
    {
        // The histories are never empty
        if let Some(m) = self.marks.last_mut() {
            *m = f(*m);
        }
    }

    /// Mark of the most recent visit.
    pub fn last_mark(&self) -> Mark {
        self.marks[self.marks.len() - 1]
    }

    /// Position of the most recent visit.
    pub fn current_position(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of visits, including the landing.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false, a traverse contains at least the landing site.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over visits in chronological order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (Position, Mark)> + ExactSizeIterator + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.marks.iter().copied())
    }
}

impl Default for Traverse {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_traverse() {
        let t = Traverse::new();

        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.positions(), &[Position::ORIGIN]);
        assert_eq!(t.marks(), &[Mark::Start]);
        assert_eq!(t.current_position(), Position::ORIGIN);
    }

    #[test]
    fn test_amend_last() {
        let mut t = Traverse::new();
        t.push(Position::new(1, 0), Mark::PathEw);
        t.push(Position::new(2, 0), Mark::PathEw);

        t.amend_last(|_| Mark::Turn);

        assert_eq!(t.marks(), &[Mark::Start, Mark::PathEw, Mark::Turn]);
        assert_eq!(t.last_mark(), Mark::Turn);
        assert_eq!(t.current_position(), Position::new(2, 0));
        assert_eq!(t.len(), 3);

        let visits: Vec<_> = t.iter().rev().collect();
        assert_eq!(visits[0], (Position::new(2, 0), Mark::Turn));
        assert_eq!(visits[2], (Position::ORIGIN, Mark::Start));
    }

    #[test]
    fn test_mark_glyphs() {
        let glyphs: String = [
            Mark::Start,
            Mark::Current,
            Mark::PathEw,
            Mark::PathNs,
            Mark::Turn,
            Mark::Sample,
        ]
        .iter()
        .map(Mark::glyph)
        .collect();

        assert_eq!(glyphs, "X*-|+S");
        assert!(Mark::PathNs.is_path());
        assert!(!Mark::Turn.is_path());
    }
}
