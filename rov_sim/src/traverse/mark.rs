//! Marks left on the grid by the rover

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::loc::Axis;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Why a grid cell looks the way it does.
///
/// A mark belongs to a visit, not to a cell: the same cell can be marked
/// differently on each visit, see `render::merge` for how they are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Where the rover landed
    Start,

    /// Where the rover is now
    Current,

    /// Path in the east-west direction
    PathEw,

    /// Path in the north-south direction
    PathNs,

    /// A place where the rover turned or two paths cross
    Turn,

    /// A place where a sample was taken
    Sample,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Mark {
    /// The path mark left by driving along the given axis.
    pub fn path(axis: Axis) -> Self {
        match axis {
            Axis::EastWest => Mark::PathEw,
            Axis::NorthSouth => Mark::PathNs,
        }
    }

    /// The axis of a path mark, `None` for every other mark.
    pub fn path_axis(&self) -> Option<Axis> {
        match self {
            Mark::PathEw => Some(Axis::EastWest),
            Mark::PathNs => Some(Axis::NorthSouth),
            _ => None,
        }
    }

    pub fn is_path(&self) -> bool {
        self.path_axis().is_some()
    }

    /// Character used to draw this mark.
    pub fn glyph(&self) -> char {
        match self {
            Mark::Start => 'X',
            Mark::Current => '*',
            Mark::PathEw => '-',
            Mark::PathNs => '|',
            Mark::Turn => '+',
            Mark::Sample => 'S',
        }
    }
}
