//! # Localisation module
//!
//! Provides the rover's idea of where it is on the grid: an integer position
//! and a compass heading. The grid frame has `x` increasing to the east and
//! `y` increasing to the north.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A cell position in the grid frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Compass heading of the rover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    East,
    North,
    West,
    South,
}

/// The axis along which the rover travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    EastWest,
    NorthSouth,
}

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Headings in counter-clockwise order. Turning left moves one step forward
/// through this table, turning right one step back.
const CCW_ROTATION: [Heading; 4] = [Heading::East, Heading::North, Heading::West, Heading::South];

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Position {
    /// The landing position.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in the direction of the given heading.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.unit_vector();

        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Heading {
    /// Heading after a counter-clockwise quarter turn.
    pub fn left(self) -> Self {
        CCW_ROTATION[(self.rotation_index() + 1) % CCW_ROTATION.len()]
    }

    /// Heading after a clockwise quarter turn.
    pub fn right(self) -> Self {
        CCW_ROTATION[(self.rotation_index() + CCW_ROTATION.len() - 1) % CCW_ROTATION.len()]
    }

    /// The `(dx, dy)` offset of one step along this heading.
    pub fn unit_vector(self) -> (i64, i64) {
        match self {
            Heading::East => (1, 0),
            Heading::North => (0, 1),
            Heading::West => (-1, 0),
            Heading::South => (0, -1),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Heading::East | Heading::West => Axis::EastWest,
            Heading::North | Heading::South => Axis::NorthSouth,
        }
    }

    fn rotation_index(self) -> usize {
        match self {
            Heading::East => 0,
            Heading::North => 1,
            Heading::West => 2,
            Heading::South => 3,
        }
    }
}

impl Default for Heading {
    /// The rover always lands facing east.
    fn default() -> Self {
        Heading::East
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rotation() {
        assert_eq!(Heading::East.left(), Heading::North);
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.left(), Heading::South);
        assert_eq!(Heading::South.left(), Heading::East);

        assert_eq!(Heading::East.right(), Heading::South);
        assert_eq!(Heading::South.right(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
        assert_eq!(Heading::North.right(), Heading::East);

        for h in CCW_ROTATION.iter() {
            assert_eq!(h.left().right(), *h);
            assert_eq!(h.left().left().left().left(), *h);
        }
    }

    #[test]
    fn test_step() {
        let p = Position::ORIGIN;

        assert_eq!(p.step(Heading::East), Position::new(1, 0));
        assert_eq!(p.step(Heading::North), Position::new(0, 1));
        assert_eq!(p.step(Heading::West), Position::new(-1, 0));
        assert_eq!(p.step(Heading::South), Position::new(0, -1));

        assert_eq!(Heading::West.axis(), Axis::EastWest);
        assert_eq!(Heading::South.axis(), Axis::NorthSouth);
    }
}
