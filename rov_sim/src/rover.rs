//! # Rover module
//!
//! The rover drives around the grid under [`Tc`] commands, recording every
//! visited cell and the mark left there in its [`Traverse`].
//!
//! The rover always lands at the origin facing east. Commands can be given as
//! a string when the rover is created, or by calling the command methods
//! directly, both of which produce the same traverse:
//!
//! ```
//! use rov_lib::rover::Rover;
//!
//! let mut rover = Rover::new("ssss").unwrap();
//! rover.turn_left().move_forward().move_forward();
//!
//! assert_eq!(rover.path(), "    *\n    |\nX---+\n".replace('\n', rov_lib::render::PLATFORM_LINE_ENDING));
//! ```

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{trace, warn};

// Internal
use crate::loc::{Heading, Position};
use crate::render;
use crate::traverse::{Mark, Traverse};
use comms_if::tc::{Tc, TcParseError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A simulated rover.
///
/// Not thread safe: a rover must be driven from one place at a time.
#[derive(Debug, Clone, Default)]
pub struct Rover {
    heading: Heading,
    position: Position,
    traverse: Traverse,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Rover {
    /// Land a new rover and execute the given command string.
    ///
    /// If any character isn't a recognised command no rover is created, the
    /// command string is rejected as a whole.
    pub fn new(cmds: &str) -> Result<Self, TcParseError> {
        let tcs = match Tc::parse_seq(cmds) {
            Ok(t) => t,
            Err(e) => {
                warn!("Rejected command string \"{}\": {}", cmds, e);
                return Err(e);
            }
        };

        Ok(Self::from_tcs(tcs))
    }

    /// Land a new rover and execute the given commands.
    pub fn from_tcs<I>(tcs: I) -> Self
    where
        I: IntoIterator<Item = Tc>,
    {
        let mut rover = Self::default();

        for tc in tcs {
            rover.exec(tc);
        }

        rover
    }

    /// Execute a single command.
    pub fn exec(&mut self, tc: Tc) -> &mut Self {
        trace!("Executing {:?} at {:?} heading {:?}", tc, self.position, self.heading);

        match tc {
            Tc::Straight => self.move_forward(),
            Tc::Right => self.turn_right(),
            Tc::Left => self.turn_left(),
            Tc::Sample => self.take_sample(),
        }
    }

    /// Parse and execute a command string on this rover.
    ///
    /// The string is checked before anything is executed, so on error the
    /// rover is left unchanged.
    pub fn exec_str(&mut self, cmds: &str) -> Result<&mut Self, TcParseError> {
        let tcs = match Tc::parse_seq(cmds) {
            Ok(t) => t,
            Err(e) => {
                warn!("Rejected command string \"{}\": {}", cmds, e);
                return Err(e);
            }
        };

        for tc in tcs {
            self.exec(tc);
        }

        Ok(self)
    }

    /// Turn a quarter turn counter-clockwise in place.
    pub fn turn_left(&mut self) -> &mut Self {
        self.mark_turn();
        self.heading = self.heading.left();
        self
    }

    /// Turn a quarter turn clockwise in place.
    pub fn turn_right(&mut self) -> &mut Self {
        self.mark_turn();
        self.heading = self.heading.right();
        self
    }

    /// Drive one cell forward along the current heading.
    pub fn move_forward(&mut self) -> &mut Self {
        self.position = self.position.step(self.heading);
        self.traverse
            .push(self.position, Mark::path(self.heading.axis()));
        self
    }

    /// Take a sample at the current position.
    pub fn take_sample(&mut self) -> &mut Self {
        self.traverse.amend_last(|_| Mark::Sample);
        self
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn traverse(&self) -> &Traverse {
        &self.traverse
    }

    /// Render the path driven so far using the default render parameters.
    pub fn path(&self) -> String {
        render::render(&self.traverse)
    }

    /// A turn is only recorded over a path mark, the landing site, samples
    /// and existing turns keep their mark.
    fn mark_turn(&mut self) {
        self.traverse
            .amend_last(|m| if m.is_path() { Mark::Turn } else { m });
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_landing() {
        let rover = Rover::new("").unwrap();

        assert_eq!(rover.heading(), Heading::East);
        assert_eq!(rover.position(), Position::ORIGIN);
        assert_eq!(rover.traverse(), &Traverse::new());
    }

    #[test]
    fn test_move_forward() {
        let rover = Rover::new("sslsls").unwrap();

        assert_eq!(
            rover.traverse().positions(),
            &[
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(1, 1),
            ]
        );
        assert_eq!(rover.heading(), Heading::West);
        assert_eq!(rover.position(), Position::new(1, 1));
    }

    #[test]
    fn test_turn_marks() {
        // Turning on a path cell marks it as a turn
        let rover = Rover::new("ssr").unwrap();
        assert_eq!(
            rover.traverse().marks(),
            &[Mark::Start, Mark::PathEw, Mark::Turn]
        );

        // Turning at the landing site, on a sample, or twice in place keeps
        // the existing mark
        assert_eq!(Rover::new("rl").unwrap().traverse().marks(), &[Mark::Start]);
        assert_eq!(
            Rover::new("sSr").unwrap().traverse().marks(),
            &[Mark::Start, Mark::Sample]
        );
        assert_eq!(
            Rover::new("srr").unwrap().traverse().marks(),
            &[Mark::Start, Mark::Turn]
        );

        // Turns never add history entries
        assert_eq!(Rover::new("srrrlll").unwrap().traverse().len(), 2);
    }

    #[test]
    fn test_take_sample() {
        let rover = Rover::new("slsS").unwrap();
        assert_eq!(
            rover.traverse().marks(),
            &[Mark::Start, Mark::Turn, Mark::Sample]
        );

        // Sampling overrides anything, including the landing site
        assert_eq!(Rover::new("S").unwrap().traverse().marks(), &[Mark::Sample]);
        assert_eq!(
            Rover::new("srS").unwrap().traverse().marks(),
            &[Mark::Start, Mark::Sample]
        );
    }

    #[test]
    fn test_invalid_command() {
        assert_eq!(
            Rover::new("ssq").unwrap_err(),
            TcParseError::InvalidCommand { cmd: 'q', index: 2 }
        );

        // A bad string leaves an existing rover untouched
        let mut rover = Rover::new("ss").unwrap();
        assert!(rover.exec_str("s?s").is_err());
        assert_eq!(rover.traverse().len(), 3);
    }

    #[test]
    fn test_method_calls_match_string() {
        let mut by_method = Rover::default();
        by_method
            .move_forward()
            .turn_right()
            .move_forward()
            .take_sample()
            .turn_left()
            .move_forward();

        let by_string = Rover::new("srsSls").unwrap();

        assert_eq!(by_method.traverse(), by_string.traverse());
        assert_eq!(by_method.heading(), by_string.heading());
    }
}
