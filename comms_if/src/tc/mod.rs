//! # Telecommand module
//!
//! This module provides the commands which can be sent to the rover. Each
//! command is encoded as a single character, so a whole drive sequence can be
//! written as a plain string such as `"sssrssS"`.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// STATICS
// ---------------------------------------------------------------------------

/// Mapping between each telecommand and its character encoding.
static TC_CHARS: [(char, Tc); 4] = [
    ('s', Tc::Straight),
    ('r', Tc::Right),
    ('l', Tc::Left),
    ('S', Tc::Sample),
];

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Telecommand types.
///
/// These are the only instructions the rover understands. Serialised as their
/// single character encoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(into = "char", try_from = "char")]
pub enum Tc {
    /// Drive one cell forward along the current heading (`s`)
    Straight,

    /// Turn clockwise in place (`r`)
    Right,

    /// Turn counter-clockwise in place (`l`)
    Left,

    /// Take a sample at the current position (`S`)
    Sample,
}

/// Possible parsing errors.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum TcParseError {
    #[error("Unrecognised command '{cmd}' at position {index}")]
    InvalidCommand { cmd: char, index: usize },
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Tc {
    /// Get the telecommand encoded by the given character, or `None` if the
    /// character is not a recognised command.
    pub fn from_char(c: char) -> Option<Self> {
        TC_CHARS
            .iter()
            .find(|(tc_char, _)| *tc_char == c)
            .map(|(_, tc)| *tc)
    }

    /// Get the character encoding of this telecommand.
    pub fn as_char(&self) -> char {
        match self {
            Tc::Straight => 's',
            Tc::Right => 'r',
            Tc::Left => 'l',
            Tc::Sample => 'S',
        }
    }

    /// Parse a whole command string into a sequence of telecommands.
    ///
    /// Parsing stops at the first unrecognised character, nothing is skipped.
    pub fn parse_seq(seq: &str) -> Result<Vec<Self>, TcParseError> {
        seq.chars()
            .enumerate()
            .map(|(index, cmd)| match Tc::from_char(cmd) {
                Some(tc) => Ok(tc),
                None => Err(TcParseError::InvalidCommand { cmd, index }),
            })
            .collect()
    }

    /// Encode a sequence of telecommands back into a command string.
    pub fn seq_to_string(seq: &[Self]) -> String {
        seq.iter().map(Tc::as_char).collect()
    }
}

impl TryFrom<char> for Tc {
    type Error = TcParseError;

    fn try_from(cmd: char) -> Result<Self, Self::Error> {
        match Tc::from_char(cmd) {
            Some(tc) => Ok(tc),
            None => Err(TcParseError::InvalidCommand { cmd, index: 0 }),
        }
    }
}

impl From<Tc> for char {
    fn from(tc: Tc) -> Self {
        tc.as_char()
    }
}

impl fmt::Display for Tc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Tc::from_char('s'), Some(Tc::Straight));
        assert_eq!(Tc::from_char('r'), Some(Tc::Right));
        assert_eq!(Tc::from_char('l'), Some(Tc::Left));
        assert_eq!(Tc::from_char('S'), Some(Tc::Sample));

        // Commands are case sensitive
        assert_eq!(Tc::from_char('R'), None);
        assert_eq!(Tc::from_char('L'), None);
        assert_eq!(Tc::from_char(' '), None);
    }

    #[test]
    fn test_parse_seq() {
        assert_eq!(
            Tc::parse_seq("sSrl").unwrap(),
            vec![Tc::Straight, Tc::Sample, Tc::Right, Tc::Left]
        );
        assert_eq!(Tc::parse_seq("").unwrap(), vec![]);
        assert_eq!(
            Tc::parse_seq("ssxs"),
            Err(TcParseError::InvalidCommand { cmd: 'x', index: 2 })
        );
        assert_eq!(Tc::seq_to_string(&Tc::parse_seq("sssrlS").unwrap()), "sssrlS");
    }

    #[test]
    fn test_serde_as_char() {
        let json = serde_json::to_string(&vec![Tc::Straight, Tc::Sample]).unwrap();
        assert_eq!(json, "[\"s\",\"S\"]");

        let tcs: Vec<Tc> = serde_json::from_str("[\"l\",\"r\"]").unwrap();
        assert_eq!(tcs, vec![Tc::Left, Tc::Right]);

        assert!(serde_json::from_str::<Tc>("\"q\"").is_err());
    }
}
