//! # Rover script interpreter module
//!
//! This module provides an interpreter for rover command scripts. A script is
//! a text file of command characters, for example:
//!
//! ```text
//! # Drive out to the crater rim
//! ssss r ss
//! S       # sample the rim
//! ```
//!
//! Whitespace is ignored and `#` starts a comment which runs to the end of
//! the line.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Internal
use comms_if::tc::{Tc, TcParseError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A script interpreter.
///
/// After initialising with the path to the script use `.tcs()` or
/// `.into_tcs()` to get the commands in the order they appear in the script.
pub struct ScriptInterpreter {
    script_path: PathBuf,
    tcs: Vec<Tc>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not find the script at {0}")]
    ScriptNotFound(String),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("Script contains an invalid command on line {0}: {1}")]
    InvalidTc(usize, TcParseError),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScriptInterpreter {
    /// Create a new interpreter from the given script path.
    pub fn new<P: AsRef<Path>>(script_path: P) -> Result<Self, ScriptError> {
        // Get the path in a buffer
        let path = PathBuf::from(script_path.as_ref());

        // Check that the script file exists.
        if !path.exists() {
            return Err(ScriptError::ScriptNotFound(path.display().to_string()));
        }

        // Load the script into a string
        let script = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => return Err(ScriptError::ScriptLoadError(e)),
        };

        let tcs = Self::parse(&script)?;

        debug!("Loaded {} commands from {:?}", tcs.len(), path);

        Ok(ScriptInterpreter {
            script_path: path,
            tcs,
        })
    }

    /// Parse the text of a script into commands.
    ///
    /// Line numbers in errors start at 1, column indices at 0.
    pub fn parse(script: &str) -> Result<Vec<Tc>, ScriptError> {
        let mut tcs = Vec::new();

        for (line_idx, line) in script.lines().enumerate() {
            // Everything before the first comment marker is the command body
            let body = match line.split('#').next() {
                Some(b) => b,
                None => continue,
            };

            for (index, cmd) in body.chars().enumerate() {
                if cmd.is_whitespace() {
                    continue;
                }

                match Tc::from_char(cmd) {
                    Some(tc) => tcs.push(tc),
                    None => {
                        return Err(ScriptError::InvalidTc(
                            line_idx + 1,
                            TcParseError::InvalidCommand { cmd, index },
                        ))
                    }
                }
            }
        }

        Ok(tcs)
    }

    /// Get the path the script was loaded from
    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Get the commands in the script
    pub fn tcs(&self) -> &[Tc] {
        &self.tcs
    }

    /// Consume the interpreter, returning the commands in the script
    pub fn into_tcs(self) -> Vec<Tc> {
        self.tcs
    }

    /// Get the number of TCs in the script
    pub fn get_num_tcs(&self) -> usize {
        self.tcs.len()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
