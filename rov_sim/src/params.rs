//! Parameters structure for the rover simulator executable

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::LevelFilter;
use serde::Deserialize;

use crate::render::RenderParams;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the simulator. Every field has a default so a parameter
/// file only needs to give the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RovSimParams {
    /// Minimum level of log messages
    pub log_level: LogLevel,

    /// Print the path after every command as well as at the end of the drive
    pub show_intermediate: bool,

    /// How paths are drawn
    pub render: RenderParams,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Log levels accepted by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Debug,
    Trace,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::render::LineEnding;

    #[test]
    fn test_params_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rov_sim.toml");

        std::fs::write(
            &path,
            "show_intermediate = true\n\
             log_level = \"trace\"\n\
             \n\
             [render]\n\
             line_ending = \"crlf\"\n",
        )
        .unwrap();

        let params: RovSimParams = util::params::load_file(&path).unwrap();

        assert!(params.show_intermediate);
        assert_eq!(LevelFilter::from(params.log_level), LevelFilter::Trace);
        assert_eq!(params.render.line_ending, LineEnding::Crlf);

        // Missing values are defaulted
        std::fs::write(&path, "").unwrap();
        let params: RovSimParams = util::params::load_file(&path).unwrap();
        assert_eq!(params, RovSimParams::default());
        assert_eq!(params.render.line_ending, LineEnding::Platform);
    }
}
