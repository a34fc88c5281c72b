//! # Render module
//!
//! Draws a rover's traverse as an ASCII diagram, north up:
//!
//! | Glyph | Meaning                                 |
//! |-------|-----------------------------------------|
//! | `X`   | where the rover landed                  |
//! | `*`   | current position of the rover           |
//! | `-`   | path in the east-west direction         |
//! | `\|`  | path in the north-south direction       |
//! | `+`   | a place where the rover turned or paths cross |
//! | `S`   | a place where a sample was taken        |
//!
//! Rendering never modifies the traverse, so it can be done at any point
//! during a drive.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod bounds;
mod canvas;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Deserialize;

// Internal
pub use bounds::*;
pub use canvas::*;
use crate::traverse::{Mark, Traverse};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Line terminator of the host platform.
#[cfg(windows)]
pub const PLATFORM_LINE_ENDING: &str = "\r\n";

/// Line terminator of the host platform.
#[cfg(not(windows))]
pub const PLATFORM_LINE_ENDING: &str = "\n";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters controlling how a traverse is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Terminator written after every row
    pub line_ending: LineEnding,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on windows, `\n` everywhere else
    Platform,
    Lf,
    Crlf,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Platform => PLATFORM_LINE_ENDING,
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::Platform
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Render the traverse with platform line endings.
pub fn render(traverse: &Traverse) -> String {
    render_with(traverse, &RenderParams::default())
}

/// Render the traverse with the given parameters.
pub fn render_with(traverse: &Traverse, params: &RenderParams) -> String {
    Canvas::paint(traverse).to_string_with(params.line_ending)
}

/// Resolve the mark of a cell visited more than once.
///
/// `newer` is what the more recent visits have already left in the cell
/// (`None` if this is the most recent visit), `older` is the mark of an
/// earlier visit. Precedence:
///
/// 1. [`Mark::Current`] is never replaced.
/// 2. Paths along different axes meeting in one cell make a [`Mark::Turn`].
/// 3. Otherwise the older visit's mark wins, so the landing site and samples
///    survive being driven over again.
pub fn merge(newer: Option<Mark>, older: Mark) -> Mark {
    match newer {
        Some(Mark::Current) => Mark::Current,
        Some(n) if is_crossing(n, older) => Mark::Turn,
        _ => older,
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn is_crossing(a: Mark, b: Mark) -> bool {
    match (a.path_axis(), b.path_axis()) {
        (Some(axis_a), Some(axis_b)) => axis_a != axis_b,
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_merge() {
        // First paint of a cell
        assert_eq!(merge(None, Mark::PathEw), Mark::PathEw);
        assert_eq!(merge(None, Mark::Current), Mark::Current);

        // Current position is never displaced
        for m in [Mark::Start, Mark::Sample, Mark::Turn, Mark::PathEw, Mark::PathNs].iter() {
            assert_eq!(merge(Some(Mark::Current), *m), Mark::Current);
        }

        // Perpendicular paths cross
        assert_eq!(merge(Some(Mark::PathNs), Mark::PathEw), Mark::Turn);
        assert_eq!(merge(Some(Mark::PathEw), Mark::PathNs), Mark::Turn);

        // Parallel paths stay a path
        assert_eq!(merge(Some(Mark::PathEw), Mark::PathEw), Mark::PathEw);

        // Older landing sites, samples and turns win over newer passes
        assert_eq!(merge(Some(Mark::PathNs), Mark::Start), Mark::Start);
        assert_eq!(merge(Some(Mark::PathNs), Mark::Sample), Mark::Sample);
        assert_eq!(merge(Some(Mark::Sample), Mark::PathEw), Mark::PathEw);
        assert_eq!(merge(Some(Mark::Turn), Mark::PathNs), Mark::PathNs);
    }

    #[test]
    fn test_line_endings() {
        let traverse = Traverse::new();

        let crlf = RenderParams {
            line_ending: LineEnding::Crlf,
        };

        assert_eq!(render_with(&traverse, &crlf), "*\r\n");
        assert_eq!(render(&traverse), format!("*{}", PLATFORM_LINE_ENDING));
    }
}
