//! # Rover library.
//!
//! Simulates a rover driving around an integer grid and draws the path it has
//! taken. The library is also used by the other executables in the workspace.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Localisation - grid positions and the rover's heading
pub mod loc;

/// Parameters for the simulator executable
pub mod params;

/// Path rendering - draws a traverse as text
pub mod render;

/// The simulated rover - executes commands and records its traverse
pub mod rover;

/// Traverse - the position and mark histories of a rover
pub mod traverse;
