//! # Communications interface crate.
//!
//! Provides the command definitions shared by the rover simulator and the
//! tools which drive it.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Rover commands (telecommands) and their single character encoding
pub mod tc;
