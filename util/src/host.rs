//! Host platform utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::env;
use std::path::PathBuf;
use thiserror::Error;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Name of the environment variable pointing at the software root directory.
pub const ROV_SIM_ROOT_VAR: &str = "ROV_SIM_ROOT";

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum HostError {
    #[error("The software root environment variable (ROV_SIM_ROOT) is not set")]
    SwRootNotSet,

    #[error("The software root ({0:?}) is not a directory")]
    SwRootNotDir(PathBuf),
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the root directory of the software, under which the `params` and
/// `sessions` directories live.
pub fn get_rov_sim_root() -> Result<PathBuf, HostError> {
    let root = match env::var_os(ROV_SIM_ROOT_VAR) {
        Some(r) => PathBuf::from(r),
        None => return Err(HostError::SwRootNotSet),
    };

    if !root.is_dir() {
        return Err(HostError::SwRootNotDir(root));
    }

    Ok(root)
}
