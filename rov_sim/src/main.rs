//! Rover simulator executable entry point.
//!
//! # Usage
//!
//! ```text
//! rov_sim [FLAGS] [OPTIONS] [CMDS]
//! ```
//!
//! The rover lands at the origin facing east, executes the commands in the
//! script (if one is given) followed by those on the command line, then prints
//! the path it drove to stdout. Log messages go to stderr.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info, warn};
use std::path::PathBuf;
use structopt::StructOpt;

// Internal
use comms_if::tc::Tc;
use rov_lib::{params::RovSimParams, render, rover::Rover};
use util::{
    host,
    logger::logger_init,
    params,
    script_interpreter::ScriptInterpreter,
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Name of the parameter file looked for in the software root.
const PARAMS_FILE: &str = "rov_sim.toml";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "rov_sim", about = "Drive a simulated rover and draw its path")]
struct Opts {
    /// Commands to execute: s (straight), r (right), l (left), S (sample)
    #[structopt(default_value = "")]
    cmds: String,

    /// Script of commands to execute before those on the command line
    #[structopt(short, long, parse(from_os_str))]
    script: Option<PathBuf>,

    /// Parameter file, defaults to `params/rov_sim.toml` in the software root
    #[structopt(short, long, parse(from_os_str))]
    params: Option<PathBuf>,

    /// Create a session directory in the software root and log to it
    #[structopt(long)]
    session: bool,

    /// Print the traverse history as JSON after the path
    #[structopt(long)]
    history: bool,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- LOAD PARAMETERS ----

    let (sim_params, params_source): (RovSimParams, String) =
        match (&opts.params, host::get_rov_sim_root()) {
            (Some(path), _) => (
                params::load_file(path).wrap_err("Could not load rov_sim params")?,
                format!("{:?}", path),
            ),
            (None, Ok(_)) => (
                params::load(PARAMS_FILE).wrap_err("Could not load rov_sim params")?,
                format!("params/{}", PARAMS_FILE),
            ),
            (None, Err(_)) => (RovSimParams::default(), String::from("defaults")),
        };

    // ---- EARLY INITIALISATION ----

    let session = if opts.session {
        Some(Session::new("rov_sim", "sessions").wrap_err("Failed to create the session")?)
    } else {
        None
    };

    logger_init(sim_params.log_level.into(), session.as_ref())
        .wrap_err("Failed to initialise logging")?;

    info!("Rover Simulator\n");
    info!("Parameters loaded from {}", params_source);
    debug!("{:#?}", sim_params);
    if let Some(ref s) = session {
        info!("Session directory: {:?}\n", s.session_root);
    }

    // ---- COLLECT COMMANDS ----

    let mut tcs: Vec<Tc> = Vec::new();

    if let Some(ref path) = opts.script {
        info!("Loading script from {:?}", path);

        let si = ScriptInterpreter::new(path).wrap_err("Failed to load script")?;

        info!("Loaded script contains {} commands", si.get_num_tcs());

        tcs.extend(si.into_tcs());
    }

    match Tc::parse_seq(&opts.cmds) {
        Ok(t) => tcs.extend(t),
        Err(e) => {
            warn!("Rejected command string \"{}\": {}", opts.cmds, e);
            return Err(e).wrap_err("Invalid command string");
        }
    }

    info!("Executing {} commands", tcs.len());

    // ---- DRIVE ----

    let mut rover = Rover::default();
    let num_tcs = tcs.len();

    for (i, tc) in tcs.into_iter().enumerate() {
        rover.exec(tc);

        // Every path but the last, which is always printed below
        if sim_params.show_intermediate && i + 1 < num_tcs {
            println!(
                "{}",
                render::render_with(rover.traverse(), &sim_params.render)
            );
        }
    }

    info!(
        "Drive complete, rover at ({}, {}) heading {:?}",
        rover.position().x,
        rover.position().y,
        rover.heading()
    );

    // ---- OUTPUT ----

    print!(
        "{}",
        render::render_with(rover.traverse(), &sim_params.render)
    );

    if opts.history {
        println!(
            "{}",
            serde_json::to_string_pretty(rover.traverse())
                .wrap_err("Failed to serialize the traverse")?
        );
    }

    Ok(())
}
