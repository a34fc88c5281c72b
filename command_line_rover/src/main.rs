//! Interactive shell for driving a simulated rover.
//!
//! Each line is either a command string (like `sssrS`), which is executed
//! immediately, or one of the shell commands below. Type `help` for the list.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use color_eyre::{eyre::WrapErr, Report};
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;
use structopt::StructOpt;

use comms_if::tc::Tc;
use rov_lib::rover::Rover;
use util::logger::{logger_init, LevelFilter};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

const PROMPT: &str = "Rover $ ";
const HISTORY_PATH: &str = "data/history.txt";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "command_line_rover", about = "Drive a simulated rover interactively")]
struct Opts {
    /// Show debug log messages
    #[structopt(short, long)]
    verbose: bool,
}

/// Commands understood by the shell.
#[derive(Debug, StructOpt)]
enum ShellCmd {
    /// Execute a command string: s (straight), r (right), l (left), S (sample)
    Drive { cmds: String },

    /// Print the path driven so far
    Path,

    /// Print the rover's position and heading
    Pos,

    /// Print the traverse history as JSON
    History,

    /// Land a new rover at the origin
    Reset,

    /// Leave the shell
    #[structopt(alias = "exit")]
    Quit,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger_init(level, None).wrap_err("Failed to initialise logging")?;

    let mut rl = DefaultEditor::new().wrap_err("Failed to create the line editor")?;
    if rl.load_history(HISTORY_PATH).is_err() {
        info!("No history detected");
    }

    let mut rover = Rover::default();

    loop {
        let readline = rl.readline(PROMPT);
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());

                match parse(&line) {
                    Ok(cmd) => {
                        if !handle(cmd, &mut rover) {
                            break;
                        }
                    }
                    Err(msg) => println!("{}", msg),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                warn!("Unhandled error: {:?}", err);
                break;
            }
        }
    }

    save_history(&mut rl);
    shutdown();

    Ok(())
}

/// Parse a line into a shell command. A line which is only command characters
/// is shorthand for `drive`.
fn parse(line: &str) -> Result<ShellCmd, String> {
    let line = line.trim();

    if Tc::parse_seq(line).is_ok() {
        return Ok(ShellCmd::Drive {
            cmds: line.to_string(),
        });
    }

    let args = std::iter::once("rover").chain(line.split_whitespace());
    ShellCmd::from_iter_safe(args).map_err(|e| e.message)
}

/// Execute a shell command, returning `false` if the shell should exit.
fn handle(cmd: ShellCmd, rover: &mut Rover) -> bool {
    match cmd {
        ShellCmd::Drive { cmds } => match rover.exec_str(&cmds) {
            Ok(r) => print!("{}", r.path()),
            Err(e) => println!("{}, the rover has not moved", e),
        },
        ShellCmd::Path => print!("{}", rover.path()),
        ShellCmd::Pos => println!(
            "({}, {}) heading {:?}",
            rover.position().x,
            rover.position().y,
            rover.heading()
        ),
        ShellCmd::History => match serde_json::to_string_pretty(rover.traverse()) {
            Ok(s) => println!("{}", s),
            Err(e) => warn!("Couldn't serialize the traverse: {}", e),
        },
        ShellCmd::Reset => {
            *rover = Rover::default();
            info!("New rover landed at the origin");
        }
        ShellCmd::Quit => return false,
    }

    true
}

fn save_history(rl: &mut DefaultEditor) {
    if let Some(parent) = Path::new(HISTORY_PATH).parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!("Couldn't create the history directory: {}", e);
            return;
        }
    }

    if let Err(e) = rl.save_history(HISTORY_PATH) {
        warn!("Couldn't save history: {}", e);
    }
}

fn shutdown() {
    println!("Exiting...");
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert!(matches!(
            parse("  sssrS "),
            Ok(ShellCmd::Drive { ref cmds }) if cmds == "sssrS"
        ));
        assert!(matches!(
            parse("drive sl"),
            Ok(ShellCmd::Drive { ref cmds }) if cmds == "sl"
        ));
        assert!(matches!(parse("path"), Ok(ShellCmd::Path)));
        assert!(matches!(parse("exit"), Ok(ShellCmd::Quit)));
        assert!(parse("fly").is_err());
    }

    #[test]
    fn test_handle() {
        let mut rover = Rover::default();

        assert!(handle(ShellCmd::Drive { cmds: "ss".into() }, &mut rover));
        assert_eq!(rover.traverse().len(), 3);

        // Bad strings are rejected whole
        assert!(handle(ShellCmd::Drive { cmds: "sxs".into() }, &mut rover));
        assert_eq!(rover.traverse().len(), 3);

        assert!(handle(ShellCmd::Reset, &mut rover));
        assert_eq!(rover.traverse().len(), 1);

        assert!(!handle(ShellCmd::Quit, &mut rover));
    }
}
