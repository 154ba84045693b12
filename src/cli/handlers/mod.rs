mod init;

pub use init::cmd_init;

use std::path::{Path, PathBuf};

use crate::cli::commands::{Cli, Commands};
use crate::cli::output;
use crate::io::phases_io;
use crate::model::phase::StartUpPhases;
use crate::ops::phase_ops;

/// Dispatch a read command against the discovered checklist.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir = resolve_dir(cli.dir.as_deref())?;
    let phases = phases_io::load_phases(&dir)?;

    match cli.command {
        Some(Commands::List) => cmd_list(&phases, cli.json),
        Some(Commands::Check) => cmd_check(&phases, cli.json),
        // Init and the bare TUI launch are routed in main, before discovery
        _ => Ok(()),
    }
}

fn resolve_dir(dir_override: Option<&str>) -> Result<PathBuf, phases_io::PhasesError> {
    match dir_override {
        Some(dir) => phases_io::discover_dir(Path::new(dir)),
        None => phases_io::discover_dir(&std::env::current_dir()?),
    }
}

fn cmd_list(phases: &StartUpPhases, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = output::checklist_json(phases);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        output::print_checklist(phases);
    }
    Ok(())
}

fn cmd_check(phases: &StartUpPhases, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let problems = phase_ops::validate(phases);
    if json {
        println!("{}", serde_json::to_string_pretty(&problems)?);
    } else {
        for problem in &problems {
            println!("problem: {}", problem);
        }
        if problems.is_empty() {
            println!("ok");
        }
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(format!("{} problem(s) found", problems.len()).into())
    }
}
