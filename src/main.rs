use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use liftoff::cli::commands::{Cli, Commands};
use liftoff::cli::handlers;
use liftoff::io::phases_io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    let dir = cli.dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            init_tracing(dir.as_deref());
            if let Err(e) = liftoff::tui::run(dir.as_deref().map(Path::new)) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Init(args)) => {
            // Init is handled before checklist discovery
            if let Err(e) = handlers::cmd_init(args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// Log to a file inside the checklist directory. If none can be opened,
/// prefer "no logs" over corrupting the TUI by writing to stdout/stderr.
fn init_tracing(dir_override: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let log_file = discover_log_file(dir_override);

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    } else {
        tracing_subscriber::registry().with(env_filter).init();
    }
}

fn discover_log_file(dir_override: Option<&str>) -> Option<std::fs::File> {
    let start = match dir_override {
        Some(dir) => Path::new(dir).to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    let data_dir = phases_io::discover_dir(&start).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("liftoff.log"))
        .ok()
}
