use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lift", about = concat!("[^] liftoff v", env!("CARGO_PKG_VERSION"), " - your start-up checklist in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different checklist directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a liftoff/ checklist in the current directory
    Init(InitArgs),
    /// Print all phases and their tasks
    List,
    /// Validate checklist integrity
    Check,
}

#[derive(Args)]
pub struct InitArgs {
    /// Project name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Reinitialize even if liftoff/ already exists
    #[arg(long)]
    pub force: bool,
}
