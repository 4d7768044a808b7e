use clap::Parser;
use std::path::PathBuf;

/// OctoLearn backend server
#[derive(Parser, Debug)]
#[command(name = "octolearn-backend", version, about)]
pub struct Cli {
    /// Path to a .env config file (defaults to ./.env)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable debug logging (overrides DEBUG)
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose logging (overrides VERBOSE)
    #[arg(short, long)]
    pub verbose: bool,
}
