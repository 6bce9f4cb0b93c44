//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "setupcheck")]
#[command(author, version, about = "Audit directory permissions for installation", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Installation base directory (default: current directory)
    #[arg(long, global = true)]
    pub base: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Check that the directories required for installation are writable
    Install,

    /// Report post-install permission state of the config directory
    App,
}
