//! Command-line interface for clubsite.
//!
//! This module provides the CLI structure and the output formatting used by
//! the `clubsite` binary.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    BuildCommand, CheckCommand, ConfigCommand, OutputFormat, ProjectsCommand, ServeCommand,
};
pub use output::{format_audit, format_projects};

/// clubsite - The coding club website
///
/// Serves the club's pages from JSON fixtures, exports them as static HTML,
/// and checks the fixtures for broken references.
#[derive(Debug, Parser)]
#[command(name = "clubsite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the site over HTTP
    Serve(ServeCommand),

    /// Export the site as static HTML files
    Build(BuildCommand),

    /// Search and filter projects
    Projects(ProjectsCommand),

    /// Check fixtures for dangling references and duplicate ids
    Check(CheckCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
