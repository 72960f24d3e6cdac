//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Interface to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Build command arguments.
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Output directory (overrides `build.output_dir`)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Remove the output directory before writing
    #[arg(long)]
    pub clean: bool,
}

/// Projects command arguments.
#[derive(Debug, Args)]
pub struct ProjectsCommand {
    /// Text to find in titles, descriptions and tags
    #[arg(default_value = "")]
    pub query: String,

    /// Only show projects of this group ("all" for every group)
    #[arg(short, long, default_value = "all")]
    pub group: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Check command arguments.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_serve_command_debug() {
        let cmd = ServeCommand {
            host: None,
            port: Some(9000),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("9000"));
    }

    #[test]
    fn test_projects_command_debug() {
        let cmd = ProjectsCommand {
            query: "react".to_string(),
            group: "all".to_string(),
            format: OutputFormat::Table,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("react"));
        assert!(debug_str.contains("Table"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
