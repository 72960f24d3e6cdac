//! `clubsite` - CLI for the coding club website
//!
//! This binary serves the site, exports it as static HTML and offers a few
//! operator commands for inspecting the fixtures and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{bail, Context};
use clap::Parser;

use clubsite::cli::{
    format_audit, format_projects, BuildCommand, Cli, Command, ConfigCommand, ProjectsCommand,
    ServeCommand,
};
use clubsite::filter::{GroupFilter, ProjectQuery};
use clubsite::{export, init_logging, server, Catalog, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Serve(cmd) => handle_serve(config, cmd).await,
        Command::Build(cmd) => handle_build(&config, cmd),
        Command::Projects(cmd) => handle_projects(&config, cmd),
        Command::Check(cmd) => handle_check(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    Catalog::from_dir(&config.content.data_dir).with_context(|| {
        format!(
            "failed to load content from {}",
            config.content.data_dir.display()
        )
    })
}

async fn handle_serve(mut config: Config, cmd: ServeCommand) -> anyhow::Result<()> {
    if let Some(host) = cmd.host {
        config.server.host = host;
    }
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    config.validate()?;

    let catalog = load_catalog(&config)?;
    server::serve(&config, catalog).await?;
    Ok(())
}

fn handle_build(config: &Config, cmd: BuildCommand) -> anyhow::Result<()> {
    let output_dir = cmd.out.unwrap_or_else(|| config.build.output_dir.clone());
    let catalog = load_catalog(config)?;

    let summary = export::export_site(&config.site, &catalog, &output_dir, cmd.clean)?;
    println!(
        "Wrote {} pages to {}",
        summary.files.len(),
        summary.output_dir.display()
    );
    Ok(())
}

fn handle_projects(config: &Config, cmd: ProjectsCommand) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    let query = ProjectQuery::new(GroupFilter::parse(&cmd.group), cmd.query);
    let projects = query.apply(catalog.projects());

    print!("{}", format_projects(&projects, &catalog, cmd.format)?);
    Ok(())
}

fn handle_check(config: &Config, json: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    let report = catalog.audit();

    println!("{}", format_audit(&report, json)?.trim_end());
    if !report.is_clean() {
        bail!(
            "{} dangling reference(s) and {} duplicate id(s) found",
            report.dangling.len(),
            report.duplicates.len()
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Site]");
                println!("  Name:               {}", config.site.name);
                println!("  Base URL:           {}", config.site.base_url);
                println!("  Copyright holder:   {}", config.site.copyright_holder);
                println!();
                println!("[Content]");
                println!("  Data directory:     {}", config.content.data_dir.display());
                println!();
                println!("[Server]");
                println!("  Bind address:       {}", config.bind_address());
                println!();
                println!("[Join]");
                println!("  Submit delay (ms):  {}", config.join.submit_delay_ms);
                println!();
                println!("[Build]");
                println!("  Output directory:   {}", config.build.output_dir.display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
