use anyhow::{Context, Result};
use assert_drills::{Cli, Commands, Outcome, commands::init_command};
use assert_drills_core::{Config, Drills};
use clap::Parser;
use std::path::Path;
use tracing::debug;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let name = cli.command.name();
    // init writes the config, so a broken existing file must not stop it
    let outcome = match cli.command {
        Commands::Init { cwd, force } => init_command(cwd.as_deref(), force)?,
        command => command.execute(&load_drills(cli.config.as_deref())?)?,
    };
    print_outcome(name, &outcome, cli.json)?;

    Ok(())
}

fn load_drills(config_path: Option<&Path>) -> Result<Drills> {
    match config_path {
        Some(path) => {
            debug!("Using config from --config: {}", path.display());
            let config = Config::load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            Ok(Drills::with_config(config)?)
        }
        None => Drills::new().context("Failed to load configuration"),
    }
}

fn print_outcome(name: &str, outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        println!("{}", outcome.to_json(name)?);
    } else {
        println!("{}", outcome.text);
    }
    Ok(())
}
