use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use endowash_monitor::config::{AppContext, ConfigSource};
use endowash_monitor::monitor::mock;
use endowash_monitor::response::normalize_body;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "washmon", version, about = "Endoscope washer monitor tooling")]
struct Cli {
  #[command(subcommand)]
  command: Command
}

#[derive(Subcommand)]
enum Command {
  /// Normalize a raw business script response (file or stdin)
  Normalize {
    #[arg(long, short)]
    input: Option<PathBuf>
  },
  /// Show the effective API configuration
  Config {
    /// Path or http(s) URL of config.json
    #[arg(long, short)]
    config: Option<String>
  },
  /// Resolve a UI path such as /api/... or /task/... to an absolute URL
  Route {
    path: String,
    #[arg(long, short)]
    config: Option<String>
  },
  /// Print the offline mock snapshot
  Mock
}

fn config_source(raw: Option<&str>) -> ConfigSource {
  raw.map(ConfigSource::parse).unwrap_or_default()
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
  match input {
    Some(path) => fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display())),
    None => {
      let mut body = String::new();
      io::stdin()
        .read_to_string(&mut body)
        .context("Unable to read stdin")?;
      Ok(body)
    }
  }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let text = serde_json::to_string_pretty(value).context("Serialization failed")?;
  println!("{text}");
  Ok(())
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Command::Normalize { input } => {
      let body = read_input(input.as_ref())?;
      debug!(bytes = body.len(), "normalizing response body");
      print_json(&normalize_body(&body))
    }
    Command::Config { config } => {
      let ctx = AppContext::new();
      let loaded = ctx.initialize(&config_source(config.as_deref()));
      print_json(loaded)
    }
    Command::Route { path, config } => {
      let ctx = AppContext::new();
      ctx.initialize(&config_source(config.as_deref()));
      let url = ctx.resolve(&path)?;
      println!("{url}");
      Ok(())
    }
    Command::Mock => print_json(&mock::snapshot())
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    )
    .init();

  info!("washmon v{} starting", env!("CARGO_PKG_VERSION"));
  run(Cli::parse())
}
