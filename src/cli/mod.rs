//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod assess;
pub mod config;
pub mod geocode;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Location safety scores, danger zones and alerts
#[derive(Parser)]
#[command(name = "safety-lens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Produce a safety report for a location
    Assess(assess::AssessArgs),

    /// Resolve a place name to coordinates
    Geocode(geocode::GeocodeArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `default`
pub fn init_logging(default: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            init_logging("info");
            serve::run(args).await
        }
        Commands::Assess(args) => {
            init_logging("warn");
            assess::run(args).await
        }
        Commands::Geocode(args) => {
            init_logging("warn");
            geocode::run(args).await
        }
        Commands::Config(args) => config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assess() {
        let cli = Cli::try_parse_from([
            "safety-lens", "assess", "--lat", "40.7", "--lng", "-74.0", "--alerts", "-f", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Assess(args) => {
                assert_eq!(args.lat, Some(40.7));
                assert_eq!(args.lng, Some(-74.0));
                assert!(args.alerts);
                assert_eq!(args.format.as_deref(), Some("json"));
            }
            _ => panic!("expected assess"),
        }
    }

    #[test]
    fn test_location_conflicts_with_here() {
        let result = Cli::try_parse_from(["safety-lens", "assess", "--location", "Paris", "--here"]);
        assert!(result.is_err());
    }
}
