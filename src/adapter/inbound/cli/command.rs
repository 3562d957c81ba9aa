//! Command-line interface definitions.
//!
//! Defines the CLI structure for the crm-desk binary using `clap`: serving
//! the web interface, applying migrations and validating configuration.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Server-rendered customer and employee desk
#[derive(Parser, Debug)]
#[command(name = "crm-desk")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply migrations and serve the web interface
    Serve(ServeArgs),

    /// Apply pending database migrations
    Migrate(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `crm-desk check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file without starting the server.
    Config(ConfigPathArg),
}

/// Path to the configuration file.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for `crm-desk serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Listen address, overrides `server.bind`
    #[arg(long)]
    pub bind: Option<String>,

    /// Log level, overrides `logging.level`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["crm-desk", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(args.bind.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.json_logs);
    }

    #[test]
    fn serve_overrides() {
        let cli = Cli::try_parse_from([
            "crm-desk",
            "serve",
            "--config",
            "custom.toml",
            "--bind",
            "0.0.0.0:8080",
            "--log-level",
            "debug",
            "--json-logs",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.config, PathBuf::from("custom.toml"));
        assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.json_logs);
    }

    #[test]
    fn check_config_takes_path() {
        let cli = Cli::try_parse_from(["crm-desk", "check", "config", "-c", "x.toml"]).unwrap();
        let Commands::Check(CheckCommand::Config(arg)) = cli.command else {
            panic!("expected check config");
        };
        assert_eq!(arg.config, PathBuf::from("x.toml"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["crm-desk", "migrate", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["crm-desk", "deploy"]).is_err());
    }
}
