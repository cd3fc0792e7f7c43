//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `netform check <text>` - Validate or classify an identifier
//! - `netform port <port>` - Classify a port for safety
//! - `netform catalog services|languages` - List static catalogs

mod catalog;
mod check;
mod port;

pub use catalog::CatalogCommand;
pub use check::CheckCommand;
pub use port::PortCommand;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// netform - network identifier validation and port safety checks.
///
/// netform answers the questions a DNS-filter configuration form asks
/// before submitting user input to the backend: is this text a valid
/// URL, hostname, IPv4/IPv6 address, or MAC address, and is this port
/// safe for a browser-initiated connection.
#[derive(Parser, Debug)]
#[command(name = "netform")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate network identifiers and classify port safety", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format for results
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate or classify a network identifier
    #[command(alias = "c")]
    Check(CheckCommand),

    /// Classify a port for browser safety and well-known services
    #[command(alias = "p")]
    Port(PortCommand),

    /// List the static configuration catalogs
    Catalog(CatalogCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
}

impl OutputFormat {
    /// Resolve a format from its settings-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(OutputFormat::from_name("plain"), Some(OutputFormat::Plain));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from(["netform", "check", "192.168.1.1", "--kind", "ipv4"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_cli_parses_port_with_global_flags() {
        let cli = Cli::try_parse_from(["netform", "--format", "json", "port", "53"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Port(_)));
    }
}
