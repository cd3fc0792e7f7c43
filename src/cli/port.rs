//! Port subcommand implementation.
//!
//! Handles `netform port <port>` for port safety classification.

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{self, PortReport};
use crate::ports::Port;
use clap::Parser;

/// Classify a port for browser safety and well-known services.
#[derive(Parser, Debug)]
pub struct PortCommand {
    /// Port number (0-65535)
    #[arg(value_name = "PORT")]
    pub port: String,
}

impl PortCommand {
    /// Execute the port command. Returns whether the port is safe for
    /// browser-initiated connections. Out-of-range or non-numeric input
    /// is an error, not a classification.
    pub fn execute(&self, format: OutputFormat) -> CliResult<bool> {
        let port: Port = self.port.parse()?;
        let report = PortReport::new(port);

        tracing::debug!(
            port = report.port,
            unsafe_port = report.unsafe_port,
            "port classified"
        );

        output::print_port(&report, format)?;
        Ok(!report.unsafe_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, PortError};

    #[test]
    fn test_safe_and_unsafe_ports() {
        let cmd = PortCommand {
            port: "8080".to_string(),
        };
        assert!(cmd.execute(OutputFormat::Json).unwrap());

        let cmd = PortCommand {
            port: "25".to_string(),
        };
        assert!(!cmd.execute(OutputFormat::Json).unwrap());
    }

    #[test]
    fn test_out_of_range_port_is_an_error() {
        let cmd = PortCommand {
            port: "70000".to_string(),
        };
        assert!(matches!(
            cmd.execute(OutputFormat::Json),
            Err(CliError::Port(PortError::OutOfRange(70000)))
        ));
    }
}
