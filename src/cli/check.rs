//! Check subcommand implementation.
//!
//! Handles `netform check <text>` for identifier validation.

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{self, CheckReport};
use crate::validator::IdentifierKind;
use clap::Parser;

/// Validate or classify a network identifier.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Text to check
    ///
    /// Examples:
    ///   192.168.1.1              IPv4 address
    ///   fe80::1%eth0             IPv6 with zone id
    ///   example.com              Hostname
    ///   00:1A:2B:3C:4D:5E        MAC address
    ///   https://example.com/a    URL with protocol
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Validate against one identifier form instead of classifying
    /// across all of them
    #[arg(short, long, value_enum)]
    pub kind: Option<IdentifierKind>,
}

impl CheckCommand {
    /// Execute the check command. Returns whether the input was valid
    /// for (any of) the tested form(s).
    pub fn execute(&self, format: OutputFormat) -> CliResult<bool> {
        let report = match self.kind {
            Some(kind) => CheckReport::single(kind, &self.text),
            None => CheckReport::classify(&self.text),
        };

        tracing::debug!(input = %self.text, matches = ?report.matches, "check complete");

        output::print_check(&report, format)?;
        Ok(report.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_kind_check() {
        let cmd = CheckCommand {
            text: "example.com".to_string(),
            kind: Some(IdentifierKind::Hostname),
        };
        assert!(cmd.execute(OutputFormat::Json).unwrap());

        let cmd = CheckCommand {
            text: "ex_ample.com".to_string(),
            kind: Some(IdentifierKind::Hostname),
        };
        assert!(!cmd.execute(OutputFormat::Json).unwrap());
    }

    #[test]
    fn test_classify_check() {
        let cmd = CheckCommand {
            text: "not valid anywhere!".to_string(),
            kind: None,
        };
        assert!(!cmd.execute(OutputFormat::Json).unwrap());
    }
}
