//! Output formatting for validation and port reports.
//!
//! Plain output colors state badges with the catalog's status palette;
//! JSON output serializes the report structs as-is.

use crate::catalog::StatusColor;
use crate::cli::OutputFormat;
use crate::ports::{Port, StandardPort};
use crate::validator::{self, IdentifierKind, ValidationOutcome};
use console::Style;
use serde::Serialize;
use std::io::{self, Write};

/// Result of checking a piece of text against one or all grammars.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// The raw input as received.
    pub input: String,
    /// Per-grammar outcomes, in the order they were tested.
    pub outcomes: Vec<ValidationOutcome>,
    /// Kinds whose grammar accepted the input.
    pub matches: Vec<IdentifierKind>,
}

impl CheckReport {
    /// Check `text` against a single grammar.
    pub fn single(kind: IdentifierKind, text: &str) -> Self {
        let outcome = ValidationOutcome::new(kind, text);
        Self {
            input: text.to_string(),
            matches: if outcome.is_valid { vec![kind] } else { Vec::new() },
            outcomes: vec![outcome],
        }
    }

    /// Check `text` against every grammar.
    pub fn classify(text: &str) -> Self {
        let outcomes: Vec<ValidationOutcome> = IdentifierKind::ALL
            .into_iter()
            .map(|kind| ValidationOutcome::new(kind, text))
            .collect();
        Self {
            input: text.to_string(),
            matches: validator::classify(text),
            outcomes,
        }
    }

    /// Whether any tested grammar accepted the input.
    pub fn is_valid(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Safety and service classification of a single port.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortReport {
    /// The port number.
    pub port: u16,
    /// On the browser-blocked list.
    #[serde(rename = "unsafe")]
    pub unsafe_port: bool,
    /// Well-known service flag (informational, independent of safety).
    pub standard_service: Option<StandardPort>,
    /// Below 1024.
    pub privileged: bool,
    /// In the ephemeral range (49152-65535).
    pub ephemeral: bool,
}

impl PortReport {
    /// Classify a validated port.
    pub fn new(port: Port) -> Self {
        Self {
            port: port.as_u16(),
            unsafe_port: port.is_unsafe(),
            standard_service: port.standard_service(),
            privileged: port.is_privileged(),
            ephemeral: port.is_ephemeral(),
        }
    }
}

/// Terminal style for a palette entry.
fn palette(color: StatusColor) -> Style {
    match color {
        StatusColor::Blue => Style::new().blue(),
        StatusColor::Red => Style::new().red(),
        StatusColor::Green => Style::new().green(),
        StatusColor::Yellow => Style::new().yellow(),
    }
}

/// Format and print a check report.
pub fn print_check(report: &CheckReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_check_plain(report),
        OutputFormat::Json => print_json(report),
    }
}

fn print_check_plain(report: &CheckReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "  {} {}", Style::new().bold().apply_to("Input:"), report.input)?;
    for outcome in &report.outcomes {
        let badge = if outcome.is_valid {
            palette(StatusColor::Green).bold().apply_to("valid")
        } else {
            palette(StatusColor::Red).apply_to("invalid")
        };
        writeln!(out, "  {:<10} {}", outcome.kind.to_string(), badge)?;
    }
    Ok(())
}

/// Format and print a port report.
pub fn print_port(report: &PortReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_port_plain(report),
        OutputFormat::Json => print_json(report),
    }
}

fn print_port_plain(report: &PortReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "  {} {}", Style::new().bold().apply_to("Port:"), report.port)?;

    let safety = if report.unsafe_port {
        palette(StatusColor::Yellow)
            .bold()
            .apply_to("unsafe (browser-blocked)")
    } else {
        palette(StatusColor::Green).apply_to("not blocked")
    };
    writeln!(out, "  {} {}", Style::new().bold().apply_to("Safety:"), safety)?;

    if let Some(service) = report.standard_service {
        writeln!(
            out,
            "  {} {}",
            Style::new().bold().apply_to("Service:"),
            palette(StatusColor::Blue).apply_to(service.to_string())
        )?;
    }

    let mut notes = Vec::new();
    if report.privileged {
        notes.push("privileged");
    }
    if report.ephemeral {
        notes.push("ephemeral");
    }
    if !notes.is_empty() {
        writeln!(
            out,
            "  {} {}",
            Style::new().bold().apply_to("Range:"),
            notes.join(", ")
        )?;
    }
    Ok(())
}

/// Print any serializable report as pretty JSON.
pub fn print_json<T: Serialize>(report: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
