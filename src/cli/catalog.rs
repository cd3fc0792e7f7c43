//! Catalog subcommand implementation.
//!
//! Handles `netform catalog <table>` for listing the static
//! configuration tables.

use crate::catalog::{BLOCKED_SERVICES, LANGUAGES};
use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

/// List the static configuration catalogs.
#[derive(Parser, Debug)]
pub struct CatalogCommand {
    /// Which catalog to list
    #[command(subcommand)]
    pub table: CatalogTable,
}

/// The listable catalogs.
#[derive(Subcommand, Debug)]
pub enum CatalogTable {
    /// Services the filtering backend can block wholesale
    Services,
    /// Languages the control panel ships translations for
    Languages,
}

impl CatalogCommand {
    /// Execute the catalog command.
    pub fn execute(&self, format: OutputFormat) -> CliResult<()> {
        match (&self.table, format) {
            (CatalogTable::Services, OutputFormat::Json) => output::print_json(&BLOCKED_SERVICES)?,
            (CatalogTable::Languages, OutputFormat::Json) => output::print_json(&LANGUAGES)?,
            (CatalogTable::Services, OutputFormat::Plain) => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                for service in BLOCKED_SERVICES {
                    writeln!(out, "  {:<12} {}", service.id, service.name)?;
                }
            }
            (CatalogTable::Languages, OutputFormat::Plain) => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                for language in LANGUAGES {
                    writeln!(out, "  {:<8} {}", language.key, language.name)?;
                }
            }
        }
        Ok(())
    }
}
