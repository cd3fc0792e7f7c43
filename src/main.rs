//! netform CLI entry point.

use anyhow::Result;
use clap::Parser;
use netform::cli::{Cli, Commands, OutputFormat};
use netform::config::AppSettings;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        // Exit 0 for valid/safe input, 1 for invalid/unsafe.
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("netform error: {:#}", err);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load()?,
    };

    if cli.no_color || !settings.color {
        console::set_colors_enabled(false);
    }

    let format = cli
        .format
        .or_else(|| OutputFormat::from_name(&settings.default_output_format))
        .unwrap_or_default();

    let ok = match cli.command {
        Commands::Check(cmd) => cmd.execute(format)?,
        Commands::Port(cmd) => cmd.execute(format)?,
        Commands::Catalog(cmd) => {
            cmd.execute(format)?;
            true
        }
    };

    Ok(ok)
}

/// Initialize logging to stderr. `RUST_LOG` overrides the level implied
/// by `--verbose`/`--quiet`.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "netform=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
