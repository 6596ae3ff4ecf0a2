use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use sedori_cli::logging::{self, LogOptions};
use sedori_cli::{App, Settings};
use sedori_core::ExportFormat;
use sedori_data::TransactionLoader;
use tracing::{debug, info};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Resale ("sedori") profit calculator.
///
/// Enter transactions one at a time to see cash profit, point profit and
/// profit rates. Entries are kept for this session and can be exported as a
/// spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "sedori", version, about)]
struct Cli {
    /// TOML config file. Defaults to `sedori.toml` in the working directory
    /// when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default export format: csv or xlsx.
    #[arg(long, value_parser = parse_format)]
    format: Option<ExportFormat>,

    /// Directory export files are written to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// CSV of transactions to preload into the session.
    #[arg(long)]
    import: Option<PathBuf>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not print log output to stderr.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e: sedori_core::ExportError| e.to_string())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::discover(cli.config.as_deref()).context("failed to load config")?;
    logging::init(&LogOptions {
        level: settings.logging.level.clone(),
        stderr: !cli.quiet,
        file: cli.log_file.clone().or_else(|| settings.logging.file.clone()),
    })?;

    if let Some(format) = cli.format {
        settings.export.format = format;
    }
    if let Some(dir) = cli.output_dir {
        settings.export.output_dir = dir;
    }
    debug!(?settings, "configuration loaded");

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout(), &settings);

    if let Some(path) = &cli.import {
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let inputs = TransactionLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        let ledger = app.state_mut().ledger_mut()?;
        let count = TransactionLoader::load(ledger, &inputs, Local::now().naive_local());
        println!("Imported {count} entries from {}", path.display());
    }

    info!(session = %app.state().session(), "session started");
    app.run()
}
