use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use sedori_core::export::DEFAULT_BASE_NAME;
use sedori_core::{ExportFormat, SessionLedger, WriterRegistry};
use sedori_data::TransactionLoader;
use tracing_subscriber::EnvFilter;

/// Compute profit figures for a CSV batch of transactions and export them.
///
/// The CSV file should have the following columns:
/// - item_name: Item name (optional)
/// - selling_price: Selling price in yen
/// - cost_price: Purchase price in yen
/// - shipping_cost: Shipping cost in yen (empty for 215)
/// - platform_fee_percent: Platform fee, e.g. 10 for 10% (empty for 10)
/// - shop_point_percent: Shop point rate (empty for 10)
/// - card_point_percent: Credit card point rate (empty for 7)
#[derive(Parser, Debug)]
#[command(name = "sedori-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing transactions
    #[arg(short, long)]
    file: PathBuf,

    /// Output format: csv or xlsx
    #[arg(long, default_value = "xlsx", value_parser = parse_format)]
    format: ExportFormat,

    /// Directory the export file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// File name without extension
    #[arg(short, long, default_value = DEFAULT_BASE_NAME)]
    base_name: String,
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e: sedori_core::ExportError| e.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    println!("Loading transactions from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let inputs = TransactionLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", inputs.len());

    let mut ledger = SessionLedger::new();
    TransactionLoader::load(&mut ledger, &inputs, Local::now().naive_local());

    let artifact = WriterRegistry::with_defaults()
        .export(args.format, &ledger.export_table(), &args.base_name)
        .context("Failed to build export")?;
    let path = artifact
        .save_in(&args.output_dir)
        .with_context(|| format!("Failed to write into: {}", args.output_dir.display()))?;

    println!(
        "Exported {} entries (cash profit total {}) to {}",
        ledger.len(),
        ledger.total_cash_profit().round_dp(0),
        path.display()
    );

    Ok(())
}
