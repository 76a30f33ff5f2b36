#![forbid(unsafe_code)]

mod aggregator;
mod catalogue;
mod input_output;
mod sale;

pub use aggregator::{aggregate, compute_total, AggregateError, SalesTotal};
use anyhow::{Context, Result};
pub use catalogue::{CatalogueEntry, PriceIndex};
pub use input_output::{load_json_file, output_report, LoadError, SalesReport, RESULTS_FILE_NAME};
use rust_decimal::Decimal;
pub use sale::SaleRecord;
use std::{fs::File, path::Path, time::Instant};

pub type Money = Decimal;

/// Loads both inputs, totals the sales and writes the report to `output_path`.
///
/// A load failure aborts before anything is computed and an out of range total aborts
/// before anything is written, so neither leaves a result file behind.
pub fn run(
    catalogue_path: impl AsRef<Path>,
    sales_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<SalesReport> {
    let catalogue: Vec<CatalogueEntry> = load_json_file(catalogue_path)?;
    let sales: Vec<SaleRecord> = load_json_file(sales_path)?;

    let start = Instant::now();
    let summary = aggregate(&catalogue, &sales)?;
    let report = SalesReport {
        total: summary.total.round_dp(2),
        execution_time: start.elapsed(),
    };
    log::info!(
        "Totalled {} sales against {} catalogue entries, {} unmatched",
        sales.len(),
        catalogue.len(),
        summary.missing_products.len()
    );

    write_results(output_path, &report)?;
    Ok(report)
}

pub fn write_results(output_path: impl AsRef<Path>, report: &SalesReport) -> Result<()> {
    let output_path = output_path.as_ref();
    let mut output_file = File::create(output_path)
        .with_context(|| format!("creating results file {}", output_path.display()))?;
    output_report(&mut output_file, report)
        .with_context(|| format!("writing results file {}", output_path.display()))
}
