//! Command-line wrapper for the employee time report generator.
//!
//! Fetches raw time records from an HTTP endpoint, runs the aggregation
//! pipeline, and writes the two report artifacts to disk. An empty dataset
//! only skips the chart; the table is still written.

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use time_report::config::{DEFAULT_CHART_SIZE, DEFAULT_LOW_HOURS_THRESHOLD, ReportConfig};
use time_report::error::{ReportError, ReportResult};
use time_report::pipeline::{aggregate_records, normalize_records};
use time_report::render::{render_chart, render_table};
use time_report::source::fetch_records;

/// Generates an employee time report: HTML table plus pie-chart PNG.
#[derive(Debug, Parser)]
#[command(name = "time-report", version, about)]
struct Args {
    /// URL of the time-entries endpoint returning a JSON record array.
    #[arg(long)]
    url: String,

    /// Output path for the HTML table.
    #[arg(long, default_value = "employee_time.html")]
    table_out: String,

    /// Output path for the pie-chart PNG.
    #[arg(long, default_value = "employee_piechart.png")]
    chart_out: String,

    /// Side length in pixels of the square chart canvas.
    #[arg(long, default_value_t = DEFAULT_CHART_SIZE)]
    chart_size: u32,

    /// Totals strictly below this value get the low-hours highlight.
    #[arg(long, default_value_t = DEFAULT_LOW_HOURS_THRESHOLD)]
    threshold: u64,

    /// Optional seed for wedge colors; omit for per-run random colors.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Report generation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> ReportResult<()> {
    let config = ReportConfig {
        chart_size: args.chart_size,
        low_hours_threshold: args.threshold,
        color_seed: args.seed,
    };

    let raw_records = fetch_records(&args.url).await?;
    let canonical = normalize_records(&raw_records)?;
    let summary = aggregate_records(&canonical);
    info!(employees = summary.len(), "Aggregated time records");

    let html = render_table(&summary, &config);
    fs::write(&args.table_out, &html).map_err(|e| ReportError::WriteFailed {
        path: args.table_out.clone(),
        message: e.to_string(),
    })?;
    info!(path = %args.table_out, "Wrote HTML table");

    // A zero-total dataset only skips the chart; the table above already
    // covers the partial-output case.
    match render_chart(&summary, &config) {
        Ok(canvas) => {
            canvas
                .save(&args.chart_out)
                .map_err(|e| ReportError::WriteFailed {
                    path: args.chart_out.clone(),
                    message: e.to_string(),
                })?;
            info!(path = %args.chart_out, "Wrote pie chart");
        }
        Err(ReportError::EmptyDataset) => {
            warn!("Total recorded time is zero; skipping pie chart");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
