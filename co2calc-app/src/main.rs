use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use co2calc_core::{breakdown, compute_emissions, factor_table};
use std::fs;
use std::path::PathBuf;

use crate::config::InputArgs;
use crate::report::ReportFormat;

mod config;
mod plotting;
mod report;

#[derive(Debug, Parser)]
#[command(name = "co2calc", version, about = "SME CO2 footprint calculator")]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute building and transport emissions
    Calculate {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Include the per-category products
        #[arg(long)]
        breakdown: bool,

        /// Save a pie chart of building vs transport to FILE (PNG)
        #[arg(long, value_name = "FILE")]
        chart: Option<PathBuf>,

        /// Save a timestamped pie chart into DIR
        #[arg(long, value_name = "DIR", conflicts_with = "chart")]
        output_dir: Option<PathBuf>,
    },
    /// Print the emission factor table
    Factors {
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Calculate {
            input,
            format,
            breakdown: with_breakdown,
            chart,
            output_dir,
        } => {
            let record = config::resolve_input(&input)?;
            if format == ReportFormat::Text {
                println!("--- SME CO2 Footprint Calculator ---");
            }
            let table = factor_table();
            let result = compute_emissions(&record);
            let parts = with_breakdown.then(|| breakdown(&record, table));

            report::emit_calculation(format, &record, &result, parts.as_ref(), table)?;

            let chart_path = match (chart, output_dir) {
                (Some(path), _) => Some(path),
                (None, Some(dir)) => {
                    fs::create_dir_all(&dir)
                        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
                    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
                    Some(dir.join(format!("co2_breakdown_{}.png", stamp)))
                }
                (None, None) => None,
            };
            if let Some(path) = chart_path {
                plotting::plot_emissions_pie(&path, &result)
                    .with_context(|| format!("Failed to render chart to {:?}", path))?;
                if format == ReportFormat::Text {
                    println!("\nChart saved to '{}'", path.display());
                }
            }
        }
        Command::Factors { format } => report::print_factor_table(factor_table(), format)?,
    }

    Ok(())
}
