use anyhow::Result;
use clap::ValueEnum;
use co2calc_core::{export, FactorTable};
use co2calc_schemas::{
    category::EmissionGroup,
    input::InputRecord,
    result::{EmissionBreakdown, EmissionResult},
};
use serde::Serialize;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct CalculationReport<'a> {
    input: &'a InputRecord,
    result: &'a EmissionResult,
    total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a EmissionBreakdown>,
}

#[derive(Debug, Serialize)]
struct FactorEntry<'a> {
    category: &'a str,
    group: &'a str,
    value: f64,
    unit: &'a str,
    source: &'a str,
}

/// Writes the calculation result to stdout in the requested format.
///
/// CSV output is the per-category breakdown.
pub fn emit_calculation(
    format: ReportFormat,
    input: &InputRecord,
    result: &EmissionResult,
    breakdown: Option<&EmissionBreakdown>,
    table: &FactorTable,
) -> Result<()> {
    match format {
        ReportFormat::Text => print_summary_report(input, result, breakdown, table),
        ReportFormat::Json => {
            let report = CalculationReport {
                input,
                result,
                total: result.total(),
                breakdown,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ReportFormat::Csv => {
            let owned;
            let breakdown = match breakdown {
                Some(b) => b,
                None => {
                    owned = co2calc_core::breakdown(input, table);
                    &owned
                }
            };
            export::write_breakdown_csv(breakdown, io::stdout().lock())?;
        }
    }
    Ok(())
}

fn print_summary_report(
    input: &InputRecord,
    result: &EmissionResult,
    breakdown: Option<&EmissionBreakdown>,
    table: &FactorTable,
) {
    println!("\n--- [Report] SME CO2 Footprint ---");
    println!("========================================");

    for group in EmissionGroup::ALL {
        println!("{} Emissions:", group);
        for &category in group.categories() {
            let factor = table.get(category);
            println!(
                "  - {:<30} {:>14.2}  ({})",
                category.label(),
                input.get(category),
                factor.unit
            );
        }
    }
    println!("----------------------------------------");

    if let Some(breakdown) = breakdown {
        println!("\nPer-Category Emissions:");
        for entry in &breakdown.entries {
            println!(
                "  - {:<12} {:>14.2} x {:<6.3} = {:>12.2} kg CO2e",
                entry.category.key(),
                entry.quantity,
                entry.factor,
                entry.kg_co2e
            );
        }
        println!("----------------------------------------");
    }

    println!("\nResults:");
    println!("  Total CO2 Emissions: {:.2} kg CO2e", result.total());
    println!(
        "  - Building:  {:.2} kg CO2e ({:.1}%)",
        result.building,
        result.share(EmissionGroup::Building) * 100.0
    );
    println!(
        "  - Transport: {:.2} kg CO2e ({:.1}%)",
        result.transport,
        result.share(EmissionGroup::Transport) * 100.0
    );
    println!("========================================");
}

/// Prints the emission factor table.
pub fn print_factor_table(table: &FactorTable, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            println!("{:<12} {:<10} {:>7}  {:<12} {}", "category", "group", "factor", "unit", "source");
            for (category, factor) in table.iter() {
                println!(
                    "{:<12} {:<10} {:>7.3}  {:<12} {}",
                    category.key(),
                    category.group(),
                    factor.value,
                    factor.unit,
                    factor.source
                );
            }
        }
        ReportFormat::Json => {
            let entries: Vec<FactorEntry> = table
                .iter()
                .map(|(category, factor)| FactorEntry {
                    category: category.key(),
                    group: category.group().name(),
                    value: factor.value,
                    unit: factor.unit,
                    source: factor.source,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        ReportFormat::Csv => export::write_factor_table_csv(table, io::stdout().lock())?,
    }
    Ok(())
}
