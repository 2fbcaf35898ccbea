use crate::{error::Co2Error, factors::FactorTable};
use co2calc_schemas::result::EmissionBreakdown;
use csv::Writer;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct FactorRow<'a> {
    category: &'a str,
    group: &'a str,
    value: f64,
    unit: &'a str,
    source: &'a str,
}

#[derive(Debug, Serialize)]
struct BreakdownRow<'a> {
    category: &'a str,
    group: &'a str,
    quantity: f64,
    factor: f64,
    kg_co2e: f64,
}

/// Writes the factor table as CSV, one row per category.
pub fn write_factor_table_csv<W: Write>(table: &FactorTable, out: W) -> Result<(), Co2Error> {
    let mut writer = Writer::from_writer(out);
    for (category, factor) in table.iter() {
        writer.serialize(FactorRow {
            category: category.key(),
            group: category.group().name(),
            value: factor.value,
            unit: factor.unit,
            source: factor.source,
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the per-category products as CSV.
pub fn write_breakdown_csv<W: Write>(breakdown: &EmissionBreakdown, out: W) -> Result<(), Co2Error> {
    let mut writer = Writer::from_writer(out);
    for entry in &breakdown.entries {
        writer.serialize(BreakdownRow {
            category: entry.category.key(),
            group: entry.category.group().name(),
            quantity: entry.quantity,
            factor: entry.factor,
            kg_co2e: entry.kg_co2e,
        })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculator::breakdown, factors::factor_table};
    use co2calc_schemas::input::InputRecord;

    #[test]
    fn factor_csv_has_header_and_eight_rows() {
        let mut buf = Vec::new();
        write_factor_table_csv(factor_table(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "category,group,value,unit,source");
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "electricity,Building,0.233,kg CO2e/kWh,EU EEA");
        assert_eq!(lines[5], "car,Transport,0.12,kg CO2e/km,EU JRC");
    }

    #[test]
    fn breakdown_csv_rows_follow_category_order() {
        let mut buf = Vec::new();
        let parts = breakdown(&InputRecord::preset(), factor_table());
        write_breakdown_csv(&parts, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "category,group,quantity,factor,kg_co2e");
        assert!(lines[4].starts_with("gas,Building,10000.0,2.0,20000"));
        assert!(lines[8].starts_with("flightShort,Transport,10000.0,0.14,"));
    }
}
