use crate::factors::{factor_table, FactorTable};
use co2calc_schemas::{
    category::{EmissionCategory, EmissionGroup},
    input::InputRecord,
    result::{CategoryEmission, EmissionBreakdown, EmissionResult},
};
use log::debug;

/// Building and transport emissions for `input` using the standard factors.
pub fn compute_emissions(input: &InputRecord) -> EmissionResult {
    compute_emissions_with(input, factor_table())
}

/// Multiplies each quantity by its factor and sums within each group.
///
/// Plain floating-point arithmetic with no rounding; negative, infinite and
/// NaN quantities flow straight through.
pub fn compute_emissions_with(input: &InputRecord, table: &FactorTable) -> EmissionResult {
    let group_total = |group: EmissionGroup| {
        group
            .categories()
            .iter()
            .fold(0.0, |acc, &c| acc + table.get(c).apply(input.get(c)))
    };
    let result = EmissionResult {
        building: group_total(EmissionGroup::Building),
        transport: group_total(EmissionGroup::Transport),
    };
    debug!(
        "Computed emissions: building={} transport={} kg CO2e",
        result.building, result.transport
    );
    result
}

pub fn breakdown(input: &InputRecord, table: &FactorTable) -> EmissionBreakdown {
    let entries = EmissionCategory::ALL
        .iter()
        .map(|&category| {
            let factor = table.get(category);
            let quantity = input.get(category);
            CategoryEmission {
                category,
                quantity,
                factor: factor.value,
                kg_co2e: factor.apply(quantity),
            }
        })
        .collect();
    EmissionBreakdown { entries }
}
