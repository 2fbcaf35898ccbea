//! The fixed emission factor table.

use co2calc_schemas::{category::EmissionCategory, factor::EmissionFactor};

/// One factor per category, indexed by [`EmissionCategory::index`].
///
/// The array length is the category count, so every category always has a
/// factor and there is no way to add or remove one after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable {
    factors: [EmissionFactor; EmissionCategory::COUNT],
}

static FACTOR_TABLE: FactorTable = FactorTable::standard();

/// The process-wide factor table.
pub fn factor_table() -> &'static FactorTable {
    &FACTOR_TABLE
}

impl FactorTable {
    pub const fn standard() -> Self {
        Self {
            factors: [
                // Building
                EmissionFactor::new(0.233, "kg CO2e/kWh", "EU EEA"),
                EmissionFactor::new(0.500, "kg CO2e/kg", "EU EEA"),
                EmissionFactor::new(0.300, "kg CO2e/m³", "EU EEA"),
                EmissionFactor::new(2.000, "kg CO2e/m³", "EU EEA"),
                // Transport
                EmissionFactor::new(0.120, "kg CO2e/km", "EU JRC"),
                EmissionFactor::new(0.080, "kg CO2e/km", "EU EEA"),
                EmissionFactor::new(0.020, "kg CO2e/km", "EU EEA"),
                EmissionFactor::new(0.140, "kg CO2e/km", "EU EEA"),
            ],
        }
    }

    pub fn get(&self, category: EmissionCategory) -> &EmissionFactor {
        &self.factors[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmissionCategory, &EmissionFactor)> + '_ {
        EmissionCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        let table = factor_table();
        let values: Vec<f64> = table.iter().map(|(_, f)| f.value).collect();
        assert_eq!(values, vec![0.233, 0.5, 0.3, 2.0, 0.12, 0.08, 0.02, 0.14]);
    }

    #[test]
    fn every_factor_is_positive_and_cited() {
        for (category, factor) in factor_table().iter() {
            assert!(factor.value > 0.0, "{} factor must be positive", category);
            assert!(factor.unit.starts_with("kg CO2e/"));
            assert!(!factor.source.is_empty());
        }
    }

    #[test]
    fn car_factor_is_from_jrc() {
        assert_eq!(factor_table().get(EmissionCategory::Car).source, "EU JRC");
        assert_eq!(factor_table().get(EmissionCategory::Gas).unit, "kg CO2e/m³");
    }
}
