use serde::Serialize;
use std::fmt;

/// Emission per unit of activity, with the display unit and its citation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactor {
    pub value: f64,
    pub unit: &'static str,
    pub source: &'static str,
}

impl EmissionFactor {
    pub const fn new(value: f64, unit: &'static str, source: &'static str) -> Self {
        Self { value, unit, source }
    }

    /// Emissions in kg CO2e for `quantity` units of activity.
    pub fn apply(&self, quantity: f64) -> f64 {
        quantity * self.value
    }
}

impl fmt::Display for EmissionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {}", self.value, self.unit)
    }
}
