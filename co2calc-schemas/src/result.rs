use crate::category::{EmissionCategory, EmissionGroup};
use serde::{Deserialize, Serialize};

/// Aggregate emissions in kg CO2e for the two reporting groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub building: f64,
    pub transport: f64,
}

impl EmissionResult {
    /// Grand total; derived on demand, never stored.
    pub fn total(&self) -> f64 {
        self.building + self.transport
    }

    pub fn group(&self, group: EmissionGroup) -> f64 {
        match group {
            EmissionGroup::Building => self.building,
            EmissionGroup::Transport => self.transport,
        }
    }

    /// Fraction of the total contributed by `group`, `0.0` when the total is zero.
    pub fn share(&self, group: EmissionGroup) -> f64 {
        let total = self.total();
        if total == 0.0 {
            0.0
        } else {
            self.group(group) / total
        }
    }

    pub fn chart_slices(&self) -> [ChartSlice; 2] {
        EmissionGroup::ALL.map(|group| ChartSlice {
            name: group.name().to_string(),
            value: self.group(group),
        })
    }
}

/// One named slice of the building-vs-transport proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryEmission {
    pub category: EmissionCategory,
    pub quantity: f64,
    pub factor: f64,
    pub kg_co2e: f64,
}

/// Per-category products computed before the group sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub entries: Vec<CategoryEmission>,
}

impl EmissionBreakdown {
    /// Sums entries per group, left to right from zero.
    pub fn totals(&self) -> EmissionResult {
        let sum_group = |group: EmissionGroup| {
            self.entries
                .iter()
                .filter(|e| e.category.group() == group)
                .fold(0.0, |acc, e| acc + e.kg_co2e)
        };
        EmissionResult {
            building: sum_group(EmissionGroup::Building),
            transport: sum_group(EmissionGroup::Transport),
        }
    }
}
