use serde::{Deserialize, Serialize};
use std::fmt;

/// The two reporting groups the eight input categories are aggregated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionGroup {
    Building,
    Transport,
}

impl EmissionGroup {
    pub const ALL: [EmissionGroup; 2] = [EmissionGroup::Building, EmissionGroup::Transport];

    pub fn name(self) -> &'static str {
        match self {
            EmissionGroup::Building => "Building",
            EmissionGroup::Transport => "Transport",
        }
    }

    /// Categories belonging to this group, in summation order.
    pub fn categories(self) -> &'static [EmissionCategory] {
        use EmissionCategory::*;
        match self {
            EmissionGroup::Building => &[Electricity, Waste, Water, Gas],
            EmissionGroup::Transport => &[Car, Bus, Train, FlightShort],
        }
    }
}

impl fmt::Display for EmissionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The closed set of activity categories an emission factor exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmissionCategory {
    Electricity,
    Waste,
    Water,
    Gas,
    Car,
    Bus,
    Train,
    FlightShort,
}

impl EmissionCategory {
    /// Building categories first, then transport; the order sums are taken in.
    pub const ALL: [EmissionCategory; 8] = [
        EmissionCategory::Electricity,
        EmissionCategory::Waste,
        EmissionCategory::Water,
        EmissionCategory::Gas,
        EmissionCategory::Car,
        EmissionCategory::Bus,
        EmissionCategory::Train,
        EmissionCategory::FlightShort,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this category in [`EmissionCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Factor-table key, e.g. `flightShort`.
    pub fn key(self) -> &'static str {
        match self {
            EmissionCategory::Electricity => "electricity",
            EmissionCategory::Waste => "waste",
            EmissionCategory::Water => "water",
            EmissionCategory::Gas => "gas",
            EmissionCategory::Car => "car",
            EmissionCategory::Bus => "bus",
            EmissionCategory::Train => "train",
            EmissionCategory::FlightShort => "flightShort",
        }
    }

    /// Name of the matching field in an input record, e.g. `flightShortHaul`.
    pub fn input_field(self) -> &'static str {
        match self {
            EmissionCategory::Electricity => "electricityConsumption",
            EmissionCategory::Waste => "wasteGenerated",
            EmissionCategory::Water => "waterConsumption",
            EmissionCategory::Gas => "gasConsumption",
            EmissionCategory::Car => "carTravel",
            EmissionCategory::Bus => "busTravel",
            EmissionCategory::Train => "trainTravel",
            EmissionCategory::FlightShort => "flightShortHaul",
        }
    }

    /// Human-readable label including the activity unit.
    pub fn label(self) -> &'static str {
        match self {
            EmissionCategory::Electricity => "Electricity (kWh/year)",
            EmissionCategory::Waste => "Waste Generated (kg/year)",
            EmissionCategory::Water => "Water Consumption (m³/year)",
            EmissionCategory::Gas => "Gas Consumption (m³/year)",
            EmissionCategory::Car => "Car Travel (km/year)",
            EmissionCategory::Bus => "Bus Travel (km/year)",
            EmissionCategory::Train => "Train Travel (km/year)",
            EmissionCategory::FlightShort => "Short Haul Flights (km/year)",
        }
    }

    pub fn group(self) -> EmissionGroup {
        match self {
            EmissionCategory::Electricity
            | EmissionCategory::Waste
            | EmissionCategory::Water
            | EmissionCategory::Gas => EmissionGroup::Building,
            EmissionCategory::Car
            | EmissionCategory::Bus
            | EmissionCategory::Train
            | EmissionCategory::FlightShort => EmissionGroup::Transport,
        }
    }

    /// Resolves a factor key or an input field name. Matching is exact.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == key || c.input_field() == key)
    }
}

impl fmt::Display for EmissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, category) in EmissionCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn groups_split_four_and_four() {
        assert_eq!(EmissionGroup::Building.categories().len(), 4);
        assert_eq!(EmissionGroup::Transport.categories().len(), 4);
        for group in EmissionGroup::ALL {
            assert!(group.categories().iter().all(|c| c.group() == group));
        }
    }

    #[test]
    fn from_key_accepts_keys_and_field_names() {
        assert_eq!(EmissionCategory::from_key("flightShort"), Some(EmissionCategory::FlightShort));
        assert_eq!(EmissionCategory::from_key("flightShortHaul"), Some(EmissionCategory::FlightShort));
        assert_eq!(EmissionCategory::from_key("wasteGenerated"), Some(EmissionCategory::Waste));
        assert_eq!(EmissionCategory::from_key("Electricity"), None);
        assert_eq!(EmissionCategory::from_key("flightLong"), None);
    }

    #[test]
    fn serde_uses_factor_keys() {
        let json = serde_json::to_string(&EmissionCategory::FlightShort).unwrap();
        assert_eq!(json, "\"flightShort\"");
    }
}
