use crate::category::EmissionCategory;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// Annual activity quantities, one per category, in the category's own unit.
///
/// Missing fields deserialize to zero and string values are parsed with
/// [`parse_quantity`]. Keys outside the category set are rejected.
/// Negative values are kept as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InputRecord {
    // Building
    #[serde(alias = "electricity", deserialize_with = "lenient_quantity")]
    pub electricity_consumption: f64,
    #[serde(alias = "waste", deserialize_with = "lenient_quantity")]
    pub waste_generated: f64,
    #[serde(alias = "water", deserialize_with = "lenient_quantity")]
    pub water_consumption: f64,
    #[serde(alias = "gas", deserialize_with = "lenient_quantity")]
    pub gas_consumption: f64,

    // Transport
    #[serde(alias = "car", deserialize_with = "lenient_quantity")]
    pub car_travel: f64,
    #[serde(alias = "bus", deserialize_with = "lenient_quantity")]
    pub bus_travel: f64,
    #[serde(alias = "train", deserialize_with = "lenient_quantity")]
    pub train_travel: f64,
    #[serde(alias = "flightShort", deserialize_with = "lenient_quantity")]
    pub flight_short_haul: f64,
}

impl InputRecord {
    /// The figures the calculator form starts out with.
    pub fn preset() -> Self {
        Self {
            electricity_consumption: 25000.0,
            waste_generated: 5000.0,
            water_consumption: 1000.0,
            gas_consumption: 10000.0,
            car_travel: 50000.0,
            bus_travel: 20000.0,
            train_travel: 15000.0,
            flight_short_haul: 10000.0,
        }
    }

    /// Builds a record from quantities ordered as [`EmissionCategory::ALL`].
    pub fn from_quantities(quantities: [f64; EmissionCategory::COUNT]) -> Self {
        let mut record = Self::default();
        for (category, quantity) in EmissionCategory::ALL.into_iter().zip(quantities) {
            record.set(category, quantity);
        }
        record
    }

    pub fn quantities(&self) -> [f64; EmissionCategory::COUNT] {
        EmissionCategory::ALL.map(|c| self.get(c))
    }

    pub fn get(&self, category: EmissionCategory) -> f64 {
        match category {
            EmissionCategory::Electricity => self.electricity_consumption,
            EmissionCategory::Waste => self.waste_generated,
            EmissionCategory::Water => self.water_consumption,
            EmissionCategory::Gas => self.gas_consumption,
            EmissionCategory::Car => self.car_travel,
            EmissionCategory::Bus => self.bus_travel,
            EmissionCategory::Train => self.train_travel,
            EmissionCategory::FlightShort => self.flight_short_haul,
        }
    }

    pub fn set(&mut self, category: EmissionCategory, quantity: f64) {
        let slot = match category {
            EmissionCategory::Electricity => &mut self.electricity_consumption,
            EmissionCategory::Waste => &mut self.waste_generated,
            EmissionCategory::Water => &mut self.water_consumption,
            EmissionCategory::Gas => &mut self.gas_consumption,
            EmissionCategory::Car => &mut self.car_travel,
            EmissionCategory::Bus => &mut self.bus_travel,
            EmissionCategory::Train => &mut self.train_travel,
            EmissionCategory::FlightShort => &mut self.flight_short_haul,
        };
        *slot = quantity;
    }

    pub fn with(mut self, category: EmissionCategory, quantity: f64) -> Self {
        self.set(category, quantity);
        self
    }

    /// Every quantity multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Self::from_quantities(self.quantities().map(|q| q * k))
    }
}

/// Parses user-entered text the way a browser number field's `parseFloat(v) || 0` does.
///
/// Leading whitespace is skipped and the longest leading decimal literal is
/// read; whatever follows it is ignored. Text without a leading number, NaN
/// and negative zero all give `0.0`.
pub fn parse_quantity(raw: &str) -> f64 {
    match leading_number(raw) {
        Some(value) if value != 0.0 => value,
        _ => 0.0,
    }
}

/// Like [`parse_quantity`], but logs a warning naming `field` when the text
/// holds no leading number and is replaced by zero.
pub fn parse_quantity_or_warn(raw: &str, field: &str) -> f64 {
    match leading_number(raw) {
        Some(value) if value != 0.0 => value,
        Some(_) => 0.0,
        None => {
            warn!("Unparseable value '{}' for {} treated as 0", raw, field);
            0.0
        }
    }
}

/// The longest leading decimal literal of `raw`, or `None` if there is none.
fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &s[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_part = &s[frac_start..end];
        pos = end;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exp_part = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exp_part = &s[pos + 1..end];
        }
    }

    let mut literal = String::with_capacity(s.len() + 2);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }
    if !exp_part.is_empty() {
        literal.push('e');
        literal.push_str(exp_part);
    }

    literal.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Accepts a number or a string for a quantity field; anything else becomes zero.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let quantity = match &raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => parse_quantity_or_warn(s, "quantity"),
        other => {
            warn!("Unparseable value '{}' for quantity treated as 0", other);
            0.0
        }
    };
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quantity_reads_plain_numbers() {
        assert_eq!(parse_quantity("25000"), 25000.0);
        assert_eq!(parse_quantity("0.233"), 0.233);
        assert_eq!(parse_quantity("-12.5"), -12.5);
        assert_eq!(parse_quantity("+3"), 3.0);
        assert_eq!(parse_quantity(".5"), 0.5);
        assert_eq!(parse_quantity("1e3"), 1000.0);
        assert_eq!(parse_quantity("2.5E-1"), 0.25);
    }

    #[test]
    fn parse_quantity_ignores_trailing_text() {
        assert_eq!(parse_quantity("  42 kWh"), 42.0);
        assert_eq!(parse_quantity("1,500"), 1.0);
        assert_eq!(parse_quantity("7."), 7.0);
        assert_eq!(parse_quantity("3e"), 3.0);
        assert_eq!(parse_quantity("3e+"), 3.0);
    }

    #[test]
    fn parse_quantity_falls_back_to_zero() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity("-"), 0.0);
        assert_eq!(parse_quantity("."), 0.0);
        assert_eq!(parse_quantity("NaN"), 0.0);
        assert!(parse_quantity("-0").is_sign_positive());
    }

    #[test]
    fn parse_quantity_accepts_infinity() {
        assert_eq!(parse_quantity("Infinity"), f64::INFINITY);
        assert_eq!(parse_quantity("-Infinityx"), f64::NEG_INFINITY);
        assert_eq!(parse_quantity("inf"), 0.0);
    }

    #[test]
    fn warning_parse_agrees_with_plain_parse() {
        for raw in ["42 kWh", "0", "-0", "", "NaN", "inf", "infinity", "Infinity", "abc", ".5e2"] {
            let plain = parse_quantity(raw);
            let warned = parse_quantity_or_warn(raw, "test");
            assert_eq!(plain.to_bits(), warned.to_bits(), "mismatch for {:?}", raw);
        }
    }

    #[test]
    fn rust_only_float_spellings_have_no_leading_number() {
        assert_eq!(leading_number("NaN"), None);
        assert_eq!(leading_number("inf"), None);
        assert_eq!(leading_number("infinity"), None);
        assert_eq!(leading_number("abc"), None);
        assert_eq!(leading_number("0"), Some(0.0));
        assert_eq!(leading_number("12 km"), Some(12.0));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = serde_yaml::from_str::<InputRecord>("ferry: 10
").unwrap_err();
        assert!(err.to_string().contains("ferry"));
        assert!(serde_json::from_str::<InputRecord>(r#"{"electricityConsumtion": 5000}"#).is_err());
    }

    #[test]
    fn get_and_set_cover_every_category() {
        let mut record = InputRecord::default();
        for (i, category) in EmissionCategory::ALL.into_iter().enumerate() {
            record.set(category, i as f64 + 1.0);
        }
        assert_eq!(record.quantities(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(InputRecord::from_quantities(record.quantities()), record);
    }

    #[test]
    fn deserializes_original_field_names() {
        let json = r#"{
            "electricityConsumption": 25000,
            "wasteGenerated": 5000,
            "waterConsumption": 1000,
            "gasConsumption": 10000,
            "carTravel": 50000,
            "busTravel": 20000,
            "trainTravel": 15000,
            "flightShortHaul": 10000
        }"#;
        let record: InputRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, InputRecord::preset());
    }

    #[test]
    fn deserializes_missing_and_malformed_fields_as_zero() {
        let yaml = "electricity: \"1200 kWh\"\nwasteGenerated: lots\ngas: ~\ncarTravel: [1, 2]\nbus: true\n";
        let record: InputRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.electricity_consumption, 1200.0);
        assert_eq!(record.waste_generated, 0.0);
        assert_eq!(record.gas_consumption, 0.0);
        assert_eq!(record.car_travel, 0.0);
        assert_eq!(record.bus_travel, 0.0);
        assert_eq!(record.flight_short_haul, 0.0);
    }

    #[test]
    fn serializes_with_original_field_names() {
        let value = serde_json::to_value(InputRecord::default().with(EmissionCategory::FlightShort, 2.0)).unwrap();
        assert_eq!(value["flightShortHaul"], 2.0);
        assert_eq!(value["electricityConsumption"], 0.0);
    }
}
