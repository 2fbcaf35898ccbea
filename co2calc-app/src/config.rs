use anyhow::{Context, Result};
use clap::Args;
use co2calc_core::input::{self as core_input, apply_overrides, parse_overrides};
use co2calc_schemas::{category::EmissionCategory, input::InputRecord};
use std::path::PathBuf;

/// Where the eight input quantities come from.
///
/// Precedence, lowest first: zeros or `--preset`, then `--input`, then the
/// per-category flags, then `--set` pairs.
#[derive(Debug, Default, Args)]
pub struct InputArgs {
    /// Start from the calculator's preset figures instead of zeros
    #[arg(long)]
    pub preset: bool,

    /// YAML or JSON file with the input record
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Electricity consumption (kWh/year)
    #[arg(long, value_name = "KWH", allow_hyphen_values = true)]
    pub electricity: Option<String>,

    /// Waste generated (kg/year)
    #[arg(long, value_name = "KG", allow_hyphen_values = true)]
    pub waste: Option<String>,

    /// Water consumption (m³/year)
    #[arg(long, value_name = "M3", allow_hyphen_values = true)]
    pub water: Option<String>,

    /// Gas consumption (m³/year)
    #[arg(long, value_name = "M3", allow_hyphen_values = true)]
    pub gas: Option<String>,

    /// Car travel (km/year)
    #[arg(long, value_name = "KM", allow_hyphen_values = true)]
    pub car: Option<String>,

    /// Bus travel (km/year)
    #[arg(long, value_name = "KM", allow_hyphen_values = true)]
    pub bus: Option<String>,

    /// Train travel (km/year)
    #[arg(long, value_name = "KM", allow_hyphen_values = true)]
    pub train: Option<String>,

    /// Short haul flights (km/year)
    #[arg(long, value_name = "KM", allow_hyphen_values = true)]
    pub flight_short: Option<String>,

    /// Override any category as KEY=VALUE (e.g. flightShortHaul=1200)
    #[arg(long = "set", value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub overrides: Vec<String>,
}

impl InputArgs {
    fn category_flags(&self) -> [(EmissionCategory, Option<&str>); EmissionCategory::COUNT] {
        [
            (EmissionCategory::Electricity, self.electricity.as_deref()),
            (EmissionCategory::Waste, self.waste.as_deref()),
            (EmissionCategory::Water, self.water.as_deref()),
            (EmissionCategory::Gas, self.gas.as_deref()),
            (EmissionCategory::Car, self.car.as_deref()),
            (EmissionCategory::Bus, self.bus.as_deref()),
            (EmissionCategory::Train, self.train.as_deref()),
            (EmissionCategory::FlightShort, self.flight_short.as_deref()),
        ]
    }
}

/// Assembles the input record from the command line.
pub fn resolve_input(args: &InputArgs) -> Result<InputRecord> {
    // Unknown --set keys fail before any file is read.
    let overrides = parse_overrides(&args.overrides).context("Invalid --set override")?;

    let mut record = match &args.input {
        Some(path) => core_input::load_input_record(path)
            .with_context(|| format!("Failed to load input from {:?}", path))?,
        None if args.preset => InputRecord::preset(),
        None => InputRecord::default(),
    };

    for (category, raw) in args.category_flags() {
        if let Some(raw) = raw {
            record.set(category, core_input::lenient(category, raw));
        }
    }
    apply_overrides(&mut record, &overrides);

    Ok(record)
}
