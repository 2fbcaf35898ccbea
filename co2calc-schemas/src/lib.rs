//! Shared records for the SME CO2 footprint calculator.

pub mod category;
pub mod factor;
pub mod input;
pub mod result;
