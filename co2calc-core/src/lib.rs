//! Emission factor table and the emissions calculator.

pub mod calculator;
pub mod error;
pub mod export;
pub mod factors;
pub mod input;

pub use calculator::{breakdown, compute_emissions, compute_emissions_with};
pub use factors::{factor_table, FactorTable};
