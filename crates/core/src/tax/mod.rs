//! PAYG withholding calculation.
//!
//! This module implements the tax engine:
//! - Marginal bracket lookup over the resident schedule
//! - Medicare levy surcharge above the exemption threshold
//! - Weekly/fortnightly/monthly annualization entry points

pub mod brackets;
pub mod engine;

#[cfg(test)]
mod engine_props;

pub use brackets::bracket_for;
pub use engine::{
    calculate_annual_tax, calculate_fortnightly_tax, calculate_monthly_tax, calculate_period_tax,
    calculate_weekly_tax,
};
