//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{format_currency, format_hours_1dp, round_currency, round_hours};
