//! tally-stats-core: Descriptive statistics over query results
//!
//! This crate computes sums, means, counts, extrema, dispersion, median, mode
//! and OLS trend lines over either plain numbers or record sets from which a
//! named field is projected first.

pub mod aggregate;
pub mod errors;
pub mod models;
pub mod record;
pub mod types;

pub use aggregate::{coerce_numeric, make_numeric, Sample};
pub use errors::{StatsError, StatsResult};
pub use models::LinearRegression;
pub use record::{Observation, Record};
pub use types::*;
