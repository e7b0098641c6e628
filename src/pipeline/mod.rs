//! Aggregation pipeline for the time report generator.
//!
//! This module contains the two computation stages that turn raw records
//! into the ordered per-employee summary: normalization (canonicalizing
//! either raw shape into whole-hour durations) and aggregation (grouping,
//! summing, and ranking).

mod aggregate;
mod normalize;

pub use aggregate::aggregate_records;
pub use normalize::normalize_records;
