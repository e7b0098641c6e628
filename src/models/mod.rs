//! Core data models for the time report generator.
//!
//! This module contains the record and summary types used throughout the
//! pipeline.

mod record;
mod summary;

pub use record::{CanonicalRecord, RawTimeRecord};
pub use summary::EmployeeSummary;
