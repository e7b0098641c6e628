//! Employee Time Report Generator
//!
//! This crate aggregates raw time-tracking records per employee and renders
//! the result as two artifacts: a color-coded HTML table and a pie-chart PNG
//! showing each employee's proportional share of the total recorded time.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod source;
