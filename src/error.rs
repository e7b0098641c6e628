//! Error types for the time report generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in the report pipeline and its collaborators.

use thiserror::Error;

/// The main error type for the time report generator.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle failures consistently at the wrapper layer.
///
/// # Example
///
/// ```
/// use time_report::error::ReportError;
///
/// let error = ReportError::EmptyDataset;
/// assert_eq!(
///     error.to_string(),
///     "Cannot render chart: total recorded time is zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A raw record could not be normalized (missing or invalid fields).
    ///
    /// Distinct from the invalid-interval case (end ≤ start), which is a
    /// defined filter during normalization, not an error.
    #[error("Malformed record at index {index}: {message}")]
    MalformedRecord {
        /// Zero-based position of the offending record in the input sequence.
        index: usize,
        /// A description of what made the record malformed.
        message: String,
    },

    /// The chart renderer was given a summary whose total time is zero.
    ///
    /// Raised for an empty summary or one where every employee has zero
    /// recorded time; guards the proportional-share division.
    #[error("Cannot render chart: total recorded time is zero")]
    EmptyDataset,

    /// The record source could not produce a record sequence.
    #[error("Failed to fetch records: {message}")]
    FetchFailed {
        /// A description of the transport or decode failure.
        message: String,
    },

    /// An output artifact could not be persisted.
    #[error("Failed to write '{path}': {message}")]
    WriteFailed {
        /// The destination path that could not be written.
        path: String,
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
