//! Raw and canonical time record types.
//!
//! This module defines the two accepted wire shapes for raw time records and
//! the canonical form produced by normalization.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A raw time-tracking record as received from the record source.
///
/// Two wire shapes are accepted; a run uses exactly one of them, selected by
/// which fetch schema is in effect. Deserialization is untagged: a record
/// carrying start/end timestamps decodes as [`RawTimeRecord::Interval`], one
/// carrying a precomputed total decodes as [`RawTimeRecord::Duration`].
///
/// Timestamps are UTC wall-clock values without an offset suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimeRecord {
    /// Work expressed as a start/end timestamp pair.
    #[serde(rename_all = "PascalCase")]
    Interval {
        /// The employee the record belongs to.
        employee_name: String,
        /// Start of the worked interval (UTC).
        start_time_utc: NaiveDateTime,
        /// End of the worked interval (UTC).
        end_time_utc: NaiveDateTime,
    },
    /// Work expressed as a precomputed whole-hour total.
    #[serde(rename_all = "PascalCase")]
    Duration {
        /// The employee the record belongs to.
        employee_name: String,
        /// Already-summed duration in whole hours.
        total_hours: u64,
    },
}

impl RawTimeRecord {
    /// Returns the employee name carried by either variant.
    pub fn employee_name(&self) -> &str {
        match self {
            RawTimeRecord::Interval { employee_name, .. } => employee_name,
            RawTimeRecord::Duration { employee_name, .. } => employee_name,
        }
    }
}

/// A normalized `(employee, duration)` pair used uniformly downstream
/// regardless of the original raw shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    /// The employee the hours belong to. Treated as an opaque key:
    /// case-sensitive, never trimmed.
    pub employee: String,
    /// Worked duration in whole hours.
    pub hours: u64,
}
