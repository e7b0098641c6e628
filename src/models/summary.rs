//! Per-employee summary model.

use serde::{Deserialize, Serialize};

/// The summed recorded time for one employee.
///
/// Produced by the aggregator, one instance per distinct employee name
/// appearing in at least one valid record. Immutable once produced; both
/// renderers borrow the summary list read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee name, unique within a summary list.
    pub name: String,
    /// Total worked time in whole hours across all valid records.
    pub total_time: u64,
}
