//! Per-employee aggregation.
//!
//! This module groups canonical records by employee, sums their durations,
//! and ranks the result.

use std::collections::HashMap;

use crate::models::{CanonicalRecord, EmployeeSummary};

/// Groups canonical records by employee and produces the ranked summary.
///
/// Grouping is by exact string equality: names are opaque keys, compared
/// case-sensitively and never trimmed. The result is sorted descending by
/// total time; employees with equal totals keep their first-appearance order
/// from the input (the sort is stable and groups are created in first-seen
/// order). Empty input yields an empty summary.
///
/// # Examples
///
/// ```
/// use time_report::models::CanonicalRecord;
/// use time_report::pipeline::aggregate_records;
///
/// let records = vec![
///     CanonicalRecord { employee: "Alice".to_string(), hours: 4 },
///     CanonicalRecord { employee: "Bob".to_string(), hours: 9 },
///     CanonicalRecord { employee: "Alice".to_string(), hours: 2 },
/// ];
/// let summary = aggregate_records(&records);
/// assert_eq!(summary[0].name, "Bob");
/// assert_eq!(summary[1].total_time, 6);
/// ```
pub fn aggregate_records(records: &[CanonicalRecord]) -> Vec<EmployeeSummary> {
    let mut summaries: Vec<EmployeeSummary> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index_by_name.get(record.employee.as_str()) {
            Some(&i) => summaries[i].total_time += record.hours,
            None => {
                index_by_name.insert(record.employee.as_str(), summaries.len());
                summaries.push(EmployeeSummary {
                    name: record.employee.clone(),
                    total_time: record.hours,
                });
            }
        }
    }

    // sort_by is stable, so ties keep first-seen order.
    summaries.sort_by(|a, b| b.total_time.cmp(&a.total_time));
    summaries
}
