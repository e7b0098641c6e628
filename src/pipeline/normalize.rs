//! Record normalization.
//!
//! This module converts raw time records of either wire shape into canonical
//! `(employee, hours)` pairs, filtering out invalid intervals.

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{CanonicalRecord, RawTimeRecord};

/// Normalizes raw records into canonical `(employee, hours)` pairs.
///
/// For interval records the duration is the floor of `end − start` in whole
/// hours; records where the end is not strictly after the start are dropped
/// silently (they contribute no entry, which is a defined filter rather than
/// an error). Duration records pass through unchanged, their totals trusted
/// as already-valid.
///
/// # Errors
///
/// Returns [`ReportError::MalformedRecord`] if a record carries an empty
/// employee name, identifying the record by its position in the input. The
/// run aborts rather than silently dropping malformed records.
///
/// # Examples
///
/// ```
/// use time_report::models::RawTimeRecord;
/// use time_report::pipeline::normalize_records;
///
/// let records = vec![RawTimeRecord::Duration {
///     employee_name: "Alice".to_string(),
///     total_hours: 6,
/// }];
/// let canonical = normalize_records(&records).unwrap();
/// assert_eq!(canonical[0].hours, 6);
/// ```
pub fn normalize_records(records: &[RawTimeRecord]) -> ReportResult<Vec<CanonicalRecord>> {
    let mut canonical = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.employee_name().is_empty() {
            return Err(ReportError::MalformedRecord {
                index,
                message: "employee name is empty".to_string(),
            });
        }

        match record {
            RawTimeRecord::Interval {
                employee_name,
                start_time_utc,
                end_time_utc,
            } => {
                if end_time_utc <= start_time_utc {
                    debug!(
                        employee = %employee_name,
                        index,
                        "Dropping interval record with end not after start"
                    );
                    continue;
                }
                // num_hours truncates toward zero; the interval is positive
                // here, so this is the floor in whole hours.
                let hours = (*end_time_utc - *start_time_utc).num_hours() as u64;
                canonical.push(CanonicalRecord {
                    employee: employee_name.clone(),
                    hours,
                });
            }
            RawTimeRecord::Duration {
                employee_name,
                total_hours,
            } => {
                canonical.push(CanonicalRecord {
                    employee: employee_name.clone(),
                    hours: *total_hours,
                });
            }
        }
    }

    Ok(canonical)
}
