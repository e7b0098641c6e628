//! Record source collaborator.
//!
//! This module fetches the raw record sequence from an HTTP endpoint
//! returning a JSON array in one of the two accepted record shapes. A single
//! GET, no retries: transport and decode failures are surfaced to the caller
//! as [`ReportError::FetchFailed`].

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::models::RawTimeRecord;

/// Decodes a JSON array of raw time records.
///
/// # Errors
///
/// Returns [`ReportError::FetchFailed`] when the body is not a JSON array of
/// records in an accepted shape.
pub fn decode_records(body: &str) -> ReportResult<Vec<RawTimeRecord>> {
    serde_json::from_str(body).map_err(|e| ReportError::FetchFailed {
        message: format!("invalid record payload: {e}"),
    })
}

/// Fetches raw time records from `url`.
///
/// # Errors
///
/// Returns [`ReportError::FetchFailed`] on a transport failure, a non-2xx
/// response status, or an undecodable body.
pub async fn fetch_records(url: &str) -> ReportResult<Vec<RawTimeRecord>> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| ReportError::FetchFailed {
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ReportError::FetchFailed {
            message: format!("unexpected response status {status}"),
        });
    }

    let body = response.text().await.map_err(|e| ReportError::FetchFailed {
        message: e.to_string(),
    })?;
    let records = decode_records(&body)?;

    info!(count = records.len(), "Fetched raw time records");
    Ok(records)
}
