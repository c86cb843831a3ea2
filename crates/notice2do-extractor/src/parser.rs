//! Parse generation output into a notice record

use crate::error::ExtractorError;
use notice2do_domain::NoticeRecord;
use tracing::warn;

/// Parse the backend payload and re-check the schema bounds
///
/// Strict mode is supposed to make this infallible; any failure here means
/// the backend broke its contract and is reported as an upstream error.
/// The payload must be the bare JSON object, no surrounding text.
pub fn parse_notice_record(payload: &str) -> Result<NoticeRecord, ExtractorError> {
    let record: NoticeRecord = serde_json::from_str(payload).map_err(|e| {
        warn!("Response does not match the output schema: {}", e);
        ExtractorError::Upstream(format!("response does not match the output schema: {}", e))
    })?;

    record.validate().map_err(|e| {
        warn!("Response violates schema bounds: {}", e);
        ExtractorError::Upstream(format!("response violates schema bounds: {}", e))
    })?;

    Ok(record)
}
