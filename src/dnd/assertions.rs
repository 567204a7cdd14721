use std::path::Path;

use crate::error::Result;
use crate::log_debug;

use super::models::{AssertionRecord, AssertionsFile};
use super::read_json;

const ENABLE_LOGS: bool = true;

/// Load the assertion records of the first `data` entry in `Assertions.json`.
///
/// An empty or missing `data` array yields no records rather than an error.
pub fn load_assertions(path: &Path) -> Result<Vec<AssertionRecord>> {
    let file: AssertionsFile = read_json(path)?;

    let records: Vec<AssertionRecord> = file
        .data
        .into_iter()
        .next()
        .map(|entry| {
            entry
                .store_assertion_records
                .into_iter()
                .map(AssertionRecord::from)
                .collect()
        })
        .unwrap_or_default();

    log_debug!(
        "[assertions] loaded {} records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

/// Pick the record with the latest start timestamp in a single pass.
///
/// Ties keep the record seen first, so equal timestamps resolve the same way
/// on every run.
pub fn select_current_mode(records: &[AssertionRecord]) -> Option<&AssertionRecord> {
    let mut latest: Option<&AssertionRecord> = None;

    for record in records {
        match latest {
            Some(current) if record.start_timestamp <= current.start_timestamp => {}
            _ => latest = Some(record),
        }
    }

    latest
}
