//! On-disk shapes of the Do Not Disturb database files.
//!
//! Both files wrap their payload in `{ "data": [ ... ] }` and only the first
//! entry is meaningful. Every field is optional so a sparse file still
//! decodes, and an explicit `null` reads the same as an absent field. Only a
//! value of the wrong JSON type is rejected.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z.
const CORE_DATA_EPOCH_OFFSET_SECS: f64 = 978_307_200.0;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssertionsFile {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<AssertionsEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssertionsEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub store_assertion_records: Vec<StoreAssertionRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreAssertionRecord {
    #[serde(rename = "assertionDetails", deserialize_with = "null_as_default")]
    pub details: AssertionDetails,
    #[serde(
        rename = "assertionStartDateTimestamp",
        deserialize_with = "null_as_default"
    )]
    pub start_timestamp: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssertionDetails {
    #[serde(
        rename = "assertionDetailsModeIdentifier",
        deserialize_with = "null_as_default"
    )]
    pub mode_identifier: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModeConfigurationsFile {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<ModeConfigurationsEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModeConfigurationsEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub mode_configurations: BTreeMap<String, ModeConfigurationEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModeConfigurationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub mode: ModeConfiguration,
}

/// A named focus mode (e.g. "Work", "Sleep").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModeConfiguration {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mode_identifier: String,
}

/// A timestamped claim that a mode was switched on.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionRecord {
    pub mode_identifier: String,
    /// Core Data timestamp (seconds since 2001-01-01 UTC).
    pub start_timestamp: f64,
}

impl AssertionRecord {
    pub fn new(mode_identifier: impl Into<String>, start_timestamp: f64) -> Self {
        Self {
            mode_identifier: mode_identifier.into(),
            start_timestamp,
        }
    }

    /// Wall-clock start of the assertion, if the timestamp is representable.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        let unix = self.start_timestamp + CORE_DATA_EPOCH_OFFSET_SECS;
        if !unix.is_finite() {
            return None;
        }
        let secs = unix.floor();
        let nanos = ((unix - secs) * 1e9).round().min(999_999_999.0) as u32;
        Utc.timestamp_opt(secs as i64, nanos).single()
    }
}

impl From<StoreAssertionRecord> for AssertionRecord {
    fn from(raw: StoreAssertionRecord) -> Self {
        Self {
            mode_identifier: raw.details.mode_identifier,
            start_timestamp: raw.start_timestamp,
        }
    }
}
