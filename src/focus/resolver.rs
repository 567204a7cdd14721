use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::dnd::{load_assertions, load_mode_names, select_current_mode, ModeNameIndex};
use crate::error::Result;
use crate::{log_debug, log_info, log_warn};

use super::writer::write_result;

const ENABLE_LOGS: bool = true;

/// Written when there is no assertion to resolve.
pub const NO_FOCUS: &str = "None";

/// Display name for `identifier`, falling back to the identifier itself.
pub fn resolve_name(identifier: Option<&str>, index: &ModeNameIndex) -> String {
    let Some(identifier) = identifier else {
        return NO_FOCUS.to_string();
    };

    match index.get(identifier) {
        Some(name) => name.to_string(),
        None => {
            log_warn!("[resolver] no configured name for mode \"{identifier}\"; using identifier");
            identifier.to_string()
        }
    }
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusReport {
    pub name: String,
    pub mode_identifier: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub record_count: usize,
}

/// Reads both database files and works out the active focus.
#[derive(Debug, Clone)]
pub struct FocusResolver {
    assertions_path: PathBuf,
    modes_path: PathBuf,
}

impl FocusResolver {
    pub fn new(assertions_path: impl Into<PathBuf>, modes_path: impl Into<PathBuf>) -> Self {
        Self {
            assertions_path: assertions_path.into(),
            modes_path: modes_path.into(),
        }
    }

    /// Load, scan and look up. Touches no output.
    pub fn resolve(&self) -> Result<FocusReport> {
        let records = load_assertions(&self.assertions_path)?;
        let index = load_mode_names(&self.modes_path)?;

        let current = select_current_mode(&records);
        let mode_identifier = current.map(|record| record.mode_identifier.clone());
        let started_at = current.and_then(|record| record.started_at());
        let name = resolve_name(mode_identifier.as_deref(), &index);

        match (&mode_identifier, started_at) {
            (Some(id), Some(at)) => {
                log_info!("[resolver] current focus \"{name}\" ({id}) since {}", at.to_rfc3339())
            }
            (Some(id), None) => log_info!("[resolver] current focus \"{name}\" ({id})"),
            (None, _) => log_debug!("[resolver] no assertion records; no focus active"),
        }

        Ok(FocusReport {
            name,
            mode_identifier,
            started_at,
            record_count: records.len(),
        })
    }

    /// Resolve the focus and write it to `output`.
    pub fn run(&self, output: impl Into<PathBuf>) -> Result<FocusReport> {
        let report = self.resolve()?;
        write_result(&output.into(), &report.name)?;
        Ok(report)
    }
}
