use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::log_debug;

use super::models::ModeConfigurationsFile;
use super::read_json;

const ENABLE_LOGS: bool = true;

/// Mode identifier → display name, built once per run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModeNameIndex {
    names: HashMap<String, String>,
}

impl ModeNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mode_identifier: impl Into<String>, name: impl Into<String>) {
        self.names.insert(mode_identifier.into(), name.into());
    }

    pub fn get(&self, mode_identifier: &str) -> Option<&str> {
        self.names.get(mode_identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for ModeNameIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Build the name index from the first `data` entry of `ModeConfigurations.json`.
///
/// Each configuration is reachable by its mapping key and by its nested
/// `modeIdentifier`. Nested identifiers are inserted last so they win when a
/// key of one entry equals the identifier of another.
pub fn load_mode_names(path: &Path) -> Result<ModeNameIndex> {
    let file: ModeConfigurationsFile = read_json(path)?;

    let mut index = ModeNameIndex::new();
    if let Some(entry) = file.data.into_iter().next() {
        for (key, config) in &entry.mode_configurations {
            index.insert(key.clone(), config.mode.name.clone());
        }
        for config in entry.mode_configurations.into_values() {
            if !config.mode.mode_identifier.is_empty() {
                index.insert(config.mode.mode_identifier, config.mode.name);
            }
        }
    }

    log_debug!(
        "[modes] indexed {} mode names from {}",
        index.len(),
        path.display()
    );

    Ok(index)
}
