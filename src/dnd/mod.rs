//! Readers for the macOS Do Not Disturb database (`~/Library/DoNotDisturb/DB`).

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::error::{FocusError, Result};

pub mod assertions;
pub mod models;
pub mod modes;

pub use assertions::{load_assertions, select_current_mode};
pub use models::{AssertionRecord, ModeConfiguration};
pub use modes::{load_mode_names, ModeNameIndex};

/// Read a whole file and decode it as `T`. The file is closed before decoding.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).map_err(|source| FocusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| FocusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
