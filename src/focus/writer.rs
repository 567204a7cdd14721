use std::{fs, path::Path};

use crate::error::{FocusError, Result};
use crate::log_info;

const ENABLE_LOGS: bool = true;

/// Overwrite `path` with `name` followed by a single newline.
pub fn write_result(path: &Path, name: &str) -> Result<()> {
    let mut contents = String::with_capacity(name.len() + 1);
    contents.push_str(name);
    contents.push('\n');

    fs::write(path, contents).map_err(|source| FocusError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log_info!("[writer] wrote focus \"{}\" to {}", name, path.display());
    Ok(())
}
