// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// Check that the output file may be (re)written.
///
/// - absolute paths only
/// - a missing file, or `force`, is fine
/// - otherwise the user is asked
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {}",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm("Overwrite?")? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
