//! Per-category text file export.
//!
//! Writes one `<category>.txt` per non-empty category, with the assets joined
//! by newlines.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OUTPUT_FILE_EXTENSION;
use crate::error_handling::ExportError;
use crate::scope::{AssembledScope, Category};
use crate::utils::sanitize::sanitize_filename;

/// File name for a category's asset list, e.g. `ios_app.txt`.
pub fn category_file_name(category: Category) -> String {
    format!(
        "{}.{}",
        sanitize_filename(category.key()),
        OUTPUT_FILE_EXTENSION
    )
}

/// Writes each category of `scope` to its own file in `dir`.
///
/// The directory is created if missing. Existing files with the same name are
/// overwritten. Categories absent from the scope produce no file.
///
/// # Arguments
///
/// * `dir` - Output directory
/// * `scope` - Assembled, deduplicated assets
///
/// # Returns
///
/// The paths written, in category order.
///
/// # Errors
///
/// Returns `ExportError::CreateDir` or `ExportError::WriteFile` on I/O failure.
pub fn write_category_files(
    dir: &Path,
    scope: &AssembledScope,
) -> Result<Vec<PathBuf>, ExportError> {
    if scope.is_empty() {
        return Ok(Vec::new());
    }

    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for (category, assets) in scope.iter() {
        let path = dir.join(category_file_name(category));
        fs::write(&path, assets.join("\n")).map_err(|source| ExportError::WriteFile {
            path: path.clone(),
            source,
        })?;
        log::info!("Wrote {} {} asset(s) to {}", assets.len(), category, path.display());
        written.push(path);
    }

    Ok(written)
}
