//! Expanding command-line paths into a list of input files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ReplayError;

/// Expand `paths` into input files.
///
/// Files are taken as given. Directories contribute their regular files,
/// sorted by name; subdirectories are not entered.
///
/// # Errors
/// Returns [`ReplayError::ReadDir`] if a directory cannot be listed and
/// [`ReplayError::NoInputs`] if nothing was found.
pub fn collect_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, ReplayError> {
    let mut inputs = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let mut files = list_dir(path)?;
            tracing::debug!(dir = %path.display(), files = files.len(), "expanded directory");
            inputs.append(&mut files);
        } else {
            inputs.push(path.to_path_buf());
        }
    }

    if inputs.is_empty() {
        return Err(ReplayError::NoInputs);
    }
    Ok(inputs)
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, ReplayError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| ReplayError::ReadDir {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
