use anyhow::{Context, Result};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::packer::PackError;

/// True when a directory entry should be pruned from the walk.
fn is_excluded_dir(entry: &DirEntry, excluded: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excluded.iter().any(|ex| ex == name))
}

/// Walk `root` and return the sorted relative paths of all eligible files.
///
/// A file is eligible when its extension equals `extension` and none of its
/// path segments is an excluded directory name. Paths come back with `/`
/// separators regardless of the host convention, sorted lexicographically,
/// so the result is stable across runs and platforms.
pub fn discover(root: &Path, extension: &str, excluded_dirs: &[String]) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(PackError::RootMissing(root.display().to_string()).into());
    }

    let mut paths = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e, excluded_dirs))
    {
        let entry = entry.context("Failed to read directory entry")?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| PackError::NonUnicodePath(path.display().to_string()))?;
            segments.push(segment);
        }
        let joined = segments.join("/");

        // The filename table is emitted as raw ASCII bytes.
        if !joined.is_ascii() {
            return Err(PackError::NonAsciiPath(joined).into());
        }

        paths.push(joined);
    }

    paths.sort();
    Ok(paths)
}
