//! Go source discovery for directory arguments.
//!
//! Explicit file arguments bypass this module entirely; it exists so the
//! CLI can be pointed at a package or repository root. Subtrees that Go
//! tooling conventionally skips are pruned before iteration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{NargsError, NargsResult};

/// Directories excluded from traversal (standard Go project conventions).
const EXCLUDED_DIRS: &[&str] = &["vendor", "testdata", ".git"];

/// Checks if a directory entry should be pruned from traversal.
///
/// Called by `WalkDir::filter_entry`, so a match skips the whole subtree.
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Gathers all .go files under `root`, sorted for deterministic runs.
///
/// Automatically excludes `vendor/`, `testdata/`, and `.git/`. Test files
/// are gathered here regardless of flags; the extractor applies the
/// `include_tests` policy.
pub fn gather_go_files(root: &Path) -> NargsResult<Vec<PathBuf>> {
    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &excludes))
    {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            NargsError::io(path, e.into())
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "go") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
