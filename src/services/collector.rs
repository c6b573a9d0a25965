//! Candidate project directory collection.
//!
//! Project directories arrive from two sources: the immediate subdirectories
//! of the user's configured projects root, and the recently-used paths the
//! editor records in the OS registry. The same logical directory can show up
//! in both, often in different slash conventions, so every path is normalized
//! before set insertion and duplicates collapse via set semantics.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;

/// Unify path separators so the same logical directory from different
/// sources produces one identity key.
///
/// Backslashes become forward slashes and a trailing separator is trimmed.
/// Forward slashes are valid path separators on every platform this crate
/// compiles on, so the normalized string stays usable as a filesystem path.
pub fn normalize_separators(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let trimmed = unified.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Gather candidate project directories from the projects root and the
/// recently-used store.
///
/// Returns the union of both sources as a set of normalized paths. Either
/// source being absent or unreadable is non-fatal; a fully empty result is
/// valid and yields an empty project list downstream.
pub fn collect_project_paths(
    projects_root: Option<&Utf8Path>,
    recent_paths: &[String],
) -> HashSet<Utf8PathBuf> {
    let mut candidates = HashSet::new();

    if let Some(root) = projects_root {
        if root.is_dir() {
            match root.read_dir_utf8() {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                        if is_dir {
                            candidates.insert(Utf8PathBuf::from(normalize_separators(
                                entry.path().as_str(),
                            )));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to list projects directory {}: {}", root, e);
                }
            }
        } else {
            tracing::debug!("Projects directory {} does not exist, skipping", root);
        }
    }

    for raw in recent_paths {
        let normalized = normalize_separators(raw);
        if normalized == "/" {
            continue;
        }
        candidates.insert(Utf8PathBuf::from(normalized));
    }

    candidates
}
