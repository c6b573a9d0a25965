//! Project directory scanning.
//!
//! A candidate directory is a Unity project iff it carries a version
//! declaration at `ProjectSettings/ProjectVersion.txt`. The file is loosely
//! structured `key: value` text, not parsed as YAML; only the
//! `m_EditorVersion` key is consulted and the first match wins.

use crate::models::{Editor, Project};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};

/// Key token whose value is the project's required editor version. Matched
/// by exact equality, so `m_EditorVersionWithRevision` does not qualify.
const VERSION_KEY: &str = "m_EditorVersion";

/// Scan a single candidate directory.
///
/// Returns `None` for anything that is not a project: no version file, a
/// version file without the key, or an unreadable file (logged, never
/// propagated; one bad directory must not abort the batch).
pub fn scan_one(
    path: &Utf8Path,
    editors: &IndexMap<String, Editor>,
    favorites: &HashSet<String>,
) -> Option<Project> {
    let required_version = read_required_version(path)?;

    let name = path
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string());

    Some(Project {
        name,
        path: path.to_path_buf(),
        is_version_available: editors.contains_key(&required_version),
        is_favorite: favorites.contains(path.as_str()),
        last_modified: directory_mtime(path),
        required_version,
    })
}

/// Scan every collected candidate and keep the real projects.
pub fn scan_all(
    candidates: &HashSet<Utf8PathBuf>,
    editors: &IndexMap<String, Editor>,
    favorites: &HashSet<String>,
) -> Vec<Project> {
    let projects: Vec<Project> = candidates
        .iter()
        .filter_map(|path| scan_one(path, editors, favorites))
        .collect();

    tracing::info!(
        "Discovered {} projects from {} candidate directories",
        projects.len(),
        candidates.len()
    );
    projects
}

/// Read the declared editor version, line by line, first match wins.
fn read_required_version(project_dir: &Utf8Path) -> Option<String> {
    let version_file = project_dir
        .join("ProjectSettings")
        .join("ProjectVersion.txt");
    if !version_file.is_file() {
        return None;
    }

    let file = match File::open(&version_file) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", version_file, e);
            return None;
        }
    };

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", version_file, e);
                return None;
            }
        };

        if let Some((key, value)) = line.split_once(':') {
            if key.trim() == VERSION_KEY {
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                return Some(value.to_string());
            }
        }
    }

    None
}

fn directory_mtime(path: &Utf8Path) -> DateTime<Utc> {
    fs::metadata(path.as_std_path())
        .and_then(|metadata| metadata.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|e| {
            tracing::debug!("No modification time for {}: {}", path, e);
            DateTime::<Utc>::UNIX_EPOCH
        })
}
