//! Installed editor discovery.
//!
//! Each editor install root contains one subdirectory per installed version,
//! named after the version token ("2021.3.5f1"). A subdirectory counts as an
//! installed editor only if the fixed relative executable path exists inside
//! it; anything else is an incomplete or mid-install folder and is skipped
//! without comment.

use crate::models::Editor;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;

/// Relative location of the editor binary inside a version directory.
const EDITOR_EXECUTABLE: &[&str] = &["Editor", "Unity.exe"];

/// Build the version → [`Editor`] mapping for one discovery cycle.
///
/// Roots are scanned in list order. On a version collision across roots the
/// later insert overwrites the earlier one, so the last-scanned root wins;
/// this mirrors plain map insertion and is not a guaranteed precedence.
///
/// A missing or unreadable root is non-fatal: it is logged and the remaining
/// roots are still scanned.
pub fn build_editor_registry(roots: &[Utf8PathBuf]) -> IndexMap<String, Editor> {
    let mut editors = IndexMap::new();

    for root in roots {
        if !root.is_dir() {
            tracing::debug!("Editor install root {} does not exist, skipping", root);
            continue;
        }

        let entries = match root.read_dir_utf8() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to list editor install root {}: {}", root, e);
                continue;
            }
        };

        for entry in entries.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }

            let executable = editor_executable_path(entry.path());
            if !executable.is_file() {
                continue;
            }

            let version = entry.file_name().to_string();
            tracing::debug!("Found editor {} at {}", version, executable);
            editors.insert(
                version.clone(),
                Editor {
                    version,
                    executable,
                },
            );
        }
    }

    tracing::info!("Editor registry built with {} installed versions", editors.len());
    editors
}

fn editor_executable_path(version_dir: &Utf8Path) -> Utf8PathBuf {
    let mut path = version_dir.to_path_buf();
    for component in EDITOR_EXECUTABLE {
        path.push(component);
    }
    path
}
