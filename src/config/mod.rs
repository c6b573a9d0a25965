//! Unity Hub data directory access.
//!
//! The Hub persists three small optional files in its data directory
//! (`<user data dir>/UnityHub`):
//! - `favoriteProjects.json`: the user's favorite project paths
//! - `secondaryInstallPath.json`: one extra editor install root
//! - `projectDir.json`: the default projects directory
//!
//! All three are read once per discovery cycle. Absence of any of them
//! degrades to "no favorites", "no secondary root" and "no default
//! directory" respectively; a present-but-broken file is logged and treated
//! the same way. This crate never writes to the directory; it belongs to
//! the Hub.

use crate::services::collector::normalize_separators;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;

/// Directory name of the Hub's data under the user data dir.
const HUB_DATA_DIR: &str = "UnityHub";

/// Shape of `projectDir.json`.
#[derive(Debug, Deserialize)]
struct ProjectDirSetting {
    #[serde(rename = "directoryPath")]
    directory_path: String,
}

/// Read-only view of the Unity Hub data directory.
#[derive(Debug, Clone)]
pub struct HubDataStore {
    favorites_path: Utf8PathBuf,
    secondary_install_path: Utf8PathBuf,
    project_dir_path: Utf8PathBuf,
}

impl HubDataStore {
    /// Create a store over the given Hub data directory.
    pub fn new<P: AsRef<Utf8Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            favorites_path: data_dir.join("favoriteProjects.json"),
            secondary_install_path: data_dir.join("secondaryInstallPath.json"),
            project_dir_path: data_dir.join("projectDir.json"),
        }
    }

    /// Create a store over the current user's Hub data directory, if a user
    /// data directory can be resolved at all.
    pub fn for_current_user() -> Option<Self> {
        let data_dir = dirs::data_dir()?;
        let data_dir = Utf8PathBuf::from_path_buf(data_dir).ok()?;
        Some(Self::new(data_dir.join(HUB_DATA_DIR)))
    }

    /// Favorite project paths, normalized for membership tests against
    /// collected project paths. Missing or broken file → empty set.
    pub fn load_favorites(&self) -> HashSet<String> {
        if !self.favorites_path.is_file() {
            tracing::debug!("No favorites file at {}", self.favorites_path);
            return HashSet::new();
        }

        match self.read_favorites() {
            Ok(favorites) => {
                tracing::debug!("Loaded {} favorite projects", favorites.len());
                favorites
            }
            Err(e) => {
                tracing::warn!("Failed to read favorites {}: {:#}", self.favorites_path, e);
                HashSet::new()
            }
        }
    }

    /// Secondary editor install root, if configured. Missing, broken or
    /// empty file → `None`.
    pub fn load_secondary_install_root(&self) -> Option<Utf8PathBuf> {
        if !self.secondary_install_path.is_file() {
            tracing::debug!(
                "No secondary install location at {}",
                self.secondary_install_path
            );
            return None;
        }

        match self.read_secondary_install_root() {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(
                    "Failed to read secondary install location {}: {:#}",
                    self.secondary_install_path,
                    e
                );
                None
            }
        }
    }

    /// The user's default projects directory, if configured.
    pub fn load_projects_dir(&self) -> Option<Utf8PathBuf> {
        if !self.project_dir_path.is_file() {
            tracing::debug!("No projects directory setting at {}", self.project_dir_path);
            return None;
        }

        match self.read_projects_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!(
                    "Failed to read projects directory setting {}: {:#}",
                    self.project_dir_path,
                    e
                );
                None
            }
        }
    }

    fn read_favorites(&self) -> Result<HashSet<String>> {
        let contents = fs::read_to_string(&self.favorites_path)
            .with_context(|| format!("Failed to read {}", self.favorites_path))?;

        let paths = parse_double_encoded_array(&contents)
            .with_context(|| format!("Failed to parse {}", self.favorites_path))?;

        Ok(paths
            .iter()
            .map(|path| normalize_separators(path))
            .collect())
    }

    fn read_secondary_install_root(&self) -> Result<Option<Utf8PathBuf>> {
        let contents = fs::read_to_string(&self.secondary_install_path)
            .with_context(|| format!("Failed to read {}", self.secondary_install_path))?;

        let root: String = serde_json::from_str(contents.trim())
            .with_context(|| format!("Failed to parse {}", self.secondary_install_path))?;

        if root.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(Utf8PathBuf::from(root)))
    }

    fn read_projects_dir(&self) -> Result<Utf8PathBuf> {
        let contents = fs::read_to_string(&self.project_dir_path)
            .with_context(|| format!("Failed to read {}", self.project_dir_path))?;

        let setting: ProjectDirSetting = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.project_dir_path))?;

        Ok(Utf8PathBuf::from(setting.directory_path))
    }
}

/// Parse an array of paths the Hub wrote JSON-encoded inside a JSON string
/// (`"[\"C:\\\\Projects\\\\Game\"]"`). A bare array is tolerated too.
fn parse_double_encoded_array(contents: &str) -> Result<Vec<String>> {
    let contents = contents.trim();
    if let Ok(inner) = serde_json::from_str::<String>(contents) {
        return serde_json::from_str(&inner).context("inner favorites document is not an array");
    }
    serde_json::from_str(contents).context("favorites document is not an array")
}
