use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// One installed Unity editor build.
///
/// The version is derived from the install directory name. It is an opaque
/// token ("2021.3.5f1", "2022.1.0b12"), not strict semver, and is only ever
/// compared for exact equality against a project's declared version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    /// Directory-name-derived version identifier.
    pub version: String,

    /// Absolute path to the runnable editor binary.
    pub executable: Utf8PathBuf,
}

/// A discovered Unity project directory.
///
/// The normalized `path` is the record's identity within a discovery cycle;
/// the collector guarantees no two records of the same cycle share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Final path component of the project directory.
    pub name: String,

    /// Normalized absolute directory path.
    pub path: Utf8PathBuf,

    /// Editor version declared in `ProjectSettings/ProjectVersion.txt`.
    pub required_version: String,

    /// Whether `required_version` is a key of the editor map built in the
    /// same cycle. Recomputed every cycle, never persisted.
    pub is_version_available: bool,

    /// Directory modification time. Used for sort order and relative-age
    /// display only.
    pub last_modified: DateTime<Utc>,

    /// Membership in the favorites list loaded at the start of the cycle.
    pub is_favorite: bool,
}

/// Immutable result of one discovery cycle.
///
/// The plugin owns exactly one snapshot at a time and swaps it out wholesale
/// when the host asks for a catalog rebuild. Presentation code only reads a
/// snapshot; given the single-threaded host callback model there is nothing
/// to lock.
#[derive(Debug, Clone, Default)]
pub struct DiscoverySnapshot {
    /// Version token → installed editor. Insertion order is root scan order,
    /// so on a version collision the last-scanned root wins.
    pub editors: IndexMap<String, Editor>,

    /// Projects discovered this cycle, unordered. Views sort on demand.
    pub projects: Vec<Project>,

    /// Generic launcher executable used when no versioned editor matches.
    pub fallback_launcher: Option<Utf8PathBuf>,
}

impl DiscoverySnapshot {
    /// Look up a project by its normalized path identity.
    pub fn project_by_path(&self, path: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.path.as_str() == path)
    }
}
