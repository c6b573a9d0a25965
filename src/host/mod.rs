//! Ports for the host launcher adapter.
//!
//! The plugin core never talks to a launcher framework directly. A host
//! adapter implements [`PluginHost`] and drives [`LauncherPlugin`] through
//! its catalog/suggest/execute callbacks, carrying plain data structs across
//! the boundary. Fuzzy matching and scoring of the user's query live on the
//! host side; the core only reports which [`MatchMode`]/[`SortMode`] pair
//! the host should apply.

pub mod plugin;

pub use plugin::{LauncherPlugin, PluginSettings};

#[cfg(test)]
use mockall::automock;

/// The host launcher, as seen from the plugin core.
///
/// `report_error` is the user-visible error channel: missing fallback
/// launcher, spawn failures, anything the user should see rather than only
/// the log file.
#[cfg_attr(test, automock)]
pub trait PluginHost {
    fn report_error(&self, message: &str);
}

/// Category of a catalog or suggestion entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Head item that opens the project list view.
    ProjectList,
    /// One launchable project in the project list view.
    Project,
    /// Head item that opens the editor report view.
    EditorReportList,
    /// One launchable project row in the editor report view.
    EditorReport,
}

/// A display-ready entry handed to the host for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: EntryKind,
    /// Primary line shown in the launcher.
    pub label: String,
    /// Secondary line shown under or beside the label.
    pub description: String,
    /// Opaque token identifying the entry on execute; the normalized
    /// project path for launchable entries.
    pub target: String,
}

/// How the host should match entries against the user's query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Show everything, no filtering.
    Any,
    /// Host-provided fuzzy/any-order substring matching.
    Fuzzy,
}

/// How the host should order the matched entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Keep the order the entries were supplied in.
    None,
    /// Order by the host's match score, best first.
    ScoreDesc,
}

/// One suggestion batch: entries in their natural view order plus the
/// matching/sorting the host should apply to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub entries: Vec<CatalogEntry>,
    pub match_mode: MatchMode,
    pub sort_mode: SortMode,
}
