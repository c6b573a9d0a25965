// unitylaunch - Unity project discovery and launch core for quick-launcher hosts
//
// This is the library crate containing the framework-agnostic plugin core.
// A host launcher adapter implements the ports in `host` and drives the
// plugin through its catalog/suggest/execute callbacks; there is no
// independent entry point.

pub mod config;
pub mod host;
pub mod logging;
pub mod models;
pub mod registry;
pub mod services;

// Re-export commonly used types for convenience
pub use config::HubDataStore;
pub use host::{
    CatalogEntry, EntryKind, LauncherPlugin, MatchMode, PluginHost, PluginSettings, SortMode,
    Suggestions,
};
pub use models::{DiscoverySnapshot, Editor, Project};
pub use registry::{RegQueryRegistry, SystemRegistry};
pub use services::LaunchError;

/// Plugin version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plugin name
pub const PLUGIN_NAME: &str = env!("CARGO_PKG_NAME");
