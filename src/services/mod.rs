//! Services module - Pure discovery and presentation logic.
//!
//! This module contains the core logic of the plugin. The services are
//! **framework-agnostic** and have no dependency on any host launcher,
//! making them testable and reusable.
//!
//! # Components
//!
//! - [`editor_registry`]: scans editor install roots and maps each installed
//!   version token to its executable
//! - [`collector`]: gathers candidate project directories from the configured
//!   projects root and the recently-used registry store, deduplicated after
//!   separator normalization
//! - [`scanner`]: reads a candidate directory's version declaration and turns
//!   it into a [`Project`](crate::models::Project) record
//! - [`presenter`]: sorts and formats snapshot records into display-ready
//!   catalog entries for the project list and editor report views
//! - [`launcher`]: resolves the right executable for a project and spawns it
//!   detached
//!
//! # Design Philosophy
//!
//! - **Pure**: no side effects beyond file reads and the one detached spawn
//! - **Synchronous**: everything runs inside a host callback; the data set is
//!   tens of entries, not thousands
//! - **Testable**: all inputs are explicit parameters; nothing reads hidden
//!   global state

pub mod collector;
pub mod editor_registry;
pub mod launcher;
pub mod presenter;
pub mod scanner;

pub use collector::{collect_project_paths, normalize_separators};
pub use editor_registry::build_editor_registry;
pub use launcher::{LaunchError, launch_arguments, launch_project, resolve_launcher};
pub use presenter::{
    editor_report_entries, format_relative_age, project_list_entries, strike_through,
    suggestion_modes,
};
pub use scanner::{scan_all, scan_one};
