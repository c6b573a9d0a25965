//! Data models for the launcher plugin core.
//!
//! This module contains the record types produced by a discovery cycle:
//! - [`Editor`]: one installed Unity editor build, keyed by its version token
//! - [`Project`]: one discovered Unity project directory
//! - [`DiscoverySnapshot`]: the immutable result of a full discovery cycle
//!
//! # Architecture Note
//!
//! All three types are:
//! - **Immutable**: constructed once per discovery cycle and never mutated
//! - **Replaced wholesale**: the next cycle builds a fresh snapshot instead of
//!   patching the previous one, so favorite and version-availability state can
//!   never go stale relative to the editor map of the same cycle

pub mod snapshot;

pub use snapshot::{DiscoverySnapshot, Editor, Project};
