//! Editor resolution and detached process launch.
//!
//! Opening a project resolves to exactly one executable: the editor matching
//! the project's declared version, or the configured fallback launcher when
//! that version is not installed. The spawned process is detached and never
//! waited on; after a successful spawn the plugin has no further relationship
//! with it.

use crate::models::{Editor, Project};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Flag token passed ahead of the project path when launching an editor.
const PROJECT_PATH_FLAG: &str = "-projectPath";

/// Errors surfaced to the user when a launch cannot happen.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("No editor installed for version {version} and no fallback launcher configured")]
    NoLauncherAvailable { version: String },

    #[error("Could not start {executable}: {source}")]
    Spawn {
        executable: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pick the executable that will open `project`.
///
/// Resolution order: the editor keyed by the project's required version,
/// else the fallback launcher, else [`LaunchError::NoLauncherAvailable`].
pub fn resolve_launcher(
    project: &Project,
    editors: &IndexMap<String, Editor>,
    fallback: Option<&Utf8Path>,
) -> Result<Utf8PathBuf, LaunchError> {
    if let Some(editor) = editors.get(&project.required_version) {
        return Ok(editor.executable.clone());
    }

    tracing::debug!(
        "No editor installed for version {}, falling back to generic launcher",
        project.required_version
    );

    fallback
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| LaunchError::NoLauncherAvailable {
            version: project.required_version.clone(),
        })
}

/// The exact argument list handed to the resolved executable.
pub fn launch_arguments(project: &Project) -> [String; 2] {
    [PROJECT_PATH_FLAG.to_string(), project.path.to_string()]
}

/// Resolve and spawn, fire-and-forget.
///
/// Returns the executable that was started, mainly so callers can log it.
/// No retry on failure; the spawn error carries the underlying OS cause.
pub fn launch_project(
    project: &Project,
    editors: &IndexMap<String, Editor>,
    fallback: Option<&Utf8Path>,
) -> Result<Utf8PathBuf, LaunchError> {
    let executable = resolve_launcher(project, editors, fallback)?;

    spawn_detached(&executable, &launch_arguments(project)).map_err(|source| {
        LaunchError::Spawn {
            executable: executable.clone(),
            source,
        }
    })?;

    tracing::info!("Launched {} for project {}", executable, project.path);
    Ok(executable)
}

/// Start a process that survives the host's lifetime. The child handle is
/// dropped immediately; nothing ever waits on it.
fn spawn_detached(executable: &Utf8Path, args: &[String]) -> std::io::Result<()> {
    let mut command = Command::new(executable.as_std_path());
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        command.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    command.spawn().map(drop)
}
