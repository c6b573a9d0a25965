//! OS registry access behind a narrow port.
//!
//! Two side inputs live in the Windows registry: the Unity Hub install
//! location and the editor's recently-used project paths. [`SystemRegistry`]
//! is the port the discovery cycle consumes; [`RegQueryRegistry`] implements
//! it by shelling out to `reg query` and parsing its text output, so the
//! crate needs no Windows-only build dependency and tests can run the parser
//! anywhere. A missing key, a missing `reg` tool, or an undecodable value
//! all degrade to "nothing found"; the registry is an optional resource.

use camino::Utf8PathBuf;
use std::process::Command;

#[cfg(test)]
use mockall::automock;

/// Registry key holding the Unity Hub install location.
const HUB_KEY: &str = r"HKLM\SOFTWARE\Unity Technologies\Hub";

/// Value name under [`HUB_KEY`] with the Hub install directory.
const HUB_LOCATION_VALUE: &str = "InstallLocation";

/// Registry key holding the editor's recently-used project paths.
const RECENT_PROJECTS_KEY: &str = r"HKCU\SOFTWARE\Unity Technologies\Unity Editor 5.x";

/// Value-name prefix of the recently-used entries under
/// [`RECENT_PROJECTS_KEY`].
const RECENT_VALUE_PREFIX: &str = "RecentlyUsedProjectPaths-";

/// Value types `reg query` can print; used to split a value line into
/// (name, type, data).
const REG_TYPES: &[&str] = &[
    "REG_SZ",
    "REG_EXPAND_SZ",
    "REG_MULTI_SZ",
    "REG_BINARY",
    "REG_DWORD",
    "REG_QWORD",
    "REG_NONE",
];

/// The OS registry store, as seen from the discovery cycle.
#[cfg_attr(test, automock)]
pub trait SystemRegistry {
    /// Install directory of the Unity Hub, if registered.
    fn hub_install_location(&self) -> Option<Utf8PathBuf>;

    /// Recently opened project paths, unnormalized, in registry order.
    fn recent_project_paths(&self) -> Vec<String>;
}

/// One parsed value line from `reg query` output.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RegValue {
    name: String,
    kind: String,
    data: String,
}

/// [`SystemRegistry`] backed by the `reg` command-line tool.
#[derive(Debug, Clone, Default)]
pub struct RegQueryRegistry;

impl SystemRegistry for RegQueryRegistry {
    fn hub_install_location(&self) -> Option<Utf8PathBuf> {
        query_registry_values(HUB_KEY)
            .into_iter()
            .find(|value| value.name == HUB_LOCATION_VALUE)
            .and_then(|value| decode_path_value(&value.kind, &value.data))
            .map(Utf8PathBuf::from)
    }

    fn recent_project_paths(&self) -> Vec<String> {
        query_registry_values(RECENT_PROJECTS_KEY)
            .into_iter()
            .filter(|value| value.name.starts_with(RECENT_VALUE_PREFIX))
            .filter_map(|value| decode_path_value(&value.kind, &value.data))
            .collect()
    }
}

fn query_registry_values(key: &str) -> Vec<RegValue> {
    let output = match Command::new("reg").args(["query", key]).output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("reg tool unavailable: {}", e);
            return Vec::new();
        }
    };

    if !output.status.success() {
        tracing::debug!("Registry key {} not present", key);
        return Vec::new();
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(parse_value_line)
        .collect()
}

/// Split one `reg query` output line of the form
/// `    <name>    <REG_TYPE>    <data>` on the type token.
fn parse_value_line(line: &str) -> Option<RegValue> {
    let trimmed = line.trim();
    for kind in REG_TYPES {
        let Some(index) = trimmed.find(kind) else {
            continue;
        };
        // The type token must stand alone, not be a substring of the name.
        let before = &trimmed[..index];
        if !before.is_empty() && !before.ends_with(char::is_whitespace) {
            continue;
        }
        let name = before.trim();
        if name.is_empty() {
            return None;
        }
        let data = trimmed[index + kind.len()..].trim();
        return Some(RegValue {
            name: name.to_string(),
            kind: (*kind).to_string(),
            data: data.to_string(),
        });
    }
    None
}

/// Decode a value's data into a path string.
///
/// The editor stores recent paths as `REG_BINARY` UTF-8 with a trailing NUL,
/// which `reg query` prints as a hex dump; plain string types pass through.
fn decode_path_value(kind: &str, data: &str) -> Option<String> {
    let text = match kind {
        "REG_BINARY" => {
            let bytes = hex::decode(data).ok()?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        "REG_SZ" | "REG_EXPAND_SZ" => data.to_string(),
        _ => return None,
    };

    let text = text.trim_end_matches('\0').trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
