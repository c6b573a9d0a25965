//! Plugin glue between the host callbacks and the core services.
//!
//! The host adapter constructs one [`LauncherPlugin`] and forwards its
//! lifecycle callbacks: `on_catalog` runs a full discovery cycle and swaps
//! the snapshot, `on_suggest` re-derives a view from the snapshot on every
//! keystroke, `on_execute` opens the selected project. Everything runs
//! synchronously inside the host's callback; the only spawned work is the
//! detached editor process.

use crate::config::HubDataStore;
use crate::host::{CatalogEntry, EntryKind, MatchMode, PluginHost, SortMode, Suggestions};
use crate::models::DiscoverySnapshot;
use crate::registry::SystemRegistry;
use crate::services::{
    build_editor_registry, collect_project_paths, editor_report_entries, launch_project,
    project_list_entries, scan_all, suggestion_modes,
};
use camino::Utf8PathBuf;
use chrono::Utc;

/// Default editor install root used when the Hub does not configure one.
const DEFAULT_EDITOR_ROOT: &str = "C:/Program Files/Unity/Hub/Editor";

/// Name of the Hub executable inside its install location.
const HUB_EXECUTABLE: &str = "Unity Hub.exe";

/// Tunables the host adapter can override, mainly for non-default installs.
#[derive(Debug, Clone)]
pub struct PluginSettings {
    /// Primary editor install root scanned every cycle. The secondary root
    /// from the Hub data directory is scanned after it.
    pub editor_root: Utf8PathBuf,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            editor_root: Utf8PathBuf::from(DEFAULT_EDITOR_ROOT),
        }
    }
}

/// The plugin instance owning the current discovery snapshot.
pub struct LauncherPlugin<H: PluginHost, R: SystemRegistry> {
    host: H,
    registry: R,
    store: HubDataStore,
    settings: PluginSettings,
    snapshot: DiscoverySnapshot,
}

impl<H: PluginHost, R: SystemRegistry> LauncherPlugin<H, R> {
    pub fn new(host: H, registry: R, store: HubDataStore, settings: PluginSettings) -> Self {
        Self {
            host,
            registry,
            store,
            settings,
            snapshot: DiscoverySnapshot::default(),
        }
    }

    /// The snapshot of the most recent discovery cycle.
    pub fn snapshot(&self) -> &DiscoverySnapshot {
        &self.snapshot
    }

    /// Host "on catalog" callback: run one discovery cycle and return the
    /// full catalog: the two view head items plus every project entry.
    pub fn on_catalog(&mut self) -> Vec<CatalogEntry> {
        self.snapshot = self.run_discovery();

        let mut catalog = vec![
            CatalogEntry {
                kind: EntryKind::ProjectList,
                label: "Unity Projects".to_string(),
                description: "Launch Unity Projects".to_string(),
                target: "projects".to_string(),
            },
            CatalogEntry {
                kind: EntryKind::EditorReportList,
                label: "Unity Editors Report".to_string(),
                description: "Unity Editors Report".to_string(),
                target: "editors report".to_string(),
            },
        ];
        catalog.extend(project_list_entries(&self.snapshot));
        catalog
    }

    /// Host "on suggest" callback for the view the user drilled into.
    ///
    /// Returns `None` for entry kinds that have no sub-view. Matching and
    /// scoring of `query` happen on the host side; this only picks the
    /// modes and supplies the entries in natural view order.
    pub fn on_suggest(&self, kind: EntryKind, query: &str) -> Option<Suggestions> {
        match kind {
            EntryKind::ProjectList => {
                let (match_mode, sort_mode) = suggestion_modes(query);
                Some(Suggestions {
                    entries: project_list_entries(&self.snapshot),
                    match_mode,
                    sort_mode,
                })
            }
            EntryKind::EditorReportList => Some(Suggestions {
                entries: editor_report_entries(&self.snapshot, Utc::now()),
                match_mode: MatchMode::Any,
                sort_mode: SortMode::None,
            }),
            EntryKind::Project | EntryKind::EditorReport => None,
        }
    }

    /// Host "on select" callback: open the selected project, reporting any
    /// failure on the host's error channel.
    pub fn on_execute(&self, entry: &CatalogEntry) {
        if !matches!(entry.kind, EntryKind::Project | EntryKind::EditorReport) {
            return;
        }

        let Some(project) = self.snapshot.project_by_path(&entry.target) else {
            self.host.report_error(&format!(
                "Project {} is no longer known; rebuild the catalog",
                entry.target
            ));
            return;
        };

        if let Err(e) = launch_project(
            project,
            &self.snapshot.editors,
            self.snapshot.fallback_launcher.as_deref(),
        ) {
            self.host.report_error(&e.to_string());
        }
    }

    fn run_discovery(&self) -> DiscoverySnapshot {
        // Favorites are read once per cycle and baked into the records; a
        // toggle in the Hub shows up on the next catalog rebuild.
        let favorites = self.store.load_favorites();

        let mut editor_roots = vec![self.settings.editor_root.clone()];
        if let Some(secondary) = self.store.load_secondary_install_root() {
            editor_roots.push(secondary);
        }
        let editors = build_editor_registry(&editor_roots);

        let fallback_launcher = self.locate_hub_executable();

        let projects_root = self.store.load_projects_dir();
        let recent = self.registry.recent_project_paths();
        let candidates = collect_project_paths(projects_root.as_deref(), &recent);
        let projects = scan_all(&candidates, &editors, &favorites);

        tracing::info!(
            "Discovery cycle complete: {} editors, {} projects, fallback {}",
            editors.len(),
            projects.len(),
            fallback_launcher.as_deref().map(|p| p.as_str()).unwrap_or("none")
        );

        DiscoverySnapshot {
            editors,
            projects,
            fallback_launcher,
        }
    }

    fn locate_hub_executable(&self) -> Option<Utf8PathBuf> {
        let location = self.registry.hub_install_location()?;
        let hub_exe = location.join(HUB_EXECUTABLE);
        if !hub_exe.is_file() {
            self.host
                .report_error(&format!("Unity Hub not found at {}", hub_exe));
            return None;
        }
        Some(hub_exe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockPluginHost;
    use crate::registry::MockSystemRegistry;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _temp_dir: TempDir,
        root: Utf8PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
            Self {
                _temp_dir: temp_dir,
                root,
            }
        }

        fn add_editor(&self, version: &str) {
            let dir = self.root.join("Editors").join(version).join("Editor");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("Unity.exe"), b"").unwrap();
        }

        fn add_project(&self, name: &str, version: &str) -> Utf8PathBuf {
            let project = self.root.join("Projects").join(name);
            let settings = project.join("ProjectSettings");
            fs::create_dir_all(&settings).unwrap();
            fs::write(
                settings.join("ProjectVersion.txt"),
                format!("m_EditorVersion: {}\n", version),
            )
            .unwrap();
            project
        }

        fn set_projects_dir(&self) {
            let projects = self.root.join("Projects").as_str().replace('\\', "/");
            fs::write(
                self.root.join("projectDir.json"),
                format!(r#"{{"directoryPath": "{}"}}"#, projects),
            )
            .unwrap();
        }

        fn settings(&self) -> PluginSettings {
            PluginSettings {
                editor_root: self.root.join("Editors"),
            }
        }

        fn store(&self) -> HubDataStore {
            HubDataStore::new(&self.root)
        }
    }

    fn quiet_registry() -> MockSystemRegistry {
        let mut registry = MockSystemRegistry::new();
        registry.expect_hub_install_location().returning(|| None);
        registry.expect_recent_project_paths().returning(Vec::new);
        registry
    }

    #[test]
    fn test_catalog_contains_heads_and_projects() {
        let fixture = Fixture::new();
        fixture.add_editor("2021.3.5f1");
        fixture.add_project("game", "2021.3.5f1");
        fixture.set_projects_dir();

        let mut plugin = LauncherPlugin::new(
            MockPluginHost::new(),
            quiet_registry(),
            fixture.store(),
            fixture.settings(),
        );

        let catalog = plugin.on_catalog();
        assert_eq!(catalog[0].kind, EntryKind::ProjectList);
        assert_eq!(catalog[1].kind, EntryKind::EditorReportList);
        assert_eq!(
            catalog.iter().filter(|e| e.kind == EntryKind::Project).count(),
            1
        );
        assert!(plugin.snapshot().projects[0].is_version_available);
    }

    #[test]
    fn test_snapshot_replaced_wholesale_on_rebuild() {
        let fixture = Fixture::new();
        fixture.add_project("game", "2021.3.5f1");
        fixture.set_projects_dir();

        let mut plugin = LauncherPlugin::new(
            MockPluginHost::new(),
            quiet_registry(),
            fixture.store(),
            fixture.settings(),
        );

        plugin.on_catalog();
        assert!(!plugin.snapshot().projects[0].is_version_available);

        // Installing the editor between cycles flips availability on the
        // next rebuild; nothing is patched in place.
        fixture.add_editor("2021.3.5f1");
        plugin.on_catalog();
        assert!(plugin.snapshot().projects[0].is_version_available);
    }

    #[test]
    fn test_suggest_modes_follow_query() {
        let fixture = Fixture::new();
        let mut plugin = LauncherPlugin::new(
            MockPluginHost::new(),
            quiet_registry(),
            fixture.store(),
            fixture.settings(),
        );
        plugin.on_catalog();

        let unfiltered = plugin.on_suggest(EntryKind::ProjectList, "").unwrap();
        assert_eq!(unfiltered.match_mode, MatchMode::Any);
        assert_eq!(unfiltered.sort_mode, SortMode::None);

        let filtered = plugin.on_suggest(EntryKind::ProjectList, "game").unwrap();
        assert_eq!(filtered.match_mode, MatchMode::Fuzzy);
        assert_eq!(filtered.sort_mode, SortMode::ScoreDesc);

        assert!(plugin.on_suggest(EntryKind::Project, "").is_none());
    }

    #[test]
    fn test_execute_without_editor_or_fallback_reports_error() {
        let fixture = Fixture::new();
        fixture.add_project("game", "2019.4.0f1");
        fixture.set_projects_dir();

        let mut host = MockPluginHost::new();
        host.expect_report_error()
            .withf(|message: &str| message.contains("2019.4.0f1"))
            .times(1)
            .return_const(());

        let mut plugin = LauncherPlugin::new(
            host,
            quiet_registry(),
            fixture.store(),
            fixture.settings(),
        );
        let catalog = plugin.on_catalog();

        let entry = catalog
            .iter()
            .find(|e| e.kind == EntryKind::Project)
            .unwrap();
        plugin.on_execute(entry);
    }

    #[test]
    fn test_execute_ignores_head_entries() {
        let fixture = Fixture::new();
        let mut plugin = LauncherPlugin::new(
            MockPluginHost::new(),
            quiet_registry(),
            fixture.store(),
            fixture.settings(),
        );
        let catalog = plugin.on_catalog();

        // Head items are drill-down targets, not launchable.
        plugin.on_execute(&catalog[0]);
        plugin.on_execute(&catalog[1]);
    }

    #[test]
    fn test_recent_paths_merge_with_projects_dir() {
        let fixture = Fixture::new();
        let in_dir = fixture.add_project("indir", "2021.3.5f1");
        let elsewhere = fixture.add_project("elsewhere", "2021.3.5f1");
        fixture.set_projects_dir();

        // "elsewhere" lives under Projects/ too, so the recent entry in the
        // other slash convention must collapse with the directory listing.
        let recent = vec![
            elsewhere.as_str().replace('/', "\\"),
            in_dir.as_str().replace('/', "\\"),
        ];
        let mut registry = MockSystemRegistry::new();
        registry.expect_hub_install_location().returning(|| None);
        registry
            .expect_recent_project_paths()
            .returning(move || recent.clone());

        let mut plugin = LauncherPlugin::new(
            MockPluginHost::new(),
            registry,
            fixture.store(),
            fixture.settings(),
        );
        plugin.on_catalog();
        assert_eq!(plugin.snapshot().projects.len(), 2);
    }
}
