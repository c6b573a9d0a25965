//! Display-ready views over a discovery snapshot.
//!
//! Both views are cheap enough to recompute on every keystroke against the
//! in-memory snapshot, so nothing here is cached. An unavailable editor
//! version is never hidden; its label is rendered with a combining strike
//! mark so the user can see the project exists but its editor is missing.

use crate::host::{CatalogEntry, EntryKind, MatchMode, SortMode};
use crate::models::{DiscoverySnapshot, Project};
use chrono::{DateTime, Utc};

/// Combining short stroke overlay, interleaved after every character of an
/// unavailable version label.
const STRIKE_MARK: char = '\u{0335}';

/// Column widths for the version field in the project list view. The struck
/// variant is wider because every character carries a combining mark.
const VERSION_COLUMN: usize = 11;
const STRUCK_VERSION_COLUMN: usize = 22;

/// Overlay a strike mark on every character of `text`.
pub fn strike_through(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        out.push(ch);
        out.push(STRIKE_MARK);
    }
    out
}

/// Project list view: favorites first, then most recently modified first.
pub fn project_list_entries(snapshot: &DiscoverySnapshot) -> Vec<CatalogEntry> {
    let mut projects: Vec<&Project> = snapshot.projects.iter().collect();
    projects.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then_with(|| b.last_modified.cmp(&a.last_modified))
    });

    projects
        .into_iter()
        .map(|project| {
            let marker = if project.is_favorite { " ★" } else { "" };
            let version_column = if project.is_version_available {
                format!("{: <width$}", project.required_version, width = VERSION_COLUMN)
            } else {
                format!(
                    "{: <width$}",
                    strike_through(&project.required_version),
                    width = STRUCK_VERSION_COLUMN
                )
            };

            CatalogEntry {
                kind: EntryKind::Project,
                label: format!("Unity Project: {}{}", project.name, marker),
                description: format!("{}\t\t\t\t{}", version_column, project.path),
                target: project.path.to_string(),
            }
        })
        .collect()
}

/// Editor report view: the available-version block first, the unavailable
/// block after it, each sorted by (version desc, last-modified desc).
///
/// The relative age in each row is computed against `now` at render time,
/// never cached.
pub fn editor_report_entries(snapshot: &DiscoverySnapshot, now: DateTime<Utc>) -> Vec<CatalogEntry> {
    let mut projects: Vec<&Project> = snapshot.projects.iter().collect();
    projects.sort_by(|a, b| {
        b.required_version
            .cmp(&a.required_version)
            .then_with(|| b.last_modified.cmp(&a.last_modified))
    });

    let mut entries = Vec::with_capacity(projects.len());
    for available in [true, false] {
        for project in projects.iter().filter(|p| p.is_version_available == available) {
            let version_label = if available {
                project.required_version.clone()
            } else {
                strike_through(&project.required_version)
            };

            entries.push(CatalogEntry {
                kind: EntryKind::EditorReport,
                label: format!("{}\t\t\t\t{}", version_label, project.name),
                description: format_relative_age(project.last_modified, now),
                target: project.path.to_string(),
            });
        }
    }
    entries
}

/// Matching/sorting the host should apply for the given query: everything in
/// natural order when the query is empty, fuzzy score order otherwise.
pub fn suggestion_modes(query: &str) -> (MatchMode, SortMode) {
    if query.trim().is_empty() {
        (MatchMode::Any, SortMode::None)
    } else {
        (MatchMode::Fuzzy, SortMode::ScoreDesc)
    }
}

/// Human-relative "time since last modified" string.
pub fn format_relative_age(modified: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(modified);
    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hr ago", hours)
    } else if days < 7 {
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} week{} ago", weeks, if weeks == 1 { "" } else { "s" })
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{} ago", months, if months == 1 { "" } else { "s" })
    } else {
        let years = days / 365;
        format!("{} year{} ago", years, if years == 1 { "" } else { "s" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Editor;
    use camino::Utf8PathBuf;
    use chrono::TimeZone;
    use indexmap::IndexMap;

    fn project(
        name: &str,
        version: &str,
        available: bool,
        favorite: bool,
        modified: DateTime<Utc>,
    ) -> Project {
        Project {
            name: name.to_string(),
            path: Utf8PathBuf::from(format!("C:/Projects/{}", name)),
            required_version: version.to_string(),
            is_version_available: available,
            last_modified: modified,
            is_favorite: favorite,
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    fn snapshot_with(projects: Vec<Project>) -> DiscoverySnapshot {
        DiscoverySnapshot {
            editors: IndexMap::<String, Editor>::new(),
            projects,
            fallback_launcher: None,
        }
    }

    #[test]
    fn test_strike_through_interleaves_marks() {
        assert_eq!(strike_through("ab"), "a\u{0335}b\u{0335}");
        assert_eq!(strike_through(""), "");
    }

    #[test]
    fn test_favorite_outranks_recency() {
        let snapshot = snapshot_with(vec![
            project("recent", "2021.3.5f1", true, false, at(20)),
            project("starred", "2021.3.5f1", true, true, at(1)),
        ]);

        let entries = project_list_entries(&snapshot);
        assert!(entries[0].label.contains("starred"));
        assert!(entries[0].label.contains('★'));
        assert!(entries[1].label.contains("recent"));
    }

    #[test]
    fn test_recency_breaks_ties_within_favorites() {
        let snapshot = snapshot_with(vec![
            project("older", "2021.3.5f1", true, true, at(1)),
            project("newer", "2021.3.5f1", true, true, at(20)),
        ]);

        let entries = project_list_entries(&snapshot);
        assert!(entries[0].label.contains("newer"));
    }

    #[test]
    fn test_unavailable_version_is_struck_not_hidden() {
        let snapshot = snapshot_with(vec![project("game", "2019.4.0f1", false, false, at(1))]);

        let entries = project_list_entries(&snapshot);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].description.contains('\u{0335}'));
    }

    #[test]
    fn test_editor_report_available_block_first() {
        let snapshot = snapshot_with(vec![
            project("old-but-available", "2019.4.0f1", true, false, at(1)),
            project("new-but-missing", "2022.1.0f1", false, false, at(20)),
        ]);

        let entries = editor_report_entries(&snapshot, at(21));
        assert!(entries[0].label.contains("old-but-available"));
        assert!(entries[1].label.contains('\u{0335}'));
    }

    #[test]
    fn test_editor_report_sorts_by_version_within_block() {
        let snapshot = snapshot_with(vec![
            project("a", "2019.4.0f1", true, false, at(20)),
            project("b", "2022.1.0f1", true, false, at(1)),
        ]);

        let entries = editor_report_entries(&snapshot, at(21));
        assert!(entries[0].label.starts_with("2022.1.0f1"));
    }

    #[test]
    fn test_suggestion_modes() {
        assert_eq!(suggestion_modes(""), (MatchMode::Any, SortMode::None));
        assert_eq!(suggestion_modes("   "), (MatchMode::Any, SortMode::None));
        assert_eq!(
            suggestion_modes("game"),
            (MatchMode::Fuzzy, SortMode::ScoreDesc)
        );
    }

    #[test]
    fn test_relative_age_ladder() {
        let now = at(21);
        assert_eq!(format_relative_age(now, now), "just now");
        assert_eq!(
            format_relative_age(now - chrono::Duration::minutes(5), now),
            "5 min ago"
        );
        assert_eq!(
            format_relative_age(now - chrono::Duration::hours(3), now),
            "3 hr ago"
        );
        assert_eq!(
            format_relative_age(now - chrono::Duration::days(1), now),
            "1 day ago"
        );
        assert_eq!(
            format_relative_age(now - chrono::Duration::days(10), now),
            "1 week ago"
        );
        assert_eq!(
            format_relative_age(now - chrono::Duration::days(90), now),
            "3 months ago"
        );
        assert_eq!(
            format_relative_age(now - chrono::Duration::days(800), now),
            "2 years ago"
        );
    }
}
