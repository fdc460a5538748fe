//! Note discovery — recursive directory walk with exact-name ignore pruning.

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use notegraph_core::Note;

/// Exact-match names excluded from the walk.
///
/// A pattern matches both directory names (the directory is pruned before
/// descending, so nothing inside it is visited) and file names.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

fn is_note_file(name: &str) -> bool {
    name.ends_with(".md") || name.ends_with(".org")
}

fn display_label(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
        .to_string()
}

/// Walk `root` and collect notes in discovery order.
///
/// Walk order is filesystem-defined and not guaranteed stable across
/// platforms. The root itself is never pruned, even if its name matches an
/// ignore pattern.
pub fn discover_notes(root: &Path, ignore: &IgnoreSet) -> Vec<Note> {
    let mut notes = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !ignore.matches(&entry.file_name().to_string_lossy())
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry during walk: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !is_note_file(&name) {
            continue;
        }

        notes.push(Note {
            id: name.to_string(),
            label: display_label(&name),
            path: entry.path().to_string_lossy().into_owned(),
        });
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_only_note_extensions_selected() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.md"), "");
        touch(&dir.path().join("b.org"), "");
        touch(&dir.path().join("c.txt"), "");
        touch(&dir.path().join("d.pdf"), "");

        let notes = discover_notes(dir.path(), &IgnoreSet::default());
        let ids: HashSet<String> = notes.into_iter().map(|n| n.id).collect();
        assert_eq!(ids, HashSet::from(["a.md".to_string(), "b.org".to_string()]));
    }

    #[test]
    fn test_label_strips_final_extension_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("2024.plan.md"), "");

        let notes = discover_notes(dir.path(), &IgnoreSet::default());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].label, "2024.plan");
    }

    #[test]
    fn test_notes_found_in_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("deep/nested/note.md"), "");

        let notes = discover_notes(dir.path(), &IgnoreSet::default());
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "note.md");
    }

    #[test]
    fn test_ignored_directory_is_pruned_with_descendants() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("keep.md"), "");
        touch(&dir.path().join("archive/old.md"), "");
        touch(&dir.path().join("archive/sub/older.org"), "");

        let ignore = IgnoreSet::new(["archive"]);
        let notes = discover_notes(dir.path(), &ignore);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "keep.md");
    }

    #[test]
    fn test_ignored_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("keep.md"), "");
        touch(&dir.path().join("template.md"), "");

        let ignore = IgnoreSet::new(["template.md"]);
        let notes = discover_notes(dir.path(), &ignore);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "keep.md");
    }

    #[test]
    fn test_ignore_is_exact_match_not_substring() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("archive-notes/a.md"), "");

        let ignore = IgnoreSet::new(["archive"]);
        let notes = discover_notes(dir.path(), &ignore);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_root_matching_ignore_pattern_is_still_walked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("archive");
        touch(&root.join("a.md"), "");

        let ignore = IgnoreSet::new(["archive"]);
        let notes = discover_notes(&root, &ignore);
        assert_eq!(notes.len(), 1);
    }
}
