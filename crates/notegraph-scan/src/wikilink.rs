//! Wiki-style link extraction and target resolution.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use notegraph_core::Note;

/// Matches `[[target]]`, `[[target.md]]`, `[[target.org]]`. The capture
/// excludes the optional extension suffix. Applied as a flat pattern over
/// raw text; nested or malformed bracket runs get no special handling.
static WIKILINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+?)(?:\.md|\.org)?\]\]").unwrap());

/// Extract raw link targets from note content, in order of appearance.
pub fn extract_targets(content: &str) -> Vec<&str> {
    WIKILINK_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Case-insensitive index from note names to canonical note ids.
///
/// Ids differing only by case collide; the last note registered wins, in
/// walk order.
#[derive(Debug, Default)]
pub struct NoteIndex {
    by_lower: HashMap<String, String>,
}

impl NoteIndex {
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut by_lower = HashMap::new();
        for note in notes {
            by_lower.insert(note.id.to_lowercase(), note.id.clone());
        }
        Self { by_lower }
    }

    /// Resolve a raw link target to a canonical note id.
    ///
    /// Tries `target.md`, then `target.org`, then the target verbatim (for
    /// links that already carried an unknown extension or none at all),
    /// all case-insensitively. First match wins.
    pub fn resolve(&self, target: &str) -> Option<&str> {
        let lower = target.to_lowercase();
        self.by_lower
            .get(&format!("{}.md", lower))
            .or_else(|| self.by_lower.get(&format!("{}.org", lower)))
            .or_else(|| self.by_lower.get(&lower))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str) -> Note {
        Note {
            id: id.to_string(),
            label: id.rsplit_once('.').map(|(s, _)| s).unwrap_or(id).to_string(),
            path: format!("/notes/{}", id),
        }
    }

    #[test]
    fn test_extract_plain_and_suffixed_targets() {
        let content = "See [[Alpha]] and [[Beta.md]] and [[Gamma.org]].";
        assert_eq!(extract_targets(content), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_extract_ignores_single_brackets_and_unclosed() {
        let content = "[not a link] and [[unclosed and [[ok]]";
        assert_eq!(extract_targets(content), vec!["unclosed and [[ok"]);
    }

    #[test]
    fn test_extract_adjacent_links() {
        assert_eq!(extract_targets("[[a]][[b]]"), vec!["a", "b"]);
    }

    #[test]
    fn test_extract_keeps_inner_dots() {
        // Only a final .md/.org is treated as an extension.
        assert_eq!(extract_targets("[[v1.2 notes]]"), vec!["v1.2 notes"]);
        assert_eq!(extract_targets("[[v1.2 notes.md]]"), vec!["v1.2 notes"]);
    }

    #[test]
    fn test_resolve_prefers_md_then_org_then_verbatim() {
        let notes = vec![note("topic.md"), note("topic.org"), note("raw")];
        let index = NoteIndex::from_notes(&notes);

        assert_eq!(index.resolve("topic"), Some("topic.md"));
        assert_eq!(index.resolve("raw"), Some("raw"));
        assert_eq!(index.resolve("missing"), None);
    }

    #[test]
    fn test_resolve_org_when_no_md_exists() {
        let notes = vec![note("journal.org")];
        let index = NoteIndex::from_notes(&notes);
        assert_eq!(index.resolve("journal"), Some("journal.org"));
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_canonical() {
        let notes = vec![note("Foo.md")];
        let index = NoteIndex::from_notes(&notes);

        // The canonical id keeps its stored casing.
        assert_eq!(index.resolve("foo"), Some("Foo.md"));
        assert_eq!(index.resolve("FOO.md"), Some("Foo.md"));
    }

    #[test]
    fn test_case_collision_last_registered_wins() {
        let notes = vec![note("Readme.md"), note("README.md")];
        let index = NoteIndex::from_notes(&notes);
        assert_eq!(index.resolve("readme"), Some("README.md"));
    }
}
