//! Graph document model — the JSON contract between the scanner and the viewer.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::Result;

/// A single note file, one node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// File name including extension. Unique within one scan; lookups
    /// against it are case-normalized.
    pub id: String,
    /// File name without its final extension, used for display.
    pub label: String,
    /// Absolute path to the file on disk.
    pub path: String,
}

/// A directed wiki-link between two notes, by note id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub from: String,
    pub to: String,
}

/// The full scan output: nodes and edges in discovery order.
///
/// Rebuilt wholesale on every scan and treated as immutable input by the
/// viewer. The only persisted state in the system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Note>,
    pub edges: Vec<Link>,
}

impl GraphDocument {
    /// True when the document holds no notes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Load a document from the cache file. An absent or malformed cache
    /// degrades to an empty document rather than an error.
    pub fn load_or_empty(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Could not read cache {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Malformed cache {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the document to the cache file as pretty-printed JSON,
    /// replacing any existing content. The parent directory must exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Edges whose endpoints both reference a present node.
    ///
    /// The scanner never emits dangling references, but the scanner and
    /// viewer are decoupled processes and the cache file is plain JSON on
    /// disk; a dangling edge is a no-op, not a crash.
    pub fn resolved_edges(&self) -> Vec<&Link> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| ids.contains(e.from.as_str()) && ids.contains(e.to.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphDocument {
        GraphDocument {
            nodes: vec![
                Note {
                    id: "A.md".into(),
                    label: "A".into(),
                    path: "/notes/A.md".into(),
                },
                Note {
                    id: "B.org".into(),
                    label: "B".into(),
                    path: "/notes/B.org".into(),
                },
            ],
            edges: vec![Link {
                from: "A.md".into(),
                to: "B.org".into(),
            }],
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");

        let doc = sample();
        doc.save(&path).unwrap();
        let loaded = GraphDocument::load_or_empty(&path);
        assert_eq!(doc, loaded);
    }

    #[test]
    fn test_load_missing_cache_is_empty() {
        let doc = GraphDocument::load_or_empty(Path::new("/nonexistent/graph.json"));
        assert!(doc.is_empty());
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_load_malformed_cache_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        std::fs::write(&path, "{not json").unwrap();

        let doc = GraphDocument::load_or_empty(&path);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_resolved_edges_drops_dangling_references() {
        let mut doc = sample();
        doc.edges.push(Link {
            from: "A.md".into(),
            to: "Ghost.md".into(),
        });

        let edges = doc.resolved_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to, "B.org");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");

        sample().save(&path).unwrap();
        GraphDocument::default().save(&path).unwrap();

        let loaded = GraphDocument::load_or_empty(&path);
        assert!(loaded.is_empty());
    }
}
