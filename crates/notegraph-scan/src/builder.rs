//! Two-pass graph construction: discover notes, then extract links.

use std::path::Path;

use tracing::{debug, info, warn};

use notegraph_core::{GraphDocument, Link, Result};

use crate::walker::{discover_notes, IgnoreSet};
use crate::wikilink::{extract_targets, NoteIndex};

/// Build a graph document from the notes rooted at `root`.
///
/// A missing root is created empty, so a first run over a fresh note
/// collection succeeds with zero nodes. Per-file read failures during link
/// extraction are logged and skipped; only that note's outgoing links are
/// lost.
pub fn build_graph(root: &Path, ignore: &IgnoreSet) -> Result<GraphDocument> {
    if !root.is_dir() {
        info!("Notes directory {} not found, creating it", root.display());
        std::fs::create_dir_all(root)?;
    }
    // Canonicalize once so every note path comes out absolute.
    let root = root.canonicalize()?;

    let nodes = discover_notes(&root, ignore);
    let index = NoteIndex::from_notes(&nodes);

    let mut edges = Vec::new();
    for note in &nodes {
        let content = match std::fs::read_to_string(&note.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {} for link extraction: {}", note.path, e);
                continue;
            }
        };

        for target in extract_targets(&content) {
            let to = match index.resolve(target) {
                Some(to) => to,
                None => {
                    debug!("Unresolved link [[{}]] in {}", target, note.id);
                    continue;
                }
            };
            // Self-links are suppressed, compared case-insensitively.
            if note.id.to_lowercase() == to.to_lowercase() {
                continue;
            }
            edges.push(Link {
                from: note.id.clone(),
                to: to.to_string(),
            });
        }
    }

    Ok(GraphDocument { nodes, edges })
}
