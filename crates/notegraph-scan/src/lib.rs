//! notegraph scanner — note discovery, wiki-link extraction, graph construction.

pub mod builder;
pub mod walker;
pub mod wikilink;

pub use builder::build_graph;
pub use walker::{discover_notes, IgnoreSet};
pub use wikilink::{extract_targets, NoteIndex};
