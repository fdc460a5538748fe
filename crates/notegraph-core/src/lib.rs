//! notegraph core — shared graph document model, cache file I/O, errors.

pub mod document;
pub mod error;

pub use document::{GraphDocument, Link, Note};
pub use error::{Error, Result};
