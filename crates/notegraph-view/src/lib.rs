//! notegraph viewer — self-contained interactive graph page and window display.

pub mod html;
pub mod window;

/// File name of the generated page, written alongside the cache file.
pub const PAGE_FILE_NAME: &str = "notegraph_graph.html";

pub use html::render_page;
pub use window::show_in_window;
