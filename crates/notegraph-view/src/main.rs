//! notegraph-view — render the graph cache in an interactive desktop window.

use std::path::{Path, PathBuf};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use notegraph_core::GraphDocument;
use notegraph_view::{render_page, show_in_window, PAGE_FILE_NAME};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        // Missing cache argument: nothing to report on, just a failure status.
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cache_file = PathBuf::from(&args[1]);
    let doc = GraphDocument::load_or_empty(&cache_file);
    if doc.is_empty() {
        error!("Nothing to show: {} holds no notes", cache_file.display());
        std::process::exit(1);
    }

    let page = render_page(&doc);
    let page_path = cache_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(PAGE_FILE_NAME);
    std::fs::write(&page_path, page)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", page_path.display(), e))?;
    info!(
        "Rendered {} notes and {} links to {}",
        doc.nodes.len(),
        doc.edges.len(),
        page_path.display()
    );

    show_in_window(&page_path)
        .map_err(|e| anyhow::anyhow!("Failed to open graph window: {}", e))?;

    Ok(())
}
