//! notegraph-scan — scan a notes directory and write the graph cache file.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use notegraph_scan::{build_graph, IgnoreSet};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <notes_dir> <cache_file> [ignore ...]", args[0]);
        std::process::exit(1);
    }

    let root = PathBuf::from(&args[1]);
    let cache_file = PathBuf::from(&args[2]);
    let ignore = IgnoreSet::new(args[3..].iter().cloned());

    info!("Scanning for notes in: {}", root.display());
    let doc = build_graph(&root, &ignore)
        .map_err(|e| anyhow::anyhow!("Failed to scan {}: {}", root.display(), e))?;
    info!("Found {} notes and {} links", doc.nodes.len(), doc.edges.len());

    doc.save(&cache_file).map_err(|e| {
        anyhow::anyhow!("Failed to write cache file {}: {}", cache_file.display(), e)
    })?;
    info!("Wrote graph data to {}", cache_file.display());

    Ok(())
}
