//! Dry-run preview: discover images and report the would-be API cost without
//! sending requests or moving files.

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::engine::tools::canonicalize_source_root;
use crate::pipeline::{collect_images, create_pipeline_context};
use crate::utils::config::CostEstimate;

/// List the images a sort run would process under `root`, with the estimated
/// API cost. Read-only.
pub fn preview_dir(root: &Path, opts: &Opts) -> Result<Vec<PathBuf>> {
    let root = canonicalize_source_root(root)?;
    let ctx = create_pipeline_context(&root, opts);

    info!("Searching for images in {}", root.display());
    let (images, skipped) = collect_images(&ctx);
    if opts.list_files {
        for path in &images {
            println!("Found file: {}", path.display());
        }
    }
    println!(
        "Found {} images under {} (estimated API cost ${:.4}).",
        images.len(),
        root.display(),
        CostEstimate::for_images(images.len())
    );
    if !skipped.is_empty() {
        log::warn!("Skipped {} paths due to walk errors", skipped.len());
    }
    Ok(images)
}
