//! Directory sorting operation: discover, gate, label, place.

use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::engine::labeler::Labeler;
use crate::engine::progress::{create_progress_bar, update_progress_bar};
use crate::engine::tools::canonicalize_source_root;
use crate::pipeline::{collect_images, create_pipeline_context, process_files};
use crate::types::{Opts, RunPlan, RunReport, SortedFile};
use crate::utils::Colors;
use crate::utils::config::CostEstimate;

/// Sort the images under `root` into per-label folders.
///
/// `gate` runs once, after discovery and before the first label request; when
/// it returns false the run ends with an empty report and no side effects.
/// Per-file failures are logged and recorded in the report, never fatal.
pub fn sort_dir_with_opts<L: Labeler>(
    root: &Path,
    opts: &Opts,
    labeler: &L,
    gate: impl FnOnce(&RunPlan) -> Result<bool>,
    mut on_file: Option<&mut dyn FnMut(&SortedFile)>,
) -> Result<RunReport> {
    let root = canonicalize_source_root(root)?;
    let mut ctx = create_pipeline_context(&root, opts);

    info!("Searching for images in {}", root.display());
    let (images, walk_skipped) = collect_images(&ctx);
    if opts.list_files {
        for path in &images {
            println!("Found file: {}", path.display());
        }
    }
    if images.is_empty() {
        info!("No images found under {}", root.display());
        return Ok(RunReport {
            skipped: walk_skipped,
            ..RunReport::default()
        });
    }

    let plan = RunPlan {
        estimated_cost_usd: CostEstimate::for_images(images.len()),
        images,
    };
    if !gate(&plan)? {
        info!("Sorting declined; nothing was moved.");
        return Ok(RunReport::default());
    }

    info!("Labelling {} images. This may take a while.", plan.images.len());
    let mut bar = opts
        .verbose
        .then(|| create_progress_bar(plan.images.len(), "Labelling"));
    let mut report = process_files(&mut ctx, &plan.images, labeler, &mut |_path, sorted| {
        if let Some(b) = bar.as_mut() {
            update_progress_bar(b, 1);
        }
        if let Some(sf) = sorted
            && let Some(cb) = on_file.as_mut()
        {
            cb(sf);
        }
    });
    report.skipped.extend(walk_skipped);

    print_summary(&report, opts.verbose);
    Ok(report)
}

/// Print the run summary line, with per-path skip detail in verbose mode.
fn print_summary(report: &RunReport, verbose: bool) {
    let sorted = report.sorted.len();
    let skipped = report.skipped.len();
    if sorted == 0 && skipped == 0 {
        debug!("Nothing to do.");
        return;
    }
    info!(
        "{} | {}",
        Colors::colorize(Colors::SORTED, &format!("Sorted: {}", sorted)),
        Colors::colorize(Colors::SKIPPED, &format!("Skipped: {}", skipped))
    );
    if verbose {
        for (path, msg) in &report.skipped {
            eprintln!("  skipped: {} ({})", path.display(), msg);
        }
    }
}
