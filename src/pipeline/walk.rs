//! Image discovery: lazy walk of the source tree, filtered to candidate
//! images outside the sorted subtree.

use std::path::PathBuf;
use walkdir::WalkDir;

use crate::engine::tools::should_include_in_walk;

use super::context::PipelineContext;

/// One result from a directory walk: either an image path to consider or an
/// error with optional path.
pub enum WalkOutcome {
    Ok(PathBuf),
    Err { msg: String, path: Option<PathBuf> },
}

/// Lazy iterator over the image files under `ctx.root`. Restartable: each
/// call starts a fresh traversal. The sorted subtree is pruned so already
/// sorted files are never re-processed.
pub fn image_walk<'a>(ctx: &'a PipelineContext) -> impl Iterator<Item = WalkOutcome> + 'a {
    WalkDir::new(&ctx.root)
        .follow_links(ctx.follow_links)
        .into_iter()
        .filter_entry(move |e| e.path() != ctx.sorted_root.as_path())
        .filter_map(move |r| match r {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    return None;
                }
                let path = entry.into_path();
                if should_include_in_walk(&path, &ctx.root, &ctx.sorted_root, &ctx.exclude) {
                    Some(WalkOutcome::Ok(path))
                } else {
                    None
                }
            }
            Err(err) => Some(WalkOutcome::Err {
                msg: err.to_string(),
                path: err.path().map(PathBuf::from),
            }),
        })
}

/// Drain the walk: collect image paths, log and record walk errors as skipped
/// paths. Walk errors never abort the run.
pub fn collect_images(ctx: &PipelineContext) -> (Vec<PathBuf>, Vec<(PathBuf, String)>) {
    let mut images = Vec::new();
    let mut skipped = Vec::new();
    for outcome in image_walk(ctx) {
        match outcome {
            WalkOutcome::Ok(path) => images.push(path),
            WalkOutcome::Err { msg, path } => {
                let path = path.unwrap_or_else(|| ctx.root.clone());
                log::warn!("cannot read {}: {}", path.display(), msg);
                skipped.push((path, msg));
            }
        }
    }
    (images, skipped)
}
