//! Snapsort: vision-label image sorter. Walks a directory, labels each image
//! with a remote vision model, and files it into per-label folders.

pub mod engine;
pub mod pipeline;
pub mod preview;
pub mod sort;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use engine::labeler::{Labeler, VisionLabeler};

use log::debug;
use std::path::Path;

/// Result alias used by public snapsort API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: sort the images under `root` with `opts`, labelling
/// each through `labeler`, and return the run report.
///
/// - **`on_file: None`** → just the report. Used by callers that only need
///   the final outcome.
/// - **`on_file: Some(f)`** → `f` is invoked for each placed file as it
///   lands, before the next request goes out.
///
/// No prompts and no terminal output beyond log lines; the CLI layers its
/// confirmation gate and progress bar on top of
/// [`sort_dir_with_opts`](crate::sort::sort_dir_with_opts).
pub fn sort_dir<L: Labeler>(
    root: &Path,
    opts: &SortOpts,
    labeler: &L,
    on_file: Option<&mut dyn FnMut(&SortedFile)>,
) -> Result<RunReport> {
    let opts = Opts::from(opts);
    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    debug!("{}", config_str);

    sort::sort_dir_with_opts(root, &opts, labeler, |_| Ok(true), on_file)
}
