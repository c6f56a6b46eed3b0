//! Sequential per-file driver: label each image, place it, report the rest.

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::engine::labeler::Labeler;
use crate::engine::sorter::place_file;
use crate::types::{RunReport, SortedFile};

use super::context::PipelineContext;

/// Process discovered images one at a time: label → place → log. A failure
/// for one file is recorded and the loop moves on; it never aborts the run.
/// `on_file` fires after every file, with the placement record on success.
pub fn process_files<L: Labeler>(
    ctx: &mut PipelineContext,
    images: &[PathBuf],
    labeler: &L,
    on_file: &mut dyn FnMut(&Path, Option<&SortedFile>),
) -> RunReport {
    let mut report = RunReport::default();
    for path in images {
        match label_and_place(ctx, path, labeler) {
            Ok(sorted) => {
                info!("{} -> {}", path.display(), sorted.dest.display());
                on_file(path, Some(&sorted));
                report.sorted.push(sorted);
            }
            Err(err) => {
                warn!("skipping {}: {:#}", path.display(), err);
                on_file(path, None);
                report.skipped.push((path.clone(), format!("{err:#}")));
            }
        }
    }
    report
}

fn label_and_place<L: Labeler>(
    ctx: &mut PipelineContext,
    path: &Path,
    labeler: &L,
) -> crate::Result<SortedFile> {
    let label = labeler.label(path)?;
    let dest = place_file(ctx, path, &label)?;
    Ok(SortedFile {
        source: path.to_path_buf(),
        label,
        dest,
    })
}
