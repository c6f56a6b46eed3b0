//! Pipeline context: run-scoped state shared by discovery and placement.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

/// Shared context for one run. Built once in the sort/preview operations and
/// threaded through the walk and the sorter; the label-directory cache is the
/// only state that crosses file boundaries.
pub struct PipelineContext {
    pub root: PathBuf,
    /// Output subtree under `root`; pruned from the walk, created lazily.
    pub sorted_root: PathBuf,
    pub exclude: Vec<String>,
    pub follow_links: bool,
    pub keep_originals: bool,
    label_dirs: HashMap<String, PathBuf>,
}

impl PipelineContext {
    /// Already-created directory for a label folder name, if any.
    pub fn cached_label_dir(&self, folder: &str) -> Option<&PathBuf> {
        self.label_dirs.get(folder)
    }

    /// Record a created label directory so the folder maps to exactly one
    /// destination for the rest of the run.
    pub fn remember_label_dir(&mut self, folder: String, dir: PathBuf) {
        self.label_dirs.insert(folder, dir);
    }
}

pub fn create_pipeline_context(root: &Path, opts: &Opts) -> PipelineContext {
    let mut exclude = PackagePaths::get().default_exclude_patterns();
    exclude.extend(opts.exclude.iter().cloned());

    PipelineContext {
        root: root.to_path_buf(),
        sorted_root: root.join(&opts.sorted_dir),
        exclude,
        follow_links: opts.follow_links,
        keep_originals: opts.keep_originals,
        label_dirs: HashMap::new(),
    }
}
