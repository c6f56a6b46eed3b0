//! Public and internal types for the snapsort API and pipeline.

use anyhow::bail;
use std::path::PathBuf;

use crate::utils::config::DEFAULT_SORTED_DIR;

/// Label text returned by the vision service for one image.
///
/// The service answers with `_`-delimited segments (`Primary_Detail_Detail`);
/// the first non-empty segment of the first line names the destination folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    raw: String,
}

impl Label {
    /// Wrap raw response text. Fails when the text is empty or carries no
    /// usable segment (a response like `"___"`).
    pub fn new(raw: impl Into<String>) -> crate::Result<Self> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            bail!("label response was empty");
        }
        let label = Label { raw };
        if label.primary().is_empty() {
            bail!("label response had no usable text: {:?}", label.raw);
        }
        Ok(label)
    }

    /// Full label text as returned by the service.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// First non-empty `_`-delimited segment of the first line.
    pub fn primary(&self) -> &str {
        self.raw
            .lines()
            .next()
            .unwrap_or_default()
            .split('_')
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }
}

/// One file placed by the sorter.
#[derive(Clone, Debug)]
pub struct SortedFile {
    pub source: PathBuf,
    pub label: Label,
    pub dest: PathBuf,
}

/// What a run is about to do; shown to the confirmation gate before any
/// request is sent.
#[derive(Clone, Debug)]
pub struct RunPlan {
    pub images: Vec<PathBuf>,
    pub estimated_cost_usd: f64,
}

/// Result of one run: files placed under the sorted root, and files skipped
/// with the reason. Skips never abort the run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub sorted: Vec<SortedFile>,
    pub skipped: Vec<(PathBuf, String)>,
}

/// Lib-only options for [`sort_dir`](crate::sort_dir). Only the fields that
/// apply when using the crate (no prompts, no terminal output).
#[derive(Clone, Debug, Default)]
pub struct SortOpts {
    /// Name of the output subdirectory under the source root. When None,
    /// `"sorted"`.
    pub sorted_dir: Option<String>,
    /// Copy files instead of moving them; originals stay in place.
    pub keep_originals: bool,
    /// Follow symbolic links.
    pub follow_links: bool,
    /// Exclude patterns (glob syntax, e.g. `thumbnails`, `*.gif`).
    pub exclude: Vec<String>,
}

impl From<&SortOpts> for Opts {
    fn from(o: &SortOpts) -> Self {
        Opts {
            sorted_dir: o
                .sorted_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_SORTED_DIR.to_string()),
            keep_originals: o.keep_originals,
            follow_links: o.follow_links,
            exclude: o.exclude.clone(),
            confirm: false,
            list_files: false,
            verbose: false,
        }
    }
}

/// Full options (CLI and preview). Use [`SortOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Name of the output subdirectory under the source root.
    pub sorted_dir: String,
    /// Copy files instead of moving them; originals stay in place.
    pub keep_originals: bool,
    /// Follow symbolic links.
    pub follow_links: bool,
    /// Exclude patterns (glob syntax).
    pub exclude: Vec<String>,
    /// Ask for confirmation before the first label request.
    pub confirm: bool,
    /// Print each discovered image path.
    pub list_files: bool,
    /// Verbose output: debug logging, progress bar, per-path skip detail.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Opts {
            sorted_dir: DEFAULT_SORTED_DIR.to_string(),
            keep_originals: false,
            follow_links: false,
            exclude: Vec::new(),
            confirm: true,
            list_files: true,
            verbose: false,
        }
    }
}
