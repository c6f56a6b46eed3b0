//! Load `.snapsort.toml` from the source directory (CLI only). Lib does not
//! use this; the consuming program injects config via SortOpts.

use serde::Deserialize;
use std::path::Path;

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Deserialize)]
pub(crate) struct SnapsortToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    sorted_dir: Option<String>,
    keep_originals: Option<bool>,
    confirm: Option<bool>,
    list: Option<bool>,
    verbose: Option<bool>,
    follow_links: Option<bool>,
    exclude: Option<Vec<String>>,
}

/// Load `.snapsort.toml` from `dir` if present. Returns None if file missing
/// or unreadable. CLI only.
pub(crate) fn load_snapsort_toml(dir: &Path) -> Option<SnapsortToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    toml::from_str(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($idx:expr, $opts:expr, $idx_field:ident => $opts_field:ident) => {
        if let Some(v) = $idx.$idx_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only set fields present in the file). Call
/// before applying CLI so flags win.
pub(crate) fn apply_file_to_opts(file: &SnapsortToml, opts: &mut Opts) {
    let settings = &file.settings;
    if let Some(ref s) = settings.sorted_dir {
        opts.sorted_dir = s.clone();
    }
    apply_file_opt!(settings, opts, keep_originals => keep_originals);
    apply_file_opt!(settings, opts, confirm => confirm);
    apply_file_opt!(settings, opts, list => list_files);
    apply_file_opt!(settings, opts, verbose => verbose);
    apply_file_opt!(settings, opts, follow_links => follow_links);
    if let Some(ref v) = settings.exclude {
        opts.exclude = v.clone();
    }
}
