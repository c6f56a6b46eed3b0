//! Destination-side operations: per-label folders, collision-free names,
//! file transfer.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};

use crate::Label;
use crate::engine::tools::{label_folder_name, unique_dest_path};
use crate::pipeline::PipelineContext;

/// Directory for `label` under the sorted root, created on first use and
/// cached for the rest of the run.
pub fn ensure_label_dir(ctx: &mut PipelineContext, label: &Label) -> Result<PathBuf> {
    let folder = label_folder_name(label);
    if let Some(dir) = ctx.cached_label_dir(&folder) {
        return Ok(dir.clone());
    }
    let dir = ctx.sorted_root.join(&folder);
    fs::create_dir_all(&dir)
        .with_context(|| format!("create label directory {}", dir.display()))?;
    ctx.remember_label_dir(folder, dir.clone());
    Ok(dir)
}

/// Transfer `src` into the label's directory under a collision-free name.
/// Returns the destination path.
pub fn place_file(ctx: &mut PipelineContext, src: &Path, label: &Label) -> Result<PathBuf> {
    let dir = ensure_label_dir(ctx, label)?;
    let file_name = src
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("source has no usable file name: {}", src.display()))?;
    let dest = unique_dest_path(&dir, file_name);
    transfer_file(src, &dest, ctx.keep_originals)?;
    Ok(dest)
}

/// Move or copy one file. When moving, the original is only removed after the
/// copy succeeded.
fn transfer_file(src: &Path, dest: &Path, keep_originals: bool) -> Result<()> {
    if keep_originals {
        fs::copy(src, dest)
            .with_context(|| format!("copy {} -> {}", src.display(), dest.display()))?;
        return Ok(());
    }
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }
    // rename fails across filesystems; fall back to copy + remove
    fs::copy(src, dest).with_context(|| format!("copy {} -> {}", src.display(), dest.display()))?;
    fs::remove_file(src).with_context(|| format!("remove original {}", src.display()))?;
    Ok(())
}
