//! CLI command handler: sort by default; --dry-run previews without requests.

use anyhow::{Context, Result};
use dialoguer::Confirm;
use log::{debug, warn};

use crate::engine::arg_parser::Cli;
use crate::engine::labeler::VisionLabeler;
use crate::preview::preview_dir;
use crate::sort::sort_dir_with_opts;
use crate::types::{Opts, RunPlan};
use crate::utils::get_api_key;
use crate::utils::setup_logging;
use crate::utils::snapsort_toml::{apply_file_to_opts, load_snapsort_toml};

/// Resolve options: defaults → `.snapsort.toml` in DIR → CLI flags.
fn setup_opts(cli: &Cli) -> Opts {
    let mut opts = Opts::default();
    if let Some(file) = load_snapsort_toml(&cli.dir) {
        apply_file_to_opts(&file, &mut opts);
    }
    if let Some(ref s) = cli.sorted_dir {
        opts.sorted_dir = s.clone();
    }
    if let Some(v) = cli.keep_originals {
        opts.keep_originals = v;
    }
    if let Some(v) = cli.confirm {
        opts.confirm = v;
    }
    if let Some(v) = cli.list {
        opts.list_files = v;
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    if let Some(v) = cli.follow_links {
        opts.follow_links = v;
    }
    if !cli.exclude.is_empty() {
        opts.exclude = cli.exclude.clone();
    }
    setup_logging(opts.verbose);
    opts
}

/// Run sort (default) or preview-only when --dry-run. Sends no requests and
/// moves no files when dry_run.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    if cli.dry_run {
        warn!("RUNNING IN DRY-RUN MODE. NO LABEL REQUESTS WILL BE SENT AND NO FILES WILL BE MOVED.");
        preview_dir(&cli.dir, &opts)?;
        return Ok(());
    }
    let api_key = get_api_key(&cli.dir)?;
    let labeler = VisionLabeler::new(api_key)?;
    let confirm = opts.confirm;
    debug!("Sorting directory...");
    sort_dir_with_opts(
        &cli.dir,
        &opts,
        &labeler,
        |plan| confirm_run(plan, confirm),
        None,
    )?;
    Ok(())
}

/// Confirmation gate: show what the run will cost, then ask. Auto-accepts
/// when confirmation was turned off.
fn confirm_run(plan: &RunPlan, confirm: bool) -> Result<bool> {
    println!(
        "Found {} images (estimated API cost ${:.4}).",
        plan.images.len(),
        plan.estimated_cost_usd
    );
    if !confirm {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt("Proceed with labelling?")
        .default(false)
        .interact()
        .context("read confirmation")
}
