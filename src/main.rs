//! Snapsort CLI: sort images into per-label folders; use --dry-run to preview
//! without calling the API.

use anyhow::Result;
use clap::Parser;
use snapsort::engine::arg_parser::Cli;
use snapsort::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
