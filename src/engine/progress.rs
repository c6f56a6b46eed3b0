//! Progress bar utilities for the labelling loop.

use kdam::{Animation, Bar, BarExt};

/// Create a progress bar sized to the discovered image count.
pub fn create_progress_bar(total: usize, desc: &'static str) -> Bar {
    kdam::tqdm!(total = total, desc = desc, animation = Animation::Classic)
}

/// Advance the bar by `n` processed files.
pub fn update_progress_bar(bar: &mut Bar, n: usize) {
    let _ = bar.update(n);
}
