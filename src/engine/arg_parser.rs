use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Vision-label image sorter.
#[derive(Clone, Parser)]
#[command(name = "snapsort")]
#[command(
    about = "Label images with a vision model and sort them into per-label folders; use --dry-run to preview without calling the API."
)]
pub struct Cli {
    /// Directory to sort. Default: current directory.
    #[arg(value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Name of the output subdirectory created under DIR. Default: `sorted`.
    #[arg(long, short)]
    pub sorted_dir: Option<String>,

    /// List discovered images and the estimated API cost; send no requests and move no files.
    #[arg(long)]
    pub dry_run: bool,

    /// Print each discovered image path.
    #[arg(long, short = 'l', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub list: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Copy images instead of moving them; originals stay in place.
    #[arg(long, short = 'k', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub keep_originals: Option<bool>,

    /// Ask for confirmation before the first label request.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub confirm: Option<bool>,

    /// Follow symbolic links.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Exclude patterns (glob syntax). Can specify multiple: -e pattern1 pattern2 pattern3
    #[arg(long, short = 'e', num_args = 1..)]
    pub exclude: Vec<String>,
}
