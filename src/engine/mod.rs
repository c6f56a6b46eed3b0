//! Engine module for labelling and placement operations

pub mod arg_parser;
pub mod cli;
pub mod labeler;
pub mod progress;
pub mod sorter;
pub mod tools;

// Re-export commonly used items
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use labeler::{Labeler, VisionLabeler};
pub use sorter::{ensure_label_dir, place_file};
pub use tools::{
    canonicalize_source_root, is_image_file, label_folder_name, path_relative_to, sanitize_label,
};
