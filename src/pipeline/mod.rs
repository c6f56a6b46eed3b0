//! Pipeline components: context, image discovery, per-file drive loop.

pub mod context;
pub mod orchestrator;
pub mod walk;

pub use context::{PipelineContext, create_pipeline_context};
pub use orchestrator::process_files;
pub use walk::{WalkOutcome, collect_images, image_walk};
