//! Application configuration constants.
//! Service contract, filters, and cost model in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived file names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Name of the optional per-directory config file (`.snapsort.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// File names excluded from the walk by default. The sorted output
    /// subtree is excluded separately via the pipeline context.
    pub fn default_exclude_patterns(&self) -> Vec<String> {
        vec![self.config_filename().to_string()]
    }
}

// ---- Discovery ----

/// Name of the output subdirectory created under the source root.
pub const DEFAULT_SORTED_DIR: &str = "sorted";

/// File extensions treated as images (matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

// ---- Remote labelling service ----

/// Endpoint and request shape for the vision labelling service.
pub struct VisionApi;

impl VisionApi {
    pub const URL: &'static str = "https://api.openai.com/v1/chat/completions";
    pub const MODEL: &'static str = "gpt-4-vision-preview";
    /// Image detail level sent with each request. `low` keeps token usage flat.
    pub const IMAGE_DETAIL: &'static str = "low";
    pub const MAX_TOKENS: u32 = 400;
}

/// Classification instruction sent with every image.
pub const LABEL_PROMPT: &str = "\
Classify each image.
Delimit labels for the classification with _
The first label should be one of the following primary labels
Primary labels: [\"Screenshot\", \"Photograph\", \"Meme\", \"Graphic\", \"Document\", \"Art\", \"Misc\"]
The second label should be the main label for what the image contains, 1-3 words
For screenshots, the second label should be the program being used in the screenshot. The third label should describe what the program is doing or the general purpose of the program. Be as specific as possible so there is no ambiguity as to what is being described
For photographs the second label should be the setting of the photograph, and the third should be the subject/additional details about it
For graphics, the second label should be the main text in the graphic or a short name for it to describe its purpose, and the third label should be additional details
In general the third label should cover the general idea or purpose of the image as descriptively as possible. If there is large text in the image, use that as part of the labelling if it is significant to the main purpose of the image
Example label:
Screenshot_Visual Studio Code_Python image classification program";

// ---- Cost estimate ----

/// Rough per-image token counts and pricing used for the pre-run estimate
/// shown by the confirmation gate.
pub struct CostEstimate;

impl CostEstimate {
    pub const INPUT_TOKENS_PER_IMAGE: usize = 350;
    pub const OUTPUT_TOKENS_PER_IMAGE: usize = 10;
    pub const USD_PER_INPUT_TOKEN: f64 = 0.00001;
    pub const USD_PER_OUTPUT_TOKEN: f64 = 0.00003;

    /// Estimated API cost in USD for labelling `num_images` images.
    pub fn for_images(num_images: usize) -> f64 {
        let input = (num_images * Self::INPUT_TOKENS_PER_IMAGE) as f64 * Self::USD_PER_INPUT_TOKEN;
        let output =
            (num_images * Self::OUTPUT_TOKENS_PER_IMAGE) as f64 * Self::USD_PER_OUTPUT_TOKEN;
        input + output
    }
}
