pub mod api_key;
pub mod config;
pub mod logger;
pub(crate) mod snapsort_toml;

pub use api_key::get_api_key;
pub use config::*;
pub use logger::{Colors, setup_logging};
