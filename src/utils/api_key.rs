//! API key loading: env var → .env in the source directory → hidden prompt.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::info;
use std::path::Path;

const ENV_KEY: &str = "SNAPSORT_API_KEY";

fn try_env_then_dotenv(dir: &Path) -> Option<String> {
    if let Ok(s) = std::env::var(ENV_KEY) {
        let s = s.trim().to_string();
        if !s.is_empty() {
            return Some(s);
        }
    }
    let env_path = dir.join(".env");
    if env_path.is_file() {
        let _ = dotenvy::from_path(&env_path);
        if let Ok(s) = std::env::var(ENV_KEY) {
            let s = s.trim().to_string();
            if !s.is_empty() {
                return Some(s);
            }
        }
    }
    None
}

/// Read the API key: env (SNAPSORT_API_KEY) → .env in `dir` → hidden prompt.
/// An empty key is a configuration error; nothing runs without one.
pub fn get_api_key(dir: &Path) -> Result<String> {
    if let Some(s) = try_env_then_dotenv(dir) {
        info!("API key found in environment");
        return Ok(s);
    }
    let label = format!("[{}]", env!("CARGO_PKG_NAME")).cyan().bold();
    let key =
        rpassword::prompt_password(format!("{} OpenAI API key: ", label)).context("read API key")?;
    let key = key.trim().to_string();
    if key.is_empty() {
        bail!("an API key is required (set {ENV_KEY}, add it to .env, or enter it at the prompt)");
    }
    Ok(key)
}
