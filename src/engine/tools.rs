//! Path and filter utilities

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::Label;
use crate::utils::config::IMAGE_EXTENSIONS;

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// Check if a file should be excluded based on OS-specific hidden files
pub fn is_os_hidden_file(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        match name {
            // macOS
            ".DS_Store" | ".AppleDouble" | ".LSOverride" => true,
            // Windows
            "Thumbs.db" | "ehthumbs.db" | "Desktop.ini" | "$RECYCLE.BIN" => true,
            // Linux
            ".directory" => true,
            // macOS resource fork files start with ._
            _ => name.starts_with("._"),
        }
    } else {
        false
    }
}

/// True when the path carries a recognized image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|k| ext.eq_ignore_ascii_case(k)))
}

/// Returns true if the path should be included in the walk (a candidate image
/// outside the sorted subtree, not hidden, not excluded).
pub fn should_include_in_walk(
    path: &Path,
    root: &Path,
    sorted_root: &Path,
    exclude_patterns: &[String],
) -> bool {
    if path == root {
        return false;
    }
    if path.starts_with(sorted_root) {
        return false;
    }
    if is_os_hidden_file(path) {
        return false;
    }
    if !is_image_file(path) {
        return false;
    }
    if exclude_patterns.is_empty() {
        return true;
    }
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return true,
    };
    let path_str = path.to_str().unwrap_or("");
    for pattern in exclude_patterns {
        if glob_match(pattern, name) || glob_match(pattern, path_str) {
            return false;
        }
    }
    true
}

/// Simple glob pattern matching (supports * and ?)
pub fn glob_match(pattern: &str, text: &str) -> bool {
    // Remove leading '!' if present (negation handled by caller)
    let pattern = pattern.strip_prefix('!').unwrap_or(pattern);

    let mut pattern_chars = pattern.chars().peekable();
    let mut text_chars = text.chars().peekable();

    while let Some(&p) = pattern_chars.peek() {
        match p {
            '*' => {
                pattern_chars.next();
                if pattern_chars.peek().is_none() {
                    return true; // trailing * matches everything
                }
                // Try to match rest of pattern
                while text_chars.peek().is_some() {
                    if glob_match(
                        &pattern_chars.clone().collect::<String>(),
                        &text_chars.clone().collect::<String>(),
                    ) {
                        return true;
                    }
                    text_chars.next();
                }
                return false;
            }
            '?' => {
                pattern_chars.next();
                if text_chars.next().is_none() {
                    return false;
                }
            }
            _ => {
                pattern_chars.next();
                if text_chars.next() != Some(p) {
                    return false;
                }
            }
        }
    }

    text_chars.peek().is_none()
}

/// Characters that cannot appear in a destination folder name.
const INVALID_FOLDER_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replace filesystem-unsafe characters in a label segment with `_`.
pub fn sanitize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| {
            if INVALID_FOLDER_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Destination folder name for a label: its sanitized primary segment.
pub fn label_folder_name(label: &Label) -> String {
    sanitize_label(label.primary())
}

/// `photo.jpg` → `photo_1.jpg`; a name without a stem keeps the suffix at the end.
pub fn numbered_file_name(file_name: &str, n: usize) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{n}.{ext}"),
        _ => format!("{file_name}_{n}"),
    }
}

/// First destination path in `dir` for `file_name` that does not exist yet:
/// the name itself, then `name_1`, `name_2`, … Never overwrites.
pub fn unique_dest_path(dir: &Path, file_name: &str) -> PathBuf {
    let mut candidate = dir.join(file_name);
    let mut n = 0;
    while candidate.exists() {
        n += 1;
        candidate = dir.join(numbered_file_name(file_name, n));
    }
    candidate
}

/// Data-URL MIME type for an image path, by extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

/// Canonicalize the source root; a missing or non-directory root is fatal.
pub fn canonicalize_source_root(root: &Path) -> Result<PathBuf> {
    let root = root
        .canonicalize()
        .with_context(|| format!("source directory not found: {}", root.display()))?;
    if !root.is_dir() {
        bail!("source path is not a directory: {}", root.display());
    }
    Ok(root)
}
