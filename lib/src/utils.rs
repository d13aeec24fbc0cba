use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Name of the application folder inside the os config dir
const APP_DIR_NAME: &str = "collectorz-converter";

/// Whether `path` is a remote location instead of a local file
#[must_use]
pub fn is_remote(path: &str) -> bool {
    let lower = path.trim_start().get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Make `name` usable as a single folder or file name on both windows and unix hosts.
///
/// Trailing dots and spaces are removed as windows does not allow them.
#[must_use]
pub fn sanitize_folder_name(name: &str) -> String {
    let options = sanitize_filename::Options {
        windows: true,
        truncate: true,
        replacement: "",
    };
    let sanitized = sanitize_filename::sanitize_with_options(name, options);

    sanitized.trim_end_matches(['.', ' ']).trim().to_string()
}

/// Get the application config directory, without creating it
pub fn get_app_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow!("failed to find os config dir."))?;
    path.push(APP_DIR_NAME);

    Ok(path)
}
