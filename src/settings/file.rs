//! Settings file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use super::toml_schema::TmplconfToml;
use crate::error::ConfigError;

/// Search upward from `start_dir` for a file with the given name.
///
/// If `stop_at_git_root` is true, stops searching when a `.git` directory is found.
/// Returns `None` if the file is not found.
pub fn find_file_upward(
    start_dir: &Path,
    filename: &str,
    stop_at_git_root: bool,
) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let file_path = current.join(filename);
        if file_path.exists() {
            return Some(file_path);
        }

        if stop_at_git_root && current.join(".git").exists() {
            return None;
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find tmplconf.toml by searching upward from the given directory,
/// stopping at the git repository root.
pub fn find_settings_file(start_dir: &Path) -> Option<PathBuf> {
    find_file_upward(start_dir, "tmplconf.toml", true)
}

/// Load and parse tmplconf.toml from the given path.
pub fn load_settings(path: &Path) -> Result<TmplconfToml, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let settings: TmplconfToml = toml::from_str(&content)?;
    Ok(settings)
}
