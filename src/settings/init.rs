//! Template generation for `tmplconf init`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Template tmplconf.toml with documentation
pub const TMPLCONF_TOML_TEMPLATE: &str = r#"# tmplconf.toml - Settings for the tmplconf template renderer
#
# Variables are applied in order: first the ones listed here, then those
# loaded with --vars, then --set flags. Each replacement runs over the
# output of the previous one.

[render]
# Print a unified diff for every rendered file.
# Default: false
# diff = false

# Show a progress bar when rendering a directory of templates.
# Default: true
# progress = true

# [[render.variables]]
# name = "__MODEL_DIR__"
# value = "/var/models"
"#;

/// Generate tmplconf.toml in the specified directory (or current directory if None).
///
/// Returns an error if tmplconf.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(
        || PathBuf::from("tmplconf.toml"),
        |d| d.join("tmplconf.toml"),
    );

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "tmplconf.toml already exists",
        ));
    }

    fs::write(&path, TMPLCONF_TOML_TEMPLATE)?;
    Ok(path)
}

/// Generate tmplconf.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_init_file_creates_file() {
        let dir = TempDir::new().unwrap();

        let path = generate_init_file_in(Some(dir.path())).unwrap();
        assert_eq!(path, dir.path().join("tmplconf.toml"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[render]"));
    }

    #[test]
    fn test_generate_init_file_fails_if_exists() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tmplconf.toml"), "existing").unwrap();

        let result = generate_init_file_in(Some(dir.path()));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_template_is_valid_toml() {
        let parsed: Result<super::super::toml_schema::TmplconfToml, _> =
            toml::from_str(TMPLCONF_TOML_TEMPLATE);
        assert!(parsed.is_ok());
    }
}
