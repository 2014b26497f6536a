//! Error type shared by the INI loader, the substitutor and the settings file

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Why an INI line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `key = value` line appeared before any `[section]` header
    MissingSectionHeader,
    /// A line that is neither a header, a comment nor a `key = value` pair
    MissingDelimiter,
    /// A `= value` line with nothing left of the delimiter
    EmptyKey,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingSectionHeader => write!(f, "entry before any section header"),
            ParseErrorKind::MissingDelimiter => write!(f, "expected `key = value`"),
            ParseErrorKind::EmptyKey => write!(f, "empty key"),
        }
    }
}

/// Error type for configuration loading and template rendering
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading or writing a file
    Io { path: PathBuf, source: io::Error },
    /// Malformed INI content
    Parse {
        path: PathBuf,
        line: usize,
        kind: ParseErrorKind,
    },
    /// Substitution names and values of different lengths
    LengthMismatch { names: usize, values: usize },
    /// tmplconf.toml parsing error
    Settings(toml::de::Error),
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "configuration error: {}: {source}", path.display())
            }
            ConfigError::Parse { path, line, kind } if path.as_os_str().is_empty() => {
                write!(f, "configuration error: line {line}: {kind}")
            }
            ConfigError::Parse { path, line, kind } => {
                write!(
                    f,
                    "configuration error: {}:{line}: {kind}",
                    path.display()
                )
            }
            ConfigError::LengthMismatch { names, values } => write!(
                f,
                "configuration error: {names} variable names but {values} values"
            ),
            ConfigError::Settings(e) => write!(f, "failed to parse settings file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Settings(e) => Some(e),
            ConfigError::Parse { .. } | ConfigError::LengthMismatch { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Settings(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_keeps_cause() {
        let err = ConfigError::io(
            Path::new("missing.ini"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "gone");
        assert!(err.to_string().contains("missing.ini"));
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = ConfigError::Parse {
            path: PathBuf::from("a.ini"),
            line: 3,
            kind: ParseErrorKind::MissingDelimiter,
        };

        assert_eq!(
            err.to_string(),
            "configuration error: a.ini:3: expected `key = value`"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = ConfigError::LengthMismatch {
            names: 2,
            values: 1,
        };
        assert!(err.to_string().contains("2 variable names but 1 values"));
    }
}
