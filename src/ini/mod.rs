//! INI loading with typed values.
//!
//! Values are coerced through [`coerce_value`]; section names are dropped and
//! all entries land in one flat map.

mod value;

pub use value::{coerce_value, ConfigValue};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ParseErrorKind};

/// Flat key to value mapping, keys lower-cased
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// Key/value pairs in the order they are declared
pub type ConfigEntries = Vec<(String, ConfigValue)>;

struct RawEntry {
    key: String,
    value: String,
    indent: usize,
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn syntax_error(line: usize, kind: ParseErrorKind) -> ConfigError {
    ConfigError::Parse {
        path: PathBuf::new(),
        line,
        kind,
    }
}

fn is_section_header(line: &str) -> bool {
    // Anything after the closing bracket, such as `; note`, is ignored
    line.starts_with('[') && line.rfind(']').is_some_and(|close| close > 1)
}

fn parse_entries(content: &str) -> Result<Vec<RawEntry>, ConfigError> {
    let mut entries: Vec<RawEntry> = Vec::new();
    let mut in_section = false;
    // True while the previous meaningful line was an entry that may continue
    let mut continuing = false;
    // Blank lines seen inside a value, kept only if an indented line follows
    let mut pending_blanks = 0;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            if continuing {
                pending_blanks += 1;
            }
            continue;
        }

        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if continuing {
            if let Some(last) = entries.last_mut() {
                if indent_of(raw_line) > last.indent {
                    for _ in 0..pending_blanks {
                        last.value.push('\n');
                    }
                    pending_blanks = 0;
                    last.value.push('\n');
                    last.value.push_str(line);
                    continue;
                }
            }
        }
        pending_blanks = 0;

        if is_section_header(line) {
            in_section = true;
            continuing = false;
            continue;
        }

        let split_at = line
            .find(|c: char| c == '=' || c == ':')
            .ok_or_else(|| syntax_error(line_no, ParseErrorKind::MissingDelimiter))?;

        if !in_section {
            return Err(syntax_error(line_no, ParseErrorKind::MissingSectionHeader));
        }

        let key = line[..split_at].trim();
        if key.is_empty() {
            return Err(syntax_error(line_no, ParseErrorKind::EmptyKey));
        }

        entries.push(RawEntry {
            key: key.to_lowercase(),
            value: line[split_at + 1..].trim().to_string(),
            indent: indent_of(raw_line),
        });
        continuing = true;
    }

    Ok(entries)
}

/// Parse INI text into typed entries in declaration order.
///
/// A repeated key keeps the position of its first declaration and the value
/// of its last.
pub fn parse_ini_entries(content: &str) -> Result<ConfigEntries, ConfigError> {
    let mut ordered: ConfigEntries = Vec::new();

    for entry in parse_entries(content)? {
        let value = coerce_value(&entry.value);
        tracing::trace!(key = %entry.key, kind = value.type_name(), "coerced");
        match ordered.iter_mut().find(|(key, _)| *key == entry.key) {
            Some(slot) => slot.1 = value,
            None => ordered.push((entry.key, value)),
        }
    }

    Ok(ordered)
}

/// Parse INI text into a typed map. Duplicate keys: last write wins.
pub fn parse_ini(content: &str) -> Result<ConfigMap, ConfigError> {
    Ok(parse_ini_entries(content)?.into_iter().collect())
}

fn read_entries(path: &Path) -> Result<ConfigEntries, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

    let entries = parse_ini_entries(&content).map_err(|e| match e {
        ConfigError::Parse { line, kind, .. } => ConfigError::Parse {
            path: path.to_path_buf(),
            line,
            kind,
        },
        other => other,
    })?;

    tracing::debug!(path = %path.display(), keys = entries.len(), "loaded config");
    Ok(entries)
}

/// Load an INI file and coerce its values.
///
/// Any failure to read the file is reported as [`ConfigError::Io`] with the
/// underlying cause attached.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigMap, ConfigError> {
    Ok(read_entries(path.as_ref())?.into_iter().collect())
}

/// Like [`load_config`], keeping the order keys are declared in the file.
pub fn load_config_entries(path: impl AsRef<Path>) -> Result<ConfigEntries, ConfigError> {
    read_entries(path.as_ref())
}
