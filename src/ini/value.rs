//! Typed values and the string coercion chain

use std::fmt;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// A configuration value after coercion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Plain strings, and IPv4 addresses in canonical dotted-quad form
    Str(String),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Integers widen to float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::Str(_) => "str",
        }
    }
}

/// Renders text that coerces back to the same variant.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(true) => f.write_str("True"),
            ConfigValue::Bool(false) => f.write_str("False"),
            ConfigValue::Int(i) => write!(f, "{i}"),
            // Debug keeps the fractional part: 1.0 stays "1.0", not "1"
            ConfigValue::Float(x) => write!(f, "{x:?}"),
            ConfigValue::Str(s) => f.write_str(s),
        }
    }
}

fn ipv4_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$").expect("valid regex")
    })
}

/// Canonical dotted-quad form of `raw`, if it is an IPv4 literal.
fn canonical_ipv4(raw: &str) -> Option<String> {
    if !ipv4_pattern().is_match(raw) {
        return None;
    }
    raw.parse::<Ipv4Addr>().ok().map(|addr| addr.to_string())
}

/// Coerce a raw INI value, first match wins:
/// `True`/`False`, base-10 integer, float, IPv4 literal, then the raw string.
pub fn coerce_value(raw: &str) -> ConfigValue {
    match raw {
        "True" => return ConfigValue::Bool(true),
        "False" => return ConfigValue::Bool(false),
        _ => {}
    }

    if let Ok(i) = raw.parse::<i64>() {
        return ConfigValue::Int(i);
    }

    if let Ok(x) = raw.parse::<f64>() {
        return ConfigValue::Float(x);
    }

    if let Some(addr) = canonical_ipv4(raw) {
        return ConfigValue::Str(addr);
    }

    ConfigValue::Str(raw.to_string())
}
