//! TOML schema definitions for tmplconf.toml

use serde::{Deserialize, Serialize};

/// Root structure for tmplconf.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TmplconfToml {
    /// Render settings
    #[serde(default)]
    pub render: RenderSection,
}

/// `[render]` section in tmplconf.toml
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RenderSection {
    /// Print a unified diff per rendered file (default: false)
    pub diff: Option<bool>,

    /// Show a progress bar for directory renders (default: true)
    pub progress: Option<bool>,

    /// Variables applied before any given on the command line
    #[serde(default)]
    pub variables: Vec<VariableEntry>,
}

/// One `[[render.variables]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableEntry {
    pub name: String,
    pub value: String,
}
