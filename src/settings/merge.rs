//! Settings merging logic
//!
//! Priority: CLI args > tmplconf.toml > defaults. Variables are concatenated
//! in that order instead, since substitution is sequential.

use super::toml_schema::RenderSection;
use crate::substitute::SubstitutionPlan;

/// Effective render settings
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub diff: bool,
    pub progress: bool,
    pub dry_run: bool,
    pub plan: SubstitutionPlan,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            diff: false,
            progress: true,
            dry_run: false,
            plan: SubstitutionPlan::default(),
        }
    }
}

/// CLI options that can override settings file values.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliRenderOptions {
    pub diff: Option<bool>,
    /// If Some(true), hide the progress bar (inverted in config)
    pub no_progress: Option<bool>,
    pub dry_run: bool,
    /// Variables from `--vars` files and `--set` flags, already in order
    pub plan: SubstitutionPlan,
}

/// Merge render settings from CLI, TOML, and defaults.
pub fn merge_render_config(cli: &CliRenderOptions, toml: Option<&RenderSection>) -> RenderConfig {
    let defaults = RenderConfig::default();

    let mut plan: SubstitutionPlan = toml
        .map(|t| {
            t.variables
                .iter()
                .map(|v| (v.name.as_str(), v.value.as_str()))
                .collect()
        })
        .unwrap_or_default();
    for (name, value) in cli.plan.pairs() {
        plan.push(name, value);
    }

    RenderConfig {
        diff: cli
            .diff
            .or_else(|| toml.and_then(|t| t.diff))
            .unwrap_or(defaults.diff),
        progress: cli
            .no_progress
            .map(|no| !no)
            .or_else(|| toml.and_then(|t| t.progress))
            .unwrap_or(defaults.progress),
        dry_run: cli.dry_run,
        plan,
    }
}
