//! Settings file support for tmplconf.
//!
//! This module provides:
//! - Loading settings from `tmplconf.toml`
//! - Settings file discovery (search upward from current directory)
//! - Merging CLI args, settings file, and defaults
//! - Template generation with `tmplconf init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{find_file_upward, find_settings_file, load_settings};
pub use init::{generate_init_file, generate_init_file_in, TMPLCONF_TOML_TEMPLATE};
pub use merge::{merge_render_config, CliRenderOptions, RenderConfig};
pub use toml_schema::{RenderSection, TmplconfToml, VariableEntry};
