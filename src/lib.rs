pub mod colors;
pub mod error;
pub mod ini;
mod output;
pub mod progress;
pub mod settings;
pub mod substitute;
pub mod walker;

pub use colors::{ColorMode, Colors, Tone};
pub use error::{ConfigError, ParseErrorKind};
pub use ini::{
    coerce_value, load_config, load_config_entries, parse_ini, parse_ini_entries, ConfigEntries,
    ConfigMap, ConfigValue,
};
pub use output::{print_config, print_diff, OutputContext, OutputMode, RenderResult};
pub use progress::ProgressReporter;
pub use settings::{
    find_settings_file, generate_init_file, load_settings, merge_render_config, CliRenderOptions,
    RenderConfig, RenderSection, TmplconfToml, VariableEntry, TMPLCONF_TOML_TEMPLATE,
};
pub use substitute::{
    render_file, substitute_content, substitute_file, write_output, Rendered, SubstitutionPlan,
};
pub use walker::{walk_templates, TemplateEntry};

use std::fs;
use std::path::Path;

const BINARY_CHECK_SIZE: usize = 8192;

/// Check if content is binary by looking for null bytes in first 8192 bytes
pub fn is_binary(content: &[u8]) -> bool {
    let check_len = content.len().min(BINARY_CHECK_SIZE);
    content[..check_len].contains(&0)
}

/// Render `input` to `dest`.
///
/// A file input renders to the output file. A directory input is walked and
/// every file renders to the same relative path below `dest`; per-file
/// failures are reported and counted instead of aborting the walk.
pub fn run(
    input: &Path,
    dest: &Path,
    config: &RenderConfig,
    ctx: &OutputContext,
) -> Result<RenderResult, ConfigError> {
    let mut result = RenderResult::default();

    if !input.is_dir() {
        render_one(input, dest, config, &mut result, ctx)?;
        output::print_summary(&result, ctx);
        return Ok(result);
    }

    let entries = walk_templates(input);
    let progress = ProgressReporter::new(entries.len() as u64, config.progress);

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                output::print_error(input, &e, ctx);
                result.files_failed += 1;
                continue;
            }
        };

        progress.tick(&entry.relative.to_string_lossy());

        let target = dest.join(&entry.relative);
        if let Err(e) = render_one(&entry.source, &target, config, &mut result, ctx) {
            output::print_error(&entry.source, &e, ctx);
            result.files_failed += 1;
        }
    }

    progress.finish();
    output::print_summary(&result, ctx);

    Ok(result)
}

fn render_one(
    input: &Path,
    dest: &Path,
    config: &RenderConfig,
    result: &mut RenderResult,
    ctx: &OutputContext,
) -> Result<(), ConfigError> {
    let bytes = fs::read(input).map_err(|e| ConfigError::io(input, e))?;

    if !config.dry_run {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
    }

    // Binary and non-UTF-8 files pass through untouched
    if is_binary(&bytes) {
        return copy_verbatim(dest, &bytes, "binary", config, result, ctx);
    }
    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            return copy_verbatim(dest, e.as_bytes(), "non-UTF-8", config, result, ctx);
        }
    };

    let (rendered, replacements) = substitute_content(&content, &config.plan);
    tracing::debug!(path = %input.display(), replacements, "rendered template");

    if config.diff && rendered != content {
        print_diff(&dest.display().to_string(), &content, &rendered);
    }

    if !config.dry_run {
        write_output(dest, &rendered)?;
    }

    if rendered == content {
        result.files_unchanged += 1;
        output::print_unchanged(dest, ctx);
    } else {
        result.files_rendered += 1;
        result.replacements += replacements;
        output::print_rendered(dest, replacements, config.dry_run, ctx);
    }

    Ok(())
}

fn copy_verbatim(
    dest: &Path,
    bytes: &[u8],
    reason: &str,
    config: &RenderConfig,
    result: &mut RenderResult,
    ctx: &OutputContext,
) -> Result<(), ConfigError> {
    if !config.dry_run {
        fs::write(dest, bytes).map_err(|e| ConfigError::io(dest, e))?;
    }
    result.files_copied += 1;
    output::print_copied(dest, reason, ctx);
    Ok(())
}
