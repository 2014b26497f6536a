use crate::colors::{Colors, Tone};
use crate::ini::ConfigMap;
use similar::{ChangeTag, TextDiff};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Normal,
    /// Only the names of written files
    Quiet,
}

pub struct OutputContext {
    pub mode: OutputMode,
    pub colors: Colors,
}

impl OutputContext {
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            mode,
            colors: Colors::new(use_colors),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct RenderResult {
    pub files_rendered: usize,
    pub files_unchanged: usize,
    /// Binary or non-UTF-8 files copied as-is
    pub files_copied: usize,
    pub files_failed: usize,
    pub replacements: usize,
}

impl RenderResult {
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}

pub fn print_rendered(path: &Path, replacements: usize, dry_run: bool, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        println!("{}", path.display());
        return;
    }
    let label = if dry_run { "Would render:" } else { "Rendered:" };
    println!(
        "{} {} {}",
        ctx.colors.paint(Tone::Success, label),
        path.display(),
        ctx.colors.paint(Tone::Dim, format!("({replacements} replacements)"))
    );
}

pub fn print_unchanged(path: &Path, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{} {}",
        ctx.colors.paint(Tone::Info, "Unchanged:"),
        path.display()
    );
}

pub fn print_copied(path: &Path, reason: &str, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }
    println!(
        "{} {}",
        ctx.colors.paint(Tone::Info, format!("Copied {reason}:")),
        path.display()
    );
}

pub fn print_error(path: &Path, error: &dyn std::error::Error, ctx: &OutputContext) {
    eprintln!(
        "{} {}: {error}",
        ctx.colors.paint(Tone::Error, "Error:"),
        path.display()
    );
}

pub fn print_diff(label: &str, original: &str, content: &str) {
    let diff = TextDiff::from_lines(original, content);

    println!("--- {label}");
    println!("+++ {label}");

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                print!("{sign}{change}");
                if change.missing_newline() {
                    println!();
                }
            }
        }
    }
}

/// One `key = value  (type)` line per entry
pub fn print_config(config: &ConfigMap, ctx: &OutputContext) {
    for (key, value) in config {
        if ctx.mode == OutputMode::Quiet {
            println!("{key} = {value}");
            continue;
        }
        println!(
            "{} = {value}  {}",
            ctx.colors.paint(Tone::Info, key),
            ctx.colors.paint(Tone::Dim, format!("({})", value.type_name()))
        );
    }
}

pub fn print_summary(result: &RenderResult, ctx: &OutputContext) {
    if ctx.mode == OutputMode::Quiet {
        return;
    }

    let mut parts = vec![ctx.colors.paint(
        Tone::Success,
        format!("{} files rendered", result.files_rendered),
    )];
    parts.push(format!("{} unchanged", result.files_unchanged));
    if result.files_copied > 0 {
        parts.push(format!("{} copied", result.files_copied));
    }
    if result.files_failed > 0 {
        parts.push(
            ctx.colors
                .paint(Tone::Error, format!("{} failed", result.files_failed)),
        );
    }

    println!();
    println!("{}", parts.join(", "));
}
