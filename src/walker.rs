use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

/// A template file found below a template root
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub source: PathBuf,
    /// Path relative to the template root, reused below the output root
    pub relative: PathBuf,
}

/// Walk a template directory and yield its files, respecting gitignore
pub fn walk_templates(root: &Path) -> Vec<io::Result<TemplateEntry>> {
    let walker = WalkBuilder::new(root)
        .hidden(true) // Skip hidden files
        .git_ignore(true) // Respect .gitignore
        .git_global(true)
        .git_exclude(true)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut entries = vec![];
    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                    continue;
                }
                let source = entry.into_path();
                let relative = match source.strip_prefix(root) {
                    Ok(rel) => rel.to_path_buf(),
                    Err(_) => continue,
                };
                entries.push(Ok(TemplateEntry { source, relative }));
            }
            Err(e) => entries.push(Err(io::Error::other(e.to_string()))),
        }
    }

    entries
}
