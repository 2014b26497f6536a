//! Placeholder substitution for template files.
//!
//! Pairs are applied one after another in plan order, not in a single
//! simultaneous pass: a replacement value that contains a later name is
//! rewritten again by that later pair.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::ini::ConfigValue;

/// Ordered name to value pairs; `names[i]` is replaced by `values[i]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionPlan {
    names: Vec<String>,
    values: Vec<String>,
}

impl SubstitutionPlan {
    /// Build a plan from parallel lists. Fails if the lengths differ.
    pub fn new<N, V>(names: &[N], values: &[V]) -> Result<Self, ConfigError>
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        if names.len() != values.len() {
            return Err(ConfigError::LengthMismatch {
                names: names.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
            values: values.iter().map(|v| v.as_ref().to_string()).collect(),
        })
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.names.push(name.into());
        self.values.push(value.into());
    }

    /// Append loaded INI entries in their order, values rendered with `Display`.
    pub fn extend_from_entries(&mut self, entries: &[(String, ConfigValue)]) {
        for (key, value) in entries {
            self.push(key.as_str(), value.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

impl<N, V> FromIterator<(N, V)> for SubstitutionPlan
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut plan = SubstitutionPlan::default();
        for (name, value) in iter {
            plan.push(name, value);
        }
        plan
    }
}

/// Result of rendering one template
#[derive(Debug)]
pub struct Rendered {
    pub original: String,
    pub content: String,
    /// Occurrences replaced, summed over all pairs
    pub replacements: usize,
}

impl Rendered {
    pub fn has_changes(&self) -> bool {
        self.original != self.content
    }
}

/// Apply `plan` to `content`, returning the new text and the replacement count.
pub fn substitute_content(content: &str, plan: &SubstitutionPlan) -> (String, usize) {
    let mut result = content.to_string();
    let mut replacements = 0;

    for (name, value) in plan.pairs() {
        if name.is_empty() {
            continue;
        }
        let count = result.matches(name).count();
        if count > 0 {
            result = result.replace(name, value);
            replacements += count;
        }
    }

    (result, replacements)
}

/// Read `input` and apply `plan` without writing anything.
pub fn render_file(input: &Path, plan: &SubstitutionPlan) -> Result<Rendered, ConfigError> {
    let original = fs::read_to_string(input).map_err(|e| ConfigError::io(input, e))?;
    let (content, replacements) = substitute_content(&original, plan);

    tracing::debug!(path = %input.display(), replacements, "rendered template");
    Ok(Rendered {
        original,
        content,
        replacements,
    })
}

/// Create or truncate `output` with `content`.
pub fn write_output(output: &Path, content: &str) -> Result<(), ConfigError> {
    fs::write(output, content).map_err(|e| ConfigError::io(output, e))
}

/// Copy `input` to `output`, replacing each `names[i]` with `values[i]`.
///
/// Mismatched list lengths fail before any file is opened.
pub fn substitute_file<N, V>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    names: &[N],
    values: &[V],
) -> Result<(), ConfigError>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let plan = SubstitutionPlan::new(names, values)?;
    let rendered = render_file(input.as_ref(), &plan)?;
    write_output(output.as_ref(), &rendered.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::parse_ini_entries;
    use tempfile::TempDir;

    fn plan(pairs: &[(&str, &str)]) -> SubstitutionPlan {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_more_names_than_values_rejected() {
        let result = substitute_file(
            "first_path",
            "second_path",
            &["first_arg", "second_arg"],
            &["first_val"],
        );
        assert!(matches!(
            result,
            Err(ConfigError::LengthMismatch {
                names: 2,
                values: 1
            })
        ));
    }

    #[test]
    fn test_more_values_than_names_rejected() {
        let result = substitute_file(
            "first_path",
            "second_path",
            &["first_arg"],
            &["first_val", "second_val"],
        );
        assert!(matches!(result, Err(ConfigError::LengthMismatch { .. })));
    }

    #[test]
    fn test_mismatch_does_not_touch_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "first_arg\n").unwrap();

        let result = substitute_file(&input, &output, &["first_arg"], &["a", "b"]);

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_no_var_names_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "some_var some_val\n").unwrap();

        substitute_file(
            &input,
            &output,
            &["first_arg", "second_arg"],
            &["first_val", "second_val"],
        )
        .unwrap();

        assert_eq!(fs::read(&output).unwrap(), fs::read(&input).unwrap());
    }

    #[test]
    fn test_var_names_replaced_with_values() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "some_var first_arg\n").unwrap();

        substitute_file(
            &input,
            &output,
            &["first_arg", "second_arg"],
            &["first_val", "second_val"],
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "some_var first_val\n");
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "x\n").unwrap();
        fs::write(&output, "stale content that is longer\n").unwrap();

        substitute_file(&input, &output, &["x"], &["y"]).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "y\n");
    }

    #[test]
    fn test_missing_input_is_config_error() {
        let dir = TempDir::new().unwrap();
        let result = substitute_file(
            dir.path().join("in"),
            dir.path().join("out"),
            &["first_arg"],
            &["first_val"],
        );
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_unwritable_output_is_config_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "first_arg\n").unwrap();

        let output = dir.path().join("no_such_dir").join("out.txt");
        match substitute_file(&input, &output, &["first_arg"], &["v"]) {
            Err(ConfigError::Io { path, .. }) => assert_eq!(path, output),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let (out, count) = substitute_content("A and A and A", &plan(&[("A", "b")]));
        assert_eq!(out, "b and b and b");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_substitution_is_sequential() {
        // first pair introduces `second`, which the next pair then rewrites
        let chained = plan(&[("first", "second"), ("second", "third")]);
        let (out, _) = substitute_content("first", &chained);
        assert_eq!(out, "third");
    }

    #[test]
    fn test_earlier_pair_not_revisited() {
        let (out, _) = substitute_content("b", &plan(&[("a", "x"), ("b", "a")]));
        assert_eq!(out, "a");
    }

    #[test]
    fn test_empty_name_skipped() {
        let (out, count) = substitute_content("abc", &plan(&[("", "zzz")]));
        assert_eq!(out, "abc");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_plan_from_entries_uses_display() {
        let entries = vec![
            ("__flag__".to_string(), ConfigValue::Bool(true)),
            ("__ratio__".to_string(), ConfigValue::Float(1.0)),
        ];

        let mut plan = SubstitutionPlan::default();
        plan.extend_from_entries(&entries);

        let (out, _) = substitute_content("__flag__ __ratio__", &plan);
        assert_eq!(out, "True 1.0");
    }

    #[test]
    fn test_longer_name_declared_first_wins_over_prefix() {
        let entries =
            parse_ini_entries("[vars]\nmodel_dir = /srv/m\nmodel = piwind\n").unwrap();

        let mut plan = SubstitutionPlan::default();
        plan.extend_from_entries(&entries);

        let (out, _) = substitute_content("model_dir model\n", &plan);
        assert_eq!(out, "/srv/m piwind\n");
    }

    #[test]
    fn test_render_file_reports_changes() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "hello NAME\n").unwrap();

        let rendered = render_file(&input, &plan(&[("NAME", "world")])).unwrap();
        assert!(rendered.has_changes());
        assert_eq!(rendered.replacements, 1);
        assert_eq!(rendered.content, "hello world\n");

        let untouched = render_file(&input, &plan(&[("OTHER", "x")])).unwrap();
        assert!(!untouched.has_changes());
    }
}
