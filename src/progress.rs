use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_THRESHOLD: u64 = 10;

/// Progress bar for directory renders; hidden for small batches
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(total: u64, enabled: bool) -> Self {
        if !enabled || total < PROGRESS_THRESHOLD {
            return Self { bar: None };
        }

        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");

        let bar = ProgressBar::new(total);
        bar.set_style(style);
        Self { bar: Some(bar) }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Advance by one file, showing its name
    pub fn tick(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_below_threshold() {
        assert!(!ProgressReporter::new(3, true).is_visible());
    }

    #[test]
    fn test_hidden_when_disabled() {
        assert!(!ProgressReporter::new(100, false).is_visible());
    }

    #[test]
    fn test_visible_for_large_batches() {
        let progress = ProgressReporter::new(PROGRESS_THRESHOLD, true);
        assert!(progress.is_visible());
        progress.tick("file.txt");
        progress.finish();
    }
}
