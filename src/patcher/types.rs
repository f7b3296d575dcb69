//! Patch run results and errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One locale touched by a patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleChange {
    /// Update-set entries were merged; `keys` is the number of entries written.
    Updated { locale: String, keys: usize },
    /// The fix-table strings were written.
    Fixed { locale: String },
}

impl LocaleChange {
    #[must_use]
    pub fn locale(&self) -> &str {
        match self {
            Self::Updated { locale, .. } | Self::Fixed { locale } => locale,
        }
    }
}

impl fmt::Display for LocaleChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { locale, keys } => write!(f, "Updated {locale} with {keys} keys"),
            Self::Fixed { locale } => write!(f, "Fixed language count for {locale}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Merges first, then fixes, each in allow-list order.
    pub changes: Vec<LocaleChange>,
    /// Where the store was written; `None` until saved.
    pub saved_to: Option<PathBuf>,
}

impl PatchReport {
    /// Number of `key` writes across all changes.
    #[must_use]
    pub fn keys_written(&self, fixed_keys_per_locale: usize) -> usize {
        self.changes
            .iter()
            .map(|change| match change {
                LocaleChange::Updated { keys, .. } => *keys,
                LocaleChange::Fixed { .. } => fixed_keys_per_locale,
            })
            .sum()
    }
}

/// Console rendering: one line per change, then the saved path after a blank line.
impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for change in &self.changes {
            writeln!(f, "{change}")?;
        }
        if let Some(path) = &self.saved_to {
            writeln!(f, "\nSaved to {}", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::updated(LocaleChange::Updated { locale: "en".to_string(), keys: 2 }, "Updated en with 2 keys")]
    #[case::fixed(LocaleChange::Fixed { locale: "es".to_string() }, "Fixed language count for es")]
    fn test_locale_change_display(#[case] change: LocaleChange, #[case] expected: &str) {
        assert_eq!(change.to_string(), expected);
    }

    #[googletest::test]
    fn test_report_display() {
        let report = PatchReport {
            changes: vec![
                LocaleChange::Updated { locale: "fr".to_string(), keys: 1 },
                LocaleChange::Fixed { locale: "ja".to_string() },
            ],
            saved_to: Some(PathBuf::from("lang/translations.json")),
        };

        expect_that!(
            report.to_string(),
            eq("Updated fr with 1 keys\nFixed language count for ja\n\nSaved to lang/translations.json\n")
        );
        expect_that!(report.keys_written(2), eq(3));
    }

    #[googletest::test]
    fn test_unsaved_report_has_no_saved_line() {
        let report = PatchReport {
            changes: vec![LocaleChange::Fixed { locale: "hi".to_string() }],
            saved_to: None,
        };

        expect_that!(report.to_string(), not(contains_substring("Saved to")));
        expect_that!(report.changes.first().map(LocaleChange::locale), some(eq("hi")));
    }
}
