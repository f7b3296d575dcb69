//! Translation patcher
//!
//! Merges the update set into the fully maintained locales and rewrites the
//! fix-table keys of the remaining ones. Locales missing from the store are
//! skipped; no key is ever removed.

mod types;

use std::path::PathBuf;

pub use types::{
    LocaleChange,
    PatchError,
    PatchReport,
};

use crate::audit;
use crate::config::{
    ConfigManager,
    FixTable,
    PatchSettings,
};
use crate::store::{
    self,
    TranslationStore,
    UpdateSet,
};

/// Number of keys the fix table writes per locale.
pub const FIXED_KEYS_PER_LOCALE: usize = 2;

/// Applies the update set, then the fix table, to `store` in memory.
///
/// Running it again with the same inputs leaves the store unchanged.
pub fn patch(
    store: &mut TranslationStore,
    updates: &UpdateSet,
    settings: &PatchSettings,
) -> PatchReport {
    let mut changes = apply_updates(store, updates, &settings.merge_locales);
    changes.extend(apply_fixes(store, &settings.fix_table, &settings.fix_locales));

    PatchReport { changes, saved_to: None }
}

/// Merges update-set entries into each of `locales` present in both inputs.
///
/// Existing keys are overwritten, new keys are appended. The reported count
/// is the number of entries the update set holds for the locale.
pub fn apply_updates(
    store: &mut TranslationStore,
    updates: &UpdateSet,
    locales: &[String],
) -> Vec<LocaleChange> {
    let mut changes = Vec::new();

    for locale in locales {
        let (Some(table), Some(entries)) = (store.locale_mut(locale), updates.locale(locale))
        else {
            tracing::debug!(locale = %locale, "Skipping merge, locale missing from store or updates");
            continue;
        };

        for (key, value) in entries {
            table.insert(key.clone(), value.clone());
        }

        tracing::debug!(locale = %locale, keys = entries.len(), "Merged updates");
        changes.push(LocaleChange::Updated { locale: locale.clone(), keys: entries.len() });
    }

    for ignored in updates.locales().filter(|code| !locales.iter().any(|l| l == *code)) {
        tracing::debug!(locale = %ignored, "Update set locale is not in the merge list, ignored");
    }

    changes
}

/// Overwrites the two fix-table keys for each of `locales` present in both
/// the store and the table, whatever their previous values.
pub fn apply_fixes(
    store: &mut TranslationStore,
    fix_table: &FixTable,
    locales: &[String],
) -> Vec<LocaleChange> {
    let mut changes = Vec::new();

    for locale in locales {
        let (Some(table), Some(fix)) = (store.locale_mut(locale), fix_table.get(locale)) else {
            tracing::debug!(locale = %locale, "Skipping fix, locale missing from store or fix table");
            continue;
        };

        table.insert(fix_table.label_key.clone(), fix.label.clone());
        table.insert(fix_table.description_key.clone(), fix.description.clone());

        tracing::debug!(locale = %locale, "Applied fix table");
        changes.push(LocaleChange::Fixed { locale: locale.clone() });
    }

    changes
}

/// Runs a full patch: load both files, patch, write the store back.
///
/// Both files are read and parsed before anything is written, so a bad input
/// leaves the store file untouched. Audit findings are logged after the save.
///
/// # Errors
/// - Either file is missing, unreadable or not valid `locale -> key -> text` JSON
/// - The store cannot be written back
pub fn run(config: &ConfigManager) -> Result<PatchReport, PatchError> {
    let settings = config.get_settings();
    let translations_path = config.resolve(&settings.translations_path);
    let updates_path = config.resolve(&settings.updates_path);

    let mut store = store::load_store(&translations_path)?;
    let updates = store::load_updates(&updates_path, &settings.merge_locales)?;

    let mut report = patch(&mut store, &updates, settings);

    store::save_store(&store, &translations_path)?;
    report.saved_to = Some(translations_path);

    tracing::info!(
        locales = report.changes.len(),
        keys = report.keys_written(FIXED_KEYS_PER_LOCALE),
        "Patched translation store"
    );

    audit::log_findings(&audit::audit(&store, settings));

    Ok(report)
}

/// Loads and validates the settings of `workspace_root`, then [`run`]s.
///
/// # Errors
/// - The workspace config file is unreadable, malformed or invalid
/// - Any error of [`run`]
pub fn run_workspace(workspace_root: PathBuf) -> Result<PatchReport, PatchError> {
    let mut config = ConfigManager::new();
    config.load_settings(Some(workspace_root))?;

    run(&config)
}
