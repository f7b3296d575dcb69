//! Translation store model
//!
//! A store maps locale codes to flat `key -> text` tables. Locale and key order
//! follow the file the store was read from; inserted keys are appended.

mod error;
mod io;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

pub use error::StoreError;
pub use io::{
    load_store,
    load_updates,
    save_store,
    to_json,
};

/// Flat `key -> text` table of one locale.
pub type LocaleTable = IndexMap<String, String>;

/// Full set of localized text, keyed by locale code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TranslationStore {
    locales: IndexMap<String, LocaleTable>,
}

impl TranslationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale codes in file order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    #[must_use]
    pub fn locale(&self, code: &str) -> Option<&LocaleTable> {
        self.locales.get(code)
    }

    pub fn locale_mut(&mut self, code: &str) -> Option<&mut LocaleTable> {
        self.locales.get_mut(code)
    }

    #[must_use]
    pub fn contains_locale(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Adds or replaces a whole locale table.
    pub fn insert_locale(&mut self, code: impl Into<String>, table: LocaleTable) {
        self.locales.insert(code.into(), table);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Looks up `key` the way the web front end does.
    ///
    /// Tries `locale`, then `fallback_locale`, and finally returns the key
    /// itself. Empty values count as missing.
    #[must_use]
    pub fn translate<'a>(&'a self, locale: &str, key: &'a str, fallback_locale: &str) -> &'a str {
        [locale, fallback_locale]
            .into_iter()
            .filter_map(|code| self.locale(code)?.get(key))
            .find(|value| !value.is_empty())
            .map_or(key, String::as_str)
    }
}

impl FromIterator<(String, LocaleTable)> for TranslationStore {
    fn from_iter<I: IntoIterator<Item = (String, LocaleTable)>>(iter: I) -> Self {
        Self { locales: iter.into_iter().collect() }
    }
}

/// Corrections and additions per locale, consumed by a single patch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UpdateSet {
    locales: IndexMap<String, LocaleTable>,
}

impl UpdateSet {
    #[must_use]
    pub fn locale(&self, code: &str) -> Option<&LocaleTable> {
        self.locales.get(code)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }
}

impl FromIterator<(String, LocaleTable)> for UpdateSet {
    fn from_iter<I: IntoIterator<Item = (String, LocaleTable)>>(iter: I) -> Self {
        Self { locales: iter.into_iter().collect() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_utils::store_from;

    #[rstest]
    fn test_deserialize_preserves_file_order() {
        let store: TranslationStore =
            serde_json::from_str(r#"{"fr": {"z": "Z", "a": "A"}, "en": {"b": "B"}}"#).unwrap();

        let locales: Vec<&str> = store.locales().collect();
        let fr_keys: Vec<&str> = store.locale("fr").unwrap().keys().map(String::as_str).collect();

        assert_eq!(locales, vec!["fr", "en"]);
        assert_eq!(fr_keys, vec!["z", "a"]);
    }

    #[googletest::test]
    fn test_deserialize_rejects_non_string_values() {
        let result = serde_json::from_value::<TranslationStore>(json!({"en": {"count": 3}}));

        expect_that!(result, err(anything()));
    }

    #[googletest::test]
    fn test_deserialize_rejects_nested_objects() {
        let result =
            serde_json::from_value::<TranslationStore>(json!({"en": {"faq": {"q1": "Why?"}}}));

        expect_that!(result, err(anything()));
    }

    #[rstest]
    #[case::current_locale("fr", "title", "Bonjour")]
    #[case::falls_back_when_missing("fr", "only_en", "English only")]
    #[case::falls_back_when_empty("fr", "blank", "Not blank")]
    #[case::unknown_locale("xx", "title", "Hello")]
    #[case::returns_key("fr", "nowhere", "nowhere")]
    fn test_translate(#[case] locale: &str, #[case] key: &str, #[case] expected: &str) {
        let store = store_from(json!({
            "en": {"title": "Hello", "only_en": "English only", "blank": "Not blank"},
            "fr": {"title": "Bonjour", "blank": ""}
        }));

        assert_eq!(store.translate(locale, key, "en"), expected);
    }

    #[googletest::test]
    fn test_insert_locale_appends() {
        let mut store = store_from(json!({"en": {"a": "A"}}));

        store.insert_locale("de", LocaleTable::from([("a".to_string(), "Ä".to_string())]));

        expect_that!(store.len(), eq(2));
        expect_that!(store.contains_locale("de"), eq(true));
        expect_that!(store.locales().last(), some(eq("de")));
    }
}
