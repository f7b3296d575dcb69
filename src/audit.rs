//! 翻訳ストアの整合性チェック
//!
//! パッチ適用後のストアを基準ロケールと比較し、欠けているキーや
//! サポート対象なのにストアに存在しないロケールを報告する。
//! ストアは変更しない。

use crate::config::PatchSettings;
use crate::store::TranslationStore;

/// 基準ロケールにあって、あるロケールに無いキーの一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub locale: String,
    /// 基準ロケールでの出現順
    pub keys: Vec<String>,
}

/// チェック結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub reference_locale: String,
    pub missing_keys: Vec<MissingTranslation>,
    pub missing_locales: Vec<String>,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty() && self.missing_locales.is_empty()
    }
}

/// 基準ロケールのキーが欠けているロケールを探す
///
/// 基準ロケールがストアに無い場合は空を返す。値が空文字のキーも欠けているとみなす。
#[must_use]
pub fn missing_keys(store: &TranslationStore, reference_locale: &str) -> Vec<MissingTranslation> {
    let Some(reference) = store.locale(reference_locale) else {
        tracing::debug!(reference_locale, "Reference locale not in store, skipping key audit");
        return Vec::new();
    };

    store
        .locales()
        .filter(|locale| *locale != reference_locale)
        .filter_map(|locale| {
            let table = store.locale(locale)?;
            let keys: Vec<String> = reference
                .keys()
                .filter(|key| table.get(*key).is_none_or(String::is_empty))
                .cloned()
                .collect();

            (!keys.is_empty()).then(|| MissingTranslation { locale: locale.to_string(), keys })
        })
        .collect()
}

/// サポート対象なのにストアに存在しないロケールを探す
#[must_use]
pub fn missing_locales(store: &TranslationStore, supported_locales: &[String]) -> Vec<String> {
    supported_locales.iter().filter(|locale| !store.contains_locale(locale)).cloned().collect()
}

/// 設定に従ってストア全体をチェックする
#[must_use]
pub fn audit(store: &TranslationStore, settings: &PatchSettings) -> AuditReport {
    AuditReport {
        reference_locale: settings.reference_locale.clone(),
        missing_keys: missing_keys(store, &settings.reference_locale),
        missing_locales: missing_locales(store, &settings.supported_locales),
    }
}

/// チェック結果を警告としてログに出力する
pub fn log_findings(report: &AuditReport) {
    for locale in &report.missing_locales {
        tracing::warn!(locale = %locale, "Supported locale is missing from the translation store");
    }

    for missing in &report.missing_keys {
        tracing::warn!(
            locale = %missing.locale,
            reference_locale = %report.reference_locale,
            missing = missing.keys.len(),
            "Locale lacks keys present in the reference locale"
        );
        tracing::debug!(locale = %missing.locale, keys = ?missing.keys, "Missing keys");
    }

    if report.is_clean() {
        tracing::debug!("Translation store audit found no gaps");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::store_from;

    #[googletest::test]
    fn test_missing_keys_in_reference_order() {
        let store = store_from(json!({
            "en": {"title": "Hello", "faq_q1": "Why?", "faq_q2": "How?"},
            "fr": {"title": "Bonjour", "faq_q1": "Pourquoi ?", "faq_q2": "Comment ?"},
            "de": {"title": "Hallo"}
        }));

        let missing = missing_keys(&store, "en");

        expect_that!(
            missing,
            elements_are![all![
                field!(MissingTranslation.locale, eq("de")),
                field!(MissingTranslation.keys, elements_are![eq("faq_q1"), eq("faq_q2")])
            ]]
        );
    }

    #[googletest::test]
    fn test_empty_values_count_as_missing() {
        let store = store_from(json!({"en": {"a": "A", "b": "B"}, "it": {"a": "", "b": "Bi"}}));

        let missing = missing_keys(&store, "en");

        expect_that!(
            missing,
            elements_are![field!(MissingTranslation.keys, elements_are![eq("a")])]
        );
    }

    #[googletest::test]
    fn test_missing_keys_without_reference_locale() {
        let store = store_from(json!({"fr": {"a": "A"}}));

        expect_that!(missing_keys(&store, "en"), is_empty());
    }

    #[googletest::test]
    fn test_extra_keys_are_not_reported() {
        let store = store_from(json!({"en": {"a": "A"}, "nl": {"a": "A", "extra": "E"}}));

        expect_that!(missing_keys(&store, "en"), is_empty());
    }

    #[googletest::test]
    fn test_missing_locales() {
        let store = store_from(json!({"en": {}, "fr": {}}));
        let supported = vec!["en".to_string(), "fr".to_string(), "hi".to_string()];

        expect_that!(missing_locales(&store, &supported), elements_are![eq("hi")]);
    }

    #[googletest::test]
    fn test_audit_with_default_settings() {
        let settings = PatchSettings::default();
        let mut json = serde_json::Map::new();
        for locale in &settings.supported_locales {
            json.insert(locale.clone(), json!({"languages": "15"}));
        }
        let store = store_from(serde_json::Value::Object(json));

        let report = audit(&store, &settings);

        expect_that!(report.is_clean(), eq(true));
        expect_that!(report.reference_locale, eq("en"));
    }
}
