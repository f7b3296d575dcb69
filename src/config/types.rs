use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fixLocales[2]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Everything a patch run needs, passed explicitly into the patcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatchSettings {
    /// Translation store, rewritten in place. Relative to the working directory.
    pub translations_path: PathBuf,
    /// Update set merged into `merge_locales`.
    pub updates_path: PathBuf,

    /// Fully maintained locales that receive the update set.
    pub merge_locales: Vec<String>,
    /// Locales that only get the fix table applied.
    pub fix_locales: Vec<String>,
    pub fix_table: FixTable,

    /// Locale every other locale falls back to and is audited against.
    pub reference_locale: String,
    /// Locales the consuming application offers in its selector.
    pub supported_locales: Vec<String>,
}

/// Literal replacements for two known-bad keys, per locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixTable {
    pub label_key: String,
    pub description_key: String,
    pub entries: IndexMap<String, FixEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixEntry {
    pub label: String,
    pub description: String,
}

impl FixEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self { label: label.into(), description: description.into() }
    }
}

impl FixTable {
    /// Replacement strings for `locale`, if it has an entry.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&FixEntry> {
        self.entries.get(locale)
    }
}

/// `(locale, label, description)` rows of the built-in fix table.
const DEFAULT_FIXES: &[(&str, &str, &str)] = &[
    (
        "es",
        "15 idiomas",
        "Soporte completo para inglés, francés, español, alemán, italiano, holandés, portugués, ruso, ucraniano, polaco, japonés, chino, coreano, árabe e hindi.",
    ),
    (
        "de",
        "15 Sprachen",
        "Volle Unterstützung für Englisch, Französisch, Spanisch, Deutsch, Italienisch, Niederländisch, Portugiesisch, Russisch, Ukrainisch, Polnisch, Japanisch, Chinesisch, Koreanisch, Arabisch und Hindi.",
    ),
    (
        "it",
        "15 lingue",
        "Supporto completo per inglese, francese, spagnolo, tedesco, italiano, olandese, portoghese, russo, ucraino, polacco, giapponese, cinese, coreano, arabo e hindi.",
    ),
    (
        "nl",
        "15 talen",
        "Volledige ondersteuning voor Engels, Frans, Spaans, Duits, Italiaans, Nederlands, Portugees, Russisch, Oekraïens, Pools, Japans, Chinees, Koreaans, Arabisch en Hindi.",
    ),
    (
        "pt",
        "15 idiomas",
        "Suporte completo para inglês, francês, espanhol, alemão, italiano, holandês, português, russo, ucraniano, polonês, japonês, chinês, coreano, árabe e hindi.",
    ),
    (
        "ru",
        "15 языков",
        "Полная поддержка английского, французского, испанского, немецкого, итальянского, нидерландского, португальского, русского, украинского, польского, японского, китайского, корейского, арабского и хинди.",
    ),
    (
        "uk",
        "15 мов",
        "Повна підтримка англійської, французької, іспанської, німецької, італійської, нідерландської, португальської, російської, української, польської, японської, китайської, корейської, арабської та гінді.",
    ),
    (
        "pl",
        "15 języków",
        "Pełne wsparcie dla angielskiego, francuskiego, hiszpańskiego, niemieckiego, włoskiego, niderlandzkiego, portugalskiego, rosyjskiego, ukraińskiego, polskiego, japońskiego, chińskiego, koreańskiego, arabskiego i hindi.",
    ),
    (
        "ja",
        "15言語",
        "英語、フランス語、スペイン語、ドイツ語、イタリア語、オランダ語、ポルトガル語、ロシア語、ウクライナ語、ポーランド語、日本語、中国語、韓国語、アラビア語、ヒンディー語に完全対応。",
    ),
    (
        "zh",
        "15种语言",
        "全面支持英语、法语、西班牙语、德语、意大利语、荷兰语、葡萄牙语、俄语、乌克兰语、波兰语、日语、中文、韩语、阿拉伯语和印地语。",
    ),
    (
        "ko",
        "15개 언어",
        "영어, 프랑스어, 스페인어, 독일어, 이탈리아어, 네덜란드어, 포르투갈어, 러시아어, 우크라이나어, 폴란드어, 일본어, 중국어, 한국어, 아랍어, 힌디어 완벽 지원.",
    ),
    (
        "ar",
        "15 لغة",
        "دعم كامل للإنجليزية والفرنسية والإسبانية والألمانية والإيطالية والهولندية والبرتغالية والروسية والأوكرانية والبولندية واليابانية والصينية والكورية والعربية والهندية.",
    ),
    (
        "hi",
        "15 भाषाएं",
        "अंग्रेज़ी, फ़्रेंच, स्पेनिश, जर्मन, इतालवी, डच, पुर्तगाली, रूसी, यूक्रेनी, पोलिश, जापानी, चीनी, कोरियाई, अरबी और हिंदी के लिए पूर्ण समर्थन।",
    ),
];

const DEFAULT_MERGE_LOCALES: &[&str] = &["en", "fr"];

const DEFAULT_SUPPORTED_LOCALES: &[&str] =
    &["en", "fr", "es", "de", "it", "nl", "pt", "ru", "uk", "pl", "ja", "zh", "ko", "ar", "hi"];

fn owned(codes: &[&str]) -> Vec<String> {
    codes.iter().map(ToString::to_string).collect()
}

impl Default for FixTable {
    fn default() -> Self {
        Self {
            label_key: "languages".to_string(),
            description_key: "languages_desc".to_string(),
            entries: DEFAULT_FIXES
                .iter()
                .map(|(locale, label, description)| {
                    ((*locale).to_string(), FixEntry::new(*label, *description))
                })
                .collect(),
        }
    }
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            translations_path: PathBuf::from("lang/translations.json"),
            updates_path: PathBuf::from("faq_updates.json"),
            merge_locales: owned(DEFAULT_MERGE_LOCALES),
            fix_locales: DEFAULT_FIXES.iter().map(|(locale, _, _)| (*locale).to_string()).collect(),
            fix_table: FixTable::default(),
            reference_locale: "en".to_string(),
            supported_locales: owned(DEFAULT_SUPPORTED_LOCALES),
        }
    }
}

impl PatchSettings {
    /// # Errors
    /// - Empty path, locale code or fix key
    /// - Locale listed for both merging and fixing
    /// - Fix keys that collide
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.translations_path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "translationsPath",
                "The path cannot be empty. Example: \"lang/translations.json\"",
            ));
        }

        if self.updates_path.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "updatesPath",
                "The path cannot be empty. Example: \"faq_updates.json\"",
            ));
        }

        if self.merge_locales.is_empty() {
            errors.push(ValidationError::new(
                "mergeLocales",
                "At least one locale is required. Example: [\"en\", \"fr\"]",
            ));
        }

        push_empty_codes(&mut errors, "mergeLocales", &self.merge_locales);
        push_empty_codes(&mut errors, "fixLocales", &self.fix_locales);
        push_empty_codes(&mut errors, "supportedLocales", &self.supported_locales);

        let merge: HashSet<&str> = self.merge_locales.iter().map(String::as_str).collect();
        for (index, locale) in self.fix_locales.iter().enumerate() {
            if !locale.is_empty() && merge.contains(locale.as_str()) {
                errors.push(ValidationError::new(
                    format!("fixLocales[{index}]"),
                    format!("Locale '{locale}' is already listed in 'mergeLocales'. Use only one"),
                ));
            }
        }

        if self.fix_table.label_key.is_empty() {
            errors.push(ValidationError::new("fixTable.labelKey", "The key cannot be empty"));
        }
        if self.fix_table.description_key.is_empty() {
            errors.push(ValidationError::new("fixTable.descriptionKey", "The key cannot be empty"));
        } else if self.fix_table.description_key == self.fix_table.label_key {
            errors.push(ValidationError::new(
                "fixTable.descriptionKey",
                format!(
                    "Must differ from 'labelKey' ('{}'), otherwise the label is overwritten",
                    self.fix_table.label_key
                ),
            ));
        }

        if self.reference_locale.is_empty() {
            errors.push(ValidationError::new(
                "referenceLocale",
                "The locale cannot be empty. Example: \"en\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn push_empty_codes(errors: &mut Vec<ValidationError>, field: &str, codes: &[String]) {
    for (index, code) in codes.iter().enumerate() {
        if code.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                "The locale code cannot be empty",
            ));
        }
    }
}
