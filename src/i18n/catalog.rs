use crate::error::CatalogError;
use crate::i18n::value::TranslationValue;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// All translation tables, one per supported locale.
///
/// Tables are loaded in full before the resolver becomes available and are
/// immutable afterwards. The supported locale set is whatever the data
/// directory provides: adding a language means adding one JSON file, with
/// no code change.
pub struct Catalog {
    tables: HashMap<LanguageIdentifier, TranslationValue>,
    available_locales: Vec<LanguageIdentifier>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}

impl Catalog {
    /// Builds the catalog from the locale files embedded in the binary.
    ///
    /// A file that is not UTF-8, not valid JSON, not an object at the root,
    /// or whose stem is not a language identifier is skipped with a warning.
    /// Other locales are unaffected; construction itself never fails.
    pub fn load() -> Self {
        let mut entries = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".json") else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match parse_locale_file(locale_str, content.data.as_ref()) {
                Ok((locale, table)) => entries.push((locale, table)),
                Err(error) => {
                    tracing::warn!(file = filename, %error, "skipping locale file");
                }
            }
        }

        Self::with_tables(entries)
    }

    /// Builds a catalog from explicit tables.
    ///
    /// Used by tests and by hosts that supply their own table set instead
    /// of the embedded one (e.g. rendering with a trimmed-down catalog).
    pub fn with_tables(entries: Vec<(LanguageIdentifier, TranslationValue)>) -> Self {
        let mut tables = HashMap::new();
        let mut available_locales = Vec::new();

        for (locale, table) in entries {
            if tables.insert(locale.clone(), table).is_none() {
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        Self {
            tables,
            available_locales,
        }
    }

    pub fn table(&self, locale: &LanguageIdentifier) -> Option<&TranslationValue> {
        self.tables.get(locale)
    }

    /// Supported locales, sorted by tag.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn is_supported(&self, locale: &LanguageIdentifier) -> bool {
        self.tables.contains_key(locale)
    }

    /// Matches a language-tag-like string against the supported locales.
    ///
    /// Tries an exact match first, then falls back to comparing language
    /// subtags so that an ambient "fr-FR" selects a registered "fr". The
    /// tag only needs its leading language component to line up.
    pub fn match_tag(&self, tag: &str) -> Option<LanguageIdentifier> {
        let parsed: LanguageIdentifier = tag.parse().ok()?;
        if self.is_supported(&parsed) {
            return Some(parsed);
        }
        self.available_locales
            .iter()
            .find(|candidate| candidate.language == parsed.language)
            .cloned()
    }
}

fn parse_locale_file(
    locale_str: &str,
    raw: &[u8],
) -> Result<(LanguageIdentifier, TranslationValue), CatalogError> {
    let locale: LanguageIdentifier = locale_str
        .parse()
        .map_err(|_| CatalogError::InvalidLocaleTag(locale_str.to_string()))?;
    let text = std::str::from_utf8(raw)
        .map_err(|_| CatalogError::InvalidEncoding(locale_str.to_string()))?;
    let table: TranslationValue = serde_json::from_str(text)
        .map_err(|_| CatalogError::MalformedTable(locale_str.to_string()))?;
    if table.as_table().is_none() {
        return Err(CatalogError::NonTableRoot(locale_str.to_string()));
    }
    Ok((locale, table))
}
