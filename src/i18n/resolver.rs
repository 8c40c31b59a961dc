use crate::config::{self, Config};
use crate::i18n::catalog::Catalog;
use crate::i18n::value::TranslationValue;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Locale used when no persisted, explicit, or ambient preference matches a
/// supported locale.
pub const DEFAULT_LOCALE: &str = "en";

/// The i18n context: the locale catalog plus the session's active locale.
///
/// This is an explicit, injectable object rather than process-global state,
/// so independent instances (tests, concurrent server-side renders) never
/// contaminate each other. Exactly one locale is active per instance at any
/// time.
pub struct I18n {
    catalog: Catalog,
    current_locale: LanguageIdentifier,
    revision: u64,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Creates a context over the embedded locale catalog.
    ///
    /// The initial locale is picked by cascade: explicit override, then the
    /// persisted preference from `config`, then the ambient OS locale, then
    /// [`DEFAULT_LOCALE`]. Unsupported or corrupt values at any step fall
    /// through to the next; initialization cannot fail.
    pub fn new(explicit_lang: Option<String>, config: &Config) -> Self {
        Self::with_catalog(Catalog::load(), explicit_lang, config)
    }

    /// Creates a context over an explicit catalog (tests, custom table sets).
    pub fn with_catalog(catalog: Catalog, explicit_lang: Option<String>, config: &Config) -> Self {
        let current_locale = resolve_initial_locale(
            explicit_lang,
            config.language.as_deref(),
            sys_locale::get_locale(),
            &catalog,
        )
        .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());

        tracing::debug!(locale = %current_locale, "locale initialized");

        Self {
            catalog,
            current_locale,
            revision: 0,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Bumped on every effective locale change. Consumers that cache
    /// resolved strings compare revisions to know when to re-resolve.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        self.catalog.available_locales()
    }

    /// Switches the active locale.
    ///
    /// Returns `false` and leaves the state untouched if the locale is not
    /// in the catalog. Re-selecting the current locale succeeds without
    /// bumping the revision.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if !self.catalog.is_supported(&locale) {
            tracing::warn!(locale = %locale, "ignoring switch to unsupported locale");
            return false;
        }
        if locale != self.current_locale {
            tracing::debug!(from = %self.current_locale, to = %locale, "locale changed");
            self.current_locale = locale;
            self.revision += 1;
        }
        true
    }

    fn lookup(&self, key: &str) -> Option<&TranslationValue> {
        self.catalog.table(&self.current_locale)?.get_path(key)
    }

    /// Resolves a dot-delimited key path in the active locale's table.
    ///
    /// On success the stored value comes back as-is: a phrase, a list, or a
    /// nested table, whatever the call site expects. On any miss (empty or
    /// malformed path, absent segment, even an unsupported active locale)
    /// the key path itself comes back as a text value, so the UI always has
    /// something renderable and a missing translation shows up on the page
    /// as the literal key. Callers rely on this never being an error.
    pub fn resolve(&self, key: &str) -> TranslationValue {
        match self.lookup(key) {
            Some(value) => value.clone(),
            None => TranslationValue::Text(key.to_string()),
        }
    }

    /// Resolves a phrase leaf, falling back to the key for anything that is
    /// missing or not plain text.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key)
            .and_then(TranslationValue::as_text)
            .map_or_else(|| key.to_string(), str::to_string)
    }

    /// Resolves a list of phrases. Non-text elements are dropped; a missing
    /// or non-list value yields an empty vector.
    pub fn tr_list(&self, key: &str) -> Vec<String> {
        self.lookup(key)
            .and_then(TranslationValue::as_list)
            .map(|items| {
                items
                    .iter()
                    .filter_map(TranslationValue::as_text)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Applies a user-initiated locale change and persists it for future
/// sessions.
///
/// The in-memory state is written first; persistence happens after, so
/// consumers re-resolving once this returns already see the new locale even
/// if the disk write failed. A failed write is logged and swallowed; it
/// never propagates to the UI.
///
/// `config_path` overrides the preference file location (tests, portable
/// deployments); `None` uses the platform config directory.
pub fn apply_locale_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    config_path: Option<&Path>,
) -> bool {
    if !i18n.set_locale(locale.clone()) {
        return false;
    }

    let mut cfg = match config_path {
        Some(path) => config::load_from_path(path).unwrap_or_default(),
        None => config::load().unwrap_or_default(),
    };
    cfg.language = Some(locale.to_string());

    let saved = match config_path {
        Some(path) => config::save_to_path(&cfg, path),
        None => config::save(&cfg),
    };
    if let Err(error) = saved {
        tracing::warn!(%error, "failed to persist locale preference");
    }
    true
}

fn resolve_initial_locale(
    explicit: Option<String>,
    persisted: Option<&str>,
    ambient: Option<String>,
    catalog: &Catalog,
) -> Option<LanguageIdentifier> {
    // 1. Explicit override from the caller (e.g. --lang)
    if let Some(tag) = explicit {
        if let Some(locale) = catalog.match_tag(&tag) {
            return Some(locale);
        }
    }

    // 2. Persisted preference from a previous session
    if let Some(tag) = persisted {
        if let Some(locale) = catalog.match_tag(tag) {
            return Some(locale);
        }
    }

    // 3. Ambient OS/browser locale, matched by language subtag
    if let Some(tag) = ambient {
        if let Some(locale) = catalog.match_tag(&tag) {
            return Some(locale);
        }
    }

    None
}
