// SPDX-License-Identifier: MPL-2.0
//! Active language state.
//!
//! [`LocaleResolver`] owns the session's language and its durable copy. It
//! is built once at startup and handed to whoever needs it; views only ever
//! see the resulting [`Translations`].

use super::fluent::{language_identifier, translations};
use super::translations::Translations;
use super::LANGUAGE_STORAGE_KEY;
use crate::application::port::{KeyValueStorage, LanguagePreference};
use crate::domain::locale::Language;
use unic_langid::LanguageIdentifier;

/// Where the active language came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    CommandLine,
    Stored,
    System,
    Default,
}

pub struct LocaleResolver {
    language: Language,
    source: LocaleSource,
    document_language: LanguageIdentifier,
    storage: Box<dyn KeyValueStorage>,
}

impl std::fmt::Debug for LocaleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleResolver")
            .field("language", &self.language)
            .field("source", &self.source)
            .field("document_language", &self.document_language)
            .finish_non_exhaustive()
    }
}

impl LocaleResolver {
    /// Resolves the startup language.
    ///
    /// Order: `cli_override` (a session-only choice, never persisted), the
    /// stored code, the primary subtag of the system preference, then
    /// [`Language::DEFAULT`]. Unsupported values at any step are skipped.
    pub fn init(
        storage: Box<dyn KeyValueStorage>,
        preference: &dyn LanguagePreference,
        cli_override: Option<&str>,
    ) -> Self {
        let (language, source) = resolve(storage.as_ref(), preference, cli_override);
        tracing::debug!(language = language.code(), ?source, "resolved display language");

        Self {
            language,
            source,
            document_language: language_identifier(language),
            storage,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn source(&self) -> LocaleSource {
        self.source
    }

    /// The active language together with its table.
    #[must_use]
    pub fn active(&self) -> (Language, &'static Translations) {
        (self.language, translations(self.language))
    }

    #[must_use]
    pub fn translations(&self) -> &'static Translations {
        translations(self.language)
    }

    /// Language tag of the rendered document.
    #[must_use]
    pub fn document_language(&self) -> &LanguageIdentifier {
        &self.document_language
    }

    /// Switches the active language and persists it.
    ///
    /// The write is skipped only when storage already holds `language`, so
    /// explicitly picking a language that came from `--lang` still persists
    /// it. A failed storage write is logged; the in-memory switch still
    /// happens.
    pub fn set_locale(&mut self, language: Language) {
        if language != self.language {
            self.language = language;
            self.document_language = language_identifier(language);
        }

        if self.storage.get(LANGUAGE_STORAGE_KEY).as_deref() == Some(language.code()) {
            return;
        }

        if let Err(err) = self.storage.set(LANGUAGE_STORAGE_KEY, language.code()) {
            tracing::warn!(language = language.code(), error = %err, "failed to persist language");
        }
    }

    /// Like [`set_locale`](Self::set_locale) for a raw code. Unknown codes
    /// are ignored.
    pub fn set_locale_code(&mut self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set_locale(language),
            None => tracing::debug!(code, "ignoring unsupported language code"),
        }
    }
}

fn resolve(
    storage: &dyn KeyValueStorage,
    preference: &dyn LanguagePreference,
    cli_override: Option<&str>,
) -> (Language, LocaleSource) {
    if let Some(lang) = cli_override.and_then(Language::from_primary_subtag) {
        return (lang, LocaleSource::CommandLine);
    }

    if let Some(lang) = storage
        .get(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
    {
        return (lang, LocaleSource::Stored);
    }

    if let Some(lang) = preference
        .preferred_language()
        .and_then(|tag| primary_language(&tag))
    {
        return (lang, LocaleSource::System);
    }

    (Language::DEFAULT, LocaleSource::Default)
}

/// Supported language matching the primary subtag of a locale tag.
fn primary_language(tag: &str) -> Option<Language> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(id) => Language::from_code(id.language.as_str()),
        // POSIX forms like `de_AT.UTF-8` are not BCP 47.
        Err(_) => Language::from_primary_subtag(tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FixedLanguage;
    use crate::error::{Error, Result};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Storage whose contents outlive the resolver, to simulate a reload.
    #[derive(Clone, Default)]
    struct SharedStorage(Rc<RefCell<HashMap<String, String>>>);

    impl KeyValueStorage for SharedStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Counts writes that reach the wrapped storage.
    struct CountingStorage {
        inner: SharedStorage,
        writes: Rc<Cell<usize>>,
    }

    impl KeyValueStorage for CountingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.writes.set(self.writes.get() + 1);
            self.inner.set(key, value)
        }
    }

    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("read-only".to_string()))
        }
    }

    fn stored(code: &str) -> SharedStorage {
        let mut storage = SharedStorage::default();
        storage.set(LANGUAGE_STORAGE_KEY, code).unwrap();
        storage
    }

    #[test]
    fn system_japanese_resolves_to_ja() {
        let resolver = LocaleResolver::init(
            Box::new(SharedStorage::default()),
            &FixedLanguage::new("ja-JP"),
            None,
        );

        assert_eq!(resolver.language(), Language::Ja);
        assert_eq!(resolver.source(), LocaleSource::System);
        assert_eq!(resolver.translations().nav.home, "ホーム");
    }

    #[test]
    fn stored_language_wins_over_system() {
        let resolver =
            LocaleResolver::init(Box::new(stored("de")), &FixedLanguage::new("ja-JP"), None);
        assert_eq!(resolver.language(), Language::De);
        assert_eq!(resolver.source(), LocaleSource::Stored);
    }

    #[test]
    fn unsupported_stored_value_falls_back_to_system() {
        let resolver =
            LocaleResolver::init(Box::new(stored("fr")), &FixedLanguage::new("de-CH"), None);
        assert_eq!(resolver.language(), Language::De);
    }

    #[test]
    fn unsupported_everything_falls_back_to_default() {
        let resolver =
            LocaleResolver::init(Box::new(stored("fr")), &FixedLanguage::new("pt-BR"), None);
        assert_eq!(resolver.language(), Language::DEFAULT);
        assert_eq!(resolver.source(), LocaleSource::Default);
    }

    #[test]
    fn no_preference_uses_default() {
        let resolver =
            LocaleResolver::init(Box::new(SharedStorage::default()), &FixedLanguage::none(), None);
        assert_eq!(resolver.language(), Language::En);
    }

    #[test]
    fn posix_locale_is_understood() {
        let resolver = LocaleResolver::init(
            Box::new(SharedStorage::default()),
            &FixedLanguage::new("de_AT.UTF-8"),
            None,
        );
        assert_eq!(resolver.language(), Language::De);
    }

    #[test]
    fn cli_override_wins_and_is_not_persisted() {
        let storage = stored("de");
        let resolver =
            LocaleResolver::init(Box::new(storage.clone()), &FixedLanguage::none(), Some("ja"));

        assert_eq!(resolver.language(), Language::Ja);
        assert_eq!(resolver.source(), LocaleSource::CommandLine);
        assert_eq!(storage.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("de"));
    }

    #[test]
    fn set_locale_survives_reload() {
        let storage = SharedStorage::default();
        let mut resolver =
            LocaleResolver::init(Box::new(storage.clone()), &FixedLanguage::new("en-US"), None);

        resolver.set_locale(Language::Ja);
        assert_eq!(resolver.document_language().to_string(), "ja");

        let reloaded =
            LocaleResolver::init(Box::new(storage), &FixedLanguage::new("en-US"), None);
        assert_eq!(reloaded.language(), Language::Ja);
    }

    #[test]
    fn set_locale_to_stored_value_does_not_write() {
        let writes = Rc::new(Cell::new(0));
        let storage = CountingStorage {
            inner: stored("de"),
            writes: Rc::clone(&writes),
        };
        let mut resolver = LocaleResolver::init(Box::new(storage), &FixedLanguage::none(), None);

        resolver.set_locale(Language::De);

        assert_eq!(writes.get(), 0);
    }

    #[test]
    fn explicit_pick_of_command_line_language_is_persisted() {
        let storage = stored("de");
        let mut resolver =
            LocaleResolver::init(Box::new(storage.clone()), &FixedLanguage::none(), Some("ja"));

        resolver.set_locale(Language::Ja);

        assert_eq!(resolver.language(), Language::Ja);
        assert_eq!(storage.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("ja"));

        let reloaded = LocaleResolver::init(Box::new(storage), &FixedLanguage::none(), None);
        assert_eq!(reloaded.language(), Language::Ja);
    }

    #[test]
    fn picking_default_language_persists_it() {
        let storage = SharedStorage::default();
        let mut resolver =
            LocaleResolver::init(Box::new(storage.clone()), &FixedLanguage::new("de-DE"), None);
        resolver.set_locale(Language::En);
        resolver.set_locale(Language::En);

        assert_eq!(storage.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn unknown_code_is_ignored() {
        let storage = SharedStorage::default();
        let mut resolver =
            LocaleResolver::init(Box::new(storage.clone()), &FixedLanguage::none(), None);

        resolver.set_locale_code("fr");

        assert_eq!(resolver.language(), Language::En);
        assert_eq!(storage.get(LANGUAGE_STORAGE_KEY), None);
    }

    #[test]
    fn storage_failure_still_switches_language() {
        let mut resolver =
            LocaleResolver::init(Box::new(FailingStorage), &FixedLanguage::none(), None);

        resolver.set_locale(Language::De);

        assert_eq!(resolver.language(), Language::De);
        assert_eq!(resolver.active().1.nav.home, "Startseite");
    }
}
