// SPDX-License-Identifier: MPL-2.0
//! Embedded Fluent catalog.
//!
//! The `.ftl` files under `assets/i18n/` are compiled into the binary and
//! parsed once, on first use, into one [`Translations`] per [`Language`].

use super::translations::Translations;
use crate::domain::locale::Language;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::fmt;
use std::sync::OnceLock;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Errors raised while building a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// No `<code>.ftl` file is embedded for the language.
    MissingResource(Language),

    /// The file is not valid Fluent syntax.
    Parse { language: Language, detail: String },

    /// A message id has no value in the file.
    MissingMessage { language: Language, id: String },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I18nError::MissingResource(lang) => {
                write!(f, "no translation file for {}", lang.code())
            }
            I18nError::Parse { language, detail } => {
                write!(f, "invalid translation file {}.ftl: {}", language.code(), detail)
            }
            I18nError::MissingMessage { language, id } => {
                write!(f, "{}.ftl has no message '{}'", language.code(), id)
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// A parsed bundle for one language.
pub(super) struct MessageSource<'a> {
    language: Language,
    bundle: &'a FluentBundle<FluentResource>,
}

impl MessageSource<'_> {
    /// Formats a message without arguments.
    pub(super) fn message(&self, id: &str) -> Result<String, I18nError> {
        let missing = || I18nError::MissingMessage {
            language: self.language,
            id: id.to_string(),
        };
        let pattern = self
            .bundle
            .get_message(id)
            .and_then(|msg| msg.value())
            .ok_or_else(missing)?;

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Ok(value.into_owned())
        } else {
            Err(missing())
        }
    }
}

/// Returns the BCP 47 identifier for a language.
#[must_use]
pub fn language_identifier(language: Language) -> LanguageIdentifier {
    // The closed set of codes are all valid primary subtags.
    language
        .code()
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

/// Parses the embedded file for `language` into a complete table.
pub fn load_translations(language: Language) -> Result<Translations, I18nError> {
    let file = Asset::get(&format!("{}.ftl", language.code()))
        .ok_or(I18nError::MissingResource(language))?;
    let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();

    let resource = FluentResource::try_new(source).map_err(|(_, errors)| I18nError::Parse {
        language,
        detail: format!("{errors:?}"),
    })?;

    let mut bundle = FluentBundle::new(vec![language_identifier(language)]);
    // Strings are drawn as plain text; bidi isolation marks would show up.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::Parse {
            language,
            detail: format!("{errors:?}"),
        })?;

    Translations::load(&MessageSource {
        language,
        bundle: &bundle,
    })
}

static CATALOG: OnceLock<[Translations; 3]> = OnceLock::new();

/// Returns the process-wide table for `language`.
///
/// # Panics
///
/// Panics on first use if an embedded file is incomplete. The build script
/// keeps the files in sync, so this only fires on a broken build.
#[must_use]
pub fn translations(language: Language) -> &'static Translations {
    let catalog = CATALOG.get_or_init(|| {
        Language::ALL.map(|lang| {
            load_translations(lang).expect("embedded translation files are complete")
        })
    });
    let index = Language::ALL
        .iter()
        .position(|lang| *lang == language)
        .unwrap_or(0);
    &catalog[index]
}
