// SPDX-License-Identifier: MPL-2.0
//! Supported display languages.
//!
//! The set is closed: every variant has a complete translation table in
//! `assets/i18n/<code>.ftl`, and nothing else can become the active locale.

use std::fmt;
use std::str::FromStr;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// German.
    De,
    /// Japanese.
    Ja,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::Ja];

    /// Language used when neither the stored preference nor the system
    /// language resolves to a supported code.
    pub const DEFAULT: Language = Language::En;

    /// Returns the language code (`"en"`, `"de"`, `"ja"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Ja => "ja",
        }
    }

    /// Returns the language name written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
            Language::Ja => "日本語",
        }
    }

    /// Returns the flag shown next to the language name.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::De => "🇩🇪",
            Language::Ja => "🇯🇵",
        }
    }

    /// Looks up a language by its exact code.
    ///
    /// Codes are matched case-insensitively; region subtags are NOT stripped
    /// here (`"en-US"` returns `None`), see [`Language::from_primary_subtag`].
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Looks up a language by the primary subtag of a locale tag.
    ///
    /// Accepts both `-` and `_` separators (`"ja-JP"`, `"de_AT.UTF-8"`).
    #[must_use]
    pub fn from_primary_subtag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_', '.']).next()?;
        Self::from_code(primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag(), self.native_name())
    }
}

/// Error returned when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}
