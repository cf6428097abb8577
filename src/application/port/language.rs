// SPDX-License-Identifier: MPL-2.0
//! Ambient language preference port definition.

/// Source of the runtime's preferred language (OS or browser locale).
pub trait LanguagePreference {
    /// Returns the preferred locale tag, e.g. `"ja-JP"`, if one is known.
    fn preferred_language(&self) -> Option<String>;
}

/// A fixed preference, handy when the environment should not be consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLanguage(pub Option<String>);

impl FixedLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }
}

impl LanguagePreference for FixedLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}
