// SPDX-License-Identifier: MPL-2.0
//! [`LanguagePreference`] backed by the operating system locale.

use crate::application::port::LanguagePreference;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLanguage;

impl LanguagePreference for SystemLanguage {
    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}
