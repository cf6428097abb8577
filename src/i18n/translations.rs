// SPDX-License-Identifier: MPL-2.0
//! Typed translation table.
//!
//! Every section mirrors a group of message ids in the `.ftl` files
//! (`nav-home` lives in [`NavText::home`]). A table is only built when every
//! id resolves, so a view holding a [`Translations`] can never hit a
//! missing string.

use super::fluent::{I18nError, MessageSource};

macro_rules! text_section {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal {
            $($field:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl $name {
            /// Message ids of this section, in declaration order.
            pub const IDS: &'static [&'static str] = &[$(concat!($prefix, "-", $key)),+];

            fn load(source: &MessageSource<'_>) -> Result<Self, I18nError> {
                Ok(Self {
                    $($field: source.message(concat!($prefix, "-", $key))?,)+
                })
            }

            fn get(&self, id: &str) -> Option<&str> {
                $(
                    if id == concat!($prefix, "-", $key) {
                        return Some(&self.$field);
                    }
                )+
                None
            }
        }
    };
}

text_section!(
    /// Window chrome.
    AppText, "app" {
        window_title => "window-title",
        language_label => "language-label",
    }
);

text_section!(
    NavText, "nav" {
        home => "home",
        work => "work",
        about => "about",
        tech => "tech",
        contact => "contact",
    }
);

text_section!(
    HeroText, "hero" {
        title => "title",
        subtitle => "subtitle",
        view_work => "view-work",
        get_in_touch => "get-in-touch",
        scroll_to_explore => "scroll-to-explore",
    }
);

text_section!(
    WorkText, "work" {
        title => "title",
        subtitle => "subtitle",
        featured => "featured",
        view_live => "view-live",
        view_source => "view-source",
    }
);

text_section!(
    AboutText, "about" {
        title => "title",
        subtitle => "subtitle",
        my_journey => "my-journey",
        education => "education",
        experience => "experience",
        based_in => "based-in",
    }
);

text_section!(
    TechText, "tech" {
        title => "title",
        subtitle => "subtitle",
        additional_skills => "additional-skills",
        frontend => "frontend",
        styling => "styling",
        tools => "tools",
        backend => "backend",
    }
);

text_section!(
    ContactText, "contact" {
        title => "title",
        subtitle => "subtitle",
        name => "name",
        email => "email",
        message => "message",
        send => "send",
        sending => "sending",
        success => "success",
        error => "error",
    }
);

text_section!(
    CommonText, "common" {
        loading => "loading",
        error => "error",
        retry => "retry",
    }
);

text_section!(
    /// Contact form field errors.
    ValidationText, "validation" {
        name_required => "name-required",
        email_required => "email-required",
        email_invalid => "email-invalid",
        message_required => "message-required",
        message_too_short => "message-too-short",
    }
);

text_section!(
    NotificationText, "notification" {
        config_load_error => "config-load-error",
    }
);

/// The complete string table for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub app: AppText,
    pub nav: NavText,
    pub hero: HeroText,
    pub work: WorkText,
    pub about: AboutText,
    pub tech: TechText,
    pub contact: ContactText,
    pub common: CommonText,
    pub validation: ValidationText,
    pub notification: NotificationText,
}

impl Translations {
    pub(super) fn load(source: &MessageSource<'_>) -> Result<Self, I18nError> {
        Ok(Self {
            app: AppText::load(source)?,
            nav: NavText::load(source)?,
            hero: HeroText::load(source)?,
            work: WorkText::load(source)?,
            about: AboutText::load(source)?,
            tech: TechText::load(source)?,
            contact: ContactText::load(source)?,
            common: CommonText::load(source)?,
            validation: ValidationText::load(source)?,
            notification: NotificationText::load(source)?,
        })
    }

    /// Every message id a table carries.
    pub fn ids() -> impl Iterator<Item = &'static str> {
        [
            AppText::IDS,
            NavText::IDS,
            HeroText::IDS,
            WorkText::IDS,
            AboutText::IDS,
            TechText::IDS,
            ContactText::IDS,
            CommonText::IDS,
            ValidationText::IDS,
            NotificationText::IDS,
        ]
        .into_iter()
        .flatten()
        .copied()
    }

    /// Looks a string up by message id, for keys chosen at runtime
    /// (validation errors, notifications).
    ///
    /// Unknown ids are returned unchanged so the gap is visible on screen.
    #[must_use]
    pub fn tr<'a>(&'a self, id: &'a str) -> &'a str {
        self.app
            .get(id)
            .or_else(|| self.nav.get(id))
            .or_else(|| self.hero.get(id))
            .or_else(|| self.work.get(id))
            .or_else(|| self.about.get(id))
            .or_else(|| self.tech.get(id))
            .or_else(|| self.contact.get(id))
            .or_else(|| self.common.get(id))
            .or_else(|| self.validation.get(id))
            .or_else(|| self.notification.get(id))
            .unwrap_or(id)
    }
}
