// SPDX-License-Identifier: MPL-2.0
//! Contact form rules.
//!
//! Validation is pure: it inspects a [`ContactForm`] and reports per-field
//! problems as i18n keys. Submitting is the caller's business.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// A validation failure on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    MessageTooShort,
}

impl FieldError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            FieldError::NameRequired => "validation-name-required",
            FieldError::EmailRequired => "validation-email-required",
            FieldError::EmailInvalid => "validation-email-invalid",
            FieldError::MessageRequired => "validation-message-required",
            FieldError::MessageTooShort => "validation-message-too-short",
        }
    }

    /// The field this error belongs to.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageRequired | FieldError::MessageTooShort => Field::Message,
        }
    }
}

/// Per-field validation outcome. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Removes the error for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field(), error);
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.0.values().copied()
    }
}

/// The contact form's user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Returns the current value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks every field and returns the failures.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FieldError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.insert(FieldError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(FieldError::EmailInvalid);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert(FieldError::MessageRequired);
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(FieldError::MessageTooShort);
        }

        errors
    }

    /// Builds the variables handed to the email template.
    #[must_use]
    pub fn template_variables(&self, recipient_label: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("from_name".to_string(), self.name.clone()),
            ("from_email".to_string(), self.email.clone()),
            ("message".to_string(), self.message.clone()),
            ("to_name".to_string(), recipient_label.to_string()),
        ])
    }
}
