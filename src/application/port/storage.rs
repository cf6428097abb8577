// SPDX-License-Identifier: MPL-2.0
//! Durable client storage port definition.
//!
//! A flat string-to-string store that survives restarts. The locale resolver
//! keeps a single entry in it; see
//! [`LANGUAGE_STORAGE_KEY`](crate::i18n::LANGUAGE_STORAGE_KEY).

use crate::error::Result;

/// Trait for durable key/value storage backends.
pub trait KeyValueStorage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
