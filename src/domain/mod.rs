// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and business rules.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here performs I/O; content entities only derive `serde` traits so
//! adapters can decode them.
//!
//! # Modules
//!
//! - [`locale`]: Supported display languages ([`Language`](locale::Language))
//! - [`content`]: CMS entities ([`Project`](content::Project),
//!   [`Profile`](content::Profile), [`Education`](content::Education),
//!   [`BlogPost`](content::BlogPost)) and their static fallbacks
//! - [`contact`]: Contact form validation ([`ContactForm`](contact::ContactForm))
//! - [`tech`]: Tech stack categories and skill levels

pub mod contact;
pub mod content;
pub mod locale;
pub mod tech;
