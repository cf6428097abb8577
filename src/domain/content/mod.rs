// SPDX-License-Identifier: MPL-2.0
//! Content entities and their static fallbacks.
//!
//! - [`types`]: [`Project`], [`Profile`], [`Education`], [`BlogPost`]
//! - [`timestamp`]: [`Timestamp`] used for ordering
//! - [`fallback`]: embedded data rendered when the CMS has nothing usable

pub mod fallback;
pub mod timestamp;
pub mod types;

pub use fallback::{fallback_education, fallback_profile, fallback_projects};
pub use timestamp::{InvalidTimestamp, Timestamp};
pub use types::{Achievement, BlogPost, Education, ImageRef, Profile, Project, SocialLinks, Technology};
