// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and content limits.
//!
//! # Categories
//!
//! - **Content**: Content service domain and collection sizes
//! - **Contact**: Email recipient label
//! - **Notifications**: Banner lifetime

use std::time::Duration;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Content service subdomain used when none is configured.
pub const DEFAULT_SERVICE_DOMAIN: &str = "yutahamasaki";

/// Number of projects requested when the caller passes no limit.
pub const DEFAULT_PROJECT_LIMIT: u32 = 100;

/// Number of blog posts requested when the caller passes no limit.
pub const DEFAULT_BLOG_LIMIT: u32 = 10;

/// Number of projects shown in the work section.
pub const WORK_SECTION_PROJECT_LIMIT: u32 = 6;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Value of the `to_name` template variable.
pub const DEFAULT_RECIPIENT_LABEL: &str = "Portfolio Owner";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a contact banner stays visible.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);
