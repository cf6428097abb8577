// SPDX-License-Identifier: MPL-2.0
//! Content service port definition.
//!
//! This module defines the [`ContentSource`] trait: a keyed, queryable content
//! API that returns raw JSON bodies. Decoding and validation happen in the
//! [`ContentLoader`](crate::application::content_loader::ContentLoader), so
//! adapters stay transport-only.

use std::fmt;
use std::future::Future;

// =============================================================================
// Endpoint
// =============================================================================

/// A named collection on the content service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Projects,
    Profile,
    Education,
    Blog,
}

impl Endpoint {
    /// Path segment of the collection.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Projects => "projects",
            Endpoint::Profile => "profile",
            Endpoint::Education => "education",
            Endpoint::Blog => "blog",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// =============================================================================
// ContentQuery
// =============================================================================

/// Query parameters understood by the content service.
///
/// `orders` takes a field name, `-` prefixed for descending order.
/// `filters` takes an expression such as `featured[equals]true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentQuery {
    pub limit: Option<u32>,
    pub orders: Option<String>,
    pub filters: Option<String>,
}

impl ContentQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Orders by `field`, newest/highest first.
    #[must_use]
    pub fn descending(mut self, field: &str) -> Self {
        self.orders = Some(format!("-{field}"));
        self
    }

    #[must_use]
    pub fn filters(mut self, expression: impl Into<String>) -> Self {
        self.filters = Some(expression.into());
        self
    }

    /// Returns the query as URL parameter pairs, omitting unset values.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(orders) = &self.orders {
            pairs.push(("orders", orders.clone()));
        }
        if let Some(filters) = &self.filters {
            pairs.push(("filters", filters.clone()));
        }
        pairs
    }
}

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while fetching content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No API key is configured; the request was not sent.
    MissingApiKey,

    /// The request could not be sent or the body could not be read.
    Transport(String),

    /// The service answered with a non-success HTTP status.
    Status(u16),

    /// The body is not valid JSON or lacks required fields.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingApiKey => write!(f, "content service API key is not configured"),
            FetchError::Transport(msg) => write!(f, "transport error: {msg}"),
            FetchError::Status(code) => write!(f, "unexpected HTTP status: {code}"),
            FetchError::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

// =============================================================================
// ContentSource Trait
// =============================================================================

/// Trait for content service backends.
///
/// Implementations perform a single `GET` against `endpoint` and return the
/// response body. They never retry.
pub trait ContentSource: Send + Sync {
    /// Fetches the raw JSON body for `endpoint` with the given query.
    fn fetch(
        &self,
        endpoint: Endpoint,
        query: &ContentQuery,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(ContentQuery::new().to_pairs().is_empty());
    }

    #[test]
    fn query_pairs_keep_declared_order() {
        let query = ContentQuery::new()
            .filters("featured[equals]true")
            .descending("createdAt")
            .limit(6);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("limit", "6".to_string()),
                ("orders", "-createdAt".to_string()),
                ("filters", "featured[equals]true".to_string()),
            ]
        );
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::Projects.path(), "projects");
        assert_eq!(Endpoint::Profile.path(), "profile");
        assert_eq!(Endpoint::Education.path(), "education");
        assert_eq!(Endpoint::Blog.to_string(), "blog");
    }

    #[test]
    fn fetch_error_display() {
        assert_eq!(
            FetchError::Status(401).to_string(),
            "unexpected HTTP status: 401"
        );
        assert!(FetchError::MissingApiKey.to_string().contains("API key"));
    }
}
