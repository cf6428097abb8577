// SPDX-License-Identifier: MPL-2.0
//! Content loading use case.
//!
//! [`ContentLoader`] turns raw responses from a [`ContentSource`] into domain
//! entities. It never fails: any transport, status or decode problem is
//! logged and reported as "nothing" (an empty list or `None`), leaving the
//! caller to keep its fallback data.

use crate::application::port::{ContentQuery, ContentSource, Endpoint, FetchError};
use crate::config::{DEFAULT_BLOG_LIMIT, DEFAULT_PROJECT_LIMIT};
use crate::domain::content::{BlogPost, Education, Profile, Project, Timestamp};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// List envelope returned by collection endpoints. Paging fields are ignored.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    contents: Vec<T>,
}

/// Fetches and decodes portfolio content.
#[derive(Debug, Clone)]
pub struct ContentLoader<S> {
    source: S,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Most recent projects first. `None` or `Some(0)` requests the default page size.
    pub async fn fetch_projects(&self, limit: Option<u32>) -> Vec<Project> {
        let query = ContentQuery::new()
            .limit(effective_limit(limit, DEFAULT_PROJECT_LIMIT))
            .descending("createdAt");
        let mut projects: Vec<Project> = self.list(Endpoint::Projects, &query).await;
        sort_newest_first(&mut projects, |p| p.created_at);
        projects
    }

    /// Featured projects only, most recent first.
    pub async fn fetch_featured_projects(&self) -> Vec<Project> {
        let query = ContentQuery::new()
            .filters("featured[equals]true")
            .descending("createdAt");
        let mut projects: Vec<Project> = self.list(Endpoint::Projects, &query).await;
        sort_newest_first(&mut projects, |p| p.created_at);
        projects
    }

    /// The singleton profile, or `None` when it is unavailable or incomplete.
    pub async fn fetch_profile(&self) -> Option<Profile> {
        self.object(Endpoint::Profile, &ContentQuery::new()).await
    }

    pub async fn fetch_education(&self) -> Vec<Education> {
        let query = ContentQuery::new().descending("createdAt");
        let mut education: Vec<Education> = self.list(Endpoint::Education, &query).await;
        sort_newest_first(&mut education, |e| e.created_at);
        education
    }

    /// Most recently published posts first.
    pub async fn fetch_blog_posts(&self, limit: Option<u32>) -> Vec<BlogPost> {
        let query = ContentQuery::new()
            .limit(effective_limit(limit, DEFAULT_BLOG_LIMIT))
            .descending("publishedAt");
        let mut posts: Vec<BlogPost> = self.list(Endpoint::Blog, &query).await;
        sort_newest_first(&mut posts, |p| p.published_at);
        posts
    }

    /// Profile and education for the about section, fetched concurrently.
    pub async fn fetch_about(&self) -> (Option<Profile>, Vec<Education>) {
        futures_util::future::join(self.fetch_profile(), self.fetch_education()).await
    }

    async fn list<T: DeserializeOwned>(&self, endpoint: Endpoint, query: &ContentQuery) -> Vec<T> {
        let result = self
            .source
            .fetch(endpoint, query)
            .await
            .and_then(|body| Ok(serde_json::from_str::<ListResponse<T>>(&body)?.contents));
        recover(endpoint, result).unwrap_or_default()
    }

    async fn object<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &ContentQuery,
    ) -> Option<T> {
        let result = self
            .source
            .fetch(endpoint, query)
            .await
            .and_then(|body| Ok(serde_json::from_str::<T>(&body)?));
        recover(endpoint, result)
    }
}

fn effective_limit(requested: Option<u32>, default: u32) -> u32 {
    match requested {
        Some(limit) if limit > 0 => limit,
        _ => default,
    }
}

/// Stable sort, so records with equal timestamps keep service order.
fn sort_newest_first<T>(items: &mut [T], key: impl Fn(&T) -> Timestamp) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

fn recover<T>(endpoint: Endpoint, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(FetchError::MissingApiKey) => {
            tracing::debug!(collection = %endpoint, "no API key configured, skipping fetch");
            None
        }
        Err(err) => {
            tracing::warn!(collection = %endpoint, error = %err, "failed to load content");
            None
        }
    }
}
