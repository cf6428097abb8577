// SPDX-License-Identifier: MPL-2.0
//! Hosted CMS adapter implementing [`ContentSource`].
//!
//! Requests go to `https://<service-domain>.microcms.io/api/v1/<endpoint>`
//! with the read key in the `X-MICROCMS-API-KEY` header.

use crate::application::port::{ContentQuery, ContentSource, Endpoint, FetchError};
use crate::config::ContentConfig;
use std::future::Future;

const API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Returns the API root for a service domain.
#[must_use]
pub fn api_root(service_domain: &str) -> String {
    format!("https://{service_domain}.microcms.io/api/v1")
}

/// HTTP client for the content service.
#[derive(Debug, Clone)]
pub struct MicroCmsClient {
    client: reqwest::Client,
    api_root: String,
    api_key: Option<String>,
}

impl MicroCmsClient {
    /// Creates a client for the configured service domain.
    pub fn from_config(config: &ContentConfig) -> Result<Self, FetchError> {
        Self::with_api_root(api_root(&config.service_domain), config.api_key.clone())
    }

    /// Creates a client rooted at an arbitrary URL.
    pub fn with_api_root(
        api_root: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_root: api_root.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.api_root, endpoint.path())
    }
}

impl ContentSource for MicroCmsClient {
    fn fetch(
        &self,
        endpoint: Endpoint,
        query: &ContentQuery,
    ) -> impl Future<Output = Result<String, FetchError>> + Send {
        let request = self.api_key.as_deref().map(|key| {
            self.client
                .get(self.url(endpoint))
                .header(API_KEY_HEADER, key)
                .query(&query.to_pairs())
        });

        async move {
            let request = request.ok_or(FetchError::MissingApiKey)?;
            let response = request
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))
        }
    }
}
