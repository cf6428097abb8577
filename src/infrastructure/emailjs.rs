// SPDX-License-Identifier: MPL-2.0
//! Transactional email adapter implementing [`EmailSender`].

use crate::application::port::{EmailError, EmailRequest, EmailSender};
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;

/// Send endpoint of the hosted email service.
pub const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct SendPayload {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: BTreeMap<String, String>,
}

impl From<&EmailRequest> for SendPayload {
    fn from(request: &EmailRequest) -> Self {
        Self {
            service_id: request.service_id.clone(),
            template_id: request.template_id.clone(),
            user_id: request.public_key.clone(),
            template_params: request.variables.clone(),
        }
    }
}

/// Posts template sends to the email service.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsSender {
    pub fn new() -> Result<Self, EmailError> {
        Self::with_endpoint(SEND_URL)
    }

    /// Creates a sender posting to `endpoint` instead of the hosted service.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("Folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl EmailSender for EmailJsSender {
    fn send(&self, request: &EmailRequest) -> impl Future<Output = Result<(), EmailError>> + Send {
        let prepared = match request.missing_credential() {
            Some(setting) => Err(EmailError::NotConfigured(setting)),
            None => Ok(self
                .client
                .post(&self.endpoint)
                .json(&SendPayload::from(request))),
        };

        async move {
            let response = prepared?
                .send()
                .await
                .map_err(|e| EmailError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
