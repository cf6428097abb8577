// SPDX-License-Identifier: MPL-2.0
//! Transactional email port definition.
//!
//! The contact form hands a filled template to an [`EmailSender`]. The
//! service is opaque: success or failure is all the form needs to know.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

/// A template send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Template variables (`from_name`, `from_email`, `message`, `to_name`).
    pub variables: BTreeMap<String, String>,
}

/// Errors that can occur while sending email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// A required credential is empty; names the missing setting.
    NotConfigured(&'static str),

    /// The request could not be sent.
    Transport(String),

    /// The service refused the request.
    Rejected { status: u16, body: String },
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::NotConfigured(setting) => write!(f, "email {setting} is not configured"),
            EmailError::Transport(msg) => write!(f, "email transport error: {msg}"),
            EmailError::Rejected { status, body } => {
                write!(f, "email service rejected request ({status}): {body}")
            }
        }
    }
}

impl std::error::Error for EmailError {}

impl EmailRequest {
    /// Returns the name of the first empty credential, if any.
    #[must_use]
    pub fn missing_credential(&self) -> Option<&'static str> {
        [
            ("service id", &self.service_id),
            ("template id", &self.template_id),
            ("public key", &self.public_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Trait for transactional email backends.
pub trait EmailSender: Send + Sync {
    /// Sends one templated email. No retries.
    fn send(&self, request: &EmailRequest) -> impl Future<Output = Result<(), EmailError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EmailRequest {
        EmailRequest {
            service_id: "service".into(),
            template_id: "template".into(),
            public_key: "key".into(),
            variables: BTreeMap::new(),
        }
    }

    #[test]
    fn complete_request_has_no_missing_credential() {
        assert_eq!(request().missing_credential(), None);
    }

    #[test]
    fn blank_template_is_reported() {
        let req = EmailRequest {
            template_id: "  ".into(),
            ..request()
        };
        assert_eq!(req.missing_credential(), Some("template id"));
    }

    #[test]
    fn rejected_display_includes_status() {
        let err = EmailError::Rejected {
            status: 400,
            body: "The Public Key is invalid".into(),
        };
        assert!(err.to_string().contains("400"));
    }
}
