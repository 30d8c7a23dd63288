//! Relay (Formspree) request and reply handling.
//!
//! The transport itself is browser-specific and lives in the site crate;
//! here we only describe what goes over the wire and how to read the answer.

use serde::Deserialize;
use thiserror::Error;

use super::ContactForm;

/// Consent-audit tag sent with every submission.
pub const POLICY_VERSION: &str = "2025-01";
/// Honeypot field name Formspree recognises. Always sent empty.
pub const HONEYPOT_FIELD: &str = "_gotcha";

const REJECTED_FALLBACK: &str = "No se pudo enviar el formulario.";

/// A multipart form POST to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub endpoint: String,
    /// Form fields, in the order they are appended.
    pub fields: Vec<(&'static str, String)>,
}

impl RelayRequest {
    pub fn from_form(endpoint: impl Into<String>, form: &ContactForm) -> Self {
        let subject_name = match form.name.trim() {
            "" => "Sin nombre",
            name => name,
        };

        let fields = vec![
            ("name", form.name.clone()),
            ("phone", form.phone.clone()),
            ("email", form.email.clone()),
            ("message", form.message.clone()),
            (HONEYPOT_FIELD, String::new()),
            ("acceptedPolicy", "true".to_string()),
            ("policyVersion", POLICY_VERSION.to_string()),
            ("_subject", format!("Nuevo contacto: {subject_name}")),
            ("_replyto", form.email.clone()),
        ];

        Self {
            endpoint: endpoint.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// What came back from the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

impl RelayReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First `errors[].message` of the body, or a generic message when the
    /// body is missing, not JSON, or has no usable entry.
    pub fn error_message(&self) -> String {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.errors.into_iter().next())
            .and_then(|entry| entry.message)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string())
    }
}

/// The relay could not be reached at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends a [`RelayRequest`] and reports the raw reply.
///
/// Implementations perform exactly one request; the flow never retries.
#[allow(async_fn_in_trait)]
pub trait RelayTransport {
    async fn post_form(&self, request: &RelayRequest) -> Result<RelayReply, TransportError>;
}

impl<T: RelayTransport + ?Sized> RelayTransport for &T {
    async fn post_form(&self, request: &RelayRequest) -> Result<RelayReply, TransportError> {
        (**self).post_form(request).await
    }
}

/// Transport for builds without network access. Every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRelay;

impl RelayTransport for NoRelay {
    async fn post_form(&self, _request: &RelayRequest) -> Result<RelayReply, TransportError> {
        Err(TransportError("relay transport not available".to_string()))
    }
}
