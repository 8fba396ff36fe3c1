//! HTTP client for the form relay
//!
//! Posts inquiries as multipart form data and interprets the relay's
//! JSON error bodies.

use super::error::RelayError;
use super::traits::RelayClientTrait;
use crate::state::Inquiry;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use serde::Deserialize;
use std::time::Duration;

/// Default relay endpoint
pub const DEFAULT_RELAY_URL: &str = "https://formspree.io/f/roadline";

/// Error body returned by the relay on rejection
#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: String,
}

/// Client for posting inquiries to the relay
#[derive(Debug, Clone)]
pub struct RelayClient {
    /// The HTTP client
    http: reqwest::Client,
    /// The relay endpoint URL
    endpoint: String,
}

impl RelayClient {
    /// Create a new relay client. `timeout` of `None` waits indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClientTrait for RelayClient {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), RelayError> {
        let form = inquiry
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name, value.to_string())
            });

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Body may be missing or not JSON; either way fall back to no message
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            message: parse_error_body(&body),
        })
    }
}

/// Pull the `error` string out of a relay error body
fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<RelayErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|e| !e.trim().is_empty())
}
