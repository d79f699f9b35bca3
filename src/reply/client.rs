//! HTTP client for the reply generation service.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::ServiceConfig;

use super::error::ComposeError;
use super::types::{normalize_reply, ComposeRequest};

/// Path of the generation endpoint, relative to the service base URL.
pub const GENERATE_PATH: &str = "/api/email/generate";

/// Client for the generation endpoint.
///
/// Cloning is cheap and shares the underlying connection pool, so a clone
/// can be moved into each spawned request.
#[derive(Debug, Clone)]
pub struct ReplyClient {
    client: Client,
    endpoint: String,
}

impl ReplyClient {
    /// Build a client from the service configuration.
    ///
    /// Timeouts left unset in the config fall back to the transport defaults.
    pub fn new(config: &ServiceConfig) -> Result<Self, ComposeError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(u64::from(secs)));
        }
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(u64::from(secs)));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&config.base_url),
        })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one generation request and return the normalized reply text.
    pub async fn generate(&self, request: &ComposeRequest) -> Result<String, ComposeError> {
        let body = serde_json::to_vec(request)?;

        tracing::debug!(
            url = %self.endpoint,
            tone = %request.tone,
            content_len = request.email_content.len(),
            "Sending generation request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::warn!(
                status = %status,
                latency_ms,
                "Generation service returned an error status"
            );

            return Err(ComposeError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_text = response.text().await?;
        let reply = normalize_reply(&response_text);

        tracing::debug!(
            status = %status,
            latency_ms,
            reply_len = reply.len(),
            "Generation request completed"
        );

        Ok(reply)
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_PATH)
}
