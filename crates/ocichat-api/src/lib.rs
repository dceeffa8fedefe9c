//! Chat completion dispatch against an OpenAI-compatible proxy.
//!
//! One request per run, no client-side retries: the OCI provider behind
//! the reference proxy rejects retry wrapping, so failures surface
//! immediately instead of being retried transparently.

use std::time::Duration;

use thiserror::Error;

use ocichat_logging::{log_request, log_response};
use ocichat_models::{ChatRequest, ChatResponse};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("request to completion endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Client for the proxy's chat completion endpoint.
///
/// Constructed once per run and passed to the dispatch flow; the bearer
/// token is always attached even though the local proxy does not validate
/// it.
pub struct ProxyClient {
    base_url: String,
    api_key: String,
    verbose: bool,
    client: reqwest::Client,
}

impl ProxyClient {
    /// `base_url` includes the `/v1` prefix, e.g. `http://localhost:4000/v1`.
    /// With no `timeout` the request waits as long as the proxy does.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
        verbose: bool,
    ) -> Result<Self, DispatchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            verbose,
            client: builder.build()?,
        })
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send a single user message and return the parsed response.
    /// Exactly one attempt; any transport or endpoint error is surfaced
    /// as `DispatchError` for the caller to report.
    pub async fn chat_completion(
        &self,
        model: &str,
        message: &str,
    ) -> Result<ChatResponse, DispatchError> {
        let request = ChatRequest::single_user(model, message);
        let url = self.chat_completions_url();

        log_request(&url, &request, &self.api_key, self.verbose);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        log_response(&status, &headers, &body, self.verbose);

        if !status.is_success() {
            return Err(DispatchError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;
        Ok(chat_response)
    }
}
