//! Completion client: one POST to `/chat/completions` per call, no retries.

use tracing::{debug, warn};

use crate::chat::{ChatRequest, ChatResponse, ErrorBody, Msg};
use crate::config::Config;
use crate::error::Error;
use crate::util;

pub struct Client {
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            http: util::http_client(config.request_timeout)?,
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        })
    }

    /// Issue a single completion call and return the first choice's text,
    /// trimmed.
    ///
    /// An empty `choices` array or absent `content` yields an empty string
    /// rather than an error. Cancellation is the caller dropping the future.
    pub async fn complete(
        &self,
        api_key: &str,
        messages: &[Msg],
        max_tokens: u32,
    ) -> Result<String, Error> {
        if api_key.trim().is_empty() {
            return Err(Error::MissingCredential);
        }

        let body = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            max_tokens,
        };
        let url = format!("{}/chat/completions", self.api_base);
        debug!(model = %self.model, max_tokens, "requesting completion");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            warn!(%status, "completion request rejected");
            return Err(Error::Upstream(message));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        Ok(parsed
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default()
            .to_string())
    }
}
