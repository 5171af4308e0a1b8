use crate::catalog::{SortMode, Tool};
use crate::newsletter::SubscribeOutcome;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Filter parameters for `GET /api/tools`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolQuery {
    /// Category id; empty means every category.
    pub category: String,
    pub sort: SortMode,
}

#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

/// Body of a `POST /api/subscribe` response. Only `error` matters; any other
/// object shape counts as success.
#[derive(Debug, Default, Deserialize)]
pub struct SubscribeReply {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubscribeReply {
    /// Classify a decoded reply. A server-supplied `error` wins regardless of
    /// status; a non-2xx reply without one is treated as a failed request.
    pub fn outcome(self, success_status: bool) -> SubscribeOutcome {
        match self.error {
            Some(error) => SubscribeOutcome::Rejected(error),
            None if success_status => {
                if let Some(message) = self.message {
                    tracing::info!(%message, "subscription accepted");
                }
                SubscribeOutcome::Subscribed
            }
            None => SubscribeOutcome::Failed,
        }
    }
}

/// HTTP client for the directory API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_tools(&self, query: &ToolQuery) -> Result<Vec<Tool>, ApiError> {
        let url = self.endpoint("/api/tools");
        tracing::debug!(%url, category = %query.category, filter = query.sort.as_query(), "fetching tools");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("event_category", query.category.as_str()),
                ("filter", query.sort.as_query()),
            ])
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Tool>>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// Register an email. `Ok` covers every reply the server managed to
    /// describe; `Err` means the request or its body was unusable.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, ApiError> {
        let url = self.endpoint("/api/subscribe");
        tracing::debug!(%url, "submitting subscription");

        let response = self
            .http
            .post(&url)
            .json(&SubscribeRequest { email })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let success = response.status().is_success();
        let reply = response
            .json::<SubscribeReply>()
            .await
            .map_err(|source| ApiError::Decode { url, source })?;
        Ok(reply.outcome(success))
    }
}
