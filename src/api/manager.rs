//! Runs API requests off the event loop.
//!
//! Each request is a spawned task that reports back through the application
//! event channel, so the UI never waits on the network.

use crate::api::client::{ApiClient, ToolQuery};
use crate::app::event::{AppEvent, RequestId};
use crate::newsletter::SubscribeOutcome;
use tokio::sync::mpsc;

pub struct ApiManager {
    client: ApiClient,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl ApiManager {
    pub fn new(client: ApiClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { client, event_tx }
    }

    /// Fetch the tool list; resolves as [`AppEvent::ToolsLoaded`] tagged with
    /// `request_id` so stale responses can be told apart.
    pub fn fetch_tools(&self, request_id: RequestId, query: ToolQuery) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_tools(&query).await;
            let _ = tx.send(AppEvent::ToolsLoaded { request_id, result });
        });
    }

    /// Submit an email; resolves as [`AppEvent::SubscribeFinished`].
    pub fn subscribe(&self, email: String) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = match client.subscribe(&email).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "error subscribing");
                    SubscribeOutcome::Failed
                }
            };
            let _ = tx.send(AppEvent::SubscribeFinished { outcome });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortMode;

    /// Client pointed at a local port with nothing listening.
    async fn unreachable_client() -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        ApiClient::new(&format!("http://{}", addr))
    }

    #[tokio::test]
    async fn failed_fetch_reports_error_with_request_id() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = ApiManager::new(unreachable_client().await, tx);
        manager.fetch_tools(
            7,
            ToolQuery {
                category: String::new(),
                sort: SortMode::New,
            },
        );
        match rx.recv().await {
            Some(AppEvent::ToolsLoaded { request_id, result }) => {
                assert_eq!(request_id, 7);
                assert!(result.is_err());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn transport_failure_becomes_failed_outcome() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = ApiManager::new(unreachable_client().await, tx);
        manager.subscribe("user@example.com".into());
        match rx.recv().await {
            Some(AppEvent::SubscribeFinished { outcome }) => {
                assert_eq!(outcome, SubscribeOutcome::Failed);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
