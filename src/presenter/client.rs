use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::{RwLock, RwLockReadGuard};
use tokio::task::JoinHandle;

use crate::models::prices::AggregatedResponse;
use crate::presenter::state::{DashboardView, Tab};

#[derive(Debug, thiserror::Error)]
pub enum PresenterError {
    #[error("prices endpoint returned {0}")]
    Status(StatusCode),

    #[error("failed to fetch prices: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of the dashboard data.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_prices(&self) -> Result<AggregatedResponse, PresenterError>;
}

/// Reads the aggregated prices from a running `depin-dashboard` server.
#[derive(Clone)]
pub struct PricesClient {
    client: Client,
    endpoint: String,
}

impl PricesClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PriceFeed for PricesClient {
    async fn fetch_prices(&self) -> Result<AggregatedResponse, PresenterError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("accept", "application/json")
            .send()
            .await?;

        tracing::debug!("Prices response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PresenterError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

/// A mounted dashboard: view state plus the one fetch that fills it.
///
/// The fetch task only holds a weak reference to the state. Once the dashboard is
/// dropped or unmounted, a late result is discarded instead of committed.
pub struct Dashboard {
    view: Arc<RwLock<DashboardView>>,
    fetch: Option<JoinHandle<bool>>,
}

impl Dashboard {
    pub fn mount(feed: Arc<dyn PriceFeed>) -> Self {
        let view = Arc::new(RwLock::new(DashboardView::new()));
        let weak_view = Arc::downgrade(&view);

        let fetch = tokio::spawn(async move {
            tracing::debug!("Fetching dashboard prices");
            let outcome = feed.fetch_prices().await;

            match weak_view.upgrade() {
                Some(view) => view.write().await.settle(outcome),
                None => {
                    tracing::debug!("Dashboard unmounted before prices arrived, discarding result");
                    false
                }
            }
        });

        Self {
            view,
            fetch: Some(fetch),
        }
    }

    pub async fn view(&self) -> RwLockReadGuard<'_, DashboardView> {
        self.view.read().await
    }

    pub async fn select_tab(&self, tab: Tab) {
        self.view.write().await.select_tab(tab);
    }

    /// Wait for the fetch to settle. True if its result was committed to the view.
    pub async fn settled(&mut self) -> bool {
        let Some(fetch) = self.fetch.take() else {
            return false;
        };

        match fetch.await {
            Ok(committed) => committed,
            Err(e) => {
                tracing::error!("Dashboard fetch task failed: {}", e);
                false
            }
        }
    }

    /// Drop the view state and hand back the fetch, if it is still outstanding.
    pub fn unmount(self) -> Option<JoinHandle<bool>> {
        self.fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::state::LoadState;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{oneshot, Mutex};

    struct CountingFeed {
        calls: AtomicUsize,
        status: Option<StatusCode>,
    }

    #[async_trait]
    impl PriceFeed for CountingFeed {
        async fn fetch_prices(&self) -> Result<AggregatedResponse, PresenterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.status {
                Some(status) => Err(PresenterError::Status(status)),
                None => Ok(serde_json::from_value(json!({
                    "tokens": [{"id": "storj", "symbol": "STORJ", "name": "Storj", "price": 0.3, "change24h": -4.0, "marketCap": 40000000}],
                    "category": null
                }))
                .unwrap()),
            }
        }
    }

    /// Blocks until the test releases it.
    struct GatedFeed {
        gate: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl PriceFeed for GatedFeed {
        async fn fetch_prices(&self) -> Result<AggregatedResponse, PresenterError> {
            if let Some(gate) = self.gate.lock().await.take() {
                let _ = gate.await;
            }
            Ok(AggregatedResponse {
                tokens: Vec::new(),
                category: None,
            })
        }
    }

    #[tokio::test]
    async fn test_mount_fetches_exactly_once() {
        let feed = Arc::new(CountingFeed {
            calls: AtomicUsize::new(0),
            status: None,
        });
        let mut dashboard = Dashboard::mount(feed.clone());

        assert!(dashboard.settled().await);
        dashboard.select_tab(Tab::Tokens).await;
        dashboard.select_tab(Tab::Networks).await;
        assert!(!dashboard.settled().await);

        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);
        let view = dashboard.view().await;
        assert_eq!(view.load_state(), LoadState::Loaded);
        assert_eq!(view.tokens().len(), 1);
        assert_eq!(view.tab(), Tab::Networks);
    }

    #[tokio::test]
    async fn test_failed_fetch_settles_as_failed() {
        let feed = Arc::new(CountingFeed {
            calls: AtomicUsize::new(0),
            status: Some(StatusCode::INTERNAL_SERVER_ERROR),
        });
        let mut dashboard = Dashboard::mount(feed);

        assert!(dashboard.settled().await);
        let view = dashboard.view().await;
        assert_eq!(view.load_state(), LoadState::Failed);
        assert!(view.tokens().is_empty());
    }

    #[tokio::test]
    async fn test_result_after_unmount_is_discarded() {
        let (release, gate) = oneshot::channel();
        let feed = Arc::new(GatedFeed {
            gate: Mutex::new(Some(gate)),
        });

        let dashboard = Dashboard::mount(feed);
        let fetch = dashboard.unmount().unwrap();

        release.send(()).unwrap();
        assert!(!fetch.await.unwrap());
    }

    #[tokio::test]
    async fn test_client_reports_connection_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PricesClient::new(format!("http://{}/api/prices", addr));
        let err = client.fetch_prices().await.unwrap_err();
        assert!(matches!(err, PresenterError::Http(_)));
    }
}
