//! # Catalog Fetcher
//!
//! Loads the two product lists the home screen shows and tracks the
//! loading flag.
//!
//! ## Refresh Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         refresh()                                       │
//! │                                                                         │
//! │  loading = true                                                         │
//! │       │                                                                 │
//! │       ├──────────────► GET /popular ──┐                                 │
//! │       │                               │  (concurrent, either order)     │
//! │       └──────────────► GET /catalog ──┤                                 │
//! │                                       ▼                                 │
//! │  Ok(list)  → replace that list                                          │
//! │  Err(e)    → log, keep the previous list                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  loading = false   (once no other refresh is in flight)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;
use storefront_core::Thing;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::client::StorefrontApi;
use crate::error::ClientError;

/// What the home screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub loading: bool,
    pub popular: Vec<Thing>,
    pub catalog: Vec<Thing>,
}

impl Default for CatalogSnapshot {
    /// Nothing fetched yet, so the screen starts in its loading state.
    fn default() -> Self {
        CatalogSnapshot {
            loading: true,
            popular: Vec::new(),
            catalog: Vec::new(),
        }
    }
}

/// Result of one refresh, per list.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub popular_error: Option<ClientError>,
    pub catalog_error: Option<ClientError>,
}

impl RefreshReport {
    /// True when both lists were replaced.
    pub fn is_complete(&self) -> bool {
        self.popular_error.is_none() && self.catalog_error.is_none()
    }
}

/// Fetches and holds the popular and catalog lists.
pub struct CatalogFetcher {
    api: Arc<dyn StorefrontApi>,
    state: RwLock<CatalogSnapshot>,
    in_flight: AtomicUsize,
}

impl CatalogFetcher {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        CatalogFetcher {
            api,
            state: RwLock::new(CatalogSnapshot::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Fetches both lists concurrently.
    ///
    /// Each list is replaced only if its own request succeeded. Failures are
    /// logged and returned in the report; they never propagate.
    ///
    /// Overlapping refreshes keep `loading` set until the last one lands.
    pub async fn refresh(&self) -> RefreshReport {
        {
            let mut state = self.state.write().await;
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            state.loading = true;
        }

        let (popular, catalog) = tokio::join!(self.api.fetch_popular(), self.api.fetch_catalog());

        let mut report = RefreshReport::default();
        let mut state = self.state.write().await;

        match popular {
            Ok(things) => state.popular = things,
            Err(e) => {
                error!(error = %e, "Failed to load popular items");
                report.popular_error = Some(e);
            }
        }

        match catalog {
            Ok(things) => state.catalog = things,
            Err(e) => {
                error!(error = %e, "Failed to load catalog");
                report.catalog_error = Some(e);
            }
        }

        state.loading = self.in_flight.fetch_sub(1, Ordering::SeqCst) > 1;
        info!(
            popular = state.popular.len(),
            catalog = state.catalog.len(),
            "Catalog refreshed"
        );

        report
    }

    /// Current lists and loading flag.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.state.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Looks an item up in either list (popular first).
    pub async fn find(&self, id: &str) -> Option<Thing> {
        let state = self.state.read().await;
        state
            .popular
            .iter()
            .chain(state.catalog.iter())
            .find(|t| t.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientResult;
    use crate::gallery::PickedImage;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use storefront_core::{RawPrice, UploadedImage};
    use tokio::sync::Semaphore;

    fn thing(id: &str) -> Thing {
        Thing {
            id: id.to_string(),
            name: format!("Thing {}", id),
            price: RawPrice::Number(10.0),
            description: String::new(),
            image: String::new(),
        }
    }

    /// Serves queued responses per list and records which list landed first.
    #[derive(Default)]
    struct ScriptedApi {
        popular: Mutex<Vec<ClientResult<Vec<Thing>>>>,
        catalog: Mutex<Vec<ClientResult<Vec<Thing>>>>,
        catalog_first: bool,
        landed: Mutex<Vec<&'static str>>,
    }

    async fn lag() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    fn down(endpoint: &str) -> ClientError {
        ClientError::Status {
            endpoint: endpoint.to_string(),
            status: 500,
        }
    }

    #[async_trait]
    impl StorefrontApi for ScriptedApi {
        async fn fetch_popular(&self) -> ClientResult<Vec<Thing>> {
            if self.catalog_first {
                lag().await;
            }
            self.landed.lock().unwrap().push("popular");
            self.popular.lock().unwrap().remove(0)
        }

        async fn fetch_catalog(&self) -> ClientResult<Vec<Thing>> {
            if !self.catalog_first {
                lag().await;
            }
            self.landed.lock().unwrap().push("catalog");
            self.catalog.lock().unwrap().remove(0)
        }

        async fn fetch_uploads(&self) -> ClientResult<Vec<UploadedImage>> {
            Ok(Vec::new())
        }

        async fn upload_image(&self, _image: &PickedImage) -> ClientResult<UploadedImage> {
            Err(down("uploads"))
        }
    }

    #[tokio::test]
    async fn test_starts_loading_and_fills_both_lists() {
        let api = ScriptedApi::default();
        api.popular.lock().unwrap().push(Ok(vec![thing("1")]));
        api.catalog
            .lock()
            .unwrap()
            .push(Ok(vec![thing("2"), thing("3")]));

        let fetcher = CatalogFetcher::new(Arc::new(api));
        assert!(fetcher.is_loading().await);

        let report = fetcher.refresh().await;
        assert!(report.is_complete());

        let snapshot = fetcher.snapshot().await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.popular.len(), 1);
        assert_eq!(snapshot.catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_one_failure_keeps_other_list_and_clears_loading() {
        let api = ScriptedApi::default();
        api.popular.lock().unwrap().push(Err(down("popular")));
        api.catalog.lock().unwrap().push(Ok(vec![thing("2")]));

        let fetcher = CatalogFetcher::new(Arc::new(api));
        let report = fetcher.refresh().await;

        assert!(report.popular_error.is_some());
        assert!(report.catalog_error.is_none());

        let snapshot = fetcher.snapshot().await;
        assert!(!snapshot.loading);
        assert!(snapshot.popular.is_empty());
        assert_eq!(snapshot.catalog.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_lists() {
        let api = ScriptedApi::default();
        {
            let mut popular = api.popular.lock().unwrap();
            popular.push(Ok(vec![thing("1")]));
            popular.push(Err(down("popular")));
            let mut catalog = api.catalog.lock().unwrap();
            catalog.push(Ok(vec![thing("2")]));
            catalog.push(Err(down("catalog")));
        }

        let fetcher = CatalogFetcher::new(Arc::new(api));
        fetcher.refresh().await;
        let report = fetcher.refresh().await;
        assert!(!report.is_complete());

        let snapshot = fetcher.snapshot().await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.popular, vec![thing("1")]);
        assert_eq!(snapshot.catalog, vec![thing("2")]);
    }

    #[tokio::test]
    async fn test_find_searches_both_lists() {
        let api = ScriptedApi::default();
        api.popular.lock().unwrap().push(Ok(vec![thing("1")]));
        api.catalog.lock().unwrap().push(Ok(vec![thing("2")]));

        let fetcher = CatalogFetcher::new(Arc::new(api));
        fetcher.refresh().await;

        assert_eq!(fetcher.find("2").await, Some(thing("2")));
        assert_eq!(fetcher.find("1").await, Some(thing("1")));
        assert_eq!(fetcher.find("9").await, None);
    }

    #[tokio::test]
    async fn test_either_completion_order_applies_both_lists() {
        for catalog_first in [false, true] {
            let api = Arc::new(ScriptedApi {
                catalog_first,
                ..ScriptedApi::default()
            });
            api.popular.lock().unwrap().push(Ok(vec![thing("1")]));
            api.catalog.lock().unwrap().push(Err(down("catalog")));

            let fetcher = CatalogFetcher::new(api.clone());
            let report = fetcher.refresh().await;

            let expected_first = if catalog_first { "catalog" } else { "popular" };
            assert_eq!(api.landed.lock().unwrap()[0], expected_first);
            assert!(report.catalog_error.is_some());

            let snapshot = fetcher.snapshot().await;
            assert!(!snapshot.loading);
            assert_eq!(snapshot.popular, vec![thing("1")]);
            assert!(snapshot.catalog.is_empty());
        }
    }

    /// Popular answers at once; each catalog request waits for a permit.
    struct GatedApi {
        gate: Semaphore,
        catalog_calls: AtomicUsize,
    }

    #[async_trait]
    impl StorefrontApi for GatedApi {
        async fn fetch_popular(&self) -> ClientResult<Vec<Thing>> {
            Ok(vec![thing("1")])
        }

        async fn fetch_catalog(&self) -> ClientResult<Vec<Thing>> {
            let n = self.catalog_calls.fetch_add(1, Ordering::SeqCst);
            self.gate.acquire().await.unwrap().forget();
            Ok(vec![thing(&format!("c{}", n))])
        }

        async fn fetch_uploads(&self) -> ClientResult<Vec<UploadedImage>> {
            Ok(Vec::new())
        }

        async fn upload_image(&self, _image: &PickedImage) -> ClientResult<UploadedImage> {
            Err(down("uploads"))
        }
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_stay_loading_until_last_lands() {
        let api = Arc::new(GatedApi {
            gate: Semaphore::new(0),
            catalog_calls: AtomicUsize::new(0),
        });
        let fetcher = Arc::new(CatalogFetcher::new(api.clone()));

        let first = tokio::spawn({
            let fetcher = Arc::clone(&fetcher);
            async move { fetcher.refresh().await }
        });
        let second = tokio::spawn({
            let fetcher = Arc::clone(&fetcher);
            async move { fetcher.refresh().await }
        });

        while api.catalog_calls.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }

        api.gate.add_permits(1);
        while fetcher.snapshot().await.catalog.is_empty() {
            tokio::task::yield_now().await;
        }
        assert!(fetcher.is_loading().await);

        api.gate.add_permits(1);
        assert!(first.await.unwrap().is_complete());
        assert!(second.await.unwrap().is_complete());
        assert!(!fetcher.is_loading().await);
    }
}
