//! # Home State
//!
//! The home screen's lists plus the item open in the details view.

use std::sync::Arc;

use storefront_api::{CatalogFetcher, StorefrontApi};
use storefront_core::Thing;
use tokio::sync::RwLock;

/// Managed home screen state.
pub struct HomeState {
    catalog: CatalogFetcher,
    selected: RwLock<Option<Thing>>,
}

impl HomeState {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        HomeState {
            catalog: CatalogFetcher::new(api),
            selected: RwLock::new(None),
        }
    }

    pub fn catalog(&self) -> &CatalogFetcher {
        &self.catalog
    }

    /// Opens the details view for `id`. Returns the item, or `None` (and
    /// leaves the current selection alone) if it is not in either list.
    pub async fn select(&self, id: &str) -> Option<Thing> {
        let thing = self.catalog.find(id).await?;
        *self.selected.write().await = Some(thing.clone());
        Some(thing)
    }

    pub async fn close_details(&self) {
        *self.selected.write().await = None;
    }

    pub async fn selected(&self) -> Option<Thing> {
        self.selected.read().await.clone()
    }
}
