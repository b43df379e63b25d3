//! # Storefront App Library
//!
//! Application shell for the storefront: managed state, screen commands,
//! and startup.
//!
//! ## Module Organization
//! ```text
//! storefront_app_lib/
//! ├── lib.rs          ◄─── You are here (AppState, tracing, startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state + change subscription
//! │   ├── home.rs     ◄─── Catalog lists + details selection
//! │   ├── gallery.rs  ◄─── Uploaded photos
//! │   └── config.rs   ◄─── Display configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── home.rs     ◄─── Home screen commands
//! │   ├── cart.rs     ◄─── Cart screen commands
//! │   ├── gallery.rs  ◄─── Gallery screen commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use storefront_api::{ClientConfig, HttpClient, StorefrontApi};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{CartState, ConfigState, GalleryState, HomeState};

/// Every managed state, built once at startup.
///
/// Home and gallery share one backend client.
pub struct AppState {
    pub cart: CartState,
    pub home: HomeState,
    pub gallery: GalleryState,
    pub config: ConfigState,
}

impl AppState {
    pub fn new(api: Arc<dyn StorefrontApi>, config: ConfigState) -> Self {
        AppState {
            cart: CartState::new(),
            home: HomeState::new(Arc::clone(&api)),
            gallery: GalleryState::new(api),
            config,
        }
    }

    /// Builds the state against the configured HTTP backend.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Load ClientConfig ── defaults ◄ storefront.toml ◄ STOREFRONT_API_*  │
    /// │  2. Build HttpClient  ── validates base URL and timeout                 │
    /// │  3. Load ConfigState  ── STOREFRONT_STORE_NAME                          │
    /// │  4. Create states     ── empty cart, home loading, empty gallery        │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn from_env() -> Result<Self, ApiError> {
        let client_config = ClientConfig::load(None)?;
        info!(base_url = %client_config.base_url, "Backend configured");

        let config = ConfigState::from_env().with_api_base_url(client_config.base_url.clone());
        let client = HttpClient::new(client_config)?;

        Ok(AppState::new(Arc::new(client), config))
    }
}

/// Boots the app headlessly: builds the state and performs the initial
/// loads the home and gallery screens do when first shown.
pub async fn run() -> Result<AppState, ApiError> {
    info!("Starting storefront");

    let app = AppState::from_env()?;

    let home = commands::home::load_home(&app.home).await;
    let gallery = commands::gallery::load_gallery(&app.gallery).await;

    info!(
        store = %app.config.store_name,
        popular = home.popular.len(),
        catalog = home.catalog.len(),
        photos = gallery.images.len(),
        "Storefront ready"
    );

    Ok(app)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_api=trace` - Trace the HTTP layer only
/// - Default: INFO, DEBUG for storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, FakeMedia};

    #[tokio::test]
    async fn test_screens_share_one_cart() {
        let app = AppState::new(Arc::new(FakeApi::stocked()), ConfigState::default());
        let mut updates = app.cart.subscribe();

        commands::home::load_home(&app.home).await;
        commands::home::add_thing_to_cart(&app.home, &app.cart, "2".into())
            .await
            .unwrap();

        updates.changed().await.unwrap();
        assert_eq!(updates.borrow_and_update().totals.total_quantity, 1);

        let cart = commands::cart::increase_quantity(&app.cart, &app.config, "2".into()).unwrap();
        assert_eq!(cart.formatted_total, "2000.00 ₽");
        assert!(updates.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_gallery_and_home_use_same_backend() {
        let app = AppState::new(Arc::new(FakeApi::stocked()), ConfigState::default());

        let gallery = commands::gallery::load_gallery(&app.gallery).await;
        assert_eq!(gallery.images.len(), 1);

        let gallery =
            commands::gallery::upload_photo(&app.gallery, &FakeMedia::picking("file:///x/y.jpg"))
                .await;
        assert_eq!(gallery.images.len(), 2);

        let home = commands::home::load_home(&app.home).await;
        assert_eq!(home.popular[0].name, "Coat");
    }
}
