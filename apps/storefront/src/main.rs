//! # Storefront Entry Point
//!
//! Headless boot: loads configuration, builds the managed state and runs
//! the initial home and gallery loads. Screens embed the library instead.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load backend configuration
//! 3. Create state objects (Cart, Home, Gallery, Config)
//! 4. Fetch popular, catalog and uploads

use tracing::error;

#[tokio::main]
async fn main() {
    storefront_app_lib::init_tracing();

    if let Err(e) = storefront_app_lib::run().await {
        error!(code = ?e.code, "Startup failed: {}", e.message);
        std::process::exit(1);
    }
}
