//! # Gallery State
//!
//! Pairs the gallery list with the backend it uploads to.

use std::sync::Arc;

use storefront_api::{Gallery, StorefrontApi};

/// Managed gallery screen state.
pub struct GalleryState {
    api: Arc<dyn StorefrontApi>,
    gallery: Gallery,
}

impl GalleryState {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        GalleryState {
            api,
            gallery: Gallery::new(),
        }
    }

    pub fn api(&self) -> &dyn StorefrontApi {
        self.api.as_ref()
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }
}
