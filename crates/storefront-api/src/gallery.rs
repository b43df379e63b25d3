//! # Gallery Uploader
//!
//! Lists uploaded photos and adds new ones from the device media library.
//!
//! ## Upload Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      pick_and_upload(api, media)                        │
//! │                                                                         │
//! │  request_permission() ── Denied ──────────────► PermissionDenied        │
//! │         │ Granted                                                       │
//! │         ▼                                                               │
//! │  pick_image() ────────── None ────────────────► Cancelled               │
//! │         │ Some(image)                                                   │
//! │         ▼                                                               │
//! │  loading = true                                                         │
//! │  POST /uploads (field "file", image/jpeg)                               │
//! │         │                                                               │
//! │         ├── 2xx ──► append record ────────────► Uploaded(record)        │
//! │         ├── non-2xx ──────────────────────────► Rejected(err)           │
//! │         └── transport / decode ───────────────► Failed(err)             │
//! │  loading = false   (once nothing else is in flight)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::Serialize;
use storefront_core::UploadedImage;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::client::StorefrontApi;
use crate::error::ClientError;

/// Content type every picked photo is uploaded with.
pub const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";

// =============================================================================
// Picked Image
// =============================================================================

/// A photo chosen from the media library, ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    uri: String,
    bytes: Vec<u8>,
}

impl PickedImage {
    pub fn new(uri: impl Into<String>, bytes: Vec<u8>) -> Self {
        PickedImage {
            uri: uri.into(),
            bytes,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Last `/`-separated segment of the URI.
    pub fn file_name(&self) -> &str {
        self.uri.rsplit('/').next().unwrap_or(&self.uri)
    }

    pub fn content_type(&self) -> &str {
        UPLOAD_CONTENT_TYPE
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// =============================================================================
// Media Library
// =============================================================================

/// Answer to a media-library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// The device's photo library, provided by the host platform.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Asks the user for access to their photos.
    async fn request_permission(&self) -> Permission;

    /// Opens the picker. `None` when the user backs out.
    async fn pick_image(&self) -> Option<PickedImage>;
}

// =============================================================================
// Gallery
// =============================================================================

/// What happened to one upload attempt.
#[derive(Debug)]
pub enum UploadOutcome {
    PermissionDenied,
    Cancelled,
    Uploaded(UploadedImage),
    /// The backend answered with a non-success status.
    Rejected(ClientError),
    /// The request failed before a usable answer came back.
    Failed(ClientError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySnapshot {
    pub loading: bool,
    pub images: Vec<UploadedImage>,
}

/// Uploaded images and the loading flag the gallery screen shows.
///
/// The screen starts in its loading state. The flag clears once no load or
/// upload is in flight.
#[derive(Debug)]
pub struct Gallery {
    state: RwLock<GallerySnapshot>,
    in_flight: AtomicUsize,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    pub fn new() -> Self {
        Gallery {
            state: RwLock::new(GallerySnapshot {
                loading: true,
                images: Vec::new(),
            }),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Replaces the list with `GET /uploads`.
    ///
    /// On failure the previous list is kept and the error is returned for
    /// the caller to log.
    pub async fn load(&self, api: &dyn StorefrontApi) -> Result<usize, ClientError> {
        self.begin().await;
        let result = api.fetch_uploads().await;

        let mut state = self.state.write().await;
        state.loading = self.finish();
        match result {
            Ok(images) => {
                state.images = images;
                info!(count = state.images.len(), "Gallery loaded");
                Ok(state.images.len())
            }
            Err(e) => {
                error!(error = %e, "Failed to load gallery");
                Err(e)
            }
        }
    }

    /// Asks for permission, lets the user pick a photo and uploads it.
    pub async fn pick_and_upload(
        &self,
        api: &dyn StorefrontApi,
        media: &dyn MediaLibrary,
    ) -> UploadOutcome {
        if media.request_permission().await == Permission::Denied {
            warn!("Media library permission denied");
            return UploadOutcome::PermissionDenied;
        }

        let image = match media.pick_image().await {
            Some(image) => image,
            None => {
                info!("Image picker cancelled");
                return UploadOutcome::Cancelled;
            }
        };

        self.begin().await;
        let result = api.upload_image(&image).await;

        let mut state = self.state.write().await;
        state.loading = self.finish();
        match result {
            Ok(record) => {
                info!(id = record.id, file_name = %record.file_name, "Photo uploaded");
                state.images.push(record.clone());
                UploadOutcome::Uploaded(record)
            }
            Err(e) if e.is_rejection() => {
                error!(error = %e, "Upload rejected");
                UploadOutcome::Rejected(e)
            }
            Err(e) => {
                error!(error = %e, "Upload failed");
                UploadOutcome::Failed(e)
            }
        }
    }

    pub async fn snapshot(&self) -> GallerySnapshot {
        self.state.read().await.clone()
    }

    async fn begin(&self) {
        let mut state = self.state.write().await;
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        state.loading = true;
    }

    /// Returns whether another request is still running.
    fn finish(&self) -> bool {
        self.in_flight.fetch_sub(1, Ordering::SeqCst) > 1
    }
}
