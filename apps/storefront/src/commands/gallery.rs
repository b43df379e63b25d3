//! # Gallery Commands
//!
//! Listing uploaded photos and adding a new one from the device.
//!
//! ## Upload Alerts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Outcome              Alert shown                                      │
//! │  ───────              ───────────                                      │
//! │  PermissionDenied     "Permission to access your gallery is required." │
//! │  Cancelled            (none, logged only)                              │
//! │  Uploaded             "Photo added successfully!"                      │
//! │  Rejected             "Could not add the photo"                        │
//! │  Failed               "An error occurred while adding the photo"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_api::{GallerySnapshot, MediaLibrary, UploadOutcome};
use storefront_core::UploadedImage;
use tracing::debug;

use crate::state::GalleryState;

pub const PERMISSION_REQUIRED: &str = "Permission to access your gallery is required.";
pub const UPLOAD_SUCCEEDED: &str = "Photo added successfully!";
pub const UPLOAD_REJECTED: &str = "Could not add the photo";
pub const UPLOAD_FAILED: &str = "An error occurred while adding the photo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Warning,
    Error,
}

/// A message the screen pops up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    fn new(kind: AlertKind, message: &str) -> Self {
        Alert {
            kind,
            message: message.to_string(),
        }
    }
}

/// Gallery list plus the alert for the last action, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryResponse {
    pub loading: bool,
    pub images: Vec<UploadedImage>,
    pub alert: Option<Alert>,
}

impl GalleryResponse {
    fn new(snapshot: GallerySnapshot, alert: Option<Alert>) -> Self {
        GalleryResponse {
            loading: snapshot.loading,
            images: snapshot.images,
            alert,
        }
    }
}

fn alert_for(outcome: &UploadOutcome) -> Option<Alert> {
    match outcome {
        UploadOutcome::PermissionDenied => Some(Alert::new(AlertKind::Warning, PERMISSION_REQUIRED)),
        UploadOutcome::Cancelled => None,
        UploadOutcome::Uploaded(_) => Some(Alert::new(AlertKind::Success, UPLOAD_SUCCEEDED)),
        UploadOutcome::Rejected(_) => Some(Alert::new(AlertKind::Error, UPLOAD_REJECTED)),
        UploadOutcome::Failed(_) => Some(Alert::new(AlertKind::Error, UPLOAD_FAILED)),
    }
}

/// Fetches the uploaded photos. A failed fetch is logged, not alerted.
pub async fn load_gallery(state: &GalleryState) -> GalleryResponse {
    debug!("load_gallery command");

    // Failure is already logged by the gallery
    let _ = state.gallery().load(state.api()).await;
    GalleryResponse::new(state.gallery().snapshot().await, None)
}

/// Runs the permission → picker → upload flow.
pub async fn upload_photo(state: &GalleryState, media: &dyn MediaLibrary) -> GalleryResponse {
    debug!("upload_photo command");

    let outcome = state.gallery().pick_and_upload(state.api(), media).await;
    let alert = alert_for(&outcome);
    GalleryResponse::new(state.gallery().snapshot().await, alert)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, FakeMedia};
    use std::sync::Arc;

    fn gallery_with(api: FakeApi) -> GalleryState {
        GalleryState::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_load_gallery() {
        let state = gallery_with(FakeApi::stocked());

        let response = load_gallery(&state).await;
        assert!(!response.loading);
        assert_eq!(response.images.len(), 1);
        assert_eq!(response.alert, None);
    }

    #[tokio::test]
    async fn test_successful_upload_appends_and_alerts() {
        let state = gallery_with(FakeApi::stocked());
        load_gallery(&state).await;

        let response = upload_photo(&state, &FakeMedia::picking("file:///dcim/cat.jpg")).await;
        assert_eq!(
            response.alert,
            Some(Alert::new(AlertKind::Success, UPLOAD_SUCCEEDED))
        );
        assert_eq!(response.images.len(), 2);
        assert_eq!(response.images[1].file_name, "cat.jpg");
    }

    #[tokio::test]
    async fn test_denied_permission_alerts_without_upload() {
        let state = gallery_with(FakeApi::stocked());

        let response = upload_photo(&state, &FakeMedia::denied()).await;
        assert_eq!(response.alert.unwrap().message, PERMISSION_REQUIRED);
        assert!(response.images.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_picker_is_silent() {
        let state = gallery_with(FakeApi::stocked());

        let response = upload_photo(&state, &FakeMedia::cancelled()).await;
        assert_eq!(response.alert, None);
    }

    #[tokio::test]
    async fn test_rejected_and_failed_uploads() {
        let state = gallery_with(FakeApi::stocked().with_upload_status(500));
        let response = upload_photo(&state, &FakeMedia::picking("file:///a.jpg")).await;
        assert_eq!(response.alert.unwrap().message, UPLOAD_REJECTED);
        assert!(!response.loading);

        let state = gallery_with(FakeApi::stocked().with_unreachable_uploads());
        let response = upload_photo(&state, &FakeMedia::picking("file:///a.jpg")).await;
        assert_eq!(response.alert.unwrap().kind, AlertKind::Error);
        assert_eq!(response.images.len(), 0);
    }
}
