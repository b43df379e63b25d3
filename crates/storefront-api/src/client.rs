//! # Storefront API Client
//!
//! The four calls the storefront makes against its backend.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path        Body                  Response                     │
//! │  ──────  ────        ────                  ────────                     │
//! │  GET     /popular    -                     [Thing]                      │
//! │  GET     /catalog    -                     [Thing]                      │
//! │  GET     /uploads    -                     [UploadedImage]              │
//! │  POST    /uploads    multipart, "file"     UploadedImage                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requests are unauthenticated and never retried.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use storefront_core::{Thing, UploadedImage};
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::gallery::PickedImage;

pub const POPULAR_PATH: &str = "popular";
pub const CATALOG_PATH: &str = "catalog";
pub const UPLOADS_PATH: &str = "uploads";

/// Multipart field name the backend reads the photo from.
pub const UPLOAD_FIELD: &str = "file";

/// The storefront backend as seen by the rest of the app.
///
/// Implemented over HTTP by [`HttpClient`]; screens and tests can supply
/// their own implementation.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /popular`
    async fn fetch_popular(&self) -> ClientResult<Vec<Thing>>;

    /// `GET /catalog`
    async fn fetch_catalog(&self) -> ClientResult<Vec<Thing>>;

    /// `GET /uploads`
    async fn fetch_uploads(&self) -> ClientResult<Vec<UploadedImage>>;

    /// `POST /uploads` with the image as multipart field `file`.
    async fn upload_image(&self, image: &PickedImage) -> ClientResult<UploadedImage>;
}

/// reqwest-backed implementation of [`StorefrontApi`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
    client: Client,
}

impl HttpClient {
    /// Creates a client after validating the configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.config.endpoint(path)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(path, e))?;

        decode(path, response).await
    }
}

#[async_trait]
impl StorefrontApi for HttpClient {
    async fn fetch_popular(&self) -> ClientResult<Vec<Thing>> {
        self.get_json(POPULAR_PATH).await
    }

    async fn fetch_catalog(&self) -> ClientResult<Vec<Thing>> {
        self.get_json(CATALOG_PATH).await
    }

    async fn fetch_uploads(&self) -> ClientResult<Vec<UploadedImage>> {
        self.get_json(UPLOADS_PATH).await
    }

    async fn upload_image(&self, image: &PickedImage) -> ClientResult<UploadedImage> {
        let url = self.config.endpoint(UPLOADS_PATH)?;
        debug!(%url, file_name = %image.file_name(), bytes = image.len(), "POST multipart");

        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.content_type())
            .map_err(|e| ClientError::from_reqwest(UPLOADS_PATH, e))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(UPLOADS_PATH, e))?;

        decode(UPLOADS_PATH, response).await
    }
}

/// Checks the status and decodes a JSON body.
async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        error!(endpoint, status = status.as_u16(), "Backend returned an error status");
        return Err(ClientError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ClientError::from_reqwest(endpoint, e))?;

    serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
