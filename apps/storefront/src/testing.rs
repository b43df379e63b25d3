//! In-memory backend and media library for command tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use storefront_api::{ClientError, ClientResult, MediaLibrary, Permission, PickedImage, StorefrontApi};
use storefront_core::{RawPrice, Thing, UploadedImage};

pub struct FakeApi {
    pub popular: Vec<Thing>,
    pub catalog: Vec<Thing>,
    pub uploads: Vec<UploadedImage>,
    catalog_fails: bool,
    upload_status: Option<u16>,
    uploads_unreachable: bool,
    next_id: AtomicI64,
}

fn thing(id: &str, name: &str, price: RawPrice, description: &str) -> Thing {
    Thing {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
        image: format!("https://img.example/{}.jpg", id),
    }
}

fn image(id: i64, file_name: &str) -> UploadedImage {
    UploadedImage {
        id,
        url: format!("https://cdn.example/{}", file_name),
        format: "jpg".to_string(),
        bytes: 2048,
        file_name: file_name.to_string(),
        height: Some(600),
        width: Some(800),
    }
}

impl FakeApi {
    /// One popular item, two catalog items, one uploaded photo.
    pub fn stocked() -> Self {
        FakeApi {
            popular: vec![thing("1", "Coat", RawPrice::Number(4999.0), "Warm coat")],
            catalog: vec![
                thing("2", "Hat", RawPrice::Text("1,000".into()), "Red wool hat"),
                thing("3", "Scarf", RawPrice::Number(250.5), "Long scarf"),
            ],
            uploads: vec![image(1, "first.jpg")],
            catalog_fails: false,
            upload_status: None,
            uploads_unreachable: false,
            next_id: AtomicI64::new(100),
        }
    }

    pub fn with_failing_catalog(mut self) -> Self {
        self.catalog_fails = true;
        self
    }

    pub fn with_upload_status(mut self, status: u16) -> Self {
        self.upload_status = Some(status);
        self
    }

    pub fn with_unreachable_uploads(mut self) -> Self {
        self.uploads_unreachable = true;
        self
    }
}

#[async_trait]
impl StorefrontApi for FakeApi {
    async fn fetch_popular(&self) -> ClientResult<Vec<Thing>> {
        Ok(self.popular.clone())
    }

    async fn fetch_catalog(&self) -> ClientResult<Vec<Thing>> {
        if self.catalog_fails {
            return Err(ClientError::Status {
                endpoint: "catalog".into(),
                status: 502,
            });
        }
        Ok(self.catalog.clone())
    }

    async fn fetch_uploads(&self) -> ClientResult<Vec<UploadedImage>> {
        Ok(self.uploads.clone())
    }

    async fn upload_image(&self, picked: &PickedImage) -> ClientResult<UploadedImage> {
        if self.uploads_unreachable {
            return Err(ClientError::Request {
                endpoint: "uploads".into(),
                reason: "connection refused".into(),
            });
        }
        if let Some(status) = self.upload_status {
            return Err(ClientError::Status {
                endpoint: "uploads".into(),
                status,
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(image(id, picked.file_name()))
    }
}

pub struct FakeMedia {
    permission: Permission,
    picked: Option<PickedImage>,
}

impl FakeMedia {
    pub fn picking(uri: &str) -> Self {
        FakeMedia {
            permission: Permission::Granted,
            picked: Some(PickedImage::new(uri, vec![0xFF, 0xD8, 0xFF])),
        }
    }

    pub fn denied() -> Self {
        FakeMedia {
            permission: Permission::Denied,
            picked: None,
        }
    }

    pub fn cancelled() -> Self {
        FakeMedia {
            permission: Permission::Granted,
            picked: None,
        }
    }
}

#[async_trait]
impl MediaLibrary for FakeMedia {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn pick_image(&self) -> Option<PickedImage> {
        self.picked.clone()
    }
}
