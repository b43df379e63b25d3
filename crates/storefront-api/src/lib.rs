//! # storefront-api: Remote API Layer for the Storefront
//!
//! Everything that crosses the network: the backend client, the catalog
//! lists on the home screen, and photo uploads for the gallery.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        storefront-api                                   │
//! │                                                                         │
//! │  ┌────────────────┐        ┌──────────────────────────────────────┐    │
//! │  │  ClientConfig  │───────►│  HttpClient  (impl StorefrontApi)    │    │
//! │  │  TOML + env    │        │  reqwest, JSON + multipart           │    │
//! │  └────────────────┘        └──────────────────┬───────────────────┘    │
//! │                                               │ Arc<dyn StorefrontApi>  │
//! │                         ┌─────────────────────┴──────────────┐          │
//! │                         ▼                                    ▼          │
//! │  ┌──────────────────────────────────┐  ┌──────────────────────────────┐ │
//! │  │  CatalogFetcher                  │  │  Gallery                     │ │
//! │  │  popular + catalog, loading flag │  │  uploads list, loading flag  │ │
//! │  │  concurrent refresh              │  │  permission → pick → upload  │ │
//! │  └──────────────────────────────────┘  └──────────────┬───────────────┘ │
//! │                                                       │                 │
//! │                                        MediaLibrary (host-provided)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`client`] - `StorefrontApi` trait and its reqwest implementation
//! - [`catalog`] - Home screen lists
//! - [`gallery`] - Photo list and uploads
//! - [`config`] - Base URL and timeout configuration
//! - [`error`] - Client error types

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod gallery;

pub use catalog::{CatalogFetcher, CatalogSnapshot, RefreshReport};
pub use client::{HttpClient, StorefrontApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gallery::{Gallery, GallerySnapshot, MediaLibrary, Permission, PickedImage, UploadOutcome};
