//! # State Module
//!
//! Manages application state for the storefront screens.
//!
//! ## One State Type per Screen
//! Commands declare exactly the state they need, and independent states
//! don't block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppState (lib.rs)                          │   │
//! │  │  built once at startup around one Arc<dyn StorefrontApi>        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌───────────────┬───────┴────────┬──────────────────┐              │
//! │      ▼               ▼                ▼                  ▼              │
//! │  ┌──────────┐  ┌────────────┐  ┌──────────────┐  ┌─────────────┐       │
//! │  │CartState │  │ HomeState  │  │ GalleryState │  │ ConfigState │       │
//! │  │          │  │            │  │              │  │             │       │
//! │  │Arc<Mutex<│  │ catalog    │  │ uploads      │  │ store_name  │       │
//! │  │  Cart>>  │  │ selected   │  │ loading      │  │ currency    │       │
//! │  │ + watch  │  │ (RwLock)   │  │ (RwLock)     │  │             │       │
//! │  └──────────┘  └────────────┘  └──────────────┘  └─────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: Arc<Mutex<T>> for exclusive access                       │
//! │  • HomeState / GalleryState: tokio RwLock, never held across requests  │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod gallery;
mod home;

pub use cart::{CartSnapshot, CartState};
pub use config::{ConfigState, SymbolPosition};
pub use gallery::GalleryState;
pub use home::HomeState;
