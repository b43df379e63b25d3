//! # Screen Commands Module
//!
//! All commands the storefront screens call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── home.rs     ◄─── Popular/catalog lists, details view, add to cart
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── gallery.rs  ◄─── Photo list and uploads
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Screen                                                                 │
//! │  ──────                                                                 │
//! │  tap "+" on a cart line                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::increase_quantity(                                     │
//! │      &app.cart,      ◄── only the state it needs                       │
//! │      &app.config,                                                       │
//! │      id,             ◄── from the screen                               │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde JSON)                                                  │
//! │         ▼                                                               │
//! │  Screen re-renders from CartResponse                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Network failures stop at the screen boundary: home logs them, gallery
//! turns them into alerts. `ApiError` is only returned for bad input.

pub mod cart;
pub mod config;
pub mod gallery;
pub mod home;
