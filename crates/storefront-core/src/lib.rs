//! # storefront-core: Pure Domain Logic for the Storefront
//!
//! This crate holds the cart and pricing rules as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (UI layer)                           │   │
//! │  │        Home ──► Details ──► Cart            Gallery             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    add_thing_to_cart, update_cart_item, upload_photo, ...       │   │
//! │  └──────────────┬─────────────────────────────────┬────────────────┘   │
//! │                 │                                 │                     │
//! │  ┌──────────────▼──────────────────┐  ┌───────────▼─────────────────┐  │
//! │  │  ★ storefront-core (THIS) ★     │  │  storefront-api             │  │
//! │  │                                 │  │  HTTP client, catalog,      │  │
//! │  │  types · money · cart · valid.  │  │  gallery uploads            │  │
//! │  │  NO I/O • PURE FUNCTIONS        │  └─────────────────────────────┘  │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire and domain types (Thing, UploadedImage, CartItem)
//! - [`money`] - Money type and price normalization
//! - [`cart`] - The cart store and tolerant totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, CartItemPayload, Money, RawPrice};
//!
//! let mut cart = Cart::new();
//! cart.add(CartItemPayload {
//!     id: "A".into(),
//!     name: "Coat".into(),
//!     price: RawPrice::Number(100.0),
//!     image: String::new(),
//!     quantity: Some(1),
//! })?;
//! cart.add(CartItemPayload {
//!     id: "B".into(),
//!     name: "Hat".into(),
//!     price: RawPrice::Text("50".into()),
//!     image: String::new(),
//!     quantity: Some(2),
//! })?;
//!
//! assert_eq!(cart.total_price(), Money::from_major(200));
//! # Ok::<(), storefront_core::CoreError>(())
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use cart::{total_price, Cart, CartTotals, PricedLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

/// Maximum quantity of a single cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
