//! # Cart Commands
//!
//! Commands behind the cart screen.
//!
//! ## Cart Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart                                                                   │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  [img]  Coat                 4999.00 ₽                          │    │
//! │  │         [-]  2  [+]                           [Remove]          │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  [img]  Hat                  1000.00 ₽                          │    │
//! │  │         [-]  1  [+]                           [Remove]          │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Total: 10998.00 ₽                                              │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  [-] ──► decrease_quantity     [+] ──► increase_quantity                │
//! │  [Remove] ──► remove_from_cart                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the whole cart so the screen can re-render
//! from one value.

use serde::Serialize;
use storefront_core::{CartItem, CartItemPayload, CartTotals};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartSnapshot, CartState, ConfigState};

/// Cart response including items, totals and the formatted total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub formatted_total: String,
}

impl CartResponse {
    pub fn new(snapshot: CartSnapshot, config: &ConfigState) -> Self {
        let formatted_total = config.format_money(snapshot.totals.total);
        CartResponse {
            items: snapshot.items,
            totals: snapshot.totals,
            formatted_total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn respond(cart: &CartState, config: &ConfigState) -> CartResponse {
    CartResponse::new(cart.snapshot(), config)
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    respond(cart, config)
}

/// Adds a payload to the cart, merging with an existing line of the same id.
///
/// ## Arguments
/// * `payload` - Item to add; a missing quantity means 1
pub fn add_to_cart(
    cart: &CartState,
    config: &ConfigState,
    payload: CartItemPayload,
) -> Result<CartResponse, ApiError> {
    debug!(id = %payload.id, quantity = ?payload.quantity, "add_to_cart command");

    cart.with_cart_mut(|c| c.add(payload))?;
    Ok(respond(cart, config))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity outside 1..=999: validation error, cart unchanged
/// - Unknown id: no-op
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(id = %id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| c.update_quantity(&id, quantity))?;
    Ok(respond(cart, config))
}

/// The "+" button.
pub fn increase_quantity(
    cart: &CartState,
    config: &ConfigState,
    id: String,
) -> Result<CartResponse, ApiError> {
    debug!(id = %id, "increase_quantity command");

    cart.with_cart_mut(|c| c.increase(&id))?;
    Ok(respond(cart, config))
}

/// The "-" button. Stops at 1; use [`remove_from_cart`] to drop a line.
pub fn decrease_quantity(cart: &CartState, config: &ConfigState, id: String) -> CartResponse {
    debug!(id = %id, "decrease_quantity command");

    cart.with_cart_mut(|c| c.decrease(&id));
    respond(cart, config)
}

/// Removes a line from the cart. Unknown ids are ignored.
pub fn remove_from_cart(cart: &CartState, config: &ConfigState, id: String) -> CartResponse {
    debug!(id = %id, "remove_from_cart command");

    cart.with_cart_mut(|c| c.remove(&id));
    respond(cart, config)
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| c.clear());
    respond(cart, config)
}
