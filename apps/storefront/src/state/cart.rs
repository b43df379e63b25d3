//! # Cart State
//!
//! Owns the process-wide cart and tells subscribers when it changes.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Home and cart screens both mutate it
//! 2. Only one command should modify the cart at a time
//! 3. Commands can run concurrently on the runtime
//!
//! ## Subscription
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Updates                                   │
//! │                                                                         │
//! │  Screen Action           Command                 Cart Change            │
//! │  ─────────────           ───────                 ───────────            │
//! │                                                                         │
//! │  "Add to cart" ────────► add_thing_to_cart() ──► add / merge           │
//! │  "+" / "-" ────────────► increase / decrease ──► qty ± 1               │
//! │  Edit quantity ────────► update_cart_item() ───► qty = n               │
//! │  "Remove" ─────────────► remove_from_cart() ───► retain(id != x)       │
//! │                                                                         │
//! │                 with_cart_mut()                                         │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │           watch::Sender<CartSnapshot> ──► every subscribe()r sees the   │
//! │           (only when something changed)   latest items + totals         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;
use storefront_core::{Cart, CartItem, CartTotals};
use tokio::sync::watch;
use tracing::trace;

/// Items and totals as of the last cart change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

impl Default for CartSnapshot {
    fn default() -> Self {
        CartSnapshot::from(&Cart::new())
    }
}

/// Managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them write.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    updates: watch::Sender<CartSnapshot>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        let (updates, _) = watch::channel(CartSnapshot::default());
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            updates,
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart, then notifies
    /// subscribers if the cart changed.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(payload))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        let result = f(&mut cart);

        let next = CartSnapshot::from(&*cart);
        let changed = self.updates.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            trace!("Cart snapshot published");
        }

        result
    }

    /// Current items and totals.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|c| CartSnapshot::from(c))
    }

    /// Receives a fresh snapshot after every cart change.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.updates.subscribe()
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CartItemPayload, Money, RawPrice};

    fn payload(id: &str, price: f64, quantity: i64) -> CartItemPayload {
        CartItemPayload {
            id: id.to_string(),
            name: format!("Item {}", id),
            price: RawPrice::Number(price),
            image: String::new(),
            quantity: Some(quantity),
        }
    }

    #[test]
    fn test_with_cart_mut_returns_closure_result() {
        let state = CartState::new();

        let result = state.with_cart_mut(|c| c.add(payload("a", 10.0, 2)));
        assert!(result.is_ok());
        assert_eq!(state.with_cart(|c| c.total_price()), Money::from_major(20));
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let state = CartState::new();
        let mut rx = state.subscribe();
        assert!(rx.borrow().items.is_empty());

        state
            .with_cart_mut(|c| c.add(payload("a", 100.0, 1)))
            .unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().totals.total, Money::from_major(100));

        state.with_cart_mut(|c| c.remove("a"));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().items.is_empty());
    }

    #[test]
    fn test_no_op_mutation_does_not_notify() {
        let state = CartState::new();
        state
            .with_cart_mut(|c| c.add(payload("a", 1.0, 1)))
            .unwrap();

        let rx = state.subscribe();
        state.with_cart_mut(|c| c.remove("ghost"));
        state.with_cart_mut(|c| c.decrease("a"));

        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_snapshot_matches_cart() {
        let state = CartState::new();
        state
            .with_cart_mut(|c| c.add(payload("a", 9.99, 2)))
            .unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.totals.total_quantity, 2);
        assert_eq!(snapshot.totals.total, Money::from_cents(1998));
    }
}
