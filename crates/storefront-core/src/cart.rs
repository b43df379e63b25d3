//! # Cart
//!
//! The authoritative list of cart lines and its derived totals.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  Operation            Effect                          Errors            │
//! │  ─────────            ──────                          ──────            │
//! │  add(payload)         push, or merge into same id     bad qty / id      │
//! │  remove(id)           drop every line with id         never             │
//! │  update_quantity()    set qty on line with id         bad qty           │
//! │  increase / decrease  ±1, never below 1               qty > 999         │
//! │  total_price()        Σ price × qty over valid lines  never             │
//! │                                                                         │
//! │  Unknown ids are silent no-ops (the boolean result says whether         │
//! │  anything changed).                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per id (adding an id already present merges quantities)
//! - Every quantity is within `1..=MAX_ITEM_QUANTITY`
//! - Lines keep insertion order

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartItem, CartItemPayload};
use crate::validation::{validate_item_id, validate_quantity};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Totals
// =============================================================================

/// Anything that can contribute `price × quantity` to a total.
///
/// Either side may be missing or malformed; such lines are skipped by
/// [`total_price`].
pub trait PricedLine {
    fn unit_price(&self) -> Option<Money>;
    fn quantity(&self) -> Option<i64>;
}

impl PricedLine for CartItem {
    fn unit_price(&self) -> Option<Money> {
        self.unit_price
    }

    fn quantity(&self) -> Option<i64> {
        Some(self.quantity)
    }
}

impl PricedLine for CartItemPayload {
    fn unit_price(&self) -> Option<Money> {
        self.price.to_money().ok()
    }

    fn quantity(&self) -> Option<i64> {
        self.quantity
    }
}

/// Sums `price × quantity` over every well-formed line.
///
/// A line is skipped when its price is missing or unparseable, when its
/// quantity is missing or not positive, or when its contribution would
/// overflow. Nothing here fails.
///
/// ```rust
/// use storefront_core::cart::total_price;
/// use storefront_core::types::{CartItemPayload, RawPrice};
///
/// let lines = vec![
///     CartItemPayload {
///         id: "a".into(), name: "A".into(), image: String::new(),
///         price: RawPrice::Number(10.0), quantity: Some(2),
///     },
///     CartItemPayload {
///         id: "b".into(), name: "B".into(), image: String::new(),
///         price: RawPrice::Text("1,000".into()), quantity: Some(1),
///     },
/// ];
/// assert_eq!(total_price(&lines).major(), 1020);
/// ```
pub fn total_price<'a, L, I>(lines: I) -> Money
where
    L: PricedLine + 'a,
    I: IntoIterator<Item = &'a L>,
{
    lines.into_iter().fold(Money::zero(), |sum, line| {
        let contribution = match (line.unit_price(), line.quantity()) {
            (Some(price), Some(qty)) if qty > 0 => price.checked_mul_quantity(qty),
            _ => None,
        };

        contribution
            .and_then(|c| sum.checked_add(c))
            .unwrap_or(sum)
    })
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a payload to the cart, merging into an existing line with the same id.
    ///
    /// ## Behavior
    /// - Quantity defaults to 1 when the payload omits it
    /// - Id already in cart: quantity increases, name/price/image stay as
    ///   first added
    /// - Id not in cart: a new line is appended with the normalized price
    ///
    /// ## Errors
    /// Blank id, quantity outside `1..=999`, or a merged quantity above 999.
    /// The cart is unchanged on error.
    pub fn add(&mut self, payload: CartItemPayload) -> CoreResult<()> {
        validate_item_id(&payload.id)?;
        let quantity = payload.quantity.unwrap_or(1);
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.id == payload.id) {
            let merged = item.quantity + quantity;
            if merged > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = merged;
            return Ok(());
        }

        let unit_price = payload.price.to_money().ok();
        self.items.push(CartItem {
            id: payload.id,
            name: payload.name,
            image: payload.image,
            unit_price,
            quantity,
            added_at: Utc::now(),
        });
        Ok(())
    }

    /// Removes every line with the given id.
    ///
    /// Returns `true` if something was removed. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of the line with the given id.
    ///
    /// ## Behavior
    /// - Quantity outside `1..=999`: rejected, cart unchanged
    /// - Unknown id: `Ok(false)`, nothing happens
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<bool> {
        validate_quantity(quantity)?;

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Adds one to the line's quantity (the cart screen's "+").
    pub fn increase(&mut self, id: &str) -> CoreResult<bool> {
        match self.get(id).map(|i| i.quantity) {
            Some(current) if current >= MAX_ITEM_QUANTITY => Err(CoreError::QuantityTooLarge {
                requested: current + 1,
                max: MAX_ITEM_QUANTITY,
            }),
            Some(current) => self.update_quantity(id, current + 1),
            None => Ok(false),
        }
    }

    /// Subtracts one from the line's quantity (the cart screen's "-").
    ///
    /// Refuses to go below 1: at quantity 1 this is a no-op returning `false`.
    pub fn decrease(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the line with the given id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines (distinct ids).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of `price × quantity` over lines with a known price.
    pub fn total_price(&self) -> Money {
        total_price(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for UI responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::RawPrice;

    fn payload(id: &str, price: RawPrice, quantity: Option<i64>) -> CartItemPayload {
        CartItemPayload {
            id: id.to_string(),
            name: format!("Item {}", id),
            price,
            image: format!("https://img/{}.jpg", id),
            quantity,
        }
    }

    fn priced(id: &str, major: f64, quantity: i64) -> CartItemPayload {
        payload(id, RawPrice::Number(major), Some(quantity))
    }

    #[test]
    fn test_add_defaults_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add(payload("a", RawPrice::Number(10.0), None)).unwrap();

        assert_eq!(cart.get("a").unwrap().quantity, 1);
    }

    #[test]
    fn test_add_same_id_merges() {
        let mut cart = Cart::new();
        cart.add(priced("a", 10.0, 2)).unwrap();
        cart.add(priced("b", 5.0, 1)).unwrap();
        cart.add(priced("a", 10.0, 3)).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get("a").unwrap().quantity, 5);
        assert_eq!(cart.items()[0].id, "a");
    }

    #[test]
    fn test_length_equals_distinct_ids() {
        let mut cart = Cart::new();
        for id in ["a", "b", "a", "c", "b", "a"] {
            cart.add(priced(id, 1.0, 1)).unwrap();
        }

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_quantity(), 6);
    }

    #[test]
    fn test_add_rejects_bad_quantity_and_id() {
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add(priced("a", 1.0, 0)),
            Err(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
        assert!(cart.add(priced(" ", 1.0, 1)).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_merge_cannot_exceed_max() {
        let mut cart = Cart::new();
        cart.add(priced("a", 1.0, 998)).unwrap();

        let err = cart.add(priced("a", 1.0, 5)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::QuantityTooLarge {
                requested: 1003,
                max: 999
            }
        ));
        assert_eq!(cart.get("a").unwrap().quantity, 998);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(priced("a", 10.0, 1)).unwrap();

        assert!(cart.remove("a"));
        assert!(!cart.remove("a"));
        assert!(!cart.remove("missing"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_last_write_wins() {
        let mut cart = Cart::new();
        cart.add(priced("x", 10.0, 1)).unwrap();

        assert!(cart.update_quantity("x", 3).unwrap());
        assert!(cart.update_quantity("x", 5).unwrap());

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("x").unwrap().quantity, 5);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity("ghost", 2).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_enforces_lower_bound() {
        let mut cart = Cart::new();
        cart.add(priced("x", 10.0, 2)).unwrap();

        assert!(cart.update_quantity("x", 0).is_err());
        assert!(cart.update_quantity("x", -4).is_err());
        assert!(cart.update_quantity("x", 1000).is_err());
        assert_eq!(cart.get("x").unwrap().quantity, 2);
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut cart = Cart::new();
        cart.add(priced("x", 10.0, 1)).unwrap();

        assert!(!cart.decrease("x"));
        assert_eq!(cart.get("x").unwrap().quantity, 1);

        assert!(cart.increase("x").unwrap());
        assert!(cart.increase("x").unwrap());
        assert_eq!(cart.get("x").unwrap().quantity, 3);

        assert!(cart.decrease("x"));
        assert_eq!(cart.get("x").unwrap().quantity, 2);

        assert!(!cart.increase("ghost").unwrap());
        assert!(!cart.decrease("ghost"));
    }

    #[test]
    fn test_increase_stops_at_max() {
        let mut cart = Cart::new();
        cart.add(priced("x", 1.0, MAX_ITEM_QUANTITY)).unwrap();

        assert!(cart.increase("x").is_err());
        assert_eq!(cart.get("x").unwrap().quantity, MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_total_mixed_price_shapes() {
        let mut cart = Cart::new();
        cart.add(priced("a", 10.0, 2)).unwrap();
        cart.add(payload("b", RawPrice::Text("1,000".to_string()), Some(1)))
            .unwrap();

        assert_eq!(cart.total_price(), Money::from_major(1020));
    }

    #[test]
    fn test_total_skips_malformed_price() {
        let mut cart = Cart::new();
        cart.add(priced("a", 10.0, 2)).unwrap();
        cart.add(payload("b", RawPrice::Text("n/a".to_string()), Some(3)))
            .unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get("b").unwrap().unit_price, None);
        assert_eq!(cart.total_price(), Money::from_major(20));
    }

    #[test]
    fn test_total_over_payloads_skips_missing_quantity() {
        let lines = vec![
            priced("a", 10.0, 2),
            payload("b", RawPrice::Number(500.0), None),
            payload("c", RawPrice::Text("oops".to_string()), Some(1)),
        ];

        assert_eq!(total_price(&lines), Money::from_major(20));
    }

    #[test]
    fn test_total_scenario_add_add_remove() {
        let mut cart = Cart::new();
        cart.add(priced("A", 100.0, 1)).unwrap();
        cart.add(priced("B", 50.0, 2)).unwrap();
        assert_eq!(cart.total_price(), Money::from_major(200));

        cart.remove("A");
        assert_eq!(cart.total_price(), Money::from_major(100));
    }

    #[test]
    fn test_totals_summary_and_clear() {
        let mut cart = Cart::new();
        cart.add(priced("a", 9.99, 2)).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.total, Money::from_cents(1998));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::zero());
    }
}
