//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │     Thing       │   │ CartItemPayload  │   │    CartItem     │      │
//! │  │  ─────────────  │──►│  ──────────────  │──►│  ─────────────  │      │
//! │  │  id             │   │  id              │   │  id             │      │
//! │  │  name           │   │  price: RawPrice │   │  unit_price     │      │
//! │  │  price: RawPrice│   │  quantity?       │   │  quantity ≥ 1   │      │
//! │  └─────────────────┘   └──────────────────┘   └─────────────────┘      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  UploadedImage  │   │    RawPrice     │                              │
//! │  │  id, url, ...   │   │ Number | Text | │                              │
//! │  │                 │   │ Missing         │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire types (`Thing`, `UploadedImage`, `CartItemPayload`) mirror the remote
//! API's JSON exactly. `CartItem` is the normalized, store-owned form.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Raw Price
// =============================================================================

/// A price as it arrives from the backend.
///
/// The catalog serves prices either as JSON numbers (`2499`) or as
/// separator-formatted strings (`"1,000"`). This type keeps the raw shape
/// until it is normalized with [`RawPrice::to_money`].
///
/// Anything else (`null`, a missing field, a bool, an object) decodes as
/// [`RawPrice::Missing`], so one bad record never fails a whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawPrice {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl<'de> Deserialize<'de> for RawPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(n) => RawPrice::Number(n),
            Wire::Text(s) => RawPrice::Text(s),
            Wire::Other(_) => RawPrice::Missing,
        })
    }
}

impl RawPrice {
    /// Normalizes into Money.
    pub fn to_money(&self) -> Result<Money, ValidationError> {
        match self {
            RawPrice::Number(value) => {
                Money::from_major_f64(*value).ok_or_else(|| ValidationError::InvalidFormat {
                    field: "price".to_string(),
                    reason: format!("{} is not a valid amount", value),
                })
            }
            RawPrice::Text(text) => Money::parse_price(text),
            RawPrice::Missing => Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "no price served".to_string(),
            }),
        }
    }
}

// =============================================================================
// Thing
// =============================================================================

/// A catalog item served by `/popular` and `/catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Thing {
    /// Item identifier. The backend sometimes serves numeric ids; they are
    /// kept as strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price as served.
    #[serde(default)]
    pub price: RawPrice,

    /// Long description shown in the details view.
    #[serde(default)]
    pub description: String,

    /// Image URI.
    #[serde(default)]
    pub image: String,
}

impl Thing {
    /// Returns the normalized price, or `None` if the served price is malformed.
    pub fn price(&self) -> Option<Money> {
        self.price.to_money().ok()
    }
}

// =============================================================================
// Uploaded Image
// =============================================================================

/// A gallery record returned by `/uploads`.
///
/// The backend does not always report dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UploadedImage {
    pub id: i64,
    pub url: String,
    pub format: String,
    pub bytes: u64,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

// =============================================================================
// Cart Item Payload
// =============================================================================

/// The payload the UI dispatches to add something to the cart.
///
/// `quantity` is optional on the wire; [`crate::cart::Cart::add`] defaults
/// it to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItemPayload {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: RawPrice,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl From<&Thing> for CartItemPayload {
    /// Builds the "add one of these" payload the home screen dispatches.
    fn from(thing: &Thing) -> Self {
        CartItemPayload {
            id: thing.id.clone(),
            name: thing.name.clone(),
            price: thing.price.clone(),
            image: thing.image.clone(),
            quantity: Some(1),
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Design Notes
/// - `unit_price` is normalized at ingestion. `None` means the served price
///   could not be parsed; the line is kept but contributes nothing to totals.
/// - `quantity` is always within `1..=MAX_ITEM_QUANTITY`; the cart refuses
///   any mutation that would break this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub image: String,
    pub unit_price: Option<Money>,
    pub quantity: i64,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Helpers
// =============================================================================

/// Accepts `"17"` and `17` alike for identifier fields.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}
