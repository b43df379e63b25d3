//! # Home Commands
//!
//! Popular and catalog lists, the details view, and "add to cart".
//!
//! ## Home Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open screen ──► load_home() ──► spinner while loading                  │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                       Popular  [card] [card] [card] ...                 │
//! │                       Catalog  [card] [card] [card] ...                 │
//! │                                        │                                │
//! │                  tap card ─────────────┤                                │
//! │                                        ▼                                │
//! │                       select_thing(id) ──► details: name, description   │
//! │                                        │                                │
//! │                       close ───────────┴──► close_details()             │
//! │                                                                         │
//! │  "Add to cart" on a card ──► add_thing_to_cart(id)                      │
//! │                              └──► notice "<name> added to cart!"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CartItemPayload, CoreError, Money, Thing};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, HomeState};

/// Everything the home screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub loading: bool,
    pub popular: Vec<Thing>,
    pub catalog: Vec<Thing>,
    pub details: Option<ThingDetails>,
}

/// The details view for one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    /// `None` when the served price is malformed.
    pub price: Option<Money>,
}

impl From<&Thing> for ThingDetails {
    fn from(thing: &Thing) -> Self {
        ThingDetails {
            id: thing.id.clone(),
            name: thing.name.clone(),
            description: thing.description.clone(),
            image: thing.image.clone(),
            price: thing.price(),
        }
    }
}

/// Result of "Add to cart": the confirmation notice and the new cart size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedToCart {
    pub notice: String,
    pub total_quantity: i64,
}

async fn respond(home: &HomeState) -> HomeResponse {
    let snapshot = home.catalog().snapshot().await;
    let details = home.selected().await.as_ref().map(ThingDetails::from);

    HomeResponse {
        loading: snapshot.loading,
        popular: snapshot.popular,
        catalog: snapshot.catalog,
        details,
    }
}

/// Fetches both lists and returns the screen.
///
/// Never fails: a list that could not be fetched is logged and left as it
/// was, and loading is cleared either way.
pub async fn load_home(home: &HomeState) -> HomeResponse {
    debug!("load_home command");

    let report = home.catalog().refresh().await;
    if !report.is_complete() {
        info!("Home loaded with missing lists");
    }

    respond(home).await
}

/// Returns the screen without fetching.
pub async fn get_home(home: &HomeState) -> HomeResponse {
    debug!("get_home command");
    respond(home).await
}

/// Opens the details view.
pub async fn select_thing(home: &HomeState, id: String) -> Result<ThingDetails, ApiError> {
    debug!(id = %id, "select_thing command");

    let thing = home
        .select(&id)
        .await
        .ok_or_else(|| CoreError::ThingNotFound(id.clone()))?;
    Ok(ThingDetails::from(&thing))
}

/// Closes the details view.
pub async fn close_details(home: &HomeState) {
    debug!("close_details command");
    home.close_details().await;
}

/// Adds one of the item to the cart.
pub async fn add_thing_to_cart(
    home: &HomeState,
    cart: &CartState,
    id: String,
) -> Result<AddedToCart, ApiError> {
    debug!(id = %id, "add_thing_to_cart command");

    let thing = home
        .catalog()
        .find(&id)
        .await
        .ok_or_else(|| CoreError::ThingNotFound(id.clone()))?;

    let total_quantity = cart.with_cart_mut(|c| {
        c.add(CartItemPayload::from(&thing))?;
        Ok::<i64, CoreError>(c.total_quantity())
    })?;

    info!(id = %thing.id, name = %thing.name, "Added to cart");
    Ok(AddedToCart {
        notice: format!("{} added to cart!", thing.name),
        total_quantity,
    })
}
