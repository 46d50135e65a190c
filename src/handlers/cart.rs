use crate::app_state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Response body for cart mutations.
#[derive(Debug, Serialize)]
pub struct CartAction {
    action: &'static str,
    total: u64,
    message: &'static str,
}

/// Response body for reading the cart total.
#[derive(Debug, Serialize)]
pub struct CartTotal {
    total: u64,
    message: &'static str,
}

/// Handler for adding one item to the cart (GET|POST /cart/increase).
///
/// Responds with `200 OK` and the total right after the increment.
#[tracing::instrument(skip(state))]
pub async fn cart_increase(State(state): State<AppState>) -> Json<CartAction> {
    // ---
    let total = state.cart().increase();

    Json(CartAction {
        action: "increase",
        total,
        message: "Item added to cart",
    })
}

/// Handler for removing one item from the cart (GET|POST /cart/decrease).
///
/// An empty cart stays at zero; the response looks the same either way.
#[tracing::instrument(skip(state))]
pub async fn cart_decrease(State(state): State<AppState>) -> Json<CartAction> {
    // ---
    let total = state.cart().decrease();

    Json(CartAction {
        action: "decrease",
        total,
        message: "Item removed from cart",
    })
}

/// Handler for reading the cart total (GET /cart/total). No mutation.
pub async fn cart_total(State(state): State<AppState>) -> Json<CartTotal> {
    // ---
    let total = state.cart().total();

    Json(CartTotal {
        total,
        message: "Current cart total",
    })
}
