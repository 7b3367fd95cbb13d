//! Checkout route handlers.
//!
//! The checkout dialog collects contact and delivery details. Required
//! fields are checked here, in the form layer; the store only assembles
//! and hands off the order.

use axum::{Form, extract::State, response::Response};
use tracing::{debug, instrument, warn};

use super::panel_response;
use crate::cart::messages;
use crate::checkout::CheckoutForm;
use crate::error::{Result, add_breadcrumb};
use crate::notify::Notification;
use crate::state::AppState;

/// Open the checkout dialog, or raise an error toast if the cart is empty.
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> Result<Response> {
    let mut cart = state.cart().await;
    if let Err(e) = cart.open_checkout() {
        debug!(reason = %e, "Checkout not opened");
    }
    panel_response(&mut cart)
}

/// Close the checkout dialog.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> Result<Response> {
    let mut cart = state.cart().await;
    cart.close_checkout();
    panel_response(&mut cart)
}

/// Submit the order.
///
/// Missing required fields raise an error toast and leave everything as it
/// was. Otherwise the order goes to the submitter and, once accepted, the
/// cart is cleared and the success dialog shown.
#[instrument(skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let mut cart = state.cart().await;

    let missing = form.missing_fields();
    if !missing.is_empty() {
        warn!(?missing, "Checkout form incomplete");
        cart.notify(Notification::error(messages::MISSING_FIELDS));
        return panel_response(&mut cart);
    }

    match cart.submit_order(form, state.submitter()) {
        Ok(order) => {
            let reference = order.reference.to_string();
            add_breadcrumb(
                "checkout",
                "Order placed",
                Some(&[("reference", reference.as_str())][..]),
            );
        }
        Err(e) => {
            debug!(reason = %e, "Order not placed");
        }
    }

    panel_response(&mut cart)
}

/// Close the success dialog and the cart behind it.
#[instrument(skip(state))]
pub async fn close_success(State(state): State<AppState>) -> Result<Response> {
    let mut cart = state.cart().await;
    cart.close_success();
    panel_response(&mut cart)
}

/// Close every open view (Escape key).
#[instrument(skip(state))]
pub async fn dismiss(State(state): State<AppState>) -> Result<Response> {
    let mut cart = state.cart().await;
    cart.dismiss_all();
    panel_response(&mut cart)
}
