//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health             - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart               - Cart page
//! GET  /cart/panel         - Cart panel fragment
//! GET  /cart/count         - Cart count badge (fragment)
//! POST /cart/add           - Add one unit {name, price}
//! POST /cart/update        - Set quantity {id, quantity}
//! POST /cart/remove        - Remove line {id}
//! POST /cart/open          - Show the sidebar
//! POST /cart/close         - Hide the sidebar
//!
//! # Checkout
//! POST /checkout/open      - Open the checkout dialog
//! POST /checkout/close     - Close the checkout dialog
//! POST /checkout           - Submit the order {name, phone, address, notes}
//! POST /success/close      - Close the success dialog
//! POST /dismiss            - Close everything (Escape key)
//! ```
//!
//! Every POST answers with the re-rendered cart panel, an out-of-band count
//! badge, any pending notifications, and an `HX-Trigger: cart-updated`
//! header.

pub mod cart;
pub mod checkout;

use std::time::Instant;

use askama::Template;
use axum::{
    Router,
    response::{AppendHeaders, Html, IntoResponse, Response},
    routing::{get, post},
};

use crate::error::Result;
use crate::notify::ActiveNotification;
use crate::state::{AppState, StorefrontCart};

/// Build the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/cart", get(cart::show))
        .route("/cart/panel", get(cart::panel))
        .route("/cart/count", get(cart::count))
        .route("/cart/add", post(cart::add))
        .route("/cart/update", post(cart::update))
        .route("/cart/remove", post(cart::remove))
        .route("/cart/open", post(cart::open))
        .route("/cart/close", post(cart::close))
        .route("/checkout/open", post(checkout::open))
        .route("/checkout/close", post(checkout::close))
        .route("/checkout", post(checkout::submit))
        .route("/success/close", post(checkout::close_success))
        .route("/dismiss", post(checkout::dismiss))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Toast display data for templates.
pub struct ToastView {
    pub message: String,
    pub level: &'static str,
    pub dismiss_ms: u64,
}

impl ToastView {
    fn new(active: &ActiveNotification, now: Instant) -> Self {
        Self {
            message: active.notification.message.clone(),
            level: active.notification.level.as_str(),
            dismiss_ms: u64::try_from(active.remaining(now).as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Pending notifications, appended out-of-band.
#[derive(Template)]
#[template(path = "partials/notifications.html")]
pub struct NotificationsTemplate {
    pub toasts: Vec<ToastView>,
}

/// Answer with the current panel, count badge, and pending notifications.
///
/// Notifications are drained, so each one reaches the browser once; its
/// remaining display time travels with it.
pub(crate) fn panel_response(cart: &mut StorefrontCart) -> Result<Response> {
    let now = Instant::now();
    let toasts = cart
        .notifier_mut()
        .drain_at(now)
        .iter()
        .map(|active| ToastView::new(active, now))
        .collect();
    let notifications = NotificationsTemplate { toasts }.render()?;

    let fragments = cart.renderer().fragments();
    let body = format!("{}{}{}", fragments.panel, fragments.count, notifications);

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        Html(body),
    )
        .into_response())
}
