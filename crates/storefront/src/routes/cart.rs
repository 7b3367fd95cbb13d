//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Each handler locks the cart, applies one store operation, and answers
//! with the re-rendered panel.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use royal_cafe_core::CartLineId;

use super::panel_response;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
    pub price: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: CartLineId,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: CartLineId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub panel: String,
    pub item_count: u32,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart().await;
    CartShowTemplate {
        panel: cart.renderer().fragments().panel.clone(),
        item_count: cart.item_count(),
    }
}

/// Cart panel fragment (HTMX).
#[instrument(skip(state))]
pub async fn panel(State(state): State<AppState>) -> Result<Response> {
    let mut cart = state.cart().await;
    panel_response(&mut cart)
}

/// Cart count badge fragment (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Html<String> {
    let cart = state.cart().await;
    Html(cart.renderer().fragments().count.clone())
}

/// Add one unit of an item to the cart (HTMX).
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("item name is required".to_string()));
    }
    let price = Decimal::from_str(form.price.trim())
        .map_err(|e| AppError::BadRequest(format!("invalid price: {e}")))?;
    if price < Decimal::ZERO {
        return Err(AppError::BadRequest("price cannot be negative".to_string()));
    }

    add_breadcrumb("cart", "Added item", Some(&[("name", name)][..]));

    let mut cart = state.cart().await;
    cart.add_item(name, price);
    panel_response(&mut cart)
}

/// Update cart line quantity (HTMX).
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let mut cart = state.cart().await;
    cart.update_quantity(form.id, form.quantity);
    panel_response(&mut cart)
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut cart = state.cart().await;
    cart.remove_item(form.id);
    panel_response(&mut cart)
}

/// Show the cart sidebar (HTMX).
#[instrument(skip(state))]
pub async fn open(State(state): State<AppState>) -> Result<Response> {
    let mut cart = state.cart().await;
    cart.open_cart();
    panel_response(&mut cart)
}

/// Hide the cart sidebar (HTMX).
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> Result<Response> {
    let mut cart = state.cart().await;
    cart.close_cart();
    panel_response(&mut cart)
}
