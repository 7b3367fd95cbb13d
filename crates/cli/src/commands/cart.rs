//! Cart commands.
//!
//! These drive the same file-backed cart the storefront server uses, so a
//! cart built on the command line shows up in the browser and vice versa.
//!
//! # Usage
//!
//! ```bash
//! royal-cafe add Latte 15
//! royal-cafe set-qty 1718000000123 3
//! royal-cafe checkout --name "Sara" --phone "0551234567" --address "Olaya St"
//! ```

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use royal_cafe_core::{CartLineId, CurrencyCode};
use royal_cafe_storefront::cart::{CartStore, CheckoutError};
use royal_cafe_storefront::checkout::{CheckoutForm, LoggingSubmitter, Order};
use royal_cafe_storefront::notify::TracingNotifier;
use royal_cafe_storefront::render::NoopRenderer;
use royal_cafe_storefront::storage::FileStorage;

/// The cart as the CLI runs it.
pub type CliCart = CartStore<FileStorage, NoopRenderer, TracingNotifier>;

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Price did not parse as a decimal.
    #[error("Invalid price {0:?}: {1}")]
    InvalidPrice(String, String),

    /// Price was below zero.
    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    /// Required checkout fields were blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The store refused the checkout.
    #[error("Checkout failed: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Open the cart stored under `data_dir`.
#[must_use]
pub fn open(data_dir: &Path, currency: CurrencyCode) -> CliCart {
    CartStore::new(FileStorage::new(data_dir), NoopRenderer, TracingNotifier).with_currency(currency)
}

/// Log the cart contents.
pub fn show(cart: &CliCart) {
    let view = cart.view();
    if view.is_empty() {
        info!("Cart is empty");
        return;
    }

    for item in &view.items {
        info!(
            "  [{}] {} × {} @ {} = {}",
            item.id, item.name, item.quantity, item.price, item.line_price
        );
    }
    info!("Items: {}", view.item_count);
    info!("Total: {}", view.total);
}

/// Add one unit of `name` at `price`.
///
/// # Errors
///
/// Returns an error if the price does not parse or is negative.
pub fn add(cart: &mut CliCart, name: &str, price: &str) -> Result<(), CartCommandError> {
    let price = Decimal::from_str(price.trim())
        .map_err(|e| CartCommandError::InvalidPrice(price.to_string(), e.to_string()))?;
    if price < Decimal::ZERO {
        return Err(CartCommandError::NegativePrice(price));
    }
    cart.add_item(name, price);
    Ok(())
}

/// Remove the line with `id`.
pub fn remove(cart: &mut CliCart, id: i64) {
    let id = CartLineId::new(id);
    if cart.line(id).is_none() {
        warn!(%id, "No such line; cart unchanged");
    }
    cart.remove_item(id);
}

/// Set the quantity of line `id`. Values below 1 become 1.
pub fn set_quantity(cart: &mut CliCart, id: i64, quantity: i64) {
    let id = CartLineId::new(id);
    if cart.line(id).is_none() {
        warn!(%id, "No such line; cart unchanged");
        return;
    }
    cart.update_quantity(id, quantity);
}

/// Empty the cart.
pub fn clear(cart: &mut CliCart) {
    cart.clear_cart();
    info!("Cart cleared");
}

/// Place the order and clear the cart.
///
/// # Errors
///
/// Returns an error if a required field is blank, the cart is empty, or the
/// order was not accepted.
pub fn checkout(cart: &mut CliCart, form: CheckoutForm) -> Result<Order, CartCommandError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(CartCommandError::MissingFields(missing));
    }

    cart.open_checkout()?;
    let order = cart.submit_order(form, &LoggingSubmitter)?;
    cart.dismiss_all();
    Ok(order)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Sara".to_string(),
            phone: "0551234567".to_string(),
            address: "Olaya St".to_string(),
            notes: "extra hot".to_string(),
        }
    }

    #[test]
    fn test_add_persists_between_invocations() {
        let dir = tempfile::tempdir().unwrap();

        let mut cart = open(dir.path(), CurrencyCode::SAR);
        add(&mut cart, "Latte", "15").unwrap();
        add(&mut cart, "Latte", "15").unwrap();

        let reopened = open(dir.path(), CurrencyCode::SAR);
        assert_eq!(reopened.lines().len(), 1);
        assert_eq!(reopened.lines()[0].quantity, 2);
        assert_eq!(reopened.total(), Decimal::from(30));
    }

    #[test]
    fn test_add_rejects_bad_prices() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = open(dir.path(), CurrencyCode::SAR);

        assert!(matches!(
            add(&mut cart, "Latte", "cheap"),
            Err(CartCommandError::InvalidPrice(..))
        ));
        assert!(matches!(
            add(&mut cart, "Latte", "-1"),
            Err(CartCommandError::NegativePrice(_))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = open(dir.path(), CurrencyCode::SAR);
        add(&mut cart, "Tea", "6").unwrap();
        let id = cart.lines()[0].id.as_i64();

        set_quantity(&mut cart, id, -3);

        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = open(dir.path(), CurrencyCode::SAR);

        let result = checkout(&mut cart, form());

        assert!(matches!(
            result,
            Err(CartCommandError::Checkout(CheckoutError::EmptyCart))
        ));
    }

    #[test]
    fn test_checkout_requires_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = open(dir.path(), CurrencyCode::SAR);
        add(&mut cart, "Tea", "6").unwrap();

        let result = checkout(
            &mut cart,
            CheckoutForm {
                address: String::new(),
                ..form()
            },
        );

        assert!(matches!(result, Err(CartCommandError::MissingFields(f)) if f == vec!["address"]));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_checkout_clears_stored_cart() {
        let dir = tempfile::tempdir().unwrap();
        let mut cart = open(dir.path(), CurrencyCode::SAR);
        add(&mut cart, "Tea", "6").unwrap();

        let order = checkout(&mut cart, form()).unwrap();

        assert_eq!(order.total, Decimal::from(6));
        assert_eq!(order.customer.notes, "extra hot");
        assert!(open(dir.path(), CurrencyCode::SAR).is_empty());
    }
}
