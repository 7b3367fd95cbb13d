//! Views derived from the cart.
//!
//! After every change the store builds a [`CartView`] and hands it to its
//! [`Renderer`]. The view carries everything the page shows: the badge
//! count, each line with formatted prices and its -/+ targets, the total,
//! and which panels are open.

mod html;

pub use html::{CartFragments, HtmlRenderer};

use royal_cafe_core::{CartLineId, CurrencyCode};
use rust_decimal::Decimal;

use crate::cart::{CartLine, Panels, item_count};

/// Shown in place of the item list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "السلة فارغة";

/// Line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: CartLineId,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    /// Quantity the "-" control requests. May be 0; the store clamps it.
    pub decrement_to: i64,
    pub increment_to: i64,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
    pub panels: Panels,
}

impl CartView {
    /// Build the view for `lines`.
    #[must_use]
    pub fn new(lines: &[CartLine], total: Decimal, currency: CurrencyCode, panels: Panels) -> Self {
        Self {
            items: lines
                .iter()
                .map(|line| CartItemView::new(line, currency))
                .collect(),
            total: currency.format_amount(total),
            item_count: item_count(lines),
            panels,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItemView {
    fn new(line: &CartLine, currency: CurrencyCode) -> Self {
        let quantity = i64::from(line.quantity);
        Self {
            id: line.id,
            name: line.name.clone(),
            quantity: line.quantity,
            price: currency.format_amount(line.price),
            line_price: line
                .line_total()
                .map_or_else(String::new, |total| currency.format_amount(total)),
            decrement_to: quantity - 1,
            increment_to: quantity + 1,
        }
    }
}

/// Draws the cart after each change.
pub trait Renderer {
    fn render(&mut self, view: &CartView);
}

/// Renderer that draws nothing, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _view: &CartView) {}
}
