//! Askama-backed renderer producing HTMX fragments.

use askama::Template;

use super::{CartView, EMPTY_CART_MESSAGE, Renderer};

/// Cart count badge fragment.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Item list fragment, or the empty-cart message.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
    pub empty_message: &'a str,
}

/// Sidebar, checkout dialog (with order summary) and success dialog.
#[derive(Template)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate<'a> {
    pub cart: &'a CartView,
    pub empty_message: &'a str,
}

/// The rendered pieces of the cart UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartFragments {
    pub count: String,
    pub items: String,
    pub panel: String,
}

impl CartFragments {
    /// Render every fragment for `view`.
    ///
    /// # Errors
    ///
    /// Returns the template error if any fragment fails to render.
    pub fn render(view: &CartView) -> askama::Result<Self> {
        Ok(Self {
            count: CartCountTemplate {
                count: view.item_count,
            }
            .render()?,
            items: CartItemsTemplate {
                cart: view,
                empty_message: EMPTY_CART_MESSAGE,
            }
            .render()?,
            panel: CartPanelTemplate {
                cart: view,
                empty_message: EMPTY_CART_MESSAGE,
            }
            .render()?,
        })
    }
}

/// Keeps the most recent render of the cart.
///
/// A failed render is logged and the previous fragments stay in place.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    fragments: CartFragments,
    renders: u64,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successfully rendered fragments.
    #[must_use]
    pub const fn fragments(&self) -> &CartFragments {
        &self.fragments
    }

    /// Number of successful renders so far.
    #[must_use]
    pub const fn renders(&self) -> u64 {
        self.renders
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, view: &CartView) {
        match CartFragments::render(view) {
            Ok(fragments) => {
                self.fragments = fragments;
                self.renders += 1;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to render cart");
            }
        }
    }
}
