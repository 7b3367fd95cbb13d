//! Integration tests for Royal Cafe.
//!
//! These run the cart against real collaborators: file storage in a temp
//! directory, the askama renderer and the notification queue.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p royal-cafe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Snapshots surviving restarts, corrupt files
//! - `checkout_flow` - Cart to order, panels and toasts along the way

use std::path::Path;
use std::time::Duration;

use royal_cafe_core::CurrencyCode;
use royal_cafe_storefront::cart::CartStore;
use royal_cafe_storefront::notify::NotificationQueue;
use royal_cafe_storefront::render::HtmlRenderer;
use royal_cafe_storefront::storage::FileStorage;

/// The cart wired the way the storefront server wires it.
pub type TestCart = CartStore<FileStorage, HtmlRenderer, NotificationQueue>;

/// Toasts stay up long enough that no test sees one expire.
pub const TEST_DISPLAY_DURATION: Duration = Duration::from_secs(60);

/// Open (or reopen) the cart stored under `dir`.
#[must_use]
pub fn open_cart(dir: &Path) -> TestCart {
    CartStore::new(
        FileStorage::new(dir),
        HtmlRenderer::new(),
        NotificationQueue::new(TEST_DISPLAY_DURATION),
    )
    .with_currency(CurrencyCode::SAR)
}
