//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::cart::CartStore;
use crate::checkout::LoggingSubmitter;
use crate::config::StorefrontConfig;
use crate::notify::NotificationQueue;
use crate::render::HtmlRenderer;
use crate::storage::FileStorage;

/// The cart as the HTTP front end runs it: file-backed, rendered to HTML,
/// with notifications queued for the next response.
pub type StorefrontCart = CartStore<FileStorage, HtmlRenderer, NotificationQueue>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The one cart lives behind a
/// mutex so each handler finishes its mutation before the next begins.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: Mutex<StorefrontCart>,
    submitter: LoggingSubmitter,
}

impl AppState {
    /// Create the state, restoring the cart from `config.data_dir`.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let cart = CartStore::new(
            FileStorage::new(&config.data_dir),
            HtmlRenderer::new(),
            NotificationQueue::new(config.notification_duration),
        )
        .with_currency(config.currency);

        tracing::info!(
            data_dir = %config.data_dir.display(),
            currency = config.currency.code(),
            lines = cart.lines().len(),
            "Cart restored"
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                cart: Mutex::new(cart),
                submitter: LoggingSubmitter,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Lock the cart for the duration of one handler.
    pub async fn cart(&self) -> MutexGuard<'_, StorefrontCart> {
        self.inner.cart.lock().await
    }

    /// The order-submission boundary.
    #[must_use]
    pub fn submitter(&self) -> &LoggingSubmitter {
        &self.inner.submitter
    }
}
