//! Checkout form, order record, and the order-submission boundary.
//!
//! Orders are not sent anywhere yet. [`LoggingSubmitter`] writes the order
//! to the log and reports success; a real integration implements
//! [`OrderSubmitter`] and slots in where the logging submitter is used.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use royal_cafe_core::Phone;

use crate::cart::CartLine;

/// Fields collected by the checkout form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl CheckoutForm {
    /// Required fields that are blank (or, for the phone, have no digits).
    ///
    /// The store does not call this; it is for the form layer to refuse
    /// submission and highlight the offending inputs.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if Phone::parse(&self.phone).is_err() {
            missing.push("phone");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }
}

/// Customer contact and delivery details on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}

impl From<CheckoutForm> for Customer {
    fn from(form: CheckoutForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            phone: Phone::sanitize(&form.phone).trim().to_string(),
            address: form.address.trim().to_string(),
            notes: form.notes.trim().to_string(),
        }
    }
}

/// A submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub reference: Uuid,
    pub customer: Customer,
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    #[must_use]
    pub fn new(customer: Customer, items: Vec<CartLine>, total: Decimal) -> Self {
        Self {
            reference: Uuid::new_v4(),
            customer,
            items,
            total,
            placed_at: Utc::now(),
        }
    }
}

/// Errors from the order-submission boundary.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode order: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("order rejected: {0}")]
    Rejected(String),
}

/// Hands a finished order to whatever processes it.
pub trait OrderSubmitter {
    /// # Errors
    ///
    /// Returns `SubmitError` if the order could not be handed off. The cart
    /// is left untouched in that case.
    fn submit(&self, order: &Order) -> Result<(), SubmitError>;
}

/// Submitter that logs the order and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmitter;

impl OrderSubmitter for LoggingSubmitter {
    fn submit(&self, order: &Order) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(order)?;
        tracing::info!(
            reference = %order.reference,
            total = %order.total,
            lines = order.items.len(),
            order = %payload,
            "Order submitted"
        );
        Ok(())
    }
}
