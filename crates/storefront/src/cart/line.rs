//! Cart lines and the persisted snapshot format.
//!
//! A snapshot is the JSON array of lines, e.g.
//!
//! ```json
//! [{"id":1718000000123,"name":"Latte","price":"15","quantity":2}]
//! ```
//!
//! Prices are written as decimal strings. Snapshots that carry numeric
//! prices (`"price":15`) load as well.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use royal_cafe_core::CartLineId;

/// One distinct product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub name: String,
    /// Unit price, never negative.
    pub price: Decimal,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity, or `None` if it does not fit in a `Decimal`.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Sum of `price * quantity` over `lines`, or `None` on overflow.
#[must_use]
pub fn cart_total(lines: &[CartLine]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.line_total()?))
}

/// Sum of quantities over `lines`, as shown on the cart badge.
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines
        .iter()
        .fold(0u32, |count, line| count.saturating_add(line.quantity))
}

/// Why a stored snapshot was rejected.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not a valid line list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {0} has quantity 0")]
    ZeroQuantity(CartLineId),

    #[error("line {0} has a negative price")]
    NegativePrice(CartLineId),

    #[error("product {0:?} appears on more than one line")]
    DuplicateName(String),

    #[error("line id {0} appears more than once")]
    DuplicateId(CartLineId),

    #[error("cart total is too large to represent")]
    TotalOverflow,
}

/// Decode a stored snapshot, enforcing the cart invariants.
///
/// # Errors
///
/// Returns `SnapshotError` if the JSON does not decode or any line breaks an
/// invariant (quantity >= 1, price >= 0, unique names, unique ids, a total
/// that fits in a `Decimal`).
pub fn decode_snapshot(raw: &str) -> Result<Vec<CartLine>, SnapshotError> {
    let lines: Vec<CartLine> = serde_json::from_str(raw)?;

    let mut names = HashSet::new();
    let mut ids = HashSet::new();
    for line in &lines {
        if line.quantity == 0 {
            return Err(SnapshotError::ZeroQuantity(line.id));
        }
        if line.price < Decimal::ZERO {
            return Err(SnapshotError::NegativePrice(line.id));
        }
        if !names.insert(line.name.as_str()) {
            return Err(SnapshotError::DuplicateName(line.name.clone()));
        }
        if !ids.insert(line.id) {
            return Err(SnapshotError::DuplicateId(line.id));
        }
    }
    if cart_total(&lines).is_none() {
        return Err(SnapshotError::TotalOverflow);
    }

    Ok(lines)
}

/// Encode lines for storage.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn encode_snapshot(lines: &[CartLine]) -> Result<String, serde_json::Error> {
    serde_json::to_string(lines)
}
