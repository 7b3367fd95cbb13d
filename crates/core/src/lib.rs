//! Royal Cafe Core - Shared types library.
//!
//! This crate provides common types used across all Royal Cafe components:
//! - `storefront` - The cart store, its collaborators and the HTMX front end
//! - `cli` - Command-line driver for the local cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no rendering.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for cart line IDs, prices, phone numbers,
//!   and notification levels

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
