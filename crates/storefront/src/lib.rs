//! Royal Cafe Storefront library.
//!
//! The cart store and its collaborators, plus the HTMX routes that drive
//! it, exposed as a library so they can be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod render;
pub mod routes;
pub mod state;
pub mod storage;
