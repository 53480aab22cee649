//! Shopfront Core - Shared types library.
//!
//! This crate provides the types used across the Shopfront components:
//! - `client` - REST client for the shop API
//! - `app` - Terminal storefront binary
//!
//! # Architecture
//!
//! The core crate contains only types and the wire-boundary normalization -
//! no I/O, no HTTP clients. Server responses are tolerated in the shapes the
//! API has been observed to produce ([`wire`]) and normalized into a single
//! canonical form ([`types`]) before anything else sees them.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products, cart items, and order receipts
//! - [`wire`] - Tolerated server response shapes and their normalization

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod wire;

pub use types::*;
