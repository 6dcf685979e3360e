//! Quill Core - cart state machine and shared types.
//!
//! This crate holds everything in the storefront that carries real
//! invariants:
//! - [`cart`] - the Cart Store: line items, quantity aggregation, totals, checkout
//! - [`image`] - the Image Resolver strategy consulted when a line item is created
//! - [`catalog`] - display-layer product records with sorting and filtering
//! - [`theme`] - light/dark preference resolution
//! - [`types`] - typed money
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP, no
//! templates. The `storefront` crate owns the presentation layer and
//! drives the cart through the operations exposed here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod image;
pub mod theme;
pub mod types;

pub use cart::{CartError, CartStore, CartSummary, LineItem};
pub use catalog::{Category, Product, SortOrder, ViewMode};
pub use image::{DEFAULT_IMAGE, ImageResolver, LayeredImageResolver, TableImageResolver};
pub use theme::Theme;
pub use types::*;
