//! Core types for Quill.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod price;

pub use price::{Price, PriceError};
