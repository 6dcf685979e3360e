//! The Cart Store.
//!
//! A cart is an insertion-ordered list of [`LineItem`]s keyed by product
//! name. Adding a product that is already present bumps its quantity;
//! removing a product drops its whole line. Totals are never stored: every
//! [`CartSummary`] is recomputed from the current lines, so there is no
//! cached figure that could drift from the items.
//!
//! # Example
//!
//! ```
//! use quill_core::{CartStore, CartSummary, Price, TableImageResolver};
//!
//! let mut cart = CartStore::new(TableImageResolver::new(&[]));
//! cart.add_item("Pen", Price::from_cents(250));
//! cart.add_item("Pen", Price::from_cents(250));
//! cart.add_item("Notebook", Price::from_cents(999));
//! assert_eq!(cart.summary(), CartSummary::new(3, Price::from_cents(1499)));
//!
//! cart.remove_item("Pen");
//! assert_eq!(cart.summary(), CartSummary::new(1, Price::from_cents(999)));
//!
//! let receipt = cart.checkout().unwrap();
//! assert_eq!(receipt, CartSummary::new(1, Price::from_cents(999)));
//! assert_eq!(cart.summary(), CartSummary::EMPTY);
//! ```

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::image::ImageResolver;
use crate::types::Price;

/// Errors reported by cart operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// Checkout was attempted with no items in the cart.
    #[error("cart is empty")]
    Empty,
}

/// One distinct product in the cart with its aggregated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name; the identity key within a cart.
    pub name: String,
    /// Unit price captured when the product was first added.
    pub unit_price: Price,
    /// Number of units, never zero.
    pub quantity: NonZeroU32,
    /// Display image resolved when the line was created.
    pub image_ref: String,
}

impl LineItem {
    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity.get())
    }
}

/// Item count and total for a set of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartSummary {
    /// Sum of all line quantities.
    pub item_count: u64,
    /// Sum of all line totals.
    pub total: Price,
}

impl CartSummary {
    /// Summary of an empty cart.
    pub const EMPTY: Self = Self {
        item_count: 0,
        total: Price::ZERO,
    };

    /// Create a summary.
    #[must_use]
    pub const fn new(item_count: u64, total: Price) -> Self {
        Self { item_count, total }
    }

    /// Compute the summary of `items`.
    #[must_use]
    pub fn of(items: &[LineItem]) -> Self {
        Self {
            item_count: items.iter().map(|item| u64::from(item.quantity.get())).sum(),
            total: items.iter().map(LineItem::line_total).sum(),
        }
    }
}

/// In-memory shopping cart.
///
/// The only mutation surface is [`add_item`](Self::add_item),
/// [`remove_item`](Self::remove_item) and [`checkout`](Self::checkout).
/// Every method runs to completion synchronously.
#[derive(Debug, Clone)]
pub struct CartStore<R> {
    items: Vec<LineItem>,
    images: R,
}

impl<R: ImageResolver> CartStore<R> {
    /// Create an empty cart that resolves images through `images`.
    #[must_use]
    pub const fn new(images: R) -> Self {
        Self {
            items: Vec::new(),
            images,
        }
    }

    /// Add one unit of `name` to the cart.
    ///
    /// If a line for `name` already exists its quantity goes up by one and
    /// its unit price is left as it was first added. Otherwise a new line is
    /// appended with quantity 1 and an image from the resolver.
    pub fn add_item(&mut self, name: &str, unit_price: Price) {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.quantity = item.quantity.saturating_add(1);
            tracing::debug!(
                product = %name,
                quantity = item.quantity.get(),
                "Incremented cart line"
            );
            return;
        }

        let image_ref = self.images.resolve(name).to_owned();
        tracing::debug!(product = %name, price = %unit_price, image = %image_ref, "Added cart line");
        self.items.push(LineItem {
            name: name.to_owned(),
            unit_price,
            quantity: NonZeroU32::MIN,
            image_ref,
        });
    }

    /// Remove the line whose name matches `name` exactly.
    ///
    /// Returns the removed line, or `None` if there was none.
    pub fn remove_item(&mut self, name: &str) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.name == name)?;
        let removed = self.items.remove(index);
        tracing::debug!(product = %name, quantity = removed.quantity.get(), "Removed cart line");
        Some(removed)
    }

    /// Current item count and total, recomputed from the lines.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.items)
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Place the order: capture the summary, then empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Empty`] and leaves the cart untouched if there
    /// is nothing to check out.
    pub fn checkout(&mut self) -> Result<CartSummary, CartError> {
        if self.items.is_empty() {
            tracing::debug!("Checkout attempted with empty cart");
            return Err(CartError::Empty);
        }

        let summary = self.summary();
        self.items.clear();
        tracing::info!(
            item_count = summary.item_count,
            total = %summary.total,
            "Checkout completed"
        );
        Ok(summary)
    }

    /// The image resolver used for new lines.
    #[must_use]
    pub const fn images(&self) -> &R {
        &self.images
    }
}

impl<R: ImageResolver + Default> Default for CartStore<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::image::{DEFAULT_IMAGE, TableImageResolver};

    fn cart() -> CartStore<TableImageResolver> {
        CartStore::new(TableImageResolver::new(&[(
            "Notebook",
            "assets/images/nb2.jpg",
        )]))
    }

    fn cents(c: u32) -> Price {
        Price::from_cents(c)
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = cart();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert!(cart.items().is_empty());
        assert_eq!(cart.summary(), CartSummary::EMPTY);
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = cart();
        cart.add_item("Notebook", cents(999));

        let item = cart.get("Notebook").unwrap();
        assert_eq!(item.quantity.get(), 1);
        assert_eq!(item.unit_price, cents(999));
        assert_eq!(item.image_ref, "assets/images/nb2.jpg");
    }

    #[test]
    fn test_add_unmapped_item_uses_fallback_image() {
        let mut cart = cart();
        cart.add_item("Pen", cents(250));
        assert_eq!(cart.get("Pen").unwrap().image_ref, DEFAULT_IMAGE);
    }

    #[test]
    fn test_add_same_name_aggregates_and_keeps_first_price() {
        let mut cart = cart();
        cart.add_item("Pen", cents(250));
        cart.add_item("Pen", cents(900));

        assert_eq!(cart.len(), 1);
        let item = cart.get("Pen").unwrap();
        assert_eq!(item.quantity.get(), 2);
        assert_eq!(item.unit_price, cents(250));
        assert_eq!(cart.summary(), CartSummary::new(2, cents(500)));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = cart();
        cart.add_item("B", cents(100));
        cart.add_item("A", cents(100));
        cart.add_item("B", cents(100));
        cart.add_item("C", cents(100));

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_remove_drops_whole_line() {
        let mut cart = cart();
        cart.add_item("Pen", cents(250));
        cart.add_item("Pen", cents(250));
        cart.add_item("Notebook", cents(999));

        let removed = cart.remove_item("Pen").unwrap();
        assert_eq!(removed.quantity.get(), 2);
        assert!(cart.get("Pen").is_none());
        assert_eq!(cart.summary(), CartSummary::new(1, cents(999)));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = cart();
        cart.add_item("Pen", cents(250));
        let before = cart.clone();

        assert!(cart.remove_item("Eraser").is_none());
        // Names are matched case-sensitively
        assert!(cart.remove_item("pen").is_none());

        assert_eq!(cart.items(), before.items());
        assert_eq!(cart.summary(), before.summary());
    }

    #[test]
    fn test_zero_price_item() {
        let mut cart = cart();
        cart.add_item("Free Sticker", Price::ZERO);
        cart.add_item("Free Sticker", Price::ZERO);
        assert_eq!(cart.summary(), CartSummary::new(2, Price::ZERO));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = cart();
        cart.add_item("Pen", cents(1));
        cart.items[0].quantity = NonZeroU32::MAX;
        cart.add_item("Pen", cents(1));
        assert_eq!(cart.get("Pen").unwrap().quantity, NonZeroU32::MAX);
    }

    #[test]
    fn test_checkout_returns_summary_and_clears() {
        let mut cart = cart();
        cart.add_item("Pen", cents(250));
        cart.add_item("Notebook", cents(999));
        let expected = cart.summary();

        let receipt = cart.checkout().unwrap();
        assert_eq!(receipt, expected);
        assert!(cart.is_empty());
        assert_eq!(cart.summary(), CartSummary::EMPTY);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = cart();
        assert_eq!(cart.checkout(), Err(CartError::Empty));
        assert!(cart.is_empty());
        assert_eq!(cart.checkout(), Err(CartError::Empty));
    }

    #[test]
    fn test_cart_usable_after_checkout() {
        let mut cart = cart();
        cart.add_item("Pen", cents(250));
        cart.checkout().unwrap();

        cart.add_item("Pen", cents(300));
        let item = cart.get("Pen").unwrap();
        assert_eq!(item.quantity.get(), 1);
        assert_eq!(item.unit_price, cents(300));
    }

    #[test]
    fn test_summary_of_matches_manual_sum() {
        let mut cart = cart();
        for (name, price) in [("A", 125), ("B", 1999), ("A", 125), ("C", 5), ("B", 1999)] {
            cart.add_item(name, cents(price));
        }
        cart.remove_item("C");

        let manual: Price = cart
            .items()
            .iter()
            .map(|i| i.unit_price.times(i.quantity.get()))
            .sum();
        assert_eq!(cart.summary().total, manual);
        assert_eq!(cart.summary().item_count, 4);
        assert_eq!(manual, cents(4248));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CartError::Empty.to_string(), "cart is empty");
    }
}
