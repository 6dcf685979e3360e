//! Display-layer product records for the product grid.
//!
//! These are not cart lines: a [`Product`] is what a grid card shows, and
//! sorting or filtering always works on a copy so the catalog order itself
//! (the "featured" order) is never disturbed.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Product category, as shown on category pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Notebooks,
    Pens,
    ArtSupplies,
    Planners,
    OfficeEssentials,
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Self; 5] = [
        Self::Notebooks,
        Self::Pens,
        Self::ArtSupplies,
        Self::Planners,
        Self::OfficeEssentials,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Notebooks => "Notebooks",
            Self::Pens => "Pens",
            Self::ArtSupplies => "Art Supplies",
            Self::Planners => "Planners",
            Self::OfficeEssentials => "Office Essentials",
        }
    }

    /// URL segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notebooks => "notebooks",
            Self::Pens => "pens",
            Self::ArtSupplies => "art-supplies",
            Self::Planners => "planners",
            Self::OfficeEssentials => "office-essentials",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// A product card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub slug: String,
    pub price: Price,
    pub category: Category,
    pub description: String,
    pub image: String,
}

impl Product {
    /// Create a product; the slug is derived from the name.
    #[must_use]
    pub fn new(
        name: &str,
        price: Price,
        category: Category,
        description: &str,
        image: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            slug: slugify(name),
            price,
            category,
            description: description.to_owned(),
            image: image.to_owned(),
        }
    }

    /// Case-insensitive substring match on name or description.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Turn a product name into a URL segment: `"Weekly Planner 2025"` becomes `"weekly-planner-2025"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Grid sort order, keyed by the `sort` select values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Name,
}

impl SortOrder {
    /// Every order in select-box order.
    pub const ALL: [Self; 4] = [Self::Featured, Self::PriceLow, Self::PriceHigh, Self::Name];

    /// Parse a select value; anything unrecognised keeps the featured order.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            _ => Self::Featured,
        }
    }

    /// The select value.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
        }
    }

    /// The option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Name => "Name",
        }
    }

    /// Return a sorted copy of `products`. Equal keys keep their relative order.
    #[must_use]
    pub fn apply(self, products: &[Product]) -> Vec<Product> {
        let mut sorted = products.to_vec();
        match self {
            Self::Featured => {}
            Self::PriceLow => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Name => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        }
        sorted
    }
}

/// Name order for display: case-insensitive first, then by raw text.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Grid or list layout for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Parse a view toggle value; anything but `"list"` is the grid.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key == "list" { Self::List } else { Self::Grid }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List)
    }
}

/// Products whose name or description contains `term`, in their original order.
#[must_use]
pub fn filter(products: &[Product], term: &str) -> Vec<Product> {
    products.iter().filter(|p| p.matches(term)).cloned().collect()
}

/// Find a product by slug.
#[must_use]
pub fn find_by_slug<'a>(products: &'a [Product], slug: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, cents: u32, description: &str) -> Product {
        Product::new(
            name,
            Price::from_cents(cents),
            Category::Notebooks,
            description,
            "assets/images/nb1.jpg",
        )
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("Spiral Bound Notebook", 899, "Classic spiral binding"),
            product("bullet Journal", 1899, "Dotted pages"),
            product("Artist Sketchbook", 1899, "Heavyweight paper for sketching"),
            product("Eco-Friendly Notebook", 1299, "Recycled paper"),
        ]
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Weekly Planner 2025"), "weekly-planner-2025");
        assert_eq!(slugify("Eco-Friendly Notebook"), "eco-friendly-notebook");
        assert_eq!(slugify("  Pens & Pencils!! "), "pens-pencils");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_featured_keeps_order() {
        let products = sample();
        let sorted = SortOrder::Featured.apply(&products);
        assert_eq!(sorted, products);
    }

    #[test]
    fn test_price_low_is_stable() {
        let sorted = SortOrder::PriceLow.apply(&sample());
        assert_eq!(
            names(&sorted),
            [
                "Spiral Bound Notebook",
                "Eco-Friendly Notebook",
                "bullet Journal",
                "Artist Sketchbook",
            ]
        );
    }

    #[test]
    fn test_price_high_is_stable() {
        let sorted = SortOrder::PriceHigh.apply(&sample());
        assert_eq!(
            names(&sorted),
            [
                "bullet Journal",
                "Artist Sketchbook",
                "Eco-Friendly Notebook",
                "Spiral Bound Notebook",
            ]
        );
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let sorted = SortOrder::Name.apply(&sample());
        assert_eq!(
            names(&sorted),
            [
                "Artist Sketchbook",
                "bullet Journal",
                "Eco-Friendly Notebook",
                "Spiral Bound Notebook",
            ]
        );
    }

    #[test]
    fn test_sort_does_not_touch_source() {
        let products = sample();
        let _ = SortOrder::Name.apply(&products);
        assert_eq!(products, sample());
    }

    #[test]
    fn test_compare_names_tie_break() {
        assert_eq!(compare_names("pen", "Pen"), Ordering::Greater);
        assert_eq!(compare_names("Pen", "Pen"), Ordering::Equal);
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_sort_order_keys() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_key(order.key()), order);
        }
        assert_eq!(SortOrder::from_key("bogus"), SortOrder::Featured);
        assert_eq!(SortOrder::from_key(""), SortOrder::Featured);
    }

    #[test]
    fn test_view_mode() {
        assert_eq!(ViewMode::from_key("list"), ViewMode::List);
        assert_eq!(ViewMode::from_key("grid"), ViewMode::Grid);
        assert_eq!(ViewMode::from_key("tiles"), ViewMode::Grid);
        assert!(ViewMode::List.is_list());
    }

    #[test]
    fn test_filter_matches_name_and_description() {
        let products = sample();
        assert_eq!(
            names(&filter(&products, "NOTEBOOK")),
            ["Spiral Bound Notebook", "Eco-Friendly Notebook"]
        );
        assert_eq!(names(&filter(&products, "paper")), [
            "Artist Sketchbook",
            "Eco-Friendly Notebook"
        ]);
        assert!(filter(&products, "stapler").is_empty());
    }

    #[test]
    fn test_filter_blank_term_matches_all() {
        let products = sample();
        assert_eq!(filter(&products, "   ").len(), products.len());
        assert_eq!(filter(&products, "").len(), products.len());
    }

    #[test]
    fn test_find_by_slug() {
        let products = sample();
        let found = find_by_slug(&products, "bullet-journal");
        assert_eq!(found.map(|p| p.name.as_str()), Some("bullet Journal"));
        assert!(find_by_slug(&products, "missing").is_none());
    }

    #[test]
    fn test_category_round_trip_keys() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("stickers".parse::<Category>().is_err());
    }
}
