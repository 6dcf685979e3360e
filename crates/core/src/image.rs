//! Product image lookup.
//!
//! The cart resolves a display image once, when a line item is first
//! created. Lookups are pluggable so that a page with its own image set
//! (a category page, say) supplies a different table instead of patching
//! the lookup at runtime.

use std::collections::HashMap;
use std::sync::Arc;

/// Fallback image used when a product name has no mapping.
pub const DEFAULT_IMAGE: &str = "assets/images/nb1.jpg";

/// Maps a product name to a static asset path.
///
/// Implementations must be total: unknown names resolve to a fallback
/// path rather than failing.
pub trait ImageResolver {
    /// Returns the image path for `name`.
    fn resolve(&self, name: &str) -> &str;
}

impl<R: ImageResolver + ?Sized> ImageResolver for &R {
    fn resolve(&self, name: &str) -> &str {
        (**self).resolve(name)
    }
}

impl<R: ImageResolver + ?Sized> ImageResolver for Box<R> {
    fn resolve(&self, name: &str) -> &str {
        (**self).resolve(name)
    }
}

impl<R: ImageResolver + ?Sized> ImageResolver for Arc<R> {
    fn resolve(&self, name: &str) -> &str {
        (**self).resolve(name)
    }
}

/// A fixed `name -> path` table with a single fallback path.
///
/// ```
/// use quill_core::{ImageResolver, TableImageResolver};
///
/// let images = TableImageResolver::new(&[("Bullet Journal", "assets/images/nb12.jpg")]);
/// assert_eq!(images.resolve("Bullet Journal"), "assets/images/nb12.jpg");
/// assert_eq!(images.resolve("Mystery Item"), "assets/images/nb1.jpg");
/// ```
#[derive(Debug, Clone)]
pub struct TableImageResolver {
    table: HashMap<&'static str, &'static str>,
    fallback: &'static str,
}

impl TableImageResolver {
    /// Build a resolver from `(name, path)` pairs using [`DEFAULT_IMAGE`] as the fallback.
    ///
    /// Later pairs override earlier ones with the same name.
    #[must_use]
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self::with_fallback(entries, DEFAULT_IMAGE)
    }

    /// Build a resolver with an explicit fallback path.
    #[must_use]
    pub fn with_fallback(entries: &[(&'static str, &'static str)], fallback: &'static str) -> Self {
        Self {
            table: entries.iter().copied().collect(),
            fallback,
        }
    }

    /// Returns the mapped path for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.table.get(name).copied()
    }

    /// Number of mapped names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no names are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ImageResolver for TableImageResolver {
    fn resolve(&self, name: &str) -> &str {
        self.get(name).unwrap_or(self.fallback)
    }
}

/// Consults a primary table first and defers everything else to a base resolver.
#[derive(Debug, Clone)]
pub struct LayeredImageResolver<B> {
    primary: TableImageResolver,
    base: B,
}

impl<B: ImageResolver> LayeredImageResolver<B> {
    /// Layer `primary` over `base`.
    #[must_use]
    pub const fn new(primary: TableImageResolver, base: B) -> Self {
        Self { primary, base }
    }
}

impl<B: ImageResolver> ImageResolver for LayeredImageResolver<B> {
    fn resolve(&self, name: &str) -> &str {
        match self.primary.get(name) {
            Some(path) => path,
            None => self.base.resolve(name),
        }
    }
}
