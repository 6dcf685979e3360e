//! Type-safe price representation using decimal arithmetic.
//!
//! Prices travel through the storefront as [`Price`] values from the moment
//! they are parsed at the HTTP boundary until they are formatted for display.
//! A `Price` is always finite and non-negative, so totals computed from it
//! cannot be poisoned by a malformed input.

use core::fmt;
use core::iter::Sum;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input is not a decimal number.
    #[error("price is not a valid number: {0:?}")]
    Invalid(String),
}

/// A non-negative amount in the store currency.
///
/// ## Examples
///
/// ```
/// use quill_core::Price;
///
/// let pen = Price::parse("2.50").unwrap();
/// assert_eq!(pen.display(), "$2.50");
///
/// assert!(Price::parse("NaN").is_err());
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("$2.50").is_err()); // no symbol stripping
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount.normalize()))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(Decimal::from_parts(cents, 0, 0, false, 2))
    }

    /// Parse a price from its plain decimal text, e.g. `"9.99"`.
    ///
    /// Surrounding whitespace is ignored. Currency symbols are not stripped.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] for anything that is not a decimal
    /// number (including `NaN` and infinities) and [`PriceError::Negative`]
    /// for amounts below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        let amount =
            Decimal::from_str(trimmed).map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;
        Self::new(amount)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Format for display, e.g. `"$19.99"`.
    ///
    /// Half-cent amounts round away from zero (`0.125` shows as `$0.13`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{CURRENCY_SYMBOL}{}", self.plain())
    }

    /// Format without the currency symbol, e.g. `"19.99"`.
    ///
    /// This is the form posted back by add-to-cart buttons.
    #[must_use]
    pub fn plain(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl core::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}
