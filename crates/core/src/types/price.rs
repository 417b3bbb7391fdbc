//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog is single-currency (USD), so a price is a thin wrapper
//! around [`Decimal`]. Floating point is never used for money.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in US dollars.
///
/// Stored in the currency's standard unit (dollars, not cents) with exact
/// decimal arithmetic. Display renders the conventional `$X.XX` form,
/// rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The amount saved when this price replaces `original`.
    ///
    /// Returns [`Price::ZERO`] when there is no markdown.
    #[must_use]
    pub fn savings_from(&self, original: Self) -> Self {
        if original.0 > self.0 {
            Self(original.0 - self.0)
        } else {
            Self::ZERO
        }
    }

    /// The whole-number percentage off `original` this price represents.
    ///
    /// Rounds to the nearest integer; a zero or lower `original` yields 0.
    #[must_use]
    pub fn percent_off(&self, original: Self) -> u8 {
        if original.0 <= Decimal::ZERO || self.0 >= original.0 {
            return 0;
        }
        let ratio = (original.0 - self.0) / original.0 * Decimal::ONE_HUNDRED;
        u8::try_from(ratio.round().mantissa()).unwrap_or(100).min(100)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        if rounded.is_sign_negative() {
            write!(f, "-${:.2}", -rounded)
        } else {
            write!(f, "${rounded:.2}")
        }
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
