//! Exact decimal money type for the reconciliation.
//!
//! Wraps `rust_decimal` so every accumulation step stays in exact base-10
//! arithmetic. Rounding to two places is strictly a presentation-time
//! operation applied once per displayed figure.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// VAT rate applied to net sales in EU member states (25%).
///
/// 0.25 is exactly representable in decimal, so multiplying and dividing
/// by it introduces no rounding error.
pub fn vat_rate() -> Decimal {
    Decimal::new(25, 2)
}

/// An exact monetary amount.
///
/// Unlike a fixed-scale type, `Money` keeps whatever precision arithmetic
/// produces; `Display` renders with exactly two decimal places using
/// half-away-from-zero rounding.
///
/// # Examples
///
/// ```
/// use vat_recon::Money;
///
/// let amount = Money::parse("1,50").unwrap();
/// assert_eq!(amount.to_string(), "1.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Parses an amount from an export field.
    ///
    /// Empty (or whitespace-only) input means zero. A comma decimal
    /// separator is normalized to a period before parsing; anything else
    /// that fails to parse is an error for the caller to surface.
    pub fn parse(raw: &str) -> Result<Self, rust_decimal::Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Money::ZERO);
        }
        let normalized = trimmed.replace(',', ".");
        Decimal::from_str(&normalized).map(Money)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The VAT accrued on this net amount: `self * 0.25`, exact.
    pub fn vat_portion(&self) -> Money {
        Money(self.0 * vat_rate())
    }

    /// The sales value implied by this VAT amount: `self / 0.25`, exact
    /// for the fixed rate.
    pub fn gross_up(&self) -> Money {
        Money(self.0 / vat_rate())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
