//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing prices as floats drifts:                                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices arrive as JSON numbers, are rounded to cents ONCE at the      │
//! │    boundary (from_decimal), and every sum/product after that is exact.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display
//! `Display` renders Brazilian Real: `R$ 1.234,56` (thousands `.`,
//! decimal `,`). [`Money::to_decimal_string`] renders the bare two-digit
//! decimal (`1234.56`) used by the average-price card.
//!
//! ## Usage
//! ```rust
//! use vitrine_core::money::Money;
//!
//! let price = Money::from_cents(5000); // R$ 50,00
//! let stock_value = price.multiply_quantity(2);
//! assert_eq!(stock_value.to_string(), "R$ 100,00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (the smallest BRL unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never has to special-case underflow
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──┬──► stock value (price × quantity) ──► total value
///                       │
///                       ├──► Σ price / count ──► average price
///                       │
///                       └──► "R$ 50,00" in the table price column
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // R$ 10,99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount (as decoded from JSON) to cents.
    ///
    /// This is the only place a float becomes money. The value is rounded
    /// to the nearest cent; `None` when the value is not finite or does not
    /// fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(49.99), Some(Money::from_cents(4999)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(299).checked_multiply_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Divides by `divisor`, rounding half away from zero on the cent.
    ///
    /// Returns `None` for a zero divisor.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// // R$ 10,00 / 3 = R$ 3,333... → R$ 3,33
    /// assert_eq!(Money::from_cents(1000).divide_rounded(3), Some(Money::from_cents(333)));
    /// // R$ 0,05 / 2 = R$ 0,025 → R$ 0,03
    /// assert_eq!(Money::from_cents(5).divide_rounded(2), Some(Money::from_cents(3)));
    /// ```
    pub fn divide_rounded(&self, divisor: i64) -> Option<Money> {
        if divisor == 0 {
            return None;
        }
        // i128 so that the doubled numerator cannot overflow
        let num = self.0 as i128 * 2;
        let den = divisor as i128 * 2;
        let half = den.abs() / 2;
        let adjusted = if (num < 0) == (den < 0) { num + half } else { num - half };
        Some(Money((adjusted / den) as i64))
    }

    /// Renders the bare decimal with two fractional digits (`1234.56`).
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(10000).to_decimal_string(), "100.00");
    /// assert_eq!(Money::from_cents(-550).to_decimal_string(), "-5.50");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Groups the integer part in thousands with `.` (pt-BR convention).
fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders Brazilian Real currency: `R$ 1.234,56`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Sums saturate: an aggregate of valid products never panics or wraps.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
