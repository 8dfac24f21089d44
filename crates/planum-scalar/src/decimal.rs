//! Fixed-precision decimal numbers.
//!
//! This module provides a wrapper around `dashu::float::DBig` pinned to
//! 30 significant decimal digits. Every constructor routes through the
//! same precision so arithmetic never silently degrades to the precision
//! of a short literal.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use dashu::base::{Abs, SquareRoot};
use dashu::float::DBig;
use dashu::integer::IBig;
use num_traits::{One, Zero};
use thiserror::Error;

/// Number of significant decimal digits carried by every [`Decimal`].
pub const PRECISION: usize = 30;

/// The shared near-zero tolerance.
///
/// A scalar is "near zero" when its magnitude is below this value. Pivot
/// detection, zero-vector detection and hyperplane equality all use this
/// one tolerance; keeping them consistent is load-bearing for the solver.
pub const NEAR_ZERO: f64 = 1e-10;

/// Error returned when a string is not a valid decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal")]
pub struct ParseDecimalError;

/// A 30-significant-digit decimal number.
///
/// Half-away rounding, total ordering, no NaN or infinities. Division and
/// square root round the exact result to [`PRECISION`] digits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(DBig);

impl Decimal {
    /// Creates a decimal from an i64.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(DBig::from_parts(IBig::from(value), 0).with_precision(PRECISION).value())
    }

    /// Creates a decimal from a finite f64 via its shortest decimal form.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or infinite.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        assert!(value.is_finite(), "Decimal::from_f64 requires a finite value");
        // Shortest-roundtrip formatting keeps the literal the caller wrote
        // rather than the full binary expansion of the float.
        format!("{value}")
            .parse()
            .expect("a finite f64 formats as a valid decimal literal")
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the square root, rounded to [`PRECISION`] digits.
    ///
    /// # Panics
    ///
    /// Panics if the value is negative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        Self(self.0.sqrt())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the value is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self::one() / self.clone()
    }

    /// Converts to the nearest f64.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns true if the magnitude is below [`NEAR_ZERO`].
    #[must_use]
    pub fn is_near_zero(&self) -> bool {
        self.is_near_zero_within(NEAR_ZERO)
    }

    /// Returns true if the magnitude is below `eps`.
    #[must_use]
    pub fn is_near_zero_within(&self, eps: f64) -> bool {
        self.to_f64().abs() < eps
    }

    /// Returns true if `self` and `other` differ by less than [`NEAR_ZERO`].
    #[must_use]
    pub fn is_near(&self, other: &Self) -> bool {
        (self.clone() - other.clone()).is_near_zero()
    }

    /// Returns the inner `dashu::float::DBig`.
    #[must_use]
    pub fn into_inner(self) -> DBig {
        self.0
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self(DBig::ZERO.with_precision(PRECISION).value())
    }

    fn is_zero(&self) -> bool {
        self.0 == DBig::ZERO
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self(DBig::ONE.with_precision(PRECISION).value())
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.parse::<DBig>().map_err(|_| ParseDecimalError)?;
        Ok(Self(raw.with_precision(PRECISION).value()))
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Div for Decimal {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}
