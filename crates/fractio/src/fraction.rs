//! Non-reducing fractions.
//!
//! A [`Fraction`] stores its numerator and denominator exactly as
//! supplied. No operation ever reduces, so `2/4` and `1/2` are distinct
//! representations that compare equal by value.

use std::cmp::Ordering;
use std::fmt;

use fractio_domain::{IntegralDomain, OrderedDomain};

use crate::ZeroDenominator;

/// A fraction n/d over an integral domain, kept exactly as supplied.
///
/// # Invariants
///
/// - The denominator is nonzero, checked at construction only; every
///   operation routes its result through the constructor or preserves
///   the invariant directly
///
/// Equality is by value, via cross multiplication, so unreduced
/// representations of the same value compare equal.
#[derive(Clone, Debug)]
pub struct Fraction<T: IntegralDomain> {
    numerator: T,
    denominator: T,
}

impl<T: IntegralDomain> Fraction<T> {
    /// Creates a new fraction from numerator and denominator.
    ///
    /// The pair is stored verbatim, never reduced.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: T, denominator: T) -> Result<Self, ZeroDenominator> {
        if denominator.is_zero() {
            return Err(ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &T {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> &T {
        &self.denominator
    }

    /// Formats the fraction with both parts rendered in the given radix.
    ///
    /// The radix is forwarded opaquely to the element type; domains
    /// without a positional representation ignore it.
    #[must_use]
    pub fn to_string_radix(&self, radix: u32) -> String {
        format!(
            "({})/({})",
            self.numerator.to_string_radix(radix),
            self.denominator.to_string_radix(radix)
        )
    }

    /// Negates the fraction.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            numerator: -self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }

    /// Swaps numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if the numerator is zero, since it
    /// becomes the new denominator.
    pub fn reciprocate(&self) -> Result<Self, ZeroDenominator> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Adds two fractions by reference.
    ///
    /// a/b + c/d = (ad + bc) / bd
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        // bd is nonzero: an integral domain has no zero divisors.
        Self {
            numerator: a.clone() * d.clone() + b.clone() * c.clone(),
            denominator: b.clone() * d.clone(),
        }
    }

    /// Subtracts another fraction by reference.
    ///
    /// a/b - c/d = (ad - bc) / bd
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        Self {
            numerator: a.clone() * d.clone() - b.clone() * c.clone(),
            denominator: b.clone() * d.clone(),
        }
    }

    /// Multiplies two fractions by reference.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        Self {
            numerator: self.numerator.clone() * other.numerator.clone(),
            denominator: self.denominator.clone() * other.denominator.clone(),
        }
    }

    /// Divides by another fraction.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if `other`'s numerator is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, ZeroDenominator> {
        Self::new(
            self.numerator.clone() * other.denominator.clone(),
            self.denominator.clone() * other.numerator.clone(),
        )
    }

    /// Raises to an integer power.
    ///
    /// A negative exponent swaps numerator and denominator before raising
    /// both to `-exponent`. `pow(0)` maps `0/d` to `(0^0)/(d^0)`, leaving
    /// the behavior of `0^0` to the domain.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if `exponent` is negative and the
    /// numerator is zero.
    pub fn pow(&self, exponent: i32) -> Result<Self, ZeroDenominator> {
        let n = exponent.unsigned_abs();
        if exponent < 0 {
            return Self::new(self.denominator.pow(n), self.numerator.pow(n));
        }
        // d^n is nonzero because d is and the domain has no zero divisors.
        Ok(Self {
            numerator: self.numerator.pow(n),
            denominator: self.denominator.pow(n),
        })
    }
}

impl<T: OrderedDomain> Fraction<T> {
    /// Returns the sign of the value: -1, 0, or 1.
    ///
    /// The value is positive exactly when numerator and denominator have
    /// the same sign.
    #[must_use]
    pub fn signum(&self) -> i8 {
        let ns = self.numerator.signum();
        if ns == 0 {
            0
        } else if (ns > 0) == (self.denominator.signum() > 0) {
            1
        } else {
            -1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.abs(),
        }
    }
}

impl<T: IntegralDomain> PartialEq for Fraction<T> {
    /// Compares by value: a/b == c/d iff ad == bc.
    ///
    /// Cross multiplication is a valid equality test in any integral
    /// domain, independent of reduction.
    fn eq(&self, other: &Self) -> bool {
        self.numerator.clone() * other.denominator.clone()
            == self.denominator.clone() * other.numerator.clone()
    }
}

impl<T: IntegralDomain> Eq for Fraction<T> {}

impl<T: OrderedDomain> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: OrderedDomain> Ord for Fraction<T> {
    /// Compares by value.
    ///
    /// Cross multiplying flips the ordering when exactly one denominator
    /// is negative, so the cross-product comparison is corrected by the
    /// denominators' relative sign.
    fn cmp(&self, other: &Self) -> Ordering {
        let cross = (self.numerator.clone() * other.denominator.clone())
            .cmp(&(self.denominator.clone() * other.numerator.clone()));
        if (self.denominator.signum() > 0) == (other.denominator.signum() > 0) {
            cross
        } else {
            cross.reverse()
        }
    }
}

impl<T: IntegralDomain> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})/({})", self.numerator, self.denominator)
    }
}
