//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` implementing the
//! domain traits that the fraction types are generic over.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use fractio_domain::{GcdDomain, IntegralDomain, OrderedDomain};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig` and provides the ordered GCD domain
/// behavior that `Fraction` and `Rational` expect of their element type.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Int(IBig);

impl Int {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Computes the greatest common divisor.
    ///
    /// The result is always nonnegative, and `gcd(a, 0) == gcd(0, a)`
    /// equals `|a|`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Int {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Int {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl IntegralDomain for Int {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n as usize))
    }

    fn to_string_radix(&self, radix: u32) -> String {
        self.0.in_radix(radix).to_string()
    }
}

impl GcdDomain for Int {
    fn gcd(&self, other: &Self) -> Self {
        Int::gcd(self, other)
    }

    fn exact_div(&self, divisor: &Self) -> Self {
        Self(&self.0 / &divisor.0)
    }

    fn is_negative(&self) -> bool {
        Int::is_negative(self)
    }
}

impl OrderedDomain for Int {
    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn signum(&self) -> i8 {
        if self.0 == IBig::ZERO {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int({})", self.0)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Int {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Int> for Int {
    type Output = Self;

    fn add(self, rhs: &Int) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Self::Output {
        Int(&self.0 + &rhs.0)
    }
}

impl Sub for Int {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Int> for Int {
    type Output = Self;

    fn sub(self, rhs: &Int) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Int {
    type Output = Int;

    fn sub(self, rhs: Self) -> Self::Output {
        Int(&self.0 - &rhs.0)
    }
}

impl Mul for Int {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Int> for Int {
    type Output = Self;

    fn mul(self, rhs: &Int) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Self::Output {
        Int(&self.0 * &rhs.0)
    }
}

impl Neg for Int {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Self::Output {
        Int(-&self.0)
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Int {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<IBig> for Int {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Int::new(10);
        let b = Int::new(3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a * b).to_i64(), Some(30));
        assert_eq!((-Int::new(4)).to_i64(), Some(-4));
    }

    #[test]
    fn test_gcd_is_nonnegative() {
        assert_eq!(Int::new(48).gcd(&Int::new(18)).to_i64(), Some(6));
        assert_eq!(Int::new(-48).gcd(&Int::new(18)).to_i64(), Some(6));
        assert_eq!(Int::new(48).gcd(&Int::new(-18)).to_i64(), Some(6));
        assert_eq!(Int::new(-48).gcd(&Int::new(-18)).to_i64(), Some(6));
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(Int::new(0).gcd(&Int::new(7)).to_i64(), Some(7));
        assert_eq!(Int::new(7).gcd(&Int::new(0)).to_i64(), Some(7));
    }

    #[test]
    fn test_exact_div() {
        let a = Int::new(12345);
        let g = Int::new(15);
        assert_eq!(a.exact_div(&g).to_i64(), Some(823));
        assert_eq!(Int::new(-67890).exact_div(&g).to_i64(), Some(-4526));
    }

    #[test]
    fn test_signum_and_abs() {
        assert_eq!(OrderedDomain::signum(&Int::new(-5)), -1);
        assert_eq!(OrderedDomain::signum(&Int::new(0)), 0);
        assert_eq!(OrderedDomain::signum(&Int::new(5)), 1);
        assert_eq!(OrderedDomain::abs(&Int::new(-5)).to_i64(), Some(5));
        assert!(Int::new(-1).is_negative());
        assert!(!Int::new(0).is_negative());
    }

    #[test]
    fn test_radix_formatting() {
        assert_eq!(Int::new(12345).to_string_radix(15), "39d0");
        assert_eq!(Int::new(-67890).to_string_radix(15), "-151b0");
        assert_eq!(Int::new(12345).to_string_radix(10), "12345");
    }

    #[test]
    fn test_pow() {
        assert_eq!(IntegralDomain::pow(&Int::new(2), 9).to_i64(), Some(512));
        assert_eq!(IntegralDomain::pow(&Int::new(-2), 9).to_i64(), Some(-512));
        assert_eq!(IntegralDomain::pow(&Int::new(0), 0).to_i64(), Some(1));
    }

    #[test]
    fn test_large_numbers() {
        let a = IntegralDomain::pow(&Int::new(10), 30);
        let b = a.clone() + Int::new(1);
        assert_eq!((b - a).to_i64(), Some(1));
    }
}
