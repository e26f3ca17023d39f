//! Algebraic capability traits.
//!
//! These traits describe what a numerator/denominator element type must
//! support. The fraction types are generic over them: `Fraction` works
//! over any integral domain, `Rational` over any GCD domain, and the
//! sign/comparison operations need an ordered domain. Ordering is a
//! property of the element type, not of the fraction types, so domains
//! without one (polynomials, Gaussian integers) still get the full
//! arithmetic surface.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with no zero divisors.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - If a * b = 0, then a = 0 or b = 0
pub trait IntegralDomain:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    ///
    /// The default binary exponentiation maps `pow(0)` to `one()` for
    /// every base, so the behavior of `0^0` is the domain's to define.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }

    /// Formats the element in the given radix.
    ///
    /// Domains without a positional representation keep the default,
    /// which ignores the radix and falls back to [`Display`].
    fn to_string_radix(&self, radix: u32) -> String {
        let _ = radix;
        self.to_string()
    }
}

/// An integral domain where every pair of elements has a greatest common
/// divisor.
pub trait GcdDomain: IntegralDomain {
    /// Computes a greatest common divisor.
    ///
    /// # Contract
    ///
    /// - `gcd(a, 0) == gcd(0, a) == a` for every `a`
    /// - In an ordered domain the result is the nonnegative associate
    fn gcd(&self, other: &Self) -> Self;

    /// Divides by a known divisor of `self`.
    ///
    /// Callers guarantee that `divisor` is nonzero and divides `self`
    /// exactly; implementations may ignore any remainder.
    fn exact_div(&self, divisor: &Self) -> Self;

    /// Returns true if the element is negative.
    ///
    /// Ordered domains override this consistently with
    /// [`OrderedDomain::signum`]. Unordered domains keep the `false`
    /// default, which makes denominator sign normalization in `Rational`
    /// a no-op.
    fn is_negative(&self) -> bool {
        false
    }
}

/// An integral domain with a total order compatible with the ring
/// structure.
pub trait OrderedDomain: IntegralDomain + Ord {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}
