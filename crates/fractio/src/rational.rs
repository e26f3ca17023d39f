//! Canonical rationals.
//!
//! A [`Rational`] keeps its numerator/denominator pair in lowest terms,
//! with a nonnegative denominator whenever the domain is ordered. Every
//! construction path restores canonical form, which is what lets equality
//! collapse to plain field comparison.

use std::cmp::Ordering;
use std::fmt;

use fractio_domain::{GcdDomain, OrderedDomain};

use crate::ZeroDenominator;

/// How much normalization a freshly assembled pair still needs.
///
/// Derived operations use this to skip gcd work they can prove redundant:
/// negating a canonical pair cannot introduce a common factor, and
/// swapping a reduced pair leaves it reduced but may expose a negative
/// denominator.
#[derive(Clone, Copy)]
enum Normalize {
    /// Divide out the gcd, then fix the denominator sign.
    Full,
    /// The pair is reduced; only the denominator sign may be wrong.
    SignOnly,
    /// The pair is already canonical.
    None,
}

/// A rational n/d over a GCD domain, always kept in canonical form.
///
/// # Invariants
///
/// - The denominator is nonzero
/// - The pair is reduced: gcd(n, d) is a unit
/// - When the domain is ordered, the denominator is nonnegative
/// - Zero is represented as 0/1
///
/// Because every instance is canonical, the derived structural equality
/// is value equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational<T: GcdDomain> {
    numerator: T,
    denominator: T,
}

impl<T: GcdDomain> Rational<T> {
    /// The single canonicalization routine behind every construction
    /// path. The denominator must already be known nonzero.
    fn build(mut numerator: T, mut denominator: T, how: Normalize) -> Self {
        if matches!(how, Normalize::Full) {
            // gcd(0, d) == d, so a zero numerator collapses to 0/1 here.
            let g = numerator.gcd(&denominator);
            numerator = numerator.exact_div(&g);
            denominator = denominator.exact_div(&g);
        }
        if !matches!(how, Normalize::None) && denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a new rational from numerator and denominator.
    ///
    /// The pair is reduced by its gcd and, when the domain is ordered,
    /// sign-normalized so the denominator is nonnegative.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: T, denominator: T) -> Result<Self, ZeroDenominator> {
        if denominator.is_zero() {
            return Err(ZeroDenominator);
        }
        Ok(Self::build(numerator, denominator, Normalize::Full))
    }

    /// Returns the numerator of the canonical form.
    #[must_use]
    pub fn numerator(&self) -> &T {
        &self.numerator
    }

    /// Returns the denominator of the canonical form.
    #[must_use]
    pub fn denominator(&self) -> &T {
        &self.denominator
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Formats the rational with both parts rendered in the given radix.
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

    /// Negates the rational.
    ///
    /// Flipping the numerator's sign cannot introduce a common factor and
    /// leaves the denominator untouched, so no normalization runs.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::build(
            -self.numerator.clone(),
            self.denominator.clone(),
            Normalize::None,
        )
    }

    /// Swaps numerator and denominator.
    ///
    /// A reduced pair stays reduced when swapped, so only the sign fixup
    /// runs: the old numerator may have been negative.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if the value is zero.
    pub fn reciprocate(&self) -> Result<Self, ZeroDenominator> {
        if self.numerator.is_zero() {
            return Err(ZeroDenominator);
        }
        Ok(Self::build(
            self.denominator.clone(),
            self.numerator.clone(),
            Normalize::SignOnly,
        ))
    }

    /// Adds two rationals by reference.
    ///
    /// a/b + c/d = (ad + bc) / bd, fully re-canonicalized: a sum of two
    /// reduced fractions need not be reduced.
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        // bd is nonzero: an integral domain has no zero divisors.
        Self::build(
            a.clone() * d.clone() + b.clone() * c.clone(),
            b.clone() * d.clone(),
            Normalize::Full,
        )
    }

    /// Subtracts another rational by reference.
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        Self::build(
            a.clone() * d.clone() - b.clone() * c.clone(),
            b.clone() * d.clone(),
            Normalize::Full,
        )
    }

    /// Multiplies two rationals by reference.
    ///
    /// Cross-reduces before multiplying: with g1 = gcd(a, d) and
    /// g2 = gcd(b, c), the product ((a/g1)(c/g2)) / ((b/g2)(d/g1)) is
    /// already reduced, and both operand denominators were already
    /// nonnegative, so the result skips normalization entirely. Reducing
    /// first also keeps the intermediate products small.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        let (a, b) = (&self.numerator, &self.denominator);
        let (c, d) = (&other.numerator, &other.denominator);
        let g1 = a.gcd(d);
        let g2 = b.gcd(c);
        Self::build(
            a.exact_div(&g1) * c.exact_div(&g2),
            b.exact_div(&g2) * d.exact_div(&g1),
            Normalize::None,
        )
    }

    /// Divides by another rational.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self, ZeroDenominator> {
        Ok(self.mul_ref(&other.reciprocate()?))
    }

    /// Raises to an integer power.
    ///
    /// Powers of a reduced pair stay reduced, so no gcd is recomputed. A
    /// negative exponent swaps numerator and denominator first, which may
    /// need a sign fixup when the numerator was negative. `pow(0)` maps
    /// zero to `(0^0)/(1^0)`, leaving the behavior of `0^0` to the
    /// domain.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDenominator`] if `exponent` is negative and the
    /// value is zero.
    pub fn pow(&self, exponent: i32) -> Result<Self, ZeroDenominator> {
        let n = exponent.unsigned_abs();
        if exponent < 0 {
            if self.numerator.is_zero() {
                return Err(ZeroDenominator);
            }
            return Ok(Self::build(
                self.denominator.pow(n),
                self.numerator.pow(n),
                Normalize::SignOnly,
            ));
        }
        Ok(Self::build(
            self.numerator.pow(n),
            self.denominator.pow(n),
            Normalize::None,
        ))
    }
}

impl<T: GcdDomain + OrderedDomain> Rational<T> {
    /// Returns the sign of the value: -1, 0, or 1.
    ///
    /// The canonical denominator is nonnegative, so this is just the
    /// numerator's sign.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns the absolute value.
    ///
    /// The pair stays reduced and the denominator keeps its sign, so no
    /// normalization runs.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::build(
            self.numerator.abs(),
            self.denominator.clone(),
            Normalize::None,
        )
    }

    /// Returns the smaller of the two values, `self` on ties.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }

    /// Returns the greater of the two values, `self` on ties.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self >= other {
            self
        } else {
            other
        }
    }
}

impl<T: GcdDomain + OrderedDomain> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: GcdDomain + OrderedDomain> Ord for Rational<T> {
    /// Compares by value.
    ///
    /// Both denominators are nonnegative by the canonical-form invariant,
    /// so the cross-product comparison needs no sign correction.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator.clone() * other.denominator.clone())
            .cmp(&(self.denominator.clone() * other.numerator.clone()))
    }
}

impl<T: GcdDomain> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})/({})", self.numerator, self.denominator)
    }
}
