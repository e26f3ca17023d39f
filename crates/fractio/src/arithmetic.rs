//! Operator impls for the fraction types.
//!
//! The infallible operations get `std::ops` impls. Division can fail
//! (the divisor may be zero), so it stays a `Result`-returning method on
//! each type and there is no `Div` impl.

use std::ops::{Add, Mul, Neg, Sub};

use fractio_domain::{GcdDomain, IntegralDomain};

use crate::{Fraction, Rational};

impl<T: IntegralDomain> Add for Fraction<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.add_ref(&other)
    }
}

impl<T: IntegralDomain> Add<&Fraction<T>> for Fraction<T> {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        self.add_ref(other)
    }
}

impl<T: IntegralDomain> Sub for Fraction<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.sub_ref(&other)
    }
}

impl<T: IntegralDomain> Sub<&Fraction<T>> for Fraction<T> {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        self.sub_ref(other)
    }
}

impl<T: IntegralDomain> Mul for Fraction<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_ref(&other)
    }
}

impl<T: IntegralDomain> Mul<&Fraction<T>> for Fraction<T> {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        self.mul_ref(other)
    }
}

impl<T: IntegralDomain> Neg for Fraction<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: GcdDomain> Add for Rational<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.add_ref(&other)
    }
}

impl<T: GcdDomain> Add<&Rational<T>> for Rational<T> {
    type Output = Self;

    fn add(self, other: &Self) -> Self::Output {
        self.add_ref(other)
    }
}

impl<T: GcdDomain> Sub for Rational<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.sub_ref(&other)
    }
}

impl<T: GcdDomain> Sub<&Rational<T>> for Rational<T> {
    type Output = Self;

    fn sub(self, other: &Self) -> Self::Output {
        self.sub_ref(other)
    }
}

impl<T: GcdDomain> Mul for Rational<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_ref(&other)
    }
}

impl<T: GcdDomain> Mul<&Rational<T>> for Rational<T> {
    type Output = Self;

    fn mul(self, other: &Self) -> Self::Output {
        self.mul_ref(other)
    }
}

impl<T: GcdDomain> Neg for Rational<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
