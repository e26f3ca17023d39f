//! # fractio
//!
//! Exact fraction arithmetic over generic integral domains.
//!
//! This crate provides:
//! - [`Fraction`]: a numerator/denominator pair kept exactly as supplied
//! - [`Rational`]: a pair kept in lowest terms, with a nonnegative
//!   denominator whenever the domain is ordered
//! - [`ZeroDenominator`]: the single error both types can produce
//!
//! Both types are generic over the element traits in `fractio-domain`:
//! `Fraction` works over any integral domain and `Rational` over any GCD
//! domain, while signs and comparisons additionally need an ordered
//! domain. The two types are independent implementations of the same
//! surface: `Fraction` never reduces, so `2/4` and `1/2` stay distinct
//! representations of the same value, while every `Rational` is
//! canonical, so equal values are structurally equal.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
mod error;
mod fraction;
mod rational;

#[cfg(test)]
mod proptests;

pub use error::ZeroDenominator;
pub use fraction::Fraction;
pub use rational::Rational;
