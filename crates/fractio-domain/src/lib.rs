//! # fractio-domain
//!
//! Algebraic capability traits for the fractio exact-arithmetic library.
//!
//! This crate provides:
//! - [`IntegralDomain`]: the minimal element contract, enough for
//!   non-reducing fractions
//! - [`GcdDomain`]: adds gcd and exact division, enough for canonical
//!   rationals
//! - [`OrderedDomain`]: adds signs and a total order
//!
//! ## Trait Hierarchy
//!
//! ```text
//! IntegralDomain
//!  ├── GcdDomain
//!  └── OrderedDomain
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;

pub use traits::{GcdDomain, IntegralDomain, OrderedDomain};
