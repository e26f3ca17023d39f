//! # fractio-integers
//!
//! Arbitrary precision integers for the fractio exact-arithmetic library.
//!
//! This crate wraps `dashu` to provide an [`Int`] element type
//! implementing the `fractio-domain` traits, giving the fraction types an
//! ordered GCD domain to work over.
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated with GMP-like performance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

pub use integer::Int;
