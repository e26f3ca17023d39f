//! The error produced by fraction construction.

use thiserror::Error;

/// Error returned when an operation would produce a zero denominator.
///
/// This covers direct construction with a zero denominator, reciprocation
/// of a zero value, division by a zero value, and raising a zero value to
/// a negative power. The requested value is undefined; there is nothing
/// to recover inside the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("zero denominator")]
pub struct ZeroDenominator;
