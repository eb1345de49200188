//! Rational coordinate type

use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A latitude or longitude in degrees, stored as a rational number.
///
/// Always kept in lowest terms with a positive denominator, so equal values
/// compare and hash equal (`-33/1` and `66/-2` are the same coordinate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    numerator: i64,
    denominator: i64,
}

impl Coordinate {
    /// Create a coordinate from a numerator/denominator pair
    pub fn new(numerator: i32, denominator: i32) -> CoreResult<Self> {
        if denominator == 0 {
            return Err(CoreError::InvalidCoordinate(format!(
                "{numerator}/{denominator} has a zero denominator"
            )));
        }

        // Widened so that negating i32::MIN cannot overflow.
        let (mut numerator, mut denominator) = (i64::from(numerator), i64::from(denominator));
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        let divisor = gcd(numerator.abs(), denominator);
        Ok(Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        })
    }

    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Value in decimal degrees
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // both parts fit in 33 bits
    pub fn to_degrees(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
