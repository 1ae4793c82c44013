// src/curves/point.rs
//! Points of E(F_p): either the point at infinity or an affine pair.

use rug::Integer;
use std::fmt;

/// Point on a short Weierstrass curve
///
/// Construction does not check the curve equation; an `Affine` value may
/// hold off-curve or unreduced coordinates so that
/// [`EllipticCurve::is_valid`](crate::curves::EllipticCurve::is_valid) can
/// be run against it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurvePoint {
    /// The point at infinity, neutral element of the group
    Identity,
    /// Affine coordinates (x, y)
    Affine { x: Integer, y: Integer },
}

impl CurvePoint {
    /// Create an affine point from anything convertible to `Integer`
    pub fn affine(x: impl Into<Integer>, y: impl Into<Integer>) -> Self {
        CurvePoint::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Check if the point is the point at infinity
    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Identity)
    }

    /// Affine coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(&Integer, &Integer)> {
        match self {
            CurvePoint::Identity => None,
            CurvePoint::Affine { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurvePoint::Identity => write!(f, "O"),
            CurvePoint::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
