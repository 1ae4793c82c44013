// src/curves/enumeration.rs
//! Exhaustive enumeration of E(F_p).
//! Scans every (x, y) in [0, p)², so it is meant for fields with at most a
//! few thousand elements.

use log::debug;
use rug::Integer;

use crate::arithmetic::fp::normalize;
use crate::curves::{CurvePoint, EllipticCurve};

/// All affine points of the curve, x-major then y, without the identity
pub fn all_points(curve: &EllipticCurve) -> Vec<CurvePoint> {
    let p = curve.modulus();

    // y² for every y, indexed by y
    let mut squares = Vec::new();
    let mut y = Integer::new();
    while y < *p {
        squares.push(normalize(y.clone() * &y, p));
        y += 1;
    }

    let mut points = Vec::new();
    let mut x = Integer::new();
    while x < *p {
        let rhs = curve.rhs(&x);
        for (y, square) in squares.iter().enumerate() {
            if *square == rhs {
                points.push(CurvePoint::affine(x.clone(), y));
            }
        }
        x += 1;
    }

    debug!("Enumerated {} affine points over F_{}", points.len(), p);
    points
}

/// The full group E(F_p): every affine point followed by the identity
pub fn group_elements(curve: &EllipticCurve) -> Vec<CurvePoint> {
    let mut elements = all_points(curve);
    elements.push(CurvePoint::Identity);
    elements
}
