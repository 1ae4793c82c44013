// src/curves/elliptic_curve.rs
//! Short Weierstrass curves y² = x³ + ax + b over a small prime field.
//! `EllipticCurve` owns its parameters and every group-law operation, so
//! several curves can be used side by side without shared state.
//!
//! Every point the group law produces is checked against the curve
//! equation before it is returned. A failed check is an arithmetic bug and
//! panics; it is never reported as a `CurveError`.

use log::trace;
use rug::Integer;

use crate::arithmetic::fp::{inverse_mod, normalize};
use crate::curves::CurvePoint;
use crate::errors::CurveError;
use crate::params::{CurveParams, ParamsError};

/// Elliptic curve in short Weierstrass form: y² = x³ + ax + b
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCurve {
    params: CurveParams,
}

impl EllipticCurve {
    /// Bind a set of parameters into a curve context
    ///
    /// The parameters are taken as given; p is assumed to be an odd prime
    /// greater than 3.
    pub fn new(params: CurveParams) -> Self {
        Self { params }
    }

    /// Validate the parameters before binding them
    pub fn checked(params: CurveParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self::new(params))
    }

    /// Parameters (p, a, b) this curve was built from
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Field modulus p
    pub fn modulus(&self) -> &Integer {
        &self.params.p
    }

    /// Create a point from affine coordinates, rejecting points off the curve
    pub fn create_point(&self, x: impl Into<Integer>, y: impl Into<Integer>) -> Result<CurvePoint, CurveError> {
        let point = CurvePoint::affine(x, y);
        if !self.is_valid(&point) {
            return Err(CurveError::InvalidInput {
                operand: "created",
                point,
            });
        }
        Ok(point)
    }

    /// Check whether a point is the identity or a reduced affine point on the curve
    pub fn is_valid(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Identity => true,
            CurvePoint::Affine { x, y } => {
                let p = self.modulus();
                if *x < 0 || x >= p || *y < 0 || y >= p {
                    return false;
                }
                normalize(y.clone() * y, p) == self.rhs(x)
            }
        }
    }

    /// Right-hand side x³ + ax + b reduced modulo p
    pub(crate) fn rhs(&self, x: &Integer) -> Integer {
        let x_cubed = x.clone() * x * x;
        let a_x = self.params.a.clone() * x;
        normalize(x_cubed + a_x + &self.params.b, self.modulus())
    }

    /// Inverse of a point: (x, y) ↦ (x, -y mod p)
    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        match point {
            CurvePoint::Identity => CurvePoint::Identity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x: x.clone(),
                y: normalize(-y.clone(), self.modulus()),
            },
        }
    }

    /// Sum of two points under the chord-and-tangent law
    ///
    /// Both operands must pass [`is_valid`](Self::is_valid), otherwise
    /// `CurveError::InvalidInput` is returned before anything is computed.
    /// The mutual-inverse case is tested before doubling, so a point with
    /// y = 0 doubles to the identity instead of dividing by zero.
    pub fn add(&self, p: &CurvePoint, q: &CurvePoint) -> Result<CurvePoint, CurveError> {
        if !self.is_valid(p) {
            return Err(CurveError::InvalidInput {
                operand: "left",
                point: p.clone(),
            });
        }
        if !self.is_valid(q) {
            return Err(CurveError::InvalidInput {
                operand: "right",
                point: q.clone(),
            });
        }

        let result = match (p, q) {
            (CurvePoint::Identity, _) => q.clone(),
            (_, CurvePoint::Identity) => p.clone(),
            _ if *q == self.negate(p) => CurvePoint::Identity,
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                let modulus = self.modulus();
                let slope = if p == q {
                    self.tangent_slope(x1, y1)?
                } else {
                    self.chord_slope(x1, y1, x2, y2)?
                };

                let x3 = normalize(slope.clone() * &slope - x1 - x2, modulus);
                let y3 = normalize(slope * (x1.clone() - &x3) - y1, modulus);
                CurvePoint::Affine { x: x3, y: y3 }
            }
        };

        assert!(
            self.is_valid(&result),
            "Group law left the curve: {} + {} = {} on y² = x³ + {}x + {} mod {}",
            p,
            q,
            result,
            self.params.a,
            self.params.b,
            self.params.p
        );
        Ok(result)
    }

    /// Point doubling, P + P
    pub fn double(&self, point: &CurvePoint) -> Result<CurvePoint, CurveError> {
        self.add(point, point)
    }

    /// Slope of the tangent at (x, y): (3x² + a) / 2y
    fn tangent_slope(&self, x: &Integer, y: &Integer) -> Result<Integer, CurveError> {
        let modulus = self.modulus();
        let numerator = x.clone() * x * 3u32 + &self.params.a;
        let denominator = inverse_mod(&(y.clone() * 2u32), modulus)?;
        Ok(normalize(numerator * denominator, modulus))
    }

    /// Slope of the chord through (x1, y1) and (x2, y2): (y2 - y1) / (x2 - x1)
    fn chord_slope(&self, x1: &Integer, y1: &Integer, x2: &Integer, y2: &Integer) -> Result<Integer, CurveError> {
        let modulus = self.modulus();
        let numerator = y2.clone() - y1;
        let denominator = inverse_mod(&(x2.clone() - x1), modulus)?;
        Ok(normalize(numerator * denominator, modulus))
    }

    /// n·P by repeated addition
    ///
    /// Performs |n| - 1 group additions. n = 0 gives the identity and
    /// negative n multiplies the inverse point, so multiply(P, -n) equals
    /// multiply(negate(P), n).
    pub fn multiply(&self, point: &CurvePoint, n: i64) -> Result<CurvePoint, CurveError> {
        let (base, count) = self.scalar_base(point, n)?;
        if count == 0 {
            return Ok(CurvePoint::Identity);
        }

        let mut result = base.clone();
        for _ in 1..count {
            result = self.add(&result, &base)?;
        }

        trace!("{}·{} = {}", n, point, result);
        Ok(result)
    }

    /// n·P by double-and-add
    ///
    /// Agrees with [`multiply`](Self::multiply) for every n but needs only
    /// O(log |n|) additions.
    pub fn scalar_mul(&self, point: &CurvePoint, n: i64) -> Result<CurvePoint, CurveError> {
        let (base, mut k) = self.scalar_base(point, n)?;

        let mut result = CurvePoint::Identity;
        let mut addend = base;
        while k > 0 {
            if k & 1 == 1 {
                result = self.add(&result, &addend)?;
            }
            k >>= 1;
            if k > 0 {
                addend = self.double(&addend)?;
            }
        }

        Ok(result)
    }

    /// Validate the base point and fold the sign of n into it
    fn scalar_base(&self, point: &CurvePoint, n: i64) -> Result<(CurvePoint, u64), CurveError> {
        if !self.is_valid(point) {
            return Err(CurveError::InvalidInput {
                operand: "scalar base",
                point: point.clone(),
            });
        }

        let base = if n < 0 { self.negate(point) } else { point.clone() };
        Ok((base, n.unsigned_abs()))
    }
}
