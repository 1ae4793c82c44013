// src/params.rs
//! Curve parameters for y² = x³ + ax + b over F_p.
//! Parameters are explicit values bound into an `EllipticCurve`; nothing in
//! the crate reads them from global state. The engine assumes p is an odd
//! prime greater than 3 and never checks it on its own. `validate` is there
//! for callers who want the check.

use rug::integer::IsPrime;
use rug::Integer;
use thiserror::Error;

use crate::arithmetic::fp::normalize;

/// Miller-Rabin rounds used by `validate`
const PRIMALITY_REPS: u32 = 30;

/// Error types for parameter validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("Modulus {p} is too small: the group law needs p > 3")]
    ModulusTooSmall { p: Integer },

    #[error("Modulus {p} is even")]
    EvenModulus { p: Integer },

    #[error("Modulus {p} is not prime")]
    NotPrime { p: Integer },

    #[error("Curve is singular: 4a³ + 27b² ≡ 0 (mod {p}) for a = {a}, b = {b}")]
    SingularCurve { p: Integer, a: Integer, b: Integer },
}

/// Parameters (p, a, b) of a short Weierstrass curve
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurveParams {
    /// Prime modulus of the base field
    pub p: Integer,
    /// Coefficient a, reduced into [0, p)
    pub a: Integer,
    /// Coefficient b, reduced into [0, p)
    pub b: Integer,
}

impl CurveParams {
    /// Create parameters, reducing the coefficients modulo p
    ///
    /// Negative coefficients are accepted, so `a = -10` over p = 557 is
    /// stored as 547.
    pub fn new(p: impl Into<Integer>, a: impl Into<Integer>, b: impl Into<Integer>) -> Self {
        let p = p.into();
        let a = normalize(a.into(), &p);
        let b = normalize(b.into(), &p);
        Self { p, a, b }
    }

    /// Check the assumptions the group law relies on
    ///
    /// Verifies p > 3, p odd, p (probably) prime and a non-zero
    /// discriminant 4a³ + 27b².
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.p <= 3 {
            return Err(ParamsError::ModulusTooSmall { p: self.p.clone() });
        }

        if self.p.is_even() {
            return Err(ParamsError::EvenModulus { p: self.p.clone() });
        }

        if self.p.is_probably_prime(PRIMALITY_REPS) == IsPrime::No {
            return Err(ParamsError::NotPrime { p: self.p.clone() });
        }

        if self.discriminant() == 0 {
            return Err(ParamsError::SingularCurve {
                p: self.p.clone(),
                a: self.a.clone(),
                b: self.b.clone(),
            });
        }

        Ok(())
    }

    /// 4a³ + 27b² reduced modulo p
    pub fn discriminant(&self) -> Integer {
        let a_cubed = self.a.clone() * &self.a * &self.a;
        let b_squared = self.b.clone() * &self.b;
        normalize(a_cubed * 4u32 + b_squared * 27u32, &self.p)
    }
}
