// src/lib.rs
//! Elliptic-curve group arithmetic over small prime fields.
//!
//! Curves are short Weierstrass curves y² = x³ + ax + b over F_p, with p an
//! odd prime small enough that the whole group E(F_p) can be enumerated.
//! The crate provides the group law, scalar multiplication, point
//! enumeration and brute-force checks of the group axioms.
//!
//! ```
//! use tinycurve::{CurveParams, CurvePoint, EllipticCurve, GroupVerifier};
//!
//! let curve = EllipticCurve::new(CurveParams::new(5, 1, 1));
//! let p = curve.create_point(0, 1)?;
//!
//! assert_eq!(curve.multiply(&p, 2)?, CurvePoint::affine(4, 2));
//! assert_eq!(tinycurve::point_order(&curve, &p)?, 9);
//!
//! let verifier = GroupVerifier::new(&curve);
//! assert_eq!(verifier.group_order(), 9);
//! # Ok::<(), tinycurve::CurveError>(())
//! ```

pub mod arithmetic;
pub mod curves;
pub mod errors;
pub mod params;

pub use curves::{point_order, CurvePoint, EllipticCurve, GroupVerifier, VerificationResult};
pub use errors::{CurveError, ErrorSeverity};
pub use params::{CurveParams, ParamsError};
