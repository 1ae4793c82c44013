// src/curves/mod.rs
//! Short Weierstrass curves, their points and exhaustive group checks.

pub mod elliptic_curve;
pub mod enumeration;
pub mod group_properties;
pub mod point;

pub use elliptic_curve::EllipticCurve;
pub use enumeration::{all_points, group_elements};
pub use group_properties::{
    point_order, AssociativityViolation, GroupReport, GroupVerifier, LagrangeCheck, VerificationResult,
};
pub use point::CurvePoint;
