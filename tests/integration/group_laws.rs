// tests/integration/group_laws.rs
//! Group axioms checked end to end on small curves, from parameters to report.

use proptest::prelude::*;
use tinycurve::{
    curves::{all_points, group_elements},
    point_order, CurveError, CurveParams, CurvePoint, EllipticCurve, GroupVerifier, VerificationResult,
};

/// Test fixture binding a curve to its enumerated group
struct GroupFixture {
    curve: EllipticCurve,
    elements: Vec<CurvePoint>,
}

impl GroupFixture {
    fn new(p: i64, a: i64, b: i64) -> Self {
        let curve = EllipticCurve::checked(CurveParams::new(p, a, b)).expect("Test curves are non-singular");
        let elements = group_elements(&curve);
        Self { curve, elements }
    }
}

#[test]
fn test_full_verification_workflow() {
    let fixture = GroupFixture::new(23, 1, 1);
    let verifier = GroupVerifier::new(&fixture.curve);

    assert_eq!(verifier.elements(), fixture.elements.as_slice());
    assert_eq!(verifier.group_order(), 28);

    let report = verifier.verify().expect("Verification must run");
    assert_eq!(report.result, VerificationResult::Valid);
    assert_eq!(report.group_order, 28);

    let lagrange = verifier.verify_lagrange().expect("Orders must exist");
    assert!(lagrange.holds);
    assert_eq!(lagrange.group_order % lagrange.largest_order, 0);
}

#[test]
fn test_small_curve_scenario() {
    let fixture = GroupFixture::new(5, 1, 1);

    // 8 affine points plus the identity
    assert_eq!(all_points(&fixture.curve).len(), 8);
    assert_eq!(fixture.elements.len(), 9);

    // (2, 3) is not on y² = x³ + x + 1 over F_5
    assert!(!fixture.curve.is_valid(&CurvePoint::affine(2, 3)));

    let point = CurvePoint::affine(0, 1);
    let order = point_order(&fixture.curve, &point).expect("Order must exist");
    assert_eq!(order, 9);
    assert_eq!(fixture.elements.len() as u64 % order, 0);
    assert_eq!(fixture.curve.multiply(&point, order as i64), Ok(CurvePoint::Identity));
}

#[test]
fn test_addition_table_is_a_latin_square() {
    let fixture = GroupFixture::new(7, 0, 3);
    let verifier = GroupVerifier::new(&fixture.curve);
    let table = verifier.addition_table().expect("Table must build");

    // every row and every column of a group table is a permutation
    let n = fixture.elements.len();
    for i in 0..n {
        let mut row: Vec<_> = table[i].iter().map(|point| point.to_string()).collect();
        let mut column: Vec<_> = (0..n).map(|j| table[j][i].to_string()).collect();
        row.sort();
        row.dedup();
        column.sort();
        column.dedup();
        assert_eq!(row.len(), n);
        assert_eq!(column.len(), n);
    }
}

#[test]
fn test_invalid_points_are_rejected_everywhere() {
    let fixture = GroupFixture::new(5, 1, 1);
    let curve = &fixture.curve;
    let off_curve = CurvePoint::affine(1, 1);
    let unreduced = CurvePoint::affine(5, 1);
    let good = CurvePoint::affine(0, 1);

    for bad in [off_curve, unreduced] {
        assert!(matches!(curve.add(&bad, &good), Err(CurveError::InvalidInput { .. })));
        assert!(matches!(curve.add(&good, &bad), Err(CurveError::InvalidInput { .. })));
        assert!(matches!(curve.multiply(&bad, 3), Err(CurveError::InvalidInput { .. })));
        assert!(matches!(curve.scalar_mul(&bad, 3), Err(CurveError::InvalidInput { .. })));
        assert!(matches!(point_order(curve, &bad), Err(CurveError::InvalidInput { .. })));
    }
}

#[test]
fn test_curves_coexist() {
    let first = GroupFixture::new(5, 1, 1);
    let second = GroupFixture::new(5, 1, 0);
    let point = CurvePoint::affine(0, 1);

    assert!(first.curve.is_valid(&point));
    assert!(!second.curve.is_valid(&point));
    assert!(second.curve.add(&point, &point).is_err());
    assert_eq!(first.curve.double(&point), Ok(CurvePoint::affine(4, 2)));
}

proptest! {
    #[test]
    fn test_associativity_on_sampled_triples(
        p in prop::sample::select(group_elements(&EllipticCurve::new(CurveParams::new(97, 2, 3)))),
        q in prop::sample::select(group_elements(&EllipticCurve::new(CurveParams::new(97, 2, 3)))),
        r in prop::sample::select(group_elements(&EllipticCurve::new(CurveParams::new(97, 2, 3)))),
    ) {
        let curve = EllipticCurve::new(CurveParams::new(97, 2, 3));

        let left = curve.add(&curve.add(&p, &q).expect("Should work"), &r).expect("Should work");
        let right = curve.add(&p, &curve.add(&q, &r).expect("Should work")).expect("Should work");
        prop_assert_eq!(left, right);
    }

    #[test]
    fn test_scalar_multiplication_agrees(
        p in prop::sample::select(group_elements(&EllipticCurve::new(CurveParams::new(97, 2, 3)))),
        n in -150i64..150,
    ) {
        let curve = EllipticCurve::new(CurveParams::new(97, 2, 3));

        let repeated = curve.multiply(&p, n).expect("Should work");
        prop_assert!(curve.is_valid(&repeated));
        prop_assert_eq!(repeated, curve.scalar_mul(&p, n).expect("Should work"));
    }
}
