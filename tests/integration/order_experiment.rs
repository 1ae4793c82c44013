// tests/integration/order_experiment.rs
//! The order experiment on y² = x³ - 10x + 21 over F_557.

use tinycurve::{curves::group_elements, point_order, CurveParams, CurvePoint, EllipticCurve};

fn experiment_curve() -> EllipticCurve {
    EllipticCurve::checked(CurveParams::new(557, -10, 21)).expect("Experiment curve is valid")
}

#[test]
fn test_base_point_is_valid() {
    let curve = experiment_curve();
    // 2³ - 20 + 21 = 9 = 3²
    assert!(curve.is_valid(&CurvePoint::affine(2, 3)));
    assert_eq!(curve.params().a, 547);
}

#[test]
fn test_group_order_and_point_order() {
    let curve = experiment_curve();
    let group_order = group_elements(&curve).len() as u64;
    assert_eq!(group_order, 567);

    let point = CurvePoint::affine(2, 3);
    let order = point_order(&curve, &point).expect("Order must exist");
    assert_eq!(order, 189);
    assert_eq!(group_order % order, 0);

    assert_eq!(curve.multiply(&point, order as i64), Ok(CurvePoint::Identity));
    // 189 = 3³·7, so the maximal proper divisors must not annihilate the point
    for divisor in [63, 27] {
        assert_ne!(curve.multiply(&point, divisor), Ok(CurvePoint::Identity));
    }
}

#[test]
fn test_candidate_scan_finds_multiples_of_the_order() {
    let curve = experiment_curve();
    let point = CurvePoint::affine(2, 3);

    let hits: Vec<i64> = (540..=600)
        .filter(|&n| curve.scalar_mul(&point, n) == Ok(CurvePoint::Identity))
        .collect();
    assert_eq!(hits, vec![567]);
}
