// demos/order_search.rs
//! Order search on y² = x³ - 10x + 21 over F_557.
//!
//! The point (2, 3) is multiplied by candidates n = 558 + 2km ± j around a
//! suspected multiple of its order, and every n with n·P = O is reported.
//! The scan is a heuristic for this one curve; the library only provides
//! the primitives it is built from. The demo ends with the addition table
//! of a tiny curve.
//!
//! Run with `cargo run --example order_search`.

use tinycurve::{CurveError, CurveParams, CurvePoint, EllipticCurve, GroupVerifier};

/// Suspected small factor of the group order
const M: i64 = 7;
/// Centre of the scan, p + 1
const CENTRE: i64 = 558;

struct Hit {
    label: &'static str,
    n: i64,
    k: i64,
    j: i64,
}

fn scan(curve: &EllipticCurve, point: &CurvePoint) -> Result<Vec<Hit>, CurveError> {
    let mut hits = Vec::new();
    for k in -7..8 {
        for j in 0..8 {
            let n1 = CENTRE + 2 * k * M + j;
            let n2 = CENTRE + 2 * k * M - j;
            if curve.multiply(point, n1)?.is_identity() {
                hits.push(Hit { label: "n1", n: n1, k, j });
            }
            if curve.multiply(point, n2)?.is_identity() {
                hits.push(Hit { label: "n2", n: n2, k, j });
            }
        }
    }
    Ok(hits)
}

fn print_table(verifier: &GroupVerifier) -> Result<(), CurveError> {
    let table = verifier.addition_table()?;
    let width = table
        .iter()
        .flatten()
        .map(|point| point.to_string().len())
        .max()
        .unwrap_or(1);

    print!("{:>width$} |", "+", width = width);
    for point in verifier.elements() {
        print!(" {:>width$}", point.to_string(), width = width);
    }
    println!();
    for (point, row) in verifier.elements().iter().zip(&table) {
        print!("{:>width$} |", point.to_string(), width = width);
        for entry in row {
            print!(" {:>width$}", entry.to_string(), width = width);
        }
        println!();
    }
    Ok(())
}

fn main() -> Result<(), CurveError> {
    let curve = EllipticCurve::checked(CurveParams::new(557, -10, 21))?;
    let point = curve.create_point(2, 3)?;

    let hits = scan(&curve, &point)?;
    for hit in &hits {
        println!("[{}, {}, k = {}, j = {}]", hit.label, hit.n, hit.k, hit.j);
    }

    for n in [567 / 3, 567 / 7, 189 / 3, 189 / 7] {
        println!("{}P = {}", n, curve.multiply(&point, n)?);
    }

    let tiny = EllipticCurve::checked(CurveParams::new(5, 1, 1))?;
    let verifier = GroupVerifier::new(&tiny);
    println!();
    println!("E(F_5): y² = x³ + x + 1, {} elements", verifier.group_order());
    print_table(&verifier)
}
