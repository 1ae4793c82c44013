// src/curves/group_properties.rs
//! Brute-force verification of the group structure of E(F_p).
//! This module checks the group axioms over the full enumerated point set
//! and computes point orders by repeated scalar multiplication.
//!
//! The checks include:
//! - closure, through the full addition table
//! - the identity and inverse laws
//! - commutativity over every pair
//! - associativity over every triple
//! - Lagrange's theorem, comparing point orders against the group order
//!
//! Everything here is exhaustive and only meant for small fields. With the
//! `parallel` feature the table and the associativity scan are split by row
//! across a rayon pool.

use log::{debug, trace, warn};
use rug::Integer;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::curves::enumeration::group_elements;
use crate::curves::{CurvePoint, EllipticCurve};
use crate::errors::{CurveError, LogOnError};

/// Outcome of a full group verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    /// Every law held over the whole point set
    Valid,
    /// At least one counterexample was found
    Invalid,
}

/// A triple for which (P + Q) + R ≠ P + (Q + R)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociativityViolation {
    pub p: CurvePoint,
    pub q: CurvePoint,
    pub r: CurvePoint,
    /// (P + Q) + R
    pub left: CurvePoint,
    /// P + (Q + R)
    pub right: CurvePoint,
}

/// Orders of all group elements compared against the group order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagrangeCheck {
    pub group_order: u64,
    /// Order of each element, in enumeration order
    pub orders: Vec<(CurvePoint, u64)>,
    pub largest_order: u64,
    /// Whether every element order divides the group order
    pub holds: bool,
}

/// Counterexamples collected by [`GroupVerifier::verify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub group_order: u64,
    pub identity_failures: Vec<CurvePoint>,
    pub inverse_failures: Vec<CurvePoint>,
    pub commutativity_failures: Vec<(CurvePoint, CurvePoint)>,
    pub associativity_violations: Vec<AssociativityViolation>,
    pub result: VerificationResult,
}

/// Order of a point: the least n with n·P = O
///
/// Tries n = 2, 3, … and recomputes n·P from scratch with
/// [`EllipticCurve::multiply`] at every step. The identity has order 1.
/// The search gives up after p² candidates, which no curve over a prime
/// field can reach.
pub fn point_order(curve: &EllipticCurve, point: &CurvePoint) -> Result<u64, CurveError> {
    if !curve.is_valid(point) {
        return Err(CurveError::InvalidInput {
            operand: "order base",
            point: point.clone(),
        });
    }
    if point.is_identity() {
        return Ok(1);
    }

    let bound = order_search_bound(curve.modulus());
    let mut n: i64 = 2;
    while bound >= n {
        if curve.multiply(point, n)?.is_identity() {
            debug!("Order of {} is {}", point, n);
            return Ok(n as u64);
        }
        trace!("{}·{} is not the identity", n, point);
        n += 1;
    }

    Err::<u64, _>(CurveError::OrderSearchExhausted {
        point: point.clone(),
        bound,
    })
    .log_on_error(module_path!(), "point_order", line!())
}

/// Exhaustive checker for the group E(F_p) of one curve
pub struct GroupVerifier<'a> {
    curve: &'a EllipticCurve,
    elements: Vec<CurvePoint>,
}

impl<'a> GroupVerifier<'a> {
    /// Enumerate the group once and keep it for all checks
    pub fn new(curve: &'a EllipticCurve) -> Self {
        let elements = group_elements(curve);
        debug!(
            "Verifier for y² = x³ + {}x + {} mod {}: {} elements",
            curve.params().a,
            curve.params().b,
            curve.modulus(),
            elements.len()
        );
        Self { curve, elements }
    }

    /// Affine points in enumeration order, identity last
    pub fn elements(&self) -> &[CurvePoint] {
        &self.elements
    }

    /// Number of elements of E(F_p), identity included
    pub fn group_order(&self) -> u64 {
        self.elements.len() as u64
    }

    /// Full addition table, entry [i][j] = elements[i] + elements[j]
    pub fn addition_table(&self) -> Result<Vec<Vec<CurvePoint>>, CurveError> {
        #[cfg(not(feature = "parallel"))]
        let rows = self.elements.iter();
        #[cfg(feature = "parallel")]
        let rows = self.elements.par_iter();

        rows.map(|p| {
            self.elements
                .iter()
                .map(|q| self.curve.add(p, q))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
    }

    /// Points for which P + O = P or O + P = P fails
    pub fn verify_identity_law(&self) -> Result<Vec<CurvePoint>, CurveError> {
        let identity = CurvePoint::Identity;
        let mut failures = Vec::new();
        for p in &self.elements {
            let right = self.curve.add(p, &identity)?;
            let left = self.curve.add(&identity, p)?;
            if right != *p || left != *p {
                warn!("Identity law fails for {}: {} + O = {}, O + {} = {}", p, p, right, p, left);
                failures.push(p.clone());
            }
        }
        Ok(failures)
    }

    /// Points for which P + (-P) = O fails
    pub fn verify_inverses(&self) -> Result<Vec<CurvePoint>, CurveError> {
        let mut failures = Vec::new();
        for p in &self.elements {
            let sum = self.curve.add(p, &self.curve.negate(p))?;
            if !sum.is_identity() {
                warn!("Inverse law fails for {}: P + (-P) = {}", p, sum);
                failures.push(p.clone());
            }
        }
        Ok(failures)
    }

    /// Unordered pairs for which P + Q ≠ Q + P
    pub fn verify_commutativity(&self) -> Result<Vec<(CurvePoint, CurvePoint)>, CurveError> {
        let mut failures = Vec::new();
        for (i, p) in self.elements.iter().enumerate() {
            for q in &self.elements[i + 1..] {
                let p_plus_q = self.curve.add(p, q)?;
                let q_plus_p = self.curve.add(q, p)?;
                if p_plus_q != q_plus_p {
                    warn!("Commutativity fails: {} + {} = {} but {} + {} = {}", p, q, p_plus_q, q, p, q_plus_p);
                    failures.push((p.clone(), q.clone()));
                }
            }
        }
        Ok(failures)
    }

    /// Every triple (P, Q, R) for which (P + Q) + R ≠ P + (Q + R)
    ///
    /// Pair sums come from the addition table; the outer sums go through
    /// the group law, so each triple costs two more additions.
    pub fn verify_associativity(&self) -> Result<Vec<AssociativityViolation>, CurveError> {
        let table = self.addition_table()?;

        #[cfg(not(feature = "parallel"))]
        let rows = 0..self.elements.len();
        #[cfg(feature = "parallel")]
        let rows = (0..self.elements.len()).into_par_iter();

        let per_row = rows
            .map(|i| self.associativity_row(&table, i))
            .collect::<Result<Vec<_>, _>>()?;

        let violations: Vec<_> = per_row.into_iter().flatten().collect();
        debug!(
            "Checked {} triples for associativity, {} violations",
            self.elements.len().pow(3),
            violations.len()
        );
        Ok(violations)
    }

    fn associativity_row(
        &self,
        table: &[Vec<CurvePoint>],
        i: usize,
    ) -> Result<Vec<AssociativityViolation>, CurveError> {
        let p = &self.elements[i];
        let mut violations = Vec::new();
        for (j, q) in self.elements.iter().enumerate() {
            let p_plus_q = &table[i][j];
            for (k, r) in self.elements.iter().enumerate() {
                let left = self.curve.add(p_plus_q, r)?;
                let right = self.curve.add(p, &table[j][k])?;
                if left != right {
                    warn!("Associativity fails for ({}, {}, {}): {} ≠ {}", p, q, r, left, right);
                    violations.push(AssociativityViolation {
                        p: p.clone(),
                        q: q.clone(),
                        r: r.clone(),
                        left,
                        right,
                    });
                }
            }
        }
        Ok(violations)
    }

    /// Order of a point, see [`point_order`]
    pub fn order_of(&self, point: &CurvePoint) -> Result<u64, CurveError> {
        point_order(self.curve, point)
    }

    /// Compute every element order and check that each divides |E(F_p)|
    pub fn verify_lagrange(&self) -> Result<LagrangeCheck, CurveError> {
        let group_order = self.group_order();
        let orders = self
            .elements
            .iter()
            .map(|point| self.order_of(point).map(|order| (point.clone(), order)))
            .collect::<Result<Vec<_>, _>>()?;

        let largest_order = orders.iter().map(|(_, order)| *order).max().unwrap_or(1);
        let holds = orders.iter().all(|(_, order)| group_order % order == 0);
        if !holds {
            warn!("Some point order does not divide the group order {}", group_order);
        }

        Ok(LagrangeCheck {
            group_order,
            orders,
            largest_order,
            holds,
        })
    }

    /// Run the identity, inverse, commutativity and associativity checks
    pub fn verify(&self) -> Result<GroupReport, CurveError> {
        let identity_failures = self.verify_identity_law()?;
        let inverse_failures = self.verify_inverses()?;
        let commutativity_failures = self.verify_commutativity()?;
        let associativity_violations = self.verify_associativity()?;

        let result = if identity_failures.is_empty()
            && inverse_failures.is_empty()
            && commutativity_failures.is_empty()
            && associativity_violations.is_empty()
        {
            VerificationResult::Valid
        } else {
            VerificationResult::Invalid
        };
        debug!("Group verification over {} elements: {:?}", self.group_order(), result);

        Ok(GroupReport {
            group_order: self.group_order(),
            identity_failures,
            inverse_failures,
            commutativity_failures,
            associativity_violations,
            result,
        })
    }
}

/// Bound used by [`point_order`] for a given modulus
pub fn order_search_bound(p: &Integer) -> Integer {
    p.clone() * p
}
