// src/arithmetic/fp.rs
//! Prime field helpers over F_p.
//! Coordinates are plain `rug::Integer` values kept as canonical
//! representatives in [0, p); these helpers do the reduction and inversion.

use rug::Integer;

use crate::errors::CurveError;

/// Reduce `value` to its canonical representative in [0, p)
///
/// Handles negative inputs: -1 mod p is p - 1.
pub fn normalize(value: Integer, p: &Integer) -> Integer {
    let reduced = value % p;
    if reduced < 0 {
        reduced + p
    } else {
        reduced
    }
}

/// Modular inverse using Fermat's little theorem
///
/// For prime p and x not divisible by p, x^(p-2) is the unique y in
/// [1, p) with x·y ≡ 1 (mod p).
pub fn inverse_mod(x: &Integer, p: &Integer) -> Result<Integer, CurveError> {
    let x = normalize(x.clone(), p);
    if x == 0 {
        return Err(CurveError::DivisionByZero {
            value: x,
            modulus: p.clone(),
        });
    }

    let exponent = p.clone() - 2u32;
    x.pow_mod(&exponent, p).map_err(|value| CurveError::DivisionByZero {
        value,
        modulus: p.clone(),
    })
}
