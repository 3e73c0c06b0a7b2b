// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical forms of coefficient vectors.
//!
//! Two coefficient vectors are equivalent when one is a nonzero scalar
//! multiple of the other. They define the same partition of the spectral
//! map, so the search evaluates one representative per class.
//!
//! The representative is found in two steps:
//! 1. Divide by the gcd of the nonzero absolute entries (primitive form)
//! 2. Negate if the first nonzero entry is negative
//!
//! # Examples
//!
//! - `[2, 0]` → `[1, 0]`
//! - `[-2, 4, 0]` → `[1, -2, 0]`
//! - `[0, -3, -3]` → `[0, 1, 1]`

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.abs()
}

/// Return the canonical representative of `coefficients`.
///
/// The all-zero vector is returned unchanged.
pub fn normalize(coefficients: &[i64]) -> Vec<i64> {
    let divisor = coefficients
        .iter()
        .filter(|&&c| c != 0)
        .fold(0, |g, &c| gcd(g, c));
    if divisor == 0 {
        return coefficients.to_vec();
    }

    let sign = match coefficients.iter().find(|&&c| c != 0) {
        Some(&lead) if lead < 0 => -1,
        _ => 1,
    };
    coefficients.iter().map(|&c| sign * (c / divisor)).collect()
}

/// True if `coefficients` is already its own canonical representative.
pub fn is_canonical(coefficients: &[i64]) -> bool {
    normalize(coefficients) == coefficients
}
