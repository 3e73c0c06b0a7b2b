// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Spectrum: the residue vector of one integer under a lens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Residue vector with value semantics.
///
/// Component `i` is the residue modulo the lens's `i`-th modulus.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spectrum(Box<[u64]>);

impl Spectrum {
    pub(crate) fn from_residues(residues: impl Iterator<Item = u64>) -> Self {
        Self(residues.collect())
    }

    /// The residues, in lens order.
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ghost energy: the sum of the components.
    pub fn energy(&self) -> u128 {
        self.0.iter().map(|&r| r as u128).sum()
    }

    /// Weighted sum `sum(coefficients[i] * self[i])`.
    ///
    /// `coefficients` must have the same length as the spectrum.
    pub fn weighted_sum(&self, coefficients: &[i64]) -> i128 {
        debug_assert_eq!(
            coefficients.len(),
            self.0.len(),
            "coefficient vector length {} does not match spectrum length {}",
            coefficients.len(),
            self.0.len()
        );
        coefficients
            .iter()
            .zip(self.0.iter())
            .map(|(&c, &r)| c as i128 * r as i128)
            .sum()
    }
}

impl From<Vec<u64>> for Spectrum {
    fn from(residues: Vec<u64>) -> Self {
        Self(residues.into_boxed_slice())
    }
}

impl fmt::Display for Spectrum {
    /// Format as "(1, 1, 7)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, r) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", r)?;
        }
        write!(f, ")")
    }
}
