// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of the coefficient space `{-m..=m}^k`.
//!
//! Points are addressed by index in `0..(2m+1)^k`. Index `i` maps to the
//! vector whose base-`(2m+1)` digits (most significant first) are the
//! components shifted by `m`, so iteration is lexicographic with the last
//! component varying fastest:
//!
//! ```
//! use residue_telescope::linear::CoefficientSpace;
//!
//! let space = CoefficientSpace::new(2, 1).unwrap();
//! let points: Vec<Vec<i64>> = space.iter().take(4).collect();
//! assert_eq!(points, vec![vec![-1, -1], vec![-1, 0], vec![-1, 1], vec![0, -1]]);
//! assert_eq!(space.point(4), vec![0, 0]);
//! ```

use crate::error::{Result, TelescopeError};

/// The full coefficient space for a given dimension and bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoefficientSpace {
    dimension: usize,
    max_coeff: i64,
    base: u64,
    len: u64,
}

impl CoefficientSpace {
    /// Space of `dimension`-vectors with entries in `[-max_coeff, max_coeff]`.
    ///
    /// Fails if `max_coeff < 0` or the space has more than `u64::MAX` points.
    pub fn new(dimension: usize, max_coeff: i64) -> Result<Self> {
        if max_coeff < 0 {
            return Err(TelescopeError::validation(format!(
                "max_coeff must be non-negative, got {}",
                max_coeff
            )));
        }
        let too_large = || {
            TelescopeError::validation(format!(
                "coefficient space for dimension {} and max_coeff {} is too large",
                dimension, max_coeff
            ))
        };
        let base = (max_coeff as u64)
            .checked_mul(2)
            .and_then(|b| b.checked_add(1))
            .ok_or_else(too_large)?;
        let exponent = u32::try_from(dimension).map_err(|_| too_large())?;
        let len = base.checked_pow(exponent).ok_or_else(too_large)?;
        Ok(Self {
            dimension,
            max_coeff,
            base,
            len,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn max_coeff(&self) -> i64 {
        self.max_coeff
    }

    /// Number of points, `(2m+1)^k`.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn point(&self, index: u64) -> Vec<i64> {
        assert!(
            index < self.len,
            "Coefficient index {} out of range (space has {} points)",
            index,
            self.len
        );
        let mut point = vec![0i64; self.dimension];
        let mut rest = index;
        for slot in point.iter_mut().rev() {
            *slot = (rest % self.base) as i64 - self.max_coeff;
            rest /= self.base;
        }
        point
    }

    /// Index of the all-zero vector.
    pub fn zero_index(&self) -> u64 {
        (self.len - 1) / 2
    }

    /// Iterate over every point in index order.
    pub fn iter(&self) -> impl Iterator<Item = Vec<i64>> + '_ {
        (0..self.len).map(move |index| self.point(index))
    }
}
