// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The spectral map: integers paired with their residue vectors.
//!
//! A [`SpectralMap`] is built once per domain and then only read. Building
//! again replaces every entry; there is no append mode. The searches take
//! `&SpectralMap`, so the borrow checker keeps a rebuild (which needs
//! `&mut`) from overlapping a search.
//!
//! # Examples
//!
//! ```
//! use residue_telescope::lens::Lens;
//! use residue_telescope::spectral::SpectralMap;
//!
//! let mut map = SpectralMap::new(Lens::new(vec![2, 3]).unwrap());
//! map.build_from_range(0, 11).unwrap();
//! assert_eq!(map.len(), 12);
//! assert_eq!(map.get(5).unwrap().components(), &[1, 2]);
//! ```

use crate::error::{Result, TelescopeError};
use crate::lens::{Lens, Spectrum};
use std::collections::BTreeMap;
use tracing::debug;

/// Mapping from integer to residue vector under a fixed lens.
///
/// Iteration is in ascending integer order.
#[derive(Debug, Clone)]
pub struct SpectralMap {
    lens: Lens,
    mapping: BTreeMap<i64, Spectrum>,
}

impl SpectralMap {
    /// Create an empty map viewing integers through `lens`.
    pub fn new(lens: Lens) -> Self {
        Self {
            lens,
            mapping: BTreeMap::new(),
        }
    }

    /// Replace the contents with every integer in `[start, end]`.
    ///
    /// Fails if `end < start`; the previous contents are kept in that case.
    pub fn build_from_range(&mut self, start: i64, end: i64) -> Result<()> {
        if end < start {
            return Err(TelescopeError::validation(format!(
                "end ({}) must be >= start ({})",
                end, start
            )));
        }
        self.mapping.clear();
        for n in start..=end {
            self.mapping.insert(n, self.lens.spectrum_of(n));
        }
        debug!(
            start,
            end,
            entries = self.mapping.len(),
            lens = %self.lens,
            "built spectral map from range"
        );
        Ok(())
    }

    /// Replace the contents with the given integers.
    ///
    /// Order does not matter and duplicates collapse onto one entry.
    pub fn build_from_sequence<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i64>,
    {
        self.mapping.clear();
        for n in values {
            self.mapping.insert(n, self.lens.spectrum_of(n));
        }
        debug!(
            entries = self.mapping.len(),
            lens = %self.lens,
            "built spectral map from sequence"
        );
    }

    pub fn lens(&self) -> &Lens {
        &self.lens
    }

    /// Length of every spectrum in the map.
    pub fn dimension(&self) -> usize {
        self.lens.dimension()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Spectrum of `n`, if `n` is in the map.
    pub fn get(&self, n: i64) -> Option<&Spectrum> {
        self.mapping.get(&n)
    }

    /// Entries in ascending integer order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &Spectrum)> + '_ {
        self.mapping.iter().map(|(&n, s)| (n, s))
    }

    /// Read-only view of the underlying mapping.
    pub fn mapping(&self) -> &BTreeMap<i64, Spectrum> {
        &self.mapping
    }
}
