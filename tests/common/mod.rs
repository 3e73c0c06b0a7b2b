// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use residue_telescope::{Lens, SpectralMap};

/// Build a map over `[start, end]` viewed through `moduli`.
pub fn range_map(moduli: &[i64], start: i64, end: i64) -> SpectralMap {
    let lens = Lens::new(moduli.to_vec()).expect("valid moduli");
    let mut map = SpectralMap::new(lens);
    map.build_from_range(start, end).expect("valid range");
    map
}

/// True if `sizes` never increases.
pub fn is_sorted_descending(sizes: &[usize]) -> bool {
    sizes.windows(2).all(|w| w[0] >= w[1])
}
