// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cluster records and the isoform and ghost energy searches.
//!
//! Every search returns a list of records sharing one shape: a grouping key,
//! the ascending member list, the member count, and (except for isoforms) a
//! preview of up to [`PREVIEW_LIMIT`] members paired with their spectra.
//!
//! Lists are sorted by size, largest first. Equal-size isoform and energy
//! clusters are ordered by their smallest member; equal-size linear clusters
//! keep coefficient enumeration order (see [`crate::linear`]).

pub mod energy;
pub mod isoform;

pub use energy::{find_sum_invariants, EnergyCluster};
pub use isoform::{find_isoforms, IsoformCluster};

use crate::constants::{MIN_CLUSTER_FLOOR, PREVIEW_LIMIT};
use crate::lens::Spectrum;
use crate::spectral::SpectralMap;
use serde::{Deserialize, Serialize};

/// One previewed member: an integer and its spectrum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub number: i64,
    pub spectrum: Spectrum,
}

/// Raise a requested minimum cluster size to the floor of 2.
pub(crate) fn clamp_min_cluster(min_cluster: usize) -> usize {
    min_cluster.max(MIN_CLUSTER_FLOOR)
}

/// Preview of the first members of an ascending member list.
pub(crate) fn preview(map: &SpectralMap, numbers: &[i64]) -> Vec<Example> {
    numbers
        .iter()
        .take(PREVIEW_LIMIT)
        .filter_map(|&n| {
            map.get(n).map(|spectrum| Example {
                number: n,
                spectrum: spectrum.clone(),
            })
        })
        .collect()
}

/// Common view over the three cluster record types.
pub trait ClusterRecord {
    /// Members, ascending.
    fn numbers(&self) -> &[i64];

    /// Members with their spectra, capped at [`PREVIEW_LIMIT`]. Empty for
    /// record types that carry no preview.
    fn examples(&self) -> &[Example] {
        &[]
    }

    fn size(&self) -> usize {
        self.numbers().len()
    }
}

/// Sort by size descending, then by smallest member ascending.
pub(crate) fn sort_by_size_then_first<T: ClusterRecord>(clusters: &mut [T]) {
    clusters.sort_by(|a, b| {
        b.size()
            .cmp(&a.size())
            .then_with(|| a.numbers().first().cmp(&b.numbers().first()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::Lens;

    #[test]
    fn test_clamp_min_cluster() {
        assert_eq!(clamp_min_cluster(0), 2);
        assert_eq!(clamp_min_cluster(1), 2);
        assert_eq!(clamp_min_cluster(7), 7);
    }

    #[test]
    fn test_preview_is_capped() {
        let mut map = SpectralMap::new(Lens::new(vec![3]).unwrap());
        map.build_from_range(0, 29).unwrap();
        let numbers: Vec<i64> = (0..30).collect();
        let examples = preview(&map, &numbers);
        assert_eq!(examples.len(), PREVIEW_LIMIT);
        assert_eq!(examples[9].number, 9);
        assert_eq!(examples[9].spectrum.components(), &[0]);
    }

    struct Members(Vec<i64>);

    impl ClusterRecord for Members {
        fn numbers(&self) -> &[i64] {
            &self.0
        }
    }

    #[test]
    fn test_sort_by_size_then_first() {
        let mut groups = vec![Members(vec![5, 9]), Members(vec![1, 2, 3]), Members(vec![0, 4])];
        sort_by_size_then_first(&mut groups);
        let firsts: Vec<i64> = groups.iter().map(|g| g.0[0]).collect();
        assert_eq!(firsts, vec![1, 0, 5]);
        assert!(groups[2].examples().is_empty());
    }
}
