// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Isoforms: integers that share an identical residue vector.

use super::{clamp_min_cluster, sort_by_size_then_first, ClusterRecord};
use crate::lens::Spectrum;
use crate::spectral::SpectralMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A group of integers with the same spectrum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoformCluster {
    pub spectrum: Spectrum,
    pub numbers: Vec<i64>,
    pub size: usize,
}

impl ClusterRecord for IsoformCluster {
    fn numbers(&self) -> &[i64] {
        &self.numbers
    }
}

/// Group the map by spectrum and keep groups of at least `min_size` members.
///
/// `min_size` below 2 is raised to 2. The result is sorted by size
/// descending, ties broken by smallest member.
pub fn find_isoforms(map: &SpectralMap, min_size: usize) -> Vec<IsoformCluster> {
    let min_size = clamp_min_cluster(min_size);

    let mut buckets: HashMap<&Spectrum, Vec<i64>> = HashMap::new();
    for (n, spectrum) in map.iter() {
        buckets.entry(spectrum).or_default().push(n);
    }

    // The map iterates in ascending order, so every bucket is already sorted.
    let mut clusters: Vec<IsoformCluster> = buckets
        .into_iter()
        .filter(|(_, numbers)| numbers.len() >= min_size)
        .map(|(spectrum, numbers)| IsoformCluster {
            spectrum: spectrum.clone(),
            size: numbers.len(),
            numbers,
        })
        .collect();

    sort_by_size_then_first(&mut clusters);
    debug!(
        entries = map.len(),
        min_size,
        clusters = clusters.len(),
        "isoform search finished"
    );
    clusters
}
