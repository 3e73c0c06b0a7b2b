// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ghost energy: integers whose residues sum to the same value.

use super::{clamp_min_cluster, preview, sort_by_size_then_first, ClusterRecord, Example};
use crate::spectral::SpectralMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A group of integers sharing the same ghost energy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCluster {
    pub energy: u128,
    pub numbers: Vec<i64>,
    pub size: usize,
    pub examples: Vec<Example>,
}

impl ClusterRecord for EnergyCluster {
    fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn examples(&self) -> &[Example] {
        &self.examples
    }
}

/// Group the map by ghost energy (sum of residues).
///
/// Keeps groups of at least `min_cluster` members, `min_cluster` being raised
/// to 2 if smaller. Sorted by size descending, ties broken by smallest member.
pub fn find_sum_invariants(map: &SpectralMap, min_cluster: usize) -> Vec<EnergyCluster> {
    let min_cluster = clamp_min_cluster(min_cluster);

    let mut buckets: HashMap<u128, Vec<i64>> = HashMap::new();
    for (n, spectrum) in map.iter() {
        buckets.entry(spectrum.energy()).or_default().push(n);
    }

    let mut clusters: Vec<EnergyCluster> = buckets
        .into_iter()
        .filter(|(_, numbers)| numbers.len() >= min_cluster)
        .map(|(energy, numbers)| EnergyCluster {
            energy,
            size: numbers.len(),
            examples: preview(map, &numbers),
            numbers,
        })
        .collect();

    sort_by_size_then_first(&mut clusters);
    debug!(
        entries = map.len(),
        min_cluster,
        clusters = clusters.len(),
        "ghost energy search finished"
    );
    clusters
}
