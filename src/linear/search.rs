// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LinearInvariantSearcher - buckets the spectral map by weighted residue sums.
//!
//! For every canonical coefficient vector `c` with entries in
//! `[-max_coeff, max_coeff]`, the map is partitioned by
//! `L(s, c) = sum(c[i] * s[i])`. Each part with at least `min_cluster`
//! members becomes a [`LinearCluster`].
//!
//! # Ordering
//!
//! Canonical vectors are numbered in the order they are first met while
//! walking the [`CoefficientSpace`]. Within one vector, clusters come out in
//! ascending `value` order. The final list is sorted by size descending with
//! ties broken by (enumeration number, value), so the parallel and sequential
//! paths return identical lists.

use super::canonical::normalize;
use super::space::CoefficientSpace;
use crate::cluster::{clamp_min_cluster, preview, ClusterRecord, Example};
use crate::constants::{DEFAULT_LINEAR_MIN_CLUSTER, DEFAULT_MAX_COEFF, MAX_LINEAR_DIMENSION};
use crate::error::{Result, TelescopeError};
use crate::spectral::SpectralMap;
use crate::stats::{Counters, Statistics};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A group of integers on which one linear form takes the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearCluster {
    /// Canonical coefficient vector.
    pub coefficients: Vec<i64>,
    pub value: i128,
    pub numbers: Vec<i64>,
    pub size: usize,
    pub examples: Vec<Example>,
}

impl ClusterRecord for LinearCluster {
    fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn examples(&self) -> &[Example] {
        &self.examples
    }
}

/// Search parameters for linear invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearInvariantSearcher {
    max_coeff: i64,
    min_cluster: usize,
    parallel: bool,
}

impl Default for LinearInvariantSearcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COEFF, DEFAULT_LINEAR_MIN_CLUSTER)
    }
}

impl LinearInvariantSearcher {
    /// `max_coeff` is raised to at least 1 and `min_cluster` to at least 2.
    pub fn new(max_coeff: i64, min_cluster: usize) -> Self {
        Self {
            max_coeff: max_coeff.max(1),
            min_cluster: clamp_min_cluster(min_cluster),
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Evaluate coefficient vectors on the rayon pool (when compiled with the
    /// `parallel` feature) or on the calling thread.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn max_coeff(&self) -> i64 {
        self.max_coeff
    }

    pub fn min_cluster(&self) -> usize {
        self.min_cluster
    }

    /// Distinct canonical coefficient vectors of the given dimension, in
    /// first-seen enumeration order, with the enumeration counters filled in.
    pub fn canonical_vectors(&self, dimension: usize) -> Result<(Vec<Vec<i64>>, Statistics)> {
        let space = CoefficientSpace::new(dimension, self.max_coeff)?;
        let zero = space.zero_index();
        let mut stats = Statistics::new();
        let mut seen: HashSet<Vec<i64>> = HashSet::new();
        let mut classes = Vec::new();

        for index in (0..space.len()).filter(|&i| i != zero) {
            stats.increment_counter(Counters::CoefficientVectors);
            let canonical = normalize(&space.point(index));
            if seen.contains(&canonical) {
                stats.increment_counter(Counters::DuplicateClasses);
                continue;
            }
            seen.insert(canonical.clone());
            classes.push(canonical);
        }
        stats.add(Counters::CanonicalClasses, classes.len() as u64);
        Ok((classes, stats))
    }

    /// Run the search, returning clusters sorted by size descending.
    ///
    /// An empty map gives an empty list. Spectra longer than six components
    /// are rejected with [`TelescopeError::Dimension`].
    pub fn search(&self, map: &SpectralMap) -> Result<Vec<LinearCluster>> {
        self.search_with_statistics(map).map(|(clusters, _)| clusters)
    }

    /// As [`search`](Self::search), also returning the search counters.
    pub fn search_with_statistics(
        &self,
        map: &SpectralMap,
    ) -> Result<(Vec<LinearCluster>, Statistics)> {
        let dimension = match map.iter().next() {
            Some((_, sample)) => sample.len(),
            None => return Ok((Vec::new(), Statistics::new())),
        };
        if dimension > MAX_LINEAR_DIMENSION {
            return Err(TelescopeError::dimension(dimension));
        }
        debug_assert!(
            map.iter().all(|(_, s)| s.len() == dimension),
            "spectral map holds spectra of mixed dimension"
        );

        debug!(
            entries = map.len(),
            dimension,
            max_coeff = self.max_coeff,
            min_cluster = self.min_cluster,
            parallel = self.parallel,
            "linear invariant search started"
        );

        let (classes, mut stats) = self.canonical_vectors(dimension)?;
        let mut tagged = self.evaluate_all(map, &classes);

        // Each record carries its class's enumeration number, so arrival
        // order from the workers does not matter.
        tagged.sort_by(|(order_a, a), (order_b, b)| {
            b.size
                .cmp(&a.size)
                .then(order_a.cmp(order_b))
                .then(a.value.cmp(&b.value))
        });
        let clusters: Vec<LinearCluster> = tagged.into_iter().map(|(_, c)| c).collect();

        stats.add(Counters::ClustersEmitted, clusters.len() as u64);
        info!(%stats, "linear invariant search finished");
        Ok((clusters, stats))
    }

    fn evaluate_all(&self, map: &SpectralMap, classes: &[Vec<i64>]) -> Vec<(usize, LinearCluster)> {
        let min_cluster = self.min_cluster;

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return classes
                    .par_iter()
                    .enumerate()
                    .flat_map_iter(|(order, coefficients)| {
                        evaluate(map, coefficients, min_cluster)
                            .into_iter()
                            .map(move |cluster| (order, cluster))
                    })
                    .collect();
            }
        }

        classes
            .iter()
            .enumerate()
            .flat_map(|(order, coefficients)| {
                evaluate(map, coefficients, min_cluster)
                    .into_iter()
                    .map(move |cluster| (order, cluster))
            })
            .collect()
    }
}

/// Bucket the map by `L(s, coefficients)` and keep the large buckets.
fn evaluate(map: &SpectralMap, coefficients: &[i64], min_cluster: usize) -> Vec<LinearCluster> {
    let mut buckets: BTreeMap<i128, Vec<i64>> = BTreeMap::new();
    for (n, spectrum) in map.iter() {
        buckets
            .entry(spectrum.weighted_sum(coefficients))
            .or_default()
            .push(n);
    }

    let clusters: Vec<LinearCluster> = buckets
        .into_iter()
        .filter(|(_, numbers)| numbers.len() >= min_cluster)
        .map(|(value, numbers)| LinearCluster {
            coefficients: coefficients.to_vec(),
            value,
            size: numbers.len(),
            examples: preview(map, &numbers),
            numbers,
        })
        .collect();
    trace!(?coefficients, clusters = clusters.len(), "evaluated coefficient vector");
    clusters
}

/// Search `map` for linear invariants with the given bounds.
///
/// Shorthand for `LinearInvariantSearcher::new(max_coeff, min_cluster).search(map)`.
pub fn search_linear_invariants(
    map: &SpectralMap,
    max_coeff: i64,
    min_cluster: usize,
) -> Result<Vec<LinearCluster>> {
    LinearInvariantSearcher::new(max_coeff, min_cluster).search(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::Lens;

    fn map_2_3(start: i64, end: i64) -> SpectralMap {
        let mut map = SpectralMap::new(Lens::new(vec![2, 3]).unwrap());
        map.build_from_range(start, end).unwrap();
        map
    }

    #[test]
    fn test_defaults() {
        let searcher = LinearInvariantSearcher::default();
        assert_eq!(searcher.max_coeff(), 2);
        assert_eq!(searcher.min_cluster(), 5);
    }

    #[test]
    fn test_parameters_are_clamped() {
        let searcher = LinearInvariantSearcher::new(0, 0);
        assert_eq!(searcher.max_coeff(), 1);
        assert_eq!(searcher.min_cluster(), 2);
    }

    #[test]
    fn test_canonical_vectors_dimension_2() {
        let (classes, stats) = LinearInvariantSearcher::new(1, 2).canonical_vectors(2).unwrap();
        assert_eq!(
            classes,
            vec![vec![1, 1], vec![1, 0], vec![1, -1], vec![0, 1]]
        );
        assert_eq!(stats.get(Counters::CoefficientVectors), 8);
        assert_eq!(stats.get(Counters::DuplicateClasses), 4);
        assert_eq!(stats.get(Counters::CanonicalClasses), 4);
    }

    #[test]
    fn test_canonical_vectors_are_distinct_and_canonical() {
        let (classes, _) = LinearInvariantSearcher::new(2, 2).canonical_vectors(3).unwrap();
        let unique: HashSet<&Vec<i64>> = classes.iter().collect();
        assert_eq!(unique.len(), classes.len());
        assert!(classes.iter().all(|c| normalize(c) == *c));
        assert!(!classes.contains(&vec![2, 0, 0]));
        assert!(classes.contains(&vec![1, 0, 0]));
    }

    #[test]
    fn test_search_one_period() {
        let clusters = search_linear_invariants(&map_2_3(0, 5), 1, 3).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].coefficients, vec![1, 0]);
        assert_eq!(clusters[0].value, 0);
        assert_eq!(clusters[0].numbers, vec![0, 2, 4]);
        assert_eq!(clusters[1].value, 1);
        assert_eq!(clusters[1].numbers, vec![1, 3, 5]);
        assert_eq!(clusters[1].examples[0].spectrum.components(), &[1, 1]);
    }

    #[test]
    fn test_ties_follow_enumeration_order() {
        let clusters = search_linear_invariants(&map_2_3(0, 5), 1, 2).unwrap();
        let keys: Vec<(Vec<i64>, i128)> = clusters
            .iter()
            .map(|c| (c.coefficients.clone(), c.value))
            .collect();
        assert_eq!(
            keys,
            vec![
                (vec![1, 0], 0),
                (vec![1, 0], 1),
                (vec![1, 1], 1),
                (vec![1, 1], 2),
                (vec![1, -1], -1),
                (vec![1, -1], 0),
                (vec![0, 1], 0),
                (vec![0, 1], 1),
                (vec![0, 1], 2),
            ]
        );
    }

    #[test]
    fn test_scaled_vectors_not_reported() {
        let clusters = search_linear_invariants(&map_2_3(0, 29), 2, 2).unwrap();
        assert!(!clusters.is_empty());
        assert!(clusters.iter().all(|c| c.coefficients != vec![2, 0]));
        assert!(clusters.iter().all(|c| normalize(&c.coefficients) == c.coefficients));
    }

    #[test]
    fn test_dimension_limit() {
        let mut map = SpectralMap::new(Lens::new(vec![2, 3, 5, 7, 11, 13, 17]).unwrap());
        map.build_from_range(0, 3).unwrap();
        let err = search_linear_invariants(&map, 1, 2).unwrap_err();
        assert_eq!(
            err,
            TelescopeError::Dimension {
                dimension: 7,
                max: 6
            }
        );
    }

    #[test]
    fn test_empty_map() {
        let map = SpectralMap::new(Lens::new(vec![2, 3, 5, 7, 11, 13, 17]).unwrap());
        let (clusters, stats) = LinearInvariantSearcher::default()
            .search_with_statistics(&map)
            .unwrap();
        assert!(clusters.is_empty());
        assert_eq!(stats, Statistics::new());
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let mut map = SpectralMap::new(Lens::new(vec![4, 6, 9]).unwrap());
        map.build_from_range(-40, 80).unwrap();
        let searcher = LinearInvariantSearcher::new(2, 4);
        let sequential = searcher.with_parallel(false).search(&map).unwrap();
        let parallel = searcher.with_parallel(true).search(&map).unwrap();
        assert_eq!(sequential, parallel);
        assert!(sequential.windows(2).all(|w| w[0].size >= w[1].size));
    }
}
