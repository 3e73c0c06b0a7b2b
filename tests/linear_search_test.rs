// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the linear invariant search.

mod common;

use residue_telescope::linear::normalize;
use residue_telescope::{
    search_linear_invariants, Counters, Lens, LinearInvariantSearcher, SpectralMap,
    TelescopeError,
};

#[test]
fn test_scaled_coefficients_collapse() {
    assert_eq!(normalize(&[2, 0]), normalize(&[1, 0]));

    for max_coeff in 1..=3 {
        let clusters =
            search_linear_invariants(&common::range_map(&[2, 3], 0, 35), max_coeff, 2).unwrap();
        assert!(clusters.iter().any(|c| c.coefficients == vec![1, 0]));
        assert!(clusters.iter().all(|c| c.coefficients != vec![2, 0]));
        assert!(clusters.iter().all(|c| c.coefficients != vec![-1, 0]));
    }
}

#[test]
fn test_members_satisfy_the_invariant() {
    let map = common::range_map(&[4, 6, 9], 0, 200);
    let clusters = search_linear_invariants(&map, 2, 5).unwrap();
    assert!(!clusters.is_empty());
    let sizes: Vec<usize> = clusters.iter().map(|c| c.size).collect();
    assert!(common::is_sorted_descending(&sizes));
    for cluster in clusters.iter().take(50) {
        assert!(cluster.size >= 5);
        for &n in &cluster.numbers {
            let spectrum = map.get(n).unwrap();
            assert_eq!(spectrum.weighted_sum(&cluster.coefficients), cluster.value);
        }
    }
}

#[test]
fn test_dimension_7_rejected_for_any_parameters() {
    let map = common::range_map(&[2, 3, 5, 7, 11, 13, 17], 0, 10);
    for (max_coeff, min_cluster) in [(1, 2), (2, 5), (0, 0), (5, 100)] {
        let err = LinearInvariantSearcher::new(max_coeff, min_cluster)
            .search(&map)
            .unwrap_err();
        assert!(matches!(err, TelescopeError::Dimension { dimension: 7, .. }));
    }
}

#[test]
fn test_dimension_6_accepted() {
    let map = common::range_map(&[2, 2, 2, 2, 2, 2], 0, 3);
    let clusters = search_linear_invariants(&map, 1, 2).unwrap();
    assert!(!clusters.is_empty());
}

#[test]
fn test_empty_map() {
    let map = SpectralMap::new(Lens::new(vec![3, 5]).unwrap());
    assert!(search_linear_invariants(&map, 2, 2).unwrap().is_empty());
}

#[test]
fn test_statistics() {
    let map = common::range_map(&[2, 3], 0, 5);
    let (clusters, stats) = LinearInvariantSearcher::new(2, 2)
        .search_with_statistics(&map)
        .unwrap();
    // 5^2 - 1 nonzero points
    assert_eq!(stats.get(Counters::CoefficientVectors), 24);
    assert_eq!(
        stats.get(Counters::CanonicalClasses) + stats.get(Counters::DuplicateClasses),
        24
    );
    assert_eq!(stats.get(Counters::ClustersEmitted), clusters.len() as u64);
}

#[test]
fn test_deterministic_across_runs() {
    let map = common::range_map(&[3, 4, 5], -30, 90);
    let searcher = LinearInvariantSearcher::new(2, 3);
    let first = searcher.search(&map).unwrap();
    for _ in 0..3 {
        assert_eq!(searcher.search(&map).unwrap(), first);
    }
    assert_eq!(searcher.with_parallel(false).search(&map).unwrap(), first);
}
