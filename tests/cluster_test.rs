// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for isoform and ghost energy clustering.

mod common;

use residue_telescope::{find_isoforms, find_sum_invariants, Lens, SpectralMap};

#[test]
fn test_isoforms_period_6() {
    assert!(find_isoforms(&common::range_map(&[2, 3], 0, 5), 2).is_empty());

    let clusters = find_isoforms(&common::range_map(&[2, 3], 0, 11), 2);
    assert_eq!(clusters.len(), 6);
    assert!(clusters.iter().all(|c| c.size == 2 && c.numbers[1] - c.numbers[0] == 6));
}

#[test]
fn test_isoform_members_share_spectrum() {
    let map = common::range_map(&[6, 8, 9], 0, 500);
    let clusters = find_isoforms(&map, 2);
    assert!(!clusters.is_empty());
    let sizes: Vec<usize> = clusters.iter().map(|c| c.size).collect();
    assert!(common::is_sorted_descending(&sizes));
    for cluster in &clusters {
        for &n in &cluster.numbers {
            assert_eq!(map.get(n).unwrap(), &cluster.spectrum);
        }
        assert!(cluster.numbers.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_isoforms_from_sequence() {
    // lcm(6, 8, 9) = 72
    let mut map = SpectralMap::new(Lens::new(vec![6, 8, 9]).unwrap());
    map.build_from_sequence(vec![3, 75, 147, 4, 1000]);
    let clusters = find_isoforms(&map, 2);
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].numbers, vec![3, 75, 147]);
}

#[test]
fn test_ghost_energy_period_6() {
    let clusters = find_sum_invariants(&common::range_map(&[2, 3], 0, 5), 2);
    let summary: Vec<(u128, Vec<i64>)> = clusters
        .iter()
        .map(|c| (c.energy, c.numbers.clone()))
        .collect();
    assert_eq!(summary, vec![(2, vec![1, 2]), (1, vec![3, 4])]);
}

#[test]
fn test_ghost_energy_members_share_sum() {
    let map = common::range_map(&[5, 7], -50, 50);
    let clusters = find_sum_invariants(&map, 3);
    let sizes: Vec<usize> = clusters.iter().map(|c| c.size).collect();
    assert!(common::is_sorted_descending(&sizes));
    let total: usize = clusters.iter().map(|c| c.size).sum();
    assert!(total <= map.len());
    for cluster in &clusters {
        assert!(cluster.numbers.iter().all(|&n| map.get(n).unwrap().energy() == cluster.energy));
        assert_eq!(cluster.examples.len(), cluster.size.min(10));
    }
}

#[test]
fn test_empty_map_gives_no_clusters() {
    let map = SpectralMap::new(Lens::new(vec![2, 3]).unwrap());
    assert!(find_isoforms(&map, 2).is_empty());
    assert!(find_sum_invariants(&map, 2).is_empty());
}
