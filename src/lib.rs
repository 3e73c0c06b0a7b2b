// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search integer ranges for patterns in their modular residues.
//!
//! A [`Lens`] is a tuple of positive moduli. Viewing each integer of a range
//! through the lens gives its residue vector ([`Spectrum`]); the
//! [`SpectralMap`] holds those vectors for a whole range or sequence, and three
//! searches look for structure in it:
//!
//! - **Isoforms** ([`find_isoforms`]): integers with identical spectra
//! - **Ghost energy** ([`find_sum_invariants`]): integers whose residues have
//!   the same sum
//! - **Linear invariants** ([`LinearInvariantSearcher`]): integers on which a
//!   small-coefficient linear form of the residues is constant
//!
//! # Architecture
//!
//! The map is built once and then only read. Each search is a pure function
//! of the map returning a fresh, sorted list of cluster records.
//!
//! ## Linear search
//!
//! The linear search walks the coefficient space `{-m..=m}^k` in a fixed
//! order, reduces each vector to a canonical representative (primitive, with
//! positive leading entry) and evaluates each representative once. The
//! evaluations are independent, so with the `parallel` feature they run on
//! the rayon pool. Results are tagged with their enumeration number before
//! merging, which keeps the output identical to the sequential path.
//!
//! # Example
//!
//! ```
//! use residue_telescope::{find_sum_invariants, Lens, SpectralMap};
//!
//! let mut map = SpectralMap::new(Lens::new(vec![2, 3]).unwrap());
//! map.build_from_range(0, 5).unwrap();
//!
//! let clusters = find_sum_invariants(&map, 2);
//! assert_eq!(clusters[0].energy, 2);
//! assert_eq!(clusters[0].numbers, vec![1, 2]);
//! ```

pub mod cluster;
pub mod config;
pub mod constants;
pub mod error;
pub mod lens;
pub mod linear;
pub mod present;
pub mod spectral;
pub mod stats;

// Re-export commonly used types
pub use cluster::{find_isoforms, find_sum_invariants, ClusterRecord, EnergyCluster, IsoformCluster};
pub use error::{Result, TelescopeError};
pub use lens::{Lens, Spectrum};
pub use linear::{search_linear_invariants, LinearCluster, LinearInvariantSearcher};
pub use spectral::SpectralMap;
pub use stats::{Counters, Statistics};
