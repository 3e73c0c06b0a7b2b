// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Default parameters and hard limits shared by the searches.

/// Largest residue-vector dimension accepted by the linear invariant search.
///
/// The coefficient space has `(2 * max_coeff + 1)^k` points; past six
/// components it is too large for interactive use.
pub const MAX_LINEAR_DIMENSION: usize = 6;

/// Number of member integers (with their spectra) kept as a cluster preview.
pub const PREVIEW_LIMIT: usize = 10;

/// Smallest cluster size any search will report.
pub const MIN_CLUSTER_FLOOR: usize = 2;

/// Default minimum size for isoform clusters.
pub const DEFAULT_ISOFORM_MIN_SIZE: usize = 2;

/// Default minimum size for ghost energy clusters.
pub const DEFAULT_ENERGY_MIN_CLUSTER: usize = 3;

/// Default minimum size for linear invariant clusters.
pub const DEFAULT_LINEAR_MIN_CLUSTER: usize = 5;

/// Default bound on the absolute value of each linear coefficient.
pub const DEFAULT_MAX_COEFF: i64 = 2;

/// Default number of leading clusters shown by the text presenter.
pub const DEFAULT_MAX_CLUSTERS: usize = 10;
