// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Linear invariant search.
//!
//! ## Module Structure
//!
//! - `canonical`: canonical forms of coefficient vectors under scaling and sign
//! - `space`: index-addressable enumeration of the coefficient space
//! - `search`: the searcher itself

pub mod canonical;
pub mod search;
pub mod space;

pub use canonical::{is_canonical, normalize};
pub use search::{search_linear_invariants, LinearCluster, LinearInvariantSearcher};
pub use space::CoefficientSpace;
