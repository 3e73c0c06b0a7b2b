// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for lens construction, map building and invariant search.

use crate::constants::MAX_LINEAR_DIMENSION;

/// Errors raised at the point where a precondition is violated.
///
/// Every operation in this crate is pure given valid input, so there is no
/// recovery path: the error is returned to the caller and nothing partial is
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TelescopeError {
    /// Invalid input: bad moduli, an inverted range, or an unaddressable
    /// coefficient space.
    #[error("invalid input: {reason}")]
    Validation { reason: String },

    /// Linear search on residue vectors with too many components.
    #[error("linear search on dimension {dimension} is not supported (max {max})")]
    Dimension { dimension: usize, max: usize },
}

impl TelescopeError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        TelescopeError::Validation {
            reason: reason.into(),
        }
    }

    pub(crate) fn dimension(dimension: usize) -> Self {
        TelescopeError::Dimension {
            dimension,
            max: MAX_LINEAR_DIMENSION,
        }
    }
}

pub type Result<T> = std::result::Result<T, TelescopeError>;
