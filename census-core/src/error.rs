//! Error types for the census core library.
//!
//! Defines the error enum exposed by the public API, a stable
//! machine-readable code per variant, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::builder::ExecutionStrategy;
use crate::graph::MAX_VERTICES;

/// Error type produced when constructing or running [`crate::Census`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CensusError {
    /// The requested vertex count exceeds the representation bound.
    #[error("vertex count {got} exceeds the supported maximum of {max}")]
    VertexCountTooLarge {
        /// The invalid vertex count supplied by the caller.
        got: usize,
        /// Largest vertex count the edge representation supports.
        max: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

impl CensusError {
    pub(crate) fn vertex_count_too_large(got: usize) -> Self {
        Self::VertexCountTooLarge {
            got,
            max: MAX_VERTICES,
        }
    }

    /// Retrieve the stable [`CensusErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> CensusErrorCode {
        match self {
            Self::VertexCountTooLarge { .. } => CensusErrorCode::VertexCountTooLarge,
            Self::BackendUnavailable { .. } => CensusErrorCode::BackendUnavailable,
        }
    }
}

/// Stable codes describing [`CensusError`] variants.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CensusErrorCode {
    /// The requested vertex count exceeds the representation bound.
    VertexCountTooLarge,
    /// The requested execution strategy is unavailable in the current build.
    BackendUnavailable,
}

impl CensusErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexCountTooLarge => "CENSUS_VERTEX_COUNT_TOO_LARGE",
            Self::BackendUnavailable => "CENSUS_BACKEND_UNAVAILABLE",
        }
    }
}

impl fmt::Display for CensusErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, CensusError>;

#[cfg(test)]
mod tests {
    use super::{CensusError, CensusErrorCode};
    use crate::builder::ExecutionStrategy;

    #[test]
    fn codes_are_stable_strings() {
        let oversize = CensusError::vertex_count_too_large(64);
        assert_eq!(oversize.code(), CensusErrorCode::VertexCountTooLarge);
        assert_eq!(oversize.code().as_str(), "CENSUS_VERTEX_COUNT_TOO_LARGE");

        let unavailable = CensusError::BackendUnavailable {
            requested: ExecutionStrategy::Parallel,
        };
        assert_eq!(
            unavailable.code().to_string(),
            "CENSUS_BACKEND_UNAVAILABLE"
        );
    }
}
