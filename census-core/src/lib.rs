//! Census core library.
//!
//! Counts the isomorphism classes of simple undirected graphs on a small
//! labelled vertex set: graphs are generated breadth-first by edge count,
//! deduplicated through canonical hashing under the full symmetric group,
//! and the upper half of the edge-count range is recovered from the
//! edge-complement symmetry of the class lattice.
//!
//! The cost is dominated by N! permutations per newly discovered class and
//! by the 2^(N choose 2) shape of the search space, so vertex counts above
//! eight are impractical even though the representation admits up to
//! [`graph::MAX_VERTICES`].
//!
//! # Example
//! ```
//! use census_core::CensusBuilder;
//!
//! let census = CensusBuilder::new()
//!     .with_vertices(4)
//!     .build()
//!     .expect("vertex count is within bounds");
//! let result = census.run().expect("backend is available");
//! assert_eq!(result.class_count(), 11);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod census;
mod enumerate;
mod error;
pub mod graph;
pub mod permutation;
mod result;

pub use crate::{
    builder::{CensusBuilder, ExecutionStrategy},
    census::Census,
    error::{CensusError, CensusErrorCode, Result},
    result::CensusResult,
};
