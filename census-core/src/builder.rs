//! Builder utilities for configuring a census run.
//!
//! Exposes the execution strategy selection surface and the validation
//! applied before constructing [`Census`] instances.

use crate::{Result, census::Census, error::CensusError, graph::MAX_VERTICES};

/// Default vertex count, the reference workload of the original program.
const DEFAULT_VERTICES: usize = 7;

/// Indicates how [`Census`] selects a backend when [`Census::run`] is
/// invoked.
///
/// `Auto` resolves deterministically: it selects the parallel backend when
/// the `parallel` feature is compiled in and falls back to the sequential
/// one otherwise, so behaviour stays stable across builds. Both backends
/// return bit-identical results; they differ only in how the per-class
/// permutation fan-out is scheduled.
///
/// # Examples
/// ```
/// use census_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select an appropriate backend automatically.
    Auto,
    /// Restrict execution to the single-threaded implementation.
    Sequential,
    /// Require the Rayon-backed permutation fan-out.
    Parallel,
}

/// Configures and constructs [`Census`] instances.
///
/// # Examples
/// ```
/// use census_core::{CensusBuilder, ExecutionStrategy};
///
/// let census = CensusBuilder::new()
///     .with_vertices(5)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(census.vertices(), 5);
/// assert_eq!(census.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct CensusBuilder {
    vertices: usize,
    execution_strategy: ExecutionStrategy,
}

impl Default for CensusBuilder {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl CensusBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use census_core::{CensusBuilder, ExecutionStrategy};
    ///
    /// let builder = CensusBuilder::new();
    /// assert_eq!(builder.vertices(), 7);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count.
    ///
    /// # Examples
    /// ```
    /// use census_core::CensusBuilder;
    ///
    /// let builder = CensusBuilder::new().with_vertices(4);
    /// assert_eq!(builder.vertices(), 4);
    /// ```
    #[must_use]
    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Sets the execution strategy to use when running the census.
    ///
    /// # Examples
    /// ```
    /// use census_core::{CensusBuilder, ExecutionStrategy};
    ///
    /// let builder =
    ///     CensusBuilder::new().with_execution_strategy(ExecutionStrategy::Parallel);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Parallel);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`Census`] instance.
    ///
    /// # Errors
    /// Returns [`CensusError::VertexCountTooLarge`] when the vertex count
    /// exceeds [`MAX_VERTICES`]. Vertex counts of zero and one are valid
    /// degenerate runs with exactly one isomorphism class.
    ///
    /// # Examples
    /// ```
    /// use census_core::CensusBuilder;
    ///
    /// let census = CensusBuilder::new().build().expect("configuration is valid");
    /// assert_eq!(census.vertices(), 7);
    ///
    /// let err = CensusBuilder::new().with_vertices(64).build().unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     census_core::CensusError::VertexCountTooLarge { got: 64, .. }
    /// ));
    /// ```
    pub fn build(self) -> Result<Census> {
        if self.vertices > MAX_VERTICES {
            return Err(CensusError::vertex_count_too_large(self.vertices));
        }

        Ok(Census::new(self.vertices, self.execution_strategy))
    }
}
