//! Core orchestration for the census library.
//!
//! Provides the [`Census`] runtime entry point: backend selection and the
//! instrumented top-level run.

use tracing::{info, instrument};

#[cfg(not(feature = "parallel"))]
use crate::error::CensusError;
use crate::{Result, builder::ExecutionStrategy, enumerate, result::CensusResult};

/// Entry point for counting isomorphism classes.
///
/// Construct through [`crate::CensusBuilder`]; the builder has already
/// validated the vertex count by the time a `Census` exists.
///
/// # Examples
/// ```
/// use census_core::CensusBuilder;
///
/// let census = CensusBuilder::new()
///     .with_vertices(5)
///     .build()
///     .expect("vertex count is within bounds");
/// let result = census.run().expect("backend is available");
/// assert_eq!(result.class_count(), 34);
/// ```
#[derive(Debug, Clone)]
pub struct Census {
    vertices: usize,
    execution_strategy: ExecutionStrategy,
}

impl Census {
    pub(crate) fn new(vertices: usize, execution_strategy: ExecutionStrategy) -> Self {
        Self {
            vertices,
            execution_strategy,
        }
    }

    /// Returns the vertex count this census will run on.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the execution strategy that will be used when running.
    ///
    /// # Examples
    /// ```
    /// use census_core::{CensusBuilder, ExecutionStrategy};
    ///
    /// let census = CensusBuilder::new()
    ///     .with_execution_strategy(ExecutionStrategy::Sequential)
    ///     .build()
    ///     .expect("builder must apply execution strategy");
    /// assert_eq!(census.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Runs the enumeration and returns the class count.
    ///
    /// The computation is pure and deterministic: repeated runs return
    /// identical results regardless of backend.
    ///
    /// # Errors
    /// Returns [`crate::CensusError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested in a build without the
    /// `parallel` feature.
    #[instrument(
        name = "core.run",
        err,
        skip(self),
        fields(vertices = self.vertices, strategy = ?self.execution_strategy),
    )]
    pub fn run(&self) -> Result<CensusResult> {
        let result = match self.execution_strategy {
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Auto | ExecutionStrategy::Parallel => {
                enumerate::count_parallel(self.vertices)
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Auto => enumerate::count_sequential(self.vertices),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => {
                return Err(CensusError::BackendUnavailable {
                    requested: ExecutionStrategy::Parallel,
                });
            }
            ExecutionStrategy::Sequential => enumerate::count_sequential(self.vertices),
        };

        info!(
            classes = result.class_count(),
            enumerated_levels = result.enumerated_levels().len(),
            "enumeration completed"
        );
        Ok(result)
    }
}
