//! Result type for a completed census run.

/// Outcome of a [`crate::Census::run`] invocation.
///
/// Carries the total isomorphism-class count together with the per-level
/// class counts of the enumerated lower half of the edge-count range.
///
/// # Examples
/// ```
/// use census_core::CensusBuilder;
///
/// let result = CensusBuilder::new()
///     .with_vertices(4)
///     .build()
///     .expect("vertex count is within bounds")
///     .run()
///     .expect("backend is available");
/// assert_eq!(result.vertices(), 4);
/// assert_eq!(result.class_count(), 11);
/// assert_eq!(result.enumerated_levels(), &[1, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusResult {
    vertices: usize,
    class_count: u64,
    level_counts: Vec<u64>,
}

impl CensusResult {
    pub(crate) fn new(vertices: usize, class_count: u64, level_counts: Vec<u64>) -> Self {
        Self {
            vertices,
            class_count,
            level_counts,
        }
    }

    /// Returns the vertex count the census ran on.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the total number of isomorphism classes, including the
    /// levels recovered by the symmetry doubling.
    #[must_use]
    pub fn class_count(&self) -> u64 {
        self.class_count
    }

    /// Returns the class count per edge-count level for the enumerated
    /// half, starting with the single empty graph at level zero.
    ///
    /// The upper half of the range is not materialised; its counts mirror
    /// these under edge complement.
    #[must_use]
    pub fn enumerated_levels(&self) -> &[u64] {
        &self.level_counts
    }
}
