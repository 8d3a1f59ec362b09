//! Bit-packed graph values and canonical hash keys.
//!
//! A simple undirected graph on `n` labelled vertices carries information
//! only in its upper triangle, so it is stored as a flat set of
//! `n * (n - 1) / 2` edge bits packed into a single machine word. Canonical
//! keys are the same bits as seen through a vertex permutation; two graphs
//! are isomorphic exactly when their key sets over the full symmetric group
//! coincide.

use crate::permutation::Permutation;

/// Largest supported vertex count.
///
/// Eleven vertices give 55 vertex pairs, the most that fit the 64-bit edge
/// mask. Counts above eight are already impractical to enumerate (the run
/// cost grows with N! and 2^(N choose 2)); the representation bound is the
/// hard limit enforced by [`crate::CensusBuilder::build`].
pub const MAX_VERTICES: usize = 11;

/// The fixed traversal order of vertex pairs `(i, j)` with `i < j`.
///
/// Pair indices are the positions in this order; every edge bit, key bit,
/// and permutation action is expressed against it.
///
/// # Examples
/// ```
/// use census_core::graph::PairSpace;
///
/// let space = PairSpace::new(4);
/// assert_eq!(space.len(), 6);
/// assert_eq!(space.pairs()[0], (0, 1));
/// assert_eq!(space.index_of(2, 3), 5);
/// ```
#[derive(Debug, Clone)]
pub struct PairSpace {
    vertices: usize,
    pairs: Vec<(u8, u8)>,
}

impl PairSpace {
    /// Builds the pair order for `vertices` labelled vertices.
    ///
    /// # Panics
    /// Panics when `vertices` exceeds [`MAX_VERTICES`]; callers reach this
    /// type through [`crate::CensusBuilder`], which validates first.
    #[must_use]
    pub fn new(vertices: usize) -> Self {
        assert!(
            vertices <= MAX_VERTICES,
            "pair space supports at most {MAX_VERTICES} vertices, got {vertices}"
        );
        let mut pairs = Vec::with_capacity(vertices * vertices.saturating_sub(1) / 2);
        for i in 0..vertices {
            for j in (i + 1)..vertices {
                pairs.push((i as u8, j as u8));
            }
        }
        Self { vertices, pairs }
    }

    /// Returns the vertex count this space was built for.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the number of vertex pairs, i.e. the maximum edge count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` when there are no pairs (fewer than two vertices).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the pairs in traversal order.
    #[must_use]
    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    /// Returns the pair index of `(i, j)`; requires `i < j < vertices`.
    #[must_use]
    pub fn index_of(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < j && j < self.vertices);
        i * self.vertices - i * (i + 1) / 2 + (j - i - 1)
    }
}

/// A simple undirected graph as packed upper-triangle edge bits.
///
/// A plain copyable value: adding an edge derives a fresh graph, since the
/// enumeration derives many descendants independently from one parent.
///
/// # Examples
/// ```
/// use census_core::graph::{EdgeBits, PairSpace};
///
/// let space = PairSpace::new(3);
/// let path = EdgeBits::EMPTY
///     .with_edge(space.index_of(0, 1))
///     .with_edge(space.index_of(1, 2));
/// assert_eq!(path.edge_count(), 2);
/// assert!(!path.contains(space.index_of(0, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeBits(u64);

impl EdgeBits {
    /// The graph with no edges.
    pub const EMPTY: Self = Self(0);

    /// Returns `true` when the edge at `pair` is present.
    #[must_use]
    pub fn contains(self, pair: usize) -> bool {
        self.0 & (1 << pair) != 0
    }

    /// Returns a copy of this graph with the edge at `pair` added.
    #[must_use]
    pub fn with_edge(self, pair: usize) -> Self {
        Self(self.0 | (1 << pair))
    }

    /// Returns the number of edges present.
    #[must_use]
    pub fn edge_count(self) -> u32 {
        self.0.count_ones()
    }
}

/// A fixed-width canonical hash key.
///
/// The upper-triangle edge bits of a graph in pair-traversal order, as seen
/// through one vertex permutation. Keys compare and hash structurally, so a
/// plain hash set over them serves as the visited filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(u64);

/// The action a vertex permutation induces on pair indices.
///
/// Precomputing the induced index table turns key extraction into one table
/// lookup and one bit test per pair, which matters because key extraction
/// runs N! times for every newly discovered class.
///
/// # Examples
/// ```
/// use census_core::graph::{EdgeBits, PairAction, PairSpace};
/// use census_core::permutation::SymmetricGroup;
///
/// let space = PairSpace::new(3);
/// let group = SymmetricGroup::generate(3);
/// let actions: Vec<PairAction> = group
///     .permutations()
///     .iter()
///     .map(|permutation| PairAction::induced(permutation, &space))
///     .collect();
///
/// let path = EdgeBits::EMPTY
///     .with_edge(space.index_of(0, 1))
///     .with_edge(space.index_of(1, 2));
/// let mirrored = EdgeBits::EMPTY
///     .with_edge(space.index_of(0, 1))
///     .with_edge(space.index_of(0, 2));
///
/// // Some relabelling carries the path onto its mirror image.
/// let mirrored_key = actions[0].key_of(mirrored);
/// assert!(actions.iter().any(|action| action.key_of(path) == mirrored_key));
/// ```
#[derive(Debug, Clone)]
pub struct PairAction {
    table: Box<[u8]>,
}

impl PairAction {
    /// Computes the action of `permutation` on the pairs of `space`.
    ///
    /// Entry `p` of the table is the pair index of the relabelled endpoints
    /// of pair `p`, so the key bit at position `p` reads the graph's edge
    /// bit for `(map[i], map[j])`.
    ///
    /// # Panics
    /// Panics when the permutation's degree differs from the space's vertex
    /// count.
    #[must_use]
    pub fn induced(permutation: &Permutation, space: &PairSpace) -> Self {
        assert_eq!(
            permutation.degree(),
            space.vertices(),
            "permutation degree must match the pair space"
        );
        let table = space
            .pairs()
            .iter()
            .map(|&(i, j)| {
                let a = permutation.apply(usize::from(i));
                let b = permutation.apply(usize::from(j));
                space.index_of(a.min(b), a.max(b)) as u8
            })
            .collect();
        Self { table }
    }

    /// Extracts the canonical key of `graph` under this action.
    #[must_use]
    pub fn key_of(&self, graph: EdgeBits) -> CanonicalKey {
        let mut bits = 0u64;
        for (position, &source) in self.table.iter().enumerate() {
            if graph.contains(usize::from(source)) {
                bits |= 1 << position;
            }
        }
        CanonicalKey(bits)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::{EdgeBits, PairAction, PairSpace};
    use crate::permutation::SymmetricGroup;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(4, 6)]
    #[case(7, 21)]
    #[case(11, 55)]
    fn pair_count_is_n_choose_two(#[case] vertices: usize, #[case] expected: usize) {
        assert_eq!(PairSpace::new(vertices).len(), expected);
    }

    #[test]
    fn index_of_matches_traversal_order() {
        let space = PairSpace::new(5);
        for (position, &(i, j)) in space.pairs().iter().enumerate() {
            assert_eq!(space.index_of(usize::from(i), usize::from(j)), position);
        }
    }

    #[test]
    fn with_edge_derives_a_new_value() {
        let space = PairSpace::new(4);
        let empty = EdgeBits::EMPTY;
        let one = empty.with_edge(space.index_of(1, 3));
        assert_eq!(empty.edge_count(), 0);
        assert_eq!(one.edge_count(), 1);
        assert!(one.contains(space.index_of(1, 3)));
    }

    #[test]
    fn identity_keys_separate_distinct_graphs() {
        let space = PairSpace::new(4);
        let group = SymmetricGroup::generate(4);
        let identity = PairAction::induced(group.identity(), &space);

        let keys: HashSet<_> = (0..space.len())
            .map(|pair| identity.key_of(EdgeBits::EMPTY.with_edge(pair)))
            .collect();
        assert_eq!(keys.len(), space.len());
    }

    #[test]
    fn a_transposition_carries_edges_with_it() {
        // Under the swap of vertices 0 and 1 the key bit for pair (1, 2)
        // reads the graph's edge (0, 2).
        let space = PairSpace::new(3);
        let group = SymmetricGroup::generate(3);
        let swap = group
            .permutations()
            .iter()
            .find(|permutation| permutation.as_slice() == &[1u8, 0, 2][..])
            .expect("the full group contains every transposition");
        let action = PairAction::induced(swap, &space);
        let identity = PairAction::induced(group.identity(), &space);

        let edge_02 = EdgeBits::EMPTY.with_edge(space.index_of(0, 2));
        let edge_12 = EdgeBits::EMPTY.with_edge(space.index_of(1, 2));
        assert_eq!(action.key_of(edge_02), identity.key_of(edge_12));
    }

    #[test]
    fn isomorphic_graphs_share_a_key_set() {
        // Two labelled paths on three vertices: 0-1-2 and 0-2-1.
        let space = PairSpace::new(3);
        let group = SymmetricGroup::generate(3);
        let actions: Vec<PairAction> = group
            .permutations()
            .iter()
            .map(|permutation| PairAction::induced(permutation, &space))
            .collect();

        let first = EdgeBits::EMPTY
            .with_edge(space.index_of(0, 1))
            .with_edge(space.index_of(1, 2));
        let second = EdgeBits::EMPTY
            .with_edge(space.index_of(0, 2))
            .with_edge(space.index_of(1, 2));

        let mut first_keys: Vec<_> = actions.iter().map(|action| action.key_of(first)).collect();
        let mut second_keys: Vec<_> = actions.iter().map(|action| action.key_of(second)).collect();
        first_keys.sort_unstable();
        first_keys.dedup();
        second_keys.sort_unstable();
        second_keys.dedup();
        assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn non_isomorphic_graphs_have_disjoint_key_sets() {
        // A path and a triangle have different edge counts, so no key of one
        // can appear among the keys of the other.
        let space = PairSpace::new(3);
        let group = SymmetricGroup::generate(3);
        let actions: Vec<PairAction> = group
            .permutations()
            .iter()
            .map(|permutation| PairAction::induced(permutation, &space))
            .collect();

        let path = EdgeBits::EMPTY
            .with_edge(space.index_of(0, 1))
            .with_edge(space.index_of(1, 2));
        let triangle = path.with_edge(space.index_of(0, 2));

        for action in &actions {
            let key = action.key_of(path);
            assert!(actions.iter().all(|other| other.key_of(triangle) != key));
        }
    }
}
