//! Level-synchronous breadth-first enumeration with canonical-form pruning.
//!
//! Graphs are generated one edge at a time: the frontier at level k holds
//! one representative per isomorphism class with exactly k edges. Each
//! candidate is probed against the visited set under a single fixed
//! reference permutation; a fresh class is then marked under the whole
//! symmetric group so every relabelling of it is recognised later. Only the
//! lower half of the edge-count range is enumerated; the upper half comes
//! from edge-complement symmetry via the doubling correction.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{CanonicalKey, EdgeBits, PairAction, PairSpace};
use crate::permutation::SymmetricGroup;
use crate::result::CensusResult;

/// The visited filter: keys already claimed by a discovered class.
///
/// Membership is insert-only for the duration of a run. The two
/// implementations differ only in how the per-class fan-out over the
/// group's actions is executed.
trait ClassLedger {
    fn contains(&self, key: &CanonicalKey) -> bool;

    /// Inserts `graph`'s key under every action, claiming the whole class.
    fn claim(&mut self, graph: EdgeBits, actions: &[PairAction]);
}

struct SequentialLedger {
    visited: HashSet<CanonicalKey>,
}

impl SequentialLedger {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
        }
    }
}

impl ClassLedger for SequentialLedger {
    fn contains(&self, key: &CanonicalKey) -> bool {
        self.visited.contains(key)
    }

    fn claim(&mut self, graph: EdgeBits, actions: &[PairAction]) {
        for action in actions {
            self.visited.insert(action.key_of(graph));
        }
    }
}

#[cfg(feature = "parallel")]
struct ParallelLedger {
    visited: dashmap::DashSet<CanonicalKey>,
}

#[cfg(feature = "parallel")]
impl ParallelLedger {
    fn new() -> Self {
        Self {
            visited: dashmap::DashSet::new(),
        }
    }
}

#[cfg(feature = "parallel")]
impl ClassLedger for ParallelLedger {
    fn contains(&self, key: &CanonicalKey) -> bool {
        self.visited.contains(key)
    }

    fn claim(&mut self, graph: EdgeBits, actions: &[PairAction]) {
        use rayon::prelude::*;

        // The fan-out blocks until every insertion lands, so the next
        // candidate's probe always sees a complete ledger.
        actions.par_iter().for_each(|action| {
            self.visited.insert(action.key_of(graph));
        });
    }
}

/// Counts isomorphism classes on the sequential backend.
pub(crate) fn count_sequential(vertices: usize) -> CensusResult {
    enumerate_with(vertices, &mut SequentialLedger::new())
}

/// Counts isomorphism classes with the permutation fan-out on the Rayon
/// pool. Classification order is unchanged, so the result is bit-identical
/// to the sequential backend.
#[cfg(feature = "parallel")]
pub(crate) fn count_parallel(vertices: usize) -> CensusResult {
    enumerate_with(vertices, &mut ParallelLedger::new())
}

fn enumerate_with<L: ClassLedger>(vertices: usize, ledger: &mut L) -> CensusResult {
    let space = PairSpace::new(vertices);
    let group = SymmetricGroup::generate(vertices);
    let actions: Vec<PairAction> = group
        .permutations()
        .iter()
        .map(|permutation| PairAction::induced(permutation, &space))
        .collect();
    // The identity action sits first; its key of a graph is the graph's own
    // bits, which is all the existence probe needs.
    let probe = &actions[0];

    let max_edges = space.len();
    let mut frontier = vec![EdgeBits::EMPTY];
    let mut level_counts: Vec<u64> = vec![1];
    let mut count: u64 = 1;

    for level in 1..=max_edges / 2 {
        let mut next = Vec::new();
        for &graph in &frontier {
            for pair in 0..max_edges {
                if graph.contains(pair) {
                    continue;
                }
                let candidate = graph.with_edge(pair);
                if ledger.contains(&probe.key_of(candidate)) {
                    continue;
                }
                ledger.claim(candidate, &actions);
                next.push(candidate);
            }
        }
        count += next.len() as u64;
        level_counts.push(next.len() as u64);
        debug!(level, classes = next.len(), "level complete");
        frontier = next;
    }

    // Classes are symmetric about max_edges / 2 under edge complement. When
    // max_edges is even the middle level is its own mirror and doubling
    // would count it twice; the subtraction also covers max_edges == 0,
    // where the frontier is still the initial one-element level.
    let class_count = if max_edges % 2 == 0 {
        count * 2 - frontier.len() as u64
    } else {
        count * 2
    };

    CensusResult::new(vertices, class_count, level_counts)
}

#[cfg(test)]
mod tests {
    use super::{ClassLedger, SequentialLedger, count_sequential};
    use crate::graph::{EdgeBits, PairAction, PairSpace};
    use crate::permutation::SymmetricGroup;

    #[test]
    fn reclaiming_a_class_leaves_membership_unchanged() {
        let space = PairSpace::new(4);
        let group = SymmetricGroup::generate(4);
        let actions: Vec<PairAction> = group
            .permutations()
            .iter()
            .map(|permutation| PairAction::induced(permutation, &space))
            .collect();

        let graph = EdgeBits::EMPTY.with_edge(space.index_of(0, 1));
        let mut ledger = SequentialLedger::new();
        ledger.claim(graph, &actions);
        let snapshot = ledger.visited.len();
        ledger.claim(graph, &actions);
        assert_eq!(ledger.visited.len(), snapshot);
        assert!(ledger.contains(&actions[0].key_of(graph)));
    }

    #[test]
    fn enumerated_half_matches_known_level_counts() {
        let result = count_sequential(5);
        assert_eq!(result.enumerated_levels(), &[1, 1, 2, 4, 6, 6]);
        assert_eq!(result.class_count(), 34);
    }

    #[test]
    fn degenerate_vertex_counts_keep_the_doubling_exact() {
        for vertices in 0..=1 {
            let result = count_sequential(vertices);
            assert_eq!(result.class_count(), 1);
            assert_eq!(result.enumerated_levels(), &[1]);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_backend_is_bit_identical() {
        for vertices in 0..=5 {
            assert_eq!(super::count_parallel(vertices), count_sequential(vertices));
        }
    }
}
