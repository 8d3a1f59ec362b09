//! Vertex permutations and the symmetric group.
//!
//! The enumeration canonicalises every newly discovered graph under all N!
//! vertex relabellings, so the full symmetric group is generated once up
//! front and held read-only for the remainder of a run.

/// A bijective relabelling of the vertex set `{0, .., n-1}`.
///
/// The permutation is stored as its direct mapping: entry `i` is the image
/// of vertex `i`.
///
/// # Examples
/// ```
/// use census_core::permutation::Permutation;
///
/// let identity = Permutation::identity(4);
/// assert_eq!(identity.apply(2), 2);
/// assert_eq!(identity.as_slice(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    map: Box<[u8]>,
}

impl Permutation {
    /// Returns the identity permutation on `degree` vertices.
    ///
    /// # Examples
    /// ```
    /// use census_core::permutation::Permutation;
    ///
    /// assert_eq!(Permutation::identity(3).as_slice(), &[0, 1, 2]);
    /// assert!(Permutation::identity(0).as_slice().is_empty());
    /// ```
    #[must_use]
    pub fn identity(degree: usize) -> Self {
        Self {
            map: (0..degree).map(|vertex| vertex as u8).collect(),
        }
    }

    /// Returns the number of vertices this permutation acts on.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.map.len()
    }

    /// Returns the image of `vertex` under this permutation.
    ///
    /// # Panics
    /// Panics when `vertex` is not in `[0, degree)`.
    #[must_use]
    pub fn apply(&self, vertex: usize) -> usize {
        usize::from(self.map[vertex])
    }

    /// Returns the direct mapping as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.map
    }

    /// Advances `self` to its lexicographic successor, returning `false`
    /// once the mapping is the lexicographically last one.
    fn advance(&mut self) -> bool {
        let map = &mut self.map;
        if map.len() < 2 {
            return false;
        }
        let mut pivot = map.len() - 1;
        while pivot > 0 && map[pivot - 1] >= map[pivot] {
            pivot -= 1;
        }
        if pivot == 0 {
            return false;
        }
        let mut successor = map.len() - 1;
        while map[successor] <= map[pivot - 1] {
            successor -= 1;
        }
        map.swap(pivot - 1, successor);
        map[pivot..].reverse();
        true
    }
}

/// The full symmetric group on a fixed vertex set, enumerated once.
///
/// Permutations are produced in lexicographic order starting from the
/// identity, so the group's first element doubles as the fixed reference
/// permutation used for cheap existence probes.
///
/// # Examples
/// ```
/// use census_core::permutation::SymmetricGroup;
///
/// let group = SymmetricGroup::generate(3);
/// assert_eq!(group.order(), 6);
/// assert_eq!(group.identity().as_slice(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct SymmetricGroup {
    degree: usize,
    permutations: Vec<Permutation>,
}

impl SymmetricGroup {
    /// Enumerates all `degree!` permutations of `{0, .., degree-1}`.
    ///
    /// A degree of zero yields the single empty permutation, matching the
    /// group-theoretic convention that S_0 has one element.
    ///
    /// # Examples
    /// ```
    /// use census_core::permutation::SymmetricGroup;
    ///
    /// assert_eq!(SymmetricGroup::generate(0).order(), 1);
    /// assert_eq!(SymmetricGroup::generate(4).order(), 24);
    /// ```
    #[must_use]
    pub fn generate(degree: usize) -> Self {
        let mut cursor = Permutation::identity(degree);
        let mut permutations = vec![cursor.clone()];
        while cursor.advance() {
            permutations.push(cursor.clone());
        }
        Self {
            degree,
            permutations,
        }
    }

    /// Returns the number of vertices the group acts on.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of permutations in the group.
    #[must_use]
    pub fn order(&self) -> usize {
        self.permutations.len()
    }

    /// Returns every permutation in generation order.
    #[must_use]
    pub fn permutations(&self) -> &[Permutation] {
        &self.permutations
    }

    /// Returns the identity permutation, the group's first element.
    #[must_use]
    pub fn identity(&self) -> &Permutation {
        &self.permutations[0]
    }
}
