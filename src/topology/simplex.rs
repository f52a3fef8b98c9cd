//! `Simplex`: a vertex set over landmark ids with its filtration value.
//!
//! Landmarks are addressed by their position in the landmark list, so a
//! [`LandmarkId`] is a dense `usize` in `[0, landmark_count)`. A simplex keeps
//! its vertices strictly increasing. Its filtration value is the smallest
//! relaxation at which any witness certifies it.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense landmark identifier (position in the landmark list).
pub type LandmarkId = usize;

/// Filtration value: the minimal relaxation at which a simplex appears.
pub type Filtration = f64;

/// A simplex over landmark ids, stored with strictly increasing vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Simplex {
    vertices: Vec<LandmarkId>,
    filtration: Filtration,
}

impl Simplex {
    /// Build a simplex from any vertex order; duplicates are dropped.
    ///
    /// # Example
    /// ```rust
    /// use witness_sieve::topology::simplex::Simplex;
    /// let s = Simplex::new([4, 1, 4, 2], 0.5);
    /// assert_eq!(s.vertices(), &[1, 2, 4]);
    /// assert_eq!(s.dimension(), 2);
    /// ```
    pub fn new(vertices: impl IntoIterator<Item = LandmarkId>, filtration: Filtration) -> Self {
        Self {
            vertices: normalized(vertices),
            filtration,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[LandmarkId] {
        &self.vertices
    }

    #[inline]
    pub fn filtration(&self) -> Filtration {
        self.filtration
    }

    /// Dimension is one less than the vertex count (a vertex has dimension 0).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Keep the smaller of the current and the given filtration value.
    #[inline]
    pub(crate) fn lower_filtration(&mut self, filtration: Filtration) {
        if filtration < self.filtration {
            self.filtration = filtration;
        }
    }

    /// Codimension-1 faces, in lexicographic order. Empty for a vertex.
    pub fn facets(&self) -> impl Iterator<Item = Vec<LandmarkId>> + '_ {
        facets_of(&self.vertices)
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] @ {}", self.vertices.iter().join(", "), self.filtration)
    }
}

/// Sort and deduplicate a vertex sequence.
pub fn normalized(vertices: impl IntoIterator<Item = LandmarkId>) -> Vec<LandmarkId> {
    vertices.into_iter().sorted_unstable().dedup().collect()
}

/// Every facet of a sorted vertex list; none for a single vertex.
pub fn facets_of(vertices: &[LandmarkId]) -> impl Iterator<Item = Vec<LandmarkId>> + '_ {
    let k = vertices.len().saturating_sub(1);
    vertices
        .iter()
        .copied()
        .combinations(k)
        .filter(move |_| k > 0)
}
