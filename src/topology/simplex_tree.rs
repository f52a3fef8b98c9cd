//! In-memory filtered simplicial complex.
//!
//! [`SimplexTree`] stores every simplex once, keyed by its sorted vertex list,
//! and hands out dense [`SimplexHandle`]s in insertion order. It implements
//! [`SimplicialComplexForWitness`] so it can be the target of a witness
//! construction, and [`DebugInvariants`] to check the closure and filtration
//! monotonicity of whatever was inserted.

use crate::complex_error::WitnessComplexError;
use crate::debug_invariants::DebugInvariants;
use crate::topology::complex::SimplicialComplexForWitness;
use crate::topology::simplex::{Filtration, LandmarkId, Simplex, facets_of, normalized};
use hashbrown::HashMap;
use std::cmp::Ordering;

/// Dense handle into a [`SimplexTree`], valid for the lifetime of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SimplexHandle(usize);

impl SimplexHandle {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Hash-indexed store of simplices with their filtration values.
#[derive(Clone, Debug, Default)]
pub struct SimplexTree {
    simplices: Vec<Simplex>,
    lookup: HashMap<Vec<LandmarkId>, SimplexHandle>,
    num_vertices: usize,
    dimension: Option<usize>,
}

impl SimplexTree {
    /// Creates a new, empty `SimplexTree`.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Total number of stored simplices, all dimensions included.
    #[inline]
    pub fn num_simplices(&self) -> usize {
        self.simplices.len()
    }

    pub fn num_simplices_of_dimension(&self, dimension: usize) -> usize {
        self.simplices
            .iter()
            .filter(|s| s.dimension() == dimension)
            .count()
    }

    /// Dimension recorded by [`SimplicialComplexForWitness::set_dimension`],
    /// or `None` if nothing was recorded yet.
    #[inline]
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Largest dimension among the stored simplices.
    pub fn max_simplex_dimension(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dimension).max()
    }

    /// Whether a simplex with these vertices (any order) is stored.
    pub fn contains(&self, vertices: &[LandmarkId]) -> bool {
        self.find(vertices).is_some()
    }

    /// Filtration of the simplex with these vertices (any order), if stored.
    pub fn filtration_of(&self, vertices: &[LandmarkId]) -> Option<Filtration> {
        self.find(vertices).map(|h| self.filtration(h))
    }

    #[inline]
    pub fn get(&self, handle: SimplexHandle) -> Option<&Simplex> {
        self.simplices.get(handle.0)
    }

    /// Simplices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Simplex> {
        self.simplices.iter()
    }

    /// Simplices in filtration order: by filtration value, then dimension,
    /// then lexicographic vertex order. Every simplex follows its faces.
    pub fn simplices(&self) -> Vec<&Simplex> {
        let mut out: Vec<&Simplex> = self.simplices.iter().collect();
        out.sort_by(|a, b| filtration_order(a, b));
        out
    }

    /// Simplices of dimension at most `dimension`, in filtration order.
    pub fn skeleton(&self, dimension: usize) -> Vec<&Simplex> {
        let mut out: Vec<&Simplex> = self
            .simplices
            .iter()
            .filter(|s| s.dimension() <= dimension)
            .collect();
        out.sort_by(|a, b| filtration_order(a, b));
        out
    }
}

fn filtration_order(a: &Simplex, b: &Simplex) -> Ordering {
    a.filtration()
        .total_cmp(&b.filtration())
        .then_with(|| a.dimension().cmp(&b.dimension()))
        .then_with(|| a.vertices().cmp(b.vertices()))
}

impl SimplicialComplexForWitness for SimplexTree {
    type SimplexHandle = SimplexHandle;

    #[inline]
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn find(&self, vertices: &[LandmarkId]) -> Option<SimplexHandle> {
        if vertices.is_sorted() {
            self.lookup.get(vertices).copied()
        } else {
            self.lookup.get(&normalized(vertices.iter().copied())).copied()
        }
    }

    #[inline]
    fn filtration(&self, handle: SimplexHandle) -> Filtration {
        self.simplices[handle.0].filtration()
    }

    fn insert_simplex(&mut self, vertices: &[LandmarkId], filtration: Filtration) -> bool {
        let simplex = Simplex::new(vertices.iter().copied(), filtration);
        if simplex.vertices().is_empty() {
            return false;
        }
        if let Some(&handle) = self.lookup.get(simplex.vertices()) {
            self.simplices[handle.0].lower_filtration(filtration);
            return false;
        }
        if simplex.dimension() == 0 {
            self.num_vertices += 1;
        }
        let handle = SimplexHandle(self.simplices.len());
        self.lookup.insert(simplex.vertices().to_vec(), handle);
        self.simplices.push(simplex);
        true
    }

    fn set_dimension(&mut self, dimension: usize) {
        self.dimension = Some(dimension);
        self.debug_assert_invariants();
    }
}

impl DebugInvariants for SimplexTree {
    fn validate_invariants(&self) -> Result<(), WitnessComplexError> {
        for (i, simplex) in self.simplices.iter().enumerate() {
            let vertices = simplex.vertices();
            if !vertices.windows(2).all(|w| w[0] < w[1]) {
                return Err(WitnessComplexError::UnsortedSimplex(vertices.to_vec()));
            }
            if self.lookup.get(vertices) != Some(&SimplexHandle(i)) {
                return Err(WitnessComplexError::StaleIndex(vertices.to_vec()));
            }
            let filtration = simplex.filtration();
            if filtration.is_nan() || filtration < 0.0 {
                return Err(WitnessComplexError::InvalidFiltration {
                    simplex: vertices.to_vec(),
                    filtration,
                });
            }
            for facet in facets_of(vertices) {
                let Some(facet_filtration) = self.filtration_of(&facet) else {
                    return Err(WitnessComplexError::MissingFacet {
                        simplex: vertices.to_vec(),
                        facet,
                    });
                };
                if facet_filtration > filtration {
                    return Err(WitnessComplexError::FiltrationNotMonotone {
                        simplex: vertices.to_vec(),
                        filtration,
                        facet,
                        facet_filtration,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(SimplexHandle, usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> SimplexTree {
        let mut st = SimplexTree::new();
        for v in 0..3 {
            st.insert_simplex(&[v], 0.0);
        }
        st.insert_simplex(&[0, 1], 0.5);
        st.insert_simplex(&[1, 2], 0.25);
        st.insert_simplex(&[0, 2], 1.0);
        st.insert_simplex(&[0, 1, 2], 1.5);
        st
    }

    #[test]
    fn insert_and_find() {
        let st = triangle();
        assert_eq!(st.num_vertices(), 3);
        assert_eq!(st.num_simplices(), 7);
        assert_eq!(st.filtration_of(&[2, 0]), Some(1.0));
        assert!(st.contains(&[2, 1, 0]));
        assert!(!st.contains(&[0, 3]));
    }

    #[test]
    fn reinsert_keeps_the_smaller_filtration() {
        let mut st = triangle();
        assert!(!st.insert_simplex(&[1, 0], 9.0));
        assert_eq!(st.filtration_of(&[0, 1]), Some(0.5));
        assert!(!st.insert_simplex(&[0, 1], 0.125));
        assert_eq!(st.filtration_of(&[0, 1]), Some(0.125));
        assert_eq!(st.num_simplices(), 7);
    }

    #[test]
    fn empty_vertex_list_is_rejected() {
        let mut st = SimplexTree::new();
        assert!(!st.insert_simplex(&[], 0.0));
        assert!(st.is_empty());
    }

    #[test]
    fn filtration_order_puts_faces_first() {
        let st = triangle();
        let order: Vec<Vec<LandmarkId>> =
            st.simplices().iter().map(|s| s.vertices().to_vec()).collect();
        assert_eq!(
            order,
            vec![
                vec![0],
                vec![1],
                vec![2],
                vec![1, 2],
                vec![0, 1],
                vec![0, 2],
                vec![0, 1, 2]
            ]
        );
    }

    #[test]
    fn skeleton_and_counts() {
        let st = triangle();
        assert_eq!(st.skeleton(0).len(), 3);
        assert_eq!(st.skeleton(1).len(), 6);
        assert_eq!(st.num_simplices_of_dimension(1), 3);
        assert_eq!(st.max_simplex_dimension(), Some(2));
        assert_eq!(st.dimension(), None);
    }

    #[test]
    fn validate_accepts_closed_complex() {
        assert!(triangle().validate_invariants().is_ok());
    }

    #[test]
    fn validate_reports_missing_facet() {
        let mut st = SimplexTree::new();
        st.insert_simplex(&[0], 0.0);
        st.insert_simplex(&[0, 1], 0.0);
        assert_eq!(
            st.validate_invariants(),
            Err(WitnessComplexError::MissingFacet {
                simplex: vec![0, 1],
                facet: vec![1],
            })
        );
    }

    #[test]
    fn validate_reports_non_monotone_filtration() {
        let mut st = SimplexTree::new();
        st.insert_simplex(&[0], 0.0);
        st.insert_simplex(&[1], 0.0);
        st.insert_simplex(&[2], 0.0);
        st.insert_simplex(&[0, 1], 2.0);
        st.insert_simplex(&[0, 2], 0.0);
        st.insert_simplex(&[1, 2], 0.0);
        st.insert_simplex(&[0, 1, 2], 1.0);
        assert!(matches!(
            st.validate_invariants(),
            Err(WitnessComplexError::FiltrationNotMonotone { .. })
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "[invariants]")]
    fn set_dimension_checks_closure() {
        let mut st = SimplexTree::new();
        st.insert_simplex(&[0], 0.0);
        st.insert_simplex(&[0, 1], 0.0);
        st.set_dimension(1);
    }

    #[test]
    fn mutable_reference_is_a_sink() {
        fn seed<C: SimplicialComplexForWitness>(mut c: C) {
            c.insert_simplex(&[0], 0.0);
            c.set_dimension(0);
        }
        let mut st = SimplexTree::new();
        seed(&mut st);
        assert_eq!(st.num_vertices(), 1);
        assert_eq!(st.dimension(), Some(0));
    }
}
