//! Sink trait for complexes grown by the witness construction.
//!
//! The construction only ever checks facet presence and filtration, inserts
//! simplices, and records the final dimension. It never deletes and never
//! reads anything else back, so any simplicial store can serve as the target
//! by implementing [`SimplicialComplexForWitness`].
//!
//! Several witnesses may certify the same simplex within one dimension round,
//! each with its own relaxation. A sink keeps the smallest: the round for
//! dimension `k` only reads filtrations of dimension `k - 1`, which are final
//! by then.

use crate::topology::simplex::{Filtration, LandmarkId};

/// Minimal simplicial complex API consumed by
/// [`WitnessComplex::create_complex`](crate::algs::witness::WitnessComplex::create_complex).
///
/// Vertex slices passed by the construction are strictly increasing.
pub trait SimplicialComplexForWitness {
    /// Opaque handle to a stored simplex.
    type SimplexHandle: Copy;

    /// Number of 0-simplices currently stored.
    fn num_vertices(&self) -> usize;

    /// Handle of the simplex with exactly these vertices, if present.
    fn find(&self, vertices: &[LandmarkId]) -> Option<Self::SimplexHandle>;

    /// Filtration value of a stored simplex.
    fn filtration(&self, handle: Self::SimplexHandle) -> Filtration;

    /// Store a simplex. Returns `false` when it was already present; its
    /// filtration then becomes the smaller of the stored and given values.
    fn insert_simplex(&mut self, vertices: &[LandmarkId], filtration: Filtration) -> bool;

    /// Record the dimension reached by the construction.
    fn set_dimension(&mut self, dimension: usize);
}

impl<C: SimplicialComplexForWitness + ?Sized> SimplicialComplexForWitness for &mut C {
    type SimplexHandle = C::SimplexHandle;

    #[inline]
    fn num_vertices(&self) -> usize {
        (**self).num_vertices()
    }
    #[inline]
    fn find(&self, vertices: &[LandmarkId]) -> Option<Self::SimplexHandle> {
        (**self).find(vertices)
    }
    #[inline]
    fn filtration(&self, handle: Self::SimplexHandle) -> Filtration {
        (**self).filtration(handle)
    }
    #[inline]
    fn insert_simplex(&mut self, vertices: &[LandmarkId], filtration: Filtration) -> bool {
        (**self).insert_simplex(vertices, filtration)
    }
    #[inline]
    fn set_dimension(&mut self, dimension: usize) {
        (**self).set_dimension(dimension)
    }
}
