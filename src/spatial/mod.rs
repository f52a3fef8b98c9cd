//! Nearest-landmark search.
//!
//! A witness construction only needs one capability from its spatial index:
//! given a query point, enumerate *all* landmarks by non-decreasing squared
//! distance. [`NearestNeighborIndex`] captures that capability; the sequence
//! is pulled lazily, so an index may defer work until the consumer asks for
//! the next landmark.
//!
//! Two implementations are provided:
//! - [`SortedScanIndex`]: computes every distance up front and sorts, for any
//!   [`Kernel`](crate::geometry::Kernel).
//! - [`KdTree`]: incremental best-first search over a kd-tree, for Euclidean
//!   `Vec<T>` points.
//!
//! Both break distance ties by ascending landmark id, so query results are
//! deterministic.

pub mod kd_tree;
pub mod sorted_scan;

pub use kd_tree::KdTree;
pub use sorted_scan::SortedScanIndex;

use crate::complex_error::WitnessComplexError;
use crate::topology::simplex::LandmarkId;
use serde::{Deserialize, Serialize};

/// One entry of a nearest-landmark sequence.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkDistance {
    pub id: LandmarkId,
    /// Squared distance from the query point.
    pub distance2: f64,
}

impl LandmarkDistance {
    #[inline]
    pub const fn new(id: LandmarkId, distance2: f64) -> Self {
        Self { id, distance2 }
    }
}

/// Incremental nearest-neighbor search over a fixed landmark set.
///
/// The index owns the landmarks; landmark `i` of [`landmarks`](Self::landmarks)
/// has id `i`.
///
/// # Contract
/// `query` yields every landmark exactly once, by non-decreasing
/// `distance2`, and the same query point always yields the same sequence.
/// Query points must have the landmarks' dimension.
pub trait NearestNeighborIndex {
    type Point;

    type Query<'a>: Iterator<Item = LandmarkDistance>
    where
        Self: 'a;

    /// Landmarks sorted by increasing squared distance from `point`.
    fn query<'a>(&'a self, point: &Self::Point) -> Self::Query<'a>;

    /// The indexed landmarks, by id.
    fn landmarks(&self) -> &[Self::Point];

    /// Embedding dimension of `point`.
    fn point_dimension(&self, point: &Self::Point) -> usize;

    /// Embedding dimension shared by the landmarks; `None` when there are none.
    fn landmark_dimension(&self) -> Option<usize> {
        self.landmarks().first().map(|l| self.point_dimension(l))
    }

    /// Number of indexed landmarks.
    fn len(&self) -> usize {
        self.landmarks().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Indexes that can be built directly from a landmark list, landmark `i`
/// receiving id `i`.
pub trait FromLandmarks: NearestNeighborIndex + Sized {
    fn from_landmarks(landmarks: Vec<Self::Point>) -> Result<Self, WitnessComplexError>;
}

/// First point whose dimension differs from `expected`, as
/// `(index, found)`.
pub(crate) fn first_dimension_mismatch<P>(
    points: &[P],
    expected: usize,
    dimension_of: impl Fn(&P) -> usize,
) -> Option<(usize, usize)> {
    points
        .iter()
        .map(dimension_of)
        .enumerate()
        .find(|&(_, found)| found != expected)
}
