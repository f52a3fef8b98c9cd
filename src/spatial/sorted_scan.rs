//! Exhaustive nearest-landmark index.
//!
//! Every query computes all landmark distances with the configured
//! [`Kernel`] and sorts them. `O(n log n)` per query, but it works for any
//! point representation and serves as the reference ordering for the
//! kd-tree.

use super::{FromLandmarks, LandmarkDistance, NearestNeighborIndex, first_dimension_mismatch};
use crate::complex_error::WitnessComplexError;
use crate::geometry::kernel::{Euclidean, Kernel};
use std::fmt;

#[derive(Clone)]
pub struct SortedScanIndex<K: Kernel = Euclidean> {
    kernel: K,
    landmarks: Vec<K::Point>,
}

impl<K> fmt::Debug for SortedScanIndex<K>
where
    K: Kernel + fmt::Debug,
    K::Point: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedScanIndex")
            .field("kernel", &self.kernel)
            .field("landmarks", &self.landmarks)
            .finish()
    }
}

impl<K: Kernel> SortedScanIndex<K> {
    /// Fails with [`WitnessComplexError::DimensionMismatch`] if the landmarks
    /// do not all share the first landmark's dimension.
    pub fn with_kernel(kernel: K, landmarks: Vec<K::Point>) -> Result<Self, WitnessComplexError> {
        if let Some(first) = landmarks.first() {
            let expected = kernel.dimension(first);
            if let Some((index, found)) =
                first_dimension_mismatch(&landmarks, expected, |l| kernel.dimension(l))
            {
                return Err(WitnessComplexError::DimensionMismatch {
                    index,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { kernel, landmarks })
    }

    #[inline]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }
}

impl<K: Kernel> NearestNeighborIndex for SortedScanIndex<K> {
    type Point = K::Point;
    type Query<'a>
        = std::vec::IntoIter<LandmarkDistance>
    where
        Self: 'a;

    fn query<'a>(&'a self, point: &K::Point) -> Self::Query<'a> {
        let mut out: Vec<LandmarkDistance> = self
            .landmarks
            .iter()
            .enumerate()
            .map(|(id, l)| LandmarkDistance::new(id, self.kernel.squared_distance(point, l)))
            .collect();
        out.sort_by(|a, b| a.distance2.total_cmp(&b.distance2).then(a.id.cmp(&b.id)));
        out.into_iter()
    }

    #[inline]
    fn landmarks(&self) -> &[K::Point] {
        &self.landmarks
    }

    #[inline]
    fn point_dimension(&self, point: &K::Point) -> usize {
        self.kernel.dimension(point)
    }
}

impl<K: Kernel + Default> FromLandmarks for SortedScanIndex<K> {
    fn from_landmarks(landmarks: Vec<K::Point>) -> Result<Self, WitnessComplexError> {
        Self::with_kernel(K::default(), landmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_sorts_by_distance_then_id() {
        let landmarks = vec![vec![2.0], vec![-1.0], vec![1.0], vec![0.0]];
        let index = SortedScanIndex::<Euclidean>::from_landmarks(landmarks).unwrap();
        let ids: Vec<_> = index.query(&vec![0.0]).map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 0]);
    }

    #[test]
    fn query_covers_all_landmarks() {
        let landmarks: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, 0.5]).collect();
        let index = SortedScanIndex::<Euclidean>::from_landmarks(landmarks).unwrap();
        let seq: Vec<_> = index.query(&vec![4.2, 0.0]).collect();
        assert_eq!(seq.len(), 10);
        assert!(seq.windows(2).all(|w| w[0].distance2 <= w[1].distance2));
        assert_eq!(seq[0].id, 4);
    }

    #[test]
    fn empty_index_yields_nothing() {
        let index = SortedScanIndex::<Euclidean>::from_landmarks(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.landmark_dimension(), None);
        assert_eq!(index.query(&vec![1.0]).count(), 0);
    }

    #[test]
    fn rejects_mixed_dimensions() {
        let err = SortedScanIndex::with_kernel(Euclidean::new(), vec![vec![0.0], vec![1.0, 2.0]])
            .unwrap_err();
        assert_eq!(
            err,
            WitnessComplexError::DimensionMismatch {
                index: 1,
                expected: 1,
                found: 2
            }
        );
    }
}
