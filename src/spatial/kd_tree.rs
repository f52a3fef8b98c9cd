//! Kd-tree with incremental nearest-neighbor queries.
//!
//! The tree splits at the median of the widest bounding-box axis until a node
//! holds at most [`LEAF_SIZE`] landmarks. A query is a best-first traversal:
//! a min-heap holds both unexpanded nodes (keyed by the squared distance from
//! the query to their bounding box) and individual landmarks (keyed by their
//! exact squared distance). Popping a landmark means nothing closer is left in
//! the heap, so landmarks come out in order and only as fast as the consumer
//! pulls them.
//!
//! On equal keys, nodes are expanded before landmarks are emitted and
//! landmarks are emitted by ascending id, which makes the order identical to
//! [`SortedScanIndex`](super::SortedScanIndex).

use super::{FromLandmarks, LandmarkDistance, NearestNeighborIndex, first_dimension_mismatch};
use crate::complex_error::WitnessComplexError;
use crate::geometry::kernel::squared_distance;
use crate::topology::simplex::LandmarkId;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Maximum number of landmarks stored in a leaf.
pub const LEAF_SIZE: usize = 8;

#[derive(Clone, Debug)]
enum NodeKind {
    Leaf { start: usize, end: usize },
    Split { left: usize, right: usize },
}

#[derive(Clone, Debug)]
struct KdNode<T> {
    lo: Vec<T>,
    hi: Vec<T>,
    kind: NodeKind,
}

/// Kd-tree over Euclidean landmarks.
#[derive(Clone, Debug)]
pub struct KdTree<T = f64> {
    points: Vec<Vec<T>>,
    /// Landmark ids permuted so every leaf owns a contiguous range.
    order: Vec<LandmarkId>,
    nodes: Vec<KdNode<T>>,
    dimension: usize,
}

impl<T: Float> KdTree<T> {
    /// Build a tree over `points`; point `i` becomes landmark `i`.
    ///
    /// Fails with [`WitnessComplexError::DimensionMismatch`] if the points do
    /// not all share the first point's dimension.
    pub fn new(points: Vec<Vec<T>>) -> Result<Self, WitnessComplexError> {
        let dimension = points.first().map_or(0, Vec::len);
        if let Some((index, found)) = first_dimension_mismatch(&points, dimension, Vec::len) {
            return Err(WitnessComplexError::DimensionMismatch {
                index,
                expected: dimension,
                found,
            });
        }
        let mut tree = Self {
            order: (0..points.len()).collect(),
            points,
            nodes: Vec::new(),
            dimension,
        };
        if !tree.points.is_empty() {
            tree.nodes.reserve(2 * tree.points.len() / LEAF_SIZE + 1);
            tree.build(0, tree.points.len());
        }
        Ok(tree)
    }

    /// Embedding dimension of the landmarks (0 for an empty tree).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Builds the subtree over `order[start..end]` and returns its node index.
    fn build(&mut self, start: usize, end: usize) -> usize {
        let (lo, hi) = self.bounds(start, end);
        let count = end - start;
        let node = self.nodes.len();

        let widest = (0..self.dimension).max_by(|&a, &b| {
            (hi[a] - lo[a])
                .partial_cmp(&(hi[b] - lo[b]))
                .unwrap_or(Ordering::Equal)
        });
        let axis = match widest {
            Some(axis) if count > LEAF_SIZE => axis,
            _ => {
                self.nodes.push(KdNode {
                    lo,
                    hi,
                    kind: NodeKind::Leaf { start, end },
                });
                return node;
            }
        };

        let points = &self.points;
        self.order[start..end].select_nth_unstable_by(count / 2, |&a, &b| {
            points[a][axis]
                .partial_cmp(&points[b][axis])
                .unwrap_or(Ordering::Equal)
        });
        let mid = start + count / 2;

        self.nodes.push(KdNode {
            lo,
            hi,
            kind: NodeKind::Split { left: 0, right: 0 },
        });
        let left = self.build(start, mid);
        let right = self.build(mid, end);
        self.nodes[node].kind = NodeKind::Split { left, right };
        node
    }

    fn bounds(&self, start: usize, end: usize) -> (Vec<T>, Vec<T>) {
        let mut lo = vec![T::infinity(); self.dimension];
        let mut hi = vec![T::neg_infinity(); self.dimension];
        for &id in &self.order[start..end] {
            for (axis, &c) in self.points[id].iter().enumerate() {
                lo[axis] = lo[axis].min(c);
                hi[axis] = hi[axis].max(c);
            }
        }
        (lo, hi)
    }

    /// Squared distance from `q` to the closest point of a node's box.
    fn box_distance(node: &KdNode<T>, q: &[T]) -> f64 {
        let sum = node
            .lo
            .iter()
            .zip(&node.hi)
            .zip(q)
            .fold(T::zero(), |acc, ((&lo, &hi), &c)| {
                let d = if c < lo {
                    lo - c
                } else if c > hi {
                    c - hi
                } else {
                    T::zero()
                };
                acc + d * d
            });
        sum.to_f64().unwrap_or(f64::INFINITY)
    }
}

impl<T: Float> NearestNeighborIndex for KdTree<T> {
    type Point = Vec<T>;
    type Query<'a>
        = IncrementalNearest<'a, T>
    where
        Self: 'a;

    fn query<'a>(&'a self, point: &Vec<T>) -> IncrementalNearest<'a, T> {
        let mut heap = BinaryHeap::new();
        if let Some(root) = self.nodes.first() {
            heap.push(HeapEntry {
                distance2: Self::box_distance(root, point),
                target: Target::Node(0),
            });
        }
        IncrementalNearest {
            tree: self,
            query: point.clone(),
            heap,
        }
    }

    #[inline]
    fn landmarks(&self) -> &[Vec<T>] {
        &self.points
    }

    #[inline]
    fn point_dimension(&self, point: &Vec<T>) -> usize {
        point.len()
    }
}

impl<T: Float> FromLandmarks for KdTree<T> {
    fn from_landmarks(landmarks: Vec<Vec<T>>) -> Result<Self, WitnessComplexError> {
        Self::new(landmarks)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Target {
    Node(usize),
    Landmark(LandmarkId),
}

#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    distance2: f64,
    target: Target,
}

// Reversed so that `BinaryHeap` pops the smallest key first.
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance2
            .total_cmp(&self.distance2)
            .then_with(|| other.target.cmp(&self.target))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// Lazy nearest-landmark sequence returned by [`KdTree::query`].
#[derive(Clone, Debug)]
pub struct IncrementalNearest<'a, T> {
    tree: &'a KdTree<T>,
    query: Vec<T>,
    heap: BinaryHeap<HeapEntry>,
}

impl<T: Float> Iterator for IncrementalNearest<'_, T> {
    type Item = LandmarkDistance;

    fn next(&mut self) -> Option<LandmarkDistance> {
        while let Some(entry) = self.heap.pop() {
            let node = match entry.target {
                Target::Landmark(id) => return Some(LandmarkDistance::new(id, entry.distance2)),
                Target::Node(node) => &self.tree.nodes[node],
            };
            match node.kind {
                NodeKind::Leaf { start, end } => {
                    for &id in &self.tree.order[start..end] {
                        self.heap.push(HeapEntry {
                            distance2: squared_distance(&self.tree.points[id], &self.query),
                            target: Target::Landmark(id),
                        });
                    }
                }
                NodeKind::Split { left, right } => {
                    for child in [left, right] {
                        self.heap.push(HeapEntry {
                            distance2: KdTree::<T>::box_distance(&self.tree.nodes[child], &self.query),
                            target: Target::Node(child),
                        });
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::SortedScanIndex;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn rejects_mixed_dimensions() {
        let err = KdTree::new(vec![vec![0.0, 0.0], vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            WitnessComplexError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn small_tree_is_a_single_leaf() {
        let tree = KdTree::new(vec![vec![0.0], vec![3.0], vec![1.0]]).unwrap();
        assert_eq!(tree.nodes.len(), 1);
        let ids: Vec<_> = tree.query(&vec![2.9]).map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[test]
    fn matches_sorted_scan_on_random_cloud() {
        let mut rng = SmallRng::seed_from_u64(7);
        let landmarks: Vec<Vec<f64>> = (0..200)
            .map(|_| (0..3).map(|_| rng.gen_range(-1.0..1.0)).collect())
            .collect();
        let tree = KdTree::from_landmarks(landmarks.clone()).unwrap();
        let scan = SortedScanIndex::<crate::geometry::Euclidean>::from_landmarks(landmarks).unwrap();
        for _ in 0..20 {
            let q: Vec<f64> = (0..3).map(|_| rng.gen_range(-1.5..1.5)).collect();
            let got: Vec<_> = tree.query(&q).collect();
            let want: Vec<_> = scan.query(&q).collect();
            assert_eq!(got, want);
        }
    }

    #[test]
    fn ties_come_out_by_id() {
        // Lattice points, many equidistant from the centre.
        let landmarks: Vec<Vec<f64>> = (0..5)
            .flat_map(|x| (0..5).map(move |y| vec![x as f64, y as f64]))
            .collect();
        let tree = KdTree::from_landmarks(landmarks).unwrap();
        let seq: Vec<_> = tree.query(&vec![2.0, 2.0]).collect();
        assert_eq!(seq.len(), 25);
        for w in seq.windows(2) {
            assert!(
                w[0].distance2 < w[1].distance2
                    || (w[0].distance2 == w[1].distance2 && w[0].id < w[1].id),
                "out of order: {:?}",
                w
            );
        }
    }

    #[test]
    fn query_is_lazy() {
        let landmarks: Vec<Vec<f64>> = (0..64).map(|i| vec![i as f64]).collect();
        let tree = KdTree::from_landmarks(landmarks).unwrap();
        let mut q = tree.query(&vec![0.0]);
        assert_eq!(q.next().map(|p| p.id), Some(0));
        // Far leaves have not been expanded into landmarks yet.
        assert!(q.heap.len() < tree.len());
    }

    #[test]
    fn empty_tree() {
        let tree = KdTree::<f64>::new(Vec::new()).unwrap();
        assert_eq!(tree.dimension(), 0);
        assert_eq!(tree.landmark_dimension(), None);
        assert_eq!(tree.query(&vec![1.0, 2.0]).count(), 0);
    }
}
