//! Point kernels: an opaque point type plus a squared-distance function.
//!
//! # Coordinate layout
//! The default [`Euclidean`] kernel works on `Vec<T>` coordinate vectors for
//! any `T: num_traits::Float`. All points handed to one kernel must share
//! the same embedding dimension. Indexes and witness complexes check this up
//! front through [`Kernel::dimension`]; the distance functions themselves
//! only assert it in debug builds.

use num_traits::Float;
use std::marker::PhantomData;

/// Point representation and the squared distance between two points.
pub trait Kernel {
    type Point: Clone;

    /// Squared distance, non-negative and symmetric.
    fn squared_distance(&self, a: &Self::Point, b: &Self::Point) -> f64;

    /// Embedding dimension of `point`.
    fn dimension(&self, point: &Self::Point) -> usize;
}

/// Euclidean space over `Vec<T>` coordinates.
#[derive(Debug)]
pub struct Euclidean<T = f64>(PhantomData<fn() -> T>);

impl<T> Euclidean<T> {
    pub const fn new() -> Self {
        Euclidean(PhantomData)
    }
}

impl<T> Default for Euclidean<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Euclidean<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Euclidean<T> {}

impl<T: Float> Kernel for Euclidean<T> {
    type Point = Vec<T>;

    #[inline]
    fn squared_distance(&self, a: &Vec<T>, b: &Vec<T>) -> f64 {
        squared_distance(a, b)
    }

    #[inline]
    fn dimension(&self, point: &Vec<T>) -> usize {
        point.len()
    }
}

/// Squared Euclidean distance between two coordinate slices, as `f64`.
///
/// # Example
/// ```rust
/// use witness_sieve::geometry::squared_distance;
/// assert_eq!(squared_distance(&[0.0_f32, 0.0], &[3.0, 4.0]), 25.0);
/// ```
#[inline]
pub fn squared_distance<T: Float>(a: &[T], b: &[T]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "points of different dimension");
    let sum = a
        .iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| {
            let d = x - y;
            acc + d * d
        });
    sum.to_f64().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_kernel_matches_free_function() {
        let k = Euclidean::<f64>::new();
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 6.0, 3.0];
        assert_eq!(k.squared_distance(&a, &b), 25.0);
        assert_eq!(k.squared_distance(&b, &a), 25.0);
        assert_eq!(k.squared_distance(&a, &a), 0.0);
        assert_eq!(k.dimension(&a), 3);
    }

    #[test]
    fn single_precision_widens_to_f64() {
        let d = squared_distance(&[0.5_f32], &[1.5_f32]);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn zero_dimensional_points_are_coincident() {
        let empty: [f64; 0] = [];
        assert_eq!(squared_distance(&empty, &empty), 0.0);
    }
}
