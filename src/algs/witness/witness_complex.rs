//! Weak witness complex construction.
//!
//! [`WitnessComplex`] owns the landmarks, the witnesses and a
//! nearest-neighbor index over the landmarks. [`WitnessComplex::create_complex`]
//! fills an empty [`SimplicialComplexForWitness`] with the (weak) witness
//! complex of relaxation `max_alpha_square`:
//!
//! 1. every landmark becomes a vertex with filtration 0;
//! 2. every witness starts a nearest-landmark query and becomes active;
//! 3. for `k = 1, 2, …`, each active witness inserts the `k`-simplices it
//!    certifies, and witnesses that certify none are dropped;
//! 4. the loop ends when no witness is active or `k` passes the dimension
//!    limit, and the last dimension reached is recorded on the complex.
//!
//! # Example
//! ```rust
//! use witness_sieve::algs::witness::EuclideanWitnessComplex;
//! use witness_sieve::topology::SimplexTree;
//!
//! let landmarks = vec![vec![0.0, 0.0], vec![2.0, 0.0], vec![0.0, 5.0]];
//! let witnesses = vec![vec![1.0, 0.0]];
//! let wc = EuclideanWitnessComplex::new(landmarks, witnesses)?;
//!
//! let mut complex = SimplexTree::new();
//! let report = wc.create_complex(&mut complex, 0.0, None)?;
//! assert_eq!(report.simplices_inserted, 4);
//! assert!(complex.contains(&[0, 1]));
//! assert!(!complex.contains(&[0, 2]));
//! # Ok::<(), witness_sieve::complex_error::WitnessComplexError>(())
//! ```

use super::active_set::ActiveWitnessSet;
use super::engine::FaceEnumeration;
use crate::complex_error::WitnessComplexError;
use crate::geometry::kernel::Euclidean;
use crate::spatial::{
    FromLandmarks, KdTree, NearestNeighborIndex, SortedScanIndex, first_dimension_mismatch,
};
use crate::topology::complex::SimplicialComplexForWitness;
use crate::topology::simplex::LandmarkId;

/// Parameters of one construction.
#[derive(Clone, Debug, PartialEq)]
pub struct WitnessOptions {
    /// Squared relaxation budget α²; must be non-negative.
    pub max_alpha_square: f64,
    /// Highest simplex dimension to build; `None` means unbounded. Must be
    /// non-negative when given.
    pub limit_dimension: Option<i64>,
}

impl Default for WitnessOptions {
    fn default() -> Self {
        Self {
            max_alpha_square: 0.0,
            limit_dimension: None,
        }
    }
}

/// Summary of a successful construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConstructionReport {
    /// Dimension recorded on the complex: the last round `k` that ran, an
    /// upper bound on the dimension of the stored simplices.
    pub dimension: usize,
    /// Simplices inserted, vertices included.
    pub simplices_inserted: usize,
    /// Witnesses still active when the loop stopped; non-zero only when the
    /// dimension limit ended the construction.
    pub witnesses_remaining: usize,
}

/// Witness complex over landmark and witness point sets.
///
/// The landmarks live in the nearest-neighbor index; every witness has been
/// checked to share their dimension.
#[derive(Clone, Debug)]
pub struct WitnessComplex<P, I> {
    witnesses: Vec<P>,
    index: I,
}

/// Witness complex over Euclidean `Vec<T>` points searched with a kd-tree.
pub type EuclideanWitnessComplex<T = f64> = WitnessComplex<Vec<T>, KdTree<T>>;

/// Witness complex searched by exhaustive distance sorting.
pub type ScanWitnessComplex<T = f64> = WitnessComplex<Vec<T>, SortedScanIndex<Euclidean<T>>>;

impl<P, I> WitnessComplex<P, I>
where
    I: NearestNeighborIndex<Point = P> + FromLandmarks,
{
    /// Index the landmarks and record the witnesses. Landmark `i` becomes
    /// vertex `i` of every complex built from this value.
    ///
    /// # Errors
    /// [`WitnessComplexError::DimensionMismatch`] if the landmarks disagree on
    /// their dimension, [`WitnessComplexError::WitnessDimensionMismatch`] if a
    /// witness disagrees with them.
    pub fn new(landmarks: Vec<P>, witnesses: Vec<P>) -> Result<Self, WitnessComplexError> {
        Self::with_index(I::from_landmarks(landmarks)?, witnesses)
    }
}

impl<P, I> WitnessComplex<P, I>
where
    I: NearestNeighborIndex<Point = P>,
{
    /// Use a prebuilt index; its landmarks become the vertices.
    ///
    /// # Errors
    /// [`WitnessComplexError::WitnessDimensionMismatch`] if a witness's
    /// dimension differs from the landmarks'.
    pub fn with_index(index: I, witnesses: Vec<P>) -> Result<Self, WitnessComplexError> {
        if let Some(expected) = index.landmark_dimension() {
            if let Some((at, found)) =
                first_dimension_mismatch(&witnesses, expected, |w| index.point_dimension(w))
            {
                return Err(WitnessComplexError::WitnessDimensionMismatch {
                    index: at,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { witnesses, index })
    }

    /// The landmark behind a vertex of the output complex.
    #[inline]
    pub fn get_point(&self, vertex: LandmarkId) -> Option<&P> {
        self.index.landmarks().get(vertex)
    }

    #[inline]
    pub fn landmarks(&self) -> &[P] {
        self.index.landmarks()
    }

    #[inline]
    pub fn witnesses(&self) -> &[P] {
        &self.witnesses
    }

    #[inline]
    pub fn num_landmarks(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn num_witnesses(&self) -> usize {
        self.witnesses.len()
    }

    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Build the witness complex of relaxation `max_alpha_square` into
    /// `complex`, up to `limit_dimension` (`None` for no limit).
    ///
    /// # Errors
    /// Nothing is written to `complex` when it is not empty, when
    /// `max_alpha_square` is negative or NaN, or when `limit_dimension` is
    /// negative.
    pub fn create_complex<C>(
        &self,
        complex: &mut C,
        max_alpha_square: f64,
        limit_dimension: Option<i64>,
    ) -> Result<ConstructionReport, WitnessComplexError>
    where
        C: SimplicialComplexForWitness,
    {
        self.create_complex_with_options(
            complex,
            &WitnessOptions {
                max_alpha_square,
                limit_dimension,
            },
        )
    }

    /// [`create_complex`](Self::create_complex) with the parameters bundled.
    pub fn create_complex_with_options<C>(
        &self,
        complex: &mut C,
        options: &WitnessOptions,
    ) -> Result<ConstructionReport, WitnessComplexError>
    where
        C: SimplicialComplexForWitness,
    {
        let limit = check_preconditions(complex, options).inspect_err(|e| log::error!("{e}"))?;

        let mut inserted = 0;
        for vertex in 0..self.index.len() {
            if complex.insert_simplex(&[vertex], 0.0) {
                inserted += 1;
            }
        }

        if self.index.is_empty() && !self.witnesses.is_empty() {
            log::warn!(
                "witness complex has {} witnesses but no landmarks",
                self.witnesses.len()
            );
        }
        let mut active =
            ActiveWitnessSet::from_queries(self.witnesses.iter().map(|w| self.index.query(w)));

        let mut engine = FaceEnumeration::new(complex, options.max_alpha_square);
        let mut k = 1;
        while !active.is_empty() && limit.is_none_or(|limit| k <= limit) {
            let contributed = active.visit(|witness| engine.add_all_faces(k, witness));
            let dropped = active.retain_active(&contributed);
            log::debug!(
                "witness complex round k={k}: {} active, {dropped} dropped, {} simplices inserted so far",
                active.len(),
                inserted + engine.inserted()
            );
            k += 1;
        }
        inserted += engine.inserted();

        let dimension = k - 1;
        complex.set_dimension(dimension);
        log::debug!("witness complex built: dimension {dimension}, {inserted} simplices");
        Ok(ConstructionReport {
            dimension,
            simplices_inserted: inserted,
            witnesses_remaining: active.len(),
        })
    }
}

/// Validate the construction parameters against the target complex and
/// return the dimension limit as a `usize` (`None` when unbounded).
fn check_preconditions<C: SimplicialComplexForWitness>(
    complex: &C,
    options: &WitnessOptions,
) -> Result<Option<usize>, WitnessComplexError> {
    let num_vertices = complex.num_vertices();
    if num_vertices > 0 {
        return Err(WitnessComplexError::ComplexNotEmpty { num_vertices });
    }
    if !(options.max_alpha_square >= 0.0) {
        return Err(WitnessComplexError::NegativeRelaxation(
            options.max_alpha_square,
        ));
    }
    match options.limit_dimension {
        Some(limit) if limit < 0 => Err(WitnessComplexError::NegativeLimitDimension(limit)),
        Some(limit) => Ok(Some(usize::try_from(limit).unwrap_or(usize::MAX))),
        None => Ok(None),
    }
}
