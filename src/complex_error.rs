//! WitnessComplexError: Unified error type for witness-sieve public APIs
//!
//! Precondition failures of a construction are recoverable: they are
//! detected before the target complex is touched, so the caller may retry
//! with corrected parameters. Invariant violations found by
//! [`DebugInvariants::validate_invariants`](crate::DebugInvariants) are
//! reported through the same type.

use crate::topology::simplex::{Filtration, LandmarkId};
use thiserror::Error;

/// Unified error type for witness-sieve operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WitnessComplexError {
    /// The target complex already holds simplices.
    #[error("Witness complex cannot create complex - complex is not empty ({num_vertices} vertices)")]
    ComplexNotEmpty { num_vertices: usize },
    /// The squared relaxation parameter is negative (or NaN).
    #[error("Witness complex cannot create complex - squared relaxation parameter must be non-negative (got {0})")]
    NegativeRelaxation(f64),
    /// The dimension cap is negative.
    #[error("Witness complex cannot create complex - limit dimension must be non-negative (got {0})")]
    NegativeLimitDimension(i64),
    /// A landmark's coordinate count differs from the first landmark's.
    #[error("Landmark {index} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A witness's coordinate count differs from the landmarks'.
    #[error("Witness {index} has dimension {found}, landmarks have dimension {expected}")]
    WitnessDimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A stored simplex has a facet that is absent from the complex.
    #[error("Closure error: facet {facet:?} of simplex {simplex:?} is missing")]
    MissingFacet {
        simplex: Vec<LandmarkId>,
        facet: Vec<LandmarkId>,
    },
    /// A stored simplex enters the filtration before one of its facets.
    #[error(
        "Filtration error: simplex {simplex:?} has filtration {filtration} below facet {facet:?} at {facet_filtration}"
    )]
    FiltrationNotMonotone {
        simplex: Vec<LandmarkId>,
        filtration: Filtration,
        facet: Vec<LandmarkId>,
        facet_filtration: Filtration,
    },
    /// A stored simplex carries a negative or NaN filtration value.
    #[error("Filtration error: simplex {simplex:?} has invalid filtration {filtration}")]
    InvalidFiltration {
        simplex: Vec<LandmarkId>,
        filtration: Filtration,
    },
    /// A stored vertex list is not strictly increasing.
    #[error("Simplex {0:?} is not strictly increasing")]
    UnsortedSimplex(Vec<LandmarkId>),
    /// The lookup table disagrees with simplex storage.
    #[error("Index error: simplex {0:?} is not reachable through the lookup table")]
    StaleIndex(Vec<LandmarkId>),
}
