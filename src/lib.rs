#![cfg_attr(docsrs, feature(doc_cfg))]
//! # witness-sieve
//!
//! witness-sieve builds (weak) witness complexes: filtered simplicial
//! complexes that approximate the shape of a point cloud using a small set of
//! *landmark* points as vertices and a larger set of *witness* points that
//! vote for which landmark simplices exist. A relaxation budget α² controls how
//! much slack the witnessing rule allows; each simplex is stored with the
//! smallest relaxation at which it appears.
//!
//! ## Features
//! - Dimension-by-dimension construction with distance and face-closure
//!   pruning ([`algs::witness`])
//! - Pluggable nearest-landmark search through [`spatial::NearestNeighborIndex`],
//!   with an incremental kd-tree and an exhaustive sorted scan
//! - Pluggable output through [`topology::SimplicialComplexForWitness`], with
//!   the in-memory [`topology::SimplexTree`]
//! - Invariant checks for closure and filtration monotonicity
//!   ([`DebugInvariants`])
//!
//! ## Determinism
//!
//! Nearest-landmark sequences break distance ties by landmark id, and the
//! construction is single-threaded, so the same inputs always produce the same
//! complex.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! witness-sieve = "0.1"
//! # Optional features:
//! # features = ["check-invariants"]
//! ```
//!
//! ```rust
//! use witness_sieve::prelude::*;
//!
//! let landmarks = vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
//! let witnesses = vec![vec![0.4, 0.4], vec![0.5, 0.0], vec![0.0, 0.5]];
//! let wc = EuclideanWitnessComplex::new(landmarks, witnesses)?;
//!
//! let mut complex = SimplexTree::new();
//! wc.create_complex(&mut complex, 0.5, Some(2))?;
//! complex.validate_invariants()?;
//! for simplex in complex.simplices() {
//!     println!("{simplex}");
//! }
//! # Ok::<(), witness_sieve::complex_error::WitnessComplexError>(())
//! ```

pub mod algs;
pub mod complex_error;
pub mod debug_invariants;
pub mod geometry;
pub mod spatial;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::witness::{
        ConstructionReport, EuclideanWitnessComplex, ScanWitnessComplex, WitnessComplex,
        WitnessOptions,
    };
    pub use crate::complex_error::WitnessComplexError;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{Euclidean, Kernel};
    pub use crate::spatial::{
        FromLandmarks, KdTree, LandmarkDistance, NearestNeighborIndex, SortedScanIndex,
    };
    pub use crate::topology::{
        Filtration, LandmarkId, Simplex, SimplexHandle, SimplexTree, SimplicialComplexForWitness,
    };
}
