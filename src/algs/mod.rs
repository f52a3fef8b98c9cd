//! Re-export public algorithms.

pub mod witness;

pub use witness::{EuclideanWitnessComplex, WitnessComplex};
