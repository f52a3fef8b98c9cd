//! (Weak) witness complex construction.
//!
//! - [`active_witness`]: per-witness buffered cursor over nearest landmarks
//! - [`active_set`]: the witnesses still contributing at the current dimension
//! - `engine`: the pruned face enumeration run per witness and dimension
//! - [`witness_complex`]: the dimension-by-dimension driver

pub mod active_set;
pub mod active_witness;
mod engine;
pub mod witness_complex;

pub use active_set::ActiveWitnessSet;
pub use active_witness::ActiveWitness;
pub use witness_complex::{
    ConstructionReport, EuclideanWitnessComplex, ScanWitnessComplex, WitnessComplex,
    WitnessOptions,
};
