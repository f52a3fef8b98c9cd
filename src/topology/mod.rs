//! Top-level module for simplicial complex abstractions.
//!
//! This module provides the core types and traits for storing the output of a
//! witness construction:
//! - [`simplex`]: landmark ids, filtration values and the `Simplex` type
//! - [`complex`]: the `SimplicialComplexForWitness` sink trait
//! - [`simplex_tree`]: the in-memory `SimplexTree` implementation
//!
//! Most users will build into a [`SimplexTree`] and read it back through
//! [`SimplexTree::simplices`] in filtration order.

pub mod complex;
pub mod simplex;
pub mod simplex_tree;

pub use complex::SimplicialComplexForWitness;
pub use simplex::{Filtration, LandmarkId, Simplex};
pub use simplex_tree::{SimplexHandle, SimplexTree};
