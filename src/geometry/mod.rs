//! Geometry utilities for witness-sieve.
//!
//! The construction itself never looks at coordinates: it only consumes
//! nearest-landmark sequences. This module provides the point arithmetic the
//! bundled spatial indexes are built on.

pub mod kernel;

pub use kernel::{Euclidean, Kernel, squared_distance};
