//! Structural self-checks for stored complexes.
//!
//! A complex produced by the witness construction must be closed under taking
//! faces and its filtration must never decrease from a face to a coface.
//! Stores that can check this implement [`DebugInvariants`]; the
//! [`debug_invariants!`](crate::debug_invariants) macro turns a failed check
//! into a panic in debug builds or when the `check-invariants` feature is on.

use crate::complex_error::WitnessComplexError;

/// Validation of closure and filtration invariants.
pub trait DebugInvariants {
    /// Walk the structure and return the first violation found.
    fn validate_invariants(&self) -> Result<(), WitnessComplexError>;

    /// Panic on the first violation, when invariant checking is compiled in.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Run a fallible check and panic with `ctx` on error when invariant
/// checking is enabled. Compiles to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl DebugInvariants for Broken {
        fn validate_invariants(&self) -> Result<(), WitnessComplexError> {
            Err(WitnessComplexError::UnsortedSimplex(vec![2, 1]))
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "[invariants] debug_assert_invariants")]
    fn failed_check_panics_with_context() {
        Broken.debug_assert_invariants();
    }
}
