//! The set of witnesses still contributing to the construction.
//!
//! A round visits every active witness once and records whether it produced
//! a simplex; [`ActiveWitnessSet::retain_active`] then builds the next
//! round's set from those flags. Visiting and removal are separate steps, so
//! no witness is dropped while the round is still iterating.

use super::active_witness::ActiveWitness;
use crate::spatial::LandmarkDistance;

#[derive(Clone, Debug)]
pub struct ActiveWitnessSet<I> {
    witnesses: Vec<ActiveWitness<I>>,
}

impl<I: Iterator<Item = LandmarkDistance>> ActiveWitnessSet<I> {
    /// One active witness per nearest-landmark query, in witness order.
    pub fn from_queries(queries: impl IntoIterator<Item = I>) -> Self {
        Self {
            witnesses: queries.into_iter().map(ActiveWitness::new).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.witnesses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.witnesses.is_empty()
    }

    /// Run `visit` on every active witness and collect whether each one
    /// contributed this round.
    pub fn visit<F>(&mut self, mut visit: F) -> Vec<bool>
    where
        F: FnMut(&mut ActiveWitness<I>) -> bool,
    {
        self.witnesses.iter_mut().map(|w| visit(w)).collect()
    }

    /// Keep exactly the witnesses flagged as contributing, preserving their
    /// order. Returns how many were dropped.
    ///
    /// # Panics
    /// Panics if `contributed` does not hold one flag per active witness.
    pub fn retain_active(&mut self, contributed: &[bool]) -> usize {
        assert_eq!(
            contributed.len(),
            self.witnesses.len(),
            "one contribution flag per active witness"
        );
        let before = self.witnesses.len();
        self.witnesses = std::mem::take(&mut self.witnesses)
            .into_iter()
            .zip(contributed)
            .filter_map(|(w, &keep)| keep.then_some(w))
            .collect();
        before - self.witnesses.len()
    }
}
