//! Per-witness cursor over its nearest landmarks.
//!
//! An [`ActiveWitness`] wraps the lazy sequence returned by a
//! [`NearestNeighborIndex`](crate::spatial::NearestNeighborIndex) query and
//! buffers every pair it has pulled. The face enumeration addresses the
//! sequence by position: it scans forward from a position, and a deeper
//! recursion level may revisit positions an outer level already pulled, so
//! pulled pairs are kept for the lifetime of the witness. The underlying
//! query is only advanced when a position past the buffer is requested.

use crate::spatial::LandmarkDistance;

#[derive(Clone, Debug)]
pub struct ActiveWitness<I> {
    source: I,
    pulled: Vec<LandmarkDistance>,
    exhausted: bool,
}

impl<I: Iterator<Item = LandmarkDistance>> ActiveWitness<I> {
    pub fn new(source: I) -> Self {
        Self {
            source,
            pulled: Vec::new(),
            exhausted: false,
        }
    }

    /// The `position`-th nearest landmark, or `None` past the last landmark.
    pub fn get(&mut self, position: usize) -> Option<LandmarkDistance> {
        while self.pulled.len() <= position && !self.exhausted {
            match self.source.next() {
                Some(next) => {
                    debug_assert!(
                        self.pulled
                            .last()
                            .is_none_or(|prev| prev.distance2 <= next.distance2),
                        "nearest-landmark sequence out of order at {next:?}"
                    );
                    self.pulled.push(next);
                }
                None => self.exhausted = true,
            }
        }
        self.pulled.get(position).copied()
    }

    /// Number of pairs pulled from the index so far.
    #[inline]
    pub fn pulled(&self) -> usize {
        self.pulled.len()
    }

    /// Whether the whole sequence has been pulled.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(d: &[f64]) -> impl Iterator<Item = LandmarkDistance> + '_ {
        d.iter()
            .enumerate()
            .map(|(id, &d2)| LandmarkDistance::new(id, d2))
    }

    #[test]
    fn pulls_only_what_is_asked() {
        let dists = [0.0, 1.0, 4.0, 9.0];
        let mut w = ActiveWitness::new(seq(&dists));
        assert_eq!(w.get(1), Some(LandmarkDistance::new(1, 1.0)));
        assert_eq!(w.pulled(), 2);
        assert!(!w.is_exhausted());
    }

    #[test]
    fn revisits_buffered_positions() {
        let dists = [0.0, 1.0, 4.0];
        let mut w = ActiveWitness::new(seq(&dists));
        assert_eq!(w.get(2).map(|p| p.id), Some(2));
        assert_eq!(w.get(0).map(|p| p.id), Some(0));
        assert_eq!(w.pulled(), 3);
    }

    #[test]
    fn past_the_end_is_none() {
        let dists = [0.5];
        let mut w = ActiveWitness::new(seq(&dists));
        assert_eq!(w.get(3), None);
        assert!(w.is_exhausted());
        assert_eq!(w.get(0).map(|p| p.distance2), Some(0.5));
    }
}
