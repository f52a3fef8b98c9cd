//! Face enumeration for one witness at one target dimension.
//!
//! The search walks the witness's nearest-landmark sequence in increasing
//! distance order and builds candidate simplices as sorted prefixes. Two
//! rules prune it:
//!
//! - **distance cutoff**: a landmark at squared distance `d` is admissible
//!   while `d - alpha2 <= norelax_dist2`. Distances are sorted, so the scan
//!   at one level stops at the first inadmissible landmark.
//! - **face closure**: a prefix is only extended if it is already a simplex
//!   of the complex, and a full candidate is only inserted if all of its
//!   facets are present.
//!
//! `norelax_dist2` starts at `+inf`. Whenever the scan moves past a landmark
//! without fixing it in the prefix, and that landmark lies within the current
//! bound, the bound tightens to its distance: every simplex chosen from later
//! landmarks skips it, so its distance is what the witness can certainly
//! reach. A leaf landmark beyond the bound contributes its excess
//! `d - norelax_dist2` to the filtration value.

use super::active_witness::ActiveWitness;
use crate::spatial::LandmarkDistance;
use crate::topology::complex::SimplicialComplexForWitness;
use crate::topology::simplex::{Filtration, LandmarkId, facets_of};
use std::ops::{Deref, DerefMut};

/// The landmarks fixed on the current search path, kept sorted.
#[derive(Debug, Default)]
pub(crate) struct Prefix {
    /// Vertices sorted by id, ready for complex lookups.
    sorted: Vec<LandmarkId>,
    /// Vertices in the order they were pushed.
    stack: Vec<LandmarkId>,
}

impl Prefix {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            sorted: Vec::with_capacity(capacity),
            stack: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn vertices(&self) -> &[LandmarkId] {
        &self.sorted
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push `id` for the lifetime of the returned guard.
    pub(crate) fn extend(&mut self, id: LandmarkId) -> PrefixGuard<'_> {
        let at = self.sorted.partition_point(|&v| v < id);
        self.sorted.insert(at, id);
        self.stack.push(id);
        PrefixGuard { prefix: self }
    }

    fn pop(&mut self) {
        let id = self
            .stack
            .pop()
            .expect("prefix popped more often than pushed");
        let at = self.sorted.partition_point(|&v| v < id);
        assert_eq!(self.sorted.get(at), Some(&id), "prefix lost vertex {id}");
        self.sorted.remove(at);
    }
}

/// Removes the vertex it pushed when dropped, on every exit path.
pub(crate) struct PrefixGuard<'p> {
    prefix: &'p mut Prefix,
}

impl Deref for PrefixGuard<'_> {
    type Target = Prefix;

    fn deref(&self) -> &Prefix {
        self.prefix
    }
}

impl DerefMut for PrefixGuard<'_> {
    fn deref_mut(&mut self) -> &mut Prefix {
        self.prefix
    }
}

impl Drop for PrefixGuard<'_> {
    fn drop(&mut self) {
        self.prefix.pop();
    }
}

/// Inserts the simplices one witness certifies into a complex.
pub(crate) struct FaceEnumeration<'c, C> {
    complex: &'c mut C,
    alpha2: f64,
    inserted: usize,
}

impl<'c, C: SimplicialComplexForWitness> FaceEnumeration<'c, C> {
    pub(crate) fn new(complex: &'c mut C, alpha2: f64) -> Self {
        Self {
            complex,
            alpha2,
            inserted: 0,
        }
    }

    /// Simplices newly inserted by this enumeration.
    #[inline]
    pub(crate) fn inserted(&self) -> usize {
        self.inserted
    }

    /// Insert every `dim`-simplex `witness` certifies. Returns whether the
    /// witness certified at least one `dim`-simplex whose facets are all in
    /// the complex, i.e. whether it stays active.
    pub(crate) fn add_all_faces<I>(&mut self, dim: usize, witness: &mut ActiveWitness<I>) -> bool
    where
        I: Iterator<Item = LandmarkDistance>,
    {
        if dim == 0 {
            return false;
        }
        let mut prefix = Prefix::with_capacity(dim + 1);
        let active = self.add_all_faces_of_dimension(dim, f64::INFINITY, 0, witness, &mut prefix);
        debug_assert!(prefix.is_empty(), "prefix not restored after enumeration");
        active
    }

    /// `dim` is the number of landmarks still to add after the next one;
    /// the scan starts at `position` in the witness's sequence.
    fn add_all_faces_of_dimension<I>(
        &mut self,
        dim: usize,
        mut norelax_dist2: f64,
        position: usize,
        witness: &mut ActiveWitness<I>,
        prefix: &mut Prefix,
    ) -> bool
    where
        I: Iterator<Item = LandmarkDistance>,
    {
        let mut will_be_active = false;
        let mut position = position;
        while let Some(landmark) = witness.get(position) {
            if landmark.distance2 - self.alpha2 > norelax_dist2 {
                break;
            }
            {
                let mut extended = prefix.extend(landmark.id);
                if dim > 0 {
                    if self.complex.find(extended.vertices()).is_some() {
                        will_be_active |= self.add_all_faces_of_dimension(
                            dim - 1,
                            norelax_dist2,
                            position + 1,
                            witness,
                            &mut extended,
                        );
                    }
                } else {
                    let excess = if landmark.distance2 > norelax_dist2 {
                        landmark.distance2 - norelax_dist2
                    } else {
                        0.0
                    };
                    if let Some(filtration) = self.facet_filtration(extended.vertices(), excess) {
                        will_be_active = true;
                        if self.complex.insert_simplex(extended.vertices(), filtration) {
                            self.inserted += 1;
                        }
                    }
                }
            }
            // Moving on without `landmark`: it becomes the certain bound.
            if landmark.distance2 <= norelax_dist2 {
                norelax_dist2 = landmark.distance2;
            }
            position += 1;
        }
        will_be_active
    }

    /// `None` if a facet of `simplex` is missing, otherwise the largest of
    /// `excess` and the facets' filtration values.
    fn facet_filtration(&self, simplex: &[LandmarkId], excess: Filtration) -> Option<Filtration> {
        let mut filtration = excess;
        for facet in facets_of(simplex) {
            let handle = self.complex.find(&facet)?;
            filtration = filtration.max(self.complex.filtration(handle));
        }
        Some(filtration)
    }
}
