//! Collision Queries
//!
//! Which candidates does a body currently overlap?

use crate::core::aabb::Aabb;

/// Overlap query between one body and a candidate list.
pub trait CollisionIndex {
    /// Indices into `candidates` whose boxes overlap `subject`, ascending.
    fn overlapping(&self, subject: &Aabb, candidates: &[Aabb]) -> Vec<usize>;
}

/// Linear scan. The level holds a few dozen boxes at most.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlapIndex;

impl CollisionIndex for OverlapIndex {
    fn overlapping(&self, subject: &Aabb, candidates: &[Aabb]) -> Vec<usize> {
        candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| subject.overlaps(candidate))
            .map(|(index, _)| index)
            .collect()
    }
}
