//! Dynamic nearest-neighbor index over identified 2-D points.
//!
//! The growth loop keeps two independent instances: one over live vein
//! nodes and one over live auxin sources. Only the insert / remove /
//! nearest contract matters to the callers; the backing structure is an
//! R-tree.

use crate::error::SimError;
use glam::Vec2;
use rstar::RTree;
use rstar::primitives::GeomWithData;
use std::collections::HashSet;

type Entry = GeomWithData<[f32; 2], usize>;

/// A mutable set of `(id, position)` pairs with 1-nearest-neighbor
/// queries.
///
/// Contract:
/// - ids are unique; inserting a present id or removing an absent one
///   is a contract violation and fails;
/// - removal must supply the exact coordinates used at insertion;
/// - `nearest` on an empty index fails;
/// - equidistant candidates tie-break toward the lowest id, so query
///   results are deterministic for a given content.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    rtree: RTree<Entry>,
    ids: HashSet<usize>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// Adds a point under a fresh id.
    ///
    /// ### Errors
    /// [`SimError::DuplicateId`] if `id` is already present.
    pub fn insert(&mut self, id: usize, pos: Vec2) -> Result<(), SimError> {
        if !self.ids.insert(id) {
            return Err(SimError::DuplicateId { id });
        }
        self.rtree.insert(Entry::new([pos.x, pos.y], id));
        Ok(())
    }

    /// Removes a previously inserted point, identified by id and by the
    /// exact coordinates it was inserted with.
    ///
    /// ### Errors
    /// [`SimError::MissingEntry`] if no such entry exists.
    pub fn remove(&mut self, id: usize, pos: Vec2) -> Result<(), SimError> {
        if self
            .rtree
            .remove(&Entry::new([pos.x, pos.y], id))
            .is_none()
        {
            return Err(SimError::MissingEntry { id });
        }
        self.ids.remove(&id);
        Ok(())
    }

    /// Returns the id of the indexed point closest to `pos` (Euclidean
    /// distance), together with that distance. Exact ties resolve to
    /// the lowest id.
    ///
    /// ### Errors
    /// [`SimError::EmptyIndex`] if nothing has been inserted.
    pub fn nearest(&self, pos: Vec2) -> Result<(usize, f32), SimError> {
        let mut iter = self.rtree.nearest_neighbor_iter_with_distance_2(&[pos.x, pos.y]);
        let (first, best_d2) = iter.next().ok_or(SimError::EmptyIndex)?;

        // The iterator yields entries in ascending distance; scan the
        // leading run of exact ties for the lowest id.
        let mut best = first.data;
        for (entry, d2) in iter {
            if d2 > best_d2 {
                break;
            }
            best = best.min(entry.data);
        }
        Ok((best, best_d2.sqrt()))
    }
}
