use crate::candidates::CandidatePool;
use crate::error::SimError;
use crate::types::SourceId;
use glam::Vec2;
use std::collections::BTreeMap;

/// Live auxin sources plus the margin-expansion rule that releases new
/// ones from the candidate pool.
///
/// A source is active from the iteration the growth front crosses its
/// candidate point until a vein node grows within the kill distance;
/// removal is permanent and ids are never reused. Active sources are
/// kept in a `BTreeMap` so iteration runs in ascending id order, which
/// keeps floating-point influence sums reproducible across runs.
#[derive(Debug)]
pub struct SourceField {
    pool: CandidatePool,
    active: BTreeMap<SourceId, Vec2>,
    origin: Vec2,
    radius: f32,
    end_radius: f32,
    delta_l: f32,
    next_id: SourceId,
}

impl SourceField {
    pub fn new(
        pool: CandidatePool,
        origin: Vec2,
        initial_radius: f32,
        end_radius: f32,
        delta_l: f32,
    ) -> Self {
        Self {
            pool,
            active: BTreeMap::new(),
            origin,
            radius: initial_radius,
            end_radius,
            delta_l,
            next_id: 0,
        }
    }

    /// Number of currently active sources.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Current margin radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Active `(id, position)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceId, Vec2)> + '_ {
        self.active.iter().map(|(&id, &p)| (id, p))
    }

    /// Position of an active source, if it is still alive.
    pub fn position(&self, id: SourceId) -> Option<Vec2> {
        self.active.get(&id).copied()
    }

    /// Activates a source at an arbitrary position, outside the margin
    /// rule. Returns the assigned id.
    pub fn spawn(&mut self, pos: Vec2) -> (SourceId, Vec2) {
        let id = self.next_id;
        self.next_id += 1;
        self.active.insert(id, pos);
        (id, pos)
    }

    /// Permanently removes a consumed source.
    ///
    /// ### Errors
    /// [`SimError::MissingEntry`] if the source is not active.
    pub fn remove(&mut self, id: SourceId) -> Result<Vec2, SimError> {
        self.active.remove(&id).ok_or(SimError::MissingEntry { id })
    }

    /// Grows the margin radius by `delta_l` (capped at the end radius)
    /// and activates every candidate whose distance from the origin
    /// lies in the half-open interval `(previous_radius, new_radius]`.
    ///
    /// The interval is half-open and the radius is monotone, so each
    /// candidate fires at most once; candidates at or inside the
    /// initial radius are never crossed and never fire.
    ///
    /// Returns the newly activated sources so the caller can index them.
    pub fn advance_margin(&mut self) -> Vec<(SourceId, Vec2)> {
        let previous = self.radius;
        self.radius = (self.radius + self.delta_l).min(self.end_radius);

        let mut born = Vec::new();
        for &p in &self.pool.points {
            let dist = p.distance(self.origin);
            if dist > previous && dist <= self.radius {
                let id = self.next_id;
                self.next_id += 1;
                self.active.insert(id, p);
                born.push((id, p));
            }
        }
        born
    }
}
