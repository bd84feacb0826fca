//! The per-iteration growth loop.
//!
//! One iteration performs, strictly in order:
//! 1. influence assignment — every active auxin source picks its
//!    nearest vein node and contributes a unit pull direction;
//! 2. growth — every influenced node extends one child along the mean
//!    pull direction, indexed immediately;
//! 3. pruning — sources within the kill distance of the (post-growth)
//!    tree are consumed and removed permanently;
//! 4. margin activation — the growth front advances and releases new
//!    sources from the candidate pool.
//!
//! The order matters: pruning must see the nodes created in the same
//! iteration, while influence assignment ran against the pre-growth
//! index. There is no maximum influence radius: a source keeps pulling
//! on its nearest node however far away it is, until it is consumed.

use crate::candidates::CandidatePool;
use crate::config::Config;
use crate::error::SimError;
use crate::influence::InfluenceBuffer;
use crate::source::SourceField;
use crate::spatial::SpatialIndex;
use crate::tree::VeinTree;
use crate::types::{NodeId, SourceId};
use glam::Vec2;
use std::sync::atomic::{AtomicBool, Ordering};

/// Owns the vein tree, both spatial indices and the source field, and
/// drives the iteration cycle.
#[derive(Debug)]
pub struct GrowthEngine {
    cfg: Config,
    tree: VeinTree,
    node_index: SpatialIndex,
    source_index: SpatialIndex,
    sources: SourceField,
    acc: InfluenceBuffer,
    iterations: usize,
}

impl GrowthEngine {
    /// Sets up a root vein node at the canvas origin and a source field
    /// over the given candidate pool. No sources are active yet; the
    /// first margin advance happens at the end of the first iteration.
    pub fn new(cfg: Config, pool: CandidatePool) -> Result<Self, SimError> {
        let origin = cfg.origin();
        let tree = VeinTree::new(origin);
        let mut node_index = SpatialIndex::new();
        node_index.insert(0, origin)?;

        let sources = SourceField::new(
            pool,
            origin,
            cfg.initial_leaf_radius,
            cfg.end_leaf_radius,
            cfg.delta_l,
        );

        Ok(Self {
            cfg,
            tree,
            node_index,
            source_index: SpatialIndex::new(),
            sources,
            acc: InfluenceBuffer::with_len(1),
            iterations: 0,
        })
    }

    pub fn tree(&self) -> &VeinTree {
        &self.tree
    }

    pub fn sources(&self) -> &SourceField {
        &self.sources
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Number of completed iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Activates a source at an arbitrary position, bypassing the
    /// margin rule. Meant for callers seeding a scene by hand.
    pub fn spawn_source(&mut self, pos: Vec2) -> Result<SourceId, SimError> {
        let (id, pos) = self.sources.spawn(pos);
        self.source_index.insert(id, pos)?;
        Ok(id)
    }

    /// Runs one full iteration and returns the ids of the nodes it
    /// created.
    pub fn step(&mut self) -> Result<Vec<NodeId>, SimError> {
        self.assign_influences()?;
        let new_ids = self.grow()?;
        self.prune()?;
        self.advance_margin()?;
        self.iterations += 1;
        Ok(new_ids)
    }

    /// Runs iterations up to the configured budget, checking the
    /// cancellation flag only at iteration boundaries. A cancelled run
    /// is a normal termination: the tree grown so far stands.
    pub fn run(&mut self, cancel: &AtomicBool) -> Result<(), SimError> {
        while self.iterations < self.cfg.niters {
            if cancel.load(Ordering::Relaxed) {
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// Phase 1: every active source contributes the unit vector from its
    /// nearest vein node toward itself.
    fn assign_influences(&mut self) -> Result<(), SimError> {
        self.acc.ensure_len(self.tree.len());
        for (_, p) in self.sources.iter() {
            let (i, _) = self.node_index.nearest(p)?;
            let q = self.tree.nodes[i].pos;
            let dir = (p - q)
                .try_normalize()
                .ok_or(SimError::DegenerateDirection { a: q, b: p })?;
            self.acc.add(i, dir);
        }
        Ok(())
    }

    /// Phase 2: one child per influenced node, along the mean pull
    /// direction, indexed immediately so pruning sees it.
    fn grow(&mut self) -> Result<Vec<NodeId>, SimError> {
        let influenced: Vec<NodeId> = self.acc.influenced_indices().collect();
        let mut new_ids = Vec::with_capacity(influenced.len());
        for i in influenced {
            let r = self.tree.nodes[i].pos + self.acc.avg_dir(i) * self.cfg.step;
            let id = self.tree.add_child(i, r)?;
            self.node_index.insert(id, r)?;
            new_ids.push(id);
        }
        Ok(new_ids)
    }

    /// Phase 3: consume sources within the kill distance of the tree.
    fn prune(&mut self) -> Result<(), SimError> {
        let mut consumed: Vec<(SourceId, Vec2)> = Vec::new();
        for (id, p) in self.sources.iter() {
            let (_, dist) = self.node_index.nearest(p)?;
            if dist < self.cfg.kill_distance {
                consumed.push((id, p));
            }
        }
        for (id, p) in consumed {
            self.sources.remove(id)?;
            self.source_index.remove(id, p)?;
        }
        Ok(())
    }

    /// Phase 4: advance the growth front and index the sources it
    /// released.
    fn advance_margin(&mut self) -> Result<(), SimError> {
        for (id, p) in self.sources.advance_margin() {
            self.source_index.insert(id, p)?;
        }
        Ok(())
    }
}
