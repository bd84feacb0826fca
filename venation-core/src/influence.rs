use crate::types::NodeId;
use glam::Vec2;

/// Per-node accumulator for attraction directions.
///
/// During influence assignment each active auxin source adds the unit
/// vector from its nearest vein node toward itself into this buffer;
/// growth then reads back the mean direction per node. `dir[i]` and
/// `count[i]` belong to node `i`.
#[derive(Debug)]
pub struct InfluenceBuffer {
    dir: Vec<Vec2>,
    count: Vec<u32>,
}

impl InfluenceBuffer {
    pub fn with_len(len: usize) -> Self {
        Self {
            dir: vec![Vec2::ZERO; len],
            count: vec![0; len],
        }
    }

    /// Resizes the buffer to `len` entries and clears every entry, even
    /// when the length was already correct.
    pub fn ensure_len(&mut self, len: usize) {
        if self.dir.len() != len {
            self.dir.resize(len, Vec2::ZERO);
            self.count.resize(len, 0);
        }
        self.clear();
    }

    pub fn clear(&mut self) {
        for v in &mut self.dir {
            *v = Vec2::ZERO;
        }
        for c in &mut self.count {
            *c = 0;
        }
    }

    /// Adds one directional contribution for node `id`.
    #[inline]
    pub fn add(&mut self, id: NodeId, dir: Vec2) {
        self.dir[id] += dir;
        self.count[id] += 1;
    }

    /// Mean of the accumulated directions for node `id`, or zero if the
    /// node received none. The mean of unit vectors is at most unit
    /// length and is deliberately NOT renormalized: opposing attractors
    /// shorten the effective growth step.
    #[inline]
    pub fn avg_dir(&self, id: NodeId) -> Vec2 {
        let c = self.count[id];
        if c == 0 { Vec2::ZERO } else { self.dir[id] / (c as f32) }
    }

    #[inline]
    pub fn is_influenced(&self, id: NodeId) -> bool {
        self.count[id] > 0
    }

    /// Node ids with at least one contribution, in ascending order.
    ///
    /// The ascending order is what makes child-id assignment during
    /// growth deterministic.
    pub fn influenced_indices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.count
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| if c > 0 { Some(i) } else { None })
    }
}
