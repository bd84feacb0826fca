use glam::Vec2;

/// Tunable parameters for a venation run.
///
/// All values are external inputs; nothing here is derived internally.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Canvas width in drawing units.
    pub width: f32,
    /// Canvas height in drawing units.
    pub height: f32,
    /// Minimum pairwise separation of candidate auxin sources.
    pub birth_distance: f32,
    /// A source closer than this to any vein node is consumed.
    pub kill_distance: f32,
    /// Growth step length `d` per influenced node per iteration.
    pub step: f32,
    /// Exponent `p` of the pipe-model width conservation rule.
    pub width_pow: f32,
    /// Margin radius at iteration zero.
    pub initial_leaf_radius: f32,
    /// Margin radius cap.
    pub end_leaf_radius: f32,
    /// Margin radius increment per iteration.
    pub delta_l: f32,
    /// Candidate density: the pool throws `width * height * rho + 1` darts.
    pub rho: f32,
    /// Iteration budget for [`crate::engine::GrowthEngine::run`].
    pub niters: usize,
}

impl Config {
    /// Canvas center; the root vein node starts here and the margin
    /// radius is measured from here.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(0.5 * self.width, 0.5 * self.height)
    }

    /// Number of darts thrown when generating the candidate pool.
    pub fn ndarts(&self) -> usize {
        (self.width * self.height * self.rho) as usize + 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 3200.0,
            height: 3200.0,
            birth_distance: 10.0,
            kill_distance: 20.0,
            step: 1.0,
            width_pow: 3.0,
            initial_leaf_radius: 270.0,
            end_leaf_radius: 1600.0,
            delta_l: 8.0,
            rho: 600e-6,
            niters: 1000,
        }
    }
}
