use glam::Vec2;
use rand::Rng;

/// Pre-sampled candidate points for auxin sources.
///
/// Every candidate is a fixed position on the canvas that may later be
/// activated by the expanding margin; the pool itself never changes
/// after construction. The only guaranteed property is the pairwise
/// minimum separation — the final point count depends on how many darts
/// were rejected.
#[derive(Debug)]
pub struct CandidatePool {
    pub points: Vec<Vec2>,
}

impl CandidatePool {
    pub fn from_positions(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Empty pool, for runs that seed sources by hand.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Dart throwing: sample `ndarts` uniform points over the
    /// `width` x `height` rectangle, keeping each one only if it is at
    /// least `min_dist` away from every point kept so far.
    pub fn generate(
        width: f32,
        height: f32,
        min_dist: f32,
        ndarts: usize,
        rng: &mut impl Rng,
    ) -> Self {
        let mut points: Vec<Vec2> = Vec::new();
        for _ in 0..ndarts {
            let p = Vec2::new(
                rng.random_range(0.0..width),
                rng.random_range(0.0..height),
            );
            if points.iter().all(|q| p.distance(*q) >= min_dist) {
                points.push(p);
            }
        }
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_points_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = CandidatePool::generate(200.0, 100.0, 5.0, 500, &mut rng);

        assert!(!pool.is_empty());
        for p in &pool.points {
            assert!(p.x >= 0.0 && p.x < 200.0);
            assert!(p.y >= 0.0 && p.y < 100.0);
        }
    }

    #[test]
    fn generated_points_keep_minimum_separation() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = CandidatePool::generate(100.0, 100.0, 10.0, 1000, &mut rng);

        for (i, p) in pool.points.iter().enumerate() {
            for q in &pool.points[i + 1..] {
                assert!(
                    p.distance(*q) >= 10.0,
                    "candidates {p} and {q} are closer than the birth distance"
                );
            }
        }
    }
}
