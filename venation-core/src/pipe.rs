//! Pipe-model width propagation.
//!
//! Branch thickness follows a power-law conservation at every junction:
//! `width(n)^p` equals the sum of `width(c)^p` over the children `c`,
//! with every leaf fixed at width 1. Thicker trunks therefore carry
//! more downstream leaves.

use crate::tree::VeinTree;

/// Rounds to one decimal place; widths are grouped by this rounding
/// when merging render paths.
pub fn round1(w: f32) -> f32 {
    (w * 10.0).round() / 10.0
}

/// Computes one width per vein node, rounded to one decimal place.
///
/// Single reverse pass over ids: children have strictly higher ids than
/// their parent, so every child is visited first and has pushed its
/// `width^p` into the parent's accumulator by the time the parent is
/// visited. A node whose accumulator is still zero is a leaf.
pub fn vein_widths(tree: &VeinTree, width_pow: f32) -> Vec<f32> {
    let n = tree.len();
    let mut acc = vec![0.0f32; n];
    let mut widths = vec![0.0f32; n];

    for i in (0..n).rev() {
        let w = if acc[i] == 0.0 {
            1.0
        } else {
            acc[i].powf(1.0 / width_pow)
        };
        widths[i] = w;
        if let Some(j) = tree.nodes[i].parent {
            acc[j] += w.powf(width_pow);
        }
    }

    for w in &mut widths {
        *w = round1(*w);
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn every_leaf_has_width_one_and_a_chain_stays_uniform() {
        // A straight chain: each internal node carries exactly one leaf.
        let mut tree = VeinTree::new(Vec2::ZERO);
        let mut tip = 0;
        for k in 1..=5 {
            tip = tree.add_child(tip, Vec2::new(k as f32, 0.0)).unwrap();
        }

        let widths = vein_widths(&tree, 3.0);
        assert_eq!(widths, vec![1.0; 6]);
    }

    #[test]
    fn two_leaves_under_the_root_give_sqrt_two() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        tree.add_child(0, Vec2::new(1.0, 0.0)).unwrap();
        tree.add_child(0, Vec2::new(0.0, 1.0)).unwrap();

        let widths = vein_widths(&tree, 2.0);
        assert_eq!(widths[1], 1.0);
        assert_eq!(widths[2], 1.0);
        // width(0) = (1^2 + 1^2)^(1/2) = sqrt(2), rounded to 1.4.
        assert_eq!(widths[0], 1.4);
    }

    #[test]
    fn conservation_holds_through_a_junction() {
        // Root -> fork at node 1 -> three leaves.
        let mut tree = VeinTree::new(Vec2::ZERO);
        let fork = tree.add_child(0, Vec2::new(1.0, 0.0)).unwrap();
        for k in 0..3 {
            tree.add_child(fork, Vec2::new(2.0, k as f32)).unwrap();
        }

        let p = 3.0;
        let widths = vein_widths(&tree, p);

        // fork gathers three unit leaves: 3^(1/3) ~ 1.442 -> 1.4; the
        // root inherits the fork's (unrounded) flow unchanged.
        assert_eq!(widths[fork], 1.4);
        assert_eq!(widths[0], 1.4);

        // Conservation within rounding tolerance at the fork.
        let children_flow: f32 = 3.0 * 1.0f32.powf(p);
        assert!((widths[fork].powf(p) - children_flow).abs() < 0.3);
    }
}
