//! Width-grouped polyline merging.
//!
//! The finished tree is emitted as a minimal set of polylines, each
//! drawn at one uniform stroke width, visually equivalent to drawing
//! every parent-child segment on its own. Nodes are grouped by rounded
//! width; within a group, every run of same-width nodes is walked once
//! from its lowest member ("local leaf") up toward the root, ending at
//! a width transition, at the root, or at a node another walk of the
//! same group already covered.

use crate::tree::VeinTree;
use crate::types::NodeId;
use glam::Vec2;
use std::collections::{BTreeMap, HashSet};

/// One stroke primitive: a connected point sequence drawn at a single
/// width.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub width: f32,
    pub points: Vec<Vec2>,
}

/// Grouping key for a rounded width (tenths, exact in integer space).
fn width_key(w: f32) -> i64 {
    (w * 10.0).round() as i64
}

/// Merges the tree into width-grouped polylines.
///
/// `widths` holds one rounded width per node id, as produced by
/// [`crate::pipe::vein_widths`].
pub fn merge_paths(tree: &VeinTree, widths: &[f32]) -> Vec<Polyline> {
    // Partition node ids by rounded width; BTreeMap keeps the group
    // order (and therefore the output order) deterministic.
    let mut groups: BTreeMap<i64, Vec<NodeId>> = BTreeMap::new();
    for (id, &w) in widths.iter().enumerate() {
        groups.entry(width_key(w)).or_default().push(id);
    }

    let mut out = Vec::new();
    for (&key, members) in &groups {
        // Ids that parent some member of this group; the rest of the
        // group are its local leaves, where upward walks start.
        let parents_of_members: HashSet<NodeId> =
            members.iter().filter_map(|&id| tree.parent_of(id)).collect();

        let mut reached: HashSet<NodeId> = HashSet::new();
        for &leaf in members.iter().filter(|id| !parents_of_members.contains(*id)) {
            let mut points = vec![tree.nodes[leaf].pos];
            let mut i = leaf;
            loop {
                i = match tree.parent_of(i) {
                    None => break,
                    Some(j) => j,
                };
                points.push(tree.nodes[i].pos);
                // A node already covered by a sibling walk, or one of a
                // different width, ends the polyline but still anchors
                // its final segment.
                if reached.contains(&i) {
                    break;
                }
                if width_key(widths[i]) != key {
                    break;
                }
                reached.insert(i);
            }
            out.push(Polyline {
                width: key as f32 / 10.0,
                points,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Flattens polylines into (from, to) segments keyed by integer
    // coordinates; fixtures only use integer positions.
    fn segments(polylines: &[Polyline]) -> Vec<((i32, i32), (i32, i32))> {
        let as_key = |p: Vec2| (p.x as i32, p.y as i32);
        let mut segs = Vec::new();
        for line in polylines {
            for pair in line.points.windows(2) {
                segs.push((as_key(pair[0]), as_key(pair[1])));
            }
        }
        segs
    }

    #[test]
    fn uniform_chain_collapses_to_one_polyline() {
        let mut tree = VeinTree::new(Vec2::ZERO);
        let mut tip = 0;
        for k in 1..=3 {
            tip = tree.add_child(tip, Vec2::new(k as f32, 0.0)).unwrap();
        }
        let widths = vec![1.0; 4];

        let lines = merge_paths(&tree, &widths);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width, 1.0);
        // Walks from the tip down to the root.
        assert_eq!(
            segments(&lines),
            vec![((3, 0), (2, 0)), ((2, 0), (1, 0)), ((1, 0), (0, 0))]
        );
    }

    #[test]
    fn shared_trunk_is_emitted_once() {
        // A Y: two leaves join at node 1, which hangs off the root.
        let mut tree = VeinTree::new(Vec2::ZERO);
        let fork = tree.add_child(0, Vec2::new(1.0, 0.0)).unwrap();
        tree.add_child(fork, Vec2::new(2.0, 1.0)).unwrap();
        tree.add_child(fork, Vec2::new(2.0, -1.0)).unwrap();
        let widths = vec![1.0; 4];

        let lines = merge_paths(&tree, &widths);
        assert_eq!(lines.len(), 2);

        // The first walk claims the trunk (1 -> 0); the second stops at
        // the fork after anchoring its own segment there.
        let segs = segments(&lines);
        assert_eq!(
            segs,
            vec![
                ((2, 1), (1, 0)),
                ((1, 0), (0, 0)),
                ((2, -1), (1, 0)),
            ]
        );
        // Each tree edge appears exactly once.
        assert_eq!(segs.len(), tree.edges().count());
    }

    #[test]
    fn width_transition_splits_the_walk_between_groups() {
        // Chain 0-1 at width 1.4, leaves 2 and 3 under node 1 at width 1.
        let mut tree = VeinTree::new(Vec2::ZERO);
        let mid = tree.add_child(0, Vec2::new(1.0, 0.0)).unwrap();
        tree.add_child(mid, Vec2::new(2.0, 1.0)).unwrap();
        tree.add_child(mid, Vec2::new(2.0, -1.0)).unwrap();
        let widths = vec![1.4, 1.4, 1.0, 1.0];

        let lines = merge_paths(&tree, &widths);

        let thin: Vec<&Polyline> = lines.iter().filter(|l| l.width == 1.0).collect();
        let thick: Vec<&Polyline> = lines.iter().filter(|l| l.width == 1.4).collect();
        assert_eq!(thin.len(), 2);
        assert_eq!(thick.len(), 1);

        // Thin walks anchor on the transition node but do not continue
        // past it; the thick group re-starts there.
        for line in thin {
            assert_eq!(line.points.len(), 2);
            assert_eq!(*line.points.last().unwrap(), Vec2::new(1.0, 0.0));
        }
        assert_eq!(
            thick[0].points,
            vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0)]
        );
    }

    #[test]
    fn per_group_edges_are_covered_without_duplication() {
        // A bushier fixture: root with two branches, one forked.
        let mut tree = VeinTree::new(Vec2::ZERO);
        let a = tree.add_child(0, Vec2::new(1.0, 0.0)).unwrap();
        let b = tree.add_child(a, Vec2::new(2.0, 0.0)).unwrap();
        tree.add_child(b, Vec2::new(3.0, 1.0)).unwrap();
        tree.add_child(b, Vec2::new(3.0, -1.0)).unwrap();
        let c = tree.add_child(0, Vec2::new(-1.0, 0.0)).unwrap();
        tree.add_child(c, Vec2::new(-2.0, 0.0)).unwrap();

        let widths = crate::pipe::vein_widths(&tree, 2.0);
        let lines = merge_paths(&tree, &widths);

        // Re-split into edges: every (child, parent) edge of the tree
        // appears exactly once across all groups.
        let mut segs = segments(&lines);
        segs.sort_unstable();
        segs.dedup();
        assert_eq!(segs.len(), tree.edges().count());
    }
}
