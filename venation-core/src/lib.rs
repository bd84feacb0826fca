//! Core 2-D leaf venation growth simulation library.
//!
//! Grows a branching vein tree toward a field of auxin sources released
//! by an expanding leaf margin, then derives per-branch widths and
//! merges the tree into renderable polylines.
//!
//! Main components:
//! - [`candidates`] — pre-sampled candidate points for auxin sources.
//! - [`source`] — active auxin sources and margin activation.
//! - [`spatial`] — dynamic nearest-neighbor index over identified points.
//! - [`tree`] — vein-node arena with parent back-references.
//! - [`influence`] — per-node accumulated attraction directions.
//! - [`engine`] — the per-iteration growth/kill/activation loop.
//! - [`pipe`] — pipe-model width propagation over the finished tree.
//! - [`paths`] — width-grouped polyline merging for rendering.
//! - [`config`] — global configuration for the growth algorithm.
//! - [`error`] — fatal simulation error types.
//! - [`types`] — shared type aliases and IDs.

pub mod candidates;
pub mod config;
pub mod engine;
pub mod error;
pub mod influence;
pub mod paths;
pub mod pipe;
pub mod source;
pub mod spatial;
pub mod tree;
pub mod types;
