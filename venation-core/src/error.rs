//! Error types for venation-core.
//!
//! Every variant is a data-invariant failure: none of them is expected
//! during a correct run, and all of them abort the simulation rather
//! than being retried, since continuing would silently corrupt the
//! tree. Cancellation is not an error and does not appear here.

use glam::Vec2;
use thiserror::Error;

/// Fatal simulation failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    /// A spatial index was asked to insert an id it already holds.
    #[error("spatial index already contains id {id}")]
    DuplicateId {
        /// The offending id.
        id: usize,
    },

    /// A removal named an id that is not present (or gave coordinates
    /// that do not match the ones used at insertion).
    #[error("spatial index has no entry for id {id}")]
    MissingEntry {
        /// The absent id.
        id: usize,
    },

    /// A nearest-neighbor query ran against an empty index.
    #[error("nearest-neighbor query on an empty spatial index")]
    EmptyIndex,

    /// A child node named a parent id that does not exist yet.
    #[error("parent id {parent} is not an existing node (next id is {next})")]
    BadParent {
        /// The parent id that was requested.
        parent: usize,
        /// The id that would have been assigned to the child.
        next: usize,
    },

    /// Two coincident points produced a zero-length growth direction.
    #[error("degenerate direction between coincident points {a} and {b}")]
    DegenerateDirection {
        /// The vein-node position.
        a: Vec2,
        /// The auxin-source position.
        b: Vec2,
    },
}
