/// Identifier for a node in a [`crate::tree::VeinTree`].
///
/// This is an index into `VeinTree::nodes`, assigned in strictly
/// increasing creation order, and is only meaningful within the
/// lifetime of a given `VeinTree` instance.
pub type NodeId = usize;

/// Identifier for an auxin source in a [`crate::source::SourceField`].
///
/// Assigned in strictly increasing activation order and never reused,
/// even after the source has been consumed.
pub type SourceId = usize;
