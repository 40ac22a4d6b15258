/// Returned by queries that need at least one node, such as asking for the
/// leftmost key of a tree that has no root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the tree is empty")]
pub struct EmptyTreeError;
