use std::process::ExitStatus;

/// A rejected [`AvlTree`](crate::AvlTree) mutation.
///
/// Every variant is returned before the tree is modified, so the tree is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError<T> {
    /// The value passed to `add()` or `remove()` was [`None`].
    #[error("value is null")]
    NullValue,

    /// `add()` was called with a value that already exists in the tree.
    #[error("node {0} is already in the tree")]
    DuplicateValue(T),

    /// `remove()` was called with a value that does not exist in the tree.
    #[error("node {0} is not in the tree")]
    NotFound(T),
}

/// Errors rendering a tree to an image with Graphviz.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("failed to spawn graphviz `dot`: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to stream graph to graphviz: {0}")]
    Io(#[from] std::io::Error),

    #[error("graphviz exited with {0}")]
    Render(ExitStatus),
}
