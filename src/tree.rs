use std::{
    fmt::{Debug, Display},
    path::Path,
};

use tracing::{trace, warn};

use crate::{
    display,
    dot,
    error::{GraphError, TreeError},
    node::{self, Node, Rotations},
};

/// A self-balancing AVL binary search tree of unique values.
///
/// Mutations are rejected (returning a [`TreeError`]) without modifying the
/// tree when the value is [`None`], is already present (for
/// [`AvlTree::add()`]), or is absent (for [`AvlTree::remove()`]).
///
/// Membership checks ([`AvlTree::contains()`], and the pre-checks of both
/// mutations) visit every node, and are therefore `O(n)`.
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Option<Box<Node<T>>>,
    rotations: Rotations,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            rotations: Rotations::default(),
        }
    }
}

impl<T> AvlTree<T> {
    /// The root node of the tree, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of rotations performed to keep this tree balanced since it
    /// was created.
    pub fn rotations(&self) -> Rotations {
        self.rotations
    }

    /// Returns true if `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        node::contains(self.root(), value)
    }
}

impl<T> AvlTree<T>
where
    T: Ord + Debug,
{
    /// Insert `value` into the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NullValue`] if `value` is [`None`], and
    /// [`TreeError::DuplicateValue`] if the tree already contains it.
    pub fn add(&mut self, value: impl Into<Option<T>>) -> Result<(), TreeError<T>> {
        let Some(value) = value.into() else {
            warn!("cannot add null value");
            return Err(TreeError::NullValue);
        };

        if self.contains(&value) {
            warn!(?value, "node is already in the tree");
            return Err(TreeError::DuplicateValue(value));
        }

        trace!(?value, "adding node");
        node::insert(&mut self.root, value, &mut self.rotations);

        Ok(())
    }

    /// Remove `value` from the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NullValue`] if `value` is [`None`], and
    /// [`TreeError::NotFound`] if the tree does not contain it.
    pub fn remove(&mut self, value: impl Into<Option<T>>) -> Result<(), TreeError<T>>
    where
        T: Clone,
    {
        let Some(value) = value.into() else {
            warn!("cannot remove null value");
            return Err(TreeError::NullValue);
        };

        if !self.contains(&value) {
            warn!(?value, "node is not in the tree");
            return Err(TreeError::NotFound(value));
        }

        trace!(?value, "removing node");
        let removed = node::remove(&mut self.root, &value, &mut self.rotations);

        // Invariant: the BST search path reaches every value found by the
        // exhaustive membership scan.
        debug_assert!(removed);

        Ok(())
    }
}

impl<T> AvlTree<T>
where
    T: Display,
{
    /// Render the tree as ASCII art, bottom-up if `inverted` is true.
    ///
    /// An empty tree renders as an empty string.
    pub fn render(&self, inverted: bool) -> String {
        self.root()
            .map(|v| display::render(v, inverted))
            .unwrap_or_default()
    }

    /// Print the tree to stdout (see [`AvlTree::render()`]), followed by a
    /// blank line.
    pub fn print(&self, inverted: bool) {
        if let Some(root) = self.root() {
            println!("{}", display::render(root, inverted));
        }
        println!();
    }

    /// Render the tree as a Graphviz DOT digraph.
    pub fn to_dot(&self) -> String {
        dot::to_dot(self.root())
    }

    /// Render the tree to a PNG image at `path` using the Graphviz `dot`
    /// binary.
    pub fn graph(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        dot::render_png(&self.to_dot(), path.as_ref())
    }
}
