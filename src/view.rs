use std::fmt::Display;

use crate::node::Node;

/// A read-only projection of a binary tree node, consumed by the
/// [`display`](crate::display) and [`dot`](crate::dot) renderers.
///
/// Renderers only ever see a label and the two (optional) children, leaving
/// them independent of the node's field layout.
pub trait NodeView {
    /// The text drawn for this node.
    fn label(&self) -> String;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

impl<T> NodeView for Node<T>
where
    T: Display,
{
    fn label(&self) -> String {
        self.value().to_string()
    }

    fn left(&self) -> Option<&Self> {
        Node::left(self)
    }

    fn right(&self) -> Option<&Self> {
        Node::right(self)
    }
}
