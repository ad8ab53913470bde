//! A self-balancing [AVL] binary search tree of unique values.
//!
//! The height of the two child subtrees of every node differs by at most one,
//! restored by rotations on the unwind path of every [`AvlTree::add()`] and
//! [`AvlTree::remove()`].
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut t = AvlTree::<i64>::default();
//! for v in [3, 2, 1] {
//!     t.add(v).unwrap();
//! }
//!
//! assert!(t.contains(&1));
//! assert_eq!(t.render(false), "  2\n / \\\n1   3");
//! ```
//!
//! Trees can be drawn in a terminal with [`AvlTree::print()`], or exported to
//! [Graphviz] with [`AvlTree::to_dot()`] and [`AvlTree::graph()`].
//!
//! [AVL]: https://en.wikipedia.org/wiki/AVL_tree
//! [Graphviz]: https://graphviz.org/

mod error;
mod node;
mod tree;
mod view;

pub mod display;
pub mod dot;

pub use error::*;
pub use node::{Node, Rotations};
pub use tree::*;
pub use view::*;

#[cfg(test)]
mod test_utils;

