use std::fmt::Debug;

use proptest::prelude::*;

use crate::{node::Node, AvlTree};

/// The (small) domain of values generated for tests, encouraging multiple
/// operations to act on the same value.
pub(crate) const VALUE_MAX: i64 = 50;

#[derive(Debug, Clone)]
pub(crate) enum Op {
    Add(Option<i64>),
    Remove(Option<i64>),
    Contains(i64),
}

pub(crate) fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => proptest::option::weighted(0.95, 0..VALUE_MAX).prop_map(Op::Add),
        2 => proptest::option::weighted(0.95, 0..VALUE_MAX).prop_map(Op::Remove),
        1 => (0..VALUE_MAX).prop_map(Op::Contains),
    ]
}

/// Return the values of `t` in an in-order traversal.
pub(crate) fn in_order<T>(t: &AvlTree<T>) -> Vec<&T> {
    let mut out = vec![];
    let mut stack = vec![];
    let mut ptr = t.root();

    loop {
        // Descend down the left side of the current subtree.
        while let Some(v) = ptr {
            stack.push(v);
            ptr = v.left();
        }

        let Some(v) = stack.pop() else {
            return out;
        };

        out.push(v.value());
        ptr = v.right();
    }
}

/// Assert the BST and AVL properties of tree nodes, ensuring the tree is
/// well-formed.
pub(crate) fn validate_tree_structure<T>(t: &AvlTree<T>)
where
    T: Ord + Debug,
{
    // Invariant 1 & 3: the in-order traversal is strictly increasing, which
    // requires the BST ordering to hold across whole subtrees (not just
    // between parent and child) and all values to be unique.
    let values = in_order(t);
    for w in values.windows(2) {
        assert!(w[0] < w[1], "in-order traversal not increasing: {values:?}");
    }

    let root = match t.root() {
        Some(v) => v,
        None => return,
    };

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        validate_node(n);
    }
}

fn validate_node<T>(n: &Node<T>)
where
    T: Ord + Debug,
{
    // The left child always contains a value strictly less than this node,
    // and the right child a value strictly greater.
    assert!(n.left().map(|v| v.value() < n.value()).unwrap_or(true));
    assert!(n.right().map(|v| v.value() > n.value()).unwrap_or(true));

    // The height of this node is always +1 of the maximum child height, with
    // a missing child counting as -1.
    let left_height = n.left().map(|v| v.height() as i16).unwrap_or(-1);
    let right_height = n.right().map(|v| v.height() as i16).unwrap_or(-1);
    let want_height = left_height.max(right_height) + 1;

    assert_eq!(
        n.height() as i16,
        want_height,
        "expect node {:?} to have height {}, has {}",
        n.value(),
        want_height,
        n.height(),
    );

    // Invariant 2: the cached balance factor matches the child heights, and
    // cannot exceed an absolute value of 1.
    let balance = right_height - left_height;
    assert_eq!(n.balance_factor() as i16, balance, "node={:?}", n.value());
    assert!(balance.abs() <= 1, "balance={balance}, node={:?}", n.value());
}
