use std::cmp::Ordering;

use tracing::debug;

/// Running totals of the elementary rotations applied to a tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rotations {
    /// Number of left rotations performed.
    pub left: usize,
    /// Number of right rotations performed.
    pub right: usize,
}

impl Rotations {
    /// The total number of rotations of either direction.
    pub fn total(&self) -> usize {
        self.left + self.right
    }
}

/// The imbalance corrected by a call to [`balance()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

/// A single node of an [`AvlTree`](crate::AvlTree), and the root of the
/// subtree beneath it.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Child nodes pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// The height of the right subtree minus the height of the left subtree,
    /// where an absent subtree has a height of -1.
    balance_factor: i8,

    value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
            balance_factor: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// The cached balance factor of this node, in the range `[-1, 1]` for
    /// every node of a tree not currently being mutated.
    ///
    /// Positive when right heavy, negative when left heavy.
    pub fn balance_factor(&self) -> i8 {
        self.balance_factor
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Returns the height of `n`, or -1 if there is no node.
pub(crate) fn height_or_minus_one<T>(n: Option<&Node<T>>) -> i16 {
    n.map(|v| v.height as i16).unwrap_or(-1)
}

/// Recompute the height and balance factor of `n` from its immediate
/// children.
///
/// The children must already hold correct heights.
pub(crate) fn update<T>(n: &mut Node<T>) {
    let left = height_or_minus_one(n.left());
    let right = height_or_minus_one(n.right());

    // Correctness: a subtree of height >= 127 cannot be allocated, so both
    // values fit in their narrower types.
    n.height = (1 + left.max(right)) as u8;
    n.balance_factor = (right - left) as i8;
}

/// Rebalance the subtree rooted at `n`, which must have been passed to
/// [`update()`] after its children were modified.
///
/// Returns the imbalance that was corrected, if any.
pub(crate) fn balance<T>(
    n: &mut Box<Node<T>>,
    rotations: &mut Rotations,
) -> Option<Imbalance> {
    // Invariant: a single insert or remove below a balanced node can skew it
    // by at most one additional level.
    debug_assert!(
        (-2..=2).contains(&n.balance_factor),
        "balance factor {} out of range",
        n.balance_factor
    );

    let case = match (n.balance_factor, n.left(), n.right()) {
        // Left-heavy
        (-2, Some(l), _) if l.balance_factor <= 0 => Imbalance::LeftLeft,
        (-2, Some(_l), _) => Imbalance::LeftRight,
        // Right-heavy
        (2, _, Some(r)) if r.balance_factor >= 0 => Imbalance::RightRight,
        (2, _, Some(_r)) => Imbalance::RightLeft,
        _ => return None, /* The tree is well balanced */
    };

    debug!(?case, "rebalancing subtree");

    match case {
        Imbalance::LeftLeft => left_left_case(n, rotations),
        Imbalance::LeftRight => left_right_case(n, rotations),
        Imbalance::RightRight => right_right_case(n, rotations),
        Imbalance::RightLeft => right_left_case(n, rotations),
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 once rebalanced.
    debug_assert!(n.balance_factor.abs() <= 1);

    Some(case)
}

fn left_left_case<T>(n: &mut Box<Node<T>>, rotations: &mut Rotations) {
    rotate_right(n, rotations);
}

fn left_right_case<T>(n: &mut Box<Node<T>>, rotations: &mut Rotations) {
    if let Some(left) = n.left.as_mut() {
        rotate_left(left, rotations);
    }
    left_left_case(n, rotations);
}

fn right_right_case<T>(n: &mut Box<Node<T>>, rotations: &mut Rotations) {
    rotate_left(n, rotations);
}

fn right_left_case<T>(n: &mut Box<Node<T>>, rotations: &mut Rotations) {
    if let Some(right) = n.right.as_mut() {
        rotate_right(right, rotations);
    }
    right_right_case(n, rotations);
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// A node without a right child cannot be rotated and is left unchanged.
pub(crate) fn rotate_left<T>(x: &mut Box<Node<T>>, rotations: &mut Rotations) {
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    // "p" is now the old subtree root, and "x" the pivot.
    p.right = x.left.take();
    update(&mut p);

    x.left = Some(p);
    update(x);

    rotations.left += 1;
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// A node without a left child cannot be rotated and is left unchanged.
pub(crate) fn rotate_right<T>(y: &mut Box<Node<T>>, rotations: &mut Rotations) {
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update(&mut p);

    y.right = Some(p);
    update(y);

    rotations.right += 1;
}

/// Insert `value` into the subtree rooted at `slot`, rebalancing every
/// ancestor of the new leaf on the way back up.
///
/// Values equal to an existing node descend to the right; callers are
/// expected to reject duplicates before calling this.
pub(crate) fn insert<T>(
    slot: &mut Option<Box<Node<T>>>,
    value: T,
    rotations: &mut Rotations,
) where
    T: Ord,
{
    let node = match slot {
        Some(v) => v,
        None => {
            *slot = Some(Box::new(Node::new(value)));
            return;
        }
    };

    if value < node.value {
        insert(&mut node.left, value, rotations);
    } else {
        insert(&mut node.right, value, rotations);
    }

    update(node);
    balance(node, rotations);
}

/// Remove the node holding `value` from the subtree rooted at `slot`,
/// rebalancing every node on the path back up to `slot`.
///
/// Returns false if no node holding `value` was found on the search path.
pub(crate) fn remove<T>(
    slot: &mut Option<Box<Node<T>>>,
    value: &T,
    rotations: &mut Rotations,
) -> bool
where
    T: Ord + Clone,
{
    let Some(node) = slot.as_mut() else {
        return false;
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value, rotations),
        Ordering::Greater => remove(&mut node.right, value, rotations),
        Ordering::Equal => {
            // This node holds the value to be removed, and may have 0, 1 or 2
            // children.
            match (node.left.is_some(), node.right.is_some()) {
                (true, true) => remove_with_successor(node, rotations),
                (true, false) => *slot = node.left.take(),
                (false, true) => *slot = node.right.take(),
                (false, false) => *slot = None,
            }
            true
        }
    };

    if removed {
        if let Some(node) = slot.as_mut() {
            update(node);
            balance(node, rotations);
        }
    }

    removed
}

/// Replace the value of the two-child `node` with a successor drawn from the
/// taller of its subtrees, and remove the successor's original node.
///
/// When the left subtree is strictly taller the in-order predecessor (the
/// left maximum) is used, otherwise the in-order successor (the right
/// minimum).
fn remove_with_successor<T>(node: &mut Box<Node<T>>, rotations: &mut Rotations)
where
    T: Ord + Clone,
{
    let from_left = height_or_minus_one(node.left()) > height_or_minus_one(node.right());

    let successor = match (from_left, node.left(), node.right()) {
        (true, Some(left), _) => find_maximum(left).clone(),
        (false, _, Some(right)) => find_minimum(right).clone(),
        _ => unreachable!("successor removal requires two children"),
    };

    debug!(from_left, "replacing two-child node value with successor");

    let subtree = if from_left {
        &mut node.left
    } else {
        &mut node.right
    };

    let removed = remove(subtree, &successor, rotations);

    // Invariant: the successor was found in the subtree it was read from.
    debug_assert!(removed);

    node.value = successor;
}

/// Return the minimum value in the subtree rooted at `n`.
pub(crate) fn find_minimum<T>(n: &Node<T>) -> &T {
    let mut ptr = n;
    while let Some(v) = ptr.left() {
        ptr = v;
    }
    &ptr.value
}

/// Return the maximum value in the subtree rooted at `n`.
pub(crate) fn find_maximum<T>(n: &Node<T>) -> &T {
    let mut ptr = n;
    while let Some(v) = ptr.right() {
        ptr = v;
    }
    &ptr.value
}

/// Exhaustively search the subtree rooted at `n` for `value`, visiting every
/// node rather than pruning by the BST ordering.
pub(crate) fn contains<T>(n: Option<&Node<T>>, value: &T) -> bool
where
    T: PartialEq,
{
    let Some(n) = n else {
        return false;
    };

    if n.value == *value {
        return true;
    }

    if contains(n.left(), value) {
        return true;
    }

    if contains(n.right(), value) {
        return true;
    }

    false
}
