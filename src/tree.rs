//! The sorted-tree exercise: decide whether a binary tree satisfies the
//! search-order invariant.
//!
//! A tree is sorted when, for every node, all values in its left subtree are
//! less than or equal to the node's value and all values in its right subtree
//! are strictly greater. The invariant covers whole subtrees, not just
//! immediate children. Comparing each node against its children alone accepts
//! trees like
//!
//! ```text
//!       2
//!      / \
//!     1   4
//!        /
//!       0
//! ```
//!
//! where `0 < 4` holds locally but `0` sits in the right subtree of `2` and
//! should be greater than it. [`Tree::is_sorted`] therefore carries the
//! interval of admissible values down the recursion: descending left closes
//! the interval at the parent's value, descending right opens it just above.
//!
//! # Examples
//!
//! ```
//! use exercises::tree::{Node, Tree};
//!
//! let sorted = Tree::from(Node::new(2).with_left(Node::new(1)).with_right(Node::new(3)));
//! assert!(sorted.is_sorted());
//!
//! let unsorted = Tree::from(Node::new(2).with_right(Node::new(4).with_left(Node::new(0))));
//! assert!(!unsorted.is_sorted());
//! ```

use std::cmp::Ordering;
use std::ops::Bound;
use std::ops::Bound::*;

/// A binary tree of values.
///
/// Nothing rebalances here and nothing forbids building an unsorted tree by
/// hand with [`Node::with_left`] and [`Node::with_right`]. That is the point
/// of the exercise: [`Tree::is_sorted`] decides after the fact whether a
/// given tree satisfies the search-order invariant. Trees grown purely
/// through [`Tree::insert`] always do.
#[derive(Clone, Debug, PartialEq)]
pub enum Tree<K> {
    /// An empty tree.
    Leaf,
    /// A non-empty tree with a root [`Node`].
    Node(Node<K>),
}

/// A value with two (possibly empty) subtrees it exclusively owns.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<K> {
    value: K,
    left: Box<Tree<K>>,
    right: Box<Tree<K>>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::tree::Tree;
    ///
    /// let tree: Tree<i32> = Tree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Tree::Leaf
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Leaf)
    }

    /// Inserts a value into the tree, consuming it and returning the tree
    /// containing the value.
    ///
    /// The value descends as in a binary search: values greater than a node
    /// go right and values less than *or equal to* it go left, so duplicates
    /// collect in left subtrees and the result always passes
    /// [`Tree::is_sorted`].
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3).insert(2);
    /// assert!(tree.is_sorted());
    /// ```
    pub fn insert(self, value: K) -> Self
    where
        K: Ord,
    {
        match self {
            Tree::Leaf => Tree::Node(Node::new(value)),
            Tree::Node(n) => match value.cmp(&n.value) {
                Ordering::Greater => Tree::Node(Node {
                    right: Box::new(n.right.insert(value)),
                    ..n
                }),
                // Equal values go left, matching the invariant checked below.
                Ordering::Less | Ordering::Equal => Tree::Node(Node {
                    left: Box::new(n.left.insert(value)),
                    ..n
                }),
            },
        }
    }

    /// Decides whether the tree satisfies the search-order invariant.
    ///
    /// For every node, the left subtree may only hold values less than or
    /// equal to the node's value and the right subtree only values strictly
    /// greater. Empty and single-node trees are vacuously sorted.
    ///
    /// Runs in `O(n)` over the `n` nodes: each node is compared once against
    /// the interval its ancestors admit, never re-walked per ancestor.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::tree::{Node, Tree};
    ///
    /// // A node may repeat its parent's value on the left but not on the
    /// // right, so this tree fails.
    /// let tree = Tree::from(
    ///     Node::new(1)
    ///         .with_left(Node::new(1))
    ///         .with_right(Node::new(1)),
    /// );
    /// assert!(!tree.is_sorted());
    /// ```
    pub fn is_sorted(&self) -> bool
    where
        K: Ord,
    {
        self.sorted_within(Unbounded, Unbounded)
    }

    /// Checks the invariant against the interval of values this subtree may
    /// legally contain: `(low, high]` at the type level, with either end
    /// possibly absent.
    fn sorted_within(&self, low: Bound<&K>, high: Bound<&K>) -> bool
    where
        K: Ord,
    {
        match self {
            Tree::Leaf => true,
            Tree::Node(n) => {
                within(&n.value, low, high)
                    && n.left.sorted_within(low, Included(&n.value))
                    && n.right.sorted_within(Excluded(&n.value), high)
            }
        }
    }
}

impl<K> Node<K> {
    /// Creates a node holding `value` with two empty subtrees.
    pub fn new(value: K) -> Self {
        Node {
            value,
            left: Box::new(Tree::Leaf),
            right: Box::new(Tree::Leaf),
        }
    }

    /// Attaches `child` as the left subtree, replacing whatever was there.
    ///
    /// # Examples
    ///
    /// ```
    /// use exercises::tree::{Node, Tree};
    ///
    /// let tree = Tree::from(Node::new(2).with_left(Node::new(1)));
    /// assert!(tree.is_sorted());
    /// ```
    pub fn with_left(mut self, child: impl Into<Tree<K>>) -> Self {
        self.left = Box::new(child.into());
        self
    }

    /// Attaches `child` as the right subtree, replacing whatever was there.
    pub fn with_right(mut self, child: impl Into<Tree<K>>) -> Self {
        self.right = Box::new(child.into());
        self
    }

    /// The value stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The left subtree.
    pub fn left(&self) -> &Tree<K> {
        &self.left
    }

    /// The right subtree.
    pub fn right(&self) -> &Tree<K> {
        &self.right
    }

    /// Returns `true` if both subtrees are empty.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

impl<K> From<Node<K>> for Tree<K> {
    fn from(node: Node<K>) -> Self {
        Tree::Node(node)
    }
}

/// Whether `value` lies inside the interval delimited by `low` and `high`.
fn within<K: Ord>(value: &K, low: Bound<&K>, high: Bound<&K>) -> bool {
    let above = match low {
        Included(l) => value >= l,
        Excluded(l) => value > l,
        Unbounded => true,
    };
    let below = match high {
        Included(h) => value <= h,
        Excluded(h) => value < h,
        Unbounded => true,
    };
    above && below
}
