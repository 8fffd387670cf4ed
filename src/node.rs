//! Nodes and the paths that address them.

use crate::tree::{self, Tree};
use std::cmp;
use std::fmt;
use std::ops::Deref;

/// The side of a parent that a child hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing a node of a binary tree.
///
/// A node exclusively owns its children and carries no reference to its parent. It also caches
/// the height of the subtree rooted at it, where a leaf has height 1.
///
/// Dropping a bare node drops its subtrees recursively. Trees and their owning iterators release
/// their nodes with an explicit stack instead, so hand-built graphs of any depth should be adopted
/// with `from_root` before they are dropped.
///
/// Nodes can be assembled by hand and adopted by a tree with `from_root`, but the ordered trees
/// never re-check a hand-built graph. Node identity is not stable: removing a value elsewhere in
/// the tree may move another value into this node.
///
/// # Examples
/// ```
/// use tree_collections::Node;
///
/// let mut node = Node::new(2);
/// assert!(node.is_leaf());
///
/// node.set_left(Some(Box::new(Node::new(1))));
/// assert_eq!(node.left().map(|child| *child.value()), Some(1));
/// assert_eq!(node.height(), 2);
/// assert_eq!(node.balance(), -1);
/// ```
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: usize,
    pub(crate) left: Tree<T>,
    pub(crate) right: Tree<T>,
}

impl<T> Node<T> {
    /// Constructs a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Constructs a node from a value and two already-built subtrees.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::Node;
    ///
    /// let node = Node::with_children(
    ///     2,
    ///     Some(Box::new(Node::new(1))),
    ///     Some(Box::new(Node::new(3))),
    /// );
    /// assert_eq!(node.height(), 2);
    /// assert_eq!(node.balance(), 0);
    /// ```
    pub fn with_children(value: T, left: Option<Box<Node<T>>>, right: Option<Box<Node<T>>>) -> Self {
        let mut node = Node {
            value,
            height: 1,
            left,
            right,
        };
        node.update();
        node
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value. Overwriting the value of a node inside an ordered
    /// tree can break its ordering invariant.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_ref().map(Deref::deref)
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_ref().map(Deref::deref)
    }

    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_mut().map(|node| &mut **node)
    }

    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_mut().map(|node| &mut **node)
    }

    /// Replaces the left child and returns the previous one. Only this node's cached height is
    /// refreshed; the heights cached by its ancestors are left as they were.
    pub fn set_left(&mut self, child: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        let old = std::mem::replace(&mut self.left, child);
        self.update();
        old
    }

    /// Replaces the right child and returns the previous one. Only this node's cached height is
    /// refreshed; the heights cached by its ancestors are left as they were.
    pub fn set_right(&mut self, child: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        let old = std::mem::replace(&mut self.right, child);
        self.update();
        old
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `height(right) - height(left)` using the cached heights of the children.
    pub fn balance(&self) -> isize {
        tree::height(&self.right) as isize - tree::height(&self.left) as isize
    }

    pub(crate) fn child(&self, side: Side) -> &Tree<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Tree<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Recomputes the cached height from the cached heights of the children. A `Balance`
    /// implementation calls this on every ancestor of a mutation, deepest first.
    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }
}

// Children are shown by value only, so formatting never recurses into a subtree.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// The sequence of sides taken from the root to reach a node. The empty path names the root.
///
/// A path stays meaningful only until the next mutation of the tree it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    sides: Vec<Side>,
}

impl NodePath {
    /// Returns the path naming the root.
    pub fn root() -> Self {
        NodePath { sides: Vec::new() }
    }

    /// Returns the path extended by one step.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::{NodePath, Side};
    ///
    /// let path = NodePath::root().child(Side::Left).child(Side::Right);
    /// assert_eq!(path.sides(), &[Side::Left, Side::Right]);
    /// assert_eq!(path.to_string(), "LR");
    /// ```
    pub fn child(mut self, side: Side) -> Self {
        self.sides.push(side);
        self
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Returns the number of edges between the root and the named node.
    pub fn len(&self) -> usize {
        self.sides.len()
    }

    /// Returns `true` if the path names the root.
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }
}

impl From<Vec<Side>> for NodePath {
    fn from(sides: Vec<Side>) -> Self {
        NodePath { sides }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sides.is_empty() {
            return write!(f, "<root>");
        }
        for side in &self.sides {
            match side {
                Side::Left => write!(f, "L")?,
                Side::Right => write!(f, "R")?,
            }
        }
        Ok(())
    }
}
