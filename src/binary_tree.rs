//! Unordered binary tree and the structural queries shared by every tree in this crate.

use crate::error::{Error, Result};
use crate::iter::{BreadthFirst, DepthFirst, InOrder, IntoIter, Leaves, Values};
use crate::node::{Node, NodePath, Side};
use crate::tree::{self, Tree};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// Read-only structural queries over anything that owns a binary tree.
///
/// None of these rely on an ordering invariant, and none of them cache: counting, depth and
/// equality searches walk the whole tree.
pub trait Traverse<T> {
    /// Returns the root node, or `None` if the tree is empty.
    fn root(&self) -> Option<&Node<T>>;

    /// Returns an iterator over the nodes of the tree level by level, left to right.
    fn iter_breadth_first(&self) -> BreadthFirst<T> {
        BreadthFirst::new(self.root())
    }

    /// Returns an iterator over the nodes of the tree in pre-order.
    fn iter_depth_first(&self) -> DepthFirst<T> {
        DepthFirst::new(self.root())
    }

    /// Returns an iterator over the nodes of the tree in-order.
    fn iter_in_order(&self) -> InOrder<T> {
        InOrder::new(self.root())
    }

    /// Returns an iterator over the values of the tree in-order.
    fn values(&self) -> Values<T> {
        Values::new(self.root())
    }

    /// Returns an iterator over the leaves of the tree in breadth-first order.
    fn leaves(&self) -> Leaves<T> {
        Leaves::new(self.root())
    }

    /// Returns the number of nodes in the tree. This walks the whole tree.
    fn len(&self) -> usize {
        self.iter_depth_first().count()
    }

    /// Returns `true` if the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Returns the largest number of edges between the root and a leaf. Both an empty tree and a
    /// single node have depth 0.
    fn depth(&self) -> usize {
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        let mut depth = 0;
        loop {
            let next: Vec<&Node<T>> = level
                .iter()
                .flat_map(|&node| node.left().into_iter().chain(node.right()))
                .collect();
            if next.is_empty() {
                return depth;
            }
            depth += 1;
            level = next;
        }
    }

    /// Returns the node at `path`, or `None` if the path leaves the tree.
    fn node_at(&self, path: &NodePath) -> Option<&Node<T>> {
        let mut curr = self.root()?;
        for side in path.sides() {
            curr = match side {
                Side::Left => curr.left()?,
                Side::Right => curr.right()?,
            };
        }
        Some(curr)
    }

    /// Returns the first node equal to `value` in breadth-first order.
    fn find_first(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.iter_breadth_first().find(|node| node.value() == value)
    }

    /// Returns the number of nodes holding a value equal to `value`.
    fn count_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter_breadth_first().filter(|node| node.value() == value).count()
    }
}

/// An unordered binary tree.
///
/// Insertion fills the first node missing a child in breadth-first order, so the tree stays as
/// shallow as insertions alone allow. Searches compare for equality and visit nodes breadth-first.
///
/// # Examples
/// ```
/// use tree_collections::{BinaryTree, Traverse};
///
/// let mut tree = BinaryTree::new();
/// tree.insert(3);
/// tree.insert(1);
/// tree.insert(2);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.values().cloned().collect::<Vec<u32>>(), vec![1, 3, 2]);
///
/// assert!(tree.remove(&3));
/// assert!(!tree.remove(&3));
/// assert!(!tree.contains(&3));
/// ```
pub struct BinaryTree<T> {
    tree: Tree<T>,
}

impl<T> BinaryTree<T> {
    /// Constructs a new, empty `BinaryTree<T>`.
    pub fn new() -> Self {
        BinaryTree { tree: None }
    }

    /// Constructs a tree holding a single value.
    pub fn with_root(value: T) -> Self {
        BinaryTree {
            tree: Some(Box::new(Node::new(value))),
        }
    }

    /// Adopts an already-built node graph. The graph is trusted as is.
    pub fn from_root(root: Box<Node<T>>) -> Self {
        BinaryTree { tree: Some(root) }
    }

    /// Inserts a value as a new leaf under the first node, in breadth-first order, that is missing
    /// a child. The left slot is filled before the right one.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::{BinaryTree, NodePath, Side, Traverse};
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// let path = NodePath::root().child(Side::Right);
    /// assert_eq!(tree.node_at(&path).map(|node| *node.value()), Some(3));
    /// ```
    pub fn insert(&mut self, value: T) {
        let open = tree::locate(&self.tree, |node| node.left.is_none() || node.right.is_none());
        let mut path = match open {
            Some(path) => path,
            None => {
                self.tree = Some(Box::new(Node::new(value)));
                return;
            },
        };
        let side = match tree::node_at(&self.tree, &path) {
            Some(node) if node.left.is_none() => Side::Left,
            _ => Side::Right,
        };
        path.push(side);
        if let Some(slot) = tree::slot_mut(&mut self.tree, &path) {
            *slot = Some(Box::new(Node::new(value)));
        }
        tree::refresh_ancestors(&mut self.tree, &path);
    }

    /// Removes the first node equal to `value` in breadth-first order. Returns `false` if no node
    /// matched.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match tree::locate(&self.tree, |node| node.value == *value) {
            Some(path) => self.splice(path).is_some(),
            None => false,
        }
    }

    /// Removes the node at `path` and returns its value.
    ///
    /// When the node has two children its value is swapped with its in-order predecessor and the
    /// predecessor's node is unlinked instead, so paths taken before the call may name different
    /// values afterwards.
    ///
    /// # Errors
    /// Returns `Error::InvalidPath` if `path` does not name a node.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::{BinaryTree, Error, NodePath, Side, Traverse};
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// let path = NodePath::root().child(Side::Left);
    /// assert_eq!(tree.remove_at(&path), Ok(2));
    /// assert_eq!(tree.remove_at(&path), Err(Error::InvalidPath(path)));
    /// ```
    pub fn remove_at(&mut self, path: &NodePath) -> Result<T> {
        self.splice(path.sides().to_vec())
            .ok_or_else(|| Error::InvalidPath(path.clone()))
    }

    fn splice(&mut self, path: Vec<Side>) -> Option<T> {
        let (value, unlinked) = tree::splice(&mut self.tree, path)?;
        tree::refresh_ancestors(&mut self.tree, &unlinked);
        Some(value)
    }

    /// Returns `true` if some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_first(value).is_some()
    }

    /// Returns the first node equal to `value` in breadth-first order.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        self.find_first(value)
    }

    /// Returns the path of the first node equal to `value` in breadth-first order.
    pub fn find_path(&self, value: &T) -> Option<NodePath>
    where
        T: PartialEq,
    {
        tree::locate(&self.tree, |node| node.value == *value).map(NodePath::from)
    }

    /// Returns a mutable reference to the node at `path`.
    pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Node<T>> {
        tree::node_at_mut(&mut self.tree, path.sides())
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> Traverse<T> for BinaryTree<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.tree.as_ref().map(Deref::deref)
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter_breadth_first().map(Node::value)).finish()
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> IntoIterator for BinaryTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.tree.take())
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
