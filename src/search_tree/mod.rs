//! Binary search trees where a node's left subtree holds values less than or equal to it and its
//! right subtree holds strictly greater values.
//!
//! The shape discipline is a separate [`Balance`] strategy chosen through the type:
//! [`BinarySearchTree`] never rotates, [`AvlTree`] rotates after every insertion and removal.
//!
//! [`Balance`]: trait.Balance.html
//! [`BinarySearchTree`]: type.BinarySearchTree.html
//! [`AvlTree`]: type.AvlTree.html

mod balance;

pub use self::balance::{Avl, Balance, Unbalanced};
pub use crate::tree::{rotate_left, rotate_right, Tree};

use crate::binary_tree::Traverse;
use crate::error::{Error, Result};
use crate::iter::{IntoBreadthFirst, IntoIter, Values};
use crate::node::{Node, NodePath, Side};
use crate::tree;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// A binary search tree that never rebalances.
pub type BinarySearchTree<T> = SearchTree<T, Unbalanced>;

/// A self-balancing binary search tree where the heights of the two child subtrees of any node
/// differ by at most one.
///
/// # Examples
/// ```
/// use tree_collections::{AvlTree, Traverse};
///
/// let mut tree = AvlTree::new();
/// for value in 1..8 {
///     tree.insert(value);
/// }
///
/// assert_eq!(tree.depth(), 2);
/// assert_eq!(tree.root().map(|node| *node.value()), Some(4));
/// assert!(tree.is_balanced());
///
/// assert!(tree.remove(&4));
/// assert!(!tree.remove(&4));
/// assert_eq!(tree.values().cloned().collect::<Vec<u32>>(), vec![1, 2, 3, 5, 6, 7]);
/// ```
pub type AvlTree<T> = SearchTree<T, Avl>;

/// An ordered binary tree parameterized by the strategy that maintains its shape.
///
/// Duplicates are allowed and are inserted to the left of equal values. Lookups stop at the first
/// equal value found on the way down.
///
/// # Examples
/// ```
/// use tree_collections::{BinarySearchTree, Traverse};
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(5);
/// tree.insert(3);
/// tree.insert(8);
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(&3));
/// assert_eq!(tree.min(), Some(&3));
/// assert_eq!(tree.ceil(&6), Some(&8));
///
/// assert!(tree.remove(&3));
/// assert!(!tree.contains(&3));
/// ```
pub struct SearchTree<T, B = Unbalanced> {
    tree: Tree<T>,
    balance: B,
}

impl<T, B> SearchTree<T, B>
where
    B: Balance + Default,
{
    /// Constructs a new, empty tree.
    pub fn new() -> Self {
        Self::with_balance(B::default())
    }

    /// Constructs a tree holding a single value.
    pub fn with_root(value: T) -> Self {
        SearchTree {
            tree: Some(Box::new(Node::new(value))),
            balance: B::default(),
        }
    }

    /// Adopts an already-built node graph. Neither the ordering nor the balance of the graph is
    /// checked; see `check_validity` and `validate`.
    pub fn from_root(root: Box<Node<T>>) -> Self {
        SearchTree {
            tree: Some(root),
            balance: B::default(),
        }
    }
}

impl<T, B> SearchTree<T, B>
where
    B: Balance,
{
    /// Constructs a new, empty tree that uses the given strategy.
    pub fn with_balance(balance: B) -> Self {
        SearchTree {
            tree: None,
            balance,
        }
    }

    /// Returns a mutable reference to the node at `path`.
    ///
    /// Editing values or links through this reference can break the ordering and balance
    /// invariants, which are only detected by `check_validity` and only repaired by `validate`.
    pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Node<T>> {
        tree::node_at_mut(&mut self.tree, path.sides())
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        tree::clear(&mut self.tree);
    }

    /// Returns `true` if the balance factor of every node, measured from the node graph, is
    /// within one.
    pub fn is_balanced(&self) -> bool {
        tree::measure(&self.tree).iter().all(|m| m.balance.abs() <= 1)
    }

    fn splice(&mut self, path: Vec<Side>) -> Option<T> {
        let (value, unlinked) = tree::splice(&mut self.tree, path)?;
        self.balance.after_remove(&mut self.tree, &unlinked);
        Some(value)
    }
}

impl<T, B> SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    // Path of the empty slot where `value` would be attached.
    fn insertion_path(&self, value: &T) -> Vec<Side> {
        let mut path = Vec::new();
        let mut curr = self.root();
        while let Some(node) = curr {
            let side = if *value <= node.value { Side::Left } else { Side::Right };
            path.push(side);
            curr = match side {
                Side::Left => node.left(),
                Side::Right => node.right(),
            };
        }
        path
    }

    fn search_path(&self, value: &T) -> Option<Vec<Side>> {
        let mut path = Vec::new();
        let mut curr = self.root();
        while let Some(node) = curr {
            curr = match value.cmp(&node.value) {
                Ordering::Less => {
                    path.push(Side::Left);
                    node.left()
                },
                Ordering::Greater => {
                    path.push(Side::Right);
                    node.right()
                },
                Ordering::Equal => return Some(path),
            };
        }
        None
    }

    /// Inserts a value into the tree. Equal values are kept and go to the left.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::{BinarySearchTree, NodePath, Side, Traverse};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// let path = NodePath::root().child(Side::Left);
    /// assert_eq!(tree.node_at(&path).map(|node| *node.value()), Some(2));
    /// ```
    pub fn insert(&mut self, value: T) {
        let path = self.insertion_path(&value);
        if let Some(slot) = tree::slot_mut(&mut self.tree, &path) {
            *slot = Some(Box::new(Node::new(value)));
        }
        self.balance.after_insert(&mut self.tree, &path);
    }

    /// Removes one node equal to `value`. Returns `false` if no node matched.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::{BinarySearchTree, Traverse};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        match self.search_path(value) {
            Some(path) => self.splice(path).is_some(),
            None => false,
        }
    }

    /// Removes the node at `path` and returns its value. The tree is rebalanced as after `remove`.
    ///
    /// # Errors
    /// Returns `Error::InvalidPath` if `path` does not name a node.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::{AvlTree, Error, NodePath, Traverse};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// let path = tree.find_path(&2).unwrap();
    /// assert_eq!(tree.remove_at(&path), Ok(2));
    /// assert_eq!(tree.remove_at(&path), Err(Error::InvalidPath(path)));
    /// ```
    pub fn remove_at(&mut self, path: &NodePath) -> Result<T> {
        self.splice(path.sides().to_vec())
            .ok_or_else(|| Error::InvalidPath(path.clone()))
    }

    /// Returns `true` if a node equal to `value` exists.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the first node equal to `value` on the way down from the root.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let path = self.search_path(value)?;
        self.node_at(&NodePath::from(path))
    }

    /// Returns the path of the first node equal to `value` on the way down from the root.
    pub fn find_path(&self, value: &T) -> Option<NodePath> {
        self.search_path(value).map(NodePath::from)
    }

    /// Returns the minimum value of the tree, or `None` if it is empty.
    pub fn min(&self) -> Option<&T> {
        let mut curr = self.root()?;
        while let Some(left) = curr.left() {
            curr = left;
        }
        Some(&curr.value)
    }

    /// Returns the maximum value of the tree, or `None` if it is empty.
    pub fn max(&self) -> Option<&T> {
        let mut curr = self.root()?;
        while let Some(right) = curr.right() {
            curr = right;
        }
        Some(&curr.value)
    }

    /// Returns the largest value less than or equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        let mut ret = None;
        let mut curr = self.root();
        while let Some(node) = curr {
            curr = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => {
                    ret = Some(&node.value);
                    node.right()
                },
                Ordering::Equal => return Some(&node.value),
            };
        }
        ret
    }

    /// Returns the smallest value greater than or equal to `value`.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        let mut ret = None;
        let mut curr = self.root();
        while let Some(node) = curr {
            curr = match value.cmp(&node.value) {
                Ordering::Greater => node.right(),
                Ordering::Less => {
                    ret = Some(&node.value);
                    node.left()
                },
                Ordering::Equal => return Some(&node.value),
            };
        }
        ret
    }

    /// Rebuilds the tree by re-inserting every value in breadth-first order. This restores the
    /// ordering invariant, and the balance invariant for strategies that keep one, after nodes
    /// were edited through `node_at_mut`.
    ///
    /// # Examples
    /// ```
    /// use tree_collections::{AvlTree, NodePath, Traverse};
    ///
    /// let mut tree: AvlTree<u32> = (1..8).collect();
    /// if let Some(node) = tree.node_at_mut(&NodePath::root()) {
    ///     *node.value_mut() = 9;
    /// }
    /// assert!(!tree.check_validity());
    ///
    /// tree.validate();
    /// assert!(tree.check_validity());
    /// assert_eq!(tree.max(), Some(&9));
    /// ```
    pub fn validate(&mut self) {
        let mut count = 0;
        for value in IntoBreadthFirst::new(self.tree.take()) {
            self.insert(value);
            count += 1;
        }
        debug!("rebuilt search tree of {} values", count);
    }

    /// Returns `true` if every node is ordered against its immediate children and the strategy's
    /// own check passes. For `AvlTree` that check only looks at the balance factor of the root.
    pub fn check_validity(&self) -> bool {
        let ordered = self.iter_breadth_first().all(|node| {
            node.left().map_or(true, |left| left.value <= node.value)
                && node.right().map_or(true, |right| right.value > node.value)
        });
        ordered && self.balance.check(&self.tree)
    }

    /// Returns `true` if the in-order sequence of values never decreases.
    pub fn is_ordered(&self) -> bool {
        self.values().zip(self.values().skip(1)).all(|(prev, next)| prev <= next)
    }
}

impl<T, B> Traverse<T> for SearchTree<T, B> {
    fn root(&self) -> Option<&Node<T>> {
        self.tree.as_ref().map(Deref::deref)
    }
}

impl<T, B> Drop for SearchTree<T, B> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T, B> Default for SearchTree<T, B>
where
    B: Balance + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> fmt::Debug for SearchTree<T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T, B> Extend<T> for SearchTree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, B> FromIterator<T> for SearchTree<T, B>
where
    T: Ord,
    B: Balance + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = SearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T, B> IntoIterator for SearchTree<T, B> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.tree.take())
    }
}

impl<'a, T, B> IntoIterator for &'a SearchTree<T, B>
where
    T: 'a,
    B: 'a,
{
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

#[cfg(test)]
mod tests {
    use super::{AvlTree, BinarySearchTree};
    use crate::binary_tree::Traverse;
    use crate::error::Error;
    use crate::node::{Node, NodePath, Side};
    use crate::tree;

    fn leaf(value: u32) -> Option<Box<Node<u32>>> {
        Some(Box::new(Node::new(value)))
    }

    fn branch(
        value: u32,
        left: Option<Box<Node<u32>>>,
        right: Option<Box<Node<u32>>>,
    ) -> Box<Node<u32>> {
        Box::new(Node::with_children(value, left, right))
    }

    fn values<B>(tree: &super::SearchTree<u32, B>) -> Vec<u32> {
        tree.values().cloned().collect()
    }

    fn value_at<B>(tree: &super::SearchTree<u32, B>, sides: Vec<Side>) -> Option<u32> {
        tree.node_at(&NodePath::from(sides)).map(|node| *node.value())
    }

    fn heights_consistent<B>(tree: &super::SearchTree<u32, B>) -> bool {
        tree::measure(&tree.tree).iter().all(|m| m.height == m.cached_height)
    }

    #[test]
    fn test_len_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.check_validity());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_with_root() {
        let tree: AvlTree<u32> = AvlTree::with_root(4);
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(&4));
    }

    #[test]
    fn test_bst_insert_shape() {
        let tree: BinarySearchTree<u32> = vec![50, 30, 70, 20, 40].into_iter().collect();
        assert_eq!(value_at(&tree, vec![]), Some(50));
        assert_eq!(value_at(&tree, vec![Side::Left, Side::Left]), Some(20));
        assert_eq!(value_at(&tree, vec![Side::Left, Side::Right]), Some(40));
        assert_eq!(value_at(&tree, vec![Side::Right]), Some(70));
        assert!(tree.check_validity());
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_bst_does_not_rebalance() {
        let tree: BinarySearchTree<u32> = (1..6).collect();
        assert_eq!(tree.depth(), 4);
        assert!(!tree.is_balanced());
        assert!(tree.check_validity());
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_duplicates_go_left() {
        let tree: BinarySearchTree<u32> = vec![5, 5, 5].into_iter().collect();
        assert_eq!(value_at(&tree, vec![Side::Left, Side::Left]), Some(5));
        assert_eq!(tree.count_of(&5), 3);
        assert!(tree.check_validity());
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree: BinarySearchTree<u32> = vec![50, 30, 70, 20, 40].into_iter().collect();
        assert_eq!(tree.len(), 5);
        assert!(tree.remove(&50));
        assert_eq!(value_at(&tree, vec![]), Some(40));
        assert_eq!(tree.len(), 4);
        assert_eq!(values(&tree), vec![20, 30, 40, 70]);
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree: BinarySearchTree<u32> = vec![5, 3, 8].into_iter().collect();
        assert_eq!(tree.len(), 3);
        assert!(tree.remove(&3));
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains(&3));
        assert!(tree.contains(&5));
        assert!(tree.contains(&8));
    }

    #[test]
    fn test_remove_one_child() {
        let mut tree: BinarySearchTree<u32> = vec![5, 3, 8, 9].into_iter().collect();
        let before = tree.find(&8).map(|node| node as *const Node<u32>);
        assert!(tree.remove(&8));
        // the node that held 8 now holds its only child's value
        assert_eq!(tree.find(&9).map(|node| node as *const Node<u32>), before);
        assert_eq!(values(&tree), vec![3, 5, 9]);
    }

    #[test]
    fn test_remove_absent() {
        let mut tree: AvlTree<u32> = vec![5, 3, 8].into_iter().collect();
        assert!(!tree.remove(&4));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_remove_duplicate() {
        let mut tree: AvlTree<u32> = vec![2, 2, 1, 2].into_iter().collect();
        assert!(tree.remove(&2));
        assert_eq!(values(&tree), vec![1, 2, 2]);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_remove_at() {
        let mut tree: AvlTree<u32> = (1..8).collect();
        assert_eq!(tree.remove_at(&NodePath::root()), Ok(4));
        assert!(tree.is_balanced());
        assert_eq!(values(&tree), vec![1, 2, 3, 5, 6, 7]);

        let path = NodePath::from(vec![Side::Left, Side::Left, Side::Left, Side::Left]);
        assert_eq!(tree.remove_at(&path), Err(Error::InvalidPath(path)));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_avl_left_left() {
        let tree: AvlTree<u32> = vec![30, 20, 10].into_iter().collect();
        assert_eq!(value_at(&tree, vec![]), Some(20));
        assert_eq!(value_at(&tree, vec![Side::Left]), Some(10));
        assert_eq!(value_at(&tree, vec![Side::Right]), Some(30));
        assert!(tree.iter_breadth_first().all(|node| node.balance() == 0));
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_avl_right_left() {
        let tree: AvlTree<u32> = vec![10, 30, 20].into_iter().collect();
        assert_eq!(value_at(&tree, vec![]), Some(20));
        assert_eq!(value_at(&tree, vec![Side::Left]), Some(10));
        assert_eq!(value_at(&tree, vec![Side::Right]), Some(30));
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_avl_left_right() {
        let tree: AvlTree<u32> = vec![30, 10, 20].into_iter().collect();
        assert_eq!(value_at(&tree, vec![]), Some(20));
        assert_eq!(value_at(&tree, vec![Side::Left]), Some(10));
        assert_eq!(value_at(&tree, vec![Side::Right]), Some(30));
    }

    #[test]
    fn test_avl_right_right() {
        let tree: AvlTree<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(value_at(&tree, vec![]), Some(20));
        assert_eq!(value_at(&tree, vec![Side::Left]), Some(10));
        assert_eq!(value_at(&tree, vec![Side::Right]), Some(30));
    }

    #[test]
    fn test_avl_sorted_insert() {
        let tree: AvlTree<u32> = (0..1023).collect();
        assert_eq!(tree.depth(), 9);
        assert!(tree.is_balanced());
        assert!(tree.check_validity());
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_avl_remove_rebalances() {
        let mut tree: AvlTree<u32> = vec![20, 10, 30, 40].into_iter().collect();
        assert!(tree.remove(&10));
        assert_eq!(value_at(&tree, vec![]), Some(30));
        assert_eq!(value_at(&tree, vec![Side::Left]), Some(20));
        assert_eq!(value_at(&tree, vec![Side::Right]), Some(40));
        assert!(tree.is_balanced());
        assert!(heights_consistent(&tree));
    }

    #[test]
    fn test_avl_remove_all() {
        let mut tree: AvlTree<u32> = (0..64).collect();
        for value in (0..64).rev().filter(|value| value % 3 != 0) {
            assert!(tree.remove(&value));
            assert!(tree.is_balanced());
            assert!(heights_consistent(&tree));
        }
        for value in (0..64).filter(|value| value % 3 == 0) {
            assert!(tree.remove(&value));
            assert!(tree.is_balanced());
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_find_and_path() {
        let tree: AvlTree<u32> = (1..8).collect();
        assert_eq!(tree.find(&5).map(|node| *node.value()), Some(5));
        assert_eq!(
            tree.find_path(&5),
            Some(NodePath::from(vec![Side::Right, Side::Left])),
        );
        assert_eq!(tree.find_path(&4), Some(NodePath::root()));
        assert!(tree.find(&8).is_none());
        assert!(tree.find_path(&0).is_none());
    }

    #[test]
    fn test_min_max() {
        let tree: AvlTree<u32> = vec![5, 1, 3].into_iter().collect();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let tree: BinarySearchTree<u32> = vec![1, 3, 5].into_iter().collect();

        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.floor(&2), Some(&1));
        assert_eq!(tree.floor(&4), Some(&3));
        assert_eq!(tree.floor(&6), Some(&5));

        assert_eq!(tree.ceil(&0), Some(&1));
        assert_eq!(tree.ceil(&2), Some(&3));
        assert_eq!(tree.ceil(&4), Some(&5));
        assert_eq!(tree.ceil(&6), None);
    }

    #[test]
    fn test_check_validity_immediate_children() {
        let mut tree: BinarySearchTree<u32> = vec![50, 30, 70, 20, 40].into_iter().collect();
        // 60 under 30 is fine against its parent but not against the root
        if let Some(node) = tree.node_at_mut(&NodePath::from(vec![Side::Left, Side::Right])) {
            *node.value_mut() = 60;
        }
        assert!(tree.check_validity());
        assert!(!tree.is_ordered());

        if let Some(node) = tree.node_at_mut(&NodePath::from(vec![Side::Right])) {
            *node.value_mut() = 10;
        }
        assert!(!tree.check_validity());
    }

    #[test]
    fn test_avl_check_validity_root_only() {
        let left = branch(3, Some(branch(2, leaf(1), None)), None);
        let right = branch(7, None, Some(branch(8, None, leaf(9))));
        let tree: AvlTree<u32> = AvlTree::from_root(branch(5, Some(left), Some(right)));
        assert!(tree.check_validity());
        assert!(!tree.is_balanced());
    }

    #[test]
    fn test_avl_check_validity_unbalanced_root() {
        let tree: AvlTree<u32> = AvlTree::from_root(branch(3, Some(branch(2, leaf(1), None)), None));
        assert!(!tree.check_validity());

        let tree: BinarySearchTree<u32> =
            BinarySearchTree::from_root(branch(3, Some(branch(2, leaf(1), None)), None));
        assert!(tree.check_validity());
    }

    #[test]
    fn test_validate_restores_order() {
        let mut tree: BinarySearchTree<u32> = vec![50, 30, 70, 20, 40].into_iter().collect();
        if let Some(node) = tree.node_at_mut(&NodePath::from(vec![Side::Left, Side::Left])) {
            *node.value_mut() = 90;
        }
        assert!(!tree.check_validity());

        tree.validate();
        assert!(tree.check_validity());
        assert!(tree.is_ordered());
        assert_eq!(values(&tree), vec![30, 40, 50, 70, 90]);
    }

    #[test]
    fn test_validate_restores_balance() {
        let chain = branch(1, None, Some(branch(2, None, Some(branch(3, None, leaf(4))))));
        let mut tree: AvlTree<u32> = AvlTree::from_root(chain);
        assert!(!tree.is_balanced());

        tree.validate();
        assert!(tree.is_balanced());
        assert!(heights_consistent(&tree));
        assert_eq!(values(&tree), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_validate_empty() {
        let mut tree: AvlTree<u32> = AvlTree::new();
        tree.validate();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut tree: AvlTree<u32> = (1..4).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.min(), None);
    }

    #[test]
    fn test_into_iter() {
        let tree: AvlTree<u32> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_iter_ref() {
        let tree: AvlTree<u32> = vec![3, 1, 2].into_iter().collect();
        let mut sum = 0;
        for value in &tree {
            sum += *value;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_debug() {
        let tree: AvlTree<u32> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "[1, 2, 3]");
    }
}
