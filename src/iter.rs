//! Iterative traversals shared by every tree in this crate.
//!
//! Every traversal keeps its own queue or stack, so the depth of a tree is never bounded by the
//! call stack. Traversals are finite and cannot be restarted; ask the tree for a new one instead.

use crate::node::Node;
use crate::tree::{self, Tree};
use std::collections::VecDeque;

/// An iterator that visits nodes level by level, left to right.
pub struct BreadthFirst<'a, T>
where
    T: 'a,
{
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> BreadthFirst<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        BreadthFirst {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for BreadthFirst<'a, T>
where
    T: 'a,
{
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

/// An iterator that visits nodes in pre-order: a node, then its left subtree, then its right
/// subtree.
pub struct DepthFirst<'a, T>
where
    T: 'a,
{
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> DepthFirst<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        DepthFirst {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for DepthFirst<'a, T>
where
    T: 'a,
{
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right first so that the left child is popped first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// An iterator that visits nodes in-order: a node's left subtree, then the node, then its right
/// subtree.
pub struct InOrder<'a, T>
where
    T: 'a,
{
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        InOrder {
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T>
where
    T: 'a,
{
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            node
        })
    }
}

/// An iterator over the values of a tree in in-order.
pub struct Values<'a, T>
where
    T: 'a,
{
    nodes: InOrder<'a, T>,
}

impl<'a, T> Values<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Values {
            nodes: InOrder::new(root),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::value)
    }
}

/// An iterator over the leaves of a tree in breadth-first order.
pub struct Leaves<'a, T>
where
    T: 'a,
{
    nodes: BreadthFirst<'a, T>,
}

impl<'a, T> Leaves<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Leaves {
            nodes: BreadthFirst::new(root),
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T>
where
    T: 'a,
{
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.nodes.next()?;
            if node.is_leaf() {
                return Some(node);
            }
        }
    }
}

/// An owning iterator that yields values in-order.
pub struct IntoIter<T> {
    current: Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        IntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        tree::clear(&mut self.current);
        for mut node in self.stack.drain(..) {
            tree::clear(&mut node.right);
        }
    }
}

/// An owning iterator that yields values in breadth-first order.
pub struct IntoBreadthFirst<T> {
    queue: VecDeque<Box<Node<T>>>,
}

impl<T> IntoBreadthFirst<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        IntoBreadthFirst {
            queue: tree.into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoBreadthFirst<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        let Node { value, left, right, .. } = *node;
        self.queue.extend(left);
        self.queue.extend(right);
        Some(value)
    }
}

impl<T> Drop for IntoBreadthFirst<T> {
    fn drop(&mut self) {
        for node in self.queue.drain(..) {
            tree::clear(&mut Some(node));
        }
    }
}
