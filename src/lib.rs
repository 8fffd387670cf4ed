//! Layered binary trees sharing one node model.
//!
//! - [`BinaryTree`]: an unordered binary tree that fills the first open slot in breadth-first order.
//! - [`BinarySearchTree`]: a binary search tree where values less than or equal to a node go left.
//! - [`AvlTree`]: a binary search tree that rotates after every mutation so that the heights of the
//!   two child subtrees of any node differ by at most one.
//!
//! The ordered trees are the same type, [`SearchTree`], parameterized by a [`Balance`] strategy.
//! Read-only structural queries shared by every layer live on the [`Traverse`] trait.
//!
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html
//! [`BinarySearchTree`]: search_tree/type.BinarySearchTree.html
//! [`AvlTree`]: search_tree/type.AvlTree.html
//! [`SearchTree`]: search_tree/struct.SearchTree.html
//! [`Balance`]: search_tree/trait.Balance.html
//! [`Traverse`]: binary_tree/trait.Traverse.html
#![cfg_attr(feature = "clippy", feature(plugin))]
#![cfg_attr(feature = "clippy", plugin(clippy))]

#[macro_use]
extern crate log;

mod error;
mod tree;
pub mod binary_tree;
pub mod iter;
pub mod node;
pub mod search_tree;

pub use crate::binary_tree::{BinaryTree, Traverse};
pub use crate::error::{Error, Result};
pub use crate::node::{Node, NodePath, Side};
pub use crate::search_tree::{Avl, AvlTree, Balance, BinarySearchTree, SearchTree, Unbalanced};
