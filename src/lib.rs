//! This crate exposes an unbalanced, ordered Binary Search Tree (BST) along
//! with the classic structural queries one asks of such a tree, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is built recursively out of `Node`s. Each `Node` stores
//! a key and may have a left and/or a right child. The ordering invariants of
//! this tree are:
//!
//! 1. For every `Node`, all the keys in its left subtree are less than its own key.
//! 2. For every `Node`, all the keys in its right subtree are greater than or
//!    equal to its own key. Inserting a key that is already present sends the
//!    new node to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The tree never rebalances, so inserting keys in sorted order produces a
//! chain whose height equals the number of keys. Every walk in this crate uses
//! an explicit stack instead of recursion so such chains can't exhaust the
//! call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let tree: OrderedTree<i32> = [5, 4, 7, 3, 6, 8].into_iter().collect();
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [3, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.traverse(Order::PreOrder).copied().collect::<Vec<_>>(), [5, 4, 3, 7, 6, 8]);
//!
//! assert_eq!(tree.count_leaves(), 3);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.level_nodes(2).copied().collect::<Vec<_>>(), [4, 7]);
//!
//! // Leftmost key below the node holding 7.
//! assert_eq!(tree.find_node(&7).map(|node| *node.leftmost()), Some(6));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod ordered;
#[cfg(test)]
mod test;

pub use error::EmptyTreeError;
pub use ordered::{Order, OrderedTree, Subtree};
