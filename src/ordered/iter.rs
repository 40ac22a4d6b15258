//! Lazy walks over an [`OrderedTree`][super::OrderedTree]. Each iterator keeps
//! its own explicit stack so walking a degenerate (sorted-insertion) tree
//! never grows the call stack.

use std::iter::FusedIterator;
use std::mem;

use super::{Node, Order};

/// A pending unit of work for [`Walk`].
enum Step<'a, T> {
    /// Push this node's children and the node itself in visiting order.
    Visit(&'a Node<T>),
    /// Hand this node to the caller.
    Yield(&'a Node<T>),
}

/// Depth-first walk over nodes in any [`Order`].
pub(super) struct Walk<'a, T> {
    order: Order,
    stack: Vec<Step<'a, T>>,
}

impl<'a, T> Walk<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Step::Visit).into_iter().collect(),
        }
    }

    fn expand(&mut self, node: &'a Node<T>) {
        let left = node.left().map(Step::Visit);
        let right = node.right().map(Step::Visit);

        // Popping is last-in first-out, so push in reverse visiting order.
        match self.order {
            Order::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(Step::Yield(node));
            }
            Order::InOrder => {
                self.stack.extend(right);
                self.stack.push(Step::Yield(node));
                self.stack.extend(left);
            }
            Order::PostOrder => {
                self.stack.push(Step::Yield(node));
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Yield(node) => return Some(node),
                Step::Visit(node) => self.expand(node),
            }
        }

        None
    }
}

/// Keys of a tree in a chosen [`Order`]. Created by
/// [`OrderedTree::traverse`][super::OrderedTree::traverse] and its shorthands.
pub struct Traverse<'a, T> {
    walk: Walk<'a, T>,
}

impl<'a, T> Traverse<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            walk: Walk::new(root, order),
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|node| &node.key)
    }
}

impl<T> FusedIterator for Traverse<'_, T> {}

/// Keys of the nodes without children, from left to right.
pub struct Leaves<'a, T> {
    walk: Walk<'a, T>,
}

impl<'a, T> Leaves<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        // Pre-order reaches leaves left to right.
        Self {
            walk: Walk::new(root, Order::PreOrder),
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.find(|node| node.is_leaf()).map(|node| &node.key)
    }
}

impl<T> FusedIterator for Leaves<'_, T> {}

/// Keys found at exactly one level of a tree, from left to right. The root
/// sits on level 1.
pub struct LevelNodes<'a, T> {
    level: usize,
    /// Nodes still to look at, paired with the level they sit on.
    stack: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> LevelNodes<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>, level: usize) -> Self {
        let stack = match root {
            Some(root) if level > 0 => vec![(root, 1)],
            _ => Vec::new(),
        };

        Self { level, stack }
    }
}

impl<'a, T> Iterator for LevelNodes<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            if depth == self.level {
                return Some(&node.key);
            }

            self.stack.extend(node.right().map(|right| (right, depth + 1)));
            self.stack.extend(node.left().map(|left| (left, depth + 1)));
        }

        None
    }
}

impl<T> FusedIterator for LevelNodes<'_, T> {}

/// Breadth-first walk yielding every level of a tree as one `Vec` of keys,
/// starting with the root's level.
pub struct Levels<'a, T> {
    current: Vec<&'a Node<T>>,
}

impl<'a, T> Levels<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            current: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() {
            return None;
        }

        let below = self
            .current
            .iter()
            .flat_map(|&node| node.children())
            .collect();
        let level = mem::replace(&mut self.current, below);

        Some(level.into_iter().map(|node| &node.key).collect())
    }
}

impl<T> FusedIterator for Levels<'_, T> {}
