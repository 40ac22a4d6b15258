//! An ordered, unbalanced BST holding bare keys. Keys equal to one already in
//! the tree are placed in that node's right subtree, so an in-order walk
//! always yields keys in non-decreasing order.
//!
//! Nodes own their children through `Box`es and store no parent pointer.
//! Queries that need to look "upwards" (like [`OrderedTree::successor`])
//! start at the root and remember the ancestors they pass instead.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{EmptyTreeError, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! assert!(tree.is_empty());
//! assert_eq!(tree.leftmost(), Err(EmptyTreeError));
//!
//! for key in [5, 4, 7, 3, 6, 8] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.leftmost(), Ok(&3));
//! assert_eq!(tree.rightmost(), Ok(&8));
//! assert_eq!(tree.count_leaves(), 3);
//! assert_eq!(tree.count_single_child_nodes(), 1);
//! assert_eq!(tree.count_two_child_nodes(), 2);
//! ```

mod iter;

pub use iter::{Leaves, LevelNodes, Levels, Traverse};

use std::cmp::Ordering;
use std::fmt;

use crate::EmptyTreeError;
use iter::Walk;

type Link<T> = Option<Box<Node<T>>>;

/// The order in which [`OrderedTree::traverse`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. Yields keys in
    /// non-decreasing order.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
}

/// An unbalanced Binary Search Tree of keys. See the [module docs][self] for
/// the ordering rules.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // The default drop glue recurses once per level, which a sorted-insertion
    // chain can turn into a stack overflow. Detach children first instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Post-order finishes both subtrees before their parent, so the copies
        // of a node's children sit on top of `built` when the node comes up.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in Walk::new(self.root.as_deref(), Order::PostOrder) {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Traverse<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A view of the root node, if there is one.
    pub fn root(&self) -> Option<Subtree<'_, T>> {
        self.root.as_deref().map(Subtree::new)
    }

    /// Lazily walks the keys in the given [`Order`]. The walk only borrows the
    /// tree, so it can be started again as often as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let post: Vec<_> = tree.traverse(Order::PostOrder).collect();
    /// assert_eq!(post, [&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(self.root.as_deref(), order)
    }

    /// Shorthand for `traverse(Order::InOrder)`.
    pub fn in_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::InOrder)
    }

    /// Shorthand for `traverse(Order::PreOrder)`.
    pub fn pre_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::PreOrder)
    }

    /// Shorthand for `traverse(Order::PostOrder)`.
    pub fn post_order(&self) -> Traverse<'_, T> {
        self.traverse(Order::PostOrder)
    }

    /// Iterates over the keys in sorted order.
    pub fn iter(&self) -> Traverse<'_, T> {
        self.in_order()
    }

    /// Keys of every leaf node, left to right.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves::new(self.root.as_deref())
    }

    /// Counts the nodes with no children.
    pub fn count_leaves(&self) -> usize {
        self.count_nodes_with(0)
    }

    /// Counts the nodes with exactly one child, on either side.
    pub fn count_single_child_nodes(&self) -> usize {
        self.count_nodes_with(1)
    }

    /// Counts the nodes with both children present.
    pub fn count_two_child_nodes(&self) -> usize {
        self.count_nodes_with(2)
    }

    fn count_nodes_with(&self, children: usize) -> usize {
        self.nodes()
            .filter(|node| node.child_count() == children)
            .count()
    }

    fn nodes(&self) -> Walk<'_, T> {
        Walk::new(self.root.as_deref(), Order::PreOrder)
    }

    /// Number of levels on the longest path from the root to a leaf. An empty
    /// tree has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        let mut stack: Vec<_> = self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }

        height
    }

    /// The "height" obtained by letting an absent child count 0, a leaf count 1
    /// and every other node count the sum of its children. Summing over
    /// children instead of taking the maximum always lands on the number of
    /// leaves, which is why it is kept apart from [`height`][Self::height].
    pub fn leaf_path_sum(&self) -> usize {
        // Sums of finished subtrees; post-order leaves a node's children on top.
        let mut sums: Vec<usize> = Vec::new();
        for node in Walk::new(self.root.as_deref(), Order::PostOrder) {
            let sum = if node.is_leaf() {
                1
            } else {
                let right = if node.right.is_some() { sums.pop() } else { None };
                let left = if node.left.is_some() { sums.pop() } else { None };
                left.unwrap_or(0) + right.unwrap_or(0)
            };
            sums.push(sum);
        }

        sums.pop().unwrap_or(0)
    }

    /// Keys sitting exactly on `level`, left to right. The root is on level 1;
    /// level 0 and levels below the deepest leaf yield nothing.
    pub fn level_nodes(&self, level: usize) -> LevelNodes<'_, T> {
        LevelNodes::new(self.root.as_deref(), level)
    }

    /// Walks the tree breadth-first, one `Vec` of keys per level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 4, 7, 3].into_iter().collect();
    /// let levels: Vec<_> = tree.levels().collect();
    ///
    /// assert_eq!(levels, [vec![&5], vec![&4, &7], vec![&3]]);
    /// ```
    pub fn levels(&self) -> Levels<'_, T> {
        Levels::new(self.root.as_deref())
    }

    /// The smallest key, reached by following left children from the root.
    pub fn leftmost(&self) -> Result<&T, EmptyTreeError> {
        self.root()
            .map(Subtree::leftmost)
            .ok_or(EmptyTreeError)
    }

    /// The largest key, reached by following right children from the root.
    pub fn rightmost(&self) -> Result<&T, EmptyTreeError> {
        self.root()
            .map(Subtree::rightmost)
            .ok_or(EmptyTreeError)
    }

    /// The leftmost key of the root's right subtree, i.e. the key following
    /// the root in sorted order. `Ok(None)` if the root has no right child.
    pub fn root_successor(&self) -> Result<Option<&T>, EmptyTreeError> {
        let root = self.root().ok_or(EmptyTreeError)?;
        Ok(root.right().map(Subtree::leftmost))
    }

    /// The rightmost key of the root's left subtree, i.e. the key preceding
    /// the root in sorted order. `Ok(None)` if the root has no left child.
    pub fn root_predecessor(&self) -> Result<Option<&T>, EmptyTreeError> {
        let root = self.root().ok_or(EmptyTreeError)?;
        Ok(root.left().map(Subtree::rightmost))
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Inserts `key` below the node it sorts to. Keys equal to an existing
    /// key go to its right. The tree is never rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().and_then(|root| root.right()).map(|n| *n.key()), Some(1));
    /// ```
    pub fn insert(&mut self, key: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Finds the node holding `key`. With duplicates, this is the first match
    /// of a pre-order walk: every other equal key lives in its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 4, 7, 3, 6, 8].into_iter().collect();
    ///
    /// let seven = tree.find_node(&7).unwrap();
    /// assert_eq!(seven.left().map(|n| *n.key()), Some(6));
    /// assert!(tree.find_node(&42).is_none());
    /// ```
    pub fn find_node(&self, key: &T) -> Option<Subtree<'_, T>> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(Subtree::new(node)),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Returns `true` if some node holds `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.find_node(key).is_some()
    }

    /// The leftmost key below (or at) the node holding `key`. This only looks
    /// inside that node's own subtree; use [`successor`][Self::successor] or
    /// [`predecessor`][Self::predecessor] for neighbours in sorted order.
    pub fn leftmost_below(&self, key: &T) -> Option<&T> {
        self.find_node(key).map(Subtree::leftmost)
    }

    /// The key visited right after `key` by an in-order walk, or `None` if
    /// `key` is absent or last.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 4, 7, 3, 6, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&5), Some(&6));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, key: &T) -> Option<&T> {
        // Closest ancestor we descended left from.
        let mut after = None;
        let mut link = self.root.as_deref();

        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => {
                    after = Some(&node.key);
                    node.left()
                }
                Ordering::Equal => {
                    return match node.right() {
                        Some(right) => Some(&right.leftmost().key),
                        None => after,
                    }
                }
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// The key visited right before `key` by an in-order walk, or `None` if
    /// `key` is absent or first.
    pub fn predecessor(&self, key: &T) -> Option<&T> {
        // Closest ancestor we descended right from.
        let mut before = None;
        let mut link = self.root.as_deref();

        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => {
                    return match node.left() {
                        Some(left) => Some(&left.rightmost().key),
                        None => before,
                    }
                }
                Ordering::Greater => {
                    before = Some(&node.key);
                    node.right()
                }
            };
        }

        None
    }
}

/// A borrowed view of one node and everything below it.
pub struct Subtree<'a, T> {
    node: &'a Node<T>,
}

impl<T> Clone for Subtree<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Subtree<'_, T> {}

impl<T> fmt::Debug for Subtree<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree")
            .field("key", &self.node.key)
            .field("children", &self.node.child_count())
            .finish()
    }
}

impl<'a, T> Subtree<'a, T> {
    fn new(node: &'a Node<T>) -> Self {
        Self { node }
    }

    /// The key stored in this node.
    pub fn key(self) -> &'a T {
        &self.node.key
    }

    /// The left child, if any.
    pub fn left(self) -> Option<Self> {
        self.node.left().map(Self::new)
    }

    /// The right child, if any.
    pub fn right(self) -> Option<Self> {
        self.node.right().map(Self::new)
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(self) -> bool {
        self.node.is_leaf()
    }

    /// How many children this node has: 0, 1 or 2.
    pub fn child_count(self) -> usize {
        self.node.child_count()
    }

    /// Follows left children from this node until there are none and returns
    /// the key of the last node reached.
    pub fn leftmost(self) -> &'a T {
        &self.node.leftmost().key
    }

    /// Follows right children from this node until there are none and returns
    /// the key of the last node reached.
    pub fn rightmost(self) -> &'a T {
        &self.node.rightmost().key
    }

    /// Walks the keys of this subtree in the given [`Order`].
    pub fn traverse(self, order: Order) -> Traverse<'a, T> {
        Traverse::new(Some(self.node), order)
    }
}

struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The existing children, left first.
    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    fn child_count(&self) -> usize {
        self.children().count()
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}
