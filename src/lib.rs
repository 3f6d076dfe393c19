use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

mod cell;
mod error;
mod iter;
mod list;
mod node;
mod queue;
mod stack;

pub use arrayvec::CapacityError;

pub use error::{DuplicateKeyError, KeyNotFoundError};
pub use iter::InOrder;
pub use list::{DoublyIntoIter, DoublyLinkedList, SinglyIter, SinglyLinkedList};
pub use queue::{ArrayQueue, Queue};
pub use stack::{ArrayStack, Stack};

use node::{AvlNode, Link};

/// Set of totally-ordered keys kept in an AVL tree: every node's subtrees
/// differ in height by at most one, so lookups, inserts and deletes all stay
/// logarithmic.
pub struct AvlTree<K> {
    root: Link<K>,
    count: usize,
}

impl<K: Ord> AvlTree<K> {
    #[inline]
    pub fn new() -> Self {
        AvlTree {
            root: None,
            count: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Cached height of the root. Returns `0` for the empty tree, which makes
    /// it indistinguishable from a single-node tree by height alone; use
    /// [`is_empty`](Self::is_empty) to tell the two apart.
    #[inline]
    pub fn height(&self) -> i32 {
        self.root.as_ref().map_or(0, |root| root.height)
    }

    #[inline]
    pub fn search<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = &self.root;
        while let Some(node) = cursor {
            cursor = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Fails on a key that is already stored; the tree is untouched then.
    #[inline]
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKeyError> {
        let res = match self.root.take() {
            None => {
                self.root = Some(AvlNode::new(key));
                Ok(())
            }
            Some(root) => {
                let (root, res) = root.insert(key);
                self.root = Some(root);
                res
            }
        };

        if res.is_ok() {
            self.count += 1;
        }

        res
    }

    /// Fails on a key that is not stored; the tree is untouched then.
    #[inline]
    pub fn delete<Q>(&mut self, key: &Q) -> Result<(), KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let res = match self.root.take() {
            None => Err(KeyNotFoundError),
            Some(root) => {
                let (root, res) = root.delete(key);
                self.root = root;
                res
            }
        };

        if res.is_ok() {
            self.count -= 1;
        }

        res
    }

    /// Ascending traversal over the stored keys; restartable at will.
    #[inline]
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(&self.root, self.count)
    }

    /// Verifies the balance invariant at the root, or over the whole tree
    /// when `recursive` is set. Diagnostic only.
    #[inline]
    pub fn is_balanced(&self, recursive: bool) -> bool {
        self.root
            .as_ref()
            .map_or(true, |root| root.is_balanced(recursive))
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        for key in iter {
            // repeated keys keep the first occurrence
            let _ = tree.insert(key);
        }
        tree
    }
}

impl<'a, K: Ord> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> InOrder<'a, K> {
        self.in_order()
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(InOrder::new(&self.root, self.count))
            .finish()
    }
}


#[test]
fn std_compare() {
    let mut m1 = std::collections::BTreeSet::new();
    let mut m2 = AvlTree::new();

    let nums: Vec<u16> = std::iter::repeat_with(rand::random)
        .take(1024 * 1024)
        .collect();

    for &n in &nums {
        assert_eq!(m1.insert(n), m2.insert(n).is_ok());
    }

    assert_eq!(m1.len(), m2.len());
    assert!(m2.is_balanced(true));

    for &n in &nums {
        assert_eq!(m1.get(&n), m2.search(&n));
        assert_eq!(m1.get(&n.wrapping_add(1)), m2.search(&n.wrapping_add(1)));
    }
    for &n in &nums {
        assert_eq!(m1.remove(&n), m2.delete(&n).is_ok());
    }
    assert!(m2.is_empty());
}
