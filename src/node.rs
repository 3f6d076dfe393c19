use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::{DuplicateKeyError, KeyNotFoundError};

pub(crate) type Link<K> = Option<Box<AvlNode<K>>>;

#[derive(Debug)]
pub(crate) struct AvlNode<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// An absent child sits one level below a leaf.
fn height<K>(link: &Link<K>) -> i32 {
    match link {
        Some(node) => node.height,
        None => -1,
    }
}

impl<K> AvlNode<K> {
    pub(crate) fn new(key: K) -> Box<Self> {
        Box::new(AvlNode {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }

    fn child(&self, side: Side) -> &Link<K> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    // `toward` is the side being promoted to; the pivot comes from the
    // opposite side and must exist.
    fn rotate(mut self: Box<Self>, toward: Side) -> Box<Self> {
        let against = toward.opposite();
        let mut pivot = match self.child_mut(against).take() {
            Some(pivot) => pivot,
            None => unreachable!("rotation pivots on a child of the demoted side"),
        };

        *self.child_mut(against) = pivot.child_mut(toward).take();
        self.update_height();
        *pivot.child_mut(toward) = Some(self);
        pivot.update_height();

        pivot
    }

    // Restores the balance invariant at this node, assuming both subtrees
    // already satisfy it and differ in height by at most 2.
    fn fix_balance(mut self: Box<Self>) -> Box<Self> {
        self.update_height();

        let (left, right) = (height(&self.left), height(&self.right));
        if (left - right).abs() <= 1 {
            return self;
        }

        let heavy = if left > right { Side::Left } else { Side::Right };
        let light = heavy.opposite();

        let child = match self.child_mut(heavy).take() {
            Some(child) => child,
            None => unreachable!("an imbalance implies a child on the heavy side"),
        };

        // zig-zag: the heavy child leans toward the light side and must be
        // straightened out before the main rotation
        let child = if height(child.child(light)) > height(child.child(heavy)) {
            child.rotate(heavy)
        } else {
            child
        };
        *self.child_mut(heavy) = Some(child);

        self.rotate(light)
    }

    pub(crate) fn is_balanced(&self, recursive: bool) -> bool {
        let balanced = (height(&self.left) - height(&self.right)).abs() <= 1;
        if !balanced || !recursive {
            return balanced;
        }

        [&self.left, &self.right]
            .into_iter()
            .flatten()
            .all(|child| child.is_balanced(true))
    }
}

impl<K: Ord> AvlNode<K> {
    pub(crate) fn insert(
        mut self: Box<Self>,
        key: K,
    ) -> (Box<Self>, Result<(), DuplicateKeyError>) {
        let side = match key.cmp(&self.key) {
            Ordering::Equal => return (self, Err(DuplicateKeyError)),
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };

        let res = match self.child_mut(side).take() {
            None => {
                *self.child_mut(side) = Some(AvlNode::new(key));
                Ok(())
            }
            Some(child) => {
                let (child, res) = child.insert(key);
                *self.child_mut(side) = Some(child);
                res
            }
        };

        match res {
            Ok(()) => (self.fix_balance(), Ok(())),
            Err(err) => (self, Err(err)),
        }
    }

    pub(crate) fn delete<Q>(mut self: Box<Self>, key: &Q) -> (Link<K>, Result<(), KeyNotFoundError>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let side = match key.cmp(self.key.borrow()) {
            Ordering::Equal => return (self.unlink(), Ok(())),
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };

        let res = match self.child_mut(side).take() {
            None => Err(KeyNotFoundError),
            Some(child) => {
                let (child, res) = child.delete(key);
                *self.child_mut(side) = child;
                res
            }
        };

        match res {
            Ok(()) => (Some(self.fix_balance()), Ok(())),
            Err(err) => (Some(self), Err(err)),
        }
    }

    // Removes this node from the tree, handing back whatever takes its place.
    // A node without a right child is replaced by its left child; otherwise
    // the in-order successor is pulled out of the right subtree and promoted.
    fn unlink(mut self: Box<Self>) -> Link<K> {
        let right = match self.right.take() {
            None => return self.left.take(),
            Some(right) => right,
        };

        let (mut successor, rest) = right.extract_leftmost();
        successor.left = self.left.take();
        successor.right = rest;
        Some(successor.fix_balance())
    }

    // Returns the smallest node of this subtree, detached, together with the
    // rebalanced remainder.
    fn extract_leftmost(mut self: Box<Self>) -> (Box<Self>, Link<K>) {
        match self.left.take() {
            None => {
                let rest = self.right.take();
                (self, rest)
            }
            Some(left) => {
                let (leftmost, rest) = left.extract_leftmost();
                self.left = rest;
                (leftmost, Some(self.fix_balance()))
            }
        }
    }
}
