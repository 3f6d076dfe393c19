use arrayvec::CapacityError;

use crate::cell::{self, RcCell, Ref, WeakCell};

#[derive(Debug)]
struct QueueNode<T> {
    item: T,
    next: Option<RcCell<QueueNode<T>>>,
}

/// FIFO; the head owns the whole chain, the tail is a weak back-reference.
#[derive(Debug)]
pub struct Queue<T> {
    head: Option<RcCell<QueueNode<T>>>,
    tail: Option<WeakCell<QueueNode<T>>>,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn enqueue(&mut self, item: T) {
        let mut node = RcCell::new(QueueNode { item, next: None });
        let weak = node.downgrade();

        match self.tail.as_mut().and_then(WeakCell::upgrade) {
            Some(mut tail) => tail.get_mut().next = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(weak);
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.get_mut().next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        match node.into_inner() {
            Some(node) => Some(node.item),
            None => unreachable!("a detached head node has no other owner"),
        }
    }

    pub fn front(&self) -> Option<Ref<'_, T>> {
        self.head
            .as_ref()
            .map(|node| cell::map_ref(node.get(), |node| &node.item))
    }
}

impl<T> Drop for Queue<T> {
    // unlink front to back; dropping the chain in one go would recurse
    fn drop(&mut self) {
        self.tail = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.get_mut().next.take();
        }
    }
}

/// Fixed-capacity FIFO ring. `head` indexes the oldest element and `len`
/// counts the live ones, so a full ring uses every slot.
#[derive(Debug)]
pub struct ArrayQueue<T, const CAP: usize> {
    items: [Option<T>; CAP],
    head: usize,
    len: usize,
}

impl<T, const CAP: usize> ArrayQueue<T, CAP> {
    pub fn new() -> Self {
        ArrayQueue {
            items: [(); CAP].map(|_| None),
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == CAP
    }

    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn try_enqueue(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(item));
        }

        let tail = (self.head + self.len) % CAP;
        self.items[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = match self.items[self.head].take() {
            Some(item) => item,
            None => unreachable!("live ring slots are always occupied"),
        };
        self.head = (self.head + 1) % CAP;
        self.len -= 1;
        Some(item)
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.items[self.head].as_ref()
    }
}
