use arrayvec::{ArrayVec, CapacityError};

#[derive(Debug)]
struct StackNode<T> {
    item: T,
    next: Option<Box<StackNode<T>>>,
}

/// LIFO over a chain of owned nodes.
#[derive(Debug)]
pub struct Stack<T> {
    top: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn push(&mut self, item: T) {
        self.top = Some(Box::new(StackNode {
            item,
            next: self.top.take(),
        }));
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        self.top = node.next;
        self.len -= 1;
        Some(node.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.item)
    }
}

impl<T> Drop for Stack<T> {
    // the derived drop would recurse once per node
    fn drop(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

/// Fixed-capacity LIFO; a push against a full stack hands the item back.
#[derive(Debug)]
pub struct ArrayStack<T, const CAP: usize> {
    items: ArrayVec<T, CAP>,
}

impl<T, const CAP: usize> ArrayStack<T, CAP> {
    pub fn new() -> Self {
        ArrayStack {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn capacity(&self) -> usize {
        CAP
    }

    pub fn try_push(&mut self, item: T) -> Result<(), CapacityError<T>> {
        self.items.try_push(item)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}
