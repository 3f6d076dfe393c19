use crate::cell::{self, RcCell, Ref, RefMut, WeakCell};

#[derive(Debug)]
struct SinglyNode<T> {
    value: T,
    next: Option<Box<SinglyNode<T>>>,
}

/// Singly-linked chain of owned nodes with positional access.
#[derive(Debug)]
pub struct SinglyLinkedList<T> {
    head: Option<Box<SinglyNode<T>>>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(SinglyNode {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(SinglyNode { value, next: None }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur?.next.as_deref();
        }
        cur.map(|node| &node.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..index {
            cur = cur?.next.as_deref_mut();
        }
        cur.map(|node| &mut node.value)
    }

    // the link that points at position `index`
    fn link_at(&mut self, index: usize) -> &mut Option<Box<SinglyNode<T>>> {
        let mut cur = &mut self.head;
        for _ in 0..index {
            cur = match cur {
                Some(node) => &mut node.next,
                None => unreachable!("callers bound the index by len"),
            };
        }
        cur
    }

    /// Inserts at `index`, shifting everything behind it toward the back.
    /// An index past the end hands the value back.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        if index > self.len {
            return Err(value);
        }

        let link = self.link_at(index);
        *link = Some(Box::new(SinglyNode {
            value,
            next: link.take(),
        }));
        self.len += 1;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let link = self.link_at(index);
        let node = match link.take() {
            Some(node) => node,
            None => unreachable!("every index below len has a node"),
        };
        *link = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn iter(&self) -> SinglyIter<'_, T> {
        SinglyIter {
            cur: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    // the derived drop would recurse once per node
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

#[derive(Debug)]
pub struct SinglyIter<'a, T> {
    cur: Option<&'a SinglyNode<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for SinglyIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cur?;
        self.cur = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for SinglyIter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = SinglyIter<'a, T>;

    fn into_iter(self) -> SinglyIter<'a, T> {
        self.iter()
    }
}

#[derive(Debug)]
struct DoublyNode<T> {
    value: T,
    next: Option<RcCell<DoublyNode<T>>>,
    prev: Option<WeakCell<DoublyNode<T>>>,
}

/// Doubly-linked list. Forward links own the nodes, `prev` links are weak,
/// and the list keeps a second strong handle on the tail so both ends are
/// reachable in O(1).
#[derive(Debug)]
pub struct DoublyLinkedList<T> {
    head: Option<RcCell<DoublyNode<T>>>,
    tail: Option<RcCell<DoublyNode<T>>>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T) {
        let mut node = RcCell::new(DoublyNode {
            value,
            next: None,
            prev: None,
        });

        match self.head.take() {
            Some(mut old) => {
                let weak = node.downgrade();
                old.get_mut().prev = Some(weak);
                node.get_mut().next = Some(old);
            }
            None => self.tail = Some(node.shallow_clone()),
        }

        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let mut node = RcCell::new(DoublyNode {
            value,
            next: None,
            prev: None,
        });

        match self.tail.take() {
            Some(mut old) => {
                let weak = old.downgrade();
                node.get_mut().prev = Some(weak);
                old.get_mut().next = Some(node.shallow_clone());
            }
            None => self.head = Some(node.shallow_clone()),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let mut node = self.head.take()?;

        match node.get_mut().next.take() {
            Some(mut next) => {
                next.get_mut().prev = None;
                self.head = Some(next);
            }
            None => self.tail = None,
        }
        self.len -= 1;

        match node.into_inner() {
            Some(node) => Some(node.value),
            None => unreachable!("a node detached from both ends has no other owner"),
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let mut node = self.tail.take()?;

        match node.get_mut().prev.take() {
            Some(mut weak) => {
                let mut prev = match weak.upgrade() {
                    Some(prev) => prev,
                    None => unreachable!("interior nodes are kept alive by the forward chain"),
                };
                prev.get_mut().next = None;
                self.tail = Some(prev);
            }
            None => self.head = None,
        }
        self.len -= 1;

        match node.into_inner() {
            Some(node) => Some(node.value),
            None => unreachable!("a node detached from both ends has no other owner"),
        }
    }

    pub fn front(&self) -> Option<Ref<'_, T>> {
        self.head
            .as_ref()
            .map(|node| cell::map_ref(node.get(), |node| &node.value))
    }

    pub fn back(&self) -> Option<Ref<'_, T>> {
        self.tail
            .as_ref()
            .map(|node| cell::map_ref(node.get(), |node| &node.value))
    }

    pub fn front_mut(&mut self) -> Option<RefMut<'_, T>> {
        self.head
            .as_mut()
            .map(|node| cell::map_mut(node.get_mut(), |node| &mut node.value))
    }

    pub fn back_mut(&mut self) -> Option<RefMut<'_, T>> {
        self.tail
            .as_mut()
            .map(|node| cell::map_mut(node.get_mut(), |node| &mut node.value))
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    // unlink front to back; dropping the head chain in one go would recurse
    fn drop(&mut self) {
        self.tail = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.get_mut().next.take();
        }
    }
}

#[derive(Debug)]
pub struct DoublyIntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for DoublyIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for DoublyIntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = DoublyIntoIter<T>;

    fn into_iter(self) -> DoublyIntoIter<T> {
        DoublyIntoIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singly_appends_in_order() {
        let mut lst = SinglyLinkedList::new();
        for n in 0..100 {
            assert_eq!(lst.len(), n);
            lst.push_back(n);
            assert_eq!(lst.len(), n + 1);
        }

        let values: Vec<usize> = lst.iter().copied().collect();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn singly_front_operations_reverse() {
        let mut lst = SinglyLinkedList::new();
        lst.push_front(1);
        lst.push_front(2);
        lst.push_front(3);

        assert_eq!(lst.pop_front(), Some(3));
        assert_eq!(lst.pop_front(), Some(2));
        assert_eq!(lst.pop_front(), Some(1));
        assert_eq!(lst.pop_front(), None);
        assert!(lst.is_empty());
    }

    #[test]
    fn singly_positional_access() {
        let mut lst = SinglyLinkedList::new();
        for n in 0..5 {
            lst.push_back(n);
        }

        assert_eq!(lst.get(0), Some(&0));
        assert_eq!(lst.get(4), Some(&4));
        assert_eq!(lst.get(5), None);

        *lst.get_mut(2).unwrap() = 20;
        assert_eq!(lst.get(2), Some(&20));
    }

    #[test]
    fn singly_insert_shifts_toward_the_back() {
        let mut lst = SinglyLinkedList::new();
        lst.push_back('a');
        lst.push_back('c');

        lst.insert(1, 'b').unwrap();
        lst.insert(3, 'd').unwrap();
        lst.insert(0, 'z').unwrap();

        let values: Vec<char> = lst.iter().copied().collect();
        assert_eq!(values, vec!['z', 'a', 'b', 'c', 'd']);

        // one past the end is a valid append position; further is not
        assert_eq!(lst.insert(6, 'x'), Err('x'));
        assert_eq!(lst.len(), 5);
    }

    #[test]
    fn singly_remove_closes_the_gap() {
        let mut lst = SinglyLinkedList::new();
        for n in 0..5 {
            lst.push_back(n);
        }

        assert_eq!(lst.remove(2), Some(2));
        assert_eq!(lst.remove(0), Some(0));
        assert_eq!(lst.remove(10), None);

        let values: Vec<i32> = lst.iter().copied().collect();
        assert_eq!(values, vec![1, 3, 4]);
        assert_eq!(lst.len(), 3);
    }

    #[test]
    fn doubly_appends_in_order() {
        let mut lst = DoublyLinkedList::new();
        for n in 0..100 {
            assert_eq!(lst.len(), n);
            lst.push_back(n);
            assert_eq!(lst.len(), n + 1);
        }

        let values: Vec<usize> = lst.into_iter().collect();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn doubly_works_from_both_ends() {
        let mut lst = DoublyLinkedList::new();
        lst.push_back(2);
        lst.push_front(1);
        lst.push_back(3);

        assert_eq!(*lst.front().unwrap(), 1);
        assert_eq!(*lst.back().unwrap(), 3);

        assert_eq!(lst.pop_back(), Some(3));
        assert_eq!(lst.pop_front(), Some(1));
        assert_eq!(lst.pop_back(), Some(2));
        assert_eq!(lst.pop_back(), None);
        assert!(lst.is_empty());
    }

    #[test]
    fn doubly_guarded_mutation() {
        let mut lst = DoublyLinkedList::new();
        lst.push_back(String::from("front"));
        lst.push_back(String::from("back"));

        lst.front_mut().unwrap().push_str("-edited");
        lst.back_mut().unwrap().push_str("-edited");

        assert_eq!(*lst.front().unwrap(), "front-edited");
        assert_eq!(*lst.back().unwrap(), "back-edited");
    }

    #[test]
    fn doubly_drains_to_empty_and_refills() {
        let mut lst = DoublyLinkedList::new();
        lst.push_front(1);
        assert_eq!(lst.pop_back(), Some(1));
        assert!(lst.is_empty());

        lst.push_back(2);
        lst.push_front(3);
        let values: Vec<i32> = lst.into_iter().collect();
        assert_eq!(values, vec![3, 2]);
    }
}
