use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub use std::cell::{Ref, RefMut};

#[derive(Debug)]
pub(crate) struct RcCell<T> {
    inner: Rc<RefCell<T>>,
}

#[derive(Debug)]
pub(crate) struct WeakCell<T> {
    inner: Weak<RefCell<T>>,
}

impl<T> RcCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub fn get(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    // Methods below may allow to modify reference counts
    // so they must take `&mut self` though the implementation doesn't requires it.

    pub fn get_mut(&mut self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    pub fn shallow_clone(&mut self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn downgrade(&mut self) -> WeakCell<T> {
        WeakCell {
            inner: Rc::downgrade(&self.inner),
        }
    }

    // `None` while other strong handles to the same cell are alive.
    pub fn into_inner(self) -> Option<T> {
        Rc::try_unwrap(self.inner).ok().map(RefCell::into_inner)
    }
}

impl<T> WeakCell<T> {
    pub fn upgrade(&mut self) -> Option<RcCell<T>> {
        self.inner.upgrade().map(|inner| RcCell { inner })
    }
}

pub fn map_ref<T, U, F: FnOnce(&T) -> &U>(orig: Ref<'_, T>, f: F) -> Ref<'_, U> {
    Ref::map(orig, f)
}

pub fn map_mut<T, U, F: FnOnce(&mut T) -> &mut U>(orig: RefMut<'_, T>, f: F) -> RefMut<'_, U> {
    RefMut::map(orig, f)
}
