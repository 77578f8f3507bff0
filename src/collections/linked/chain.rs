use std::iter::FusedIterator;
use std::mem;

/// A singly linked chain of owned nodes. This is the shared topology behind every singly linked
/// container; it knows nothing about kinds, which are checked by the containers built on top of it.
///
/// Each node is exclusively owned by the link before it, so dropping the chain releases every
/// node. The length is tracked on every mutation.
pub(crate) struct Chain<T> {
    head: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Chain<T> {
    pub const fn new() -> Chain<T> {
        Chain {
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Appends `value` after the last node. This walks the whole chain.
    pub fn push_back(&mut self, value: T) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`, returning it back if `index` is
    /// greater than the length of the chain.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), T> {
        if index > self.len {
            return Err(value);
        }

        let slot = self.slot_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` in front of the first element matching `predicate`, or at the back if no
    /// element matches.
    pub fn insert_before(&mut self, value: T, mut predicate: impl FnMut(&T) -> bool) {
        let mut slot = &mut self.head;
        while slot.as_ref().is_some_and(|node| !predicate(&node.value)) {
            if let Some(node) = slot {
                slot = &mut node.next;
            }
        }

        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let slot = self.slot_at(index);
        let Node { value, next } = *slot.take()?;
        *slot = next;
        self.len -= 1;
        Some(value)
    }

    /// Removes the first element matching `predicate`.
    pub fn remove_first(&mut self, predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let index = self.position(predicate)?;
        self.remove_at(index)
    }

    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(predicate)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Reverses the chain in place, relinking each node once.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = mem::replace(&mut node.next, prev);
            prev = Some(node);
        }

        self.head = prev;
    }

    pub fn clear(&mut self) {
        let mut curr = self.head.take();
        // Unlink iteratively, dropping a long chain recursively could overflow the stack.
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            len: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            len: self.len,
        }
    }

    /// Returns the link that position `index` occupies. `index` must be at most `len`.
    fn slot_at(&mut self, index: usize) -> &mut Link<T> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            match slot {
                Some(node) => slot = &mut node.next,
                None => break,
            }
        }
        slot
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        let mut chain = Chain::new();
        // Build back to front with pushes at the head, pushing at the back would be quadratic.
        let mut values: Vec<&T> = self.iter().collect();
        while let Some(value) = values.pop() {
            chain.push_front(value.clone());
        }
        chain
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Chain::new();
        for item in iter {
            chain.push_front(item);
        }
        chain.reverse();
        chain
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            chain: self,
        }
    }
}

pub(crate) struct IntoIter<T> {
    chain: Chain<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

pub(crate) struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.len -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            len: self.len,
        }
    }
}

pub(crate) struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.len -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
