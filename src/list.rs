use crate::error::ListError;
use crate::node::{Link, Node};

/// A generic singly-linked list.
///
/// The list owns its head node exclusively; every node owns the next one, and
/// the chain ends in `None`. All positional operations walk the chain from the
/// head, so indexed access, positional insertion and positional removal are
/// O(n). `len` is kept in step with every structural mutation and is the
/// single source of truth for bounds checks.
///
/// # Examples
///
/// ```
/// use forward_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back("a");
/// list.push_back("c");
/// list.insert_at(1, "b")?;
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(*list.at(1)?, "b");
/// assert_eq!(*list.at(-1)?, "c");
/// # Ok::<(), forward_list::ListError>(())
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        SinglyLinkedList { head: None, len: 0 }
    }

    /// Creates a list seeded with a single element.
    pub fn with_value(value: T) -> Self {
        SinglyLinkedList {
            head: Some(Box::new(Node::new(value, None))),
            len: 1,
        }
    }

    /// Returns the number of elements in the list. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Negative indices count from the back, Python style: `-1` is the last
    /// element, `-len` the first. Any index outside `[-len, len)` fails with
    /// [`ListError::IndexOutOfRange`].
    ///
    /// The returned borrow is tied to the list, so the compiler rejects any
    /// use of it across a later structural mutation.
    pub fn at(&self, index: isize) -> Result<&T, ListError> {
        let pos = self.resolve_read_index(index)?;
        self.iter()
            .nth(pos)
            .ok_or(ListError::IndexOutOfRange { index, len: self.len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Index interpretation matches [`at`](Self::at).
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T, ListError> {
        let pos = self.resolve_read_index(index)?;
        let len = self.len;
        self.iter_mut()
            .nth(pos)
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Returns a reference to the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element, or `None` if the list is
    /// empty. O(n): walks the whole chain.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns a mutable reference to the last element. O(n).
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().last()
    }

    /// Prepends `value`: the new node takes the current head as its tail and
    /// becomes the new head. O(1), infallible.
    pub fn push_front(&mut self, value: T) {
        self.splice_in(0, value);
    }

    /// Appends `value` after the current tail, found by full traversal. On an
    /// empty list this is the same as [`push_front`](Self::push_front). O(n),
    /// infallible.
    pub fn push_back(&mut self, value: T) {
        self.splice_in(self.len, value);
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index` must satisfy `0 <= index <= len`: `0` prepends, `len` appends,
    /// anything else splices a new node between the node before `index` and
    /// its current next. An invalid position fails with
    /// [`ListError::IndexOutOfRange`] before anything is rewired; `value` is
    /// dropped and the list is unchanged.
    pub fn insert_at(&mut self, index: isize, value: T) -> Result<(), ListError> {
        if index < 0 || index as usize > self.len {
            return Err(ListError::IndexOutOfRange { index, len: self.len });
        }
        self.splice_in(index as usize, value);
        Ok(())
    }

    /// Removes and returns the first element.
    ///
    /// Fails with [`ListError::Empty`] on an empty list. The detached node has
    /// its tail link handed to the list head before it drops, so exactly one
    /// node is released.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.detach(0).ok_or(ListError::Empty)
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`ListError::Empty`] on an empty list. O(n): walks to the
    /// last link. Removing the sole element leaves the list empty with no
    /// head.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let last = self.len - 1;
        self.detach(last).ok_or(ListError::Empty)
    }

    /// Removes and returns the element at position `index`.
    ///
    /// `index` must satisfy `0 <= index < len`, otherwise the call fails with
    /// [`ListError::IndexOutOfRange`] and the list is unchanged. The owning
    /// link before `index` is rewired to skip exactly one node; only that
    /// severed node is released.
    pub fn remove_at(&mut self, index: isize) -> Result<T, ListError> {
        if index < 0 || index as usize >= self.len {
            return Err(ListError::IndexOutOfRange { index, len: self.len });
        }
        self.detach(index as usize)
            .ok_or(ListError::IndexOutOfRange { index, len: self.len })
    }

    /// Releases every node, leaving the list empty.
    ///
    /// Each node has its tail link hopped out before it drops; a node that
    /// still owned its tail would recurse through the entire remaining chain
    /// on drop, which overflows the call stack on long lists.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.take_next();
        }
        self.len = 0;
    }

    /// Returns a borrowing iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Returns a mutably borrowing iterator over the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Normalizes a read index (negative counts from the back) into `[0, len)`.
    fn resolve_read_index(&self, index: isize) -> Result<usize, ListError> {
        let len = self.len as isize;
        let resolved = if index < 0 {
            index.checked_add(len)
        } else {
            Some(index)
        };
        match resolved {
            Some(pos) if (0..len).contains(&pos) => Ok(pos as usize),
            _ => Err(ListError::IndexOutOfRange { index, len: self.len }),
        }
    }

    /// Walks to the owning link in front of position `pos`: the head link for
    /// `pos == 0`, the tail's next link for `pos == len`. Callers bounds-check
    /// `pos` first.
    fn link_at(&mut self, pos: usize) -> &mut Link<T> {
        debug_assert!(pos <= self.len);
        let mut link = &mut self.head;
        for _ in 0..pos {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Splices a new node into the owning link at `pos`, pushing whatever the
    /// link held down to be the new node's tail.
    fn splice_in(&mut self, pos: usize, value: T) {
        let link = self.link_at(pos);
        let tail = link.take();
        *link = Some(Box::new(Node::new(value, tail)));
        self.len += 1;
    }

    /// Unhooks the node at `pos` by repairing the owning link around it, then
    /// returns its element. The node's own tail is taken out before the node
    /// drops, so the rest of the chain is never released with it. Returns
    /// `None` when `pos` has no node, which only happens on an empty list.
    fn detach(&mut self, pos: usize) -> Option<T> {
        let link = self.link_at(pos);
        let mut node = link.take()?;
        *link = node.take_next();
        self.len -= 1;
        Some(node.into_value())
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    /// Appends every element in order through a single tail cursor, so
    /// extending by n elements costs one traversal plus n links rather than n
    /// full traversals.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut link = self.link_at(self.len);
        for value in iter {
            let node = link.insert(Box::new(Node::new(value, None)));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a [`SinglyLinkedList`], front to back.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> std::iter::FusedIterator for IterMut<'_, T> {}

/// Consuming iterator over a [`SinglyLinkedList`], draining from the front.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
