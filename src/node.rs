/// An owning link to the remainder of a chain: `None` marks the end.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single chain link: one element plus exclusive ownership of the rest of
/// the chain. Never exposed outside the crate; the list mediates all access.
///
/// Assigning a new link into `next` disposes of the old tail and everything
/// it owned. Removal paths that sever one node therefore call
/// [`take_next`](Node::take_next) first, so the detached node drops alone.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Self {
        Node { value, next }
    }

    /// Severs this node from its tail, returning the tail link.
    ///
    /// Removal paths must call this before letting the node drop: a node that
    /// still owns a live `next` would release the whole remaining chain with
    /// it, not just itself.
    pub(crate) fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}
