//! A generic singly-linked list with indexed access, insertion and removal at
//! arbitrary positions.
//!
//! [`SinglyLinkedList<T>`] owns its head node exclusively and every node owns
//! the next one, so ownership runs in a straight, cycle-free line that ends in
//! `None`. The chain shape makes `len()` O(1) and everything positional O(n):
//! reaching position `p` always means walking `p` links from the head.
//!
//! Indexed reads accept Python-style negative indices (`-1` is the last
//! element). Fallible operations return [`ListError`] and check their
//! arguments before touching the chain, so a failed call never leaves the
//! list partially mutated.
//!
//! The list performs no synchronization. Element borrows returned by
//! [`at`](SinglyLinkedList::at) are tied to the list borrow, so using one
//! across a structural mutation is a compile error, not undefined behavior.
//! To share a list across threads, wrap the whole structure in external
//! synchronization such as a `Mutex`.
//!
//! # Examples
//!
//! ```
//! use forward_list::{ListError, SinglyLinkedList};
//!
//! let mut list: SinglyLinkedList<i32> = (1..=5).collect();
//! list.push_front(0);
//! list.remove_at(3)?;
//!
//! assert_eq!(list.len(), 5);
//! assert_eq!(*list.at(-1)?, 5);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 4, 5]);
//!
//! let mut empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
//! assert_eq!(empty.pop_front(), Err(ListError::Empty));
//! # Ok::<(), ListError>(())
//! ```

mod error;
mod list;
mod node;

pub use error::ListError;
pub use list::{IntoIter, Iter, IterMut, SinglyLinkedList};
