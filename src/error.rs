use thiserror::Error;

/// Errors reported by [`SinglyLinkedList`](crate::SinglyLinkedList) operations.
///
/// Every failure is detected before any mutation begins, so a returned error
/// guarantees the list is exactly as it was before the call.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ListError {
    /// An index or position argument was outside its valid range.
    /// Carries the offending index and the list length at the time of the call.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// A front or back removal was requested on an empty list.
    #[error("cannot remove an element from an empty list")]
    Empty,
}
