use core::fmt;

use alloc::sync::Arc;
use arc_swap::ArcSwapOption;

/// A node in an RCU linked list.
///
/// The value is fixed at construction. The successor link is the only mutable
/// part, written by the list's single writer and read by any thread; once a
/// node has been unlinked its successor is never rewritten again.
pub struct Node<T> {
    value: T,
    next: ArcSwapOption<Node<T>>,
}

impl<T> Node<T> {
    /// Creates a detached node with no successor.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: ArcSwapOption::const_empty(),
        }
    }

    /// Creates a node already wired to its successor.
    ///
    /// The link is in place before any other location can reference the node,
    /// so a reader that reaches it always finds it complete.
    pub fn with_next(value: T, next: Option<Arc<Node<T>>>) -> Self {
        Self {
            value,
            next: ArcSwapOption::new(next),
        }
    }

    /// The node's value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The currently published successor, if any.
    pub fn next(&self) -> Option<Arc<Node<T>>> {
        self.next.load_full()
    }

    /// Publishes a new successor. Release-ordered; writer only.
    pub(crate) fn store_next(&self, next: Option<Arc<Node<T>>>) {
        self.next.store(next);
    }

    /// Consumes the node and takes its successor out of the link cell.
    pub(crate) fn into_next(self) -> Option<Arc<Node<T>>> {
        self.next.into_inner()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}
