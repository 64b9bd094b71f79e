use alloc::sync::Arc;

use super::error::ListError;
use super::node::Node;

/// Where the cursor currently sits.
enum State<T> {
    /// Before the first element; `advance` has not been called since creation
    /// or the last `reset`.
    Start,
    /// On a real element of the chain.
    Positioned(Arc<Node<T>>),
    /// Past the last element; `advance` already reported exhaustion.
    End,
}

/// A forward-only, restartable traversal handle.
///
/// The cursor snapshots the head at creation, so a `clear` on the list never
/// truncates an enumeration already in progress. From its current position it
/// follows live successor links, so writer activity ahead of it — appends and
/// removals beyond the node it sits on — remains visible. The cursor owns its
/// snapshot and may outlive the list.
pub struct Cursor<T> {
    head: Option<Arc<Node<T>>>,
    state: State<T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(head: Option<Arc<Node<T>>>) -> Self {
        Self {
            head,
            state: State::Start,
        }
    }

    /// Returns to the position before the first element of the snapshot.
    pub fn reset(&mut self) {
        self.state = State::Start;
    }

    /// Moves to the next element, reporting whether one was reached.
    ///
    /// Fails with [`ListError::InvalidCursorState`] when the previous call
    /// already reported exhaustion; a second call past the end is an error,
    /// not a no-op.
    pub fn advance(&mut self) -> Result<bool, ListError> {
        let next = match &self.state {
            State::Start => self.head.clone(),
            State::Positioned(node) => node.next(),
            State::End => return Err(ListError::InvalidCursorState),
        };
        match next {
            Some(node) => {
                self.state = State::Positioned(node);
                Ok(true)
            }
            None => {
                self.state = State::End;
                Ok(false)
            }
        }
    }

    /// The value of the element the cursor sits on.
    ///
    /// Fails with [`ListError::InvalidCursorState`] before the first
    /// `advance` and after exhaustion.
    pub fn current(&self) -> Result<&T, ListError> {
        match &self.state {
            State::Positioned(node) => Ok(node.value()),
            State::Start | State::End => Err(ListError::InvalidCursorState),
        }
    }
}
