use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::sync::Arc;
use arc_swap::ArcSwapOption;
use crossbeam_utils::CachePadded;

use super::cursor::Cursor;
use super::error::ListError;
use super::node::Node;

/// A singly-linked list with lock-free reads and a single logical writer.
///
/// Reads — [`front`](RcuList::front), the scans, [`iter`](RcuList::iter),
/// [`cursor`](RcuList::cursor) — run wait-free against whatever chain was
/// published when they loaded the relevant link, and may run on any number of
/// threads at once. Mutators assume a single logical writer; see the
/// [module docs](super).
pub struct RcuList<T> {
    /// The single mutation point. Repointing it is the only way to change
    /// which chain is current.
    head: CachePadded<ArcSwapOption<Node<T>>>,
    /// Element count, maintained by the writer. Advisory while a mutation is
    /// in flight, exact when the writer is quiescent.
    len: AtomicUsize,
}

impl<T> RcuList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self {
            head: CachePadded::new(ArcSwapOption::const_empty()),
            len: AtomicUsize::new(0),
        }
    }

    /// Returns the current head node, if any. O(1).
    pub fn front(&self) -> Option<Arc<Node<T>>> {
        self.head.load_full()
    }

    /// Walks the chain to the tail node. O(n).
    pub fn back(&self) -> Option<Arc<Node<T>>> {
        self.iter().last()
    }

    /// Prepends a value and returns its node.
    ///
    /// The node is wired to the captured head before the head is repointed in
    /// a single release store, so readers see either the old chain or the new
    /// one. O(1).
    pub fn push_front(&self, value: T) -> Arc<Node<T>> {
        let node = Arc::new(Node::with_next(value, self.head.load_full()));
        self.head.store(Some(Arc::clone(&node)));
        self.len.fetch_add(1, Ordering::Relaxed);
        node
    }

    /// Appends a value and returns its node. O(n) for the tail walk.
    pub fn push_back(&self, value: T) -> Arc<Node<T>> {
        match self.back() {
            Some(tail) => self.link_after(&tail, value),
            None => self.push_front(value),
        }
    }

    /// Inserts a value after `node` and returns the new node.
    ///
    /// Fails with [`ListError::NullArgument`] when no node handle is given;
    /// pass the result of a lookup such as [`find`](RcuList::find) directly.
    /// O(1).
    pub fn insert_after(
        &self,
        node: Option<&Arc<Node<T>>>,
        value: T,
    ) -> Result<Arc<Node<T>>, ListError> {
        let node = node.ok_or(ListError::NullArgument)?;
        Ok(self.link_after(node, value))
    }

    /// Appends every value in input order.
    ///
    /// The tail is tracked across insertions, so each element after the
    /// initial tail walk links in O(1).
    pub fn extend_back<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = self.back();
        for value in values {
            let node = match &tail {
                Some(tail) => self.link_after(tail, value),
                None => self.push_front(value),
            };
            tail = Some(node);
        }
    }

    /// Appends a slice of values; a no-op on empty input.
    pub fn extend_from_slice(&self, values: &[T])
    where
        T: Clone,
    {
        if values.is_empty() {
            return;
        }
        self.extend_back(values.iter().cloned());
    }

    /// Empties the list with one release store of the head.
    ///
    /// Readers already mid-traversal keep the pre-clear chain and run it to
    /// completion.
    pub fn clear(&self) {
        let mut orphaned = self.head.swap(None);
        self.len.store(0, Ordering::Relaxed);
        // Tear the orphaned chain down link by link; dropping it through
        // nested `Arc`s would recurse once per node.
        while let Some(node) = orphaned {
            match Arc::try_unwrap(node) {
                Ok(node) => orphaned = node.into_next(),
                // A reader still references this node, and with it the rest
                // of the chain. The chain is now the reader's to keep alive.
                Err(_) => break,
            }
        }
    }

    /// Whether the chain currently holds a node equal to `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|node| node.value() == value)
    }

    /// Returns the first node whose value equals `value`, or `None`. O(n).
    pub fn find(&self, value: &T) -> Option<Arc<Node<T>>>
    where
        T: PartialEq,
    {
        self.find_first(|candidate| candidate == value)
    }

    /// Returns the first node satisfying `predicate`, or `None`. O(n).
    pub fn find_first<P>(&self, mut predicate: P) -> Option<Arc<Node<T>>>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|node| predicate(node.value()))
    }

    /// Removes the first node equal to `value`.
    ///
    /// Returns whether a removal occurred; absence is an expected outcome,
    /// not an error.
    pub fn remove(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some_and(|node| self.unlink(&node))
    }

    /// Removes `node` from the chain.
    ///
    /// Fails with [`ListError::NullArgument`] when no node handle is given.
    /// Returns `Ok(false)` when the list is empty or `node` is not in the
    /// current chain, including when it was already removed. The head case is
    /// O(1); otherwise the predecessor is found by walking from the head.
    pub fn remove_node(&self, node: Option<&Arc<Node<T>>>) -> Result<bool, ListError> {
        node.map(|node| self.unlink(node))
            .ok_or(ListError::NullArgument)
    }

    /// Returns an iterator over the chain published right now.
    ///
    /// The iterator owns its snapshot of the head; `clear` does not truncate
    /// it, while writer activity ahead of its position remains visible.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            current: self.head.load_full(),
        }
    }

    /// Returns a cursor positioned before the first element of the chain
    /// published right now.
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self.head.load_full())
    }

    /// The element count maintained by the writer.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Whether the current chain is empty. O(1).
    pub fn is_empty(&self) -> bool {
        self.head.load().is_none()
    }

    /// Builds a node wired to `node`'s current successor, then repoints
    /// `node`'s successor at it. This order is mandatory: a reader arriving
    /// between the two steps sees either the old chain or the new chain,
    /// never a node with an unset link.
    fn link_after(&self, node: &Arc<Node<T>>, value: T) -> Arc<Node<T>> {
        let new = Arc::new(Node::with_next(value, node.next()));
        node.store_next(Some(Arc::clone(&new)));
        self.len.fetch_add(1, Ordering::Relaxed);
        new
    }

    /// Unlinks `node` by repointing its predecessor (or the head) at its
    /// successor. The unlinked node keeps its own successor, so a reader
    /// parked on it continues through the rest of the old chain.
    fn unlink(&self, node: &Arc<Node<T>>) -> bool {
        let Some(head) = self.head.load_full() else {
            return false;
        };
        if Arc::ptr_eq(&head, node) {
            self.head.store(node.next());
            self.len.fetch_sub(1, Ordering::Relaxed);
            return true;
        }
        // No back-links, so the predecessor is found with a forward walk.
        let mut prev = head;
        while let Some(succ) = prev.next() {
            if Arc::ptr_eq(&succ, node) {
                prev.store_next(node.next());
                self.len.fetch_sub(1, Ordering::Relaxed);
                return true;
            }
            prev = succ;
        }
        false
    }
}

impl<T> Default for RcuList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RcuList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for RcuList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let list = Self::new();
        list.extend_back(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for RcuList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a RcuList<T> {
    type Item = Arc<Node<T>>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

/// An iterator over the nodes reachable from a snapshotted head.
pub struct Iter<T> {
    current: Option<Arc<Node<T>>>,
}

impl<T> Iterator for Iter<T> {
    type Item = Arc<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next();
        Some(node)
    }
}
