//! # RCU Linked List
//!
//! This module provides a singly-linked list whose readers never block and
//! never take a lock. The writer rebuilds links off to the side and publishes
//! them with release stores; readers observe either the old chain or the new
//! one, never anything in between.
//!
//! ## Core Components
//!
//! - [`RcuList`]: the list itself; owns the head cell and performs all mutation.
//! - [`Node`]: an immutable value plus a swappable successor link.
//! - [`Cursor`]: an explicit, restartable traversal handle over a head snapshot.
//! - [`ListError`]: precondition violations reported by fallible operations.
//!
//! ## Writer discipline
//!
//! Every operation is safe to run concurrently with any number of readers, at
//! any point. Mutators are not safe to run concurrently with each other: the
//! list assumes exactly one logical writer, serialized with itself. This
//! precondition is documented, not enforced; behavior with two simultaneous
//! writers is unspecified.
//!
//! ## Reclamation
//!
//! Removal makes a node unreachable from the head, nothing more. The node's
//! memory is reclaimed when the last reference to it drops, whether that
//! reference lives in the chain or in a reader still traversing through it.
mod cursor;
mod error;
mod list;
mod node;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::ListError;
pub use list::{Iter, RcuList};
pub use node::Node;
