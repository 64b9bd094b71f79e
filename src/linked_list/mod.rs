//! A singly-linked list with lock-free, wait-free reads.
//!
//! One logical writer adds, inserts, and removes nodes while any number of
//! reader threads traverse the list concurrently, with no locks anywhere.
//! Writers construct each node completely before publishing a reference to it,
//! so a reader following a link always lands on a finished node; a reader that
//! captured the chain before a mutation simply keeps walking the chain it
//! captured.
//!
//! # Examples
//!
//! ```
//! use rcu_collections::linked_list::rcu::RcuList;
//!
//! let list = RcuList::new();
//! list.extend_from_slice(&[1, 2, 3]);
//!
//! assert!(list.contains(&2));
//! assert!(list.remove(&2));
//! assert!(!list.remove(&2));
//!
//! let mut values = vec![];
//! for node in &list {
//!     values.push(*node.value());
//! }
//! assert_eq!(values, vec![1, 3]);
//! ```
pub mod rcu;
