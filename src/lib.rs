//! Concurrent collections built on single-writer RCU publication.
#![no_std]

extern crate alloc;

pub mod linked_list;
