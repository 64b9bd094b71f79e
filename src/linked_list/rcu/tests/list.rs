extern crate std;

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::vec;

use super::super::{ListError, Node, RcuList};

fn values(list: &RcuList<i32>) -> Vec<i32> {
    list.iter().map(|node| *node.value()).collect()
}

#[test]
fn test_new_list_is_empty() {
    let list = RcuList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.front().is_none());
    assert!(list.back().is_none());
}

#[test]
fn test_push_front_repoints_head() {
    let list = RcuList::new();

    list.push_front(1);
    assert_eq!(*list.front().unwrap().value(), 1);

    list.push_front(0);
    assert_eq!(*list.front().unwrap().value(), 0);
    assert_eq!(*list.back().unwrap().value(), 1);
}

#[test]
fn test_push_back_appends() {
    let list = RcuList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_back(3);
    assert_eq!(values(&list), vec![1, 2, 3]);
}

#[test]
fn test_extend_round_trips_insertion_order() {
    let list = RcuList::new();
    list.extend_from_slice(&[0, 1, 2, 3, 4, 5]);
    assert_eq!(values(&list), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(list.len(), 6);
}

#[test]
fn test_extend_back_appends_after_existing_tail() {
    let list = RcuList::new();
    list.push_back(0);
    list.extend_back(1..4);
    assert_eq!(values(&list), vec![0, 1, 2, 3]);
}

#[test]
fn test_extend_from_slice_empty_is_noop() {
    let list = RcuList::<i32>::new();
    list.extend_from_slice(&[]);
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_insert_after_middle_and_tail() {
    let list = RcuList::new();
    list.extend_from_slice(&[1, 3]);

    let node = list.find(&1).unwrap();
    list.insert_after(Some(&node), 2).unwrap();
    assert_eq!(values(&list), vec![1, 2, 3]);

    let tail = list.back().unwrap();
    list.insert_after(Some(&tail), 4).unwrap();
    assert_eq!(values(&list), vec![1, 2, 3, 4]);
}

#[test]
fn test_insert_after_without_node_fails() {
    let list = RcuList::<i32>::new();
    assert_eq!(
        list.insert_after(None, 7).unwrap_err(),
        ListError::NullArgument
    );
    assert!(list.is_empty());
}

#[test]
fn test_remove_value_scenario() {
    let list = RcuList::new();
    list.extend_from_slice(&[0, 1, 2, 3, 4, 5]);

    assert!(list.remove(&3));
    assert!(!list.remove(&3));
    assert!(!list.remove(&72));
    assert!(!list.contains(&3));
    assert_eq!(values(&list), vec![0, 1, 2, 4, 5]);
}

#[test]
fn test_remove_once_per_occurrence() {
    let list = RcuList::new();
    list.extend_from_slice(&[1, 2, 2, 3]);

    assert!(list.remove(&2));
    assert!(list.remove(&2));
    assert!(!list.remove(&2));
    assert_eq!(values(&list), vec![1, 3]);
}

#[test]
fn test_remove_node() {
    let list = RcuList::new();
    let foreign = Arc::new(Node::new(9));

    // Empty list and a node never linked into this list.
    assert_eq!(list.remove_node(Some(&foreign)), Ok(false));

    list.extend_from_slice(&[1, 2, 3]);
    let node = list.find(&2).unwrap();
    assert_eq!(list.remove_node(Some(&node)), Ok(true));
    assert_eq!(list.remove_node(Some(&node)), Ok(false));
    assert_eq!(list.remove_node(Some(&foreign)), Ok(false));
    assert_eq!(list.remove_node(None), Err(ListError::NullArgument));
    assert_eq!(values(&list), vec![1, 3]);
}

#[test]
fn test_remove_node_at_head() {
    let list = RcuList::new();
    list.extend_from_slice(&[1, 2]);

    let head = list.front().unwrap();
    assert_eq!(list.remove_node(Some(&head)), Ok(true));
    assert_eq!(*list.front().unwrap().value(), 2);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_removed_node_keeps_its_successor() {
    let list = RcuList::new();
    list.extend_from_slice(&[1, 2, 3, 4]);

    let node = list.find(&2).unwrap();
    assert!(list.remove(&2));

    // A reader parked on the removed node still walks the rest of the chain
    // it was on.
    assert_eq!(*node.next().unwrap().value(), 3);
    assert_eq!(*node.next().unwrap().next().unwrap().value(), 4);
    assert_eq!(values(&list), vec![1, 3, 4]);
}

#[test]
fn test_clear_and_reuse() {
    let list = RcuList::new();
    list.extend_from_slice(&[1, 2, 3]);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    for v in [1, 2, 3] {
        assert!(!list.contains(&v));
    }

    // The list behaves as fresh after a clear.
    list.push_back(10);
    list.push_front(9);
    assert_eq!(values(&list), vec![9, 10]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_find_and_find_first() {
    let list = RcuList::new();
    list.extend_from_slice(&[1, 2, 3, 4]);

    assert_eq!(*list.find(&3).unwrap().value(), 3);
    assert!(list.find(&7).is_none());

    let node = list.find_first(|v| v % 2 == 0).unwrap();
    assert_eq!(*node.value(), 2);
    assert!(list.find_first(|v| *v > 10).is_none());
}

#[test]
fn test_len_tracks_mutations() {
    let list = RcuList::new();
    list.push_front(1);
    list.push_back(2);
    let node = list.insert_after(list.find(&1).as_ref(), 3).unwrap();
    assert_eq!(list.len(), 3);

    assert_eq!(list.remove_node(Some(&node)), Ok(true));
    assert_eq!(list.len(), 2);
    assert!(list.remove(&1));
    assert_eq!(list.len(), 1);

    list.clear();
    assert_eq!(list.len(), 0);
}

#[test]
fn test_from_iterator() {
    let list: RcuList<i32> = (0..4).collect();
    assert_eq!(values(&list), vec![0, 1, 2, 3]);
}

#[test]
fn test_debug_lists_values() {
    let list = RcuList::new();
    list.extend_from_slice(&[1, 2]);
    assert_eq!(format!("{:?}", list), "[1, 2]");
}

#[test]
fn test_clear_tears_down_long_chains() {
    // Deep enough that a per-node recursive drop would blow the stack.
    let list: RcuList<usize> = (0..200_000).collect();
    list.clear();
    assert!(list.is_empty());
}
