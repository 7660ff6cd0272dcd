// LinkedList: linking, traversal, handles and sorting.

mod common;

use common::{pairs, records};
use payload_list::{Error, LinkedList, Options, Record};
use rand::seq::SliceRandom;

// =============================================================================
// Test 1: Empty list
// =============================================================================
#[test]
fn empty_list_behavior() {
    let list: LinkedList<Record> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
    assert_eq!(list.iter().count(), 0);
    assert!(!list.cursor().is_valid());
}

// =============================================================================
// Test 2: push_back keeps insertion order, push_front prepends
// =============================================================================
#[test]
fn push_back_and_front_order() {
    common::init_logging();
    let mut list = records(&[(2, "b"), (3, "c")]);
    list.push_front(Record::new(1, "a").unwrap()).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(
        pairs(&list),
        vec![(1, "a".to_string()), (2, "b".to_string()), (3, "c".to_string())]
    );
}

// =============================================================================
// Test 3: Traversal works both ways
// =============================================================================
#[test]
fn reverse_traversal() {
    let list = records(&[(1, "a"), (2, "b"), (3, "c")]);
    let back: Vec<i32> = list.iter().rev().map(Record::number).collect();
    assert_eq!(back, vec![3, 2, 1]);

    let last = list.last().unwrap();
    let middle = list.prev_of(last).unwrap();
    assert_eq!(list.get(middle).unwrap().text(), "b");
    assert_eq!(list.next_of(middle), Some(last));
    assert_eq!(list.next_of(last), None);
    assert_eq!(list.prev_of(list.first().unwrap()), None);
}

// =============================================================================
// Test 4: pop from both ends hands ownership back
// =============================================================================
#[test]
fn pop_both_ends() {
    let mut list = records(&[(1, "a"), (2, "b"), (3, "c")]);
    assert_eq!(list.pop_front().unwrap().number(), 1);
    assert_eq!(list.pop_back().unwrap().number(), 3);
    assert_eq!(list.pop_back().unwrap().number(), 2);
    assert!(list.pop_front().is_none());
    assert!(list.is_empty());
}

// =============================================================================
// Test 5: Removed handles go stale and stay stale after slot reuse
// =============================================================================
#[test]
fn stale_handle_after_remove() {
    let mut list = records(&[(1, "a")]);
    let id = list.first().unwrap();
    let removed = list.remove(id).unwrap();
    assert_eq!(removed.number(), 1);

    assert!(!list.contains_node(id));
    assert!(list.get(id).is_none());
    assert!(list.remove(id).is_none());

    let new_id = list.push_back(Record::new(2, "b").unwrap()).unwrap();
    assert!(list.get(id).is_none());
    assert_eq!(list.get(new_id).unwrap().number(), 2);
    assert!(!list.cursor_at(id).is_valid());
}

// =============================================================================
// Test 6: sort orders by number and is stable on ties
// =============================================================================
#[test]
fn sort_is_stable() {
    common::init_logging();
    let mut list = records(&[(3, "c"), (1, "a"), (2, "first"), (0, "z"), (2, "second")]);
    list.sort().unwrap();
    assert_eq!(
        pairs(&list),
        vec![
            (0, "z".to_string()),
            (1, "a".to_string()),
            (2, "first".to_string()),
            (2, "second".to_string()),
            (3, "c".to_string()),
        ]
    );
    let back: Vec<i32> = list.iter().rev().map(Record::number).collect();
    assert_eq!(back, vec![3, 2, 2, 1, 0]);
}

// =============================================================================
// Test 7: Handles survive a sort
// =============================================================================
#[test]
fn handles_survive_sort() {
    let mut list = LinkedList::new();
    let big = list.push_back(Record::new(100, "big").unwrap()).unwrap();
    let small = list.push_back(Record::new(-1, "small").unwrap()).unwrap();
    list.sort().unwrap();

    assert_eq!(list.first(), Some(small));
    assert_eq!(list.last(), Some(big));
    assert_eq!(list.get(big).unwrap().text(), "big");
}

// =============================================================================
// Test 8: Sorting shuffled input gives ascending order
// =============================================================================
#[test]
fn sort_shuffled_input() {
    let mut numbers: Vec<i32> = (0..1000).collect();
    numbers.shuffle(&mut rand::thread_rng());

    let mut list = LinkedList::new();
    for &n in &numbers {
        list.push_back(Record::new(n, "n").unwrap()).unwrap();
    }
    list.sort().unwrap();

    let sorted: Vec<i32> = list.iter().map(Record::number).collect();
    assert_eq!(sorted, (0..1000).collect::<Vec<_>>());
    assert_eq!(list.len(), 1000);
}

// =============================================================================
// Test 9: sort_by takes any comparator
// =============================================================================
#[test]
fn sort_by_text_descending() {
    let mut list = records(&[(1, "b"), (2, "c"), (3, "a")]);
    list.sort_by(|a, b| b.text().cmp(a.text())).unwrap();
    let texts: Vec<&str> = list.iter().map(Record::text).collect();
    assert_eq!(texts, vec!["c", "b", "a"]);
}

// =============================================================================
// Test 10: Cursor walks, seeks and falls off the end
// =============================================================================
#[test]
fn cursor_walk_and_seek() {
    use payload_list::RecordKey;

    let list = records(&[(1, "a"), (2, "b"), (2, "c"), (3, "d")]);
    let mut cursor = list.cursor();
    assert_eq!(cursor.payload().unwrap().text(), "a");

    assert!(cursor.seek(&RecordKey::BareNumber(2)));
    assert_eq!(cursor.payload().unwrap().text(), "b");

    // seek includes the current node
    assert!(cursor.seek(&RecordKey::BareNumber(2)));
    assert_eq!(cursor.payload().unwrap().text(), "b");

    cursor.move_next();
    assert!(cursor.seek(&RecordKey::BareNumber(2)));
    assert_eq!(cursor.payload().unwrap().text(), "c");

    cursor.move_prev();
    assert_eq!(cursor.payload().unwrap().text(), "b");

    assert!(!cursor.seek(&RecordKey::BareText("zzz")));
    assert!(!cursor.is_valid());
    assert!(cursor.payload().is_none());
    assert!(cursor.id().is_none());
}

// =============================================================================
// Test 11: Draining yields payloads in order
// =============================================================================
#[test]
fn into_payloads_in_order() {
    let list = records(&[(1, "a"), (2, "b")]);
    let drained: Vec<i32> = list.into_payloads().map(|r| r.number()).collect();
    assert_eq!(drained, vec![1, 2]);
}

// =============================================================================
// Test 12: with_options and try_from_iter
// =============================================================================
#[test]
fn construct_from_options_and_iter() {
    let list: LinkedList<Record> = LinkedList::with_options(&Options::default().initial_capacity(64)).unwrap();
    assert!(list.is_empty());

    let list = LinkedList::try_from_iter((0..5).map(|n| Record::new(n, "x").unwrap())).unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list.entries().len(), 5);
    assert_eq!(format!("{list:?}").matches("Record").count(), 5);
}

// =============================================================================
// Test 13: An impossible up-front capacity is an error, not an abort
// =============================================================================
#[test]
fn with_options_oversized_capacity_is_out_of_memory() {
    let options = Options::default().initial_capacity(usize::MAX);
    let result = LinkedList::<Record>::with_options(&options);
    assert!(matches!(result, Err(Error::OutOfMemory)));
}
