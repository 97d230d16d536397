// Hash heads: bucket selection, lookup, replace-on-insert.

use bt3zip::config::HASH_SIZE;
use bt3zip::mf::types::{hash3, NIL, START_POSITION};
use bt3zip::mf::HashIndex;

#[test]
fn fresh_index_has_no_heads() {
    let h = HashIndex::new();
    assert_eq!(h.heads().len(), HASH_SIZE);
    assert!(h.heads().iter().all(|&p| p == NIL));
    assert_eq!(h.lookup(*b"abc"), NIL);
}

#[test]
fn bucket_is_the_context_hash() {
    assert_eq!(HashIndex::bucket(*b"xyz"), hash3(b'x', b'y', b'z'));
}

#[test]
fn insert_replaces_and_returns_previous_head() {
    let mut h = HashIndex::new();
    assert_eq!(h.insert(*b"abc", START_POSITION), NIL);
    assert_eq!(h.insert(*b"abc", START_POSITION + 7), START_POSITION);
    assert_eq!(h.lookup(*b"abc"), START_POSITION + 7);
}

#[test]
fn update_sets_head_without_reading_it() {
    let mut h = HashIndex::new();
    h.update(*b"aaa", START_POSITION + 3);
    assert_eq!(h.lookup(*b"aaa"), START_POSITION + 3);
    assert_eq!(h.heads()[HashIndex::bucket(*b"aaa")], START_POSITION + 3);
}

#[test]
fn clones_are_independent() {
    let mut a = HashIndex::new();
    a.update(*b"abc", START_POSITION);
    let mut b = a.clone();
    b.update(*b"abc", START_POSITION + 1);
    assert_eq!(a.lookup(*b"abc"), START_POSITION);
    assert_eq!(b.lookup(*b"abc"), START_POSITION + 1);
    assert_ne!(a, b);
}
