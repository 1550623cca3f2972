use super::Store;
use crate::error::Error;
use alloc::vec;
use alloc::vec::Vec;
use sorta_fixed_buf::FixedBuf;

fn sorted_copy<S: Store<Elem = i32>>(store: &S) -> Vec<i32> {
    let mut out = store.as_slice().to_vec();
    out.sort();
    out
}

#[test]
fn test_vec_remove_range_keeps_order() {
    let mut v = vec![1, 2, 3, 4, 5];
    Store::remove_range(&mut v, 1..3);
    assert_eq!(v, [1, 4, 5]);
}

#[test]
fn test_fixed_remove_range_uses_swap_emulation() {
    let mut block = [1, 2, 3, 4, 5, 6];
    let mut buf = FixedBuf::new(&mut block);
    buf.remove_range(0..2);
    assert_eq!(Store::len(&buf), 4);
    assert_eq!(sorted_copy(&buf), [3, 4, 5, 6]);
}

#[test]
fn test_fixed_push_reports_capacity() {
    let mut block = [0; 2];
    let mut buf = FixedBuf::empty(&mut block);
    Store::push(&mut buf, 1).unwrap();
    Store::push(&mut buf, 2).unwrap();
    assert_eq!(
        Store::push(&mut buf, 3),
        Err(Error::CapacityExceeded {
            capacity: 2,
            requested: 3
        })
    );
}

#[test]
fn test_default_append_stops_at_first_failure() {
    let mut block = [0; 3];
    let mut buf = FixedBuf::empty(&mut block);
    let result = Store::append(&mut buf, [1, 2, 3, 4, 5]);
    assert!(matches!(result, Err(Error::CapacityExceeded { .. })));
    assert_eq!(Store::as_slice(&buf), &[1, 2, 3]);
}

#[test]
fn test_vec_append_counts() {
    let mut v = vec![1];
    assert_eq!(Store::append(&mut v, [2, 3]), Ok(2));
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn test_remove_last() {
    let mut v = vec![1, 2];
    Store::remove_last(&mut v);
    assert_eq!(v, [1]);

    let mut block = [1, 2];
    let mut buf = FixedBuf::new(&mut block);
    Store::remove_last(&mut buf);
    Store::remove_last(&mut buf);
    Store::remove_last(&mut buf);
    assert!(Store::is_empty(&buf));
}

#[test]
fn test_fixed_set_len_regrows_into_block() {
    let mut block = [1, 2, 3, 4];
    let mut buf = FixedBuf::new(&mut block);
    Store::set_len(&mut buf, 1).unwrap();
    assert_eq!(Store::as_slice(&buf), &[1]);
    Store::set_len(&mut buf, 4).unwrap();
    assert_eq!(Store::as_slice(&buf), &[1, 2, 3, 4]);
}

#[test]
fn test_fixed_set_len_past_block() {
    let mut block = [1, 2, 3, 4];
    let mut buf = FixedBuf::empty(&mut block);
    assert_eq!(
        Store::set_len(&mut buf, 5),
        Err(Error::CapacityExceeded {
            capacity: 4,
            requested: 5
        })
    );
    assert!(Store::is_empty(&buf));
}

#[test]
fn test_growable_set_len_only_shrinks() {
    let mut v = Vec::with_capacity(8);
    v.extend([1, 2, 3]);
    Store::set_len(&mut v, 2).unwrap();
    assert_eq!(v, [1, 2]);
    assert!(matches!(
        Store::set_len(&mut v, 3),
        Err(Error::CapacityExceeded { requested: 3, .. })
    ));
    assert_eq!(v, [1, 2]);
}

#[test]
fn test_small_vec_store() {
    let mut v: smallvec::SmallVec<[i32; 4]> = smallvec::smallvec![5, 6, 7];
    Store::push(&mut v, 8).unwrap();
    Store::remove_range(&mut v, 0..1);
    assert_eq!(Store::as_slice(&v), &[6, 7, 8]);
}
