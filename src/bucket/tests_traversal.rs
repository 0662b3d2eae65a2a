//! Traversal API tests
//!
//! Tests fallible traversal, the borrowing iterator, accessors, and the
//! `Extend`/`FromIterator` implementations.

use super::*;

#[test]
fn test_try_each_visits_everything_on_success() {
    let bucket: PriorityBucket<i32> = [(1, 0), (2, 3), (3, 0)].into_iter().collect();
    let mut visited = Vec::new();
    let result: Result<(), String> = bucket.try_each(|v| {
        visited.push(*v);
        Ok(())
    });
    assert!(result.is_ok());
    assert_eq!(visited, vec![2, 1, 3]);
}

#[test]
fn test_try_each_stops_at_first_error() {
    let bucket: PriorityBucket<&str> =
        [("a", 10), ("b", 5), ("c", 5), ("d", 0)].into_iter().collect();

    let mut visited = Vec::new();
    let result = bucket.try_each(|v| {
        if *v == "c" {
            return Err(format!("visitor rejected {}", v));
        }
        visited.push(*v);
        Ok(())
    });

    assert_eq!(result, Err("visitor rejected c".to_string()));
    assert_eq!(visited, vec!["a", "b"], "values after the failure are skipped");
}

#[test]
fn test_panicking_visitor_propagates() {
    let bucket: PriorityBucket<i32> = [(1, 2), (2, 1), (3, 0)].into_iter().collect();
    let mut visited = Vec::new();

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        bucket.each(|v| {
            if *v == 2 {
                panic!("visitor failure");
            }
            visited.push(*v);
        });
    }));

    assert!(outcome.is_err(), "panic should reach the caller of each");
    assert_eq!(visited, vec![1]);
}

#[test]
fn test_iter_matches_each() {
    let mut bucket = PriorityBucket::new();
    bucket.extend([("x", 1), ("y", -1), ("z", 1), ("w", 4)]);

    let mut via_each = Vec::new();
    bucket.each(|v| via_each.push(*v));
    let via_iter: Vec<_> = bucket.iter().copied().collect();
    let via_into_iter: Vec<_> = (&bucket).into_iter().copied().collect();

    assert_eq!(via_each, via_iter);
    assert_eq!(via_iter, via_into_iter);
    assert_eq!(via_iter, vec!["w", "x", "z", "y"]);
}

#[test]
fn test_iter_is_exact_size() {
    let bucket: PriorityBucket<u8> = [(1, 0), (2, 1), (3, 2), (4, 0)].into_iter().collect();
    let mut iter = bucket.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_for_loop_over_reference() {
    let bucket: PriorityBucket<String> = [("low".to_string(), 0), ("high".to_string(), 1)]
        .into_iter()
        .collect();

    let mut joined = String::new();
    for value in &bucket {
        joined.push_str(value);
    }
    assert_eq!(joined, "highlow");
}

#[test]
fn test_len_counts_all_values() {
    let mut bucket = PriorityBucket::new();
    assert_eq!(bucket.len(), 0);
    bucket.push(1);
    bucket.push(1);
    bucket.push_with_priority(1, 9);
    assert_eq!(bucket.len(), 3);
    assert_eq!(bucket.group_count(), 2);
    assert!(!bucket.is_empty());
}

#[test]
fn test_duplicates_are_kept() {
    let visited = traversal_of(&[("same", 1), ("same", 1), ("same", 0)]);
    assert_eq!(visited, vec!["same", "same", "same"]);
}

#[test]
fn test_group_missing_priority_is_none() {
    let mut bucket = PriorityBucket::new();
    bucket.push_with_priority('a', 3);
    assert!(bucket.group(4).is_none());
    assert!(bucket.group(Priority::new(3)).is_some());
}

#[test]
fn test_values_are_moved_not_cloned() {
    // Vec<u8> is not Copy; the bucket owns what was pushed
    let mut bucket = PriorityBucket::new();
    let payload = vec![1_u8, 2, 3];
    let address = payload.as_ptr();
    bucket.push_with_priority(payload, 1);

    let stored = bucket.group(1).expect("group should exist");
    assert_eq!(stored[0].as_ptr(), address);
}

#[test]
fn test_clone_is_independent() {
    let mut original = PriorityBucket::new();
    original.push_with_priority("a", 1);
    let mut copy = original.clone();
    copy.push_with_priority("b", 2);

    assert_eq!(original.len(), 1);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn test_default_is_empty() {
    let bucket: PriorityBucket<()> = PriorityBucket::default();
    assert!(bucket.is_empty());
    assert!(bucket.priorities().is_empty());
}
