// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Tests for the public list API in both modes.

use fastlist::Config;
use fastlist::Error;
use fastlist::Fastlist;
use fastlist::Mode;
use fastlist::Operation;
use smallvec::SmallVec;

// =============================================================================
// Helper functions
// =============================================================================

fn unsorted(load: usize, values: impl IntoIterator<Item = i32>) -> Fastlist<i32> {
    return Fastlist::from_iter_with(values, Config::new().load(load)).unwrap();
}

fn sorted(load: usize, values: impl IntoIterator<Item = i32>) -> Fastlist<i32> {
    return Fastlist::from_iter_with(values, Config::new().load(load).sorted()).unwrap();
}

fn buckets<T: Clone>(list: &Fastlist<T>) -> Vec<Vec<T>> {
    return list.buckets().map(|b| b.to_vec()).collect();
}

fn unsupported(op: Operation, mode: Mode) -> Error {
    return Error::Unsupported { op, mode };
}

/// Ordered by `key` alone, so equal keys can be told apart by `tag`.
#[derive(Clone, Debug)]
struct Keyed {
    key: u32,
    tag: char,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        return self.key == other.key;
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        return self.key.cmp(&other.key);
    }
}

fn keyed(key: u32, tag: char) -> Keyed {
    return Keyed { key, tag };
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn appends_fill_buckets_up_to_the_load() {
    let mut list = unsorted(4, [1, 2, 4, 3]);
    assert_eq!(buckets(&list), vec![vec![1, 2, 4, 3]]);
    assert_eq!(list.offsets(), Some(&[0][..]));

    list.append(6).unwrap();
    assert_eq!(buckets(&list), vec![vec![1, 2, 4, 3], vec![6]]);
    assert_eq!(list.offsets(), Some(&[0, 4][..]));

    for _ in 0..5 {
        list.append(1).unwrap();
    }
    assert_eq!(list.offsets(), Some(&[0, 4, 8][..]));
    assert_eq!(list.len(), 10);

    for _ in 0..10 {
        list.pop().unwrap();
        list.check_invariants();
    }
    assert!(list.is_empty());
    assert_eq!(list.as_list(), Vec::<i32>::new());
    assert_eq!(list.bucket_count(), 1);
}

#[test]
fn insorted_duplicates_split_across_buckets() {
    let list = sorted(2, [1, 3, 3, 3, 4]);
    assert_eq!(buckets(&list), vec![vec![1, 3], vec![3, 3, 4]]);
    assert_eq!(list.mins(), Some(&[1, 3][..]));
    assert_eq!(list.offsets(), None);
}

#[test]
fn zero_load_is_rejected() {
    let result: fastlist::Result<Fastlist<i32>> = Fastlist::with_config(Config::new().load(0));
    assert!(matches!(result, Err(Error::InvalidLoad(0))));
}

// =============================================================================
// Insert and append
// =============================================================================

#[test]
fn insert_before_an_existing_element() {
    let mut list = unsorted(2, [0]);
    list.insert(0, 1).unwrap();
    assert_eq!(list.get(0), Ok(&1));
    assert_eq!(list.len(), 2);

    list.insert(-1, -1).unwrap();
    assert_eq!(list.get(-2), Ok(&-1));
    assert_eq!(list.as_list(), vec![1, -1, 0]);

    assert_eq!(list.insert(10, 10), Err(Error::OutOfRange { index: 10, len: 3 }));
}

#[test]
fn insert_into_empty_list_is_out_of_range() {
    let mut list: Fastlist<i32> = Fastlist::new();
    assert_eq!(list.insert(0, 1), Err(Error::OutOfRange { index: 0, len: 0 }));
    assert!(list.is_empty());
}

#[test]
fn sorted_list_refuses_positional_insert_and_append() {
    let mut list = sorted(2, [0]);
    assert_eq!(list.insert(0, 1), Err(unsupported(Operation::Insert, Mode::Sorted)));
    assert_eq!(list.append(1), Err(unsupported(Operation::Append, Mode::Sorted)));
    assert_eq!(list.as_list(), vec![0]);
}

#[test]
fn append_many() {
    let mut list = unsorted(2, []);
    for i in 0..100 {
        list.append(i).unwrap();
    }
    assert_eq!(list.get(99), Ok(&99));
    list.check_invariants();
}

#[test]
fn extend_appends_or_insorts() {
    let mut list = unsorted(2, [1, 2, 3]);
    list.extend(0..100);
    assert_eq!(list.get(102), Ok(&99));
    assert_eq!(list.len(), 103);

    let mut list = sorted(2, [1, 2, 3]);
    list.extend(0..100);
    assert_eq!(list.get(-1), Ok(&99));
    let mut expected: Vec<i32> = (0..100).chain([1, 2, 3]).collect();
    expected.sort();
    assert_eq!(list.as_list(), expected);
    list.check_invariants();
}

#[test]
fn extend_from_another_list() {
    let source = unsorted(3, [4, 2, 1]);
    let mut list = unsorted(4, source.iter().copied());
    list.extend([3, 1]);
    assert_eq!(list.as_list(), vec![4, 2, 1, 3, 1]);

    let source = sorted(3, [1, 3, 5]);
    let mut list = sorted(4, source.iter().copied());
    list.extend([0, 4]);
    assert_eq!(list.as_list(), vec![0, 1, 3, 4, 5]);
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn pop_from_both_ends() {
    for mut list in [unsorted(3, [3, 4, 5, 6, 7]), sorted(3, [3, 4, 5, 6, 7])] {
        assert_eq!(list.pop(), Ok(7));
        assert_eq!(list.pop_at(0), Ok(3));
        assert_eq!(list.pop_at(-1), Ok(6));
        assert_eq!(list.as_list(), vec![4, 5]);
        list.check_invariants();
    }
}

#[test]
fn pop_from_empty_list() {
    let mut list = unsorted(2, []);
    assert_eq!(list.pop(), Err(Error::OutOfRange { index: -1, len: 0 }));

    let mut list = sorted(2, []);
    assert_eq!(list.pop(), Err(Error::OutOfRange { index: -1, len: 0 }));
}

#[test]
fn sorted_pop_only_at_the_ends() {
    let mut list = sorted(2, [1, 2, 3]);
    assert_eq!(list.pop_at(1), Err(unsupported(Operation::IndexAccess, Mode::Sorted)));
    assert_eq!(list.len(), 3);
}

#[test]
fn delete_range_clamps() {
    let mut list = unsorted(3, [1, 2, 3, 4, 5, 6]);
    list.pop_at(0).unwrap();
    list.pop_at(-1).unwrap();
    assert_eq!(list.as_list(), vec![2, 3, 4, 5]);

    list.delete_range(2..).unwrap();
    assert_eq!(list.as_list(), vec![2, 3]);

    list.delete_range(5..9).unwrap();
    assert_eq!(list.as_list(), vec![2, 3]);
    list.check_invariants();
}

#[test]
fn sorted_delete_range_is_unsupported() {
    let mut list = sorted(3, [1, 2, 3, 4, 5, 6]);
    list.pop_at(0).unwrap();
    list.pop_at(-1).unwrap();
    assert_eq!(list.as_list(), vec![2, 3, 4, 5]);
    assert_eq!(list.delete_range(2..), Err(unsupported(Operation::SliceDelete, Mode::Sorted)));
    assert_eq!(list.as_list(), vec![2, 3, 4, 5]);
}

#[test]
fn clear_keeps_mode_and_load() {
    let mut list = unsorted(4, [10, 20, 30, 40]);
    list.clear();
    assert_eq!(buckets(&list), vec![Vec::<i32>::new()]);
    assert_eq!(list.len(), 0);
    assert_eq!(list.load(), 4);
    list.extend(0..100);
    assert_eq!(list.get(-1), Ok(&99));

    let mut list = sorted(4, [10, 20, 30, 40]);
    list.clear();
    assert_eq!(buckets(&list), vec![Vec::<i32>::new()]);
    assert!(list.is_sorted());
    list.extend((0..100).rev());
    assert_eq!(list.get(-1), Ok(&99));
    assert_eq!(list.get(0), Ok(&0));
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn get_and_slice() {
    let list = unsorted(2, [4, 2, 1, 5]);
    assert_eq!(list.get(0), Ok(&4));
    assert_eq!(list.get(-1), Ok(&5));
    assert_eq!(list.get(3), Ok(&5));
    assert_eq!(list.slice(1..3), Ok(vec![2, 1]));
    assert_eq!(list.slice(3..10), Ok(vec![5]));
    assert_eq!(list.slice(..), Ok(list.as_list()));
    assert_eq!(list.slice(3..1), Ok(vec![]));

    let list = unsorted(2, [1, 2]);
    assert_eq!(list.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&2));
}

#[test]
fn sorted_access_is_limited_to_the_ends() {
    let list = sorted(2, [4, 2, 1, 5]);
    assert_eq!(list.get(0), Ok(&1));
    assert_eq!(list.get(-1), Ok(&5));
    assert_eq!(list.slice(..), Ok(vec![1, 2, 4, 5]));
    assert_eq!(list.slice(1..3), Err(unsupported(Operation::IndexAccess, Mode::Sorted)));
    assert_eq!(list.get(1), Err(unsupported(Operation::IndexAccess, Mode::Sorted)));
}

#[test]
fn set_replaces_in_place() {
    let mut list = unsorted(2, [4, 2, 1, 5]);
    assert_eq!(list.set(2, 5), Ok(1));
    assert_eq!(list.as_list(), vec![4, 2, 5, 5]);

    let mut empty = unsorted(2, []);
    assert_eq!(empty.set(0, 1), Err(Error::OutOfRange { index: 0, len: 0 }));

    let mut short = unsorted(2, [1, 2]);
    assert_eq!(short.set(2, 1), Err(Error::OutOfRange { index: 2, len: 2 }));

    *list.get_mut(0).unwrap() = 7;
    assert_eq!(list.first(), Some(&7));
}

#[test]
fn sorted_set_is_unsupported() {
    let mut list = sorted(2, [4, 2, 1, 5]);
    assert_eq!(list.set(0, 5), Err(unsupported(Operation::Assign, Mode::Sorted)));
    assert!(matches!(list.set(2, 5), Err(Error::Unsupported { .. })));

    let mut empty = sorted(2, []);
    assert_eq!(empty.set(0, 1), Err(Error::OutOfRange { index: 0, len: 0 }));
}

#[test]
fn assign_range_is_unsupported_everywhere() {
    let mut list = unsorted(2, [1, 2, 3]);
    assert_eq!(list.assign_range(0..1, [9]), Err(unsupported(Operation::SliceAssign, Mode::Unsorted)));

    let mut list = sorted(2, [1, 2, 3]);
    assert_eq!(list.assign_range(.., []), Err(unsupported(Operation::SliceAssign, Mode::Sorted)));
}

// =============================================================================
// Sorted operations
// =============================================================================

#[test]
fn insort_keeps_order() {
    let mut list = sorted(2, [10, 30, 30, 30, 40]);
    list.insort(5).unwrap();
    assert_eq!(list.get(0), Ok(&5));
    list.insort(50).unwrap();
    assert_eq!(list.get(-1), Ok(&50));
    list.insort_left(30).unwrap();
    assert_eq!(list.as_list()[2], 30);
    assert_eq!(list.as_list(), vec![5, 10, 30, 30, 30, 30, 40, 50]);
    list.check_invariants();
}

#[test]
fn insort_needs_a_sorted_list() {
    let mut list = unsorted(2, [1, 2, 3]);
    assert_eq!(list.insort(1), Err(unsupported(Operation::Insort, Mode::Unsorted)));
    assert_eq!(list.insort_left(1), Err(unsupported(Operation::Insort, Mode::Unsorted)));
}

#[test]
fn bounds_over_tuples() {
    let list = Fastlist::from_iter_with([(1, 0), (3, 0), (3, 0), (3, 0), (4, 0)], Config::new().load(2).sorted())
        .unwrap();

    let mut lower = list.lower_bound(&(3, 0)).unwrap();
    assert_eq!(lower.peek(), Ok(&(3, 0)));
    assert_eq!(lower.count(), 4);

    let mut upper = list.upper_bound(&(3, 0)).unwrap();
    assert_eq!(upper.peek(), Ok(&(4, 0)));

    let mut upper = list.upper_bound(&(0, 0)).unwrap();
    assert_eq!(upper.peek(), Ok(&(1, 0)));

    let lower = list.lower_bound(&(5, 0)).unwrap();
    assert!(lower.at_end());
}

#[test]
fn bound_cursors_walk_on() {
    let list = sorted(2, [1, 2, 2, 2, 2, 3]);
    let mut cursor = list.lower_bound(&2).unwrap();
    assert_eq!(cursor.peek(), Ok(&2));
    cursor.advance().unwrap();
    assert_eq!(cursor.peek(), Ok(&2));

    let mut cursor = list.upper_bound(&2).unwrap();
    assert_eq!(cursor.peek(), Ok(&3));
    assert_eq!(cursor.advance(), Ok(&3));
    assert_eq!(cursor.advance(), Err(Error::EndOfSequence));
}

#[test]
fn contains_in_both_modes() {
    let mut list = unsorted(1, []);
    assert!(!list.contains(&1));
    list.extend([1, 3, 4]);
    assert!(list.contains(&1));
    assert!(!list.contains(&2));

    let mut list = sorted(2, []);
    assert!(!list.contains(&1));
    list.extend([1, 3, 3, 3, 3, 3, 4]);
    assert!(list.contains(&1));
    assert!(list.contains(&3));
    assert!(list.contains(&4));
    assert!(!list.contains(&0));
    assert!(!list.contains(&2));
    assert!(!list.contains(&5));
}

#[test]
fn upper_bound_past_an_equal_run_spanning_buckets() {
    let list = sorted(2, [3, 3, 3, 3, 3, 7]);
    assert_eq!(list.mins(), Some(&[3, 3, 3][..]));

    let rest: Vec<i32> = list.upper_bound(&3).unwrap().copied().collect();
    assert_eq!(rest, vec![7]);

    let rest: Vec<i32> = list.lower_bound(&3).unwrap().copied().collect();
    assert_eq!(rest, vec![3, 3, 3, 3, 3, 7]);
}

#[test]
fn insort_sides_of_an_equal_run_spanning_buckets() {
    let config = Config::new().load(2).sorted();
    let mut list = Fastlist::from_iter_with([3, 3, 3, 3, 3, 7].map(|key| keyed(key, 'a')), config).unwrap();
    assert!(list.bucket_count() > 1);

    list.insort(keyed(3, 'z')).unwrap();
    list.insort_left(keyed(3, 'y')).unwrap();

    let tags: Vec<char> = list.iter().map(|item| item.tag).collect();
    assert_eq!(tags, vec!['y', 'a', 'a', 'a', 'a', 'a', 'z', 'a']);
    assert_eq!(list.last().map(|item| item.key), Some(7));
    list.check_invariants();
}

#[test]
fn unordered_elements_in_an_unsorted_list() {
    let mut list: Fastlist<f32> = Fastlist::with_config(Config::new().load(2)).unwrap();
    list.append_all([0.5, 1.5, 2.5]).unwrap();
    assert_eq!(list.index_of(&1.5), Some(1));
    assert_eq!(list.index_of(&9.0), None);
    assert_eq!(list.as_list(), vec![0.5, 1.5, 2.5]);
}

// =============================================================================
// Length and emptiness
// =============================================================================

#[test]
fn len_and_is_empty() {
    for mut list in [Fastlist::new(), Fastlist::new_sorted()] {
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        list.extend([1]);
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
        list.extend([3, 4]);
        assert_eq!(list.len(), 3);
    }
}

// =============================================================================
// Iteration
// =============================================================================

#[test]
fn forward_and_reverse_iterators() {
    let list = unsorted(3, 0..30);
    let mut it = list.iter();
    assert_eq!(it.next(), Some(&0));
    assert_eq!(it.next(), Some(&1));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), list.as_list());

    let mut it = list.iter_rev();
    assert_eq!(it.next(), Some(&29));
    assert_eq!(it.next(), Some(&28));
    let mut reversed = list.as_list();
    reversed.reverse();
    assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), reversed);

    let mut total = 0;
    for value in &list {
        total += value;
    }
    assert_eq!(total, (0..30).sum::<i32>());
}

#[test]
fn cursor_end_and_peek() {
    let list = unsorted(3, 0..30);
    let mut cursor = list.cursor();
    assert!(!cursor.at_end());
    assert_eq!(cursor.peek(), Ok(&0));
    for _ in 0..30 {
        cursor.advance().unwrap();
    }
    assert!(cursor.at_end());
    assert_eq!(cursor.peek(), Err(Error::EndOfSequence));
}

#[test]
fn delete_at_cursor() {
    for mut list in [unsorted(2, [1, 2, 3]), sorted(2, [1, 2, 3])] {
        {
            let mut cursor = list.cursor_mut();
            cursor.advance().unwrap();
            assert_eq!(cursor.delete(), Ok(2));
            assert_eq!(cursor.peek(), Ok(&3));
        }
        assert_eq!(list.as_list(), vec![1, 3]);
        list.check_invariants();
    }
}

#[test]
fn owned_iteration_and_debug() {
    let list = unsorted(2, [3, 1, 2]);
    assert_eq!(format!("{:?}", list), "[3, 1, 2]");
    assert_eq!(list.clone().into_vec(), vec![3, 1, 2]);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);

    let collected: Fastlist<i32> = (0..5).collect();
    assert_eq!(collected.as_list(), vec![0, 1, 2, 3, 4]);
    assert!(!collected.is_sorted());
}

// =============================================================================
// Alternative storage
// =============================================================================

#[test]
fn smallvec_buckets() {
    let mut list: Fastlist<i64, SmallVec<[i64; 8]>> = Fastlist::with_storage(Config::new().load(2)).unwrap();
    for i in 0..100 {
        list.append(i).unwrap();
    }
    assert_eq!(list.get(-1), Ok(&99));

    let mut list: Fastlist<i64, SmallVec<[i64; 8]>> = Fastlist::with_storage(Config::new().load(2).sorted()).unwrap();
    list.extend([10, 30, 30, 30, 40]);
    list.insort(5).unwrap();
    assert_eq!(list.get(0), Ok(&5));
    list.insort(50).unwrap();
    assert_eq!(list.get(-1), Ok(&50));
    list.insort_left(30).unwrap();
    assert_eq!(list.as_list()[2], 30);
    list.check_invariants();
}
