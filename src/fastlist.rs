// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Bucketed list.
//!
//! Elements live in a `Vec` of buckets whose sizes hover around the load `L`.
//! An insert or delete touches one bucket (O(L)) and repairs the auxiliary
//! index (O(buckets)) instead of shifting the whole array. With `L` near
//! sqrt(n) both terms are O(sqrt n).
//!
//! The list runs in one of two modes fixed at construction:
//!
//! - **unsorted**: a plain sequence addressed by position;
//! - **sorted**: a multiset kept in order by [`Fastlist::insort`], addressed
//!   by value. Only the first and last element can be reached by position.

use std::fmt;
use std::mem;
use std::ops::Bound;
use std::ops::RangeBounds;

use tracing::debug;

use crate::config::Config;
use crate::config::Mode;
use crate::cursor::Cursor;
use crate::cursor::CursorMut;
use crate::cursor::Direction;
use crate::error::Error;
use crate::error::Operation;
use crate::error::Result;
use crate::index::Index;
use crate::storage::Storage;

/// A list partitioned into bounded-size buckets.
///
/// `S` is the storage used for each bucket, `Vec<T>` unless chosen otherwise
/// through [`Fastlist::with_storage`].
#[derive(Clone)]
pub struct Fastlist<T, S = Vec<T>> {
    /// Never empty. Only bucket 0 may hold no elements, and only when the
    /// whole list is empty.
    pub(crate) buckets: Vec<S>,
    pub(crate) index: Index<T>,
    pub(crate) load: usize,
}

impl<T: Clone> Fastlist<T> {
    /// Empty unsorted list with the default load.
    pub fn new() -> Fastlist<T> {
        return Self::from_config(Config::new());
    }

    /// Empty sorted list with the default load.
    pub fn new_sorted() -> Fastlist<T> {
        return Self::from_config(Config::new().sorted());
    }

    /// Empty list with the given configuration.
    pub fn with_config(config: Config) -> Result<Fastlist<T>> {
        return Self::with_storage(config);
    }
}

impl<T: Clone> Default for Fastlist<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone, S: Storage<T>> Fastlist<T, S> {
    /// Empty list with the given configuration and bucket storage.
    pub fn with_storage(config: Config) -> Result<Fastlist<T, S>> {
        config.validate()?;
        debug!(load = config.load, mode = %config.mode, "creating list");
        return Ok(Self::from_config(config));
    }

    fn from_config(config: Config) -> Fastlist<T, S> {
        return Fastlist {
            buckets: vec![S::default()],
            index: Index::new(config.mode),
            load: config.load,
        };
    }

    // --- Introspection ---

    pub fn len(&self) -> usize {
        return self.index.len(&self.buckets);
    }

    /// Decided by bucket 0 alone, which is only empty when the list is.
    pub fn is_empty(&self) -> bool {
        return self.buckets[0].is_empty();
    }

    pub fn load(&self) -> usize {
        return self.load;
    }

    pub fn mode(&self) -> Mode {
        return self.index.mode();
    }

    pub fn is_sorted(&self) -> bool {
        return self.mode() == Mode::Sorted;
    }

    pub fn bucket_count(&self) -> usize {
        return self.buckets.len();
    }

    /// The buckets in order, as slices.
    pub fn buckets(&self) -> impl Iterator<Item = &[T]> {
        return self.buckets.iter().map(|b| b.as_slice());
    }

    /// Cumulative bucket start positions of an unsorted list.
    pub fn offsets(&self) -> Option<&[usize]> {
        return match &self.index {
            Index::Offsets(starts) => Some(starts),
            Index::Mins(_) => None,
        };
    }

    /// First element of every bucket of a sorted list.
    pub fn mins(&self) -> Option<&[T]> {
        return match &self.index {
            Index::Offsets(_) => None,
            Index::Mins(mins) => Some(mins),
        };
    }

    // --- Positional access ---

    /// Element at `index`. Negative indices count from the end.
    ///
    /// A sorted list only answers `0` and `-1`.
    pub fn get(&self, index: isize) -> Result<&T> {
        let (bucket, offset) = self.index.locate_index(&self.buckets, index)?;
        return Ok(&self.buckets[bucket].as_slice()[offset]);
    }

    /// Mutable element at `index`. Unsupported on a sorted list.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let (bucket, offset) = self.index.locate_index(&self.buckets, index)?;
        if self.is_sorted() {
            return Err(Error::unsupported(Operation::Assign, Mode::Sorted));
        }
        return Ok(&mut self.buckets[bucket].as_mut_slice()[offset]);
    }

    pub fn first(&self) -> Option<&T> {
        return self.get(0).ok();
    }

    pub fn last(&self) -> Option<&T> {
        return self.get(-1).ok();
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        return Ok(mem::replace(slot, value));
    }

    /// Copy of the elements in `range`, clamped to the list like a slice
    /// expression would be.
    ///
    /// A sorted list only hands out the full range.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<Vec<T>> {
        let len = self.len();
        let (start, end) = clamp_range(&range, len);
        if self.is_sorted() {
            if start == 0 && end == len {
                return Ok(self.as_list());
            }
            return Err(Error::unsupported(Operation::IndexAccess, Mode::Sorted));
        }
        if start >= end {
            return Ok(Vec::new());
        }

        let (bucket, offset) = self.index.locate_index(&self.buckets, start as isize)?;
        let mut out = Vec::with_capacity(end - start);
        let mut skip = offset;
        for b in &self.buckets[bucket..] {
            let items = &b.as_slice()[skip..];
            let take = items.len().min(end - start - out.len());
            out.extend_from_slice(&items[..take]);
            if out.len() == end - start {
                break;
            }
            skip = 0;
        }
        return Ok(out);
    }

    /// Flatten into one contiguous `Vec`.
    pub fn as_list(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        for bucket in &self.buckets {
            out.extend_from_slice(bucket.as_slice());
        }
        return out;
    }

    pub fn into_vec(self) -> Vec<T> {
        return self.as_list();
    }

    // --- Mutation ---

    /// Insert `value` before the element currently at `index`.
    ///
    /// Unlike `Vec::insert`, `index` must address an existing element, so
    /// an empty list rejects every insert. Use [`Fastlist::append`] to grow
    /// the tail.
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        if self.is_sorted() {
            return Err(Error::unsupported(Operation::Insert, Mode::Sorted));
        }
        let (bucket, offset) = self.index.locate_index(&self.buckets, index)?;
        self.insert_at(bucket, offset, value);
        return Ok(());
    }

    /// Push `value` onto the tail of an unsorted list.
    pub fn append(&mut self, value: T) -> Result<()> {
        if self.is_sorted() {
            return Err(Error::unsupported(Operation::Append, Mode::Sorted));
        }
        self.push_back(value);
        return Ok(());
    }

    /// Append every element of `iter` to an unsorted list. Unlike
    /// [`Extend`], this asks nothing of `T` beyond `Clone`.
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<()> {
        if self.is_sorted() {
            return Err(Error::unsupported(Operation::Append, Mode::Sorted));
        }
        for value in iter {
            self.push_back(value);
        }
        return Ok(());
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<T> {
        return self.pop_at(-1);
    }

    /// Remove and return the element at `index`.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let (bucket, offset) = self.index.locate_index(&self.buckets, index)?;
        return Ok(self.remove_at(bucket, offset));
    }

    /// Remove the elements in `range`, clamped to the list. Unsupported on
    /// a sorted list.
    pub fn delete_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<()> {
        if self.is_sorted() {
            return Err(Error::unsupported(Operation::SliceDelete, Mode::Sorted));
        }
        let (start, end) = clamp_range(&range, self.len());
        for _ in start..end {
            let (bucket, offset) = self.index.locate_index(&self.buckets, start as isize)?;
            self.remove_at(bucket, offset);
        }
        return Ok(());
    }

    /// Range assignment is not offered in either mode.
    pub fn assign_range<R, I>(&mut self, _range: R, _values: I) -> Result<()>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        return Err(Error::unsupported(Operation::SliceAssign, self.mode()));
    }

    /// Drop every element and bucket, keeping load and mode.
    pub fn clear(&mut self) {
        debug!(len = self.len(), buckets = self.buckets.len(), "clearing list");
        let mode = self.mode();
        self.buckets = vec![S::default()];
        self.index = Index::new(mode);
    }

    pub(crate) fn push_back(&mut self, value: T) {
        if self.buckets[self.buckets.len() - 1].len() >= self.load {
            self.buckets.push(S::default());
            self.index.insert_bucket(&self.buckets, self.buckets.len() - 1);
        }
        let last = self.buckets.len() - 1;
        let offset = self.buckets[last].len();
        self.buckets[last].push(value);
        self.index.note_insert(&self.buckets, last, offset);
    }

    pub(crate) fn insert_at(&mut self, bucket: usize, offset: usize, value: T) {
        self.buckets[bucket].insert(offset, value);
        self.index.note_insert(&self.buckets, bucket, offset);
        self.rebalance(bucket);
    }

    pub(crate) fn remove_at(&mut self, bucket: usize, offset: usize) -> T {
        let item = self.buckets[bucket].remove(offset);
        self.index.note_remove(&self.buckets, bucket, offset);
        self.rebalance(bucket);
        return item;
    }

    // --- Iteration ---

    /// Forward cursor from the first element. Also an `Iterator`.
    pub fn cursor(&self) -> Cursor<'_, T, S> {
        return Cursor::new(self, Direction::Forward);
    }

    /// Reverse cursor from the last element.
    pub fn cursor_rev(&self) -> Cursor<'_, T, S> {
        return Cursor::new(self, Direction::Reverse);
    }

    /// Forward cursor that can delete the element under it.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, S> {
        return CursorMut::new(self, Direction::Forward);
    }

    /// Reverse cursor that can delete the element under it.
    pub fn cursor_mut_rev(&mut self) -> CursorMut<'_, T, S> {
        return CursorMut::new(self, Direction::Reverse);
    }

    pub fn iter(&self) -> Cursor<'_, T, S> {
        return self.cursor();
    }

    pub fn iter_rev(&self) -> Cursor<'_, T, S> {
        return self.cursor_rev();
    }
}

impl<T: Clone + PartialEq, S: Storage<T>> Fastlist<T, S> {
    /// Rank of the first element equal to `value`, found by a scan. Needs
    /// only `PartialEq`; on a sorted list [`Fastlist::contains`] is faster.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        return Iterator::position(&mut self.iter(), |item| item == value);
    }
}

impl<T: Clone + Ord> Fastlist<T> {
    /// Build a list from `iter` under `config`, appending in unsorted mode
    /// and insorting in sorted mode.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, config: Config) -> Result<Fastlist<T>> {
        let mut list = Self::with_config(config)?;
        list.extend(iter);
        return Ok(list);
    }
}

impl<T: Clone + Ord, S: Storage<T>> Fastlist<T, S> {
    /// Insert `value` after any equal elements of a sorted list.
    pub fn insort(&mut self, value: T) -> Result<()> {
        return self.insort_side(value, false);
    }

    /// Insert `value` before any equal elements of a sorted list.
    pub fn insort_left(&mut self, value: T) -> Result<()> {
        return self.insort_side(value, true);
    }

    fn insort_side(&mut self, value: T, leftmost: bool) -> Result<()> {
        if !self.is_sorted() {
            return Err(Error::unsupported(Operation::Insort, Mode::Unsorted));
        }
        let (bucket, offset) = self.index.locate_value(&self.buckets, &value, leftmost)?;
        self.insert_at(bucket, offset, value);
        return Ok(());
    }

    /// Append to an unsorted list, insort into a sorted one.
    pub fn add(&mut self, value: T) {
        if let Index::Mins(mins) = &self.index {
            let (bucket, offset) = Index::bisect(mins, &self.buckets, &value, false);
            self.insert_at(bucket, offset, value);
        } else {
            self.push_back(value);
        }
    }

    /// Membership test: a bound search on a sorted list, a scan otherwise.
    pub fn contains(&self, value: &T) -> bool {
        if !self.is_sorted() {
            return self.index_of(value).is_some();
        }
        return match self.lower_bound(value) {
            Ok(mut cursor) => cursor.peek().is_ok_and(|item| item == value),
            Err(_) => false,
        };
    }

    /// Cursor on the first element `>= value`.
    pub fn lower_bound(&self, value: &T) -> Result<Cursor<'_, T, S>> {
        let mut cursor = self.cursor();
        cursor.seek_lower_bound(value)?;
        return Ok(cursor);
    }

    /// Cursor on the first element `> value`.
    pub fn upper_bound(&self, value: &T) -> Result<Cursor<'_, T, S>> {
        let mut cursor = self.cursor();
        cursor.seek_upper_bound(value)?;
        return Ok(cursor);
    }

    /// Deleting cursor on the first element `>= value`.
    pub fn lower_bound_mut(&mut self, value: &T) -> Result<CursorMut<'_, T, S>> {
        let mut cursor = self.cursor_mut();
        cursor.seek_lower_bound(value)?;
        return Ok(cursor);
    }

    /// Deleting cursor on the first element `> value`.
    pub fn upper_bound_mut(&mut self, value: &T) -> Result<CursorMut<'_, T, S>> {
        let mut cursor = self.cursor_mut();
        cursor.seek_upper_bound(value)?;
        return Ok(cursor);
    }

    // --- Invariant checking ---

    /// Panic if the bucket structure or the auxiliary index is inconsistent.
    /// Compiled out without debug assertions.
    #[cfg(debug_assertions)]
    pub fn check_invariants(&self) {
        assert!(!self.buckets.is_empty(), "INVARIANT VIOLATED: no buckets");
        for (i, bucket) in self.buckets.iter().enumerate().skip(1) {
            assert!(
                !bucket.is_empty(),
                "INVARIANT VIOLATED: bucket {} of {} is empty",
                i,
                self.buckets.len()
            );
        }

        let total: usize = self.buckets.iter().map(|b| b.len()).sum();
        assert_eq!(
            total,
            self.len(),
            "INVARIANT VIOLATED: sum of bucket lengths={} != len()={}",
            total,
            self.len()
        );
        assert_eq!(self.is_empty(), total == 0, "INVARIANT VIOLATED: bucket 0 emptiness");

        match &self.index {
            Index::Offsets(starts) => {
                assert_eq!(starts.len(), self.buckets.len(), "INVARIANT VIOLATED: starts length");
                let mut expected = 0;
                for (i, bucket) in self.buckets.iter().enumerate() {
                    assert_eq!(
                        starts[i], expected,
                        "INVARIANT VIOLATED: starts[{}]={} != {}",
                        i, starts[i], expected
                    );
                    expected += bucket.len();
                }
            }
            Index::Mins(mins) => {
                if total == 0 {
                    assert!(mins.is_empty(), "INVARIANT VIOLATED: mins of an empty list");
                    return;
                }
                assert_eq!(mins.len(), self.buckets.len(), "INVARIANT VIOLATED: mins length");
                let mut previous: Option<&T> = None;
                for (i, bucket) in self.buckets.iter().enumerate() {
                    let items = bucket.as_slice();
                    assert!(
                        mins[i] == items[0],
                        "INVARIANT VIOLATED: mins[{}] is not the head of its bucket",
                        i
                    );
                    for item in items {
                        if let Some(prev) = previous {
                            assert!(prev <= item, "INVARIANT VIOLATED: order broken in bucket {}", i);
                        }
                        previous = Some(item);
                    }
                }
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub fn check_invariants(&self) {}
}

impl<T: Clone + Ord, S: Storage<T>> Extend<T> for Fastlist<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Clone> FromIterator<T> for Fastlist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Fastlist::new();
        for value in iter {
            list.push_back(value);
        }
        return list;
    }
}

impl<'a, T: Clone, S: Storage<T>> IntoIterator for &'a Fastlist<T, S> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        return self.cursor();
    }
}

impl<T, S: Storage<T> + IntoIterator<Item = T>> IntoIterator for Fastlist<T, S> {
    type Item = T;
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<S>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.buckets.into_iter().flatten();
    }
}

impl<T: fmt::Debug, S: Storage<T>> fmt::Debug for Fastlist<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.buckets.iter().flat_map(|b| b.as_slice())).finish();
    }
}

/// Resolve a range against `len` the way a slice expression clamps it.
fn clamp_range<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    let start = start.min(len);
    let end = end.min(len).max(start);
    return (start, end);
}
