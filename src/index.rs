// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Auxiliary bucket index and the locator built on top of it.
//!
//! An unsorted list keeps the cumulative start position of every bucket so a
//! logical index can be resolved with one binary search over the starts. A
//! sorted list keeps the first (smallest) element of every bucket so a value
//! can be resolved with one binary search over the minimums followed by one
//! inside the chosen bucket.
//!
//! Both variants are repaired locally after each mutation; repair costs
//! O(buckets), which stays O(sqrt n) under the load policy.

use crate::config::Mode;
use crate::error::Error;
use crate::error::Operation;
use crate::error::Result;
use crate::storage::Storage;

#[derive(Clone, Debug)]
pub(crate) enum Index<T> {
    /// `starts[i]` is the number of elements in buckets `0..i`.
    Offsets(Vec<usize>),
    /// `mins[i]` is the first element of bucket `i`. Empty iff the list is.
    Mins(Vec<T>),
}

impl<T> Index<T> {
    pub fn new(mode: Mode) -> Index<T> {
        return match mode {
            Mode::Unsorted => Index::Offsets(vec![0]),
            Mode::Sorted => Index::Mins(Vec::new()),
        };
    }

    pub fn mode(&self) -> Mode {
        return match self {
            Index::Offsets(_) => Mode::Unsorted,
            Index::Mins(_) => Mode::Sorted,
        };
    }

    /// Total number of elements.
    pub fn len<S: Storage<T>>(&self, buckets: &[S]) -> usize {
        return match self {
            Index::Offsets(starts) => {
                let last = buckets.len() - 1;
                starts[last] + buckets[last].len()
            }
            Index::Mins(_) => buckets.iter().map(|b| b.len()).sum(),
        };
    }

    /// Resolve a logical index to `(bucket, offset)`.
    ///
    /// `0` and `-1` are answered without a search in both modes; any other
    /// index is only available on an unsorted list.
    pub fn locate_index<S: Storage<T>>(&self, buckets: &[S], index: isize) -> Result<(usize, usize)> {
        if buckets[0].is_empty() {
            return Err(Error::OutOfRange { index, len: 0 });
        }
        if index == 0 {
            return Ok((0, 0));
        }
        let last = buckets.len() - 1;
        if index == -1 {
            return Ok((last, buckets[last].len() - 1));
        }

        let starts = match self {
            Index::Offsets(starts) => starts,
            Index::Mins(_) => return Err(Error::unsupported(Operation::IndexAccess, Mode::Sorted)),
        };

        let len = starts[last] + buckets[last].len();
        let normalized = if index < 0 { index + len as isize } else { index };
        if normalized < 0 || normalized as usize >= len {
            return Err(Error::OutOfRange { index, len });
        }

        let pos = normalized as usize;
        let bucket = starts.partition_point(|&start| start <= pos) - 1;
        return Ok((bucket, pos - starts[bucket]));
    }

    /// Global rank of the element at `(bucket, offset)`.
    pub fn rank_of<S: Storage<T>>(&self, buckets: &[S], bucket: usize, offset: usize) -> usize {
        return match self {
            Index::Offsets(starts) => starts[bucket] + offset,
            Index::Mins(_) => buckets[..bucket].iter().map(|b| b.len()).sum::<usize>() + offset,
        };
    }

    /// Inverse of [`Index::rank_of`]. Ranks at or past the end resolve to
    /// the forward terminal slot `(last, len(last))`.
    pub fn position_of<S: Storage<T>>(&self, buckets: &[S], rank: usize) -> (usize, usize) {
        let last = buckets.len() - 1;
        if let Index::Offsets(starts) = self {
            if rank >= starts[last] + buckets[last].len() {
                return (last, buckets[last].len());
            }
            let bucket = starts.partition_point(|&start| start <= rank) - 1;
            return (bucket, rank - starts[bucket]);
        }

        let mut remaining = rank;
        for (i, bucket) in buckets.iter().enumerate() {
            if remaining < bucket.len() {
                return (i, remaining);
            }
            remaining -= bucket.len();
        }
        return (last, buckets[last].len());
    }
}

impl<T: Ord> Index<T> {
    /// Resolve a value to the `(bucket, offset)` where it would be inserted.
    ///
    /// With `leftmost` the slot is before the first equal element, otherwise
    /// after the last one, matching `bisect_left` / `bisect_right`.
    pub fn locate_value<S: Storage<T>>(&self, buckets: &[S], value: &T, leftmost: bool) -> Result<(usize, usize)> {
        let mins = match self {
            Index::Mins(mins) => mins,
            Index::Offsets(_) => return Err(Error::unsupported(Operation::ValueLookup, Mode::Unsorted)),
        };

        return Ok(Self::bisect(mins, buckets, value, leftmost));
    }

    /// Two-level bisection: over the bucket minimums, then inside the
    /// candidate bucket.
    ///
    /// Leftmost picks the last bucket whose minimum is `< value`, rightmost
    /// the last one whose minimum is `<= value`, so a run of equal elements
    /// spanning several buckets is entered at its first or left at its last
    /// element.
    pub fn bisect<S: Storage<T>>(mins: &[T], buckets: &[S], value: &T, leftmost: bool) -> (usize, usize) {
        let bucket = if leftmost {
            mins.partition_point(|min| min < value).saturating_sub(1)
        } else {
            mins.partition_point(|min| min <= value).saturating_sub(1)
        };

        let items = buckets[bucket].as_slice();
        let offset = if leftmost {
            items.partition_point(|item| item < value)
        } else {
            items.partition_point(|item| item <= value)
        };
        return (bucket, offset);
    }
}

impl<T: Clone> Index<T> {
    /// Repair after an element was inserted at `(bucket, offset)`.
    pub fn note_insert<S: Storage<T>>(&mut self, buckets: &[S], bucket: usize, offset: usize) {
        match self {
            Index::Offsets(starts) => {
                for start in &mut starts[bucket + 1..] {
                    *start += 1;
                }
            }
            Index::Mins(mins) => {
                let head = &buckets[bucket].as_slice()[0];
                if mins.is_empty() {
                    mins.push(head.clone());
                } else if offset == 0 {
                    mins[bucket] = head.clone();
                }
            }
        }
    }

    /// Repair after the element at `(bucket, offset)` was removed.
    ///
    /// A sorted bucket that became empty keeps a stale minimum until the
    /// rebalancer merges it away.
    pub fn note_remove<S: Storage<T>>(&mut self, buckets: &[S], bucket: usize, offset: usize) {
        match self {
            Index::Offsets(starts) => {
                for start in &mut starts[bucket + 1..] {
                    *start -= 1;
                }
            }
            Index::Mins(mins) => {
                if buckets.len() == 1 && buckets[0].is_empty() {
                    mins.clear();
                } else if offset == 0 {
                    if let Some(head) = buckets[bucket].as_slice().first() {
                        mins[bucket] = head.clone();
                    }
                }
            }
        }
    }

    /// Add an entry for the empty bucket just inserted at `bucket`.
    ///
    /// For a sorted list the placeholder is the last element of the
    /// preceding bucket, which never breaks the ordering of `mins`.
    pub fn insert_bucket<S: Storage<T>>(&mut self, buckets: &[S], bucket: usize) {
        match self {
            Index::Offsets(starts) => {
                let start = if bucket == 0 {
                    0
                } else {
                    starts[bucket - 1] + buckets[bucket - 1].len()
                };
                starts.insert(bucket, start);
            }
            Index::Mins(mins) => {
                if mins.is_empty() {
                    return;
                }
                let before = bucket.saturating_sub(1);
                if let Some(placeholder) = buckets[before].as_slice().last() {
                    mins.insert(bucket, placeholder.clone());
                }
            }
        }
    }

    /// Drop the entry of a bucket that was merged into its predecessor, and
    /// refresh the predecessor.
    pub fn remove_bucket<S: Storage<T>>(&mut self, buckets: &[S], bucket: usize) {
        match self {
            Index::Offsets(starts) => {
                starts.remove(bucket);
            }
            Index::Mins(mins) => {
                if bucket < mins.len() {
                    mins.remove(bucket);
                }
                if buckets.len() == 1 && buckets[0].is_empty() {
                    mins.clear();
                } else {
                    Self::refresh_min(mins, buckets, bucket - 1);
                }
            }
        }
    }

    /// Repair the boundary between `bucket` and `bucket + 1` after their
    /// contents were redistributed.
    pub fn redistribute<S: Storage<T>>(&mut self, buckets: &[S], bucket: usize) {
        match self {
            Index::Offsets(starts) => {
                starts[bucket + 1] = starts[bucket] + buckets[bucket].len();
            }
            Index::Mins(mins) => {
                Self::refresh_min(mins, buckets, bucket);
                Self::refresh_min(mins, buckets, bucket + 1);
            }
        }
    }

    fn refresh_min<S: Storage<T>>(mins: &mut [T], buckets: &[S], bucket: usize) {
        if let Some(head) = buckets[bucket].as_slice().first() {
            mins[bucket] = head.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(buckets: &[Vec<u32>]) -> Index<u32> {
        let mut starts = Vec::new();
        let mut total = 0;
        for bucket in buckets {
            starts.push(total);
            total += bucket.len();
        }
        return Index::Offsets(starts);
    }

    fn mins(buckets: &[Vec<u32>]) -> Index<u32> {
        return Index::Mins(buckets.iter().map(|b| b[0]).collect());
    }

    #[test]
    fn locate_index_binary_searches_starts() {
        let buckets = vec![vec![1, 2, 4, 3], vec![6, 1, 1, 1], vec![1, 1]];
        let index = offsets(&buckets);

        assert_eq!(index.locate_index(&buckets, 0), Ok((0, 0)));
        assert_eq!(index.locate_index(&buckets, 3), Ok((0, 3)));
        assert_eq!(index.locate_index(&buckets, 4), Ok((1, 0)));
        assert_eq!(index.locate_index(&buckets, 9), Ok((2, 1)));
        assert_eq!(index.locate_index(&buckets, -1), Ok((2, 1)));
        assert_eq!(index.locate_index(&buckets, -3), Ok((1, 3)));
        assert_eq!(index.locate_index(&buckets, -10), Ok((0, 0)));
    }

    #[test]
    fn locate_index_out_of_range() {
        let buckets = vec![vec![1, 2], vec![3]];
        let index = offsets(&buckets);

        assert_eq!(index.locate_index(&buckets, 3), Err(Error::OutOfRange { index: 3, len: 3 }));
        assert_eq!(index.locate_index(&buckets, -4), Err(Error::OutOfRange { index: -4, len: 3 }));

        let empty: Vec<Vec<u32>> = vec![vec![]];
        let index = offsets(&empty);
        assert_eq!(index.locate_index(&empty, 0), Err(Error::OutOfRange { index: 0, len: 0 }));
        assert_eq!(index.locate_index(&empty, -1), Err(Error::OutOfRange { index: -1, len: 0 }));
    }

    #[test]
    fn sorted_index_only_has_ends() {
        let buckets = vec![vec![1, 2], vec![3, 4]];
        let index = mins(&buckets);

        assert_eq!(index.locate_index(&buckets, 0), Ok((0, 0)));
        assert_eq!(index.locate_index(&buckets, -1), Ok((1, 1)));
        assert_eq!(
            index.locate_index(&buckets, 1),
            Err(Error::unsupported(Operation::IndexAccess, Mode::Sorted))
        );
    }

    #[test]
    fn locate_value_left_and_right() {
        let buckets = vec![vec![1, 3], vec![3, 3, 4]];
        let index = mins(&buckets);

        assert_eq!(index.locate_value(&buckets, &3, true), Ok((0, 1)));
        assert_eq!(index.locate_value(&buckets, &3, false), Ok((1, 2)));
        assert_eq!(index.locate_value(&buckets, &0, false), Ok((0, 0)));
        assert_eq!(index.locate_value(&buckets, &5, true), Ok((1, 3)));
        assert_eq!(index.locate_value(&buckets, &2, false), Ok((0, 1)));
    }

    #[test]
    fn equal_run_across_buckets() {
        let buckets = vec![vec![3, 3], vec![3, 3], vec![3, 7]];
        let index = mins(&buckets);

        assert_eq!(index.locate_value(&buckets, &3, true), Ok((0, 0)));
        assert_eq!(index.locate_value(&buckets, &3, false), Ok((2, 1)));
        assert_eq!(index.locate_value(&buckets, &2, false), Ok((0, 0)));
        assert_eq!(index.locate_value(&buckets, &7, true), Ok((2, 1)));
        assert_eq!(index.locate_value(&buckets, &7, false), Ok((2, 2)));
    }

    #[test]
    fn locate_value_on_empty_index() {
        let buckets: Vec<Vec<u32>> = vec![vec![]];
        let index: Index<u32> = Index::Mins(Vec::new());
        assert_eq!(index.locate_value(&buckets, &4, true), Ok((0, 0)));
        assert_eq!(index.locate_value(&buckets, &4, false), Ok((0, 0)));
    }

    #[test]
    fn locate_value_needs_sorted_index() {
        let buckets = vec![vec![1, 2]];
        let index = offsets(&buckets);
        assert_eq!(
            index.locate_value(&buckets, &1, false),
            Err(Error::unsupported(Operation::ValueLookup, Mode::Unsorted))
        );
    }

    #[test]
    fn rank_and_position_agree() {
        let buckets = vec![vec![1, 2, 3], vec![4], vec![5, 6]];
        for index in [offsets(&buckets), mins(&buckets)] {
            for rank in 0..6 {
                let (bucket, offset) = index.position_of(&buckets, rank);
                assert_eq!(index.rank_of(&buckets, bucket, offset), rank);
            }
            assert_eq!(index.position_of(&buckets, 6), (2, 2));
            assert_eq!(index.len(&buckets), 6);
        }
    }
}
