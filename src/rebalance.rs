// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Bucket size policy.
//!
//! After every mutation of bucket `b` the list checks that bucket's size:
//! at `2 * L` or more it is split, at `L / 5` or fewer it is merged with
//! (or evened against) a neighbour. Splitting and merging both go through
//! [`Fastlist::even`], which either concatenates two adjacent buckets or
//! deals their combined contents out in two halves.

use std::mem;

use tracing::trace;

use crate::fastlist::Fastlist;
use crate::storage::Storage;

impl<T: Clone, S: Storage<T>> Fastlist<T, S> {
    /// Restore the size band around `bucket` after it was touched.
    pub(crate) fn rebalance(&mut self, bucket: usize) {
        let len = self.buckets[bucket].len();

        // Divided forms of `len >= 2L` and `5 * len <= L`; exact on integers
        // and safe for any load.
        if len / 2 >= self.load {
            trace!(bucket, len, load = self.load, "splitting bucket");
            self.buckets.insert(bucket + 1, S::default());
            self.index.insert_bucket(&self.buckets, bucket + 1);
            self.even(bucket);
        }

        if len <= self.load / 5 {
            if bucket != 0 {
                self.even(bucket - 1);
            } else if self.buckets.len() > 1 {
                self.even(bucket);
            }
        }
    }

    /// Merge `bucket` and `bucket + 1` if together they fall under the load,
    /// otherwise split their combined contents evenly between them.
    fn even(&mut self, bucket: usize) {
        let mut left = mem::take(&mut self.buckets[bucket]);
        let right = mem::take(&mut self.buckets[bucket + 1]);
        left.append(right);
        let total = left.len();

        // A split must leave both halves non-empty.
        if total < self.load || total < 2 {
            trace!(bucket, total, "merging buckets");
            self.buckets[bucket] = left;
            self.buckets.remove(bucket + 1);
            self.index.remove_bucket(&self.buckets, bucket + 1);
            return;
        }

        trace!(bucket, total, "evening buckets");
        let (head, tail) = left.split(total / 2);
        self.buckets[bucket] = head;
        self.buckets[bucket + 1] = tail;
        self.index.redistribute(&self.buckets, bucket);
    }
}
