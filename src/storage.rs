// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Backing storage for a single bucket.
//!
//! A bucket only needs to be an ordered, contiguous run of elements that can
//! be split in two and glued back together. `Vec<T>` is the default; a
//! `SmallVec` keeps small buckets inline.

use smallvec::Array;
use smallvec::SmallVec;

pub trait Storage<T>: Default {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];

    fn insert(&mut self, index: usize, item: T);

    fn remove(&mut self, index: usize) -> T;

    fn push(&mut self, item: T);

    /// Split into `[0, index)` and `[index, len)`.
    fn split(self, index: usize) -> (Self, Self);

    fn append(&mut self, other: Self);
}

impl<T> Storage<T> for Vec<T> {
    fn len(&self) -> usize { self.len() }

    fn as_slice(&self) -> &[T] { self.as_slice() }

    fn as_mut_slice(&mut self) -> &mut [T] { self.as_mut_slice() }

    fn insert(&mut self, index: usize, item: T) { self.insert(index, item) }

    fn remove(&mut self, index: usize) -> T { self.remove(index) }

    fn push(&mut self, item: T) { self.push(item) }

    fn split(mut self, index: usize) -> (Self, Self) {
        let end = self.split_off(index);
        (self, end)
    }

    fn append(&mut self, mut other: Self) {
        Vec::append(self, &mut other);
    }
}

impl<A: Array> Storage<A::Item> for SmallVec<A> {
    fn len(&self) -> usize { self.len() }

    fn as_slice(&self) -> &[A::Item] { self.as_slice() }

    fn as_mut_slice(&mut self) -> &mut [A::Item] { self.as_mut_slice() }

    fn insert(&mut self, index: usize, item: A::Item) { self.insert(index, item) }

    fn remove(&mut self, index: usize) -> A::Item { self.remove(index) }

    fn push(&mut self, item: A::Item) { self.push(item) }

    fn split(mut self, index: usize) -> (Self, Self) {
        let end: SmallVec<A> = self.drain(index..).collect();
        (self, end)
    }

    fn append(&mut self, other: Self) {
        self.extend(other);
    }
}
