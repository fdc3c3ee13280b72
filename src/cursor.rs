// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Direction-aware cursors over the buckets of a [`Fastlist`].
//!
//! A cursor is a `(bucket, offset)` pair plus a direction fixed at creation.
//! Stepping only moves the offset; crossing into the neighbouring bucket is
//! deferred until the next [`Cursor::peek`], so a cursor may briefly sit one
//! past the end (forward) or one before the start (reverse) of its bucket.
//!
//! The terminal position is `(last, len(last))` going forward and `(0, -1)`
//! going backward. Peeking or advancing there yields
//! [`Error::EndOfSequence`].
//!
//! A `Cursor` borrows the list shared and a `CursorMut` borrows it
//! exclusively, so the list cannot be restructured behind a live cursor
//! except through [`CursorMut::delete`].

use crate::error::Error;
use crate::error::Result;
use crate::fastlist::Fastlist;
use crate::storage::Storage;

/// Which way a cursor walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Raw cursor position. `offset` is signed so a reverse cursor can sit one
/// before the start of its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub bucket: usize,
    pub offset: isize,
}

// --- Shared position logic ---

fn start<T: Clone, S: Storage<T>>(list: &Fastlist<T, S>, direction: Direction) -> Position {
    return match direction {
        Direction::Forward => Position { bucket: 0, offset: 0 },
        Direction::Reverse => {
            let last = list.buckets.len() - 1;
            Position {
                bucket: last,
                offset: list.buckets[last].len() as isize - 1,
            }
        }
    };
}

fn at_end<T: Clone, S: Storage<T>>(list: &Fastlist<T, S>, pos: Position, direction: Direction) -> bool {
    return match direction {
        Direction::Forward => {
            let last = list.buckets.len() - 1;
            pos.bucket >= last && pos.offset >= list.buckets[last].len() as isize
        }
        Direction::Reverse => pos.bucket == 0 && pos.offset < 0,
    };
}

/// Apply the deferred bucket crossing and return the in-bucket offset of the
/// element under the cursor.
fn resolve<T: Clone, S: Storage<T>>(list: &Fastlist<T, S>, pos: &mut Position, direction: Direction) -> Result<usize> {
    if at_end(list, *pos, direction) || list.is_empty() {
        return Err(Error::EndOfSequence);
    }

    let len = |bucket: usize| list.buckets.get(bucket).map_or(0, |b| b.len());
    match direction {
        Direction::Forward => {
            if pos.offset >= len(pos.bucket) as isize && pos.bucket + 1 < list.buckets.len() {
                pos.bucket += 1;
                pos.offset = 0;
            }
        }
        Direction::Reverse => {
            if pos.offset < 0 && pos.bucket != 0 {
                pos.bucket -= 1;
                pos.offset = len(pos.bucket) as isize - 1;
            }
        }
    }

    let offset = usize::try_from(pos.offset).map_err(|_| Error::EndOfSequence)?;
    if offset >= len(pos.bucket) {
        return Err(Error::EndOfSequence);
    }
    return Ok(offset);
}

fn step(pos: &mut Position, direction: Direction) {
    match direction {
        Direction::Forward => pos.offset += 1,
        Direction::Reverse => pos.offset -= 1,
    }
}

fn seek<T: Clone + Ord, S: Storage<T>>(
    list: &Fastlist<T, S>,
    value: &T,
    leftmost: bool,
    direction: Direction,
) -> Result<Position> {
    let (bucket, offset) = list.index.locate_value(&list.buckets, value, leftmost)?;
    if direction == Direction::Reverse && offset >= list.buckets[bucket].len() {
        // Nothing at the slot itself: start from the next bucket's head.
        if bucket + 1 < list.buckets.len() {
            return Ok(Position { bucket: bucket + 1, offset: 0 });
        }
        return Ok(Position { bucket: 0, offset: -1 });
    }
    return Ok(Position {
        bucket,
        offset: offset as isize,
    });
}

// --- Read-only cursor ---

/// Shared cursor. Iterating it yields the remaining elements in its
/// direction.
pub struct Cursor<'a, T, S = Vec<T>> {
    list: &'a Fastlist<T, S>,
    pos: Position,
    direction: Direction,
}

impl<'a, T: Clone, S: Storage<T>> Cursor<'a, T, S> {
    pub(crate) fn new(list: &'a Fastlist<T, S>, direction: Direction) -> Cursor<'a, T, S> {
        return Cursor {
            list,
            pos: start(list, direction),
            direction,
        };
    }

    pub fn direction(&self) -> Direction {
        return self.direction;
    }

    pub fn position(&self) -> Position {
        return self.pos;
    }

    pub fn at_end(&self) -> bool {
        return at_end(self.list, self.pos, self.direction);
    }

    /// Element under the cursor, without moving.
    pub fn peek(&mut self) -> Result<&'a T> {
        let offset = resolve(self.list, &mut self.pos, self.direction)?;
        return Ok(&self.list.buckets[self.pos.bucket].as_slice()[offset]);
    }

    /// Element under the cursor, then step past it.
    pub fn advance(&mut self) -> Result<&'a T> {
        let item = self.peek()?;
        step(&mut self.pos, self.direction);
        return Ok(item);
    }
}

impl<'a, T: Clone + Ord, S: Storage<T>> Cursor<'a, T, S> {
    /// Move to the first element `>= value`. Sorted lists only.
    pub fn seek_lower_bound(&mut self, value: &T) -> Result<()> {
        self.pos = seek(self.list, value, true, self.direction)?;
        return Ok(());
    }

    /// Move to the first element `> value`. Sorted lists only.
    pub fn seek_upper_bound(&mut self, value: &T) -> Result<()> {
        self.pos = seek(self.list, value, false, self.direction)?;
        return Ok(());
    }
}

impl<'a, T: Clone, S: Storage<T>> Iterator for Cursor<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        return self.advance().ok();
    }
}

impl<'a, T, S> Clone for Cursor<'a, T, S> {
    fn clone(&self) -> Self {
        return Cursor {
            list: self.list,
            pos: self.pos,
            direction: self.direction,
        };
    }
}

// --- Deleting cursor ---

/// Exclusive cursor that can remove the element under it.
pub struct CursorMut<'a, T, S = Vec<T>> {
    list: &'a mut Fastlist<T, S>,
    pos: Position,
    direction: Direction,
}

impl<'a, T: Clone, S: Storage<T>> CursorMut<'a, T, S> {
    pub(crate) fn new(list: &'a mut Fastlist<T, S>, direction: Direction) -> CursorMut<'a, T, S> {
        let pos = start(list, direction);
        return CursorMut { list, pos, direction };
    }

    pub fn direction(&self) -> Direction {
        return self.direction;
    }

    pub fn position(&self) -> Position {
        return self.pos;
    }

    pub fn at_end(&self) -> bool {
        return at_end(self.list, self.pos, self.direction);
    }

    pub fn peek(&mut self) -> Result<&T> {
        let offset = resolve(self.list, &mut self.pos, self.direction)?;
        return Ok(&self.list.buckets[self.pos.bucket].as_slice()[offset]);
    }

    pub fn advance(&mut self) -> Result<&T> {
        let offset = resolve(self.list, &mut self.pos, self.direction)?;
        let bucket = self.pos.bucket;
        step(&mut self.pos, self.direction);
        return Ok(&self.list.buckets[bucket].as_slice()[offset]);
    }

    /// Remove and return the element under the cursor.
    ///
    /// The cursor stays on the same slot, now holding the element that slid
    /// into it, and is not advanced in either direction. When the removed
    /// element was the last one, nothing slides in: a forward cursor is then
    /// at its end and a reverse cursor moves to the new last element.
    pub fn delete(&mut self) -> Result<T> {
        let offset = resolve(self.list, &mut self.pos, self.direction)?;
        let bucket = self.pos.bucket;
        let rank = self.list.index.rank_of(&self.list.buckets, bucket, offset);
        let item = self.list.remove_at(bucket, offset);

        // The rebalance may have moved the slot to another bucket.
        let len = self.list.len();
        let target = match self.direction {
            Direction::Reverse if rank >= len => len.checked_sub(1),
            _ => Some(rank),
        };
        self.pos = match target {
            Some(rank) => {
                let (bucket, offset) = self.list.index.position_of(&self.list.buckets, rank);
                Position {
                    bucket,
                    offset: offset as isize,
                }
            }
            None => Position { bucket: 0, offset: -1 },
        };
        return Ok(item);
    }
}

impl<'a, T: Clone + Ord, S: Storage<T>> CursorMut<'a, T, S> {
    pub fn seek_lower_bound(&mut self, value: &T) -> Result<()> {
        self.pos = seek(self.list, value, true, self.direction)?;
        return Ok(());
    }

    pub fn seek_upper_bound(&mut self, value: &T) -> Result<()> {
        self.pos = seek(self.list, value, false, self.direction)?;
        return Ok(());
    }
}
