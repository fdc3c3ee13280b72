// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Byte-driven operation stream shared by the AFL harness and the crash
//! replayer.
//!
//! The first byte picks the load. Every following op is decoded from a tag
//! byte plus up to two argument bytes and applied to an unsorted and a
//! sorted list, each shadowed by a plain `Vec`. Any divergence panics.

use fastlist::Config;
use fastlist::Fastlist;

const MAX_LOAD: u8 = 8;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
pub enum FuzzOp {
    /// Positional insert into the unsorted list
    Insert { pos_frac: u8, value: u8 },
    /// Append to the unsorted list
    Append { value: u8 },
    /// Positional pop from the unsorted list
    Pop { pos_frac: u8 },
    /// Overwrite in the unsorted list
    Set { pos_frac: u8, value: u8 },
    /// Remove a range from the unsorted list
    DeleteRange { pos_frac: u8, len: u8 },
    /// Insort into the sorted list, after or before equal elements
    Insort { value: u8, leftmost: bool },
    /// Pop the first or last element of the sorted list
    PopEnd { back: bool },
    /// Delete every copy of a value through a bound cursor
    DeleteEqual { value: u8 },
}

impl FuzzOp {
    pub fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        return match op_type {
            0 if rest.len() >= 2 => Some((FuzzOp::Insert { pos_frac: rest[0], value: rest[1] }, &rest[2..])),
            1 if !rest.is_empty() => Some((FuzzOp::Append { value: rest[0] }, &rest[1..])),
            2 if !rest.is_empty() => Some((FuzzOp::Pop { pos_frac: rest[0] }, &rest[1..])),
            3 if rest.len() >= 2 => Some((FuzzOp::Set { pos_frac: rest[0], value: rest[1] }, &rest[2..])),
            4 if rest.len() >= 2 => Some((
                FuzzOp::DeleteRange {
                    pos_frac: rest[0],
                    len: rest[1] % 8,
                },
                &rest[2..],
            )),
            5 if !rest.is_empty() => Some((
                FuzzOp::Insort {
                    value: rest[0] % 32,
                    leftmost: rest[0] & 0x80 != 0,
                },
                &rest[1..],
            )),
            6 => Some((FuzzOp::PopEnd { back: bytes[0] & 0x80 != 0 }, rest)),
            7 if !rest.is_empty() => Some((FuzzOp::DeleteEqual { value: rest[0] % 32 }, &rest[1..])),
            _ => None,
        };
    }
}

/// Map a fraction byte onto an index into a list of `len > 0` elements,
/// negative for odd fractions.
fn index_for(pos_frac: u8, len: usize) -> isize {
    let pos = (pos_frac as usize * len / 256).min(len - 1);
    if pos_frac % 2 == 1 {
        return pos as isize - len as isize;
    }
    return pos as isize;
}

pub struct Harness {
    unsorted: Fastlist<i32>,
    unsorted_model: Vec<i32>,
    sorted: Fastlist<i32>,
    sorted_model: Vec<i32>,
}

impl Harness {
    /// Build from the first input byte; `None` for empty input.
    pub fn new(data: &[u8]) -> Option<(Harness, &[u8])> {
        let (&first, rest) = data.split_first()?;
        let load = (first % MAX_LOAD) as usize + 1;
        let harness = Harness {
            unsorted: Fastlist::with_config(Config::new().load(load)).ok()?,
            unsorted_model: Vec::new(),
            sorted: Fastlist::with_config(Config::new().load(load).sorted()).ok()?,
            sorted_model: Vec::new(),
        };
        return Some((harness, rest));
    }

    pub fn apply(&mut self, op: FuzzOp) {
        let len = self.unsorted_model.len();
        match op {
            FuzzOp::Insert { pos_frac, value } => {
                if len == 0 {
                    assert!(self.unsorted.insert(0, value as i32).is_err());
                } else {
                    let index = index_for(pos_frac, len);
                    self.unsorted.insert(index, value as i32).unwrap();
                    self.unsorted_model.insert(normalize(index, len), value as i32);
                }
            }
            FuzzOp::Append { value } => {
                self.unsorted.append(value as i32).unwrap();
                self.unsorted_model.push(value as i32);
            }
            FuzzOp::Pop { pos_frac } => {
                if len == 0 {
                    assert!(self.unsorted.pop().is_err());
                } else {
                    let index = index_for(pos_frac, len);
                    let expected = self.unsorted_model.remove(normalize(index, len));
                    assert_eq!(self.unsorted.pop_at(index), Ok(expected));
                }
            }
            FuzzOp::Set { pos_frac, value } => {
                if len > 0 {
                    let index = index_for(pos_frac, len);
                    let slot = &mut self.unsorted_model[normalize(index, len)];
                    assert_eq!(self.unsorted.set(index, value as i32), Ok(*slot));
                    *slot = value as i32;
                }
            }
            FuzzOp::DeleteRange { pos_frac, len: count } => {
                let start = pos_frac as usize * len / 256;
                let end = (start + count as usize).min(len);
                self.unsorted.delete_range(start..end).unwrap();
                self.unsorted_model.drain(start..end);
            }
            FuzzOp::Insort { value, leftmost } => {
                let value = value as i32;
                let at = if leftmost {
                    self.sorted.insort_left(value).unwrap();
                    self.sorted_model.partition_point(|v| *v < value)
                } else {
                    self.sorted.insort(value).unwrap();
                    self.sorted_model.partition_point(|v| *v <= value)
                };
                self.sorted_model.insert(at, value);
            }
            FuzzOp::PopEnd { back } => {
                if back || self.sorted_model.is_empty() {
                    assert_eq!(self.sorted.pop().ok(), self.sorted_model.pop());
                } else {
                    assert_eq!(self.sorted.pop_at(0), Ok(self.sorted_model.remove(0)));
                }
            }
            FuzzOp::DeleteEqual { value } => {
                let value = value as i32;
                let mut cursor = self.sorted.lower_bound_mut(&value).unwrap();
                while cursor.peek() == Ok(&value) {
                    cursor.delete().unwrap();
                }
                self.sorted_model.retain(|v| *v != value);
            }
        }
        self.check();
    }

    pub fn check(&self) {
        self.unsorted.check_invariants();
        self.sorted.check_invariants();
        assert_eq!(self.unsorted.as_list(), self.unsorted_model);
        assert_eq!(self.sorted.as_list(), self.sorted_model);
        assert_eq!(self.unsorted.len(), self.unsorted_model.len());
        assert_eq!(self.sorted.len(), self.sorted_model.len());
    }

    #[allow(dead_code)]
    pub fn summary(&self) -> String {
        return format!(
            "unsorted: {} items in {} buckets, sorted: {} items in {} buckets",
            self.unsorted.len(),
            self.unsorted.bucket_count(),
            self.sorted.len(),
            self.sorted.bucket_count()
        );
    }
}

fn normalize(index: isize, len: usize) -> usize {
    if index < 0 {
        return (index + len as isize) as usize;
    }
    return index as usize;
}
