// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Errors returned by [`Fastlist`](crate::Fastlist) and its cursors.

use std::fmt;

use thiserror::Error;

use crate::config::Mode;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An operation that one of the two modes refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Positional insert.
    Insert,
    /// Append to the tail.
    Append,
    /// Ordered insert (`insort` / `insort_left`).
    Insort,
    /// Random positional access other than the first and last element.
    IndexAccess,
    /// Lookup by value (bounds, value location).
    ValueLookup,
    /// In-place item assignment.
    Assign,
    /// Deleting a range of positions.
    SliceDelete,
    /// Assigning to a range of positions.
    SliceAssign,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Insert => "insert",
            Operation::Append => "append",
            Operation::Insort => "insort",
            Operation::IndexAccess => "index access",
            Operation::ValueLookup => "value lookup",
            Operation::Assign => "item assignment",
            Operation::SliceDelete => "slice deletion",
            Operation::SliceAssign => "slice assignment",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while operating on a list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index outside of the current bounds, or the list is empty.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// Index as requested by the caller, before normalization.
        index: isize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// The operation is not available in the list's mode.
    #[error("{op} is not supported on a {mode} list")]
    Unsupported {
        /// The refused operation.
        op: Operation,
        /// Mode of the list that refused it.
        mode: Mode,
    },

    /// A cursor was peeked or advanced past its terminal position.
    #[error("cursor reached the end of the sequence")]
    EndOfSequence,

    /// A load of zero would never let a bucket hold an element.
    #[error("invalid bucket load {0}, must be at least 1")]
    InvalidLoad(usize),
}

impl Error {
    pub(crate) fn unsupported(op: Operation, mode: Mode) -> Error {
        Error::Unsupported { op, mode }
    }
}
