// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Construction parameters for a [`Fastlist`](crate::Fastlist).

use std::fmt;

use crate::error::Error;
use crate::error::Result;

/// Default target bucket size.
pub const DEFAULT_LOAD: usize = 5000;

/// Whether a list is indexed by position or ordered by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Position-indexed, list-like.
    #[default]
    Unsorted,
    /// Value-ordered multiset with stable duplicate insertion.
    Sorted,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Unsorted => f.write_str("unsorted"),
            Mode::Sorted => f.write_str("sorted"),
        }
    }
}

/// Configuration for a list: target bucket size and mode.
///
/// Buckets are split once they reach `2 * load` elements and merged with a
/// neighbour once they shrink to `load / 5` or fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Target bucket size `L`.
    pub load: usize,
    /// Indexing mode.
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Unsorted list with the default load.
    pub fn new() -> Config {
        return Config {
            load: DEFAULT_LOAD,
            mode: Mode::Unsorted,
        };
    }

    /// Set the target bucket size.
    pub fn load(mut self, load: usize) -> Config {
        self.load = load;
        return self;
    }

    /// Set the mode.
    pub fn mode(mut self, mode: Mode) -> Config {
        self.mode = mode;
        return self;
    }

    /// Shorthand for `mode(Mode::Sorted)`.
    pub fn sorted(self) -> Config {
        return self.mode(Mode::Sorted);
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.load == 0 {
            return Err(Error::InvalidLoad(self.load));
        }
        return Ok(());
    }
}
