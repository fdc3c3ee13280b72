// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Fastlist - a bucketed list with O(sqrt n) inserts and deletes.
//!
//! # Quick Start
//!
//! ```
//! use fastlist::Config;
//! use fastlist::Fastlist;
//!
//! // A position-indexed list
//! let mut list: Fastlist<i32> = Fastlist::new();
//! list.append(1).unwrap();
//! list.append(3).unwrap();
//! list.insert(1, 2).unwrap();
//! assert_eq!(list.as_list(), vec![1, 2, 3]);
//!
//! // A sorted multiset
//! let mut sorted = Fastlist::with_config(Config::new().load(64).sorted()).unwrap();
//! sorted.extend([5, 1, 4, 1]);
//! assert_eq!(sorted.as_list(), vec![1, 1, 4, 5]);
//! assert!(sorted.contains(&4));
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod fastlist;
mod index;
mod rebalance;
pub mod storage;

pub use config::Config;
pub use config::DEFAULT_LOAD;
pub use config::Mode;
pub use cursor::Cursor;
pub use cursor::CursorMut;
pub use cursor::Direction;
pub use cursor::Position;
pub use error::Error;
pub use error::Operation;
pub use error::Result;
pub use fastlist::Fastlist;
pub use storage::Storage;

/// List of `i32` with `Vec` buckets.
pub type I32List = Fastlist<i32>;

/// List of `i64` with `Vec` buckets.
pub type I64List = Fastlist<i64>;
