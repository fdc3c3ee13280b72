// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! AFL fuzz harness for Fastlist
//!
//! Drives an unsorted and a sorted list with the same byte stream and checks
//! after every op that:
//! 1. Contents match a `Vec` receiving the same edits
//! 2. Bucket starts / minimums agree with the buckets
//! 3. No bucket other than the first is ever empty

use afl::fuzz;

mod fuzz_ops;

use fuzz_ops::FuzzOp;
use fuzz_ops::Harness;

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((mut harness, mut remaining)) = Harness::new(data) else {
            return;
        };
        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            harness.apply(op);
        }
    });
}
