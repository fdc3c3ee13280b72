// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

use std::fs;

mod fuzz_ops;

use fuzz_ops::FuzzOp;
use fuzz_ops::Harness;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }
    let data = match fs::read(&args[1]) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args[1], err);
            std::process::exit(1);
        }
    };

    eprintln!("Input: {} bytes", data.len());
    eprintln!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    let Some((mut harness, mut remaining)) = Harness::new(&data) else {
        eprintln!("Empty input, nothing to replay");
        return;
    };

    let mut op_num = 0;
    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;
        eprintln!("Op {}: {:?}", op_num, op);
        harness.apply(op);
        eprintln!("  {}", harness.summary());
    }

    eprintln!("Replayed {} ops without a failure", op_num);
}
