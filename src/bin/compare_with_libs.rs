// Compares this Keccak-256 against two reference crates:
//  1) sha3::Keccak256 (RustCrypto)
//  2) tiny_keccak::Keccak::v256
// - Every length 0..=1024 one-shot, then inputs fed in growing and in
//   seeded random chunk sizes.
// - Wall-clock timing on a 1 MiB buffer for all three.
// Run with: cargo run --release --features compare --bin compare_with_libs

use std::time::Instant;

use keccak_eth::{keccak256, Keccak256};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha3::Digest as _;
use tiny_keccak::Hasher as _;

fn pattern(len: usize, tag: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(tag))
        .collect()
}

fn ref_sha3(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&sha3::Keccak256::digest(data));
    out
}

fn ref_tiny(data: &[u8]) -> [u8; 32] {
    let mut k = tiny_keccak::Keccak::v256();
    k.update(data);
    let mut out = [0u8; 32];
    k.finalize(&mut out);
    out
}

fn chunked(data: &[u8], step: usize) -> [u8; 32] {
    let mut k = Keccak256::new();
    // chunk sizes step, step+1, step+2, ... to cross block edges at odd offsets
    let mut off = 0;
    let mut n = step;
    while off < data.len() {
        let end = core::cmp::min(off + n, data.len());
        k.update(&data[off..end]);
        off = end;
        n += 1;
    }
    k.finalize()
}

fn random_chunked(rng: &mut StdRng, data: &[u8]) -> [u8; 32] {
    let mut k = Keccak256::new();
    let mut rest = data;
    while !rest.is_empty() {
        let n = rng.gen_range(1..=rest.len().min(2 * 136));
        let (head, tail) = rest.split_at(n);
        k.update(head);
        rest = tail;
    }
    k.finalize()
}

fn main() {
    println!("=== Keccak-256: one-shot vs sha3 / tiny-keccak ===");
    let mut fails = 0usize;
    for len in 0..=1024 {
        let data = pattern(len, len as u8);
        let mine = keccak256(&data);
        if mine != ref_sha3(&data) || mine != ref_tiny(&data) {
            println!("FAIL: len {len}");
            println!("  mine : {}", hex::encode(mine));
            println!("  sha3 : {}", hex::encode(ref_sha3(&data)));
            fails += 1;
        }
    }
    println!("one-shot: {} lengths, {fails} mismatches", 1025);

    println!("\n=== Keccak-256: chunked update vs one-shot ===");
    let mut chunk_fails = 0usize;
    for step in [1usize, 7, 64, 135, 136, 137] {
        let data = pattern(3 * 136 + 11, step as u8);
        let got = chunked(&data, step);
        if got != ref_sha3(&data) || got != ref_tiny(&data) {
            println!("FAIL: chunk step {step}");
            chunk_fails += 1;
        }
    }

    let mut rng = StdRng::seed_from_u64(0x6b65_6363_616b);
    for round in 0..500 {
        let len = rng.gen_range(0..2048);
        let data = pattern(len, round as u8);
        let got = random_chunked(&mut rng, &data);
        if got != ref_sha3(&data) || got != ref_tiny(&data) {
            println!("FAIL: random split, round {round}, len {len}");
            chunk_fails += 1;
        }
    }
    println!("chunked: {chunk_fails} mismatches");

    println!("\n=== Timing (1 MiB input, CPU wall-clock) ===");
    let big = pattern(1 << 20, 0x5A);
    let iters: u32 = 20;

    let t0 = Instant::now();
    for _ in 0..iters {
        std::hint::black_box(keccak256(&big));
    }
    println!("keccak_eth  avg: {:?}/op", t0.elapsed() / iters);

    let t1 = Instant::now();
    for _ in 0..iters {
        std::hint::black_box(ref_sha3(&big));
    }
    println!("sha3        avg: {:?}/op", t1.elapsed() / iters);

    let t2 = Instant::now();
    for _ in 0..iters {
        std::hint::black_box(ref_tiny(&big));
    }
    println!("tiny-keccak avg: {:?}/op", t2.elapsed() / iters);

    if fails + chunk_fails > 0 {
        std::process::exit(1);
    }
    println!("\nDONE.");
}
