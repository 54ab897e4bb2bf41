//! Cross-check against the RustCrypto `sha3` crate's Keccak256.

use keccak_eth::{keccak256, Keccak256};
use sha3::Digest;

fn reference(data: &[u8]) -> Vec<u8> {
    sha3::Keccak256::digest(data).to_vec()
}

#[test]
fn every_length_up_to_three_blocks() {
    for len in 0..=3 * 136 + 8 {
        let data: Vec<u8> = (0..len).map(|i| (i as u8) ^ 0xA5).collect();
        assert_eq!(keccak256(&data).to_vec(), reference(&data), "len {len}");
    }
}

#[test]
fn streaming_matches_reference_streaming() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();

    let mut mine = Keccak256::new();
    let mut theirs = sha3::Keccak256::new();
    for part in data.chunks(97) {
        mine.update(part);
        Digest::update(&mut theirs, part);
    }
    assert_eq!(mine.finalize().to_vec(), theirs.finalize().to_vec());
}

#[test]
fn differs_from_nist_sha3_256() {
    let nist = sha3::Sha3_256::digest(b"").to_vec();
    assert_ne!(keccak256(b"").to_vec(), nist);
}
