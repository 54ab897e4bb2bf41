//! Pinned Keccak-256 (Ethereum padding) vectors.

use keccak_eth::{keccak256, Keccak256};
#[cfg(feature = "std")]
use keccak_eth::keccak256_hex;

fn hex_digest(data: &[u8]) -> String {
    hex::encode(keccak256(data))
}

#[test]
fn empty_string() {
    assert_eq!(
        hex_digest(b""),
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
}

#[cfg(feature = "std")]
#[test]
fn hello_ethereum() {
    assert_eq!(
        keccak256_hex("Hello, Ethereum!"),
        "0x0a1e2723bd7f1996832b7ed7406df8ad975deba1aa04020b5bfc3e6fe70ecc29"
    );
}

#[test]
fn hello_ethereum_raw_digest() {
    assert_eq!(
        hex_digest(b"Hello, Ethereum!"),
        "0a1e2723bd7f1996832b7ed7406df8ad975deba1aa04020b5bfc3e6fe70ecc29"
    );
}

#[test]
fn short_strings() {
    let cases: [(&[u8], &str); 3] = [
        (b"abc", "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"),
        (
            b"The quick brown fox jumps over the lazy dog",
            "4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15",
        ),
        // ERC-20 transfer selector is the first 4 bytes
        (b"transfer(address,uint256)", "a9059cbb"),
    ];
    for (input, expected) in cases {
        assert!(hex_digest(input).starts_with(expected), "input {input:?}");
    }
}

#[test]
fn rate_boundaries_repeated_a() {
    // 135: pad byte and final bit share byte 135 (0x81).
    // 136: a whole extra padding block after the data block.
    let cases = [
        (135, "34367dc248bbd832f4e3e69dfaac2f92638bd0bbd18f2912ba4ef454919cf446"),
        (136, "a6c4d403279fe3e0af03729caada8374b5ca54d8065329a3ebcaeb4b60aa386e"),
        (137, "d869f639c7046b4929fc92a4d988a8b22c55fbadb802c0c66ebcd484f1915f39"),
        (200, "96ea54061def936c4be90b518992fdc6f12f535068a256229aca54267b4d084d"),
        (272, "cf7fcd4f705ee749930d19ca84561a9bf62516bd90a471545fa2f49fdc7e63c8"),
    ];
    for (len, expected) in cases {
        assert_eq!(hex_digest(&vec![b'a'; len]), expected, "len {len}");
    }
}

#[test]
fn rate_boundaries_counter_bytes() {
    let seq = |n: usize| (0..n).map(|i| (i % 256) as u8).collect::<Vec<u8>>();
    let d135 = hex_digest(&seq(135));
    let d136 = hex_digest(&seq(136));
    let d137 = hex_digest(&seq(137));

    assert_eq!(d135, "cbdfd9dee5faad3818d6b06f95a219fd290b0e1706f6a82e5a595b9ce9faca62");
    assert_eq!(d136, "7ce759f1ab7f9ce437719970c26b0a66ff11fe3e38e17df89cf5d29c7d7f807e");
    assert_eq!(d137, "ac73d4fae68b8453f764007c1a20ce95994187861f0c3227a3a8e99a73a3b1db");
    assert_ne!(d135, d136);
    assert_ne!(d136, d137);
}

#[test]
fn one_million_a_streamed() {
    let chunk = [b'a'; 1000];
    let mut k = Keccak256::new();
    for _ in 0..1000 {
        k.update(&chunk);
    }
    assert_eq!(
        hex::encode(k.finalize()),
        "fadae6b49f129bbb812be8407b7b2894f34aecf6dbd1f9b0f0c7e9853098fc96"
    );
}

#[test]
fn digest_is_always_32_bytes() {
    for len in [0usize, 1, 31, 32, 135, 136, 137, 4096, 3 << 20] {
        let d = keccak256(vec![0xEEu8; len]);
        assert_eq!(d.len(), 32);
    }
}
