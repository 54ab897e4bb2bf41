// src/params.rs
// Keccak-256 parameters (Ethereum variant, capacity 512 bits).

/// 64-bit lanes in the 5x5 Keccak state.
pub const LANES: usize = 25;
/// Keccak-f[1600] rounds.
pub const ROUNDS: usize = 24;

/// Rate in bytes: (1600 - 2 * 256) / 8.
pub const RATE: usize = 136;
/// Lanes touched by one absorbed block.
pub const RATE_LANES: usize = RATE / 8;

/// Digest length in bytes.
pub const DIGEST_BYTES: usize = 32;
/// Lanes 0..DIGEST_LANES are squeezed, little-endian each.
pub const DIGEST_LANES: usize = DIGEST_BYTES / 8;

/// Original Keccak domain byte. NIST SHA3 uses 0x06 here.
pub const KECCAK_PAD: u8 = 0x01;
/// Last bit of the pad10*1 rule, ORed into byte RATE - 1.
pub const FINAL_BIT: u8 = 0x80;

/// Raw uncompressed secp256k1 public key: X || Y.
pub const PUBKEY_BYTES: usize = 64;
/// SEC1 tag of an uncompressed point.
pub const SEC1_UNCOMPRESSED: u8 = 0x04;
/// Ethereum address: trailing bytes of the public key digest.
pub const ADDRESS_BYTES: usize = 20;
