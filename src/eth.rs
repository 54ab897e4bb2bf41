//! Ethereum helpers built on the digest: address derivation and EIP-55.
//!
//! An address is the last 20 bytes of `keccak256(X || Y)` where `X || Y` is
//! the 64-byte uncompressed secp256k1 public key without its SEC1 tag.

use crate::error::Error;
use crate::hash::keccak256;
use crate::params::{ADDRESS_BYTES, DIGEST_BYTES, PUBKEY_BYTES, SEC1_UNCOMPRESSED};

#[cfg(feature = "std")]
use crate::hash::strip_0x;

/// Address of a public key given as raw `X || Y` (64 bytes) or as a SEC1
/// uncompressed point `0x04 || X || Y` (65 bytes).
pub fn pubkey_to_address(pubkey: &[u8]) -> Result<[u8; ADDRESS_BYTES], Error> {
    let xy = match pubkey.len() {
        PUBKEY_BYTES => pubkey,
        n if n == PUBKEY_BYTES + 1 => {
            if pubkey[0] != SEC1_UNCOMPRESSED {
                return Err(Error::InvalidPubkeyPrefix(pubkey[0]));
            }
            &pubkey[1..]
        }
        actual => {
            return Err(Error::InvalidLength {
                expected: PUBKEY_BYTES,
                actual,
            })
        }
    };

    let digest = keccak256(xy);
    let mut addr = [0u8; ADDRESS_BYTES];
    addr.copy_from_slice(&digest[DIGEST_BYTES - ADDRESS_BYTES..]);
    Ok(addr)
}

/// EIP-55 mixed-case form of a hex address (with or without `0x`).
#[cfg(feature = "std")]
pub fn to_checksum_address(addr: &str) -> Result<String, Error> {
    let raw = parse_hex_address(addr)?;
    Ok(checksum_encode(&raw))
}

/// Parses a hex address. Mixed-case input must carry a valid EIP-55
/// checksum; all-lowercase and all-uppercase input is taken as is.
#[cfg(feature = "std")]
pub fn parse_address(s: &str) -> Result<[u8; ADDRESS_BYTES], Error> {
    let raw = parse_hex_address(s)?;
    let body = strip_0x(s);
    let has_lower = body.bytes().any(|c| c.is_ascii_lowercase());
    let has_upper = body.bytes().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && &checksum_encode(&raw)[2..] != body {
        return Err(Error::BadChecksum);
    }
    Ok(raw)
}

#[cfg(feature = "std")]
fn parse_hex_address(s: &str) -> Result<[u8; ADDRESS_BYTES], Error> {
    let bytes = crate::hash::decode_hex(s)?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| Error::InvalidLength {
            expected: ADDRESS_BYTES,
            actual,
        })
}

#[cfg(feature = "std")]
fn checksum_encode(addr: &[u8; ADDRESS_BYTES]) -> String {
    let lower = hex::encode(addr);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(2 + 2 * ADDRESS_BYTES);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        // nibble i of the hash, high nibble first
        let nibble = (hash[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
