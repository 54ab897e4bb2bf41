// One-shot wrappers over the streaming sponge, plus 0x-hex helpers.

use crate::params::DIGEST_BYTES;
use crate::sponge::Keccak256;

#[cfg(feature = "std")]
use crate::error::Error;

/// Keccak-256 of a single buffer.
pub fn keccak256(input: impl AsRef<[u8]>) -> [u8; DIGEST_BYTES] {
    let mut k = Keccak256::new();
    k.update(input.as_ref());
    k.finalize()
}

/// Keccak-256 of the concatenation of `parts`.
pub fn keccak256_many<I>(parts: I) -> [u8; DIGEST_BYTES]
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut k = Keccak256::new();
    for part in parts {
        k.update(part.as_ref());
    }
    k.finalize()
}

/// Streams `reader` to EOF through the sponge in constant memory.
#[cfg(feature = "std")]
pub fn keccak256_reader<R: std::io::Read>(mut reader: R) -> std::io::Result<[u8; DIGEST_BYTES]> {
    let mut k = Keccak256::new();
    std::io::copy(&mut reader, &mut k)?;
    Ok(k.finalize())
}

/// `0x`-prefixed lowercase hex digest.
#[cfg(feature = "std")]
pub fn keccak256_hex(input: impl AsRef<[u8]>) -> String {
    to_hex(&keccak256(input))
}

#[cfg(feature = "std")]
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Hex decode with an optional `0x` / `0X` prefix.
#[cfg(feature = "std")]
pub fn decode_hex(s: &str) -> Result<Vec<u8>, Error> {
    Ok(hex::decode(strip_0x(s))?)
}

#[cfg(feature = "std")]
pub(crate) fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
