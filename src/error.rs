/// Errors returned by the parsing helpers. Hashing itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input byte slice has the wrong length.
    InvalidLength {
        /// Expected byte count.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },
    /// 65-byte public key that does not start with the SEC1 `0x04` tag.
    InvalidPubkeyPrefix(u8),
    /// Not a hex string (odd length or a non-hex character).
    InvalidHex,
    /// Mixed-case address whose casing is not its EIP-55 checksum.
    BadChecksum,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Self::InvalidPubkeyPrefix(tag) => {
                write!(f, "invalid public key prefix: 0x{tag:02x}")
            }
            Self::InvalidHex => f.write_str("invalid hex string"),
            Self::BadChecksum => f.write_str("address checksum mismatch"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "std")]
impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Self::InvalidHex
    }
}
