//! Keccak-256 as used by Ethereum: the original Keccak padding (`0x01`),
//! not the NIST SHA3-256 variant (`0x06`).
//!
//! [`Keccak256`] is the streaming sponge; [`keccak256`] and friends are
//! one-shot wrappers. The [`eth`] module derives addresses from the digest.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod eth;
pub mod hash;
pub mod keccak;
pub mod params;
pub mod sponge;

pub use error::Error;
pub use hash::{keccak256, keccak256_many};
#[cfg(feature = "std")]
pub use hash::{decode_hex, keccak256_hex, keccak256_reader, to_hex};
pub use keccak::keccak_f1600;
pub use sponge::Keccak256;
