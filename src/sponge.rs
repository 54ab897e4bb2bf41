// Incremental Keccak-256 sponge built on top of Keccak-f[1600].
// - update() buffers input into one rate block and absorbs every full block.
// - finalize() applies the 0x01 ... 0x80 padding and squeezes 32 bytes.

use crate::keccak::keccak_f1600;
use crate::params::{DIGEST_BYTES, DIGEST_LANES, FINAL_BIT, KECCAK_PAD, LANES, RATE};

/// Streaming Keccak-256 hasher.
///
/// `finalize` takes the hasher by value, so a spent instance cannot be
/// finalized a second time. Use [`finalize_reset`](Self::finalize_reset)
/// to reuse one instance for several messages.
#[derive(Clone, Debug)]
pub struct Keccak256 {
    state: [u64; LANES],
    buf: [u8; RATE],
    pos: usize, // bytes pending in buf, always < RATE between calls
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Keccak256 {
    /// Fresh instance: zero state, empty buffer.
    pub const fn new() -> Self {
        Self {
            state: [0u64; LANES],
            buf: [0u8; RATE],
            pos: 0,
        }
    }

    /// Absorb more input. Any length, any number of calls.
    pub fn update(&mut self, data: &[u8]) {
        let mut input = data;

        // Top up a partially filled buffer first
        if self.pos > 0 {
            let take = core::cmp::min(RATE - self.pos, input.len());
            self.buf[self.pos..self.pos + take].copy_from_slice(&input[..take]);
            self.pos += take;
            input = &input[take..];
            if self.pos < RATE {
                return;
            }
            let block = self.buf;
            self.absorb_block(&block);
            self.pos = 0;
        }

        // Whole blocks straight from the caller's slice
        let mut blocks = input.chunks_exact(RATE);
        for block in &mut blocks {
            self.absorb_block(block);
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    /// Pad, absorb the last block and return the digest.
    pub fn finalize(mut self) -> [u8; DIGEST_BYTES] {
        self.pad_and_squeeze()
    }

    /// Same as [`finalize`](Self::finalize), then resets `self` to the
    /// state returned by [`new`](Self::new).
    pub fn finalize_reset(&mut self) -> [u8; DIGEST_BYTES] {
        let out = self.pad_and_squeeze();
        self.reset();
        out
    }

    /// Drop all absorbed input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn pad_and_squeeze(&mut self) -> [u8; DIGEST_BYTES] {
        // Final block with padding (no heap). Runs even when pos == 0.
        // pos == RATE - 1 leaves a single 0x81 byte at the end.
        let mut block = [0u8; RATE];
        block[..self.pos].copy_from_slice(&self.buf[..self.pos]);
        block[self.pos] = KECCAK_PAD;
        block[RATE - 1] |= FINAL_BIT;
        self.absorb_block(&block);
        self.pos = 0;

        let mut out = [0u8; DIGEST_BYTES];
        for (chunk, lane) in out.chunks_exact_mut(8).zip(&self.state[..DIGEST_LANES]) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        out
    }

    #[inline(always)]
    fn absorb_block(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), RATE);
        // Little-endian lanes
        for (lane, bytes) in self.state.iter_mut().zip(block.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(bytes);
            *lane ^= u64::from_le_bytes(word);
        }
        keccak_f1600(&mut self.state);
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Keccak256 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
