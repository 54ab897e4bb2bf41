// src/keccak.rs
// Keccak-f[1600] permutation (24 rounds).
// rotatia foloseste rotate_left ca sa nu faca shift cu 64.

use crate::params::{LANES, ROUNDS};

/// Iota round constants.
pub const RC: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Rho offsets, in the order the pi walk visits lanes.
pub const RHO: [u32; 24] = [
     1,  3,  6, 10, 15, 21, 28, 36, 45, 55,  2, 14,
    27, 41, 56,  8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi walk: step `i` moves the carried lane into `PI[i]`.
pub const PI: [usize; 24] = [
    10,  7, 11, 17, 18,  3,  5, 16,  8, 21, 24,  4,
    15, 23, 19, 13, 12,  2, 20, 14, 22,  9,  6,  1,
];

/// Applies the full 24-round permutation in place. Lanes are indexed `x + 5 * y`.
pub fn keccak_f1600(state: &mut [u64; LANES]) {
    for &rc in RC.iter() {
        // theta
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in (0..LANES).step_by(5) {
                state[x + y] ^= d;
            }
        }

        // rho + pi: lane 0 stays put, the other 24 follow one cycle
        let mut carried = state[1];
        for (&dst, &rot) in PI.iter().zip(RHO.iter()) {
            let next = state[dst];
            state[dst] = carried.rotate_left(rot);
            carried = next;
        }

        // chi
        for y in (0..LANES).step_by(5) {
            let mut row = [0u64; 5];
            row.copy_from_slice(&state[y..y + 5]);
            for x in 0..5 {
                state[x + y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        state[0] ^= rc;
    }
}
