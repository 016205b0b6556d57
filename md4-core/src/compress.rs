//! The MD4 Compression Function
//!
//! Maps a single 512-bit message block and the 128-bit chaining state to the next chaining state.
//! The block is always interpreted as sixteen little-endian 32-bit words. The three rounds are
//! described by the [`ROUNDS`] table, each row carrying its boolean function, additive constant,
//! message word order, and rotation cycle.
use crate::buf::Block;
use crate::endian::Access;

/// `(x & y) | (!x & z)`, for each bit of `x` select `y` if set, `z` otherwise.
#[inline(always)]
pub const fn f1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// `(x & y) | (x & z) | (y & z)`, the bitwise majority.
#[inline(always)]
pub const fn f2(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// `x ^ y ^ z`, the bitwise parity.
#[inline(always)]
pub const fn f3(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// Description of a single round of sixteen operations.
#[derive(Copy, Clone)]
pub struct Round {
    /// The round's boolean function.
    pub f: fn(u32, u32, u32) -> u32,
    /// The additive constant.
    pub k: u32,
    /// The message word used by each of the sixteen operations.
    pub order: [usize; 16],
    /// The left rotation applied to registers `a`, `d`, `c`, `b` respectively.
    pub shifts: [u32; 4]
}

/// The register updated by operation `i % 4`, the roles cycle `a`, `d`, `c`, `b`.
const ACTIVE: [usize; 4] = [0, 3, 2, 1];

impl Round {
    /// Apply the sixteen operations of this round to the working registers.
    ///
    /// Each operation updates one register as
    /// `r = (r + f(x, y, z) + words[order[i]] + k) <<< shifts[i % 4]`, where `x`, `y`, `z` are the
    /// three registers following `r` in the cyclic order `a`, `b`, `c`, `d`.
    #[inline(always)]
    pub fn apply(&self, regs: &mut [u32; 4], words: &[u32; 16]) {
        for (i, &k) in self.order.iter().enumerate() {
            let r = ACTIVE[i & 3];
            let x = regs[(r + 1) & 3];
            let y = regs[(r + 2) & 3];
            let z = regs[(r + 3) & 3];

            regs[r] = regs[r]
                .wrapping_add((self.f)(x, y, z))
                .wrapping_add(words[k])
                .wrapping_add(self.k)
                .rotate_left(self.shifts[i & 3]);
        }
    }
}

/// The three MD4 rounds, indexed by round number minus one.
pub const ROUNDS: [Round; 3] = [
    Round {
        f: f1,
        k: 0x0000_0000,
        order: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        shifts: [3, 7, 11, 19]
    },
    Round {
        f: f2,
        k: 0x5A82_7999,
        order: [0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15],
        shifts: [3, 5, 9, 13]
    },
    Round {
        f: f3,
        k: 0x6ED9_EBA1,
        order: [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15],
        shifts: [3, 9, 11, 15]
    }
];

/// Compress sixteen already decoded message words into `state`.
#[inline]
pub fn compress_words(state: &mut [u32; 4], words: &[u32; 16]) {
    let mut regs = *state;

    for round in &ROUNDS {
        round.apply(&mut regs, words);
    }

    for (s, r) in state.iter_mut().zip(regs) {
        *s = s.wrapping_add(r);
    }
}

/// Compress a single 64-byte `block` into `state`, decoding the block with the strategy `A`.
///
/// # Example
///
/// ```
/// use md4_core::compress::compress;
/// use md4_core::endian::Native;
/// use md4_core::hash::md4::INITIAL_STATE;
///
/// // the padded empty message is a single block.
/// let mut block = [0u8; 64];
/// block[0] = 0x80;
///
/// let mut state = INITIAL_STATE;
/// compress::<Native>(&mut state, &block);
///
/// assert_eq!(state[0].to_le_bytes(), [0x31, 0xd6, 0xcf, 0xe0]);
/// ```
#[inline]
pub fn compress<A: Access>(state: &mut [u32; 4], block: &Block) {
    let words = A::load_block_le(block);
    compress_words(state, &words);
}
