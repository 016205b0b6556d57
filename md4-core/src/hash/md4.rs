//! The streaming `Md4` engine.
use core::fmt;
use core::marker::PhantomData;
use zeroize::Zeroize;

use crate::buf::{Block, Digest};
use crate::compress::compress;
use crate::endian::{Access, Native};
use crate::error::InvalidSize;
use crate::{BLOCK_SIZE, DIGEST_SIZE};

/// The chaining state every computation starts from, registers `A`, `B`, `C`, `D`.
pub const INITIAL_STATE: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

/// A single `0x80` followed by zeroes, the longest padding ever needed is a full block.
const PADDING: Block = {
    let mut pad = [0u8; BLOCK_SIZE];
    pad[0] = 0x80;
    pad
};

/// Offset of the length suffix within the final block.
const LEN_OFFSET: usize = BLOCK_SIZE - 8;

/// The `Md4` hasher.
///
/// # Security Warning
///
/// MD4 has been considered **fully compromised** since 1995, with original weaknesses published
/// in 1991, as of 2007 an attack can generate collisions in less than two MD4 hash operations.
///
/// # Generic `A`
///
/// The byte order strategy used to decode message blocks and encode the digest. This defaults
/// to [`Native`], the only reason to name it explicitly is to compare strategies.
///
/// # Lifecycle
///
/// A hasher is created empty, accepts any number of [`update`] calls, and is consumed by
/// [`finalize`]. As finalization takes the hasher by value, updating a finalized computation
/// is a compile time error rather than a runtime one:
///
/// ```compile_fail
/// use md4_core::Md4;
///
/// let mut hasher = Md4::new();
/// hasher.update(b"hello");
/// let _digest = hasher.finalize();
///
/// hasher.update(b"world");
/// ```
///
/// # Example
///
/// ```
/// use md4_core::Md4;
///
/// let mut hasher = Md4::new();
///
/// hasher.update(b"hello ");
/// hasher.update(b"world");
///
/// let digest = hasher.finalize();
/// assert_eq!(digest, Md4::digest(b"hello world"));
/// assert_eq!(digest.len(), 16);
/// ```
///
/// [`update`]: Self::update
/// [`finalize`]: Self::finalize
pub struct Md4<A: Access = Native> {
    state: [u32; 4],
    buffer: Block,
    len: u64,
    _access: PhantomData<A>
}

impl Md4 {
    /// Create a new `Md4` instance using the [`Native`] strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::Md4;
    ///
    /// let hasher = Md4::new();
    /// assert!(hasher.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self::init()
    }

    /// Compute the digest of `data` in one shot.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::Md4;
    /// use hex_literal::hex;
    ///
    /// assert_eq!(Md4::digest(b"abc"), hex!("a448017aaf21d8525fc10ae87aa6729d"));
    /// ```
    #[inline]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// The number of padding bytes (`0x80` followed by zeroes) appended to a message of `len`
    /// bytes, so that the padded length is 56 modulo 64.
    ///
    /// This is always within `1..=64`, a message already at or beyond 56 modulo 64 spills into
    /// an additional block.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::Md4;
    ///
    /// assert_eq!(Md4::padding_len(0), 56);
    /// assert_eq!(Md4::padding_len(55), 1);
    /// assert_eq!(Md4::padding_len(56), 64);
    /// assert_eq!(Md4::padding_len(63), 57);
    /// ```
    #[inline]
    pub const fn padding_len(len: u64) -> usize {
        let index = (len & (BLOCK_SIZE as u64 - 1)) as usize;
        if index < LEN_OFFSET {
            LEN_OFFSET - index
        } else {
            (BLOCK_SIZE + LEN_OFFSET) - index
        }
    }
}

impl<A: Access> Md4<A> {
    /// Create a new `Md4` instance using the strategy `A`.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::{Md4, endian::Assembled};
    ///
    /// let mut hasher = Md4::<Assembled>::init();
    /// hasher.update(b"abc");
    ///
    /// assert_eq!(hasher.finalize(), Md4::digest(b"abc"));
    /// ```
    #[inline]
    pub const fn init() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            len: 0,
            _access: PhantomData
        }
    }

    /// The number of bytes currently held in the working buffer.
    #[inline]
    const fn cursor(&self) -> usize {
        (self.len & (BLOCK_SIZE as u64 - 1)) as usize
    }

    /// Returns the total number of message bytes this hasher has been updated with.
    #[inline]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` if the hasher has not been updated with any bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Update the hasher with `data`.
    ///
    /// Any bytes left over from a previous update are completed into a block first, complete
    /// blocks are then compressed directly out of `data`, and the remainder is buffered for the
    /// next call.
    ///
    /// Hashing is chunk independent, any sequence of updates whose concatenation is `S` yields
    /// the same digest as a single update with `S`.
    ///
    /// # Arguments
    ///
    /// * `data` - The slice to update the underlying hasher state with.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::Md4;
    ///
    /// let mut hasher = Md4::new();
    /// for chunk in b"message digest".chunks(3) {
    ///     hasher.update(chunk);
    /// }
    ///
    /// assert_eq!(hasher.finalize(), Md4::digest(b"message digest"));
    /// ```
    pub fn update(&mut self, data: &[u8]) {
        let cursor = self.cursor();
        // wraps modulo 2^64, the same as the bit length suffix does.
        self.len = self.len.wrapping_add(data.len() as u64);

        let mut data = data;

        if cursor != 0 {
            let to_fill = BLOCK_SIZE - cursor;

            if data.len() < to_fill {
                self.buffer[cursor..cursor + data.len()].copy_from_slice(data);
                return;
            }

            let (head, rest) = data.split_at(to_fill);
            self.buffer[cursor..].copy_from_slice(head);
            compress::<A>(&mut self.state, &self.buffer);
            data = rest;
        }

        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_SIZE>() {
            compress::<A>(&mut self.state, block);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
    }

    /// Update the hasher with an array whose size is known at compile time.
    ///
    /// This is equivalent to [`update`].
    ///
    /// [`update`]: Self::update
    #[inline]
    pub fn update_sized<const C: usize>(&mut self, data: &[u8; C]) {
        self.update(data.as_slice());
    }

    /// Append the padding and the length suffix, leaving the final chaining state in `state`.
    fn pad(&mut self) {
        let len = self.len;
        let pad_len = Md4::padding_len(len);

        trace_event!(len, pad_len, "finalizing md4");

        // the low 64 bits of the bit length, low word first.
        let mut bits = [0u8; 8];
        A::store_le64(&mut bits, len << 3);

        self.update(&PADDING[..pad_len]);
        self.update(&bits);

        debug_assert_eq!(self.cursor(), 0, "padding must end on a block boundary");
    }

    /// Finalize the computation, returning the digest.
    ///
    /// This consumes the hasher, see [`finalize_reset`] for retaining it.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::Md4;
    /// use hex_literal::hex;
    ///
    /// let mut hasher = Md4::new();
    /// hasher.update(b"message digest");
    ///
    /// assert_eq!(hasher.finalize(), hex!("d9130a8164549fe818874806e1c7014b"));
    /// ```
    ///
    /// [`finalize_reset`]: Self::finalize_reset
    pub fn finalize(mut self) -> Digest {
        self.pad();

        let mut out = [0u8; DIGEST_SIZE];
        A::store_words_le(&mut out, &self.state);
        Digest::new(out)
    }

    /// Finalize the computation, writing the digest into the first 16 bytes of `output`.
    ///
    /// # Errors
    ///
    /// If the size of `output` is less than the digest size (`16`). The hasher is consumed
    /// either way.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::Md4;
    ///
    /// let mut output = [0u8; 32];
    /// assert!(Md4::new().finalize_into(output.as_mut_slice()).is_ok());
    /// assert_eq!(&output[..16], Md4::digest(b"").as_slice());
    ///
    /// let mut small = [0u8; 12];
    /// assert!(Md4::new().finalize_into(small.as_mut_slice()).is_err());
    /// ```
    ///
    /// **Note**: if the `output` is exactly 16 bytes, see [`finalize_into_exact`] which moves
    /// this check into the type system.
    ///
    /// [`finalize_into_exact`]: Self::finalize_into_exact
    pub fn finalize_into(self, output: &mut [u8]) -> Result<(), InvalidSize> {
        match output.get_mut(..DIGEST_SIZE) {
            Some(dst) => {
                dst.copy_from_slice(self.finalize().as_slice());
                Ok(())
            },
            None => Err(InvalidSize)
        }
    }

    /// Finalize the computation, writing the digest into `output`.
    #[inline]
    pub fn finalize_into_exact(self, output: &mut [u8; DIGEST_SIZE]) {
        *output = self.finalize().into_bytes();
    }

    /// Finalize the computation, leaving the hasher reset to its initial state.
    ///
    /// # Example
    ///
    /// ```
    /// use md4_core::Md4;
    ///
    /// let mut hasher = Md4::new();
    ///
    /// hasher.update(b"a");
    /// let first = hasher.finalize_reset();
    ///
    /// hasher.update(b"a");
    /// assert_eq!(hasher.finalize(), first);
    /// ```
    #[inline]
    pub fn finalize_reset(&mut self) -> Digest {
        core::mem::take(self).finalize()
    }

    /// Reset the hasher to its initial state, discarding all buffered data.
    #[inline]
    pub fn reset(&mut self) {
        trace_event!("resetting md4");
        // the previous value is zeroized on drop.
        *self = Self::init();
    }
}

impl<A: Access> Default for Md4<A> {
    #[inline]
    fn default() -> Self {
        Self::init()
    }
}

impl<A: Access> Clone for Md4<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            buffer: self.buffer,
            len: self.len,
            _access: PhantomData
        }
    }
}

impl<A: Access> fmt::Debug for Md4<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // the buffer holds message bytes, do not leak them through formatting.
        f.debug_struct("Md4")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<A: Access> Zeroize for Md4<A> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.len.zeroize();
    }
}

impl<A: Access> Drop for Md4<A> {
    #[inline]
    fn drop(&mut self) {
        self.zeroize();
    }
}
