//! Byte Order and Alignment Primitives
//!
//! Loads and stores of 32 and 64-bit integers in big or little-endian layout, from and to any
//! position within a byte buffer. Every operation here is total, performs no allocation, and is
//! correct regardless of the host's endianness or the alignment of the buffer.
//!
//! # Strategies
//!
//! Two interchangeable implementations of [`Access`] exist:
//!
//! - [`Assembled`] builds each integer from its individual bytes using shifts. This is always
//!   correct and is the reference semantics every other strategy must agree with.
//! - [`Direct`] performs a single typed access followed by an in-register byte swap. This is
//!   only selected on architectures which tolerate unaligned multi-byte access.
//!
//! [`Native`] is the strategy selected at compile time, the `portable` feature forces it to be
//! [`Assembled`] on all targets.
//!
//! # Example
//!
//! ```
//! use md4_core::endian::{self, Access, Assembled, Direct};
//!
//! let mut buf = [0u8; 9];
//! // offset 1, misaligned for a u64 on every platform.
//! let slot: &mut [u8; 8] = (&mut buf[1..]).try_into().unwrap();
//!
//! Direct::store_be64(slot, 0x0102_0304_0506_0708);
//! assert_eq!(slot, &[1, 2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(Assembled::load_be64(slot), 0x0102_0304_0506_0708);
//! assert_eq!(endian::load_le64(slot), 0x0807_0605_0403_0201);
//! ```

mod assembled;
mod direct;

pub use assembled::Assembled;
pub use direct::Direct;

use crate::buf::Block;
use crate::sealed::Sealed;
use crate::DIGEST_SIZE;

/// The load / store strategy selected for this target.
///
/// This is [`Direct`] on `x86` and `x86_64`, [`Assembled`] everywhere else or when the
/// `portable` feature is enabled.
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), not(feature = "portable")))]
pub type Native = Direct;

/// The load / store strategy selected for this target.
///
/// This is [`Direct`] on `x86` and `x86_64`, [`Assembled`] everywhere else or when the
/// `portable` feature is enabled.
#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), not(feature = "portable"))))]
pub type Native = Assembled;

/// A strategy for reading and writing multi-byte integers in a fixed byte order.
///
/// This trait is sealed, the only implementors are [`Assembled`] and [`Direct`]. Both are
/// zero-sized and all methods are associated functions, so the strategy is a purely compile
/// time choice.
pub trait Access: Sealed + Sized + 'static {
    /// Whether this strategy may access misaligned addresses through a typed pointer.
    const TOLERATES_UNALIGNED: bool;

    /// Interpret `src` as a big-endian `u32`.
    fn load_be32(src: &[u8; 4]) -> u32;
    /// Interpret `src` as a big-endian `u64`.
    fn load_be64(src: &[u8; 8]) -> u64;
    /// Interpret `src` as a little-endian `u32`.
    fn load_le32(src: &[u8; 4]) -> u32;
    /// Interpret `src` as a little-endian `u64`.
    fn load_le64(src: &[u8; 8]) -> u64;

    /// Write `val` into `dst` in big-endian order.
    fn store_be32(dst: &mut [u8; 4], val: u32);
    /// Write `val` into `dst` in big-endian order.
    fn store_be64(dst: &mut [u8; 8], val: u64);
    /// Write `val` into `dst` in little-endian order.
    fn store_le32(dst: &mut [u8; 4], val: u32);
    /// Write `val` into `dst` in little-endian order.
    fn store_le64(dst: &mut [u8; 8], val: u64);

    /// Repack a 64-byte block into sixteen little-endian 32-bit words.
    #[inline]
    fn load_block_le(block: &Block) -> [u32; 16] {
        let mut words = [0u32; 16];
        let mut rest = block.as_slice();

        for word in &mut words {
            let Some((chunk, tail)) = rest.split_first_chunk::<4>() else { break };
            *word = Self::load_le32(chunk);
            rest = tail;
        }

        words
    }

    /// Write the four chaining words into `dst` as consecutive little-endian 32-bit integers.
    #[inline]
    fn store_words_le(dst: &mut [u8; DIGEST_SIZE], words: &[u32; 4]) {
        for (i, word) in words.iter().enumerate() {
            let mut bytes = [0u8; 4];
            Self::store_le32(&mut bytes, *word);
            dst[i * 4..i * 4 + 4].copy_from_slice(&bytes);
        }
    }
}

/// Returns `true` if `ptr` is not a multiple of `alignment`.
///
/// # Arguments
///
/// * `ptr` - The address to check.
/// * `alignment` - The required alignment, this **must** be a power of two.
///
/// # Example
///
/// ```
/// use md4_core::endian::is_misaligned;
///
/// let words = [0u32; 2];
/// let base = words.as_ptr().cast::<u8>();
///
/// assert!(!is_misaligned(base, 4));
/// assert!(is_misaligned(base.wrapping_add(1), 4));
/// ```
#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub fn is_misaligned<T>(ptr: *const T, alignment: usize) -> bool {
    debug_assert!(alignment.is_power_of_two(), "alignment must be a power of two");
    (ptr as usize) & (alignment - 1) != 0
}

/// Returns `true` if the strategy `A` would need `ptr` re-aligned before a typed access of
/// `alignment` bytes.
///
/// Strategies which tolerate unaligned access never need alignment.
#[inline]
pub fn needs_alignment<A: Access, T>(ptr: *const T, alignment: usize) -> bool {
    !A::TOLERATES_UNALIGNED && is_misaligned(ptr, alignment)
}

/// Swap the byte order of each of the sixteen words in place.
///
/// This is the block repacking step for big-endian hosts, where a native typed read of a block
/// yields big-endian words and MD4 requires little-endian ones.
#[inline]
pub fn byteswap_words(words: &mut [u32; 16]) {
    for word in words.iter_mut() {
        *word = word.swap_bytes();
    }
}

macro_rules! native_fns {
    ($(
        $(#[$meta:meta])*
        $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)?
    ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[doc = ""]
            #[doc = concat!("Dispatches to [`Access::", stringify!($name), "`] on [`Native`].")]
            #[inline]
            pub fn $name($($arg: $ty),*) $(-> $ret)? {
                <Native as Access>::$name($($arg),*)
            }
        )*
    };
}

native_fns! {
    /// Interpret `src` as a big-endian `u32`.
    load_be32(src: &[u8; 4]) -> u32,
    /// Interpret `src` as a big-endian `u64`.
    load_be64(src: &[u8; 8]) -> u64,
    /// Interpret `src` as a little-endian `u32`.
    load_le32(src: &[u8; 4]) -> u32,
    /// Interpret `src` as a little-endian `u64`.
    load_le64(src: &[u8; 8]) -> u64,
    /// Write `val` into `dst` in big-endian order.
    store_be32(dst: &mut [u8; 4], val: u32),
    /// Write `val` into `dst` in big-endian order.
    store_be64(dst: &mut [u8; 8], val: u64),
    /// Write `val` into `dst` in little-endian order.
    store_le32(dst: &mut [u8; 4], val: u32),
    /// Write `val` into `dst` in little-endian order.
    store_le64(dst: &mut [u8; 8], val: u64),
    /// Repack a 64-byte block into sixteen little-endian 32-bit words.
    load_block_le(block: &Block) -> [u32; 16],
}
