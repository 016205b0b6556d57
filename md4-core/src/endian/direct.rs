use core::ptr;
use core::mem::align_of;
use super::{Access, is_misaligned};
use crate::buf::Block;
use crate::sealed::Sealed;

/// The direct typed access strategy.
///
/// Each load or store is a single native integer access followed by an in-register byte swap
/// where the requested order differs from the host's. When the address happens to be aligned
/// an aligned access is used, otherwise the access is explicitly unaligned.
///
/// This is [`Native`] only on architectures which handle unaligned access in hardware, though it
/// remains correct everywhere, which is what allows it to be tested against [`Assembled`] on
/// any host.
///
/// [`Native`]: super::Native
/// [`Assembled`]: super::Assembled
#[derive(Copy, Clone, Debug, Default)]
pub struct Direct;

impl Sealed for Direct {}

/// Read a `T` from `src`.
///
/// # Safety
///
/// `src` must be valid for reads of `size_of::<T>()` bytes, and every bit pattern of that size
/// must be a valid `T`.
#[inline(always)]
unsafe fn read<T: Copy>(src: *const u8) -> T {
    if is_misaligned(src, align_of::<T>()) {
        ptr::read_unaligned(src.cast::<T>())
    } else {
        ptr::read(src.cast::<T>())
    }
}

/// Write `val` to `dst`.
///
/// # Safety
///
/// `dst` must be valid for writes of `size_of::<T>()` bytes.
#[inline(always)]
unsafe fn write<T: Copy>(dst: *mut u8, val: T) {
    if is_misaligned(dst, align_of::<T>()) {
        ptr::write_unaligned(dst.cast::<T>(), val);
    } else {
        ptr::write(dst.cast::<T>(), val);
    }
}

impl Access for Direct {
    const TOLERATES_UNALIGNED: bool = true;

    #[inline]
    fn load_be32(src: &[u8; 4]) -> u32 {
        // SAFETY: src is exactly 4 bytes, all bit patterns are valid u32s.
        u32::from_be(unsafe { read::<u32>(src.as_ptr()) })
    }

    #[inline]
    fn load_be64(src: &[u8; 8]) -> u64 {
        // SAFETY: src is exactly 8 bytes, all bit patterns are valid u64s.
        u64::from_be(unsafe { read::<u64>(src.as_ptr()) })
    }

    #[inline]
    fn load_le32(src: &[u8; 4]) -> u32 {
        // SAFETY: src is exactly 4 bytes, all bit patterns are valid u32s.
        u32::from_le(unsafe { read::<u32>(src.as_ptr()) })
    }

    #[inline]
    fn load_le64(src: &[u8; 8]) -> u64 {
        // SAFETY: src is exactly 8 bytes, all bit patterns are valid u64s.
        u64::from_le(unsafe { read::<u64>(src.as_ptr()) })
    }

    #[inline]
    fn store_be32(dst: &mut [u8; 4], val: u32) {
        // SAFETY: dst is exactly 4 bytes and uniquely borrowed.
        unsafe { write(dst.as_mut_ptr(), val.to_be()) }
    }

    #[inline]
    fn store_be64(dst: &mut [u8; 8], val: u64) {
        // SAFETY: dst is exactly 8 bytes and uniquely borrowed.
        unsafe { write(dst.as_mut_ptr(), val.to_be()) }
    }

    #[inline]
    fn store_le32(dst: &mut [u8; 4], val: u32) {
        // SAFETY: dst is exactly 4 bytes and uniquely borrowed.
        unsafe { write(dst.as_mut_ptr(), val.to_le()) }
    }

    #[inline]
    fn store_le64(dst: &mut [u8; 8], val: u64) {
        // SAFETY: dst is exactly 8 bytes and uniquely borrowed.
        unsafe { write(dst.as_mut_ptr(), val.to_le()) }
    }

    #[inline]
    fn load_block_le(block: &Block) -> [u32; 16] {
        // SAFETY: the block is exactly 64 bytes, the size of [u32; 16], and all bit patterns are
        // valid.
        #[allow(unused_mut)]
        let mut words = unsafe { read::<[u32; 16]>(block.as_ptr()) };

        #[cfg(target_endian = "big")]
        super::byteswap_words(&mut words);

        words
    }
}
