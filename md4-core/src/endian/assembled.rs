use super::Access;
use crate::sealed::Sealed;

/// The byte-assembly strategy.
///
/// Every integer is composed from, or decomposed into, its individual bytes using shifts. No
/// multi-byte typed access ever takes place, so this is correct on every target, regardless of
/// endianness or alignment requirements. All other strategies are tested against this one.
#[derive(Copy, Clone, Debug, Default)]
pub struct Assembled;

impl Sealed for Assembled {}

impl Access for Assembled {
    const TOLERATES_UNALIGNED: bool = false;

    #[inline]
    fn load_be32(src: &[u8; 4]) -> u32 {
        (u32::from(src[0]) << 24)
            | (u32::from(src[1]) << 16)
            | (u32::from(src[2]) << 8)
            | u32::from(src[3])
    }

    #[inline]
    fn load_be64(src: &[u8; 8]) -> u64 {
        (u64::from(src[0]) << 56)
            | (u64::from(src[1]) << 48)
            | (u64::from(src[2]) << 40)
            | (u64::from(src[3]) << 32)
            | (u64::from(src[4]) << 24)
            | (u64::from(src[5]) << 16)
            | (u64::from(src[6]) << 8)
            | u64::from(src[7])
    }

    #[inline]
    fn load_le32(src: &[u8; 4]) -> u32 {
        u32::from(src[0])
            | (u32::from(src[1]) << 8)
            | (u32::from(src[2]) << 16)
            | (u32::from(src[3]) << 24)
    }

    #[inline]
    fn load_le64(src: &[u8; 8]) -> u64 {
        u64::from(src[0])
            | (u64::from(src[1]) << 8)
            | (u64::from(src[2]) << 16)
            | (u64::from(src[3]) << 24)
            | (u64::from(src[4]) << 32)
            | (u64::from(src[5]) << 40)
            | (u64::from(src[6]) << 48)
            | (u64::from(src[7]) << 56)
    }

    #[inline]
    fn store_be32(dst: &mut [u8; 4], val: u32) {
        dst[0] = (val >> 24) as u8;
        dst[1] = (val >> 16) as u8;
        dst[2] = (val >> 8) as u8;
        dst[3] = val as u8;
    }

    #[inline]
    fn store_be64(dst: &mut [u8; 8], val: u64) {
        dst[0] = (val >> 56) as u8;
        dst[1] = (val >> 48) as u8;
        dst[2] = (val >> 40) as u8;
        dst[3] = (val >> 32) as u8;
        dst[4] = (val >> 24) as u8;
        dst[5] = (val >> 16) as u8;
        dst[6] = (val >> 8) as u8;
        dst[7] = val as u8;
    }

    #[inline]
    fn store_le32(dst: &mut [u8; 4], val: u32) {
        dst[0] = val as u8;
        dst[1] = (val >> 8) as u8;
        dst[2] = (val >> 16) as u8;
        dst[3] = (val >> 24) as u8;
    }

    #[inline]
    fn store_le64(dst: &mut [u8; 8], val: u64) {
        dst[0] = val as u8;
        dst[1] = (val >> 8) as u8;
        dst[2] = (val >> 16) as u8;
        dst[3] = (val >> 24) as u8;
        dst[4] = (val >> 32) as u8;
        dst[5] = (val >> 40) as u8;
        dst[6] = (val >> 48) as u8;
        dst[7] = (val >> 56) as u8;
    }
}
