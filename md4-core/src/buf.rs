//! Fixed Size Byte Types for Blocks and Digests
use zeroize::Zeroize;
use core::ops;
use crate::error::InvalidSize;
use crate::endian::{Access, Native};
use crate::DIGEST_SIZE;

/// A single 64-byte MD4 message block.
pub type Block = [u8; crate::BLOCK_SIZE];

/// The 16-byte output of [`Md4`].
///
/// The four chaining words are laid out in little-endian byte order, regardless of the host's
/// endianness, as required by RFC 1320.
///
/// [`Md4`]: crate::Md4
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    inner: [u8; DIGEST_SIZE]
}

impl Digest {
    /// The size of the digest in bytes.
    pub const SIZE: usize = DIGEST_SIZE;

    /// Creates a new `Digest` from its raw bytes.
    pub const fn new(inner: [u8; DIGEST_SIZE]) -> Self {
        Self { inner }
    }

    /// Creates a new `Digest` from the four chaining words `A`, `B`, `C`, `D`.
    pub fn from_words(words: &[u32; 4]) -> Self {
        let mut inner = [0u8; DIGEST_SIZE];
        Native::store_words_le(&mut inner, words);
        Self::new(inner)
    }

    /// Returns the four chaining words this digest encodes.
    pub fn words(&self) -> [u32; 4] {
        let mut out = [0u32; 4];
        for (word, chunk) in out.iter_mut().zip(self.inner.chunks_exact(4)) {
            // chunks_exact(4) guarantees the conversion
            *word = Native::load_le32(&[chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        out
    }

    /// Returns a reference to the digest as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[u8] {
        self.inner.as_slice()
    }

    /// Consumes the `Digest`, returning the raw bytes.
    #[inline]
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.inner
    }
}

impl ops::Deref for Digest {
    type Target = [u8; DIGEST_SIZE];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    #[inline]
    fn from(value: [u8; DIGEST_SIZE]) -> Self {
        Self::new(value)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    #[inline]
    fn from(value: Digest) -> Self {
        value.into_bytes()
    }
}

impl<'s> TryFrom<&'s [u8]> for Digest {
    type Error = InvalidSize;

    fn try_from(value: &'s [u8]) -> Result<Self, Self::Error> {
        value.try_into().map(Self::new).map_err(|_| InvalidSize)
    }
}

impl PartialEq<[u8; DIGEST_SIZE]> for Digest {
    #[inline]
    fn eq(&self, other: &[u8; DIGEST_SIZE]) -> bool {
        self.inner == *other
    }
}

impl PartialEq<Digest> for [u8; DIGEST_SIZE] {
    #[inline]
    fn eq(&self, other: &Digest) -> bool {
        *self == other.inner
    }
}

impl PartialEq<[u8]> for Digest {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.inner.as_slice() == other
    }
}

impl Zeroize for Digest {
    #[inline]
    fn zeroize(&mut self) {
        self.inner.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn words_are_little_endian() {
        let digest = Digest::from_words(&[1, 2, 3, 4]);
        let repr = [1u32, 2, 3, 4].map(u32::to_le_bytes).concat();
        assert_eq!(digest.as_slice(), repr.as_slice());
    }

    #[test]
    fn try_from_wrong_len() {
        assert_eq!(Digest::try_from([0u8; 15].as_slice()), Err(InvalidSize));
        assert_eq!(Digest::try_from([0u8; 17].as_slice()), Err(InvalidSize));
        assert!(Digest::try_from([0u8; 16].as_slice()).is_ok());
    }

    #[test]
    fn zeroize_digest() {
        let mut digest = Digest::new([0xAB; 16]);
        digest.zeroize();
        assert_eq!(digest, [0u8; 16]);
    }

    proptest! {
        #[test]
        fn words_inverse(words in any::<[u32; 4]>()) {
            prop_assert_eq!(Digest::from_words(&words).words(), words);
        }
    }
}
