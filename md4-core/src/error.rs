use core::fmt;

/// Error returned when a provided slice is not the expected length.
///
/// This is the only error in the crate. Hashing itself is total, only the conveniences which
/// accept a caller sized buffer, such as [`Md4::finalize_into`] or `Digest::try_from(&[u8])`,
/// can observe it.
///
/// [`Md4::finalize_into`]: crate::Md4::finalize_into
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidSize;

impl fmt::Display for InvalidSize {
    /// Writes `InvalidSize` to the formatter.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InvalidSize")
    }
}

std! { impl std::error::Error for InvalidSize {} }
