use core::fmt;
use core::ops;
use proptest::arbitrary::{any, Arbitrary};
use proptest::array;
use proptest::collection::vec;
use proptest::num::u8::Any;
use proptest::strategy::{BoxedStrategy, Just, Strategy};
use std::vec::Vec;

/// A message of at most `C` bytes, stored inline.
#[derive(Clone, Copy)]
pub struct BoundList<const C: usize> {
    inner: [u8; C],
    len: usize
}

impl<const C: usize> fmt::Debug for BoundList<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut dbg = f.debug_struct("BoundList");
        dbg.field("len", &self.len());

        if self.len <= 64 {
            dbg.field("inner", &self.as_slice());
        }

        dbg.finish()
    }
}

impl<const C: usize> BoundList<C> {
    pub const fn new_with_unchecked(inner: [u8; C], len: usize) -> Self {
        Self { inner, len }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner.as_slice()[..self.len]
    }
}

impl<const C: usize> ops::Deref for BoundList<C> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<const C: usize> Arbitrary for BoundList<C> {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (0..=C, array::uniform::<Any, C>(any::<u8>()))
            .prop_map(|(len, buf)| BoundList::new_with_unchecked(buf, len))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

/// A message of at most `C` bytes along with an arbitrary partition of it into consecutive
/// chunks, empty chunks included.
#[derive(Clone)]
pub struct Chunked<const C: usize> {
    data: Vec<u8>,
    // sorted, each within 0..=data.len()
    cuts: Vec<usize>
}

impl<const C: usize> fmt::Debug for Chunked<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Chunked")
            .field("len", &self.data.len())
            .field("cuts", &self.cuts)
            .finish()
    }
}

impl<const C: usize> Chunked<C> {
    /// The whole message.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// The message split at each cut, concatenating the chunks yields [`as_slice`].
    ///
    /// [`as_slice`]: Self::as_slice
    pub fn chunks(&self) -> Vec<&[u8]> {
        let mut out = Vec::with_capacity(self.cuts.len() + 1);
        let mut start = 0;

        for &cut in &self.cuts {
            out.push(&self.data[start..cut]);
            start = cut;
        }

        out.push(&self.data[start..]);
        out
    }
}

impl<const C: usize> Arbitrary for Chunked<C> {
    type Parameters = ();

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        vec(any::<u8>(), 0..=C)
            .prop_flat_map(|data| {
                let len = data.len();
                (Just(data), vec(0..=len, 0..24))
            })
            .prop_map(|(data, mut cuts)| {
                cuts.sort_unstable();
                Self { data, cuts }
            })
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

#[test]
fn chunks_rejoin() {
    let chunked = Chunked::<16> { data: (0u8..10).collect(), cuts: std::vec![0, 3, 3, 9, 10] };
    let chunks = chunked.chunks();

    assert_eq!(chunks.len(), 6);
    assert_eq!(chunks.concat(), chunked.as_slice());
}
