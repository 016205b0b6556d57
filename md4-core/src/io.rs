//! Byte sink implementations, allowing an [`Md4`] to sit at the end of `io::copy` and friends.
//!
//! Hashing never fails, every write consumes the entire buffer and flushing is a no-op.
#[cfg(any(feature = "std", feature = "embedded-io"))]
use crate::{endian::Access, Md4};

std! {
    use std::io as std_io;

    impl<A: Access> std_io::Write for Md4<A> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> std_io::Result<usize> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> std_io::Result<()> {
            self.update(buf);
            Ok(())
        }

        #[inline]
        fn flush(&mut self) -> std_io::Result<()> {
            Ok(())
        }
    }
}

embedded_io! {
    use embedded_io::{self as eio, ErrorType};
    use core::convert::Infallible;

    impl<A: Access> ErrorType for Md4<A> {
        type Error = Infallible;
    }

    impl<A: Access> eio::Write for Md4<A> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.update(buf);
            Ok(buf.len())
        }

        #[inline]
        fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.update(buf);
            Ok(())
        }

        #[inline]
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn io_copy_into_hasher() {
        let mut reader: &[u8] = &[0x42; 1000];
        let mut hasher = Md4::new();

        let copied = std::io::copy(&mut reader, &mut hasher).unwrap();

        assert_eq!(copied, 1000);
        assert_eq!(hasher.finalize(), Md4::digest(&[0x42; 1000]));
    }

    #[test]
    fn write_consumes_everything() {
        let mut hasher = Md4::new();
        assert_eq!(hasher.write(b"message digest").unwrap(), 14);
        hasher.flush().unwrap();

        assert_eq!(hasher.finalize(), Md4::digest(b"message digest"));
    }
}

#[cfg(all(test, feature = "embedded-io"))]
mod embedded_tests {
    use super::*;
    use embedded_io::Write;

    #[test]
    fn embedded_write_all() {
        let mut hasher = Md4::new();
        for chunk in b"abcdefghijklmnopqrstuvwxyz".chunks(5) {
            hasher.write_all(chunk).unwrap();
        }

        assert_eq!(hasher.finalize(), Md4::digest(b"abcdefghijklmnopqrstuvwxyz"));
    }
}
