//! Portable, bit-exact MD4 ([RFC 1320]).
//!
//! # Security Warning
//!
//! MD4 has been considered **fully compromised** since 1995, with original weaknesses published
//! in 1991, as of 2007 an attack can generate collisions in less than two MD4 hash operations.
//! This crate exists for interoperability with protocols and formats which still require it, it
//! makes no claim of cryptographic strength.
//!
//! # Layout
//!
//! - [`endian`]: load / store of 32 and 64-bit integers in either byte order, at any alignment.
//! - [`compress`]: the MD4 compression function over a single 64-byte block.
//! - [`hash`]: the streaming [`Md4`] engine, handling buffering, padding, and finalization.
//!
//! # Example
//!
//! ```
//! use md4_core::Md4;
//!
//! let mut hasher = Md4::new();
//! hasher.update(b"message ");
//! hasher.update(b"digest");
//!
//! let digest = hasher.finalize();
//! assert_eq!(digest, Md4::digest(b"message digest"));
//! ```
//!
//! [RFC 1320]: https://www.rfc-editor.org/rfc/rfc1320
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::all
)]
// the word / byte conversions truncate on purpose, MD4 is defined modulo 2^32.
#![allow(clippy::cast_possible_truncation)]
// stupid lint IMO
#![allow(clippy::module_name_repetitions)]
// this devalues things which actually require the must-use attribute
#![allow(clippy::must_use_candidate)]
// I don't need a linter lecturing me on performance
#![allow(clippy::inline_always)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod sealed;
mod error;
pub mod buf;
pub mod endian;
pub mod compress;
pub mod hash;
mod io;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::InvalidSize;
pub use buf::{Block, Digest};
pub use hash::Md4;

/// The size of a single MD4 message block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// The size of the MD4 digest in bytes.
pub const DIGEST_SIZE: usize = 16;
