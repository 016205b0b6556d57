//! Cryptographic Hash Algorithms
pub mod md4;

pub use md4::Md4;
