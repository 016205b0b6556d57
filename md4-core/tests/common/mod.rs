#![allow(dead_code)]

use digest::Digest as _;
use md4_core::Md4;

/// The test suite of RFC 1320 appendix A.5.
pub const RFC1320_SUITE: [(&str, [u8; 16]); 7] = [
    ("", hex_literal::hex!("31d6cfe0d16ae931b73c59d7e0c089c0")),
    ("a", hex_literal::hex!("bde52cb31de33e46245e05fbdbd6fb24")),
    ("abc", hex_literal::hex!("a448017aaf21d8525fc10ae87aa6729d")),
    ("message digest", hex_literal::hex!("d9130a8164549fe818874806e1c7014b")),
    ("abcdefghijklmnopqrstuvwxyz", hex_literal::hex!("d79e1c308aa5bbcdeea8ed63df412da9")),
    (
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        hex_literal::hex!("043f8582f241db351ce627e153e7f0e4")
    ),
    (
        "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        hex_literal::hex!("e33b4ddc9c38f2199c3e7b164fcc0536")
    )
];

/// Digest `data` with the RustCrypto implementation.
pub fn reference(data: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(md4::Md4::digest(data).as_slice());
    out
}

/// Digest `data` feeding the hasher a single byte at a time.
pub fn byte_at_a_time(data: &[u8]) -> [u8; 16] {
    let mut hasher = Md4::new();
    for byte in data {
        hasher.update(core::slice::from_ref(byte));
    }
    hasher.finalize().into_bytes()
}

/// Deterministic pseudo-random message of `len` bytes.
pub fn message(len: usize, seed: u64) -> Vec<u8> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill(out.as_mut_slice());
    out
}
