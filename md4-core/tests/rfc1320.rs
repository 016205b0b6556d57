pub mod common;

use common::{RFC1320_SUITE, byte_at_a_time, reference};
use md4_core::endian::{Assembled, Direct};
use md4_core::Md4;

#[test]
fn rfc1320_suite() {
    for (input, expected) in RFC1320_SUITE {
        assert_eq!(Md4::digest(input.as_bytes()), expected, "input: {input:?}");
    }
}

#[test]
fn rfc1320_suite_assembled() {
    for (input, expected) in RFC1320_SUITE {
        let mut hasher = Md4::<Assembled>::init();
        hasher.update(input.as_bytes());
        assert_eq!(hasher.finalize(), expected, "input: {input:?}");
    }
}

#[test]
fn rfc1320_suite_direct() {
    for (input, expected) in RFC1320_SUITE {
        let mut hasher = Md4::<Direct>::init();
        hasher.update(input.as_bytes());
        assert_eq!(hasher.finalize(), expected, "input: {input:?}");
    }
}

#[test]
fn rfc1320_suite_byte_at_a_time() {
    for (input, expected) in RFC1320_SUITE {
        assert_eq!(byte_at_a_time(input.as_bytes()), expected, "input: {input:?}");
    }
}

#[test]
fn rfc1320_suite_matches_reference() {
    for (input, expected) in RFC1320_SUITE {
        assert_eq!(reference(input.as_bytes()), expected, "input: {input:?}");
    }
}

#[test]
fn hex_rendering() {
    let digest = Md4::digest(b"abc");
    assert_eq!(hex::encode(digest), "a448017aaf21d8525fc10ae87aa6729d");
}
