#![no_main]

use libfuzzer_sys::fuzz_target;
use md4_core::endian::{Assembled, Direct};
use md4_core::Md4;

fuzz_target!(|data: &[u8]| {
    // the first two bytes choose the split points, the rest is the message.
    let (split, msg) = match data {
        [a, b, rest @ ..] => ((*a as usize, *b as usize), rest),
        _ => return
    };

    let whole = Md4::digest(msg);

    let first = split.0.min(msg.len());
    let second = (first + split.1).min(msg.len());

    let mut direct = Md4::<Direct>::init();
    direct.update(&msg[..first]);
    direct.update(&msg[first..second]);
    direct.update(&msg[second..]);

    let mut assembled = Md4::<Assembled>::init();
    assembled.update(&msg[..second]);
    assembled.update(&msg[second..]);

    assert_eq!(direct.finalize(), whole);
    assert_eq!(assembled.finalize(), whole);
});
