#![no_main]
use libfuzzer_sys::fuzz_target;
use oxirune::codec::{decode_flags, encode};

fuzz_target!(|cp: u32| {
    let encoded = encode(cp);
    if cp > 0x10FFFF {
        assert_eq!(encoded.len(), 0);
        return;
    }
    // Everything in range round-trips, surrogates included; only the
    // error classification distinguishes them.
    let (decoded, consumed, flags) = decode_flags(encoded.as_bytes());
    assert_eq!(decoded, cp);
    assert_eq!(consumed, encoded.len());
    let surrogate = (0xD800..=0xDFFF).contains(&cp);
    assert_eq!(!flags.is_empty(), surrogate);
});
