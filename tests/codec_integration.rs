// End-to-end codec tests: exhaustive round-trips, known vectors, and the
// buffer-bounds contracts.

use oxirune::codec::{
    DecodeFlags, MAX_CODEPOINT, Utf8Char, decode_char, decode_flags, decode_padded, encode,
    encode_to,
};
use oxirune::text;

fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

#[test]
fn roundtrip_every_scalar() {
    for cp in 1..=MAX_CODEPOINT {
        if is_surrogate(cp) {
            continue;
        }
        let encoded = encode(cp);
        assert!(encoded.is_valid(), "encode failed for {cp:#X}");

        let (decoded, consumed, flags) = decode_flags(encoded.as_bytes());
        assert_eq!(decoded, cp, "value mismatch for {cp:#X}");
        assert_eq!(consumed, encoded.len(), "length mismatch for {cp:#X}");
        assert!(flags.is_empty(), "spurious flags {flags:?} for {cp:#X}");
    }
}

#[test]
fn roundtrip_agrees_with_std_lengths() {
    // Spot-check one codepoint per encoded length against char::len_utf8.
    for cp in [0x41u32, 0x45D, 0x26BD, 0x1F514] {
        let c = char::from_u32(cp).unwrap();
        assert_eq!(encode(cp).len(), c.len_utf8());
        assert_eq!(encode(cp).as_bytes(), c.to_string().as_bytes());
    }
}

#[test]
fn decode_known_glyphs() {
    for (glyph, cp) in [
        ("Щ", 0x429u32),
        ("→", 0x2192),
        ("⚽", 0x26BD),
        ("⛄", 0x26C4),
        ("🔔", 0x1F514),
        ("∞", 0x221E),
    ] {
        let (decoded, consumed, flags) = decode_flags(glyph.as_bytes());
        assert_eq!(decoded, cp, "{glyph}");
        assert_eq!(consumed, glyph.len(), "{glyph}");
        assert!(flags.is_empty(), "{glyph}");
    }
}

#[test]
fn ascii_identity() {
    for cp in 0x00..=0x7Fu32 {
        let encoded = encode(cp);
        assert_eq!(encoded.as_bytes(), &[cp as u8]);

        let (decoded, consumed, flags) = decode_flags(&[cp as u8]);
        assert_eq!((decoded, consumed), (cp, 1));
        assert!(flags.is_empty());
    }
}

#[test]
fn surrogate_asymmetry() {
    // The encoder accepts a surrogate half...
    let encoded = encode(0xD800);
    assert_eq!(encoded.len(), 3);

    // ...and the decoder flags the resulting bytes.
    let (decoded, consumed, flags) = decode_flags(encoded.as_bytes());
    assert_eq!((decoded, consumed), (0xD800, 3));
    assert_eq!(flags, DecodeFlags::SURROGATE_HALF);

    // The strict layer refuses.
    assert!(decode_char(encoded.as_bytes()).is_err());
}

#[test]
fn out_of_range_encode() {
    let encoded = encode(MAX_CODEPOINT + 1);
    assert_eq!(encoded.len(), 0);
    assert!(encoded.as_bytes().is_empty());

    let mut dest = [0xAAu8; 8];
    assert_eq!(encode_to(&mut dest, MAX_CODEPOINT + 1), 0);
    assert_eq!(dest, [0xAA; 8]);
}

#[test]
fn progress_guarantee_on_arbitrary_windows() {
    // Any 4-byte window decodes with consumed in 1..=4. LCG sweep plus the
    // all-zero window.
    assert_eq!(decode_padded(&[0, 0, 0, 0]).1, 1);

    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..100_000 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let window = ((state >> 24) as u32).to_le_bytes();
        let (_, consumed) = decode_padded(&window);
        assert!((1..=4).contains(&consumed), "window {window:02X?}");
    }
}

#[test]
fn copy_refusal_grid() {
    // Every encoded length against every destination window size: copies
    // happen iff the window fits, and never partially.
    for cp in [0x41u32, 0xE9, 0x26BD, 0x1F514] {
        let encoded = encode(cp);
        for window in 0..=5usize {
            let mut dest = [0xAAu8; 5];
            let written = encoded.copy_to(&mut dest[..window]);
            if window < encoded.len() {
                assert_eq!(written, 0, "cp {cp:#X} window {window}");
                assert_eq!(dest, [0xAA; 5], "cp {cp:#X} window {window}: partial write");
            } else {
                assert_eq!(written, encoded.len(), "cp {cp:#X} window {window}");
                assert_eq!(&dest[..written], encoded.as_bytes());
                assert!(dest[written..].iter().all(|&b| b == 0xAA));
            }
        }
    }
}

#[test]
fn bounded_decode_min_and_extra_length() {
    // Decoding from a window of exactly the sequence length and from a
    // longer window must agree; trailing garbage must not leak in.
    for cp in [0x41u32, 0xE9, 0x26BD, 0x1F514] {
        let encoded = encode(cp);
        let mut buf = [b'x'; 8];
        assert_eq!(encoded.copy_to(&mut buf), encoded.len());

        let exact = decode_flags(&buf[..encoded.len()]);
        let extra = decode_flags(&buf);
        assert_eq!(exact, (cp, encoded.len(), DecodeFlags::empty()));
        assert_eq!(extra, exact);
    }
}

#[test]
fn char_layer_round_trip() {
    for c in ['\u{1}', 'a', 'é', 'ぽ', '⚽', '🔔', '\u{10FFFF}'] {
        let encoded = Utf8Char::from(c);
        let (decoded, consumed) = decode_char(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, c);
        assert_eq!(consumed, encoded.len());
    }
}

#[test]
fn lossy_scan_of_mixed_buffer() {
    // Valid text interleaved with every malformed shape: lone continuation,
    // overlong pair, truncated 4-byte tail at the end.
    let mut bytes = Vec::new();
    bytes.extend_from_slice("ok ".as_bytes());
    bytes.push(0xBF);
    bytes.extend_from_slice("🎨".as_bytes());
    bytes.extend_from_slice(&[0xC1, 0xBF]);
    bytes.extend_from_slice(&[0xF0, 0x9F]);
    assert_eq!(text::decode_lossy(&bytes), "ok \u{FFFD}🎨\u{FFFD}\u{FFFD}");
}

#[test]
fn scan_terminates_on_any_input() {
    // Cursor scanning arbitrary bytes always terminates within len steps.
    let mut state = 0xDEAD_BEEF_CAFE_F00Du64;
    let mut buf = vec![0u8; 512];
    for byte in buf.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        *byte = (state >> 33) as u8;
    }
    let mut rest = buf.as_slice();
    let mut steps = 0usize;
    while !rest.is_empty() {
        text::advance(&mut rest);
        steps += 1;
        assert!(steps <= buf.len());
    }
}
