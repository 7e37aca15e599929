// String-oriented helpers layered over the codec.
//
// These adapt the single-codepoint operations to whole buffers: a
// cursor-style advance for scan loops, a lossy whole-buffer conversion,
// and an owned-String encode. The >= 1 byte progress guarantee of the
// decoder makes every loop here terminate on arbitrary input.

use log::debug;

use crate::codec::{self, DecodeFlags};

/// Decode the first codepoint of `input` and advance the cursor.
///
/// The cursor moves by the consumed length, clamped to the remaining bytes
/// (a truncated trailing sequence classifies longer than the buffer).
/// Advances at least one byte whenever `input` is non-empty.
#[inline]
pub fn advance(input: &mut &[u8]) -> u32 {
    let (cp, consumed) = codec::decode(input);
    *input = &input[consumed.min(input.len())..];
    cp
}

/// Like [`advance`], also reporting the error classification.
#[inline]
pub fn advance_flags(input: &mut &[u8]) -> (u32, DecodeFlags) {
    let (cp, consumed, flags) = codec::decode_flags(input);
    *input = &input[consumed.min(input.len())..];
    (cp, flags)
}

/// Convert a byte buffer to a `String`, substituting U+FFFD for every
/// malformed sequence.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    let mut replaced = 0usize;
    while !rest.is_empty() {
        let (cp, flags) = advance_flags(&mut rest);
        match char::from_u32(cp) {
            Some(c) if flags.is_empty() => out.push(c),
            _ => {
                out.push('\u{FFFD}');
                replaced += 1;
            }
        }
    }
    if replaced > 0 {
        debug!("decode_lossy: replaced {replaced} malformed sequence(s) in {} bytes", bytes.len());
    }
    out
}

/// Encode a codepoint as an owned `String`.
///
/// Returns `None` when the codepoint is too large or its encoding is not
/// valid UTF-8 (a `String` cannot carry an encoded surrogate; use
/// [`codec::encode`] for raw bytes).
pub fn encode_string(cp: u32) -> Option<String> {
    codec::encode(cp).to_str().map(str::to_owned)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
