// Branchless UTF-8 -> UTF-32 decoding.
//
// Based on https://github.com/skeeto/branchless-utf8 by Christopher Wellons:
// classify the lead byte with a 32-entry table, then unconditionally load
// and mask all four window bytes so that only the final compacting shift
// depends on the sequence length. Runs in data-independent time.
//
// The fixed-window core (`decode_padded*`) takes `&[u8; 4]`, which moves the
// "at least 4 readable bytes" contract into the type system. The slice
// wrappers (`decode*`) bridge arbitrary buffers by copying short tails into
// a zero-initialized scratch window.

use bitflags::bitflags;
use thiserror::Error;

use super::MAX_CODEPOINT;

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Sequence length keyed by the lead byte's top 5 bits. Zero marks bytes
/// that can never start a sequence (continuations 0x80-0xBF and the
/// reserved leads 0xF8-0xFF).
const LENGTHS: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, //
    0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 3, 3, 4, 0,
];

/// Payload mask for the lead byte, indexed by classified length.
const LEAD_MASKS: [u32; 5] = [0x00, 0x7F, 0x1F, 0x0F, 0x07];

/// Compacting right shift applied after accumulating all four bytes.
const VALUE_SHIFTS: [u32; 5] = [0, 18, 12, 6, 0];

/// Smallest codepoint representable at each length; anything below is an
/// overlong encoding. The length-0 row is an impossible minimum, so invalid
/// lead bytes always trip the overlong check.
const MIN_VALUES: [u32; 5] = [4_194_304, 0, 128, 2048, 65_536];

/// Right shift normalizing the accumulated error word per length, dropping
/// continuation checks for tail bytes outside the sequence.
const ERROR_SHIFTS: [u32; 5] = [0, 6, 4, 2, 0];

// ---------------------------------------------------------------------------
// Error flags
// ---------------------------------------------------------------------------

bitflags! {
    /// Classification of a malformed decode. Bits are independent; several
    /// may be set at once. Empty means the sequence was well-formed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DecodeFlags: u8 {
        /// Non-canonical encoding: more bytes than the codepoint needs.
        const OVERLONG = 1 << 0;
        /// Decoded value lies in the UTF-16 surrogate range 0xD800-0xDFFF.
        const SURROGATE_HALF = 1 << 1;
        /// Decoded value exceeds [`MAX_CODEPOINT`].
        const OUT_OF_RANGE = 1 << 2;
        /// A continuation byte inside the sequence does not match `10xxxxxx`.
        const MALFORMED_TAIL = 1 << 3;
    }
}

impl DecodeFlags {
    /// Map the normalized error word back onto stable bit positions.
    ///
    /// After the per-length shift the raw word holds the overlong /
    /// surrogate / range bits at `6 - shift` .. `8 - shift` and the
    /// surviving continuation checks below them.
    fn from_raw(raw: u32, len: usize) -> Self {
        let shift = ERROR_SHIFTS[len];
        let mut flags = DecodeFlags::empty();
        if raw >> (6 - shift) & 1 != 0 {
            flags |= DecodeFlags::OVERLONG;
        }
        if raw >> (7 - shift) & 1 != 0 {
            flags |= DecodeFlags::SURROGATE_HALF;
        }
        if raw >> (8 - shift) & 1 != 0 {
            flags |= DecodeFlags::OUT_OF_RANGE;
        }
        if raw & ((1 << (6 - shift)) - 1) != 0 {
            flags |= DecodeFlags::MALFORMED_TAIL;
        }
        flags
    }
}

// ---------------------------------------------------------------------------
// Fixed-window core
// ---------------------------------------------------------------------------

#[inline]
fn classify(lead: u8) -> usize {
    LENGTHS[(lead >> 3) as usize] as usize
}

#[inline]
fn accumulate(window: &[u8; 4], len: usize) -> u32 {
    let mut cp = (u32::from(window[0]) & LEAD_MASKS[len]) << 18;
    cp |= (u32::from(window[1]) & 0x3F) << 12;
    cp |= (u32::from(window[2]) & 0x3F) << 6;
    cp |= u32::from(window[3]) & 0x3F;
    cp >> VALUE_SHIFTS[len]
}

/// Decode one codepoint from a 4-byte window.
///
/// Returns `(codepoint, consumed)` with `consumed` in `1..=4`. Bytes past
/// the logical end of the data must be zero-padded by the caller; see
/// [`decode`] for a wrapper that does this. Malformed input still yields a
/// deterministic value and consumes at least one byte.
#[inline]
pub fn decode_padded(window: &[u8; 4]) -> (u32, usize) {
    let len = classify(window[0]);
    (accumulate(window, len), len.max(1))
}

/// Decode one codepoint from a 4-byte window, classifying errors.
///
/// Same value and length as [`decode_padded`], plus a [`DecodeFlags`] set
/// accumulated from the overlong / surrogate / range checks and the
/// continuation-byte top bits of every tail byte inside the sequence.
#[inline]
pub fn decode_padded_flags(window: &[u8; 4]) -> (u32, usize, DecodeFlags) {
    let len = classify(window[0]);
    let cp = accumulate(window, len);

    let mut raw = u32::from(cp < MIN_VALUES[len]) << 6;
    raw |= u32::from((cp >> 11) == 0x1B) << 7;
    raw |= u32::from(cp > MAX_CODEPOINT) << 8;
    raw |= (u32::from(window[1]) & 0xC0) >> 2;
    raw |= (u32::from(window[2]) & 0xC0) >> 4;
    raw |= u32::from(window[3]) >> 6;
    raw ^= 0x2A; // top two bits of each tail byte must be `10`
    raw >>= ERROR_SHIFTS[len];

    (cp, len.max(1), DecodeFlags::from_raw(raw, len))
}

// ---------------------------------------------------------------------------
// Bounded slice wrappers
// ---------------------------------------------------------------------------

#[inline]
fn pad(input: &[u8]) -> [u8; 4] {
    let mut window = [0u8; 4];
    window[..input.len()].copy_from_slice(input);
    window
}

/// Decode one codepoint from the front of `input`.
///
/// Borrows the first four bytes directly when available; shorter tails are
/// copied into a zero-initialized scratch window first, so the read never
/// goes past the end of `input`.
///
/// An empty slice decodes as `(0, 1)`, and a truncated multi-byte sequence
/// reports its full classified length, which may exceed `input.len()`;
/// callers advancing a cursor should clamp (as [`crate::text::advance`]
/// does).
#[inline]
pub fn decode(input: &[u8]) -> (u32, usize) {
    match input.first_chunk::<4>() {
        Some(window) => decode_padded(window),
        None => decode_padded(&pad(input)),
    }
}

/// Decode one codepoint from the front of `input`, classifying errors.
///
/// Bounds behavior is identical to [`decode`].
#[inline]
pub fn decode_flags(input: &[u8]) -> (u32, usize, DecodeFlags) {
    match input.first_chunk::<4>() {
        Some(window) => decode_padded_flags(window),
        None => decode_padded_flags(&pad(input)),
    }
}

// ---------------------------------------------------------------------------
// Strict layer
// ---------------------------------------------------------------------------

/// A decode that produced something other than a Unicode scalar value.
///
/// `consumed` is the guaranteed >= 1 byte advance, so callers can skip the
/// offending bytes and continue scanning.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid UTF-8 sequence ({flags:?}), {consumed} byte(s) consumed")]
pub struct DecodeError {
    /// What was wrong with the sequence.
    pub flags: DecodeFlags,
    /// Bytes the decoder consumed, in `1..=4`.
    pub consumed: usize,
}

/// Decode one codepoint from the front of `input` as a `char`.
///
/// Returns `(char, consumed)` for well-formed input and a [`DecodeError`]
/// carrying the classification and the consumed length otherwise.
pub fn decode_char(input: &[u8]) -> Result<(char, usize), DecodeError> {
    let (cp, consumed, flags) = decode_flags(input);
    match char::from_u32(cp) {
        Some(c) if flags.is_empty() => Ok((c, consumed)),
        _ => Err(DecodeError { flags, consumed }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
