// UTF-8 <-> UTF-32 single-codepoint codec.
//
// Two leaf operations with no dependency beyond shared constants:
//
// - `decoder` — branchless fixed-window UTF-8 -> codepoint conversion with
//               optional error classification, plus bounds-safe wrappers
// - `encoder` — codepoint -> UTF-8 conversion into a fixed-capacity value
//
// The decoder flags surrogate halves as errors while the encoder accepts
// them. The asymmetry is deliberate: raw `u32` values round-trip WTF-8
// style through `encode`/`decode`, and the strictness lives in the typed
// layer (`decode_char`, `From<char>`), where a surrogate cannot occur.

pub mod decoder;
pub mod encoder;

// Re-export key types for convenience.
pub use decoder::{
    DecodeError, DecodeFlags, decode, decode_char, decode_flags, decode_padded,
    decode_padded_flags,
};
pub use encoder::{EncodeError, Utf8Char, encode, encode_to};

/// Largest valid Unicode codepoint, U+10FFFF.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// U+FFFD REPLACEMENT CHARACTER, the conventional substitute for
/// malformed input.
pub const REPLACEMENT_CODEPOINT: u32 = 0xFFFD;
