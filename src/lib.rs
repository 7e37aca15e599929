//! Oxirune: branchless UTF-8 <-> UTF-32 single-codepoint conversion.
//!
//! The crate provides:
//! - A branchless UTF-8 decoder with error classification (`codec::decoder`)
//! - A paired UTF-8 encoder and fixed-size character value (`codec::encoder`)
//! - String-oriented helpers (`text`)
//!
//! The codec deals in single codepoints, one call at a time; decoding
//! always consumes between 1 and 4 bytes, even on malformed input, so any
//! scan loop over a buffer makes progress.
//!
//! # Quick Start
//!
//! ```
//! use oxirune::codec::{decode_flags, encode};
//!
//! let ball = encode(0x26BD);
//! assert_eq!(ball.as_bytes(), "⚽".as_bytes());
//!
//! let (cp, consumed, flags) = decode_flags("⚽ goal".as_bytes());
//! assert_eq!((cp, consumed), (0x26BD, 3));
//! assert!(flags.is_empty());
//! ```

pub mod codec;
pub mod text;

pub use codec::{
    DecodeError, DecodeFlags, EncodeError, MAX_CODEPOINT, REPLACEMENT_CODEPOINT, Utf8Char,
};
