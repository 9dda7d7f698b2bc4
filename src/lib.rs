// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Immutable, compact, two-stage lookup tables that map every Unicode
//! code point (U+0000..=U+10FFFF) to a 16- or 32-bit value.
//!
//! A [`CodePointTrie`] is built offline from a code-point-to-value
//! mapping and shipped as a self-describing byte buffer. This crate is
//! the runtime side: it opens such buffers zero-copy
//! ([`CodePointTrie::try_from_serialized`]), looks values up
//! ([`CodePointTrie::get32`]), enumerates maximal same-value ranges
//! ([`CodePointTrie::get_range`], [`CodePointTrie::iter_ranges`]),
//! re-serializes bit-exactly ([`CodePointTrie::serialize`]), rewrites
//! buffers between endiannesses ([`swap`]), and decodes UTF-16 or UTF-8
//! text while yielding the value of each code point
//! ([`ForwardUtf16Iterator`], [`CodePointTrie::utf8_prev`]).
//!
//! Lookup is a single data-array read for ASCII, one index indirection
//! for the BMP, and two for supplementary code points; the tail of the
//! code point space from `high_start` up shares a single value. Sparse
//! regions compress onto a shared "null" data block.
//!
//! A trie is immutable after construction: every operation is a pure
//! read, safe from any number of threads.
//!
//! # Examples
//!
//! ```
//! use codepointtrie::{CodePointTrie, CodePointTrieHeader, TrieData};
//! use zerovec::ZeroVec;
//!
//! // A small trie: 'A' maps to 7, the rest of the BMP to 0 through the
//! // null block, and everything from U+10000 up to the high value 1.
//! let mut index = vec![0x80u16; 0x800];
//! for (i, entry) in index.iter_mut().enumerate().take(4) {
//!     *entry = (i * 32) as u16;
//! }
//! let mut data = vec![0u16; 0xa0];
//! data[0x41] = 7;
//! let header = CodePointTrieHeader {
//!     high_start: 0x10000,
//!     index2_null_offset: 0xffff,
//!     data_null_offset: 0x80,
//!     high_value: 1,
//!     error_value: 0xffff,
//! };
//! let trie = CodePointTrie::try_new(
//!     header,
//!     ZeroVec::alloc_from_slice(&index),
//!     TrieData::U16(ZeroVec::alloc_from_slice(&data)),
//! )
//! .unwrap();
//!
//! assert_eq!(trie.get('A'), 7);
//! assert_eq!(trie.get('뉴'), 0);
//! assert_eq!(trie.get('🦀'), 1);
//!
//! let range = trie.get_range(0x42).unwrap();
//! assert_eq!(range.range, 0x42..=0xffff);
//! assert_eq!(range.value, 0);
//! ```

// https://github.com/unicode-org/icu4x/blob/main/documents/process/boilerplate.md#library-annotations
#![cfg_attr(not(any(test, doc)), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic
    )
)]
#![warn(missing_docs)]

mod cptrie;
mod error;
mod impl_const;
mod serialized;
mod swap;
mod utf16;
mod utf8;

#[cfg(feature = "serde")]
mod serde;

pub use cptrie::CodePointMapRange;
pub use cptrie::CodePointMapRangeIterator;
pub use cptrie::CodePointTrie;
pub use cptrie::CodePointTrieHeader;
pub use cptrie::TrieData;
pub use cptrie::TrieStatistics;
pub use cptrie::ValueWidth;
pub use error::Error;
pub use serialized::get_version;
pub use swap::swap;
pub use swap::ByteOrder;
pub use utf16::BackwardUtf16Iterator;
pub use utf16::CodePointValue;
pub use utf16::ForwardUtf16Iterator;
pub use utf8::Utf8Prev;
pub use utf8::Utf8PrevLookup;
