// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Support for reading trie values while scanning UTF-8 text backward:
//! locate the code point whose encoding ends at a given position, without
//! decoding the whole text, and report where its value can be found.

use crate::cptrie::CodePointTrie;
use crate::impl_const::*;

/// Where the value for a backward-decoded code point can be read. From
/// [`CodePointTrie::utf8_prev`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Utf8PrevLookup {
    /// The value is at this offset in the data array.
    DataIndex(usize),
    /// The code point is at or above `high_start`: use
    /// [`high_value`](crate::CodePointTrieHeader::high_value).
    HighValue,
    /// The bytes do not end with a well-formed sequence: use
    /// [`error_value`](crate::CodePointTrieHeader::error_value).
    ErrorValue,
}

/// Result of backing over one UTF-8 code point. From
/// [`CodePointTrie::utf8_prev`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf8Prev {
    /// Number of bytes backed over: the encoded length of the decoded
    /// code point, `1` for a malformed trailing sequence, `0` only when
    /// the input was empty.
    pub len: usize,
    /// Where to read the value.
    pub lookup: Utf8PrevLookup,
}

/// Expected sequence length for a lead byte, or `None` if the byte cannot
/// start a sequence.
fn sequence_length(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

/// Decodes the code point whose well-formed UTF-8 encoding ends exactly
/// at the end of `bytes`, examining at most the trailing 4 bytes.
/// Overlong encodings, surrogates, and out-of-range sequences are
/// malformed.
fn prev_code_point(bytes: &[u8]) -> Option<(u32, usize)> {
    let end = bytes.len();
    let window = end.min(4);
    let mut n = 1;
    while n <= window {
        let byte = *bytes.get(end - n)?;
        if byte & 0xc0 != 0x80 {
            // Not a continuation byte: the sequence, if any, starts here
            // and must span exactly the n bytes up to the end.
            if sequence_length(byte)? != n {
                return None;
            }
            let mut code_point = match n {
                1 => u32::from(byte),
                2 => u32::from(byte & 0x1f),
                3 => u32::from(byte & 0x0f),
                _ => u32::from(byte & 0x07),
            };
            for trail in bytes.get(end - n + 1..end)? {
                code_point = (code_point << 6) | u32::from(trail & 0x3f);
            }
            let min_code_point = match n {
                1 => 0,
                2 => 0x80,
                3 => 0x800,
                _ => 0x10000,
            };
            if code_point < min_code_point || char::from_u32(code_point).is_none() {
                return None;
            }
            return Some((code_point, n));
        }
        n += 1;
    }
    None
}

impl CodePointTrie<'_> {
    /// Backs over the UTF-8 code point whose encoding ends at the end of
    /// `bytes` and reports how many bytes it spans and where its trie
    /// value can be read, without loading the value. At most 4 trailing
    /// bytes are examined. A trailing sequence that is not well-formed
    /// UTF-8 backs over a single byte and reports
    /// [`Utf8PrevLookup::ErrorValue`].
    ///
    /// This is the primitive for value-yielding backward iteration over
    /// UTF-8 text; [`utf8_prev_value`](Self::utf8_prev_value) also
    /// resolves the value.
    pub fn utf8_prev(&self, bytes: &[u8]) -> Utf8Prev {
        if bytes.is_empty() {
            return Utf8Prev {
                len: 0,
                lookup: Utf8PrevLookup::ErrorValue,
            };
        }
        let (code_point, len) = match prev_code_point(bytes) {
            Some(decoded) => decoded,
            None => {
                return Utf8Prev {
                    len: 1,
                    lookup: Utf8PrevLookup::ErrorValue,
                }
            }
        };
        let lookup = if code_point <= 0x7f {
            Utf8PrevLookup::DataIndex(code_point as usize)
        } else if code_point <= 0xffff {
            match self.bmp_index(code_point) {
                Some(data_index) => Utf8PrevLookup::DataIndex(data_index),
                None => Utf8PrevLookup::ErrorValue,
            }
        } else if code_point >= self.header.high_start {
            Utf8PrevLookup::HighValue
        } else {
            match self.supp_index(code_point) {
                Some(data_index) => Utf8PrevLookup::DataIndex(data_index),
                None => Utf8PrevLookup::ErrorValue,
            }
        };
        Utf8Prev { len, lookup }
    }

    /// Like [`utf8_prev`](Self::utf8_prev), but also loads the value:
    /// returns the 16-bit trie value for the code point preceding the end
    /// of `bytes` and the number of bytes it spans.
    pub fn utf8_prev_value(&self, bytes: &[u8]) -> (u16, usize) {
        let prev = self.utf8_prev(bytes);
        let value = match prev.lookup {
            Utf8PrevLookup::DataIndex(data_index) => self
                .data
                .get(data_index)
                .unwrap_or(self.header.error_value),
            Utf8PrevLookup::HighValue => self.header.high_value,
            Utf8PrevLookup::ErrorValue => self.header.error_value,
        };
        (value as u16, prev.len)
    }
}
