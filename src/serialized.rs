// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! The serialized form: a 32-byte header, the index array as 16-bit
//! units, then the data array as 16- or 32-bit units, all little-endian.
//! Opposite-endian buffers must be rewritten with [`crate::swap`] first.

use crate::cptrie::{CodePointTrie, CodePointTrieHeader, TrieData, ValueWidth};
use crate::error::Error;
use crate::impl_const::*;

use zerovec::ZeroVec;

fn read_u16_le(bytes: &[u8], at: usize) -> Option<u16> {
    let chunk: [u8; 2] = bytes.get(at..at + 2)?.try_into().ok()?;
    Some(u16::from_le_bytes(chunk))
}

fn read_u32_le(bytes: &[u8], at: usize) -> Option<u32> {
    let chunk: [u8; 4] = bytes.get(at..at + 4)?.try_into().ok()?;
    Some(u32::from_le_bytes(chunk))
}

fn write_bytes(out: &mut [u8], at: usize, src: &[u8]) -> Option<()> {
    out.get_mut(at..at + src.len())?.copy_from_slice(src);
    Some(())
}

const SHORT_HEADER: Error = Error::InvalidFormat {
    reason: "buffer too short for the header",
};

impl<'trie> CodePointTrie<'trie> {
    /// Opens a trie from its serialized form, borrowing `bytes` in place.
    ///
    /// The caller declares the [`ValueWidth`] it expects; a mismatch with
    /// the encoded width is an error. On success, also returns the number
    /// of bytes the trie occupies, so a caller reading a larger stream
    /// can advance past it. Trailing bytes beyond that length are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use codepointtrie::{CodePointTrie, ValueWidth};
    ///
    /// # let source = {
    /// #     let mut index = vec![0x80u16; 0x800];
    /// #     for (i, entry) in index.iter_mut().enumerate().take(4) {
    /// #         *entry = (i * 32) as u16;
    /// #     }
    /// #     let mut data = vec![0u16; 0xa0];
    /// #     data[0x41] = 7;
    /// #     let header = codepointtrie::CodePointTrieHeader {
    /// #         high_start: 0x10000,
    /// #         index2_null_offset: 0xffff,
    /// #         data_null_offset: 0x80,
    /// #         high_value: 0,
    /// #         error_value: 0xffff,
    /// #     };
    /// #     CodePointTrie::try_new(
    /// #         header,
    /// #         zerovec::ZeroVec::alloc_from_slice(&index),
    /// #         codepointtrie::TrieData::U16(zerovec::ZeroVec::alloc_from_slice(&data)),
    /// #     )
    /// #     .unwrap()
    /// # };
    /// let mut bytes = vec![0u8; source.serialized_length()];
    /// source.serialize(&mut bytes).unwrap();
    ///
    /// let (trie, consumed) =
    ///     CodePointTrie::try_from_serialized(ValueWidth::Bits16, &bytes).unwrap();
    /// assert_eq!(consumed, bytes.len());
    /// assert_eq!(trie.get32(0x41), 7);
    /// ```
    pub fn try_from_serialized(
        value_width: ValueWidth,
        bytes: &'trie [u8],
    ) -> Result<(CodePointTrie<'trie>, usize), Error> {
        if bytes.len() < HEADER_LENGTH {
            return Err(SHORT_HEADER);
        }
        let signature = read_u32_le(bytes, 0).ok_or(SHORT_HEADER)?;
        if signature == SIGNATURE_OE {
            return Err(Error::InvalidFormat {
                reason: "opposite-endian signature, swap the buffer first",
            });
        }
        if signature != SIGNATURE {
            return Err(Error::InvalidFormat {
                reason: "signature mismatch",
            });
        }
        let options = read_u32_le(bytes, 4).ok_or(SHORT_HEADER)?;
        let encoded_width = ValueWidth::try_from(options & OPTIONS_VALUE_BITS_MASK)?;
        if encoded_width != value_width {
            return Err(Error::InvalidFormat {
                reason: "value width does not match the encoded one",
            });
        }
        if options & OPTIONS_RESERVED_MASK != 0 {
            return Err(Error::InvalidFormat {
                reason: "reserved option bits set",
            });
        }
        let index_length = read_u16_le(bytes, 8).ok_or(SHORT_HEADER)? as usize;
        let data_length =
            (read_u16_le(bytes, 10).ok_or(SHORT_HEADER)? as usize) << INDEX_SHIFT;
        let index2_null_offset = read_u16_le(bytes, 12).ok_or(SHORT_HEADER)?;
        let shifted_high_start = read_u16_le(bytes, 14).ok_or(SHORT_HEADER)?;
        let high_value = read_u32_le(bytes, 16).ok_or(SHORT_HEADER)?;
        let error_value = read_u32_le(bytes, 20).ok_or(SHORT_HEADER)?;

        let actual_length =
            HEADER_LENGTH + index_length * 2 + data_length * value_width.byte_length();
        if bytes.len() < actual_length {
            return Err(Error::InvalidFormat {
                reason: "buffer shorter than the declared arrays",
            });
        }

        let index_end = HEADER_LENGTH + index_length * 2;
        let index_bytes = bytes.get(HEADER_LENGTH..index_end).ok_or(SHORT_HEADER)?;
        let data_bytes = bytes.get(index_end..actual_length).ok_or(SHORT_HEADER)?;
        let bad_units = Error::InvalidFormat {
            reason: "array bytes are not a whole number of units",
        };
        let index = ZeroVec::parse_bytes(index_bytes).map_err(|_| bad_units)?;
        let data = match value_width {
            ValueWidth::Bits16 => {
                TrieData::U16(ZeroVec::parse_bytes(data_bytes).map_err(|_| bad_units)?)
            }
            ValueWidth::Bits32 => {
                TrieData::U32(ZeroVec::parse_bytes(data_bytes).map_err(|_| bad_units)?)
            }
        };

        let header = CodePointTrieHeader {
            high_start: u32::from(shifted_high_start) << SHIFT_1,
            index2_null_offset,
            data_null_offset: options >> OPTIONS_DATA_NULL_SHIFT,
            high_value,
            error_value,
        };
        let trie = CodePointTrie::try_new(header, index, data)?;
        Ok((trie, actual_length))
    }

    /// Returns the byte length of the serialized form of this trie.
    pub fn serialized_length(&self) -> usize {
        HEADER_LENGTH + self.index.as_bytes().len() + self.data.as_bytes().len()
    }

    /// Writes the serialized form into `out` and returns the number of
    /// bytes written.
    ///
    /// An empty `out` is a pure size query: the required length is
    /// returned and nothing is written. A non-empty but too-short `out`
    /// fails with [`Error::BufferOverflow`], which also carries the
    /// required length so the caller can resize and retry.
    pub fn serialize(&self, out: &mut [u8]) -> Result<usize, Error> {
        let needed = self.serialized_length();
        if out.is_empty() {
            return Ok(needed);
        }
        if out.len() < needed {
            return Err(Error::BufferOverflow { needed });
        }
        let overflow = Error::BufferOverflow { needed };
        let options = (self.header.data_null_offset << OPTIONS_DATA_NULL_SHIFT)
            | self.data.value_width() as u32;
        write_bytes(out, 0, &SIGNATURE.to_le_bytes()).ok_or(overflow)?;
        write_bytes(out, 4, &options.to_le_bytes()).ok_or(overflow)?;
        write_bytes(out, 8, &(self.index.len() as u16).to_le_bytes()).ok_or(overflow)?;
        write_bytes(
            out,
            10,
            &((self.data.len() >> INDEX_SHIFT) as u16).to_le_bytes(),
        )
        .ok_or(overflow)?;
        write_bytes(out, 12, &self.header.index2_null_offset.to_le_bytes()).ok_or(overflow)?;
        write_bytes(out, 14, &self.header.shifted_high_start().to_le_bytes())
            .ok_or(overflow)?;
        write_bytes(out, 16, &self.header.high_value.to_le_bytes()).ok_or(overflow)?;
        write_bytes(out, 20, &self.header.error_value.to_le_bytes()).ok_or(overflow)?;
        write_bytes(out, 24, &[0u8; 8]).ok_or(overflow)?;
        write_bytes(out, HEADER_LENGTH, self.index.as_bytes()).ok_or(overflow)?;
        write_bytes(
            out,
            HEADER_LENGTH + self.index.as_bytes().len(),
            self.data.as_bytes(),
        )
        .ok_or(overflow)?;
        Ok(needed)
    }
}

/// Probes the leading bytes of `bytes` for a serialized trie signature
/// and returns the format version: `3` for the current format, `2` or `1`
/// for the earlier formats that share the same first-word schema (those
/// are recognized for dispatch only, not decoded), or `0` if the bytes
/// are not a serialized trie.
///
/// When `any_endian_ok` is set, opposite-endian signatures are also
/// recognized; such a buffer must still be rewritten with [`crate::swap`]
/// before it can be opened.
pub fn get_version(bytes: &[u8], any_endian_ok: bool) -> u8 {
    if bytes.len() < 16 {
        return 0;
    }
    let signature = match read_u32_le(bytes, 0) {
        Some(signature) => signature,
        None => return 0,
    };
    match signature {
        SIGNATURE => 3,
        SIGNATURE_V2 => 2,
        SIGNATURE_V1 => 1,
        SIGNATURE_OE if any_endian_ok => 3,
        SIGNATURE_V2_OE if any_endian_ok => 2,
        SIGNATURE_V1_OE if any_endian_ok => 1,
        _ => 0,
    }
}
