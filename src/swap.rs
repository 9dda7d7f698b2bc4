// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Rewriting a serialized trie between little- and big-endian, using only
//! the format's type information: the header is swapped field by field,
//! the index as 16-bit units, and the data as 16- or 32-bit units
//! depending on the encoded value width.

use crate::cptrie::ValueWidth;
use crate::error::Error;
use crate::impl_const::*;

/// The byte order of a serialized trie buffer. Knows how to read 16- and
/// 32-bit unsigned integers stored in that order; [`swap`] uses it to
/// validate the header of the input buffer before rewriting it into the
/// opposite order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first; the canonical order of the
    /// serialized form.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
}

impl ByteOrder {
    /// Reads a `u16` stored in this byte order.
    #[inline]
    pub fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
        }
    }

    /// Reads a `u32` stored in this byte order.
    #[inline]
    pub fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
        }
    }

    /// Returns the other byte order.
    pub fn opposite(self) -> ByteOrder {
        match self {
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
        }
    }
}

/// Rewrites 16-bit units from one byte order into the other. The byte
/// reversal is its own inverse, so this serves both directions.
fn swap_array_16(input: &[u8], output: &mut [u8]) {
    for (unit, out) in input.chunks_exact(2).zip(output.chunks_exact_mut(2)) {
        if let Ok(mut chunk) = <[u8; 2]>::try_from(unit) {
            chunk.reverse();
            out.copy_from_slice(&chunk);
        }
    }
}

/// Rewrites 32-bit units from one byte order into the other.
fn swap_array_32(input: &[u8], output: &mut [u8]) {
    for (unit, out) in input.chunks_exact(4).zip(output.chunks_exact_mut(4)) {
        if let Ok(mut chunk) = <[u8; 4]>::try_from(unit) {
            chunk.reverse();
            out.copy_from_slice(&chunk);
        }
    }
}

fn sub_slice(bytes: &[u8], at: usize, len: usize, needed: usize) -> Result<&[u8], Error> {
    bytes
        .get(at..at + len)
        .ok_or(Error::IndexOutOfBounds { needed })
}

fn sub_slice_mut(
    bytes: &mut [u8],
    at: usize,
    len: usize,
    needed: usize,
) -> Result<&mut [u8], Error> {
    bytes
        .get_mut(at..at + len)
        .ok_or(Error::IndexOutOfBounds { needed })
}

fn read_chunk<const N: usize>(bytes: &[u8], at: usize) -> Result<[u8; N], Error> {
    bytes
        .get(at..at + N)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(Error::IndexOutOfBounds {
            needed: HEADER_LENGTH,
        })
}

/// Rewrites the serialized trie in `input`, whose byte order the caller
/// declares as `order`, into the opposite byte order, and returns the
/// structural byte length. Applying the operation twice restores the
/// original bytes.
///
/// Passing `None` for `output` is a pure size query: the header is
/// validated and the structural length returned without writing
/// anything. `input` and `output` may not overlap.
///
/// The header is validated through `order` before anything is written; a
/// buffer whose signature does not read back correctly in the declared
/// order fails with [`Error::InvalidFormat`]. Use
/// [`get_version`](crate::get_version) with `any_endian_ok` to probe an
/// unknown buffer for which order applies.
pub fn swap(order: ByteOrder, input: &[u8], output: Option<&mut [u8]>) -> Result<usize, Error> {
    if input.len() < HEADER_LENGTH {
        return Err(Error::IndexOutOfBounds {
            needed: HEADER_LENGTH,
        });
    }

    let signature = order.read_u32(read_chunk(input, 0)?);
    if signature != SIGNATURE {
        return Err(Error::InvalidFormat {
            reason: "signature mismatch in the declared byte order",
        });
    }
    let options = order.read_u32(read_chunk(input, 4)?);
    let value_width = ValueWidth::try_from(options & OPTIONS_VALUE_BITS_MASK)?;
    if options & OPTIONS_RESERVED_MASK != 0 {
        return Err(Error::InvalidFormat {
            reason: "reserved option bits set",
        });
    }
    let index_length = order.read_u16(read_chunk(input, 8)?) as usize;
    let data_length = (order.read_u16(read_chunk(input, 10)?) as usize) << INDEX_SHIFT;
    if index_length < INDEX_1_OFFSET as usize {
        return Err(Error::InvalidFormat {
            reason: "index array shorter than the BMP index",
        });
    }
    if data_length < DATA_START_OFFSET as usize {
        return Err(Error::InvalidFormat {
            reason: "data array shorter than the ASCII block",
        });
    }

    let index_bytes = index_length * 2;
    let data_bytes = data_length * value_width.byte_length();
    let size = HEADER_LENGTH + index_bytes + data_bytes;

    let output = match output {
        Some(output) => output,
        None => return Ok(size),
    };
    if input.len() < size || output.len() < size {
        return Err(Error::IndexOutOfBounds { needed: size });
    }

    // Header: signature and options as 32-bit units, the four length and
    // offset fields as 16-bit units, the two value fields as 32-bit
    // units, and the reserved tail verbatim.
    swap_array_32(
        sub_slice(input, 0, 8, size)?,
        sub_slice_mut(output, 0, 8, size)?,
    );
    swap_array_16(
        sub_slice(input, 8, 8, size)?,
        sub_slice_mut(output, 8, 8, size)?,
    );
    swap_array_32(
        sub_slice(input, 16, 8, size)?,
        sub_slice_mut(output, 16, 8, size)?,
    );
    sub_slice_mut(output, 24, 8, size)?.copy_from_slice(sub_slice(input, 24, 8, size)?);

    // The index, and the data according to its width. For 16-bit values
    // the index and data form one contiguous run of 16-bit units.
    match value_width {
        ValueWidth::Bits16 => {
            swap_array_16(
                sub_slice(input, HEADER_LENGTH, index_bytes + data_bytes, size)?,
                sub_slice_mut(output, HEADER_LENGTH, index_bytes + data_bytes, size)?,
            );
        }
        ValueWidth::Bits32 => {
            swap_array_16(
                sub_slice(input, HEADER_LENGTH, index_bytes, size)?,
                sub_slice_mut(output, HEADER_LENGTH, index_bytes, size)?,
            );
            swap_array_32(
                sub_slice(input, HEADER_LENGTH + index_bytes, data_bytes, size)?,
                sub_slice_mut(output, HEADER_LENGTH + index_bytes, data_bytes, size)?,
            );
        }
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cptrie::CodePointTrie;
    use crate::serialized::tests::minimal_serialized;
    use alloc::vec;

    extern crate alloc;

    #[test]
    fn swap_roundtrip_16() {
        let bytes = minimal_serialized(ValueWidth::Bits16);
        let mut big = vec![0u8; bytes.len()];
        assert_eq!(
            swap(ByteOrder::LittleEndian, &bytes, Some(&mut big)),
            Ok(bytes.len())
        );
        assert_ne!(big, bytes);
        // The swapped buffer reads back through the opposite order.
        assert_eq!(
            ByteOrder::BigEndian.read_u32(big[..4].try_into().unwrap()),
            SIGNATURE
        );
        let mut back = vec![0u8; bytes.len()];
        assert_eq!(
            swap(ByteOrder::BigEndian, &big, Some(&mut back)),
            Ok(bytes.len())
        );
        assert_eq!(back, bytes);
    }

    #[test]
    fn swap_roundtrip_32() {
        let bytes = minimal_serialized(ValueWidth::Bits32);
        let mut big = vec![0u8; bytes.len()];
        swap(ByteOrder::LittleEndian, &bytes, Some(&mut big)).unwrap();
        let mut back = vec![0u8; bytes.len()];
        swap(ByteOrder::BigEndian, &big, Some(&mut back)).unwrap();
        assert_eq!(back, bytes);
    }

    #[test]
    fn swapped_buffer_opens_after_swapping_back() {
        let bytes = minimal_serialized(ValueWidth::Bits16);
        let mut big = vec![0u8; bytes.len()];
        swap(ByteOrder::LittleEndian, &bytes, Some(&mut big)).unwrap();
        // Not directly openable while big-endian.
        assert!(CodePointTrie::try_from_serialized(ValueWidth::Bits16, &big).is_err());
        let mut little = vec![0u8; big.len()];
        swap(ByteOrder::BigEndian, &big, Some(&mut little)).unwrap();
        let (trie, _) = CodePointTrie::try_from_serialized(ValueWidth::Bits16, &little).unwrap();
        assert_eq!(trie.get32(0x41), 7);
    }

    #[test]
    fn size_query() {
        let bytes = minimal_serialized(ValueWidth::Bits16);
        assert_eq!(swap(ByteOrder::LittleEndian, &bytes, None), Ok(bytes.len()));
        // The query works from the header alone even if the buffer is
        // truncated below the structural size.
        assert_eq!(
            swap(ByteOrder::LittleEndian, &bytes[..64], None),
            Ok(bytes.len())
        );
    }

    #[test]
    fn rejects_wrong_order_and_short_buffers() {
        let bytes = minimal_serialized(ValueWidth::Bits16);
        assert_eq!(
            swap(ByteOrder::BigEndian, &bytes, None),
            Err(Error::InvalidFormat {
                reason: "signature mismatch in the declared byte order",
            })
        );
        assert_eq!(
            swap(ByteOrder::LittleEndian, &bytes[..16], None),
            Err(Error::IndexOutOfBounds {
                needed: HEADER_LENGTH,
            })
        );
        let mut short = vec![0u8; 64];
        assert_eq!(
            swap(ByteOrder::LittleEndian, &bytes, Some(&mut short)),
            Err(Error::IndexOutOfBounds { needed: bytes.len() })
        );
        assert_eq!(
            swap(ByteOrder::LittleEndian, &bytes[..64], Some(&mut vec![0u8; bytes.len()])),
            Err(Error::IndexOutOfBounds { needed: bytes.len() })
        );
    }
}
