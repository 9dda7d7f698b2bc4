// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Constants that parameterize the serialized trie layout. They are fixed
//! by the format; a buffer produced with different values is not a valid
//! serialized trie.

/// Shift size for getting the index-1 table offset.
pub const SHIFT_1: u32 = 11;

/// Shift size for getting the index-2 table offset.
pub const SHIFT_2: u32 = 5;

/// Difference between the two shift sizes,
/// for getting an index-1 offset from an index-2 offset. 6=11-5
pub const SHIFT_1_2: u32 = SHIFT_1 - SHIFT_2;

/// Number of index-1 entries for the BMP. (32)
/// This part of the index-1 table is omitted from the serialized form.
pub const OMITTED_BMP_INDEX_1_LENGTH: u32 = 0x10000 >> SHIFT_1;

/// Number of entries in an index-2 block. 64=0x40
pub const INDEX_2_BLOCK_LENGTH: u32 = 1 << SHIFT_1_2;

/// Mask for getting the lower bits for the in-index-2-block offset.
pub const INDEX_2_MASK: u32 = INDEX_2_BLOCK_LENGTH - 1;

/// Number of entries in a data block. 32=0x20
pub const DATA_BLOCK_LENGTH: u32 = 1 << SHIFT_2;

/// Mask for getting the lower bits for the in-data-block offset.
pub const DATA_MASK: u32 = DATA_BLOCK_LENGTH - 1;

/// Number of code points per index-1 table entry. 2048=0x800
pub const CP_PER_INDEX_1_ENTRY: u32 = 1 << SHIFT_1;

/// Shift by which supplementary data block start offsets are stored in the
/// index; the offsets are multiples of `1 << INDEX_SHIFT` so that they fit
/// into 16 bits even when the data array is longer than 0xFFFF.
pub const INDEX_SHIFT: u32 = 2;

/// The alignment (and length) granularity of the data array.
pub const DATA_GRANULARITY: u32 = 1 << INDEX_SHIFT;

/// The part of the index array reserved for BMP code points; a linear
/// table of unshifted data block start offsets.
pub const INDEX_2_BMP_LENGTH: u32 = 0x10000 >> SHIFT_2;

/// The start of the supplementary index-1 entries within the index array.
pub const INDEX_1_OFFSET: u32 = INDEX_2_BMP_LENGTH;

/// The alignment size of a data block. Also the granularity for
/// compaction. The ASCII block at the start of the data array has this
/// size and is indexed directly by code point.
pub const DATA_START_OFFSET: u32 = 0x80;

/// The serialized signature, "Tri3" in ASCII.
pub const SIGNATURE: u32 = 0x5472_6933;

/// The signature as read from an opposite-endian buffer.
pub const SIGNATURE_OE: u32 = 0x3369_7254;

/// Earlier format signatures, recognized for version dispatch only.
pub const SIGNATURE_V2: u32 = 0x5472_6932;
/// "Tri2" read from an opposite-endian buffer.
pub const SIGNATURE_V2_OE: u32 = 0x3269_7254;
/// "Trie", the version 1 signature.
pub const SIGNATURE_V1: u32 = 0x5472_6965;
/// "Trie" read from an opposite-endian buffer.
pub const SIGNATURE_V1_OE: u32 = 0x6569_7254;

/// Byte length of the serialized header, padded for 8-byte alignment.
pub const HEADER_LENGTH: usize = 32;

/// Low bits of the options word: the value-width code.
pub const OPTIONS_VALUE_BITS_MASK: u32 = 0xf;

/// Shift for extracting the data null block offset from the options word.
pub const OPTIONS_DATA_NULL_SHIFT: u32 = 12;

/// Option bits outside the value-width code and the data null block
/// offset; must be zero.
pub const OPTIONS_RESERVED_MASK: u32 = 0xf000_0ff0;

/// Sentinel for "no index-2 null block".
pub const NO_INDEX2_NULL_OFFSET: u16 = 0xffff;

/// Largest storable data null block offset; larger runtime values mean
/// "no data null block".
pub const NO_DATA_NULL_OFFSET: u32 = 0xffff;

/// The last Unicode code point.
pub const CODE_POINT_MAX: u32 = 0x10ffff;

/// Exclusive upper bound for `high_start`.
pub const HIGH_START_LIMIT: u32 = 0x11_0000;
