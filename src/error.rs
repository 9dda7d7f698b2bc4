// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

//! Custom error type(s) for the parent module.

use displaydoc::Display;

/// A custom error type for [`CodePointTrie`](crate::CodePointTrie)
/// deserialization, serialization, and byte swapping.
#[derive(Copy, Clone, Display, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The byte buffer is not a well-formed serialized trie.
    #[displaydoc("not a well-formed serialized trie: {reason}")]
    InvalidFormat {
        /// Which validation rule the buffer violates.
        reason: &'static str,
    },
    /// A caller-supplied argument was rejected before any work was done.
    #[displaydoc("illegal argument: {reason}")]
    IllegalArgument {
        /// Which argument was rejected, and why.
        reason: &'static str,
    },
    /// The output buffer is smaller than the serialized form requires.
    /// The required size is reported so the caller can resize and retry.
    #[displaydoc("output buffer too small, {needed} bytes required")]
    BufferOverflow {
        /// Number of bytes the operation needs.
        needed: usize,
    },
    /// During byte swapping, a buffer is shorter than the structural size
    /// declared by the header.
    #[displaydoc("buffer shorter than the declared structure, {needed} bytes required")]
    IndexOutOfBounds {
        /// Number of bytes the declared structure occupies.
        needed: usize,
    },
}

impl core::error::Error for Error {}
