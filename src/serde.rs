// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use crate::cptrie::{CodePointTrie, CodePointTrieHeader, TrieData};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use zerofrom::ZeroFrom;
use zerovec::ZeroVec;

#[derive(Serialize, Deserialize)]
enum TrieDataSerde<'trie> {
    U16(#[serde(borrow)] ZeroVec<'trie, u16>),
    U32(#[serde(borrow)] ZeroVec<'trie, u32>),
}

#[derive(Serialize, Deserialize)]
struct CodePointTrieSerde<'trie> {
    header: CodePointTrieHeader,
    #[serde(borrow)]
    index: ZeroVec<'trie, u16>,
    #[serde(borrow)]
    data: TrieDataSerde<'trie>,
}

impl Serialize for CodePointTrie<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ser = CodePointTrieSerde {
            header: self.header,
            index: ZeroFrom::zero_from(&self.index),
            data: match &self.data {
                TrieData::U16(data) => TrieDataSerde::U16(ZeroFrom::zero_from(data)),
                TrieData::U32(data) => TrieDataSerde::U32(ZeroFrom::zero_from(data)),
            },
        };
        ser.serialize(serializer)
    }
}

impl<'de, 'trie> Deserialize<'de> for CodePointTrie<'trie>
where
    'de: 'trie,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let de = CodePointTrieSerde::deserialize(deserializer)?;
        let data = match de.data {
            TrieDataSerde::U16(data) => TrieData::U16(data),
            TrieDataSerde::U32(data) => TrieData::U32(data),
        };
        // Revalidates the shape and rederives the initial value.
        CodePointTrie::try_new(de.header, de.index, data).map_err(D::Error::custom)
    }
}
