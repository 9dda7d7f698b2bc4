// This file is part of ICU4X. For terms of use, please see the file
// called LICENSE at the top level of the ICU4X source tree
// (online at: https://github.com/unicode-org/icu4x/blob/main/LICENSE ).

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codepointtrie::{CodePointTrie, CodePointTrieHeader, TrieData};
use zerovec::ZeroVec;

mod sample_str_lng {
    // "eng" is all ASCII
    pub const ENG: &str = "Universal Declaration of Human Rights";
    // "pcd" has ASCII mixed with low-BMP code points
    pub const PCD: &str = "Dèclaråcion dès dreûts d' l'ome po tos lès payîs dè monde";
    // "ukr" uses low-BMP code points (less than U+1000)
    pub const UKR: &str = "ЗАГАЛЬНА ДЕКЛАРАЦІЯ ПРАВ ЛЮДИНИ";
    // "yue" uses high-BMP code points (greater than U+1000)
    pub const YUE: &str = "世界人權宣言";
    // "ccp" exercises supplementary code points
    pub const CCP: &str = "𑄟𑄚𑄬𑄭𑄃𑄇𑄴𑄇𑄥𑄧𑄁𑄢𑄴 𑄝𑄬𑄇𑄴𑄅𑄚𑄮𑄢𑄴";
}

const SAMPLE_STRING_MIXED: &str = "Dèclaråcion ЗАГАЛЬНА 世界人權宣言 𑄟𑄚𑄬𑄭𑄃𑄇𑄴𑄇𑄥𑄧𑄁𑄢𑄴";

/// A function that returns 100 code points in the desired language
fn one_hundred_code_points(sample_str: &str) -> String {
    sample_str.chars().cycle().take(100).collect()
}

/// A trie that classifies code points by their block-of-32, sixteen
/// classes cycling through the BMP, with stored supplementary values up
/// to U+20000.
fn get_trie() -> CodePointTrie<'static> {
    let mut index = vec![0u16; 0x800];
    let mut data: Vec<u16> = Vec::new();
    // Sixteen distinct data blocks after the ASCII region.
    for block in 0..20u16 {
        data.extend(core::iter::repeat(block % 16).take(32));
    }
    for (i, entry) in index.iter_mut().enumerate() {
        *entry = if i < 4 {
            (i * 32) as u16
        } else {
            ((i % 16) * 32 + 0x80) as u16
        };
    }
    // One index-2 block reused by every index-1 entry.
    index.extend(core::iter::repeat(0x820u16).take(32));
    for i2 in 0..64u16 {
        index.push(((i2 % 16) * 32 + 0x80) >> 2);
    }
    let header = CodePointTrieHeader {
        high_start: 0x20000,
        index2_null_offset: 0xffff,
        data_null_offset: 0xffff,
        high_value: 0,
        error_value: 0xffff,
    };
    CodePointTrie::try_new(
        header,
        ZeroVec::alloc_from_slice(&index),
        TrieData::U16(ZeroVec::alloc_from_slice(&data)),
    )
    .unwrap()
}

fn overview_bench(c: &mut Criterion) {
    let s = one_hundred_code_points(SAMPLE_STRING_MIXED);
    let cpt = get_trie();

    c.bench_function("cpt/overview", |b| {
        b.iter(|| {
            black_box(&s)
                .chars()
                .map(|c| black_box(&cpt).get32(c as u32))
                .reduce(|a, b| a.wrapping_add(b))
        });
    });

    c.bench_function("cpt/get_range", |b| {
        b.iter(|| {
            black_box(&s)
                .chars()
                .map(|c| black_box(&cpt).get_range(c as u32).unwrap())
                .fold(0u32, |acc, ele| {
                    acc.wrapping_add(ele.range.end() - ele.range.start() + ele.value)
                })
        });
    });

    lang_bench(c, &cpt, "eng", sample_str_lng::ENG);
    lang_bench(c, &cpt, "pcd", sample_str_lng::PCD);
    lang_bench(c, &cpt, "ukr", sample_str_lng::UKR);
    lang_bench(c, &cpt, "yue", sample_str_lng::YUE);
    lang_bench(c, &cpt, "ccp", sample_str_lng::CCP);
}

fn lang_bench(c: &mut Criterion, cpt: &CodePointTrie, lid: &str, sample_str: &str) {
    let bench_name = format!("cpt/get/{lid}");
    let s = one_hundred_code_points(sample_str);

    c.bench_function(&bench_name, |b| {
        b.iter(|| {
            black_box(&s)
                .chars()
                .map(|c| black_box(&cpt).get32(c as u32))
                .reduce(|a, b| a.wrapping_add(b))
        });
    });
}

criterion_group!(benches, overview_bench,);
criterion_main!(benches);
