//! Keyword membership: the trie against the std `HashMap`, on a small
//! hand-picked keyword set and on a larger randomized one.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lexkit::KeywordTrie;

const KEYWORDS: [&str; 7] = ["debug", "with", "and", "for", "case", "to", "form"];
const PROBES: [(&str, bool); 7] = [
    ("cape", false),
    ("dooby", false),
    ("fudge", false),
    ("case", true),
    ("debug", true),
    ("for", true),
    ("form", true),
];

// ── Hand-rolled LCG, so the randomized set needs no external deps ──────────

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }

    /// Returns a value in [0, bound).
    fn next_range(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

/// Around 200 random lowercase words of length 1..=9; every fifth becomes a
/// keyword, the rest are probes that must miss.
fn random_words() -> Vec<(String, bool)> {
    let mut rng = Lcg(0x4242_4242);
    let mut seen = std::collections::BTreeSet::new();
    let mut words = Vec::new();
    for i in 0..200 {
        let word = loop {
            let len = rng.next_range(9) + 1;
            let word: String = (0..len)
                .map(|_| char::from(b'a' + rng.next_range(26) as u8))
                .collect();
            if seen.insert(word.clone()) {
                break word;
            }
        };
        words.push((word, i % 5 == 0));
    }
    words
}

fn bench_fixed_set(c: &mut Criterion) {
    let trie = KeywordTrie::<u16>::new(&KEYWORDS).unwrap();
    let map: HashMap<&str, usize> =
        KEYWORDS.iter().enumerate().map(|(i, &k)| (k, i)).collect();

    c.bench_function("keyword_trie/fixed/trie", |b| {
        b.iter(|| {
            for &(probe, hit) in &PROBES {
                assert_eq!(trie.get(black_box(probe)).is_some(), hit);
            }
        });
    });

    c.bench_function("keyword_trie/fixed/hashmap", |b| {
        b.iter(|| {
            for &(probe, hit) in &PROBES {
                assert_eq!(map.get(black_box(probe)).is_some(), hit);
            }
        });
    });
}

fn bench_random_set(c: &mut Criterion) {
    let words = random_words();
    let keywords: Vec<&str> = words
        .iter()
        .filter(|(_, kw)| *kw)
        .map(|(w, _)| w.as_str())
        .collect();

    let trie = KeywordTrie::<u16>::new(&keywords).unwrap();
    let map: HashMap<&str, usize> =
        keywords.iter().enumerate().map(|(i, &k)| (k, i)).collect();

    c.bench_function("keyword_trie/random/trie", |b| {
        b.iter(|| {
            for (word, kw) in &words {
                assert_eq!(trie.get(black_box(word)).is_some(), *kw);
            }
        });
    });

    c.bench_function("keyword_trie/random/hashmap", |b| {
        b.iter(|| {
            for (word, kw) in &words {
                assert_eq!(map.get(black_box(word.as_str())).is_some(), *kw);
            }
        });
    });
}

criterion_group!(benches, bench_fixed_set, bench_random_set);
criterion_main!(benches);
