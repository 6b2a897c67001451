use lexkit_shared_tests::suites;

#[test]
fn u16_cells() {
    suites::trie_suite::<u16>();
}

#[test]
fn u32_cells() {
    suites::trie_suite::<u32>();
}
