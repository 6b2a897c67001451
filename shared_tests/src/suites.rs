//! Suites of tests applied across multiple crates and parse drivers.

use lexkit_core::trie::{CapacityError, KeywordTrie, TrieCell};

use crate::{check, JuxAssoc::*, JuxMode::*, ParseDriver};

/// The expression-parser suite: well-formed inputs whose tree shape is
/// forced by precedence and associativity, juxtaposition in both
/// associativities, and recovery from every kind of malformed input.
///
/// # Panics
///
/// Panics (fails the test) when the driver's outcome differs from an
/// expectation.
#[allow(clippy::too_many_lines)] // one suite, one table
pub fn expression_suite<D: ParseDriver>(d: &mut D) {
    // Basics
    check(d, Both, Left, 0, "", "");
    check(d, Both, Left, 0, "1", "1");
    check(d, Both, Left, 0, "1 + 2 + 3", "⎡⎡1 + 2⎦ + 3⎦");
    check(d, Both, Left, 0, "1 +{ 2 +{ 3", "⎡1 +{ ⎡2 +{ 3⎦⎦");
    check(d, Both, Left, 0, "+' 1 + 2", "⎡⎡+'1⎦ + 2⎦");
    check(d, Both, Left, 0, "++' 1 + 2", "⎡++'⎡1 + 2⎦⎦");

    // Juxtaposition
    check(d, With, Left, 0, "1 2", "⎡1 / 2⎦");
    check(d, With, Left, 0, "1 2 3 4 5 6 7", "⎡⎡⎡⎡⎡⎡1 / 2⎦ / 3⎦ / 4⎦ / 5⎦ / 6⎦ / 7⎦");
    check(d, With, Right, 0, "1 2 3 4 5 6 7", "⎡1 /{ ⎡2 /{ ⎡3 /{ ⎡4 /{ ⎡5 /{ ⎡6 /{ 7⎦⎦⎦⎦⎦⎦");
    check(d, With, Left, 0, "! 1 ! 2", "⎡⎡!1⎦ / ⎡!2⎦⎦");

    // Juxtaposition around prefix operators of differing precedence
    check(d, With, Left, 0, "!! 1 ! 2", "⎡!!⎡1 / ⎡!2⎦⎦⎦");
    check(d, With, Left, 0, "! 1 !! 2", "⎡⎡!1⎦ / ⎡!!2⎦⎦");
    check(d, With, Left, 0, "! 1 ! !! 2", "⎡⎡!1⎦ / ⎡!⎡!!2⎦⎦⎦");
    check(d, With, Left, 0, "! 1 ! ! 2", "⎡⎡!1⎦ / ⎡!⎡!2⎦⎦⎦");

    // The same transitions are errors when juxtaposition is disabled
    check(d, Without, Left, 1, "1 err", "⎡1 @error:ParseErrorUnexpectedValue@err err⎦");
    check(d, Without, Left, 1, "! 1 ! 2", "⎡⎡!1⎦ @error:ParseErrorUnexpectedOperator@! ⎡!2⎦⎦");
    check(d, Without, Left, 1, "!! 1 ! 2", "⎡⎡!!1⎦ @error:ParseErrorUnexpectedOperator@! ⎡!2⎦⎦");
    check(d, Without, Left, 1, "! 1 !! 2", "⎡⎡!1⎦ @error:ParseErrorUnexpectedOperator@!! ⎡!!2⎦⎦");
    check(d, Without, Left, 1, "! 1 ! !! 2", "⎡⎡!1⎦ @error:ParseErrorUnexpectedOperator@! ⎡!⎡!!2⎦⎦⎦");
    check(d, Without, Left, 1, "! 1 ! ! 2", "⎡⎡!1⎦ @error:ParseErrorUnexpectedOperator@! ⎡!⎡!2⎦⎦⎦");

    // Postfix operators
    check(d, Both, Left, 0, "1 #", "⎡1#⎦");
    check(d, Both, Left, 0, "1 + 2 #", "⎡⎡1 + 2⎦#⎦");
    check(d, Both, Left, 0, "1 ++ 2 #", "⎡1 ++ ⎡2#⎦⎦");

    // Complex expressions
    check(
        d, Both, Left, 0,
        "! 1 * ( 2 + 3 ) ++ 4 ::{ 9 ::{ 10 ::{ nil",
        "⎡⎡⎡!1⎦ * (⎡2 + 3⎦)⎦ ++ ⎡4 ::{ ⎡9 ::{ ⎡10 ::{ nil⎦⎦⎦⎦",
    );
    check(
        d, Both, Left, 0,
        "! 1 * ( 2 + 3 ) ++ ( ( ( 4 ::{ 9 ) ) ) ::{ 10 ::{ nil",
        "⎡⎡⎡!1⎦ * (⎡2 + 3⎦)⎦ ++ ⎡(((⎡4 ::{ 9⎦))) ::{ ⎡10 ::{ nil⎦⎦⎦",
    );
    check(d, Both, Left, 0, "1 +{ 2 ++{ 3 ++{ 4 ++{ 5", "⎡⎡1 +{ 2⎦ ++{ ⎡3 ++{ ⎡4 ++{ 5⎦⎦⎦");
    check(
        d, Both, Left, 0,
        "1 +{ 2 ++{ 3 ++{ 4 ++{ 5 +++{ 9",
        "⎡⎡⎡1 +{ 2⎦ ++{ ⎡3 ++{ ⎡4 ++{ 5⎦⎦⎦ +++{ 9⎦",
    );
    check(
        d, Both, Left, 0,
        "1 +{ 2 ++{ 3 --{ 4 **{ 5 +++{ 9",
        "⎡⎡⎡1 +{ 2⎦ ++{ ⎡3 --{ ⎡4 **{ 5⎦⎦⎦ +++{ 9⎦",
    );
    check(d, Both, Left, 0, "1 + 2 ++ 2 + 3", "⎡⎡1 + 2⎦ ++ ⎡2 + 3⎦⎦");
    check(d, Both, Left, 0, "1 ++[ 2 ++[ 3 ++[ 4 * 5", "⎡1 ++[ ⎡2 ++[ ⎡3 ++[ ⎡4 * 5⎦⎦⎦⎦");
    check(d, Both, Left, 0, "1 ++ 2 ++ 3 ++ 4 * 5", "⎡⎡⎡1 ++ 2⎦ ++ 3⎦ ++ ⎡4 * 5⎦⎦");
    check(d, Both, Left, 0, "1 ++ 2 -- 3 ++ 4 * 5", "⎡⎡⎡1 ++ 2⎦ -- 3⎦ ++ ⎡4 * 5⎦⎦");
    check(
        d, Both, Left, 0,
        "1 +++{ 2 +++{ 3 ++{ 4 ++{ 5 + 6 + 7 + 8",
        "⎡1 +++{ ⎡2 +++{ ⎡3 ++{ ⎡4 ++{ ⎡⎡⎡5 + 6⎦ + 7⎦ + 8⎦⎦⎦⎦⎦",
    );
    check(
        d, Both, Left, 1,
        "! 1 * ( 2 + 3 ) ++ * 4 ::{ 9 ::{ 10 ::{ nil",
        "⎡⎡⎡!1⎦ * (⎡2 + 3⎦)⎦ ++ ⎡⎡@error:ParseErrorUnexpectedOperator@* * 4⎦ ::{ ⎡9 ::{ ⎡10 ::{ nil⎦⎦⎦⎦",
    );

    // Parens
    check(d, Both, Left, 0, "( 1 + 2 )", "(⎡1 + 2⎦)");
    check(d, Both, Left, 0, "( [ 1 + 2 ] )", "([⎡1 + 2⎦])");
    check(d, Both, Left, 1, "( ( 1 + 2 )", "⎡((⎡1 + 2⎦))@error:ParseErrorMissingClosingParen@)⎦");
    check(d, Both, Left, 1, "( 1 + 2", "⎡(⎡1 + 2⎦)@error:ParseErrorMissingClosingParen@2⎦");
    check(d, Both, Left, 1, "( (1 + 2", "⎡(⎡(1 + 2⎦)@error:ParseErrorMissingClosingParen@2⎦");
    check(d, Both, Left, 1, "( 1 + 2 ]", "(⎡⎡1 + 2⎦@error:ParseErrorWrongKindOfClosingParen@]⎦)");

    // Close-all parens
    check(d, Both, Left, 0, "( ( 1 + 2 )$", "((⎡1 + 2⎦))");
    check(d, Both, Left, 0, "( [ 1 + 2 ]$", "([⎡1 + 2⎦])");
    check(d, Both, Left, 1, "1 )$", "⎡1@error:ParseErrorUnexpectedClosingParen@)$⎦");
    check(d, Both, Left, 1, "( [ 1 )$", "([⎡1@error:ParseErrorWrongKindOfClosingParen@)$⎦])");

    // Parenthetical operators
    check(d, Both, Left, 0, "1 [[ 2 + 3 ]", "⎡1 [[ ⎡2 + 3⎦⎦");
    check(d, Both, Left, 0, "1 [[ 2 + 3 ] [[ 4 + 5 ]", "⎡⎡1 [[ ⎡2 + 3⎦⎦ [[ ⎡4 + 5⎦⎦");
    check(d, Both, Left, 0, "1 [[ 2 + 3 ] [[ 4 ]", "⎡⎡1 [[ ⎡2 + 3⎦⎦ [[ 4⎦");
    check(d, Both, Left, 0, "1 +{ ( 2 + 3 ) +{ ( 4 )", "⎡1 +{ ⎡(⎡2 + 3⎦) +{ (4)⎦⎦");
    check(d, Both, Left, 0, "1 + 2 [[ 2 + 3 ]", "⎡⎡1 + 2⎦ [[ ⎡2 + 3⎦⎦");
    check(d, Both, Left, 0, "1 ++ 2 [[ 2 + 3 ]", "⎡1 ++ ⎡2 [[ ⎡2 + 3⎦⎦⎦");
    check(d, Both, Left, 0, "1 + 2 [[[ 2 + 3 ]", "⎡⎡1 + 2⎦ [[[ ⎡2 + 3⎦⎦");
    check(d, Both, Left, 0, "1 +++ 2 [[ 2 + 3 ]", "⎡1 +++ ⎡2 [[ ⎡2 + 3⎦⎦⎦");
    check(d, Both, Left, 0, "1 [[ 2 ] [[ 3 ]", "⎡⎡1 [[ 2⎦ [[ 3⎦");
    check(d, Both, Left, 0, "1 [[[ 2 + 3 ] + 4", "⎡⎡1 [[[ ⎡2 + 3⎦⎦ + 4⎦");
}

/// The keyword-trie suite for one cell width: membership, misses, both key
/// types, gapped indices, the empty trie, and the backing-cells round trip.
///
/// # Panics
///
/// Panics (fails the test) on any lookup that disagrees with the keyword
/// list.
pub fn trie_suite<C: TrieCell>() {
    let keywords = ["debu", "with", "and", "for", "case", "to", "form"];
    let trie = KeywordTrie::<C>::new(&keywords).expect("small keyword set must fit");

    for (i, k) in keywords.iter().enumerate() {
        assert_eq!(trie.get(k), Some(i), "keyword: {}", k);
    }

    // Byte-slice keys are the same keys.
    assert_eq!(trie.get(b"with" as &[u8]), Some(1));
    assert_eq!(trie.get("with".as_bytes()), Some(1));

    // Nothing else over the keyword alphabet is a member.  This sweeps every
    // string over 'a'..='z' of length at most four.
    let mut probe = Vec::new();
    sweep_absent(&trie, &keywords, &mut probe, 4);

    // Prefixes and extensions of keywords are not members.
    assert_eq!(trie.get("deb"), None);
    assert_eq!(trie.get("debut"), None);
    assert_eq!(trie.get(""), None);

    // The round trip through backing cells is indistinguishable.
    let reconstructed = KeywordTrie::<C>::from_backing_cells(trie.backing_cells());
    for (i, k) in keywords.iter().enumerate() {
        assert_eq!(reconstructed.get(k), Some(i));
    }
    assert_eq!(reconstructed.get("cases"), None);
    assert_eq!(reconstructed, trie);

    // Gapped indices via add.
    let mut gapped = KeywordTrie::<C>::empty();
    gapped.add("loop", 10).expect("fits");
    gapped.add("pool", 20).expect("fits");
    assert_eq!(gapped.get("loop"), Some(10));
    assert_eq!(gapped.get("pool"), Some(20));
    assert_eq!(gapped.get("lo"), None);

    // The empty trie misses everything, including every single byte.
    let empty = KeywordTrie::<C>::empty();
    assert_eq!(empty.get(""), None);
    for b in 0..=255_u8 {
        assert_eq!(empty.get([b]), None);
        assert_eq!(empty.get([b, b]), None);
    }
}

fn sweep_absent<C: TrieCell>(
    trie: &KeywordTrie<C>,
    keywords: &[&str],
    probe: &mut Vec<u8>,
    left: usize,
) {
    if !keywords.iter().any(|k| k.as_bytes() == &probe[..]) {
        assert_eq!(
            trie.get(&probe),
            None,
            "unexpected member: {}",
            String::from_utf8_lossy(probe)
        );
    }
    if left == 0 {
        return;
    }
    for b in b'a'..=b'z' {
        probe.push(b);
        sweep_absent(trie, keywords, probe, left - 1);
        let _ = probe.pop();
    }
}

/// Construction must fail, leaving the caller empty-handed, when the keyword
/// set outgrows the cell width; a wider cell takes the same set.
///
/// # Panics
///
/// Panics (fails the test) if either width misbehaves.
pub fn trie_overflow_suite() {
    let keywords: Vec<String> = (0..90_000).map(|i| i.to_string()).collect();

    assert_eq!(KeywordTrie::<u16>::new(&keywords).err(), Some(CapacityError));

    let wide = KeywordTrie::<u32>::new(&keywords).expect("u32 cells must take 90k keywords");
    assert_eq!(wide.get("0"), Some(0));
    assert_eq!(wide.get("45678"), Some(45_678));
    assert_eq!(wide.get("89999"), Some(89_999));
    assert_eq!(wide.get("90000"), None);
}
