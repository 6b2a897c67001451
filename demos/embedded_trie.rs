//! Demonstrates preparing a keyword trie for static embedding: build it
//! once, extract the backing cells, and re-wrap them into an equivalent
//! trie.  In a real client the printed cells would be pasted in as a
//! constant, making trie "construction" at startup a single wrap.
//!
//! Run with: `cargo run --example embedded_trie`

use lexkit::KeywordTrie;

const KEYWORDS: [&str; 7] = ["debu", "with", "and", "for", "case", "to", "form"];

fn main() {
    let trie = KeywordTrie::<u16>::new(&KEYWORDS).expect("keyword set fits u16 cells");

    let cells = trie.backing_cells();
    println!("// {} keywords -> {} cells:", KEYWORDS.len(), cells.len());
    println!("const KEYWORD_TRIE_CELLS: [u16; {}] = [", cells.len());
    for chunk in cells.chunks(17) {
        let row: Vec<String> = chunk.iter().map(|c| c.to_string()).collect();
        println!("    {},", row.join(", "));
    }
    println!("];");

    // What the client does at startup with the pasted constant.
    let embedded = KeywordTrie::from_backing_cells(cells);
    for (i, k) in KEYWORDS.iter().enumerate() {
        assert_eq!(embedded.get(k), Some(i));
        println!("{:>6} -> {:?}", k, embedded.get(k));
    }
    assert_eq!(embedded.get("deb"), None);
    assert_eq!(embedded.get("formx"), None);
}
