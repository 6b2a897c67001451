//! A trie-based map from byte strings to indices.
//!
//! The intended use is mapping lexemes to indices into a list of keywords.
//! Keys are considered as sequences of bytes; if your keywords have multiple
//! possible encodings, add each encoding to the trie.
//!
//! For typical keyword sets, membership tests through a [`KeywordTrie`] are
//! noticeably faster than through a general-purpose hash map, because a
//! lookup is nothing but two array indexings per input byte.  See the
//! `keyword_trie` bench of the `lexkit` crate for the comparison.
//!
//! Internally the trie is backed by a single flat array of unsigned cells.
//! The default cell width of 16 bits suffices for keyword sets with up to a
//! few hundred members; `KeywordTrie<u32>` is available for larger sets,
//! although this module is not optimized for dealing with those.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Cells per trie node: 16 child indices (one per nibble value) plus the
/// terminal marker.
const NODE_CELLS: usize = 17;

/// Offset of the terminal-marker cell within a node.
const TERMINAL: usize = NODE_CELLS - 1;

mod private {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// An unsigned integer type usable as the cell of a trie's backing array.
///
/// Implemented for `u16` (the recommended default) and `u32`.  The cell
/// width bounds both the node count of a trie and the keyword indices it can
/// store, so it determines how large a keyword set can be represented.
pub trait TrieCell: Copy + Eq + fmt::Debug + private::Sealed {
    /// The zero cell, meaning "no child" / "no keyword ends here".
    const ZERO: Self;
    /// The largest node index or terminal marker a cell can hold.
    const MAX_INDEX: usize;

    /// Converts a node index or terminal marker into a cell.
    fn from_index(index: usize) -> Self;
    /// Converts a cell back into the index it holds.
    fn index(self) -> usize;
}

impl TrieCell for u16 {
    const ZERO: Self = 0;
    const MAX_INDEX: usize = u16::MAX as usize;

    #[inline]
    fn from_index(index: usize) -> Self {
        debug_assert!(index <= Self::MAX_INDEX);
        index as u16
    }

    #[inline]
    fn index(self) -> usize {
        usize::from(self)
    }
}

impl TrieCell for u32 {
    const ZERO: Self = 0;
    const MAX_INDEX: usize = u32::MAX as usize;

    #[inline]
    fn from_index(index: usize) -> Self {
        debug_assert!(index <= Self::MAX_INDEX);
        index as u32
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// The error returned when a keyword set does not fit the chosen cell width.
///
/// Construction of a trie fails only for this reason: either a new node's
/// index or a stored keyword index + 1 would not fit in a cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("keyword set too large for the trie's cell width")
    }
}

/// A set of byte-string keywords mapped to small integer indices.
///
/// Keywords are broken into sequences of 4-bit nibbles, high nibble before
/// low nibble, so each trie node has at most 16 children and a node can be a
/// flat run of 17 cells within one backing array:
///
/// * cells 0..=15: the indices of the child nodes for every possible next
///   nibble, or 0 where there is no child;
/// * cell 16: 0 if no keyword terminates at this node, or `1 + i` for the
///   index `i` of the keyword that does.
///
/// Node 1, at the start of the array after the dummy, is the root.  Because
/// the trie is a tree, the root cannot be the child of any node, so 0 is
/// free to mean "no child".  Node 0 is a dummy whose cells are all zero; a
/// lookup step that reads a zero child lands on it and keeps reading zeros,
/// which is what lets the lookup loop test for a miss only once per byte
/// (see [`KeywordTrie::get`]).
///
/// Construct with [`KeywordTrie::new`] (or [`KeywordTrie::empty`] plus
/// [`KeywordTrie::add`] when the index sequence has gaps); after that a trie
/// is read-only and freely shareable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeywordTrie<C: TrieCell = u16> {
    cells: Vec<C>,
}

impl<C: TrieCell> Default for KeywordTrie<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: TrieCell> KeywordTrie<C> {
    /// Constructs a trie from a list of keywords, mapping each keyword to its
    /// ordinal in the list.
    ///
    /// Fails with [`CapacityError`] if the set is too large for the cell
    /// width `C`; nothing of a partially built trie is kept.  The empty list
    /// produces the empty trie.
    pub fn new<K: AsRef<[u8]>>(keywords: &[K]) -> Result<Self, CapacityError> {
        let mut trie = Self::empty();
        for (index, keyword) in keywords.iter().enumerate() {
            trie.add(keyword, index)?;
        }
        Ok(trie)
    }

    /// Returns the trie containing no keywords.  Every lookup on it misses.
    pub fn empty() -> Self {
        // The dummy node and the root node, all cells zero.
        Self { cells: vec![C::ZERO; NODE_CELLS * 2] }
    }

    /// Adds one keyword to the trie, associating it with `index`.
    ///
    /// [`KeywordTrie::new`] is usually the better way to construct a trie;
    /// `add` is for when there are gaps in the sequence of indices.  The
    /// caller manages index disjointness.  On [`CapacityError`] the trie may
    /// have been partially extended and should be discarded.
    ///
    /// An empty keyword is accepted but stores nothing: no lookup can ever
    /// return it.
    pub fn add<K: AsRef<[u8]>>(&mut self, keyword: K, index: usize) -> Result<(), CapacityError> {
        if index + 1 > C::MAX_INDEX {
            return Err(CapacityError);
        }

        let keyword = keyword.as_ref();
        let nibbles = keyword.len() * 2;
        let mut node = 1;

        for i in 0..nibbles {
            // High nibble of each byte first.
            let nibble = usize::from((keyword[i / 2] >> (4 * ((i % 2) ^ 1))) & 0xF);
            let cell = node * NODE_CELLS + nibble;

            let child = self.cells[cell].index();
            if child == 0 {
                let fresh = self.cells.len() / NODE_CELLS;
                if fresh > C::MAX_INDEX {
                    return Err(CapacityError);
                }
                self.cells[cell] = C::from_index(fresh);
                self.cells.resize(self.cells.len() + NODE_CELLS, C::ZERO);
                node = fresh;
            } else {
                node = child;
            }

            if i == nibbles - 1 {
                self.cells[node * NODE_CELLS + TERMINAL] = C::from_index(index + 1);
            }
        }

        Ok(())
    }

    /// Returns the index associated with `key`, or `None` if the trie does
    /// not contain it.
    ///
    /// The high-nibble step does not test its cell for zero: a zero child
    /// routes to the dummy node, whose children are all zero, so the
    /// low-nibble step reads zero too and one test per byte covers both
    /// steps.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<usize> {
        let cells = &self.cells;
        let mut node = 1;

        for &byte in key.as_ref() {
            node = cells[node * NODE_CELLS + usize::from(byte >> 4)].index();
            node = cells[node * NODE_CELLS + usize::from(byte & 0xF)].index();
            if node == 0 {
                return None;
            }
        }

        cells[node * NODE_CELLS + TERMINAL].index().checked_sub(1)
    }

    /// Returns a copy of the trie's backing cells.
    ///
    /// The value has no defined interpretation; its one purpose is to be
    /// given back to [`KeywordTrie::from_backing_cells`].  This enables
    /// minimal-cost construction of a trie whose contents are known ahead of
    /// time: build the trie once in scratch code, copy the cells into the
    /// client program as a constant, and wrap that constant at startup.
    pub fn backing_cells(&self) -> Vec<C> {
        self.cells.clone()
    }

    /// Wraps backing cells previously obtained from
    /// [`KeywordTrie::backing_cells`] into a trie equivalent to the one they
    /// were extracted from.  No copy, no validation.
    pub fn from_backing_cells(cells: Vec<C>) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn nibble_order_is_high_first() {
        // 'a' is 0x61: the root's child for nibble 6 must exist, the one for
        // nibble 1 must not.
        let trie = KeywordTrie::<u16>::new(&["a"]).unwrap();
        let cells = trie.backing_cells();
        assert_ne!(cells[NODE_CELLS + 0x6].index(), 0);
        assert_eq!(cells[NODE_CELLS + 0x1].index(), 0);
    }

    #[test]
    fn empty_trie_is_two_nodes_of_zeros() {
        let trie = KeywordTrie::<u16>::empty();
        let cells = trie.backing_cells();
        assert_eq!(cells.len(), NODE_CELLS * 2);
        assert!(cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn cells_length_is_a_multiple_of_node_size() {
        let trie = KeywordTrie::<u16>::new(&["while", "when", "where"]).unwrap();
        assert_eq!(trie.backing_cells().len() % NODE_CELLS, 0);
    }

    #[test]
    fn add_with_gapped_indices() {
        let mut trie = KeywordTrie::<u16>::empty();
        trie.add("if", 3).unwrap();
        trie.add("else", 17).unwrap();
        assert_eq!(trie.get("if"), Some(3));
        assert_eq!(trie.get("else"), Some(17));
        assert_eq!(trie.get("el"), None);
    }

    #[test]
    fn prefix_of_a_keyword_is_not_a_member() {
        let trie = KeywordTrie::<u16>::new(&["format"]).unwrap();
        assert_eq!(trie.get("for"), None);
        assert_eq!(trie.get("format"), Some(0));
        assert_eq!(trie.get("formats"), None);
    }

    #[test]
    fn keyword_that_is_a_prefix_of_another() {
        let trie = KeywordTrie::<u16>::new(&["for", "format"]).unwrap();
        assert_eq!(trie.get("for"), Some(0));
        assert_eq!(trie.get("format"), Some(1));
        assert_eq!(trie.get("form"), None);
    }

    #[test]
    fn empty_keyword_stores_nothing() {
        let mut trie = KeywordTrie::<u16>::empty();
        trie.add("", 0).unwrap();
        assert_eq!(trie.get(""), None);
        assert_eq!(trie.backing_cells().len(), NODE_CELLS * 2);
    }

    #[test]
    fn index_too_large_for_cell_width() {
        let mut trie = KeywordTrie::<u16>::empty();
        assert_eq!(trie.add("x", usize::from(u16::MAX)), Err(CapacityError));
        // The largest storable index is MAX - 1, since the terminal cell
        // holds index + 1.
        let mut trie = KeywordTrie::<u16>::empty();
        trie.add("x", usize::from(u16::MAX) - 1).unwrap();
        assert_eq!(trie.get("x"), Some(usize::from(u16::MAX) - 1));
    }

    #[test]
    fn u32_cells_take_what_u16_cells_cannot() {
        let keywords: Vec<String> = (0..90_000).map(|i| format!("{}", i)).collect();
        assert_eq!(KeywordTrie::<u16>::new(&keywords).err(), Some(CapacityError));
    }

    #[test]
    fn non_ascii_bytes() {
        let trie = KeywordTrie::<u16>::new(&[&[0xFF_u8, 0x00][..], &[0x00, 0xFF][..]]).unwrap();
        assert_eq!(trie.get([0xFF_u8, 0x00]), Some(0));
        assert_eq!(trie.get([0x00_u8, 0xFF]), Some(1));
        assert_eq!(trie.get([0xFF_u8]), None);
        assert_eq!(trie.get([0x00_u8]), None);
    }
}
