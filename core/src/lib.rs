//! Core parsing primitives for language implementers.
//!
//! This crate provides the two small, reusable building blocks of the
//! `lexkit` family:
//!
//! * [`KeywordTrie`]: a compact nibble trie, backed by a single flat array of
//! unsigned cells, that maps short byte strings to small integer indices.  It
//! is intended for the keyword-membership tests in the hot loop of a lexer,
//! where it beats a general-purpose hash map for realistically sized keyword
//! sets.  A trie's backing cells can be extracted and re-wrapped, which
//! allows pre-computed tries to be embedded in client programs as static
//! data.
//!
//! * The [`expr`] module: an operator-precedence expression parser that turns
//! a flat sequence of already-classified input elements into a parse tree of
//! the client's own type.  The client describes its elements through the
//! [`Element`] and [`TreeBuilder`] traits; the parser handles prefix,
//! postfix, and binary operators of arbitrary precedence and associativity,
//! multiple kinds of brackets, parenthetical operators such as indexing
//! `a[b]`, and optional juxtaposition.  Parse errors never abort a parse:
//! they are recorded in an error list and woven into the returned tree so
//! that the result is maximally informative.
//!
//! The two primitives are independent.  A typical lexer driver uses a
//! `KeywordTrie` while classifying lexemes and then feeds the classified
//! elements to the expression parser, but nothing couples the two.
//!
//! This core crate is `no_std` (plus `alloc`) and so can be used in
//! constrained environments.  Scratch storage for parsing lives in a
//! [`NodePool`] that is reused across parses, so that repeated parses through
//! one pool do not allocate per node.

#![no_std]

#![forbid(unsafe_code)]

// Warn about desired lints that would otherwise be allowed by default.
#![warn(
    // Groups
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    unused,
    clippy::all,
    clippy::pedantic,
    // Individual lints not included in above groups and desired.
    macro_use_extern_crate,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    variant_size_differences,
)]
// Exclude (re-allow) undesired lints included in above groups.
#![allow(
    clippy::must_use_candidate, // excessively pedantic
    clippy::missing_errors_doc, // for now
    clippy::missing_panics_doc, // panics are internal invariants
    clippy::non_ascii_literal,
    clippy::cast_possible_truncation, // cell conversions are guarded
    clippy::cast_sign_loss,
)]

extern crate alloc;

pub mod trie;
pub use trie::{CapacityError, KeywordTrie, TrieCell};

pub mod expr;
pub use expr::{Element, ExpressionKind, NodePool, ParseError, ParseErrorKind, TreeBuilder};
