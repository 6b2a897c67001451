//! Parsing primitives for language implementers, layered on top of
//! [`lexkit_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`lexkit_core`]: the [`KeywordTrie`] keyword map and
//! the [`expr`] operator-precedence expression parser, with the premade
//! [`StrElem`]/[`SimpleNode`] element and tree types.
//!
//! * Provides the [`common`] module, with ready-made functions for common
//! basic uses that set pre-chosen types for the generic parameters, so that
//! experimenting and testing need no setup: feed them a string, get back a
//! rendered-able tree and an error list.
//!
//! Unlike [`lexkit_core`], this crate assumes `std`.  Applications that
//! define their own element and tree types, keep long-lived node pools, or
//! embed pre-computed tries need nothing from here beyond the re-exports and
//! can equally depend on the core crate directly.
//!
//! [`StrElem`]: expr/premade/struct.StrElem.html
//! [`SimpleNode`]: expr/premade/struct.SimpleNode.html

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
    clippy::missing_panics_doc,
    clippy::non_ascii_literal,
)]

#[doc(no_inline)]
pub use lexkit_core::*;

pub mod common;
