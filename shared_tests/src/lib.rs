//! Used by the tests of both the `lexkit_core` and `lexkit` crates.  It
//! provides test suites that can be run against every way of driving the
//! expression parser (slice or stream, core or std crate), so that the
//! suites are written once and instantiated per driver from each crate's
//! `tests/` directory.

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
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_qualifications,
    unused_results,
)]
#![allow(
    clippy::must_use_candidate, // excessively pedantic
    clippy::non_ascii_literal,
    clippy::enum_glob_use,
)]

use lexkit_core::expr::premade::{SimpleNode, StrElem};
use lexkit_core::expr::ParseError;

pub mod suites;

/// What a driver returns for one input: the tree root (or `None`) and the
/// error list.
pub type ParseOutcome = (Option<SimpleNode<StrElem>>, Vec<ParseError<StrElem>>);

/// One way of running the expression parser.  Each `tests/*.rs`
/// instantiation of the suites supplies its own: parsing a slice through
/// the core crate, parsing a stream, parsing through the std crate's
/// re-exports, and so on.  A driver owns whatever pool it parses through,
/// so a suite run also exercises pool reuse.
pub trait ParseDriver {
    /// Parses `elements`, with `jux` as the juxtaposition element if given.
    fn parse(&mut self, elements: Vec<StrElem>, jux: Option<StrElem>) -> ParseOutcome;
}

/// Whether a case runs with a juxtaposition element, without, or both ways.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum JuxMode {
    /// Run with juxtaposition only.
    With,
    /// Run without juxtaposition only.
    Without,
    /// Run both ways; the expectation must hold for both.
    Both,
}

/// Associativity of the juxtaposition element a case runs with.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum JuxAssoc {
    /// `/`, left-associative.
    Left,
    /// `/{`, right-associative.
    Right,
}

/// Runs one expression case against a driver: parses `input` under
/// `mode`/`assoc`, and checks the rendered tree and the error count.
///
/// # Panics
///
/// Panics (fails the test) when an outcome differs from the expectation.
pub fn check<D: ParseDriver>(
    driver: &mut D,
    mode: JuxMode,
    assoc: JuxAssoc,
    n_errors: usize,
    input: &str,
    expected: &str,
) {
    if mode == JuxMode::With || mode == JuxMode::Both {
        let jux = StrElem(
            match assoc {
                JuxAssoc::Left => "/",
                JuxAssoc::Right => "/{",
            }
            .to_string(),
        );
        let (root, errors) = driver.parse(StrElem::split(input), Some(jux));
        assert_eq!(
            errors.len(),
            n_errors,
            "error count (with jux) for input: {}\nerrors: {:?}",
            input,
            errors
        );
        assert_eq!(rendered(root), expected, "output (with jux) for input: {}", input);
    }
    if mode == JuxMode::Without || mode == JuxMode::Both {
        let (root, errors) = driver.parse(StrElem::split(input), None);
        assert_eq!(
            errors.len(),
            n_errors,
            "error count (without jux) for input: {}\nerrors: {:?}",
            input,
            errors
        );
        assert_eq!(rendered(root), expected, "output (without jux) for input: {}", input);
    }
}

fn rendered(root: Option<SimpleNode<StrElem>>) -> String {
    root.map(|n| n.to_string()).unwrap_or_default()
}
