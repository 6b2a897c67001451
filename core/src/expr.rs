//! An operator-precedence expression parser over pre-classified elements.
//!
//! The input to [`parse`] is a flat sequence of *elements*: lexemes that the
//! client has already classified via the [`Element`] trait.  The parser
//! arranges them into a tree according to their kinds, precedences, and
//! associativities, calling back into the client's [`TreeBuilder`] to
//! construct the tree nodes, so the result is entirely of the client's own
//! type.  The parser is an incremental shunting variant that builds the tree
//! directly: each incoming operator is grafted into the right spine of the
//! tree under construction at the level its precedence demands.
//!
//! Malformed input never aborts a parse.  Every problem becomes a
//! [`ParseError`] in the returned list and an error node in the returned
//! tree, and parsing continues, so that the tree is as informative as the
//! input allows.
//!
//! Scratch storage comes from a [`NodePool`], which the caller keeps across
//! parses so that repeated parses do not allocate per node.  A pool must not
//! be shared between concurrent parses; use one pool per parsing thread.
//!
//! The [`premade`] module has a ready-made element and tree type that are
//! useful for debugging and for writing tests.

mod kind;
pub use kind::ExpressionKind;

mod element;
pub use element::{Element, TreeBuilder};

mod error;
pub use error::{ParseError, ParseErrorKind};

mod pool;
pub use pool::NodePool;

mod parse;
pub use parse::{parse, parse_stream, parse_stream_with_juxtaposition, parse_with_juxtaposition};

/// Implementations provided for ready use.
pub mod premade {
    mod simple_node;
    pub use simple_node::SimpleNode;

    mod str_elem;
    pub use str_elem::StrElem;
}
