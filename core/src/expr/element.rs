//! The capability traits through which clients describe their input
//! elements and build their parse trees.

use crate::expr::error::ParseError;
use crate::expr::kind::ExpressionKind;

/// A classified input lexeme.
///
/// The two classifying methods receive a `has_expression_to_left` flag,
/// which is true when the parser has a completed value immediately to the
/// element's left.  This makes it possible to handle operators that are
/// prefix in one position and postfix or binary in another, such as `-` or
/// C's `++`.  Both methods must be pure: for a given element and flag value
/// they must always answer the same.
pub trait Element {
    /// The kind of the expression this element denotes.  Return one of the
    /// named [`ExpressionKind`] constants.
    fn expression_kind(&self, has_expression_to_left: bool) -> ExpressionKind;

    /// The operator's precedence relative to other operators.  Lower values
    /// bind tighter.
    fn precedence(&self, has_expression_to_left: bool) -> i32;

    /// Which family of brackets this element belongs to, e.g. 0 for `()`
    /// and 1 for `[]`, so that the parser can require opening and closing
    /// brackets to match.  Consulted only for elements whose kind has the
    /// paren flag set.
    fn paren_kind(&self) -> i32;
}

/// An [`Element`] that can also build the client's parse tree nodes.
///
/// The parser itself never inspects a built `Node`; it only hands nodes
/// back as the children of later nodes, in strict bottom-up order, and
/// finally returns the root.
pub trait TreeBuilder: Element + Sized {
    /// The client's parse tree node type.
    type Node;

    /// Makes the tree node for this element with the given children.
    ///
    /// Either or both of `left` and `right` may be `None` depending on the
    /// arity and the prefix/postfix nature of the operator; for a value both
    /// are `None`, and for an opening parenthesis the bracketed subtree
    /// arrives as `right`.
    fn make_node(&self, left: Option<Self::Node>, right: Option<Self::Node>) -> Self::Node;

    /// Makes a tree node representing a parse error, with the given
    /// children (either or both of which may be `None`).
    ///
    /// The parser calls this instead of [`TreeBuilder::make_node`] for the
    /// places in the tree where it had to recover from malformed input.
    fn make_error_node(
        &self,
        error: &ParseError<Self>,
        left: Option<Self::Node>,
        right: Option<Self::Node>,
    ) -> Self::Node;
}
