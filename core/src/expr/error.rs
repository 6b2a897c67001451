//! Errors that might be found by parsing.

use core::fmt;

/// The ways an element sequence can fail to be a well-formed expression.
///
/// None of these abort a parse: the parser recovers locally, records the
/// error, and keeps going.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ParseErrorKind {
    /// An operator was found in a position where it cannot be incorporated
    /// into a valid parse: a binary or postfix operator with nothing to its
    /// left, a prefix operator directly after a value (when juxtaposition is
    /// disabled), or an operator still missing its right operand when the
    /// input ended.
    UnexpectedOperator,
    /// A value was found directly after another value (when juxtaposition is
    /// disabled).
    UnexpectedValue,
    /// A closing parenthesis with no open parenthesis to close.
    UnexpectedClosingParen,
    /// An open parenthesis was closed by a parenthesis of a different kind,
    /// e.g. `(` closed by `]`.
    WrongKindOfClosingParen,
    /// The input ended with an open parenthesis still unclosed.
    MissingClosingParen,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::UnexpectedOperator => "ParseErrorUnexpectedOperator",
            ParseErrorKind::UnexpectedValue => "ParseErrorUnexpectedValue",
            ParseErrorKind::UnexpectedClosingParen => "ParseErrorUnexpectedClosingParen",
            ParseErrorKind::WrongKindOfClosingParen => "ParseErrorWrongKindOfClosingParen",
            ParseErrorKind::MissingClosingParen => "ParseErrorMissingClosingParen",
        };
        f.write_str(name)
    }
}

/// One parse error: what went wrong and the element it went wrong at.
///
/// The offending element is cloned out of the input, so errors outlive the
/// input sequence they were found in.  For
/// [`ParseErrorKind::MissingClosingParen`] the carried element is the final
/// element of the input, since no element of the input is the missing one.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ParseError<E> {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The element it went wrong at.
    pub elem: E,
}

/// Renders as `<kind>@<element>`.
impl<E: fmt::Display> fmt::Display for ParseError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.elem)
    }
}
