//! A toy element type classified by string shape, useful for writing tests.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::expr::element::{Element, TreeBuilder};
use crate::expr::error::ParseError;
use crate::expr::kind::ExpressionKind;
use crate::expr::premade::SimpleNode;

/// An element whose classification is derived from the spelling of its
/// string, so that test inputs can be written as plain text:
///
/// * `(` `[` `{` open and `)` `]` `}` close the three bracket families;
///   `)$` `]$` `}$` close every open bracket at once.
/// * A symbol bracketed on both ends, like `[[`, is a parenthetical
///   operator (it binds a left argument and opens a bracket scope).
/// * A trailing `{` makes a right-associative binary operator; a trailing
///   `'` is binary or prefix depending on context; a trailing `[` is
///   likewise context-dependent but right-associative as a binary.
/// * Otherwise the leading character decides: `:` `+` `-` `*` `/` `<` `>`
///   are left-associative binaries, `#` `$` postfixes, `!` `&` prefixes,
///   and anything else is a value.
/// * Precedence is the string's length, not counting a trailing `{` `[`
///   `'`.  Longer spellings bind looser.
///
/// The [`TreeBuilder`] impl builds [`SimpleNode`] trees; error nodes become
/// value nodes spelled `@error:<kind>@<element>`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StrElem(pub String);

impl StrElem {
    /// Splits `input` on single spaces into a sequence of elements.  The
    /// empty string splits into no elements.
    pub fn split(input: &str) -> Vec<StrElem> {
        if input.is_empty() {
            return Vec::new();
        }
        input.split(' ').map(|s| StrElem(String::from(s))).collect()
    }
}

impl fmt::Display for StrElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_bracket_byte(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'[' | b']' | b'{' | b'}')
}

/// Whether `s` is spelled like a bracket: a close-all spelling, or a
/// bracket character at the start and (if longer) at the end too.
fn is_paren_symbol(s: &str) -> bool {
    if let ")$" | "]$" | "}$" = s {
        return true;
    }
    let bytes = s.as_bytes();
    match bytes.first().copied() {
        Some(first) if is_bracket_byte(first) => {}
        _ => return false,
    }
    if bytes.len() > 1 && !is_bracket_byte(bytes[bytes.len() - 1]) {
        return false;
    }
    true
}

impl Element for StrElem {
    fn expression_kind(&self, has_expression_to_left: bool) -> ExpressionKind {
        match self.0.as_str() {
            "(" | "[" | "{" => return ExpressionKind::OPEN_PAREN,
            ")" | "]" | "}" => return ExpressionKind::CLOSE_PAREN,
            ")$" | "]$" | "}$" => return ExpressionKind::CLOSE_ALL_PARENS,
            _ => {}
        }
        if is_paren_symbol(&self.0) {
            return ExpressionKind::PARENTHETICAL;
        }

        let bytes = self.0.as_bytes();
        match bytes.last().copied() {
            Some(b'{') => ExpressionKind::BINARY_RIGHT_ASSOC,
            Some(b'\'') => {
                if has_expression_to_left {
                    ExpressionKind::BINARY_LEFT_ASSOC
                } else {
                    ExpressionKind::PREFIX
                }
            }
            Some(b'[') => {
                if has_expression_to_left {
                    ExpressionKind::BINARY_RIGHT_ASSOC
                } else {
                    ExpressionKind::PREFIX
                }
            }
            _ => match bytes.first().copied() {
                Some(b':' | b'+' | b'-' | b'*' | b'/' | b'<' | b'>') => {
                    ExpressionKind::BINARY_LEFT_ASSOC
                }
                Some(b'#' | b'$') => ExpressionKind::POSTFIX,
                Some(b'!' | b'&') => ExpressionKind::PREFIX,
                _ => ExpressionKind::VALUE,
            },
        }
    }

    fn precedence(&self, _has_expression_to_left: bool) -> i32 {
        let bytes = self.0.as_bytes();
        let len = match bytes.last().copied() {
            Some(b'{' | b'[' | b'\'') => bytes.len() - 1,
            _ => bytes.len(),
        };
        len as i32
    }

    fn paren_kind(&self) -> i32 {
        if is_paren_symbol(&self.0) {
            match self.0.as_bytes()[0] {
                b'(' | b')' => 0,
                b'[' | b']' => 1,
                _ => 2,
            }
        } else {
            -1
        }
    }
}

impl TreeBuilder for StrElem {
    type Node = SimpleNode<StrElem>;

    fn make_node(
        &self,
        left: Option<SimpleNode<StrElem>>,
        right: Option<SimpleNode<StrElem>>,
    ) -> SimpleNode<StrElem> {
        SimpleNode {
            left: left.map(Box::new),
            right: right.map(Box::new),
            value: self.clone(),
        }
    }

    fn make_error_node(
        &self,
        error: &ParseError<StrElem>,
        left: Option<SimpleNode<StrElem>>,
        right: Option<SimpleNode<StrElem>>,
    ) -> SimpleNode<StrElem> {
        SimpleNode {
            left: left.map(Box::new),
            right: right.map(Box::new),
            value: StrElem(format!("@error:{}", error)),
        }
    }
}
