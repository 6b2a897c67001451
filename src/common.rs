//! Ready-made parsing functions for common basic uses.
//!
//! These choose the premade [`StrElem`] element type and [`SimpleNode`]
//! trees, split their input on spaces, and keep no pool between calls.
//! They are intended for experimentation, debugging, and tests; a lexer
//! driver with its own element type uses the [`expr`] entry points
//! directly.
//!
//! [`StrElem`]: ../expr/premade/struct.StrElem.html
//! [`SimpleNode`]: ../expr/premade/struct.SimpleNode.html
//! [`expr`]: ../expr/index.html

use crate::expr::premade::{SimpleNode, StrElem};
use crate::expr::{self, NodePool, ParseError};

/// The result of parsing one input string: the root of the parse tree (or
/// `None` for empty input) and the errors found along the way.
pub type StrParse = (Option<SimpleNode<StrElem>>, Vec<ParseError<StrElem>>);

/// Parses a space-separated expression using the [`StrElem`] spelling
/// conventions.
///
/// Precedence is spelling length, so `*` binds tighter than `++` here:
///
/// ```
/// let (root, errors) = lexkit::common::parse_str("1 ++ 2 * 3");
/// assert!(errors.is_empty());
/// assert_eq!(root.unwrap().to_string(), "⎡1 ++ ⎡2 * 3⎦⎦");
/// ```
///
/// [`StrElem`]: ../expr/premade/struct.StrElem.html
pub fn parse_str(input: &str) -> StrParse {
    let elements = StrElem::split(input);
    let mut pool = NodePool::new(elements.len() * 2 + 1);
    expr::parse(&elements, &mut pool)
}

/// Like [`parse_str`], with `jux` (in the same spelling conventions) as the
/// juxtaposition operator spliced between adjacent values.
///
/// ```
/// let (root, errors) = lexkit::common::parse_str_with("f x y", "/");
/// assert!(errors.is_empty());
/// assert_eq!(root.unwrap().to_string(), "⎡⎡f / x⎦ / y⎦");
/// ```
pub fn parse_str_with(input: &str, jux: &str) -> StrParse {
    let elements = StrElem::split(input);
    let mut pool = NodePool::new(elements.len() * 2 + 1);
    expr::parse_with_juxtaposition(&elements, &StrElem(jux.to_string()), &mut pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(parse: StrParse) -> (String, usize) {
        let (root, errors) = parse;
        (root.map(|n| n.to_string()).unwrap_or_default(), errors.len())
    }

    #[test]
    fn parse_str_basics() {
        assert_eq!(rendered(parse_str("")), (String::new(), 0));
        assert_eq!(rendered(parse_str("1")), ("1".to_string(), 0));
        assert_eq!(rendered(parse_str("1 + 2 + 3")), ("⎡⎡1 + 2⎦ + 3⎦".to_string(), 0));
        assert_eq!(rendered(parse_str("( 1 + 2 )")), ("(⎡1 + 2⎦)".to_string(), 0));
    }

    #[test]
    fn parse_str_reports_errors() {
        let (_, errors) = parse_str("1 2");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn parse_str_with_joins_values() {
        assert_eq!(rendered(parse_str_with("1 2", "/")), ("⎡1 / 2⎦".to_string(), 0));
        assert_eq!(
            rendered(parse_str_with("1 2 3", "/{")),
            ("⎡1 /{ ⎡2 /{ 3⎦⎦".to_string(), 0)
        );
    }
}
