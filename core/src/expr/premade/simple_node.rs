//! A trivial parse tree type, useful for debugging and testing.

use alloc::boxed::Box;
use core::fmt;

use crate::expr::element::Element;
use crate::expr::kind::ExpressionKind;

/// A plain binary tree node holding its element, with no interpretation
/// attached.  The simplest possible [`TreeBuilder`] target: each parsed
/// operator becomes one of these with its operands as children.
///
/// The `Display` impl renders the tree on one line, delimiting operator
/// nodes with `⎡` and `⎦` and showing parenthesis nodes with their bracket
/// characters, which makes expected parse shapes easy to write in tests.
///
/// [`TreeBuilder`]: trait.TreeBuilder.html
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SimpleNode<E> {
    /// Left child, if the element took a left argument.
    pub left: Option<Box<SimpleNode<E>>>,
    /// Right child, if the element took a right argument (for a parenthesis
    /// node, the bracketed subtree).
    pub right: Option<Box<SimpleNode<E>>>,
    /// The element this node was made for.
    pub value: E,
}

const OPEN_BRACKETS: [char; 3] = ['(', '[', '{'];
const CLOSE_BRACKETS: [char; 3] = [')', ']', '}'];

impl<E> fmt::Display for SimpleNode<E>
where
    E: Element + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.expression_kind(true) == ExpressionKind::OPEN_PAREN {
            let family = self.value.paren_kind().rem_euclid(3) as usize;
            write!(f, "{}", OPEN_BRACKETS[family])?;
            if let Some(right) = &self.right {
                write!(f, "{}", right)?;
            }
            return write!(f, "{}", CLOSE_BRACKETS[family]);
        }
        match (&self.left, &self.right) {
            (None, None) => write!(f, "{}", self.value),
            (Some(left), Some(right)) => {
                write!(f, "⎡{} {} {}⎦", left, self.value, right)
            }
            (Some(left), None) => write!(f, "⎡{}{}⎦", left, self.value),
            (None, Some(right)) => write!(f, "⎡{}{}⎦", self.value, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::premade::StrElem;
    use alloc::string::ToString;

    fn leaf(s: &str) -> Option<Box<SimpleNode<StrElem>>> {
        Some(Box::new(SimpleNode { left: None, right: None, value: StrElem(s.into()) }))
    }

    #[test]
    fn rendering() {
        let plus = SimpleNode { left: leaf("1"), right: leaf("2"), value: StrElem("+".into()) };
        assert_eq!(plus.to_string(), "⎡1 + 2⎦");

        let postfix = SimpleNode { left: leaf("1"), right: None, value: StrElem("#".into()) };
        assert_eq!(postfix.to_string(), "⎡1#⎦");

        let prefix = SimpleNode { left: None, right: leaf("2"), value: StrElem("!".into()) };
        assert_eq!(prefix.to_string(), "⎡!2⎦");

        let paren = SimpleNode { left: None, right: leaf("9"), value: StrElem("[".into()) };
        assert_eq!(paren.to_string(), "[9]");

        let empty_paren = SimpleNode { left: None, right: None, value: StrElem("(".into()) };
        assert_eq!(empty_paren.to_string(), "()");
    }
}
