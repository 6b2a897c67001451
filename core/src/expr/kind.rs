//! Classification of input elements.

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// The kind of an expression element: whether it is a value or an
    /// operator of a certain arity and associativity, and how it takes part
    /// in bracketing.
    ///
    /// A kind is a mask of the primitive flags below.  The recognised
    /// combinations have named constants; [`Element::expression_kind`]
    /// implementations should return those.
    ///
    /// [`Element::expression_kind`]: trait.Element.html#tymethod.expression_kind
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct ExpressionKind: u8 {
        /// The operator is right-associative.
        const RIGHT_ASSOC = 1;
        /// The element takes an argument to its left.
        const HAS_LEFT_ARG = 1 << 1;
        /// The element takes an argument to its right.
        const HAS_RIGHT_ARG = 1 << 2;
        /// The element takes part in bracketing.
        const PAREN = 1 << 3;
        /// The element closes a bracket scope.
        const CLOSE = 1 << 4;
        /// The element closes every open bracket scope.
        const CLOSE_ALL = 1 << 5;
    }
}

impl ExpressionKind {
    /// A plain value.
    pub const VALUE: Self = Self::empty();
    /// A prefix operator, e.g. unary `!`.
    pub const PREFIX: Self = Self::HAS_RIGHT_ARG;
    /// A postfix operator, e.g. `++` in C.
    pub const POSTFIX: Self = Self::HAS_LEFT_ARG;
    /// A left-associative binary operator.
    pub const BINARY_LEFT_ASSOC: Self = Self::HAS_LEFT_ARG.union(Self::HAS_RIGHT_ARG);
    /// A right-associative binary operator.
    pub const BINARY_RIGHT_ASSOC: Self = Self::BINARY_LEFT_ASSOC.union(Self::RIGHT_ASSOC);
    /// An opening parenthesis.
    pub const OPEN_PAREN: Self = Self::PAREN;
    /// A closing parenthesis.
    pub const CLOSE_PAREN: Self = Self::PAREN.union(Self::CLOSE);
    /// A closing parenthesis that closes all currently open parentheses.
    pub const CLOSE_ALL_PARENS: Self = Self::CLOSE_PAREN.union(Self::CLOSE_ALL);
    /// A parenthetical operator: a bracket that also binds a left argument,
    /// such as the `[` of C's indexing `a[b]`.
    pub const PARENTHETICAL: Self = Self::PAREN.union(Self::BINARY_LEFT_ASSOC);

    /// Whether the element takes an argument to its left.
    #[inline]
    pub fn has_left_arg(self) -> bool {
        self.contains(Self::HAS_LEFT_ARG)
    }

    /// Whether the element takes an argument to its right.
    #[inline]
    pub fn has_right_arg(self) -> bool {
        self.contains(Self::HAS_RIGHT_ARG)
    }

    /// Whether the operator is right-associative.
    #[inline]
    pub fn is_right_assoc(self) -> bool {
        self.contains(Self::RIGHT_ASSOC)
    }

    /// Whether the element takes part in bracketing.
    #[inline]
    pub fn is_paren(self) -> bool {
        self.contains(Self::PAREN)
    }

    /// Whether the element closes a bracket scope.
    #[inline]
    pub fn is_close_paren(self) -> bool {
        self.contains(Self::CLOSE)
    }

    /// Whether the element closes every open bracket scope.
    #[inline]
    pub fn is_close_all_paren(self) -> bool {
        self.contains(Self::CLOSE_ALL)
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if *self == Self::VALUE {
            "Value"
        } else if *self == Self::PREFIX {
            "Prefix"
        } else if *self == Self::POSTFIX {
            "Postfix"
        } else if *self == Self::BINARY_LEFT_ASSOC {
            "BinaryLeftAssoc"
        } else if *self == Self::BINARY_RIGHT_ASSOC {
            "BinaryRightAssoc"
        } else if *self == Self::OPEN_PAREN {
            "OpenParen"
        } else if *self == Self::CLOSE_PAREN {
            "CloseParen"
        } else if *self == Self::CLOSE_ALL_PARENS {
            "CloseAllParens"
        } else if *self == Self::PARENTHETICAL {
            "Parenthetical"
        } else {
            return write!(f, "ExpressionKind({:#04x})", self.bits());
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_combinations() {
        assert_eq!(ExpressionKind::VALUE, ExpressionKind::empty());
        assert_eq!(
            ExpressionKind::BINARY_LEFT_ASSOC,
            ExpressionKind::HAS_LEFT_ARG | ExpressionKind::HAS_RIGHT_ARG
        );
        assert_eq!(
            ExpressionKind::BINARY_RIGHT_ASSOC,
            ExpressionKind::BINARY_LEFT_ASSOC | ExpressionKind::RIGHT_ASSOC
        );
        assert_eq!(ExpressionKind::PREFIX, ExpressionKind::HAS_RIGHT_ARG);
        assert_eq!(ExpressionKind::POSTFIX, ExpressionKind::HAS_LEFT_ARG);
        assert_eq!(ExpressionKind::OPEN_PAREN, ExpressionKind::PAREN);
        assert_eq!(
            ExpressionKind::CLOSE_ALL_PARENS,
            ExpressionKind::PAREN | ExpressionKind::CLOSE | ExpressionKind::CLOSE_ALL
        );
        assert_eq!(
            ExpressionKind::PARENTHETICAL,
            ExpressionKind::PAREN | ExpressionKind::HAS_LEFT_ARG | ExpressionKind::HAS_RIGHT_ARG
        );
    }

    #[test]
    fn predicates() {
        assert!(ExpressionKind::PARENTHETICAL.has_left_arg());
        assert!(ExpressionKind::PARENTHETICAL.has_right_arg());
        assert!(ExpressionKind::PARENTHETICAL.is_paren());
        assert!(!ExpressionKind::PARENTHETICAL.is_close_paren());
        assert!(ExpressionKind::CLOSE_ALL_PARENS.is_close_paren());
        assert!(ExpressionKind::CLOSE_ALL_PARENS.is_close_all_paren());
        assert!(!ExpressionKind::CLOSE_PAREN.is_close_all_paren());
        assert!(ExpressionKind::BINARY_RIGHT_ASSOC.is_right_assoc());
        assert!(!ExpressionKind::BINARY_LEFT_ASSOC.is_right_assoc());
        assert!(!ExpressionKind::VALUE.has_left_arg());
        assert!(!ExpressionKind::VALUE.has_right_arg());
    }

    #[test]
    fn display_names() {
        use alloc::string::ToString;

        assert_eq!(ExpressionKind::VALUE.to_string(), "Value");
        assert_eq!(ExpressionKind::BINARY_RIGHT_ASSOC.to_string(), "BinaryRightAssoc");
        assert_eq!(ExpressionKind::PARENTHETICAL.to_string(), "Parenthetical");
    }
}
