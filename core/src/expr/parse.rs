//! The parse entry points and the parsing machinery behind them.

use alloc::vec::Vec;

use crate::expr::element::TreeBuilder;
use crate::expr::error::{ParseError, ParseErrorKind};
use crate::expr::kind::ExpressionKind;
use crate::expr::pool::{ElemRef, NodeId, NodePool, Slot};

/// Parses a slice of elements into a tree of the client's node type.
///
/// Returns the root node, or `None` if the input is empty, along with the
/// parse errors in left-to-right order of detection.  An empty error list
/// means the tree is exactly the one the elements' precedences and
/// associativities demand; a non-empty one means error nodes are woven into
/// the tree where recovery happened.
pub fn parse<E>(
    elements: &[E],
    pool: &mut NodePool<E::Node>,
) -> (Option<E::Node>, Vec<ParseError<E>>)
where
    E: TreeBuilder + Clone,
{
    parse_impl(elements, None, pool)
}

/// Like [`parse`], but with a juxtaposition operator element.
///
/// Wherever a value or prefix operator directly follows a completed value,
/// which [`parse`] reports as an error, this variant instead splices in
/// `jux` as an implicit binary operator, placed by its own kind and
/// precedence.  This is how languages in which `f x` is application get
/// parsed.
pub fn parse_with_juxtaposition<E>(
    elements: &[E],
    jux: &E,
    pool: &mut NodePool<E::Node>,
) -> (Option<E::Node>, Vec<ParseError<E>>)
where
    E: TreeBuilder + Clone,
{
    parse_impl(elements, Some(jux), pool)
}

/// Drains a one-shot element producer into a buffer and parses that.
pub fn parse_stream<I, E>(
    stream: I,
    pool: &mut NodePool<E::Node>,
) -> (Option<E::Node>, Vec<ParseError<E>>)
where
    I: IntoIterator<Item = E>,
    E: TreeBuilder + Clone,
{
    let elements: Vec<E> = stream.into_iter().collect();
    parse_impl(&elements, None, pool)
}

/// Like [`parse_stream`], but with a juxtaposition operator element.
pub fn parse_stream_with_juxtaposition<I, E>(
    stream: I,
    jux: &E,
    pool: &mut NodePool<E::Node>,
) -> (Option<E::Node>, Vec<ParseError<E>>)
where
    I: IntoIterator<Item = E>,
    E: TreeBuilder + Clone,
{
    let elements: Vec<E> = stream.into_iter().collect();
    parse_impl(&elements, Some(jux), pool)
}

fn parse_impl<E>(
    elements: &[E],
    jux: Option<&E>,
    pool: &mut NodePool<E::Node>,
) -> (Option<E::Node>, Vec<ParseError<E>>)
where
    E: TreeBuilder + Clone,
{
    // Shortcut for the very common case of a single value, e.g. one side of
    // a lexer driver's statement split.  No pool traffic at all.
    if elements.len() == 1 {
        let e = &elements[0];
        if e.expression_kind(false) == ExpressionKind::VALUE {
            return (Some(e.make_node(None, None)), Vec::new());
        }
    }

    pool.begin(elements.len());

    let mut parse = Parse {
        elements,
        jux,
        pool,
        errors: Vec::new(),
        root: None,
        hole: Some(Slot::Root),
        depth: 1,
    };
    parse.run();
    parse.finish();
    let root = parse.build();
    (root, parse.errors)
}

/// One parse in progress: the input, the growing shadow tree, and where the
/// next value subtree must go.
struct Parse<'i, 'p, E: TreeBuilder> {
    elements: &'i [E],
    jux: Option<&'i E>,
    pool: &'p mut NodePool<E::Node>,
    errors: Vec<ParseError<E>>,
    /// Root of the shadow tree; [`Slot::Root`] reads and writes this.
    root: Option<NodeId>,
    /// The insertion hole.  `Some` means the slot awaits a value subtree;
    /// `None` means the last completed position already holds one, so the
    /// next element must take a left argument (or close a paren).
    hole: Option<Slot>,
    /// Upper bound on the shadow tree's depth, maintained during
    /// construction so the post-order build pass can size its stack.
    depth: usize,
}

impl<'i, 'p, E> Parse<'i, 'p, E>
where
    E: TreeBuilder + Clone,
{
    fn elem(&self, r: ElemRef) -> &'i E {
        match r {
            ElemRef::Input(i) => &self.elements[i],
            // `ElemRef::Jux` is only ever created when a juxtaposition
            // element was supplied.
            ElemRef::Jux => self.jux.expect("juxtaposition element"),
        }
    }

    fn get(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::Root => self.root,
            Slot::Right(id) => self.pool.nodes[id].right,
        }
    }

    fn set(&mut self, slot: Slot, id: NodeId) {
        match slot {
            Slot::Root => self.root = Some(id),
            Slot::Right(parent) => self.pool.nodes[parent].right = Some(id),
        }
    }

    fn record(&mut self, kind: ParseErrorKind, at: usize) -> usize {
        self.errors.push(ParseError { kind, elem: self.elements[at].clone() });
        self.errors.len() - 1
    }

    fn innermost_scope(&self) -> Slot {
        self.pool.paren_slots[self.pool.paren_slots.len() - 1]
    }

    fn run(&mut self) {
        let elements = self.elements;
        for (i, e) in elements.iter().enumerate() {
            let ekind = e.expression_kind(self.hole.is_none());
            let scope = self.innermost_scope();

            if ekind.is_close_paren() {
                self.close_paren(ekind, i, scope);
            } else if ekind.has_left_arg() {
                // Postfix or binary operator, possibly also an opening
                // parenthetical like the `[` of `a[b]`.
                if let Some(hole) = self.hole.take() {
                    // No left value to take: recover with an error node in
                    // the hole, which the operator then takes as its left.
                    let err = self.record(ParseErrorKind::UnexpectedOperator, i);
                    let id = self.pool.alloc(ElemRef::Input(i));
                    self.pool.nodes[id].err = Some(err);
                    self.set(hole, id);
                    self.depth += 1;
                }

                let level = self.find_op_level(ElemRef::Input(i), scope);
                let id = self.pool.alloc(ElemRef::Input(i));
                self.pool.nodes[id].left = self.get(level);

                if ekind.has_right_arg() {
                    if ekind.is_paren() {
                        // A parenthetical opens a scope rooted at its right.
                        self.depth += 1;
                        self.pool.paren_slots.push(Slot::Right(id));
                        self.pool.paren_kinds.push(e.paren_kind());
                    }
                    self.hole = Some(Slot::Right(id));
                }

                self.set(level, id);
                self.depth += 1;
            } else if ekind.has_right_arg() {
                // Pure prefix operator.
                if self.hole.is_none() {
                    self.join_onto_value(ParseErrorKind::UnexpectedOperator, i, scope);
                    self.depth += 1;
                }

                let id = self.pool.alloc(ElemRef::Input(i));
                if let Some(hole) = self.hole {
                    self.set(hole, id);
                }
                self.hole = Some(Slot::Right(id));
                self.depth += 1;
            } else {
                // Value, including an opening paren, which is a value that
                // re-opens the hole inside itself.
                let id = self.pool.alloc(ElemRef::Input(i));

                if self.hole.is_none() {
                    self.join_onto_value(ParseErrorKind::UnexpectedValue, i, scope);
                    self.depth += 1;
                }
                if let Some(hole) = self.hole {
                    self.set(hole, id);
                }

                if ekind == ExpressionKind::OPEN_PAREN {
                    self.depth += 1;
                    self.pool.paren_slots.push(Slot::Right(id));
                    self.pool.paren_kinds.push(e.paren_kind());
                    self.hole = Some(Slot::Right(id));
                } else {
                    self.hole = None;
                }
            }
        }
    }

    fn close_paren(&mut self, ekind: ExpressionKind, i: usize, scope: Slot) {
        let scopes = self.pool.paren_slots.len();
        if scopes <= 1 {
            // Nothing open.  Wrap whatever we have in an error node.
            let err = self.record(ParseErrorKind::UnexpectedClosingParen, i);
            let id = self.pool.alloc(ElemRef::Input(i));
            self.pool.nodes[id].left = self.root;
            self.pool.nodes[id].err = Some(err);
            self.root = Some(id);
        } else if self.elements[i].paren_kind() != self.pool.paren_kinds[scopes - 2] {
            // Mismatched bracket family.  Wrap the scope's contents; the
            // scope stays open.
            let err = self.record(ParseErrorKind::WrongKindOfClosingParen, i);
            let id = self.pool.alloc(ElemRef::Input(i));
            self.pool.nodes[id].left = self.get(scope);
            self.pool.nodes[id].err = Some(err);
            self.set(scope, id);
        } else if ekind.is_close_all_paren() {
            self.pool.paren_slots.truncate(1);
            self.pool.paren_kinds.clear();
        } else {
            self.pool.paren_slots.truncate(scopes - 1);
            self.pool.paren_kinds.truncate(scopes - 2);
        }
    }

    /// A value or prefix operator arrived directly after a completed value.
    /// With a juxtaposition element configured, splice it in as an ordinary
    /// binary operator; without one, record `kind` and hang an error node
    /// off the scope's contents.  Either way the hole re-opens at the new
    /// node's right.
    fn join_onto_value(&mut self, kind: ParseErrorKind, i: usize, scope: Slot) {
        if self.jux.is_some() {
            let level = self.find_op_level(ElemRef::Jux, scope);
            let id = self.pool.alloc(ElemRef::Jux);
            self.pool.nodes[id].left = self.get(level);
            self.hole = Some(Slot::Right(id));
            self.set(level, id);
        } else {
            let err = self.record(kind, i);
            let id = self.pool.alloc(ElemRef::Input(i));
            self.pool.nodes[id].left = self.get(scope);
            self.pool.nodes[id].err = Some(err);
            self.hole = Some(Slot::Right(id));
            self.set(scope, id);
        }
    }

    /// Walks down the right spine of the current scope to the slot where an
    /// incoming operator of element `e` must be grafted.  Only called when a
    /// completed value sits to the left, so elements are classified with
    /// `has_expression_to_left = true` throughout.
    fn find_op_level(&mut self, e: ElemRef, scope: Slot) -> Slot {
        let kind_of = |p: &Self, r: ElemRef| p.elem(r).expression_kind(true);
        let prec_of = |p: &Self, r: ElemRef| p.elem(r).precedence(true);

        // For a left-associative operator, an equal-precedence operator on
        // the spine stops the descent, so equal operators chain as siblings
        // instead of nesting rightwards.
        let mut cmp = prec_of(self, e);
        if !kind_of(self, e).is_right_assoc() {
            cmp += 1;
        }

        let mut at = scope;
        loop {
            let id = match self.get(at) {
                Some(id) => id,
                None => return at,
            };
            if self.pool.nodes[id].err.is_some() {
                return at;
            }

            let nkind = kind_of(self, self.pool.nodes[id].elem);
            if !nkind.has_right_arg() {
                return at;
            }
            // Do not descend into a completed parenthetical like `a[b]`.
            // (An open paren never gets here: its kind has no right arg.)
            if nkind.is_paren() {
                return at;
            }
            if prec_of(self, self.pool.nodes[id].elem) < cmp {
                return at;
            }

            if let Some(bottom) = self.pool.nodes[id].bottom {
                // Jump over the memoized run and resume below it.
                at = Slot::Right(bottom);
            } else {
                let next = Slot::Right(id);
                if let Some(below) = self.get(next) {
                    // Entering a run of equal precedence: remember how deep
                    // it goes on the scope's entry node, so the next descent
                    // can skip it.
                    let here = prec_of(self, self.pool.nodes[id].elem);
                    if here == prec_of(self, self.pool.nodes[below].elem) {
                        if let Some(entry) = self.get(scope) {
                            self.pool.nodes[entry].bottom = Some(id);
                        }
                    }
                }
                at = next;
            }
        }
    }

    /// End-of-input reconciliation.
    fn finish(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        let last = self.elements.len() - 1;

        if let Some(hole) = self.hole.take() {
            // The final element was an operator still missing its right
            // operand.
            let err = self.record(ParseErrorKind::UnexpectedOperator, last);
            let id = self.pool.alloc(ElemRef::Input(last));
            self.pool.nodes[id].err = Some(err);
            self.set(hole, id);
        }

        if self.pool.paren_slots.len() > 1 {
            // Unclosed scopes.  One wrapper error suffices, and a scope that
            // already holds a wrong-kind error would make it redundant.
            let innermost = self.innermost_scope();
            let already_wrong = self
                .get(innermost)
                .and_then(|id| self.pool.nodes[id].err)
                .map_or(false, |e| {
                    self.errors[e].kind == ParseErrorKind::WrongKindOfClosingParen
                });
            if !already_wrong {
                let err = self.record(ParseErrorKind::MissingClosingParen, last);
                let id = self.pool.alloc(ElemRef::Input(last));
                self.pool.nodes[id].left = self.root;
                self.pool.nodes[id].err = Some(err);
                self.root = Some(id);
            }
        }
    }

    /// Materializes the client's tree from the shadow tree, post-order with
    /// an explicit stack sized by the depth bound.
    fn build(&mut self) -> Option<E::Node> {
        let root = self.root?;

        self.pool.stack.clear();
        self.pool.stack.reserve(self.depth);

        let mut current = root;
        loop {
            loop {
                let node = &self.pool.nodes[current];
                let pending_left = node
                    .left
                    .filter(|&l| self.pool.nodes[l].tree.is_none());
                let pending_right = node
                    .right
                    .filter(|&r| self.pool.nodes[r].tree.is_none());
                match pending_left.or(pending_right) {
                    Some(child) => {
                        self.pool.stack.push(current);
                        current = child;
                    }
                    None => break,
                }
            }

            let left = self.pool.nodes[current].left;
            let left = left.and_then(|l| self.pool.nodes[l].tree.take());
            let right = self.pool.nodes[current].right;
            let right = right.and_then(|r| self.pool.nodes[r].tree.take());

            let e = self.elem(self.pool.nodes[current].elem);
            let built = match self.pool.nodes[current].err {
                None => e.make_node(left, right),
                Some(err) => e.make_error_node(&self.errors[err], left, right),
            };
            self.pool.nodes[current].tree = Some(built);

            match self.pool.stack.pop() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        self.pool.nodes[root].tree.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::premade::{SimpleNode, StrElem};
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec;

    fn render(root: Option<SimpleNode<StrElem>>) -> alloc::string::String {
        root.map(|n| n.to_string()).unwrap_or_default()
    }

    #[test]
    fn empty_input() {
        let mut pool = NodePool::new(8);
        let (root, errors) = parse::<StrElem>(&[], &mut pool);
        assert!(root.is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn single_value_skips_the_pool() {
        let mut pool = NodePool::new(0);
        let elements = StrElem::split("42");
        let (root, errors) = parse(&elements, &mut pool);
        assert_eq!(render(root), "42");
        assert!(errors.is_empty());
        // The fast path must not have touched the arena.
        assert_eq!(format!("{:?}", pool), "NodePool { nodes: 0, in_use: 0, paren_depth: 0 }");
    }

    #[test]
    fn single_operator_is_not_a_value() {
        let mut pool = NodePool::new(8);
        let elements = StrElem::split("+");
        let (root, errors) = parse(&elements, &mut pool);
        assert!(root.is_some());
        // Missing left operand, then missing right operand.
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedOperator);
        assert_eq!(errors[1].kind, ParseErrorKind::UnexpectedOperator);
    }

    #[test]
    fn binary_chain() {
        let mut pool = NodePool::new(8);
        let elements = StrElem::split("1 + 2 + 3");
        let (root, errors) = parse(&elements, &mut pool);
        assert!(errors.is_empty());
        assert_eq!(render(root), "⎡⎡1 + 2⎦ + 3⎦");
    }

    #[test]
    fn pool_reuse_across_parses() {
        let mut pool = NodePool::new(4);
        for _ in 0..3 {
            let elements = StrElem::split("1 +{ 2 +{ 3");
            let (root, errors) = parse(&elements, &mut pool);
            assert!(errors.is_empty());
            assert_eq!(render(root), "⎡1 +{ ⎡2 +{ 3⎦⎦");

            let elements = StrElem::split("( 1 + 2");
            let (root, errors) = parse(&elements, &mut pool);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ParseErrorKind::MissingClosingParen);
            assert!(root.is_some());
        }
    }

    #[test]
    fn stream_matches_slice() {
        let mut pool = NodePool::new(8);
        let elements = StrElem::split("! 1 * ( 2 + 3 )");
        let (from_slice, slice_errors) = parse(&elements, &mut pool);
        let (from_stream, stream_errors) =
            parse_stream(StrElem::split("! 1 * ( 2 + 3 )"), &mut pool);
        assert_eq!(render(from_slice), render(from_stream));
        assert_eq!(slice_errors, stream_errors);
    }

    #[test]
    fn juxtaposition_splices_an_operator() {
        let mut pool = NodePool::new(8);
        let jux = StrElem("/".to_string());
        let elements = StrElem::split("1 2");
        let (root, errors) = parse_with_juxtaposition(&elements, &jux, &mut pool);
        assert!(errors.is_empty());
        assert_eq!(render(root), "⎡1 / 2⎦");
    }

    #[test]
    fn errors_carry_the_offending_element() {
        let mut pool = NodePool::new(8);
        let elements = StrElem::split("1 err");
        let (_, errors) = parse(&elements, &mut pool);
        assert_eq!(
            errors,
            vec![ParseError {
                kind: ParseErrorKind::UnexpectedValue,
                elem: StrElem("err".to_string()),
            }]
        );
    }
}
