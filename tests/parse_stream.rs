use lexkit::expr::premade::{SimpleNode, StrElem};
use lexkit::expr::{self, NodePool};

use lexkit_shared_tests::{suites, ParseDriver, ParseOutcome};

/// Drives the parser through the stream entry points, which drain a
/// one-shot producer before delegating, reusing one pool for the whole
/// suite.
struct StreamDriver {
    pool: NodePool<SimpleNode<StrElem>>,
}

impl ParseDriver for StreamDriver {
    fn parse(&mut self, elements: Vec<StrElem>, jux: Option<StrElem>) -> ParseOutcome {
        match jux {
            Some(jux) => {
                expr::parse_stream_with_juxtaposition(elements.into_iter(), &jux, &mut self.pool)
            }
            None => expr::parse_stream(elements.into_iter(), &mut self.pool),
        }
    }
}

#[test]
fn expression_suite() {
    let mut driver = StreamDriver { pool: NodePool::new(32) };
    suites::expression_suite(&mut driver);
}
