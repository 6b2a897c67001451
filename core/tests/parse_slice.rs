use lexkit_core::expr::premade::{SimpleNode, StrElem};
use lexkit_core::expr::{self, NodePool};

use lexkit_shared_tests::{suites, ParseDriver, ParseOutcome};

/// Drives the parser through the core crate's slice entry points directly,
/// reusing one pool for the whole suite.
struct CoreSliceDriver {
    pool: NodePool<SimpleNode<StrElem>>,
}

impl ParseDriver for CoreSliceDriver {
    fn parse(&mut self, elements: Vec<StrElem>, jux: Option<StrElem>) -> ParseOutcome {
        match jux {
            Some(jux) => expr::parse_with_juxtaposition(&elements, &jux, &mut self.pool),
            None => expr::parse(&elements, &mut self.pool),
        }
    }
}

#[test]
fn expression_suite() {
    let mut driver = CoreSliceDriver { pool: NodePool::new(32) };
    suites::expression_suite(&mut driver);
}
