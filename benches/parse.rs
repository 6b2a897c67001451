//! Benchmarks for the expression parser's two published input families.
//!
//! Both families must scale linearly in input length.  The second one is the
//! reason the shadow nodes carry their `bottom` memoization: without it,
//! each of the tighter left-associative operators would descend the whole
//! right-associative chain node by node, going quadratic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lexkit::expr::premade::{SimpleNode, StrElem};
use lexkit::expr::{self, NodePool};

const SIZES: [usize; 5] = [0, 50, 100, 150, 200];

fn right_assoc_input(n_args: usize) -> Vec<StrElem> {
    let mut input = String::from("1");
    for _ in 0..n_args {
        input.push_str(" +{ 1");
    }
    StrElem::split(&input)
}

fn left_assoc_inside_right_assoc_input(n_args: usize) -> Vec<StrElem> {
    let mut input = String::from("1");
    for _ in 0..n_args {
        input.push_str(" +++{ 1");
    }
    for _ in 0..n_args {
        input.push_str(" **{ 1");
    }
    for _ in 0..n_args {
        input.push_str(" * 1");
    }
    StrElem::split(&input)
}

fn parse_clean(elements: &[StrElem], pool: &mut NodePool<SimpleNode<StrElem>>) {
    let (root, errors) = expr::parse(black_box(elements), pool);
    assert!(errors.is_empty());
    let _ = black_box(root);
}

fn bench_right_assoc(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/right_assoc");
    for n in SIZES {
        let elements = right_assoc_input(n);
        let mut pool = NodePool::new(64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &elements, |b, elements| {
            b.iter(|| parse_clean(elements, &mut pool));
        });
    }
    group.finish();
}

fn bench_left_assoc_inside_right_assoc(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/left_assoc_inside_right_assoc");
    for n in SIZES {
        let elements = left_assoc_inside_right_assoc_input(n);
        let mut pool = NodePool::new(64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &elements, |b, elements| {
            b.iter(|| parse_clean(elements, &mut pool));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_right_assoc, bench_left_assoc_inside_right_assoc);
criterion_main!(benches);
