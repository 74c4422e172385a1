//! Benchmarks for navigation tree lookups.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pagemap_tree::{LocaleInfo, NavTree, RawEntry, RawNode};

/// Create a tree with specified depth and breadth.
fn create_tree(depth: usize, breadth: usize) -> NavTree {
    fn create_level(prefix: &str, current_depth: usize, max_depth: usize, breadth: usize) -> Vec<RawNode> {
        (0..breadth)
            .map(|i| {
                let route = format!("{prefix}/section-{i}");
                let node = RawNode::page(format!("section-{i}"), format!("Section {i}"), route.clone());
                if current_depth < max_depth {
                    node.with_children(create_level(&route, current_depth + 1, max_depth, breadth))
                } else {
                    node
                }
            })
            .collect()
    }

    let entries = create_level("", 1, depth, breadth)
        .into_iter()
        .map(RawEntry::Node)
        .collect();
    NavTree::build(LocaleInfo::new("en", "English"), entries).unwrap()
}

fn bench_find_by_route(c: &mut Criterion) {
    let tree = create_tree(3, 5);

    let mut group = c.benchmark_group("tree_lookup");

    group.bench_function("find_by_route_hit", |b| {
        b.iter(|| tree.find_by_route("/section-0/section-1/section-2"));
    });

    group.bench_function("find_by_route_miss", |b| {
        b.iter(|| tree.find_by_route("/nonexistent/path"));
    });

    group.finish();
}

fn bench_ancestor_chain(c: &mut Criterion) {
    let tree = create_tree(5, 3);

    let mut group = c.benchmark_group("ancestor_chain");

    for depth in [1, 3, 5] {
        let route: String = (0..depth).map(|_| "/section-0").collect();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &route, |b, route| {
            b.iter(|| tree.ancestor_chain(route));
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for (depth, breadth) in [(2, 5), (3, 5), (3, 7)] {
        let raw = create_tree(depth, breadth).to_raw();
        group.bench_with_input(
            BenchmarkId::new("build", format!("{depth}x{breadth}")),
            &raw,
            |b, raw| {
                b.iter(|| NavTree::build(LocaleInfo::new("en", "English"), raw.clone()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_by_route, bench_ancestor_chain, bench_build);
criterion_main!(benches);
