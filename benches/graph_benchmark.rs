use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knit::{Graph, IndexedGraph, VertexId};
use std::collections::VecDeque;

fn dependency_tree(size: usize) -> (Graph<usize, ()>, Vec<VertexId>) {
    let mut graph = Graph::with_capacity(size, size);
    let nodes: Vec<_> = (0..size).map(|i| graph.insert_vertex(i)).collect();
    // Every vertex depends on its parent in a binary tree.
    for i in 1..size {
        graph.insert_edge(nodes[i], nodes[(i - 1) / 2], ());
    }
    (graph, nodes)
}

fn bench_graph_build(c: &mut Criterion) {
    c.bench_function("graph_build_tree_1000", |b| {
        b.iter(|| black_box(dependency_tree(1000)));
    });

    c.bench_function("graph_erase_hub_vertex", |b| {
        b.iter(|| {
            let mut graph: Graph<usize, ()> = Graph::with_capacity(1000, 1000);
            let hub = graph.insert_vertex(0);
            for i in 1..1000 {
                let leaf = graph.insert_vertex(i);
                graph.insert_edge(leaf, hub, ());
            }
            black_box(graph.remove_vertex(hub))
        });
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let (graph, nodes) = dependency_tree(1000);

    c.bench_function("graph_bfs_in_edges", |b| {
        b.iter(|| {
            let mut seen = vec![false; 1000];
            let mut queue = VecDeque::new();
            queue.push_back(nodes[0]);
            seen[0] = true;
            let mut count = 0;
            while let Some(v) = queue.pop_front() {
                count += 1;
                for e in graph.in_edges(v) {
                    let child = e.source().id();
                    if !seen[child.index()] {
                        seen[child.index()] = true;
                        queue.push_back(child);
                    }
                }
            }
            black_box(count)
        });
    });

    c.bench_function("graph_out_degree_sum", |b| {
        b.iter(|| black_box(graph.vertices().map(|v| v.out_degree()).sum::<usize>()));
    });
}

fn name(value: &String) -> String {
    value.clone()
}

fn bench_indexed_graph(c: &mut Criterion) {
    c.bench_function("indexed_graph_insert_edges_by_key", |b| {
        b.iter(|| {
            let mut graph: IndexedGraph<String, (), String> = IndexedGraph::new(name);
            for i in 1..500 {
                graph.insert_edge_and_maybe_vertices(
                    format!("n{i}"),
                    format!("n{}", (i - 1) / 2),
                    (),
                );
            }
            black_box(graph.vertex_count())
        });
    });
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_graph_traversal,
    bench_indexed_graph
);
criterion_main!(benches);
