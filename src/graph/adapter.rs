//! Descriptor-based free functions for generic graph-algorithm code.
//!
//! Algorithm libraries written against integer descriptors rather than typed
//! handles can drive a [`Graph`] through this module. A descriptor is the slot
//! index of a live record ([`VertexId::index`] / [`EdgeId::index`]);
//! [`NULL_VERTEX`] is never a live descriptor.
//!
//! Passing a descriptor that does not name a live record is a caller bug and
//! panics, like using a stale handle on the graph itself.

use super::handle::{EdgeId, VertexId};
use super::multigraph::Graph;

/// Descriptor meaning "no vertex".
pub const NULL_VERTEX: usize = usize::MAX;

/// The "no vertex" descriptor.
#[inline]
pub const fn null_vertex() -> usize {
    NULL_VERTEX
}

fn vertex_handle<V, E>(graph: &Graph<V, E>, vertex: usize) -> VertexId {
    match graph.vertex_id(vertex) {
        Some(id) => id,
        None => panic!("descriptor {vertex} is not a live vertex"),
    }
}

fn edge_handle<V, E>(graph: &Graph<V, E>, edge: usize) -> EdgeId {
    match graph.edge_id(edge) {
        Some(id) => id,
        None => panic!("descriptor {edge} is not a live edge"),
    }
}

/// Number of live vertices.
pub fn num_vertices<V, E>(graph: &Graph<V, E>) -> usize {
    graph.vertex_count()
}

/// Number of live edges.
pub fn num_edges<V, E>(graph: &Graph<V, E>) -> usize {
    graph.edge_count()
}

/// Descriptors of all vertices, in table order.
pub fn vertices<V, E>(graph: &Graph<V, E>) -> impl DoubleEndedIterator<Item = usize> + '_ {
    graph.vertices().map(|v| v.id().index())
}

/// Descriptors of all edges, in table order.
pub fn edges<V, E>(graph: &Graph<V, E>) -> impl DoubleEndedIterator<Item = usize> + '_ {
    graph.edges().map(|e| e.id().index())
}

/// Source descriptor of `edge`.
pub fn source<V, E>(graph: &Graph<V, E>, edge: usize) -> usize {
    graph.source(edge_handle(graph, edge)).index()
}

/// Target descriptor of `edge`.
pub fn target<V, E>(graph: &Graph<V, E>, edge: usize) -> usize {
    graph.target(edge_handle(graph, edge)).index()
}

/// Number of edges leaving `vertex`.
pub fn out_degree<V, E>(graph: &Graph<V, E>, vertex: usize) -> usize {
    graph.out_degree(vertex_handle(graph, vertex))
}

/// Number of edges entering `vertex`.
pub fn in_degree<V, E>(graph: &Graph<V, E>, vertex: usize) -> usize {
    graph.in_degree(vertex_handle(graph, vertex))
}

/// `in_degree + out_degree` of `vertex`.
pub fn degree<V, E>(graph: &Graph<V, E>, vertex: usize) -> usize {
    graph.degree(vertex_handle(graph, vertex))
}

/// Descriptors of the edges leaving `vertex`, in incidence order.
pub fn out_edges<V, E>(
    graph: &Graph<V, E>,
    vertex: usize,
) -> impl DoubleEndedIterator<Item = usize> + '_ {
    graph
        .out_edges(vertex_handle(graph, vertex))
        .map(|e| e.id().index())
}

/// Descriptors of the edges entering `vertex`, in incidence order.
pub fn in_edges<V, E>(
    graph: &Graph<V, E>,
    vertex: usize,
) -> impl DoubleEndedIterator<Item = usize> + '_ {
    graph
        .in_edges(vertex_handle(graph, vertex))
        .map(|e| e.id().index())
}

/// Adds a vertex with a default payload.
pub fn add_vertex<V: Default, E>(graph: &mut Graph<V, E>) -> usize {
    add_vertex_with(graph, V::default())
}

/// Adds a vertex with the given payload.
pub fn add_vertex_with<V, E>(graph: &mut Graph<V, E>, value: V) -> usize {
    graph.insert_vertex(value).index()
}

/// Removes `vertex` and every edge incident to it.
pub fn remove_vertex<V, E>(graph: &mut Graph<V, E>, vertex: usize) {
    let id = vertex_handle(graph, vertex);
    graph.remove_vertex(id);
}

/// Adds an edge with a default payload. Parallel edges are allowed, so the
/// flag is always `true`.
pub fn add_edge<V, E: Default>(
    graph: &mut Graph<V, E>,
    source: usize,
    target: usize,
) -> (usize, bool) {
    add_edge_with(graph, source, target, E::default())
}

/// Adds an edge with the given payload.
pub fn add_edge_with<V, E>(
    graph: &mut Graph<V, E>,
    source: usize,
    target: usize,
    value: E,
) -> (usize, bool) {
    let source = vertex_handle(graph, source);
    let target = vertex_handle(graph, target);
    (graph.insert_edge(source, target, value).index(), true)
}

/// Removes `edge`.
pub fn remove_edge<V, E>(graph: &mut Graph<V, E>, edge: usize) {
    let id = edge_handle(graph, edge);
    graph.remove_edge(id);
}

/// Removes every edge incident to `vertex`, keeping the vertex.
pub fn clear_vertex<V, E>(graph: &mut Graph<V, E>, vertex: usize) {
    let id = vertex_handle(graph, vertex);
    graph.clear_vertex_edges(id);
}

/// Removes every edge whose descriptor satisfies `pred`.
pub fn remove_edge_if<V, E>(graph: &mut Graph<V, E>, mut pred: impl FnMut(usize) -> bool) {
    let mut cursor = graph.first_edge();
    while let Some(edge) = cursor {
        cursor = if pred(edge.index()) {
            graph.erase_edge(edge)
        } else {
            graph.next_edge(edge)
        };
    }
}

/// Removes every edge leaving `vertex` whose descriptor satisfies `pred`.
pub fn remove_out_edge_if<V, E>(
    graph: &mut Graph<V, E>,
    vertex: usize,
    mut pred: impl FnMut(usize) -> bool,
) {
    let id = vertex_handle(graph, vertex);
    let mut cursor = graph.first_out_edge(id);
    while let Some(edge) = cursor {
        cursor = if pred(edge.index()) {
            graph.erase_out_edge(edge)
        } else {
            graph.next_out_edge(edge)
        };
    }
}

/// Removes every edge entering `vertex` whose descriptor satisfies `pred`.
pub fn remove_in_edge_if<V, E>(
    graph: &mut Graph<V, E>,
    vertex: usize,
    mut pred: impl FnMut(usize) -> bool,
) {
    let id = vertex_handle(graph, vertex);
    let mut cursor = graph.first_in_edge(id);
    while let Some(edge) = cursor {
        cursor = if pred(edge.index()) {
            graph.erase_in_edge(edge)
        } else {
            graph.next_in_edge(edge)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_round_trip() {
        let mut graph: Graph<u32, u32> = Graph::new();
        let a = add_vertex(&mut graph);
        let b = add_vertex_with(&mut graph, 7);
        let (ab, added) = add_edge(&mut graph, a, b);
        assert!(added);

        assert_eq!(num_vertices(&graph), 2);
        assert_eq!(num_edges(&graph), 1);
        assert_eq!(source(&graph, ab), a);
        assert_eq!(target(&graph, ab), b);
        assert_eq!(out_edges(&graph, a).collect::<Vec<_>>(), vec![ab]);
        assert_eq!(in_edges(&graph, b).collect::<Vec<_>>(), vec![ab]);
        assert_eq!(degree(&graph, b), 1);
        assert_ne!(a, null_vertex());
        assert_ne!(b, NULL_VERTEX);
    }

    #[test]
    fn test_remove_out_edge_if_keeps_order() {
        let mut graph: Graph<(), u32> = Graph::new();
        let hub = add_vertex(&mut graph);
        let leaf = add_vertex(&mut graph);
        let edges: Vec<usize> = (0..6)
            .map(|i| add_edge_with(&mut graph, hub, leaf, i).0)
            .collect();

        remove_out_edge_if(&mut graph, hub, |e| e % 2 == 0);
        let left: Vec<usize> = out_edges(&graph, hub).collect();
        assert_eq!(left, vec![edges[1], edges[3], edges[5]]);
        assert_eq!(in_degree(&graph, leaf), 3);

        remove_in_edge_if(&mut graph, leaf, |_| true);
        assert_eq!(out_degree(&graph, hub), 0);
    }

    #[test]
    #[should_panic(expected = "not a live vertex")]
    fn test_null_vertex_is_never_live() {
        let mut graph: Graph<(), ()> = Graph::new();
        add_vertex(&mut graph);
        out_degree(&graph, NULL_VERTEX);
    }
}
