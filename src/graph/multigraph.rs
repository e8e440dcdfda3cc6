//! `Graph` - a directed multigraph over two slot tables.
//!
//! Vertices and edges each live in their own [`SlotTable`]. An edge record
//! embeds the links that thread it into its source's outgoing list and its
//! target's incoming list (see [`incidence`](super::incidence)), so one edge
//! costs one slot and no per-direction allocation.
//!
//! # Performance
//! - `insert_vertex`, `insert_edge`: O(1) amortized
//! - `erase_edge`: O(1)
//! - `erase_vertex`: O(degree)
//! - `clear_edges`: O(E); `clear_out_edges` / `clear_in_edges`: O(degree)
//! - degree and count queries: O(1)
//!
//! Handles are checked on every access. Using a handle whose record has been
//! erased, or one issued by another graph, is a caller bug and panics rather
//! than corrupting the incidence lists.

use super::handle::{EdgeId, EdgeRef, VertexId, VertexRef};
use super::incidence::{Link, LinkArena, Node, Phase};
use super::iter::{Edges, IncidentEdges, Vertices};
use crate::collections::SlotTable;
use core::fmt;

#[derive(Clone)]
pub(super) struct VertexRecord<V> {
    pub(super) value: V,
    /// Sentinel heads, indexed by [`Phase::slot`].
    heads: [Link; 2],
    /// Out- and in-degree, indexed by [`Phase::slot`].
    degree: [usize; 2],
}

impl<V> VertexRecord<V> {
    fn new(value: V, index: usize) -> Self {
        Self {
            value,
            heads: [Link::singleton(Node::Head(index)); 2],
            degree: [0; 2],
        }
    }
}

#[derive(Clone)]
pub(super) struct EdgeRecord<E> {
    pub(super) value: E,
    pub(super) source: VertexId,
    pub(super) target: VertexId,
    links: [Link; 2],
}

impl<E> EdgeRecord<E> {
    fn new(value: E, source: VertexId, target: VertexId, index: usize) -> Self {
        Self {
            value,
            source,
            target,
            links: [Link::singleton(Node::Edge(index)); 2],
        }
    }
}

/// A directed multigraph with vertex payloads `V` and edge payloads `E`.
///
/// Parallel edges and self-loops are allowed.
///
/// # Example
///
/// ```rust
/// use knit::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.insert_vertex("a");
/// let b = graph.insert_vertex("b");
/// let ab = graph.insert_edge(a, b, 1);
///
/// assert_eq!(graph.out_degree(a), 1);
/// assert_eq!(graph.in_edges(b).next().map(|e| e.id()), Some(ab));
///
/// graph.erase_vertex(a);
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Clone)]
pub struct Graph<V, E> {
    pub(super) vertices: SlotTable<VertexRecord<V>>,
    pub(super) edges: SlotTable<EdgeRecord<E>>,
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: SlotTable::new(),
            edges: SlotTable::new(),
        }
    }

    /// Creates an empty graph with room for the given number of records.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: SlotTable::with_capacity(vertices),
            edges: SlotTable::with_capacity(edges),
        }
    }

    // ==================== Counts ====================

    /// Number of live vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the graph has no vertices (and therefore no edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertex slots allocated so far, live or recycled.
    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.vertices.capacity()
    }

    /// Number of edge slots allocated so far, live or recycled.
    #[inline]
    pub fn edge_capacity(&self) -> usize {
        self.edges.capacity()
    }

    // ==================== Vertices ====================

    /// Adds a vertex with no incident edges.
    pub fn insert_vertex(&mut self, value: V) -> VertexId {
        let index = self.vertices.next_index();
        let slot = self.vertices.insert(VertexRecord::new(value, index));
        debug_assert_eq!(slot.index(), index);
        VertexId(slot)
    }

    /// Erases a vertex and every edge incident to it.
    ///
    /// Returns the next vertex in table order, so a loop over
    /// [`first_vertex`](Self::first_vertex) can erase as it goes.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn erase_vertex(&mut self, vertex: VertexId) -> Option<VertexId> {
        let next = self.next_vertex(vertex);
        self.remove_vertex(vertex);
        next
    }

    /// Erases a vertex and every edge incident to it, returning its payload.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> V {
        self.check_vertex(vertex);
        let index = vertex.index();
        let cascaded =
            self.clear_list(index, Phase::Out) + self.clear_list(index, Phase::In);
        tracing::trace!(vertex = index, cascaded, "erasing vertex");

        match self.vertices.remove(vertex.0) {
            Some(record) => record.value,
            None => panic!("{vertex} vanished while its edges were erased"),
        }
    }

    /// `true` if `vertex` names a live vertex.
    #[inline]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(vertex.0)
    }

    /// The payload of `vertex`, or `None` if it is not live.
    #[inline]
    pub fn get_vertex(&self, vertex: VertexId) -> Option<&V> {
        self.vertices.get(vertex.0).map(|record| &record.value)
    }

    /// Mutable payload of `vertex`, or `None` if it is not live.
    #[inline]
    pub fn get_vertex_mut(&mut self, vertex: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(vertex.0).map(|record| &mut record.value)
    }

    /// The payload of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn vertex(&self, vertex: VertexId) -> &V {
        &self.vertex_record(vertex).value
    }

    /// Mutable payload of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn vertex_mut(&mut self, vertex: VertexId) -> &mut V {
        match self.vertices.get_mut(vertex.0) {
            Some(record) => &mut record.value,
            None => panic!("{vertex} is not live in this graph"),
        }
    }

    /// A [`VertexRef`] for `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn vertex_ref(&self, vertex: VertexId) -> VertexRef<'_, V, E> {
        self.check_vertex(vertex);
        VertexRef::new(self, vertex)
    }

    /// Recovers the id of the live vertex at `index`.
    #[inline]
    pub fn vertex_id(&self, index: usize) -> Option<VertexId> {
        self.vertices.find(index).map(VertexId)
    }

    /// Number of edges leaving `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.vertex_record(vertex).degree[Phase::Out.slot()]
    }

    /// Number of edges entering `vertex`.
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.vertex_record(vertex).degree[Phase::In.slot()]
    }

    /// Number of incident edges in both directions; a self-loop counts twice.
    pub fn degree(&self, vertex: VertexId) -> usize {
        let [out, inc] = self.vertex_record(vertex).degree;
        out + inc
    }

    // ==================== Edges ====================

    /// Adds an edge from `source` to `target`, appended last to the source's
    /// outgoing list and to the target's incoming list.
    ///
    /// # Panics
    /// Panics if either endpoint is not live in this graph.
    pub fn insert_edge(&mut self, source: VertexId, target: VertexId, value: E) -> EdgeId {
        self.check_vertex(source);
        self.check_vertex(target);

        let index = self.edges.next_index();
        let slot = self
            .edges
            .insert(EdgeRecord::new(value, source, target, index));
        debug_assert_eq!(slot.index(), index);

        let node = Node::Edge(index);
        self.insert_before(node, Node::Head(source.index()), Phase::Out);
        self.insert_before(node, Node::Head(target.index()), Phase::In);
        self.vertex_at_mut(source.index()).degree[Phase::Out.slot()] += 1;
        self.vertex_at_mut(target.index()).degree[Phase::In.slot()] += 1;

        EdgeId(slot)
    }

    /// Erases an edge, returning the next edge in table order.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn erase_edge(&mut self, edge: EdgeId) -> Option<EdgeId> {
        let next = self.next_edge(edge);
        self.remove_edge(edge);
        next
    }

    /// Erases an edge, returning the next edge in its source's outgoing list.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn erase_out_edge(&mut self, edge: EdgeId) -> Option<EdgeId> {
        let next = self.next_out_edge(edge);
        self.remove_edge(edge);
        next
    }

    /// Erases an edge, returning the next edge in its target's incoming list.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn erase_in_edge(&mut self, edge: EdgeId) -> Option<EdgeId> {
        let next = self.next_in_edge(edge);
        self.remove_edge(edge);
        next
    }

    /// Erases an edge, returning its payload.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn remove_edge(&mut self, edge: EdgeId) -> E {
        self.check_edge(edge);
        self.detach_edge(edge.index())
    }

    /// `true` if `edge` names a live edge.
    #[inline]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(edge.0)
    }

    /// The payload of `edge`, or `None` if it is not live.
    #[inline]
    pub fn get_edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.0).map(|record| &record.value)
    }

    /// Mutable payload of `edge`, or `None` if it is not live.
    #[inline]
    pub fn get_edge_mut(&mut self, edge: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(edge.0).map(|record| &mut record.value)
    }

    /// The payload of `edge`.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn edge(&self, edge: EdgeId) -> &E {
        &self.edge_record(edge).value
    }

    /// Mutable payload of `edge`.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn edge_mut(&mut self, edge: EdgeId) -> &mut E {
        match self.edges.get_mut(edge.0) {
            Some(record) => &mut record.value,
            None => panic!("{edge} is not live in this graph"),
        }
    }

    /// An [`EdgeRef`] for `edge`.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn edge_ref(&self, edge: EdgeId) -> EdgeRef<'_, V, E> {
        self.check_edge(edge);
        EdgeRef::new(self, edge)
    }

    /// Recovers the id of the live edge at `index`.
    #[inline]
    pub fn edge_id(&self, index: usize) -> Option<EdgeId> {
        self.edges.find(index).map(EdgeId)
    }

    /// `(source, target)` of `edge`.
    pub fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId) {
        let record = self.edge_record(edge);
        (record.source, record.target)
    }

    /// The vertex `edge` leaves.
    pub fn source(&self, edge: EdgeId) -> VertexId {
        self.edge_record(edge).source
    }

    /// The vertex `edge` enters.
    pub fn target(&self, edge: EdgeId) -> VertexId {
        self.edge_record(edge).target
    }

    // ==================== Bulk removal ====================

    /// Erases every edge, keeping all vertices. Edge slots stay allocated for
    /// reuse, so erased ids remain detectably stale.
    pub fn clear_edges(&mut self) {
        let removed = self.edges.len();
        let mut cursor = self.edges.first_occupied();
        while let Some(index) = cursor {
            cursor = self.edges.next_occupied(index);
            self.detach_edge(index);
        }
        tracing::debug!(removed, "cleared all edges");
    }

    /// Erases every edge incident to `vertex`, in both directions.
    pub fn clear_vertex_edges(&mut self, vertex: VertexId) {
        self.check_vertex(vertex);
        self.clear_list(vertex.index(), Phase::Out);
        self.clear_list(vertex.index(), Phase::In);
    }

    /// Erases every edge leaving `vertex`.
    pub fn clear_out_edges(&mut self, vertex: VertexId) {
        self.check_vertex(vertex);
        self.clear_list(vertex.index(), Phase::Out);
    }

    /// Erases every edge entering `vertex`.
    pub fn clear_in_edges(&mut self, vertex: VertexId) {
        self.check_vertex(vertex);
        self.clear_list(vertex.index(), Phase::In);
    }

    /// Erases everything and releases the backing storage.
    pub fn clear(&mut self) {
        tracing::debug!(
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            "clearing graph"
        );
        self.edges.clear();
        self.vertices.clear();
    }

    // ==================== Traversal ====================

    /// All vertices in table order.
    pub fn vertices(&self) -> Vertices<'_, V, E> {
        Vertices::new(self, self.vertices.iter())
    }

    /// All edges in table order.
    pub fn edges(&self) -> Edges<'_, V, E> {
        Edges::new(self, self.edges.iter())
    }

    /// Edges leaving `vertex`, oldest first.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn out_edges(&self, vertex: VertexId) -> IncidentEdges<'_, V, E> {
        self.incident(vertex, Phase::Out)
    }

    /// Edges entering `vertex`, oldest first.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn in_edges(&self, vertex: VertexId) -> IncidentEdges<'_, V, E> {
        self.incident(vertex, Phase::In)
    }

    fn incident(&self, vertex: VertexId, phase: Phase) -> IncidentEdges<'_, V, E> {
        let record = self.vertex_record(vertex);
        let head = record.heads[phase.slot()];
        IncidentEdges::new(self, phase, head, record.degree[phase.slot()])
    }

    // ==================== Cursors ====================

    /// First vertex in table order.
    pub fn first_vertex(&self) -> Option<VertexId> {
        self.vertices.first_occupied().and_then(|i| self.vertex_id(i))
    }

    /// The vertex after `vertex` in table order.
    pub fn next_vertex(&self, vertex: VertexId) -> Option<VertexId> {
        self.check_vertex(vertex);
        self.vertices
            .next_occupied(vertex.index())
            .and_then(|i| self.vertex_id(i))
    }

    /// First edge in table order.
    pub fn first_edge(&self) -> Option<EdgeId> {
        self.edges.first_occupied().and_then(|i| self.edge_id(i))
    }

    /// The edge after `edge` in table order.
    pub fn next_edge(&self, edge: EdgeId) -> Option<EdgeId> {
        self.check_edge(edge);
        self.edges
            .next_occupied(edge.index())
            .and_then(|i| self.edge_id(i))
    }

    /// Oldest edge leaving `vertex`.
    pub fn first_out_edge(&self, vertex: VertexId) -> Option<EdgeId> {
        self.check_vertex(vertex);
        self.step(Node::Head(vertex.index()), Phase::Out)
    }

    /// The edge after `edge` in its source's outgoing list.
    pub fn next_out_edge(&self, edge: EdgeId) -> Option<EdgeId> {
        self.check_edge(edge);
        self.step(Node::Edge(edge.index()), Phase::Out)
    }

    /// Oldest edge entering `vertex`.
    pub fn first_in_edge(&self, vertex: VertexId) -> Option<EdgeId> {
        self.check_vertex(vertex);
        self.step(Node::Head(vertex.index()), Phase::In)
    }

    /// The edge after `edge` in its target's incoming list.
    pub fn next_in_edge(&self, edge: EdgeId) -> Option<EdgeId> {
        self.check_edge(edge);
        self.step(Node::Edge(edge.index()), Phase::In)
    }

    fn step(&self, from: Node, phase: Phase) -> Option<EdgeId> {
        match self.link(from, phase).next {
            Node::Edge(index) => Some(self.edge_id_at(index)),
            Node::Head(_) => None,
        }
    }

    // ==================== Copying ====================

    /// Builds a new graph with the same shape and converted payloads.
    ///
    /// Edges are re-inserted in global order. Identifiers of the result are
    /// compact and need not match those of `self`.
    pub fn map<V2, E2, FV, FE>(&self, mut vertex_fn: FV, mut edge_fn: FE) -> Graph<V2, E2>
    where
        FV: FnMut(&V) -> V2,
        FE: FnMut(&E) -> E2,
    {
        let mut out = Graph::with_capacity(self.vertex_count(), self.edge_count());
        let mut remap: Vec<Option<VertexId>> = vec![None; self.vertices.capacity()];

        for (slot, record) in self.vertices.iter() {
            remap[slot.index()] = Some(out.insert_vertex(vertex_fn(&record.value)));
        }
        for (_, record) in self.edges.iter() {
            let (Some(source), Some(target)) =
                (remap[record.source.index()], remap[record.target.index()])
            else {
                panic!("edge endpoint is not a live vertex");
            };
            out.insert_edge(source, target, edge_fn(&record.value));
        }
        out
    }

    /// Copies the graph into one with convertible payload types.
    pub fn convert<V2, E2>(&self) -> Graph<V2, E2>
    where
        V: Clone,
        E: Clone,
        V2: From<V>,
        E2: From<E>,
    {
        self.map(|v| V2::from(v.clone()), |e| E2::from(e.clone()))
    }

    // ==================== Internals ====================

    fn check_vertex(&self, vertex: VertexId) {
        assert!(
            self.vertices.contains(vertex.0),
            "{vertex} is not live in this graph"
        );
    }

    fn check_edge(&self, edge: EdgeId) {
        assert!(self.edges.contains(edge.0), "{edge} is not live in this graph");
    }

    fn vertex_record(&self, vertex: VertexId) -> &VertexRecord<V> {
        match self.vertices.get(vertex.0) {
            Some(record) => record,
            None => panic!("{vertex} is not live in this graph"),
        }
    }

    fn edge_record(&self, edge: EdgeId) -> &EdgeRecord<E> {
        match self.edges.get(edge.0) {
            Some(record) => record,
            None => panic!("{edge} is not live in this graph"),
        }
    }

    fn vertex_at(&self, index: usize) -> &VertexRecord<V> {
        match self.vertices.at(index) {
            Some(record) => record,
            None => panic!("incidence list names dead vertex slot {index}"),
        }
    }

    fn vertex_at_mut(&mut self, index: usize) -> &mut VertexRecord<V> {
        match self.vertices.at_mut(index) {
            Some(record) => record,
            None => panic!("incidence list names dead vertex slot {index}"),
        }
    }

    fn edge_at(&self, index: usize) -> &EdgeRecord<E> {
        match self.edges.at(index) {
            Some(record) => record,
            None => panic!("incidence list names dead edge slot {index}"),
        }
    }

    fn edge_at_mut(&mut self, index: usize) -> &mut EdgeRecord<E> {
        match self.edges.at_mut(index) {
            Some(record) => record,
            None => panic!("incidence list names dead edge slot {index}"),
        }
    }

    pub(super) fn edge_id_at(&self, index: usize) -> EdgeId {
        match self.edge_id(index) {
            Some(edge) => edge,
            None => panic!("incidence list names dead edge slot {index}"),
        }
    }

    /// Unsplices the edge at `index` from both lists and fixes the degrees.
    /// The slot itself stays occupied.
    fn unthread(&mut self, index: usize) {
        let node = Node::Edge(index);
        self.unlink(node, Phase::Out);
        self.unlink(node, Phase::In);

        let (source, target) = {
            let record = self.edge_at(index);
            (record.source.index(), record.target.index())
        };
        self.vertex_at_mut(source).degree[Phase::Out.slot()] -= 1;
        self.vertex_at_mut(target).degree[Phase::In.slot()] -= 1;
    }

    fn detach_edge(&mut self, index: usize) -> E {
        self.unthread(index);
        match self.edges.remove_at(index) {
            Some(record) => record.value,
            None => panic!("edge slot {index} freed twice"),
        }
    }

    /// Erases every edge in one list of the vertex at `index`.
    fn clear_list(&mut self, index: usize, phase: Phase) -> usize {
        let head = Node::Head(index);
        let mut removed = 0;
        while let Node::Edge(edge) = self.link(head, phase).next {
            self.detach_edge(edge);
            removed += 1;
        }
        debug_assert!(self.is_empty_list(head, phase));
        debug_assert_eq!(self.vertex_at(index).degree[phase.slot()], 0);
        removed
    }
}

impl<V, E> LinkArena for Graph<V, E> {
    fn link(&self, node: Node, phase: Phase) -> &Link {
        match node {
            Node::Head(index) => &self.vertex_at(index).heads[phase.slot()],
            Node::Edge(index) => &self.edge_at(index).links[phase.slot()],
        }
    }

    fn link_mut(&mut self, node: Node, phase: Phase) -> &mut Link {
        match node {
            Node::Head(index) => &mut self.vertex_at_mut(index).heads[phase.slot()],
            Node::Edge(index) => &mut self.edge_at_mut(index).links[phase.slot()],
        }
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field(
                "vertices",
                &DebugEntries(self.vertices.iter().map(|(id, r)| (id.index(), &r.value))),
            )
            .field(
                "edges",
                &DebugEntries(self.edges.iter().map(|(id, r)| {
                    (id.index(), (r.source.index(), r.target.index(), &r.value))
                })),
            )
            .finish()
    }
}

struct DebugEntries<I>(I);

impl<I, K, T> fmt::Debug for DebugEntries<I>
where
    I: Iterator<Item = (K, T)> + Clone,
    K: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(graph: &Graph<&str, u32>, vertex: VertexId, phase: Phase) -> Vec<u32> {
        let mut out = Vec::new();
        let mut node = graph.link(Node::Head(vertex.index()), phase).next;
        while let Node::Edge(index) = node {
            out.push(graph.edges.at(index).unwrap().value);
            node = graph.link(node, phase).next;
        }
        out
    }

    #[test]
    fn test_graph_insert_threads_both_lists() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");

        graph.insert_edge(a, b, 1);
        graph.insert_edge(a, b, 2);
        graph.insert_edge(b, a, 3);

        assert_eq!(walk(&graph, a, Phase::Out), vec![1, 2]);
        assert_eq!(walk(&graph, b, Phase::In), vec![1, 2]);
        assert_eq!(walk(&graph, b, Phase::Out), vec![3]);
        assert_eq!(walk(&graph, a, Phase::In), vec![3]);
        assert_eq!(graph.out_degree(a), 2);
        assert_eq!(graph.in_degree(a), 1);
    }

    #[test]
    fn test_graph_erase_edge_unthreads() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let e1 = graph.insert_edge(a, b, 1);
        let e2 = graph.insert_edge(a, b, 2);
        let e3 = graph.insert_edge(a, b, 3);

        assert_eq!(graph.erase_edge(e2), Some(e3));
        assert_eq!(walk(&graph, a, Phase::Out), vec![1, 3]);
        assert_eq!(walk(&graph, b, Phase::In), vec![1, 3]);
        assert_eq!(graph.degree(a), 2);

        assert_eq!(graph.erase_edge(e3), None);
        assert_eq!(graph.remove_edge(e1), 1);
        assert!(graph.is_empty_list(Node::Head(a.index()), Phase::Out));
        assert!(graph.is_empty_list(Node::Head(b.index()), Phase::In));
    }

    #[test]
    fn test_graph_self_loop_lists() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        let l = graph.insert_edge(a, a, 7);

        assert_eq!(walk(&graph, a, Phase::Out), vec![7]);
        assert_eq!(walk(&graph, a, Phase::In), vec![7]);
        assert_eq!(graph.degree(a), 2);

        graph.erase_edge(l);
        assert_eq!(graph.degree(a), 0);
        assert!(graph.is_empty_list(Node::Head(a.index()), Phase::Out));
        assert!(graph.is_empty_list(Node::Head(a.index()), Phase::In));
    }

    #[test]
    fn test_graph_erase_vertex_cascades() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let c = graph.insert_vertex("c");
        graph.insert_edge(a, b, 1);
        graph.insert_edge(b, c, 2);
        graph.insert_edge(c, b, 3);
        graph.insert_edge(b, b, 4);
        graph.insert_edge(a, c, 5);

        assert_eq!(graph.remove_vertex(b), "b");
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(walk(&graph, a, Phase::Out), vec![5]);
        assert_eq!(walk(&graph, c, Phase::In), vec![5]);
        assert_eq!(graph.out_degree(c), 0);
    }

    #[test]
    fn test_graph_recycled_edge_slot_rethreads() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        let e1 = graph.insert_edge(a, b, 1);
        graph.insert_edge(a, b, 2);
        graph.erase_edge(e1);

        // Reuses e1's slot but must land at the tail of both lists.
        let e3 = graph.insert_edge(a, b, 3);
        assert_eq!(e3.index(), e1.index());
        assert_eq!(walk(&graph, a, Phase::Out), vec![2, 3]);
        assert_eq!(walk(&graph, b, Phase::In), vec![2, 3]);
        assert!(graph.get_edge(e1).is_none());
    }

    #[test]
    fn test_graph_clear_edges_keeps_vertices() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        graph.insert_edge(a, b, 1);
        graph.insert_edge(b, a, 2);
        graph.insert_edge(a, a, 3);

        graph.clear_edges();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.degree(a), 0);
        assert_eq!(graph.degree(b), 0);
        assert!(graph.is_empty_list(Node::Head(a.index()), Phase::Out));

        // Still usable afterwards.
        graph.insert_edge(b, a, 4);
        assert_eq!(walk(&graph, b, Phase::Out), vec![4]);
    }

    #[test]
    fn test_graph_erase_edge_behind_large_free_region() {
        const N: usize = 100_000;
        let mut graph = Graph::with_capacity(1, N);
        let a = graph.insert_vertex("a");
        let edges: Vec<_> = (0..N).map(|i| graph.insert_edge(a, a, i as u32)).collect();
        let last = edges[N - 1];

        // Back to front: each erase must not walk the freed tail.
        for &e in edges[..N - 1].iter().rev() {
            assert_eq!(graph.erase_edge(e), Some(last));
        }
        assert_eq!(graph.first_edge(), Some(last));

        for i in 0..1_000 {
            let e = graph.insert_edge(a, a, i);
            assert_eq!(e.index(), 0);
            assert_eq!(graph.next_edge(last), Some(e));
            assert_eq!(graph.erase_edge(e), None);
        }

        graph.clear_edges();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.edge_capacity(), N);
        assert!(graph.get_edge(last).is_none());
        assert!(graph.is_empty_list(Node::Head(a.index()), Phase::In));
    }

    #[test]
    #[should_panic(expected = "is not live")]
    fn test_graph_double_erase_panics() {
        let mut graph: Graph<&str, u32> = Graph::new();
        let a = graph.insert_vertex("a");
        graph.erase_vertex(a);
        graph.erase_vertex(a);
    }

    #[test]
    #[should_panic(expected = "is not live")]
    fn test_graph_edge_to_erased_vertex_panics() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        let b = graph.insert_vertex("b");
        graph.erase_vertex(b);
        graph.insert_edge(a, b, 1);
    }

    #[test]
    fn test_graph_debug() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("a");
        graph.insert_edge(a, a, 1);
        assert_eq!(
            format!("{graph:?}"),
            "Graph { vertices: {0: \"a\"}, edges: {0: (0, 0, 1)} }"
        );
    }
}
