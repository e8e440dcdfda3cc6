//! `IndexedGraph` - a [`Graph`] whose vertices are unique by key.
//!
//! The key of a vertex is computed from its payload by a caller-supplied pure
//! function. Every structural operation that creates or destroys a vertex goes
//! through this layer so the index and the graph cannot drift apart; read-only
//! access to the underlying graph is available through `Deref`.
//!
//! The backend is pluggable via [`VertexIndex`]: [`BTreeIndex`] (default,
//! O(log V)) or [`HashIndex`](super::HashIndex) (expected O(1)).

use super::handle::{EdgeId, VertexId};
use super::index::{BTreeIndex, VertexIndex};
use super::multigraph::Graph;
use crate::error::{IndexError, Result};
use core::fmt;
use core::ops::Deref;

/// A directed multigraph with an injective key → vertex index.
///
/// # Example
///
/// ```rust
/// use knit::{IndexError, IndexedGraph};
///
/// let mut roads: IndexedGraph<String, u32, String> = IndexedGraph::new(String::clone);
/// let chicago = roads.insert_vertex("Chicago".to_string()).unwrap();
/// let edge =
///     roads.insert_edge_and_maybe_vertices("Chicago".to_string(), "Effingham".to_string(), 6);
///
/// assert_eq!(roads.source(edge), chicago);
/// assert_eq!(
///     roads.insert_vertex("Chicago".to_string()),
///     Err(IndexError::AlreadyExists("Chicago".to_string()))
/// );
/// ```
#[derive(Clone)]
pub struct IndexedGraph<V, E, K, I = BTreeIndex<K>> {
    graph: Graph<V, E>,
    index: I,
    key_of: fn(&V) -> K,
}

impl<V, E, K: Ord + Clone> IndexedGraph<V, E, K> {
    /// Creates an empty graph using the ordered-map backend.
    pub fn new(key_of: fn(&V) -> K) -> Self {
        Self::with_index(key_of, BTreeIndex::new())
    }

    /// Indexes an existing graph with the ordered-map backend.
    ///
    /// # Errors
    /// Returns [`IndexError::AlreadyExists`] for the first vertex whose key
    /// collides with an earlier one (in table order).
    pub fn from_graph(graph: Graph<V, E>, key_of: fn(&V) -> K) -> Result<Self, K> {
        Self::from_graph_with_index(graph, key_of, BTreeIndex::new())
    }

    /// Builds a new indexed graph over converted payloads, recomputing every
    /// key from scratch since identifiers are not preserved.
    ///
    /// # Errors
    /// Returns [`IndexError::AlreadyExists`] if two converted vertices share a
    /// key under `key_of`.
    pub fn map<V2, E2, K2, FV, FE>(
        &self,
        vertex_fn: FV,
        edge_fn: FE,
        key_of: fn(&V2) -> K2,
    ) -> Result<IndexedGraph<V2, E2, K2>, K2>
    where
        K2: Ord + Clone,
        FV: FnMut(&V) -> V2,
        FE: FnMut(&E) -> E2,
    {
        IndexedGraph::from_graph(self.graph.map(vertex_fn, edge_fn), key_of)
    }

    /// Copies the graph into one with convertible payload types.
    ///
    /// # Errors
    /// Returns [`IndexError::AlreadyExists`] if two converted vertices share a
    /// key under `key_of`.
    pub fn convert<V2, E2, K2>(
        &self,
        key_of: fn(&V2) -> K2,
    ) -> Result<IndexedGraph<V2, E2, K2>, K2>
    where
        V: Clone,
        E: Clone,
        V2: From<V>,
        E2: From<E>,
        K2: Ord + Clone,
    {
        IndexedGraph::from_graph(self.graph.convert(), key_of)
    }
}

impl<V, E, K, I: VertexIndex<K>> IndexedGraph<V, E, K, I> {
    /// Creates an empty graph over the given backend (which is cleared first).
    pub fn with_index(key_of: fn(&V) -> K, mut index: I) -> Self {
        index.clear();
        Self {
            graph: Graph::new(),
            index,
            key_of,
        }
    }

    /// Indexes an existing graph with the given backend.
    ///
    /// # Errors
    /// Returns [`IndexError::AlreadyExists`] for the first vertex whose key
    /// collides with an earlier one (in table order).
    pub fn from_graph_with_index(
        graph: Graph<V, E>,
        key_of: fn(&V) -> K,
        mut index: I,
    ) -> Result<Self, K> {
        index.clear();
        for vertex in graph.vertices() {
            let key = key_of(vertex.value());
            if index.forward_lookup(&key).is_some() {
                return Err(IndexError::AlreadyExists(key));
            }
            index.insert(key, vertex.id());
        }
        tracing::debug!(vertices = index.len(), "rebuilt vertex index");
        Ok(Self { graph, index, key_of })
    }

    /// The underlying graph.
    #[inline]
    pub fn graph(&self) -> &Graph<V, E> {
        &self.graph
    }

    /// The index backend.
    #[inline]
    pub fn index(&self) -> &I {
        &self.index
    }

    /// The key function.
    #[inline]
    pub fn key_fn(&self) -> fn(&V) -> K {
        self.key_of
    }

    /// Unwraps the underlying graph, dropping the index.
    pub fn into_graph(self) -> Graph<V, E> {
        self.graph
    }

    // ==================== Vertices ====================

    /// Inserts a vertex whose key is not yet taken.
    ///
    /// # Errors
    /// Returns [`IndexError::AlreadyExists`] if a live vertex already holds the
    /// key of `value`; the graph is left untouched.
    pub fn insert_vertex(&mut self, value: V) -> Result<VertexId, K> {
        let key = (self.key_of)(&value);
        if let Some(existing) = self.index.forward_lookup(&key) {
            tracing::trace!(existing = existing.index(), "rejected duplicate vertex key");
            return Err(IndexError::AlreadyExists(key));
        }
        let vertex = self.graph.insert_vertex(value);
        self.index.insert(key, vertex);
        Ok(vertex)
    }

    /// Returns the vertex holding the key of `value`, inserting `value` if
    /// there is none.
    pub fn insert_vertex_maybe(&mut self, value: V) -> VertexId {
        let key = (self.key_of)(&value);
        if let Some(existing) = self.index.forward_lookup(&key) {
            return existing;
        }
        let vertex = self.graph.insert_vertex(value);
        self.index.insert(key, vertex);
        vertex
    }

    /// The vertex holding the same key as `value`.
    pub fn find_vertex_value(&self, value: &V) -> Option<VertexId> {
        self.index.forward_lookup(&(self.key_of)(value))
    }

    /// The vertex holding `key`.
    pub fn find_vertex(&self, key: &K) -> Option<VertexId> {
        self.index.forward_lookup(key)
    }

    /// The key held by `vertex`.
    pub fn key_of_vertex(&self, vertex: VertexId) -> Option<&K> {
        self.index.reverse_lookup(vertex)
    }

    /// Erases a vertex, its incident edges and its index entry.
    ///
    /// Returns the next vertex in table order.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn erase_vertex(&mut self, vertex: VertexId) -> Option<VertexId> {
        let next = self.graph.erase_vertex(vertex);
        self.index.erase_target(vertex);
        next
    }

    /// Erases a vertex, its incident edges and its index entry, returning
    /// its payload.
    ///
    /// # Panics
    /// Panics if `vertex` is not live in this graph.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> V {
        let value = self.graph.remove_vertex(vertex);
        self.index.erase_target(vertex);
        value
    }

    /// Mutates a vertex payload in place.
    ///
    /// # Panics
    /// Panics if `vertex` is not live, or if `f` changes the payload's key.
    pub fn modify_vertex<R>(&mut self, vertex: VertexId, f: impl FnOnce(&mut V) -> R) -> R
    where
        K: PartialEq,
    {
        let out = f(self.graph.vertex_mut(vertex));
        let key = (self.key_of)(self.graph.vertex(vertex));
        assert!(
            self.index.reverse_lookup(vertex) == Some(&key),
            "modify_vertex changed the key of {vertex}"
        );
        out
    }

    // ==================== Edges ====================

    /// Adds an edge between two live vertices.
    ///
    /// # Panics
    /// Panics if either endpoint is not live in this graph.
    pub fn insert_edge(&mut self, source: VertexId, target: VertexId, value: E) -> EdgeId {
        self.graph.insert_edge(source, target, value)
    }

    /// Adds an edge, first finding or creating both endpoints by key.
    ///
    /// Suited to building a graph from a stream of `(from, to)` pairs whose
    /// vertices are first seen on demand.
    pub fn insert_edge_and_maybe_vertices(&mut self, source: V, target: V, value: E) -> EdgeId {
        let source = self.insert_vertex_maybe(source);
        let target = self.insert_vertex_maybe(target);
        self.graph.insert_edge(source, target, value)
    }

    /// Erases an edge, returning the next edge in table order.
    pub fn erase_edge(&mut self, edge: EdgeId) -> Option<EdgeId> {
        self.graph.erase_edge(edge)
    }

    /// Erases an edge, returning its payload.
    pub fn remove_edge(&mut self, edge: EdgeId) -> E {
        self.graph.remove_edge(edge)
    }

    /// Erases an edge, then each endpoint left with no incident edges.
    ///
    /// A self-loop's single endpoint is considered once. Returns the next
    /// edge in table order.
    ///
    /// # Panics
    /// Panics if `edge` is not live in this graph.
    pub fn erase_edge_and_maybe_vertices(&mut self, edge: EdgeId) -> Option<EdgeId> {
        let (source, target) = self.graph.endpoints(edge);
        let next = self.graph.erase_edge(edge);

        if self.graph.degree(source) == 0 {
            self.remove_vertex(source);
        }
        if target != source && self.graph.degree(target) == 0 {
            self.remove_vertex(target);
        }
        next
    }

    /// Mutable payload of `edge`. Edge payloads carry no key.
    pub fn edge_mut(&mut self, edge: EdgeId) -> &mut E {
        self.graph.edge_mut(edge)
    }

    /// Erases every edge, keeping all vertices.
    pub fn clear_edges(&mut self) {
        self.graph.clear_edges();
    }

    /// Erases every edge incident to `vertex`.
    pub fn clear_vertex_edges(&mut self, vertex: VertexId) {
        self.graph.clear_vertex_edges(vertex);
    }

    /// Erases every edge leaving `vertex`.
    pub fn clear_out_edges(&mut self, vertex: VertexId) {
        self.graph.clear_out_edges(vertex);
    }

    /// Erases every edge entering `vertex`.
    pub fn clear_in_edges(&mut self, vertex: VertexId) {
        self.graph.clear_in_edges(vertex);
    }

    /// Erases everything, index included.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.index.clear();
    }
}

impl<V, E, K, I> Deref for IndexedGraph<V, E, K, I> {
    type Target = Graph<V, E>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<V, E, K, I> fmt::Debug for IndexedGraph<V, E, K, I>
where
    V: fmt::Debug,
    E: fmt::Debug,
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedGraph")
            .field("graph", &self.graph)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
