//! Vertex and edge handles.
//!
//! [`VertexId`] and [`EdgeId`] are plain `Copy` identifiers that stay valid
//! until their record is erased. [`VertexRef`] and [`EdgeRef`] pair an id with
//! a borrow of the graph, which is what the traversal iterators yield.

use super::iter::IncidentEdges;
use super::multigraph::Graph;
use crate::collections::SlotId;
use core::fmt;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// Identifier of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) SlotId);

/// Identifier of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) SlotId);

impl VertexId {
    /// Small integer identifier, unique among live vertices.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.index()
    }

    /// The underlying slot id.
    #[inline]
    pub const fn slot(self) -> SlotId {
        self.0
    }
}

impl EdgeId {
    /// Small integer identifier, unique among live edges.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.index()
    }

    /// The underlying slot id.
    #[inline]
    pub const fn slot(self) -> SlotId {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex {}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge {}", self.0)
    }
}

/// A live vertex together with the graph that owns it.
pub struct VertexRef<'g, V, E> {
    graph: &'g Graph<V, E>,
    id: VertexId,
}

impl<'g, V, E> VertexRef<'g, V, E> {
    #[inline]
    pub(crate) fn new(graph: &'g Graph<V, E>, id: VertexId) -> Self {
        Self { graph, id }
    }

    /// The vertex id.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The vertex payload.
    #[inline]
    pub fn value(&self) -> &'g V {
        self.graph.vertex(self.id)
    }

    /// Outgoing edges in incidence order.
    pub fn out_edges(&self) -> IncidentEdges<'g, V, E> {
        self.graph.out_edges(self.id)
    }

    /// Incoming edges in incidence order.
    pub fn in_edges(&self) -> IncidentEdges<'g, V, E> {
        self.graph.in_edges(self.id)
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.graph.out_degree(self.id)
    }

    /// Number of incoming edges.
    pub fn in_degree(&self) -> usize {
        self.graph.in_degree(self.id)
    }

    /// Number of incident edges in both directions; a self-loop counts twice.
    pub fn degree(&self) -> usize {
        self.graph.degree(self.id)
    }
}

/// A live edge together with the graph that owns it.
pub struct EdgeRef<'g, V, E> {
    graph: &'g Graph<V, E>,
    id: EdgeId,
}

impl<'g, V, E> EdgeRef<'g, V, E> {
    #[inline]
    pub(crate) fn new(graph: &'g Graph<V, E>, id: EdgeId) -> Self {
        Self { graph, id }
    }

    /// The edge id.
    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The edge payload.
    #[inline]
    pub fn value(&self) -> &'g E {
        self.graph.edge(self.id)
    }

    /// The vertex this edge leaves.
    pub fn source(&self) -> VertexRef<'g, V, E> {
        VertexRef::new(self.graph, self.graph.source(self.id))
    }

    /// The vertex this edge enters.
    pub fn target(&self) -> VertexRef<'g, V, E> {
        VertexRef::new(self.graph, self.graph.target(self.id))
    }

    /// `true` if source and target coincide.
    pub fn is_self_loop(&self) -> bool {
        let (source, target) = self.graph.endpoints(self.id);
        source == target
    }
}

// Manual impls: derives would demand `V: Clone` etc. for what is a borrow.

impl<V, E> Clone for VertexRef<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for VertexRef<'_, V, E> {}

impl<V, E> PartialEq for VertexRef<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && core::ptr::eq(self.graph, other.graph)
    }
}

impl<V, E> Eq for VertexRef<'_, V, E> {}

impl<V, E> Hash for VertexRef<'_, V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V: fmt::Debug, E> fmt::Debug for VertexRef<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

impl<V, E> Clone for EdgeRef<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for EdgeRef<'_, V, E> {}

impl<V, E> PartialEq for EdgeRef<'_, V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && core::ptr::eq(self.graph, other.graph)
    }
}

impl<V, E> Eq for EdgeRef<'_, V, E> {}

impl<V, E> Hash for EdgeRef<'_, V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V, E: fmt::Debug> fmt::Debug for EdgeRef<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (source, target) = self.graph.endpoints(self.id);
        f.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("source", &source)
            .field("target", &target)
            .field("value", self.value())
            .finish()
    }
}
