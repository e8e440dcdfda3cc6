//! Lazy traversal sequences over a [`Graph`].
//!
//! All iterators are double-ended, report an exact length, and can be cloned
//! to restart from the current position. Items are [`VertexRef`] / [`EdgeRef`],
//! which compare equal whenever they name the same record, whichever sequence
//! produced them.

use super::handle::{EdgeId, EdgeRef, VertexId, VertexRef};
use super::incidence::{Link, LinkArena, Node, Phase};
use super::multigraph::{EdgeRecord, Graph, VertexRecord};
use crate::collections::slot_table;
use core::iter::FusedIterator;

/// Every live vertex, in table order.
pub struct Vertices<'g, V, E> {
    graph: &'g Graph<V, E>,
    inner: slot_table::Iter<'g, VertexRecord<V>>,
}

impl<'g, V, E> Vertices<'g, V, E> {
    pub(super) fn new(
        graph: &'g Graph<V, E>,
        inner: slot_table::Iter<'g, VertexRecord<V>>,
    ) -> Self {
        Self { graph, inner }
    }
}

impl<V, E> Clone for Vertices<'_, V, E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            inner: self.inner.clone(),
        }
    }
}

impl<'g, V, E> Iterator for Vertices<'g, V, E> {
    type Item = VertexRef<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, _) = self.inner.next()?;
        Some(VertexRef::new(self.graph, VertexId(slot)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> DoubleEndedIterator for Vertices<'_, V, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (slot, _) = self.inner.next_back()?;
        Some(VertexRef::new(self.graph, VertexId(slot)))
    }
}

impl<V, E> ExactSizeIterator for Vertices<'_, V, E> {}
impl<V, E> FusedIterator for Vertices<'_, V, E> {}

/// Every live edge, in table order.
pub struct Edges<'g, V, E> {
    graph: &'g Graph<V, E>,
    inner: slot_table::Iter<'g, EdgeRecord<E>>,
}

impl<'g, V, E> Edges<'g, V, E> {
    pub(super) fn new(
        graph: &'g Graph<V, E>,
        inner: slot_table::Iter<'g, EdgeRecord<E>>,
    ) -> Self {
        Self { graph, inner }
    }
}

impl<V, E> Clone for Edges<'_, V, E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            inner: self.inner.clone(),
        }
    }
}

impl<'g, V, E> Iterator for Edges<'g, V, E> {
    type Item = EdgeRef<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, _) = self.inner.next()?;
        Some(EdgeRef::new(self.graph, EdgeId(slot)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> DoubleEndedIterator for Edges<'_, V, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (slot, _) = self.inner.next_back()?;
        Some(EdgeRef::new(self.graph, EdgeId(slot)))
    }
}

impl<V, E> ExactSizeIterator for Edges<'_, V, E> {}
impl<V, E> FusedIterator for Edges<'_, V, E> {}

/// The edges of one vertex in one direction, in incidence order.
///
/// Walks the circular sublist from both ends toward the middle; `remaining`
/// (seeded from the vertex degree) tells the two ends when they have met.
pub struct IncidentEdges<'g, V, E> {
    graph: &'g Graph<V, E>,
    phase: Phase,
    front: Node,
    back: Node,
    remaining: usize,
}

impl<'g, V, E> IncidentEdges<'g, V, E> {
    pub(super) fn new(graph: &'g Graph<V, E>, phase: Phase, head: Link, degree: usize) -> Self {
        Self {
            graph,
            phase,
            front: head.next,
            back: head.prev,
            remaining: degree,
        }
    }

    fn resolve(&self, node: Node) -> Option<EdgeRef<'g, V, E>> {
        match node {
            Node::Edge(index) => Some(EdgeRef::new(self.graph, self.graph.edge_id_at(index))),
            Node::Head(_) => None,
        }
    }
}

impl<V, E> Clone for IncidentEdges<'_, V, E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            phase: self.phase,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'g, V, E> Iterator for IncidentEdges<'g, V, E> {
    type Item = EdgeRef<'g, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front;
        self.front = self.graph.link(node, self.phase).next;
        self.remaining -= 1;
        self.resolve(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V, E> DoubleEndedIterator for IncidentEdges<'_, V, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back;
        self.back = self.graph.link(node, self.phase).prev;
        self.remaining -= 1;
        self.resolve(node)
    }
}

impl<V, E> ExactSizeIterator for IncidentEdges<'_, V, E> {}
impl<V, E> FusedIterator for IncidentEdges<'_, V, E> {}
