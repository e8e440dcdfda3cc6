//! Intrusive incidence sublists.
//!
//! Every edge record embeds one [`Link`] per [`Phase`]: the `Out` link threads
//! it into its source vertex's outgoing list, the `In` link into its target
//! vertex's incoming list. Every vertex owns one payload-free sentinel head per
//! phase. Lists are circular, so an empty list is a head whose links point at
//! itself, and splicing never needs to special-case the ends.
//!
//! Links name nodes by slot index rather than by pointer, which keeps records
//! relocatable inside their slot tables and makes the whole structure `Clone`.

/// Which of the two sublists a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Phase {
    /// Threaded from the source vertex's outgoing head.
    Out = 0,
    /// Threaded from the target vertex's incoming head.
    In = 1,
}

impl Phase {
    /// Position of this phase in a `[Link; 2]`.
    #[inline(always)]
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

/// A member of a circular sublist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Node {
    /// Sentinel head owned by the vertex at this slot index.
    Head(usize),
    /// Link embedded in the edge at this slot index.
    Edge(usize),
}

/// `prev`/`next` pair of one node in one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) prev: Node,
    pub(crate) next: Node,
}

impl Link {
    /// A link that forms a one-element circle around `node`.
    #[inline]
    pub(crate) const fn singleton(node: Node) -> Self {
        Self {
            prev: node,
            next: node,
        }
    }
}

/// Storage that can resolve a [`Node`] to its link in a given phase.
///
/// Implementors only provide lookup; splicing is shared.
pub(crate) trait LinkArena {
    fn link(&self, node: Node, phase: Phase) -> &Link;

    fn link_mut(&mut self, node: Node, phase: Phase) -> &mut Link;

    /// `true` if `node` is not a member of any other node's list in `phase`.
    #[inline]
    fn is_singleton(&self, node: Node, phase: Phase) -> bool {
        let link = self.link(node, phase);
        link.next == node && link.prev == node
    }

    /// `true` if the list headed by `head` has no edges.
    #[inline]
    fn is_empty_list(&self, head: Node, phase: Phase) -> bool {
        self.is_singleton(head, phase)
    }

    /// Splices the free `node` in front of `anchor`.
    ///
    /// Inserting before a head appends at the tail of that head's list.
    ///
    /// # Panics
    /// Panics if `node` is already linked in `phase`; splicing it again would
    /// orphan its current neighbours.
    fn insert_before(&mut self, node: Node, anchor: Node, phase: Phase) {
        assert!(
            self.is_singleton(node, phase),
            "{node:?} is already linked in the {phase:?} sublist"
        );
        let prev = self.link(anchor, phase).prev;
        *self.link_mut(node, phase) = Link { prev, next: anchor };
        self.link_mut(prev, phase).next = node;
        self.link_mut(anchor, phase).prev = node;
    }

    /// Unsplices `node` from its list in `phase`, leaving it a singleton.
    ///
    /// A no-op on a node that is already a singleton.
    fn unlink(&mut self, node: Node, phase: Phase) {
        let Link { prev, next } = *self.link(node, phase);
        self.link_mut(prev, phase).next = next;
        self.link_mut(next, phase).prev = prev;
        *self.link_mut(node, phase) = Link::singleton(node);
    }
}
