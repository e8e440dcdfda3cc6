//! # `knit` - Slot-Arena Directed Multigraphs
//!
//! An in-memory directed multigraph container with O(1) structural mutation
//! and three simultaneously valid traversal views over one relocation-free
//! storage, plus an optional key-indexing layer.
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Slot Table** (`SlotTable<T>`):
//!    - Id-addressed records that never move once inserted
//!    - O(1) erase anywhere, freed slots recycled through a free list
//!    - Generation-tagged ids, so a stale id never aliases a recycled slot
//!
//! 2. **Intrusive Incidence** (internal):
//!    - Each edge record embeds one link per direction
//!    - Each vertex owns a sentinel head per direction
//!    - An edge is threaded into its source's outgoing list and its target's
//!      incoming list at once, with no per-direction allocation
//!
//! 3. **Graph** (`Graph<V, E>`):
//!    - Vertex and edge CRUD, cascading vertex erasure, bulk clears
//!    - Global edge order, per-vertex outgoing and per-vertex incoming
//!      traversal, all double-ended and restartable
//!    - Erase-and-advance cursors for mutation during traversal
//!
//! 4. **Indexed Graph** (`IndexedGraph<V, E, K, I>`):
//!    - Unique vertex keys derived from payloads by a pure function
//!    - Insert-or-find, key lookup, edge insertion that creates endpoints on
//!      demand, edge erasure that collects orphaned endpoints
//!    - Pluggable backend: ordered (`BTreeIndex`) or hashed (`HashIndex`)
//!
//! ### Invariants
//!
//! - An edge's endpoints are always live vertices of the same graph.
//! - Erasing a vertex erases every incident edge first.
//! - Out- and in-degree always equal the length of the matching sublist.
//! - In an `IndexedGraph`, keys are unique among live vertices and a
//!   colliding insert leaves the graph unmodified.
//!
//! Handles are plain ids. Using one after its record was erased is a caller
//! bug; the containers detect it and panic instead of corrupting their lists.
//!
//! ## Example
//!
//! ```rust
//! use knit::IndexedGraph;
//!
//! fn name(crate_name: &&'static str) -> &'static str {
//!     crate_name
//! }
//!
//! let mut deps: IndexedGraph<&str, (), &str> = IndexedGraph::new(name);
//! deps.insert_edge_and_maybe_vertices("app", "net", ());
//! deps.insert_edge_and_maybe_vertices("app", "log", ());
//! deps.insert_edge_and_maybe_vertices("net", "log", ());
//!
//! let log = deps.find_vertex(&"log").unwrap();
//! let dependents: Vec<&str> = deps
//!     .in_edges(log)
//!     .map(|e| *e.source().value())
//!     .collect();
//! assert_eq!(dependents, ["app", "net"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{SlotId, SlotTable};
pub use error::{IndexError, Result};
pub use graph::{
    BTreeIndex, EdgeId, EdgeRef, Graph, HashIndex, IndexedGraph, VertexId, VertexIndex,
    VertexRef,
};

// Compile-time layout checks for the hot records.
const _: () = {
    use core::mem;

    // Ids are a slot index plus a 32-bit generation.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<SlotId>());
    assert!(mem::size_of::<EdgeId>() <= 2 * mem::size_of::<usize>());
};
