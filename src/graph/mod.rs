//! Directed multigraph containers.
//!
//! Graph implementations are layered:
//! - [`Graph`]: vertices and edges in slot tables, incidence kept in intrusive
//!   per-vertex sublists
//! - [`IndexedGraph`]: a `Graph` whose vertices are unique by a derived key
//! - `adapter`: descriptor-based free functions for generic algorithm code

pub mod adapter;
mod handle;
mod incidence;
mod index;
mod indexed;
mod iter;
mod multigraph;

pub use handle::{EdgeId, EdgeRef, VertexId, VertexRef};
pub use index::{BTreeIndex, HashIndex, VertexIndex};
pub use indexed::IndexedGraph;
pub use iter::{Edges, IncidentEdges, Vertices};
pub use multigraph::Graph;
