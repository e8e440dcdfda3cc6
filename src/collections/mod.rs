//! Storage primitives underlying the graph containers.
//!
//! - `slot_table`: id-addressed record storage with free-list recycling

pub mod slot_table;

pub use slot_table::{SlotId, SlotTable};
