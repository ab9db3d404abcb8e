//! Subgraph collection for graph rendering.
//!
//! Turns a start node and a node budget into the node set to draw plus the
//! edges among those nodes. Nothing here knows about layout or glyphs.
//!
//! # Module Structure
//!
//! - [`types`]: The collected [`Subgraph`]
//! - [`collect`]: Budgeted walk and edge closure

mod collect;
mod types;

pub use collect::{collect_closure_edges, collect_nodes, collect_subgraph};
pub use types::Subgraph;
