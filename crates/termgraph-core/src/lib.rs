//! Graph data model and lookup seams for termgraph.
//!
//! The renderer never owns the graph. It reads point snapshots through
//! [`GraphAccessor`] and asks [`GraphCensus`] for aggregate counts; both are
//! implemented by whatever store embeds termgraph. [`MemoryGraph`] is a small
//! in-process accessor for embedding and tests.

pub mod accessor;
pub mod id;
pub mod memory;
pub mod model;

pub use accessor::{GraphAccessor, GraphCensus, GraphStats};
pub use id::{EdgeId, NodeId};
pub use memory::MemoryGraph;
pub use model::{Edge, Node, Properties, display_value};

pub use termgraph_error::{Error, ErrorKind, Result};
