//! Error kinds for termgraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Rendering itself only ever surfaces [`ErrorKind::NodeNotFound`]; every other
/// absence is omitted silently. The remaining kinds belong to accessors and to
/// configuration loading, which happen outside a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Graph lookup errors
    // =========================================================================
    /// Node not found in the graph store
    NodeNotFound,

    /// Outgoing edges of a node could not be read
    EdgeLookupFailed,

    /// The graph-analysis collaborator could not produce a count
    CensusFailed,

    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Invalid configuration or unrecognized option
    ConfigInvalid,

    /// Configuration text could not be deserialized
    DeserializationFailed,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this kind reports an entity missing from the graph
    pub fn is_not_found(&self) -> bool {
        matches!(self, ErrorKind::NodeNotFound)
    }
}
