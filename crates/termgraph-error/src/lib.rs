//! # termgraph-error
//!
//! Unified error handling for termgraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., NodeNotFound, ConfigInvalid)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use termgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::NodeNotFound, "start node is missing")
//!         .with_operation("collect::collect_subgraph")
//!         .with_context("node_id", "n42"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, termgraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using termgraph Error
pub type Result<T> = std::result::Result<T, Error>;
