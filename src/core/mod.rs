//! Core data model: nodes, positioned nodes, paths, and the graph.
//!
//! Everything here is built once by the parser and read-only for the
//! rest of the run:
//!
//! - [`Node`]: segment identity and sequence length
//! - [`PositionedNode`]: a node materialized at a nucleotide offset on one path
//! - [`Path`]: an ordered traversal with positional lookups and distances
//! - [`Graph`]: owner of both tables; answers the membership and
//!   extraction queries the analysis is built on

use thiserror::Error;

pub mod graph;
pub mod node;
pub mod path;

pub use graph::{CommonNodes, Graph};
pub use node::{Node, PositionedNode};
pub use path::Path;

/// Errors raised by graph and path lookups.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node '{0}' not found")]
    NodeNotFound(String),

    #[error("path '{0}' not found")]
    PathNotFound(String),
}
