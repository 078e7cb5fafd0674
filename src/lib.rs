//! # pansel
//!
//! A library for locating and scoring structurally divergent regions in
//! pangenome variation graphs.
//!
//! A variation graph represents a collection of genomes as sequence
//! segments ("nodes") plus named traversals through them ("paths"). Where
//! haplotypes agree, their paths run through the same nodes; where they
//! diverge, the paths split apart and rejoin, forming a bubble. `pansel`
//! finds the nodes shared by a configurable number of paths, walks them
//! in reference order, and scores each intervening region by how many
//! structurally distinct traversals cross it per reference nucleotide.
//!
//! ## Pipeline
//!
//! 1. Count, for every node, the distinct paths containing it, and keep
//!    the nodes at or above a membership threshold
//! 2. Order those common nodes along the designated reference path
//! 3. For each consecutive pair with an intervening region, extract the
//!    per-path node sequence between the endpoints, count the distinct
//!    variants by node-set identity, and divide by the reference span
//!
//! ## Example
//!
//! ```rust,no_run
//! use pansel::{parsing::gfa, DiversityEngine};
//! use std::path::Path;
//!
//! let graph = gfa::parse_file(Path::new("pangenome.gfa")).unwrap();
//!
//! let engine = DiversityEngine::new(&graph);
//! let report = engine.run("GRCh38", 5).unwrap();
//!
//! for interval in &report.intervals {
//!     println!(
//!         "{}..{}: {} variants over {} nt",
//!         interval.start_node, interval.end_node,
//!         interval.n_distinct_variants, interval.nt_length,
//!     );
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: the graph model (nodes, positioned nodes, paths, graph)
//! - [`analysis`]: the diversity engine and its report types
//! - [`parsing`]: the GFA-subset parser
//! - [`cli`]: command-line interface implementation

pub mod analysis;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use analysis::diversity::{AnalysisError, DiversityEngine, DiversityReport, IntervalRecord};
pub use core::graph::{CommonNodes, Graph};
pub use core::node::{Node, PositionedNode};
pub use core::path::Path;
pub use core::GraphError;
