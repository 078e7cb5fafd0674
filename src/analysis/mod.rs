//! Diversity analysis over the graph model.
//!
//! [`DiversityEngine`] walks consecutive common nodes along a reference
//! path and scores the structural variation between each pair: how many
//! distinct intervening traversals exist across all paths, normalized by
//! the reference nucleotide span.

pub mod diversity;

pub use diversity::{AnalysisError, DiversityEngine, DiversityReport, IntervalRecord};
