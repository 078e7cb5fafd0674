use std::collections::{BTreeSet, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::core::{Graph, GraphError};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("interval between '{start}' and '{end}' spans zero nucleotides")]
    ZeroLengthInterval { start: String, end: String },
}

/// One scored interval between two consecutive common nodes on the
/// reference path.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalRecord {
    pub start_node: String,
    pub end_node: String,

    /// First reference nucleotide strictly after the start node.
    pub ref_start: u64,

    /// Last reference nucleotide strictly before the end node.
    pub ref_end: u64,

    /// Number of structurally distinct intervening traversals. Two
    /// traversals count as one variant when they visit the same set of
    /// nodes, whatever the order or repetition within each path.
    pub n_distinct_variants: usize,

    /// Number of paths containing both endpoints.
    pub n_contributing_paths: usize,

    /// Reference nucleotides between the endpoints.
    pub nt_length: u64,

    /// Distinct variants per reference nucleotide.
    pub density: f64,
}

/// Full result of one pipeline run. Produced wholesale so the caller
/// never prints a partial table.
#[derive(Debug, Clone, PartialEq)]
pub struct DiversityReport {
    /// `histogram[k]` is the number of nodes contained in exactly `k` paths.
    pub histogram: Vec<usize>,

    pub n_nodes: usize,
    pub n_paths: usize,

    /// Nodes whose membership met the threshold.
    pub n_common_nodes: usize,

    /// Common nodes that lie on the reference path.
    pub n_ordered_nodes: usize,

    /// Consecutive pairs examined, emitted or skipped for adjacency.
    pub n_considered: usize,

    pub intervals: Vec<IntervalRecord>,
}

/// Runs the interval-scoring pipeline over a graph.
///
/// Common nodes are ordered along the reference path; each consecutive
/// pair delimits a candidate interval, which is scored by how many
/// structurally distinct traversals cross it relative to its reference
/// span.
pub struct DiversityEngine<'a> {
    graph: &'a Graph,
}

impl<'a> DiversityEngine<'a> {
    #[must_use]
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Score every interval between consecutive common nodes along the
    /// named reference path.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Graph` if the reference path does not
    /// exist, or `AnalysisError::ZeroLengthInterval` if a considered
    /// interval spans zero nucleotides (possible only with zero-size
    /// nodes).
    pub fn run(&self, reference: &str, min_paths: usize) -> Result<DiversityReport, AnalysisError> {
        let common = self.graph.common_nodes(min_paths);
        let reference_path = self.graph.path(reference)?;
        let ordered = reference_path.order(&common.names);
        debug!(
            "{} common nodes at threshold {}, {} on reference '{}'",
            common.names.len(),
            min_paths,
            ordered.len(),
            reference
        );

        let mut intervals = Vec::new();
        let mut n_considered = 0;
        for pair in ordered.windows(2) {
            let (start, end) = (&pair[0], &pair[1]);
            n_considered += 1;

            // Adjacent or coincident on the reference leaves nothing to
            // analyze; loop-induced inversions land here too because the
            // distance is indexed by last occurrence.
            if reference_path.node_distance(start, end)? <= 1 {
                continue;
            }

            let variants = self.graph.sub_paths(start, end)?;
            let n_contributing_paths = variants.len();
            let distinct: HashSet<BTreeSet<&str>> = variants
                .iter()
                .map(|variant| variant.iter().map(String::as_str).collect())
                .collect();

            let nt_length = reference_path.nt_distance(start, end)?;
            if nt_length == 0 {
                return Err(AnalysisError::ZeroLengthInterval {
                    start: start.clone(),
                    end: end.clone(),
                });
            }
            #[allow(clippy::cast_precision_loss)] // Counts are far below f64 mantissa limits
            let density = distinct.len() as f64 / nt_length as f64;

            intervals.push(IntervalRecord {
                start_node: start.clone(),
                end_node: end.clone(),
                ref_start: reference_path.position_of(start)?.end() + 1,
                ref_end: reference_path.position_of(end)?.start - 1,
                n_distinct_variants: distinct.len(),
                n_contributing_paths,
                nt_length,
                density,
            });
        }
        debug!(
            "{} interval pairs considered, {} emitted",
            n_considered,
            intervals.len()
        );

        Ok(DiversityReport {
            histogram: common.histogram,
            n_nodes: self.graph.n_nodes(),
            n_paths: self.graph.n_paths(),
            n_common_nodes: common.names.len(),
            n_ordered_nodes: ordered.len(),
            n_considered,
            intervals,
        })
    }
}
