use std::collections::HashMap;

use crate::core::node::Node;
use crate::core::path::Path;
use crate::core::GraphError;

/// The in-memory variation graph: all segments plus all path traversals.
///
/// Built once by the parser and read-only afterwards. Every node name a
/// path mentions must already be in the node table; `insert_path`
/// enforces this.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: HashMap<String, Node>,
    paths: HashMap<String, Path>,
}

/// Result of a common-node scan: the qualifying names plus the
/// membership histogram they were drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonNodes {
    /// Node names whose membership count met the threshold, sorted.
    pub names: Vec<String>,

    /// `histogram[k]` is the number of nodes contained in exactly `k`
    /// distinct paths, for `k` in `0..=n_paths`.
    pub histogram: Vec<usize>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a segment. A repeated name replaces the earlier record.
    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.name.clone(), node);
    }

    /// Build and register a path from an ordered list of node names,
    /// assigning 1-based nucleotide offsets as the traversal advances.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if any name is missing from
    /// the node table; the path is not registered in that case.
    pub fn insert_path(&mut self, name: impl Into<String>, node_names: &[String]) -> Result<(), GraphError> {
        let name = name.into();
        let mut path = Path::new(name.clone());
        let mut offset: u64 = 1;
        for node_name in node_names {
            let node = self
                .nodes
                .get(node_name)
                .ok_or_else(|| GraphError::NodeNotFound(node_name.clone()))?;
            path.add(node, offset);
            offset += node.size;
        }
        self.paths.insert(name, path);
        Ok(())
    }

    /// Look up a path by name.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::PathNotFound` if no such path exists.
    pub fn path(&self, name: &str) -> Result<&Path, GraphError> {
        self.paths
            .get(name)
            .ok_or_else(|| GraphError::PathNotFound(name.to_string()))
    }

    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn n_paths(&self) -> usize {
        self.paths.len()
    }

    /// Count, for every node, the number of distinct paths containing it,
    /// and return the names whose count is at least `min_paths` together
    /// with the full membership histogram.
    ///
    /// A path looping through a node several times still contributes one
    /// to that node's count. A threshold equal to `n_paths()` selects the
    /// nodes present in every path; 1 selects those present in any.
    #[must_use]
    pub fn common_nodes(&self, min_paths: usize) -> CommonNodes {
        let mut membership: HashMap<&str, usize> =
            self.nodes.keys().map(|name| (name.as_str(), 0)).collect();
        for path in self.paths.values() {
            // node_names is already deduplicated per path
            for name in path.node_names() {
                if let Some(count) = membership.get_mut(name) {
                    *count += 1;
                }
            }
        }

        let mut histogram = vec![0usize; self.paths.len() + 1];
        for &count in membership.values() {
            histogram[count] += 1;
        }

        let mut names: Vec<String> = membership
            .iter()
            .filter(|(_, &count)| count >= min_paths)
            .map(|(&name, _)| name.to_string())
            .collect();
        names.sort_unstable();

        CommonNodes { names, histogram }
    }

    /// Extract, for every path containing both endpoints, the node names
    /// lying strictly between them.
    ///
    /// Paths lacking either endpoint are skipped: a node common to most
    /// paths need not be on all of them. Paths are visited in name order
    /// so repeated runs yield identical results.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` only if an endpoint lookup
    /// fails on a path that claimed to contain it, which the `has_all`
    /// pre-check rules out.
    pub fn sub_paths(&self, start: &str, end: &str) -> Result<Vec<Vec<String>>, GraphError> {
        let mut path_names: Vec<&String> = self.paths.keys().collect();
        path_names.sort_unstable();

        let mut variants = Vec::new();
        for name in path_names {
            let path = &self.paths[name];
            if path.has_all([start, end]) {
                variants.push(path.sub_sequence(start, end)?);
            }
        }
        Ok(variants)
    }
}
