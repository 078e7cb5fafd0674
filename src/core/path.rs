use std::collections::{HashMap, HashSet};

use crate::core::node::{Node, PositionedNode};
use crate::core::GraphError;

/// One haplotype's ordered traversal of the graph.
///
/// Nodes are stored in traversal order together with their 1-based
/// nucleotide offsets. The name index maps each node name to its *last*
/// occurrence, so lookups on a looping path resolve to one canonical
/// visit.
#[derive(Debug, Clone, Default)]
pub struct Path {
    /// Path name (unique within a graph)
    pub name: String,

    nodes: Vec<PositionedNode>,
    index: HashMap<String, usize>,
}

impl Path {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a node at the given 1-based offset.
    ///
    /// The caller supplies monotonically increasing offsets; nothing is
    /// checked here.
    pub fn add(&mut self, node: &Node, start: u64) {
        self.index.insert(node.name.clone(), self.nodes.len());
        self.nodes.push(PositionedNode::new(node, start));
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn has_all<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().all(|name| self.has(name))
    }

    /// Positioned occurrence of a node on this path (the last visit when
    /// the path loops).
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if the path never visits the
    /// node.
    pub fn position_of(&self, name: &str) -> Result<&PositionedNode, GraphError> {
        self.index
            .get(name)
            .map(|&i| &self.nodes[i])
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    /// Reorder an arbitrary collection of node names to follow this
    /// path's traversal.
    ///
    /// Each requested name is emitted at most once, at its first
    /// occurrence on the path; names the path never visits are dropped.
    #[must_use]
    pub fn order(&self, names: &[String]) -> Vec<String> {
        let mut remaining: HashSet<&str> = names.iter().map(String::as_str).collect();
        let mut ordered = Vec::with_capacity(remaining.len());
        for node in &self.nodes {
            // Remove on first hit so a loop cannot emit the name again
            if remaining.remove(node.name.as_str()) {
                ordered.push(node.name.clone());
            }
        }
        ordered
    }

    /// Names of the nodes lying strictly between the two endpoints, in
    /// traversal order. Empty when the endpoints are identical or out of
    /// traversal order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if either endpoint is absent
    /// from this path.
    pub fn sub_sequence(&self, start: &str, end: &str) -> Result<Vec<String>, GraphError> {
        let from = self.index_of(start)?;
        let to = self.index_of(end)?;
        if from >= to {
            return Ok(Vec::new());
        }
        Ok(self.nodes[from + 1..to]
            .iter()
            .map(|node| node.name.clone())
            .collect())
    }

    /// Signed number of traversal steps from `start` to `end`; zero or
    /// negative when the endpoints coincide or are out of order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if either endpoint is absent
    /// from this path.
    #[allow(clippy::cast_possible_wrap)] // Path lengths are far below i64::MAX
    pub fn node_distance(&self, start: &str, end: &str) -> Result<i64, GraphError> {
        let from = self.index_of(start)?;
        let to = self.index_of(end)?;
        Ok(to as i64 - from as i64)
    }

    /// Total nucleotides strictly between the two endpoints; zero when
    /// they touch or are out of order.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::NodeNotFound` if either endpoint is absent
    /// from this path.
    pub fn nt_distance(&self, start: &str, end: &str) -> Result<u64, GraphError> {
        let from = self.index_of(start)?;
        let to = self.index_of(end)?;
        if from >= to {
            return Ok(0);
        }
        Ok(self.nodes[from + 1..to].iter().map(|node| node.size).sum())
    }

    /// Number of nodes in the traversal, counting repeated visits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total nucleotide length of the traversal.
    #[must_use]
    pub fn nt_len(&self) -> u64 {
        self.nodes.iter().map(|node| node.size).sum()
    }

    /// Distinct node names visited by this path, in no particular order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    fn index_of(&self, name: &str) -> Result<usize, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a path from (name, size) pairs with a running 1-based offset.
    fn path_from(nodes: &[(&str, u64)]) -> Path {
        let mut path = Path::new("p");
        let mut offset = 1;
        for (name, size) in nodes {
            path.add(&Node::new(*name, *size), offset);
            offset += size;
        }
        path
    }

    #[test]
    fn test_offsets_are_one_based_and_contiguous() {
        let path = path_from(&[("a", 4), ("b", 2), ("c", 3)]);
        let a = path.position_of("a").unwrap();
        assert_eq!((a.start, a.end()), (1, 4));
        let b = path.position_of("b").unwrap();
        assert_eq!((b.start, b.end()), (5, 6));
        let c = path.position_of("c").unwrap();
        assert_eq!((c.start, c.end()), (7, 9));
    }

    #[test]
    fn test_has_and_has_all() {
        let path = path_from(&[("a", 1), ("b", 1)]);
        assert!(path.has("a"));
        assert!(!path.has("z"));
        assert!(path.has_all(["a", "b"]));
        assert!(!path.has_all(["a", "z"]));
    }

    #[test]
    fn test_position_of_missing_node() {
        let path = path_from(&[("a", 1)]);
        assert!(matches!(
            path.position_of("z"),
            Err(GraphError::NodeNotFound(name)) if name == "z"
        ));
    }

    #[test]
    fn test_index_keeps_last_occurrence() {
        // a starts at 1, loops back at 7
        let path = path_from(&[("a", 2), ("b", 4), ("a", 2)]);
        let a = path.position_of("a").unwrap();
        assert_eq!((a.start, a.end()), (7, 8));
    }

    #[test]
    fn test_order_follows_traversal() {
        let path = path_from(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        let names = vec!["d".to_string(), "b".to_string(), "a".to_string()];
        assert_eq!(path.order(&names), ["a", "b", "d"]);
    }

    #[test]
    fn test_order_emits_looped_name_once_at_first_occurrence() {
        let path = path_from(&[("a", 1), ("b", 1), ("a", 1), ("c", 1)]);
        let names = vec!["a".to_string(), "c".to_string()];
        assert_eq!(path.order(&names), ["a", "c"]);
    }

    #[test]
    fn test_order_drops_unvisited_names() {
        let path = path_from(&[("a", 1), ("b", 1)]);
        let names = vec!["b".to_string(), "z".to_string()];
        assert_eq!(path.order(&names), ["b"]);
    }

    #[test]
    fn test_sub_sequence_strictly_between() {
        let path = path_from(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        assert_eq!(path.sub_sequence("a", "d").unwrap(), ["b", "c"]);
        assert_eq!(path.sub_sequence("a", "b").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_sub_sequence_inverted_or_equal_is_empty() {
        let path = path_from(&[("a", 1), ("b", 1), ("c", 1)]);
        assert!(path.sub_sequence("c", "a").unwrap().is_empty());
        assert!(path.sub_sequence("b", "b").unwrap().is_empty());
    }

    #[test]
    fn test_sub_sequence_missing_endpoint() {
        let path = path_from(&[("a", 1), ("b", 1)]);
        assert!(path.sub_sequence("a", "z").is_err());
    }

    #[test]
    fn test_node_distance_matches_sub_sequence_length() {
        let path = path_from(&[("a", 1), ("b", 1), ("c", 1), ("d", 1), ("e", 1)]);
        let distance = path.node_distance("b", "e").unwrap();
        let between = path.sub_sequence("b", "e").unwrap();
        assert_eq!(between.len() as i64, distance - 1);
    }

    #[test]
    fn test_node_distance_is_signed() {
        let path = path_from(&[("a", 1), ("b", 1), ("c", 1)]);
        assert_eq!(path.node_distance("c", "a").unwrap(), -2);
        assert_eq!(path.node_distance("b", "b").unwrap(), 0);
    }

    #[test]
    fn test_nt_distance_sums_intervening_sizes() {
        let path = path_from(&[("a", 4), ("b", 2), ("c", 3), ("d", 5)]);
        assert_eq!(path.nt_distance("a", "d").unwrap(), 5);
        assert_eq!(path.nt_distance("a", "b").unwrap(), 0);
        assert_eq!(path.nt_distance("d", "a").unwrap(), 0);
    }

    #[test]
    fn test_traversal_totals() {
        let path = path_from(&[("a", 4), ("b", 2), ("a", 4)]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.nt_len(), 10);
        assert!(!path.is_empty());
    }
}
