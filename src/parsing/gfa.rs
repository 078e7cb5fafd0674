use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::info;

use crate::core::{Graph, GraphError, Node};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("path '{path}' references unknown segment '{segment}'")]
    UnknownSegment { path: String, segment: String },
}

/// Parse a GFA file into a graph. Files with a `.gz` extension are
/// transparently decompressed.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the parse
/// errors documented on [`parse_reader`].
pub fn parse_file(path: &Path) -> Result<Graph, ParseError> {
    let file = File::open(path)?;
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        parse_reader(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        parse_reader(BufReader::new(file))
    }
}

/// Parse GFA records from a buffered reader.
///
/// Only `S` (segment) and `P` (path) records are interpreted; headers,
/// links, and every other record type are ignored. Path construction is
/// deferred until the whole input is read, so records may appear in any
/// order.
///
/// # Errors
///
/// Returns `ParseError::MalformedRecord` for a record missing its
/// fields, or `ParseError::UnknownSegment` for a path referencing a
/// segment no `S` record declared.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    let mut pending_paths: Vec<(String, Vec<String>)> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("S") => {
                let name = fields
                    .next()
                    .ok_or_else(|| malformed(line_num, "segment record is missing a name"))?;
                let sequence = fields
                    .next()
                    .ok_or_else(|| malformed(line_num, "segment record is missing a sequence"))?;
                graph.insert_node(Node::new(name, sequence.len() as u64));
            }
            Some("P") => {
                let name = fields
                    .next()
                    .ok_or_else(|| malformed(line_num, "path record is missing a name"))?;
                let refs = fields.next().ok_or_else(|| {
                    malformed(line_num, "path record is missing its segment list")
                })?;
                let node_names = split_segment_refs(refs, line_num)?;
                pending_paths.push((name.to_string(), node_names));
            }
            _ => {}
        }
    }

    for (name, node_names) in pending_paths {
        graph.insert_path(&name, &node_names).map_err(|err| {
            let segment = match err {
                GraphError::NodeNotFound(segment) | GraphError::PathNotFound(segment) => segment,
            };
            ParseError::UnknownSegment {
                path: name.clone(),
                segment,
            }
        })?;
    }

    info!(
        "parsed {} segments and {} paths",
        graph.n_nodes(),
        graph.n_paths()
    );
    Ok(graph)
}

/// Split a comma-separated segment list, stripping the optional trailing
/// orientation marker from each reference.
fn split_segment_refs(refs: &str, line_num: usize) -> Result<Vec<String>, ParseError> {
    refs.split(',')
        .map(|segment_ref| {
            let segment_ref = segment_ref.trim();
            let name = segment_ref
                .strip_suffix(['+', '-'])
                .unwrap_or(segment_ref);
            if name.is_empty() {
                Err(malformed(line_num, "empty segment reference in path"))
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}

fn malformed(line: usize, reason: &str) -> ParseError {
    ParseError::MalformedRecord {
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const GRAPH: &str = "S\ts1\tACGT\nS\ts2\tAC\nS\ts3\tGGG\nP\tref\ts1+,s2+,s3+\t*\nP\talt\ts1+,s3-\t*\n";

    #[test]
    fn test_parse_segments_and_paths() {
        let graph = parse_reader(GRAPH.as_bytes()).unwrap();
        assert_eq!(graph.n_nodes(), 3);
        assert_eq!(graph.n_paths(), 2);

        let reference = graph.path("ref").unwrap();
        assert_eq!(reference.len(), 3);
        assert_eq!(reference.nt_len(), 9);
        assert_eq!(reference.position_of("s2").unwrap().start, 5);
    }

    #[test]
    fn test_orientation_markers_are_stripped() {
        let graph = parse_reader(GRAPH.as_bytes()).unwrap();
        let alt = graph.path("alt").unwrap();
        assert!(alt.has_all(["s1", "s3"]));
    }

    #[test]
    fn test_unknown_record_types_are_ignored() {
        let text = "H\tVN:Z:1.0\nS\ts1\tACGT\nL\ts1\t+\ts1\t+\t0M\nP\tp\ts1+\t*\n";
        let graph = parse_reader(text.as_bytes()).unwrap();
        assert_eq!(graph.n_nodes(), 1);
        assert_eq!(graph.n_paths(), 1);
    }

    #[test]
    fn test_path_records_may_precede_segments() {
        let text = "P\tp\ts1+,s2+\t*\nS\ts1\tAC\nS\ts2\tGT\n";
        let graph = parse_reader(text.as_bytes()).unwrap();
        assert_eq!(graph.path("p").unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_segment_reference_fails() {
        let text = "S\ts1\tAC\nP\tp\ts1+,ghost+\t*\n";
        let err = parse_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownSegment { path, segment } if path == "p" && segment == "ghost"
        ));
    }

    #[test]
    fn test_short_segment_record_fails() {
        let err = parse_reader("S\ts1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedRecord { line: 1, .. }
        ));
    }

    #[test]
    fn test_short_path_record_fails() {
        let err = parse_reader("S\ts1\tAC\nP\tp\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedRecord { line: 2, .. }
        ));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "\nS\ts1\tAC\n\nP\tp\ts1+\t*\n";
        let graph = parse_reader(text.as_bytes()).unwrap();
        assert_eq!(graph.n_nodes(), 1);
    }

    #[test]
    fn test_gzipped_input() {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(GRAPH.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let graph = parse_reader(BufReader::new(MultiGzDecoder::new(&compressed[..]))).unwrap();
        assert_eq!(graph.n_nodes(), 3);
        assert_eq!(graph.n_paths(), 2);
    }

    #[test]
    fn test_parse_file_with_gz_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.gfa.gz");
        let mut encoder = flate2::write::GzEncoder::new(
            File::create(&path).unwrap(),
            flate2::Compression::default(),
        );
        encoder.write_all(GRAPH.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let graph = parse_file(&path).unwrap();
        assert_eq!(graph.n_nodes(), 3);
    }

    #[test]
    fn test_parse_file_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.gfa");
        std::fs::write(&path, GRAPH).unwrap();

        let graph = parse_file(&path).unwrap();
        assert_eq!(graph.n_paths(), 2);
    }
}
