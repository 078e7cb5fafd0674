//! Command-line interface for pansel.
//!
//! ## Usage
//!
//! ```text
//! # Score every interval between nodes shared by at least 5 paths
//! pansel pangenome.gfa GRCh38 5
//!
//! # Gzipped input, with progress details on stderr
//! pansel pangenome.gfa.gz GRCh38 5 --verbose
//! ```
//!
//! The interval table goes to stdout; the membership histogram and the
//! run summary go to stderr, so the table can be piped on its own.

use std::path::PathBuf;

use clap::Parser;

pub mod analyze;

#[derive(Parser)]
#[command(name = "pansel")]
#[command(version)]
#[command(about = "Locate and score structurally divergent regions in a pangenome graph")]
#[command(
    long_about = "pansel reads a pangenome variation graph in GFA format, finds the nodes shared by at least MIN_PATHS paths, and walks them in reference order.\n\nEach interval between two consecutive shared nodes is scored by how many structurally distinct traversals cross it, normalized by its reference nucleotide span. One TSV row per interval is written to stdout."
)]
pub struct Cli {
    /// Graph description in GFA format (may be gzip-compressed)
    pub graph: PathBuf,

    /// Name of the reference path, as declared in the graph
    pub reference: String,

    /// Minimum number of paths a node must belong to before it counts as
    /// shared (1 = present anywhere; the total path count = present everywhere)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub min_paths: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
