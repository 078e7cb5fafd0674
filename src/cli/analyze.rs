use std::io::{self, Write};

use crate::analysis::{DiversityEngine, DiversityReport};
use crate::cli::Cli;
use crate::parsing::gfa;

/// Execute the analysis: parse the graph, run the pipeline, print the
/// summary and the interval table.
///
/// # Errors
///
/// Returns an error if the graph cannot be parsed, the reference path
/// does not exist, or a considered interval spans zero nucleotides. The
/// table is only written once the whole pipeline has succeeded.
pub fn run(args: &Cli, verbose: bool) -> anyhow::Result<()> {
    let graph = gfa::parse_file(&args.graph)?;

    if verbose {
        eprintln!(
            "Parsed {} segments and {} paths from {}",
            graph.n_nodes(),
            graph.n_paths(),
            args.graph.display()
        );
        let reference = graph.path(&args.reference)?;
        eprintln!(
            "Reference path '{}' spans {} nodes and {} nucleotides",
            reference.name,
            reference.len(),
            reference.nt_len()
        );
    }

    let engine = DiversityEngine::new(&graph);
    #[allow(clippy::cast_possible_truncation)] // Path counts fit usize on supported targets
    let report = engine.run(&args.reference, args.min_paths as usize)?;

    print_summary(&report);
    write_table(io::stdout().lock(), &report)?;
    Ok(())
}

/// Membership histogram and run counts, on stderr.
fn print_summary(report: &DiversityReport) {
    eprintln!("Paths per node distribution:");
    for (membership, n_nodes) in report.histogram.iter().enumerate() {
        if *n_nodes > 0 {
            eprintln!("\t{membership} -> {n_nodes}");
        }
    }
    eprintln!(
        "{} nodes, {} paths, {} common nodes ({} on the reference)",
        report.n_nodes, report.n_paths, report.n_common_nodes, report.n_ordered_nodes
    );
    eprintln!(
        "{} intervals considered, {} emitted",
        report.n_considered,
        report.intervals.len()
    );
}

/// Write the interval table as tab-separated rows.
fn write_table<W: Write>(mut out: W, report: &DiversityReport) -> io::Result<()> {
    writeln!(
        out,
        "node_start\tnode_end\tref_start_nt\tref_end_nt\tn_distinct_variants\tn_contributing_paths\tnt_length\tdensity"
    )?;
    for interval in &report.intervals {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.6}",
            interval.start_node,
            interval.end_node,
            interval.ref_start,
            interval.ref_end,
            interval.n_distinct_variants,
            interval.n_contributing_paths,
            interval.nt_length,
            interval.density
        )?;
    }
    Ok(())
}
