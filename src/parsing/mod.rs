//! Parsers that turn a line-oriented graph description into the core model.
//!
//! The only input format is the GFA subset the analysis needs:
//!
//! - **`S` records**: `S <name> <sequence>` declares a segment whose size
//!   is the sequence length
//! - **`P` records**: `P <name> <ref,ref,...>` declares a path; each ref
//!   carries an optional trailing `+`/`-` orientation marker
//!
//! Every other record type is ignored. Input may be plain text or
//! gzip-compressed.

pub mod gfa;
