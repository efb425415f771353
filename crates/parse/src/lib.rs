/// Traceroute output parsing module
///
/// This crate converts the raw text emitted by the host `traceroute`
/// utility into structured, per-probe hop records.
///
/// # Architecture
///
/// - `patterns.rs`: Lexical patterns shared by all stages
/// - `entry.rs`: Column-entry splitting and field extraction
/// - `hop.rs`: Hop-line parsing with per-line carry-over state
/// - `header.rs`: Header-line parsing (target fqdn & ip)
/// - `parse.rs`: Top-level parse over a whole output capture
/// - `model.rs`: Result/record types and the parse error
///
/// # Guarantees
///
/// The parser is a pure transformation: no I/O, no global mutable state,
/// no suspension points. Independent parses may run concurrently without
/// synchronization. A malformed hop line never discards records already
/// collected; they travel alongside the reported error.

pub mod entry;
pub mod header;
pub mod hop;
pub mod model;
pub mod parse;
mod patterns;

// Re-export commonly used types
pub use model::{HopRecord, ParseError, TracerouteOutput};
pub use parse::parse_traceroute;

// Constants
/// Number of header lines preceding the hop table.
pub const HEADER_LINE_LEN: usize = 1;
/// Marker for a probe that received no reply within the wait window.
pub const VOID_ENTRY: &str = "*";
/// Marker for a hop whose AS lookup produced nothing (`[*]`).
pub const VOID_ASN: &str = "*";
