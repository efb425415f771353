//! Hop-line parsing.
//!
//! A hop line carries one TTL value and typically three probe columns.
//! Columns that omit the host identity continue the previous column, so
//! the walk threads `(fqdn, ip, asn)` carry-over state across the line.
//! Void probes occupy a column index but produce no record.

use crate::entry::{column_entries, extract_entry, EntryFields};
use crate::model::{HopRecord, ParseError};
use crate::patterns;
use crate::VOID_ENTRY;

/// Parse one hop line into its per-probe records.
///
/// Records collected before the first malformed entry are preserved and
/// returned alongside the error; the walk stops at the offending entry.
pub fn parse_hop_line(line: &str) -> (Vec<HopRecord>, Option<ParseError>) {
    let mut records = Vec::new();

    let hop_number = match find_hop_number(line) {
        Some(n) => n,
        None => return (records, Some(ParseError::malformed(line, "no hop number"))),
    };

    let mut last = EntryFields::default();
    for (column_num, entry) in column_entries(line).into_iter().enumerate() {
        if entry == VOID_ENTRY {
            continue;
        }

        let mut fields = match extract_entry(entry) {
            Ok(fields) => fields,
            Err(e) => return (records, Some(ParseError::malformed(line, e.to_string()))),
        };

        // A column missing both identities continues the previous column.
        // The first column never carries over.
        if fields.fqdn.is_empty() && fields.ip.is_empty() && column_num > 0 {
            fields.fqdn = last.fqdn.clone();
            fields.ip = last.ip.clone();
            fields.asn = last.asn.clone();
        }

        // Bare-IP promotion: the address serves as both identities.
        if fields.ip.is_empty() {
            fields.ip = fields.fqdn.clone();
        }

        last = fields.clone();
        records.push(HopRecord {
            hop_number,
            column_num,
            fqdn: fields.fqdn,
            ip: fields.ip,
            asn: fields.asn,
            rtt: fields.rtt,
        });
    }

    (records, None)
}

/// Parse the hop number opening a (possibly whitespace-padded) hop line.
pub fn find_hop_number(raw_line: &str) -> Option<u32> {
    let line = raw_line.trim();
    patterns::HOP_NUMBER
        .find(line)
        .and_then(|m| m.as_str().parse().ok())
}
