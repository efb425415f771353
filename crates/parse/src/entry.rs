//! Column-entry splitting and field extraction.
//!
//! A hop line body holds one entry per probe: either the void marker `*`
//! or an optional `fqdn (ipv4)? [asn]?` preamble followed by an RTT
//! reading. The splitter enumerates entries in document order; the
//! extractor pulls the individual fields out of one non-void entry.

use thiserror::Error;

use crate::patterns;
use crate::VOID_ASN;

/// Field-level failure inside a single column entry.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("no rtt reading")]
    MissingRtt,

    #[error("bad rtt reading \"{text}\": {source}")]
    BadRtt {
        text: String,
        source: std::num::ParseFloatError,
    },
}

/// Raw fields of one column entry, before carry-over resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFields {
    pub fqdn: String,
    pub ip: String,
    pub asn: String,
    pub rtt: f32,
}

/// Enumerate the column entries of a hop line, left to right.
///
/// The hop-number prefix never matches and is skipped implicitly. Void
/// probes appear as `"*"` entries so that callers can keep column
/// indices aligned with the source line.
pub fn column_entries(line: &str) -> Vec<&str> {
    patterns::COLUMN_ENTRY
        .find_iter(line)
        .map(|m| m.as_str())
        .collect()
}

/// Extract `(fqdn, ip, asn, rtt)` from one non-void column entry.
///
/// The fqdn slot may hold a bare IPv4 when name resolution was off; the
/// caller promotes it to the ip slot in that case. A `[*]` ASN body is
/// normalized to an empty token. Pure and stateless.
pub fn extract_entry(entry: &str) -> Result<EntryFields, EntryError> {
    let fqdn = patterns::FQDN
        .find(entry)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let ip = patterns::IPV4_BRACKETED
        .find(entry)
        .and_then(|brackets| patterns::IPV4.find(brackets.as_str()))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let asn = patterns::ASN_BRACKETED
        .find(entry)
        .and_then(|brackets| patterns::ASN.find(brackets.as_str()))
        .map(|m| m.as_str())
        .filter(|body| *body != VOID_ASN)
        .unwrap_or_default()
        .to_string();

    let phrase = patterns::RTT_MS.find(entry).ok_or(EntryError::MissingRtt)?;
    let reading = patterns::RTT
        .find(phrase.as_str())
        .ok_or(EntryError::MissingRtt)?;
    let rtt = reading
        .as_str()
        .parse::<f32>()
        .map_err(|source| EntryError::BadRtt {
            text: reading.as_str().to_string(),
            source,
        })?;

    Ok(EntryFields { fqdn, ip, asn, rtt })
}
