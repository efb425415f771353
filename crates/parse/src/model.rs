use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A hop line whose hop number or RTT reading could not be decoded.
    #[error("Hop line \"{line}\" is malformed: {reason}")]
    MalformedHopLine { line: String, reason: String },
}

impl ParseError {
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedHopLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// One record per responding probe column of a hop line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HopRecord {
    /// nth hop from the origin (1-based TTL value).
    pub hop_number: u32,

    /// 0-based index of the probe within its hop line (usually 0..=2).
    pub column_num: usize,

    /// Hostname for this probe, possibly carried over from an earlier
    /// column of the same line. A bare IPv4 when resolution was off.
    pub fqdn: String,

    /// Dotted-quad IPv4. Equal to `fqdn` when the source line gave only
    /// a bare address with no parenthesized form.
    pub ip: String,

    /// AS-number token (`AS13768`, `as13768`, slash-joined multi-AS).
    /// Empty when absent or when the source carried the void marker.
    pub asn: String,

    /// Round-trip time in milliseconds.
    pub rtt: f32,
}

/// The structured form of one whole traceroute capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TracerouteOutput {
    /// Target hostname as it appeared in the header (may be empty).
    pub target_fqdn: String,

    /// Target IPv4 from the header parentheses (may be empty).
    pub target_ip: String,

    /// Count of non-header lines. `-1` signals "no traceroute observed"
    /// (empty input); a header-only capture yields `0`.
    pub number_of_hops: i32,

    /// Hop records in the order encountered.
    pub hops: Vec<HopRecord>,
}
