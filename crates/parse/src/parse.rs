//! Top-level parse over one whole traceroute capture.

use crate::header::parse_header_line;
use crate::hop::parse_hop_line;
use crate::model::{ParseError, TracerouteOutput};
use crate::HEADER_LINE_LEN;

/// Parse raw traceroute output into its structured form.
///
/// Line 0 is the header; every further line is a hop line. The parse
/// stops at the first malformed hop line, returning everything
/// assembled up to that point alongside the error. Empty input is not
/// an error: it yields `number_of_hops == -1`, signalling that no
/// traceroute was observed.
pub fn parse_traceroute(output: &str) -> (TracerouteOutput, Option<ParseError>) {
    let mut result = TracerouteOutput::default();

    let trimmed = output.trim();
    if trimmed.is_empty() {
        result.number_of_hops = -1;
        return (result, None);
    }

    let lines: Vec<&str> = trimmed.split('\n').collect();
    result.number_of_hops = lines.len() as i32 - HEADER_LINE_LEN as i32;

    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            let (target_fqdn, target_ip) = parse_header_line(line);
            result.target_fqdn = target_fqdn;
            result.target_ip = target_ip;
        } else {
            let (records, err) = parse_hop_line(line);
            result.hops.extend(records);
            if let Some(e) = err {
                return (result, Some(e));
            }
        }
    }

    (result, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_signals_no_traceroute() {
        let (result, err) = parse_traceroute("");
        assert!(err.is_none());
        assert_eq!(result.number_of_hops, -1);
        assert!(result.hops.is_empty());
    }

    #[test]
    fn test_header_only_input() {
        let (result, err) =
            parse_traceroute("traceroute to google.com (172.217.0.238), 30 hops max, 60 byte packets\n");
        assert!(err.is_none());
        assert_eq!(result.number_of_hops, 0);
        assert_eq!(result.target_fqdn, "google.com");
        assert_eq!(result.target_ip, "172.217.0.238");
        assert!(result.hops.is_empty());
    }

    #[test]
    fn test_malformed_line_keeps_partial_result() {
        let raw = "\
traceroute to google.com (172.217.0.238), 30 hops max, 60 byte packets
 1  192.168.1.1 (192.168.1.1)  3.092 ms  3.433 ms  3.883 ms
 garbage without a hop number  1.111 ms
 3  10.170.172.14 (10.170.172.14)  11.222 ms  11.412 ms  11.770 ms";
        let (result, err) = parse_traceroute(raw);
        let err = err.unwrap();
        assert!(err.to_string().contains("no hop number"));
        // Hop 1 survived; the walk stopped before hop 3.
        assert_eq!(result.hops.len(), 3);
        assert!(result.hops.iter().all(|h| h.hop_number == 1));
        assert_eq!(result.number_of_hops, 3);
        assert_eq!(result.target_fqdn, "google.com");
    }

    #[test]
    fn test_hop_number_monotonicity_not_enforced() {
        let raw = "\
traceroute to google.com (172.217.0.238), 30 hops max, 60 byte packets
 7  192.168.1.1 (192.168.1.1)  3.092 ms
 2  10.170.172.14 (10.170.172.14)  11.222 ms";
        let (result, err) = parse_traceroute(raw);
        assert!(err.is_none());
        assert_eq!(result.hops[0].hop_number, 7);
        assert_eq!(result.hops[1].hop_number, 2);
    }
}
