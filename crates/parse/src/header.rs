//! Header-line parsing.

use crate::patterns;

/// Extract `(target_fqdn, target_ip)` from the first line of traceroute
/// output, e.g.
///
/// ```text
/// traceroute to google.com (172.217.0.238), 30 hops max, 60 byte packets
/// ```
///
/// Never fails; an absent field yields an empty string in its slot.
pub fn parse_header_line(line: &str) -> (String, String) {
    let fqdn = patterns::FQDN
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let ip = patterns::IPV4_BRACKETED
        .find(line)
        .and_then(|brackets| patterns::IPV4.find(brackets.as_str()))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    (fqdn, ip)
}
