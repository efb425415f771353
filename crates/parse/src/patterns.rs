//! Lexical patterns for traceroute output.
//!
//! Compiled once per process and shared by immutable reference; none of
//! them contains catastrophic-backtracking constructs. IP and ASN tokens
//! are matched in two passes (bracketed form first, then the inner body)
//! so that a bare IPv4 sitting in the fqdn slot is never mistaken for the
//! parenthesized canonical address.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dash/word labels separated by dots with an alphabetic final label,
/// or a bare dotted-quad IPv4.
pub(crate) static FQDN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\w-]+(\.[\w-]+)*(\.[a-z]{2,63}))|(\d+(\.\d+){3})").expect("fqdn pattern")
});

/// `(` + IPv4 + `)`.
pub(crate) static IPV4_BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d+(\.\d+){3}\)").expect("bracketed ipv4 pattern"));

/// Four dot-separated decimal groups.
pub(crate) static IPV4: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+){3}").expect("ipv4 pattern"));

/// Decimal RTT reading followed by its `ms` unit.
pub(crate) static RTT_MS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+\sms").expect("rtt-with-unit pattern"));

/// Bare decimal RTT reading.
pub(crate) static RTT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\d+").expect("rtt pattern"));

/// `[` + asn body + `]`; the body is `*`, or `AS|as`+digits optionally
/// followed by further slash-joined `AS|as`+digits groups.
pub(crate) static ASN_BRACKETED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[(\*|((AS|as)\d+)(/(AS|as)\d+)*)\]").expect("bracketed asn pattern")
});

/// The asn body without its brackets.
pub(crate) static ASN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*|((AS|as)\d+)(/(AS|as)\d+)*").expect("asn pattern"));

/// Run of leading digits (applied after left-trimming the line).
pub(crate) static HOP_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+").expect("hop-number pattern"));

/// One column entry: a lone void marker, or an optional
/// `fqdn (ipv4)? [asn]?` preamble followed by a mandatory RTT reading.
pub(crate) static COLUMN_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\*|(([\w-]+(\.[\w-]+)+)\s(\(\d+(\.\d+){0,3}\))?\s*(\[(\*|((AS|as)\d+)(/(AS|as)\d+)*)\])?\s*)?\d+\.\d+\sms",
    )
    .expect("column-entry pattern")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fqdn_matches_hostname() {
        let m = FQDN.find("traceroute to google.com (172.217.0.238)").unwrap();
        assert_eq!(m.as_str(), "google.com");
    }

    #[test]
    fn test_fqdn_matches_bare_ipv4() {
        let m = FQDN.find("129.250.2.81  186.767 ms").unwrap();
        assert_eq!(m.as_str(), "129.250.2.81");
    }

    #[test]
    fn test_fqdn_prefers_leftmost_hostname() {
        let m = FQDN
            .find("yyz10s03-in-f3.1e100.net (172.217.0.227)  1.480 ms")
            .unwrap();
        assert_eq!(m.as_str(), "yyz10s03-in-f3.1e100.net");
    }

    #[test]
    fn test_ipv4_two_pass_extraction() {
        let line = "54.239.110.174 (54.239.110.152)  27.198 ms";
        let brackets = IPV4_BRACKETED.find(line).unwrap();
        let inner = IPV4.find(brackets.as_str()).unwrap();
        assert_eq!(inner.as_str(), "54.239.110.152");
    }

    #[test]
    fn test_asn_bracketed_variants() {
        for (text, body) in [
            ("[AS34010]", "AS34010"),
            ("[as13768]", "as13768"),
            ("[AS38880/AS38220/AS55803]", "AS38880/AS38220/AS55803"),
            ("[*]", "*"),
        ] {
            let brackets = ASN_BRACKETED.find(text).unwrap();
            let inner = ASN.find(brackets.as_str()).unwrap();
            assert_eq!(inner.as_str(), body, "for {text}");
        }
    }

    #[test]
    fn test_rtt_with_unit() {
        let phrase = RTT_MS.find("f3.1e100.net (172.217.0.227)  1.480 ms").unwrap();
        assert_eq!(phrase.as_str(), "1.480 ms");
        assert_eq!(RTT.find(phrase.as_str()).unwrap().as_str(), "1.480");
    }
}
