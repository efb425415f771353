//! Gather — fan out over configured targets, run traceroutes, and map
//! parsed hop records onto accumulator points.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use trace_parse::parse_traceroute;

use crate::acc::{Accumulator, FieldValue, Fields, Tags};
use crate::config::PluginConfig;
use crate::runner::{traceroute_args, HostTraceroute};

/// Summary measurement: one point per target per cycle.
pub const TRACEROUTE_MEASUREMENT: &str = "traceroute";
/// Per-probe measurement: one point per responding hop column.
pub const HOP_MEASUREMENT: &str = "traceroute_hop_data";

/// Run one gather cycle over every configured target concurrently.
pub async fn gather(
    config: &PluginConfig,
    tracer: Arc<dyn HostTraceroute>,
    acc: Arc<dyn Accumulator>,
) {
    let mut tasks = JoinSet::new();
    for url in &config.urls {
        let target_fqdn = url.clone();
        let timeout_secs = config.response_timeout_secs;
        let tracer = Arc::clone(&tracer);
        let acc = Arc::clone(&acc);
        tasks.spawn(async move {
            gather_host(target_fqdn, timeout_secs, tracer, acc).await;
        });
    }
    while tasks.join_next().await.is_some() {}
}

/// Traceroute one target and accumulate its points.
///
/// A host that cannot be resolved or probed still yields a summary
/// point, with `result_code = 1`, so downstream dashboards see the
/// failure rather than a gap.
async fn gather_host(
    target_fqdn: String,
    timeout_secs: f64,
    tracer: Arc<dyn HostTraceroute>,
    acc: Arc<dyn Accumulator>,
) {
    let mut tags = Tags::new();
    tags.insert("target_fqdn".to_string(), target_fqdn.clone());
    let mut fields = Fields::new();

    if let Err(e) = tokio::net::lookup_host((target_fqdn.as_str(), 0u16)).await {
        warn!("DNS lookup failed for {}: {}", target_fqdn, e);
        acc.add_error(&e);
        fields.insert("result_code".to_string(), FieldValue::Integer(1));
        acc.add_fields(TRACEROUTE_MEASUREMENT, fields, tags);
        return;
    }

    let args = traceroute_args(&target_fqdn);
    let raw = match tracer.run(timeout_secs, &args).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("traceroute failed for {}: {}", target_fqdn, e);
            acc.add_error(&e);
            fields.insert("result_code".to_string(), FieldValue::Integer(1));
            acc.add_fields(TRACEROUTE_MEASUREMENT, fields, tags);
            return;
        }
    };

    let (parsed, parse_err) = parse_traceroute(&raw);
    if let Some(e) = parse_err {
        // Hops collected before the malformed line are still emitted.
        acc.add_error(&e);
    }

    debug!(
        "parsed {} hop records over {} hops for {}",
        parsed.hops.len(),
        parsed.number_of_hops,
        target_fqdn
    );

    tags.insert("target_ip".to_string(), parsed.target_ip.clone());

    for hop in &parsed.hops {
        let mut hop_tags = Tags::new();
        hop_tags.insert("target_fqdn".to_string(), target_fqdn.clone());
        hop_tags.insert("target_ip".to_string(), parsed.target_ip.clone());
        hop_tags.insert("hop_number".to_string(), hop.hop_number.to_string());
        hop_tags.insert("column_number".to_string(), hop.column_num.to_string());

        let mut hop_fields = Fields::new();
        hop_fields.insert("hop_fqdn".to_string(), FieldValue::from(hop.fqdn.clone()));
        hop_fields.insert("hop_ip".to_string(), FieldValue::from(hop.ip.clone()));
        hop_fields.insert("hop_asn".to_string(), FieldValue::from(hop.asn.clone()));
        hop_fields.insert("hop_rtt".to_string(), FieldValue::from(hop.rtt));

        acc.add_fields(HOP_MEASUREMENT, hop_fields, hop_tags);
    }

    fields.insert(
        "number_of_hops".to_string(),
        FieldValue::Integer(i64::from(parsed.number_of_hops)),
    );
    fields.insert("result_code".to_string(), FieldValue::Integer(0));
    acc.add_fields(TRACEROUTE_MEASUREMENT, fields, tags);
}
