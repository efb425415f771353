//! Metrics-accumulator seam.
//!
//! Parsed hop records become tagged time-series points here. The
//! `Accumulator` trait is the boundary the gather loop writes through;
//! the agent ships points as JSON lines, tests capture them in memory.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

/// One measurement field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

pub type Tags = BTreeMap<String, String>;
pub type Fields = BTreeMap<String, FieldValue>;

/// A tagged time-series point.
#[derive(Debug, Clone, Serialize)]
pub struct Point {
    pub measurement: String,
    pub tags: Tags,
    pub fields: Fields,
    pub timestamp: DateTime<Utc>,
}

/// Sink for measurements and gather-time errors.
pub trait Accumulator: Send + Sync {
    fn add_fields(&self, measurement: &str, fields: Fields, tags: Tags);
    fn add_error(&self, error: &dyn std::error::Error);
}

/// Captures points in memory. Used by tests and anything that wants to
/// inspect a gather cycle after the fact.
#[derive(Default)]
pub struct MemoryAccumulator {
    points: Mutex<Vec<Point>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> Vec<Point> {
        self.points.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    /// Points for one measurement, in accumulation order.
    pub fn points_for(&self, measurement: &str) -> Vec<Point> {
        self.points
            .lock()
            .iter()
            .filter(|p| p.measurement == measurement)
            .cloned()
            .collect()
    }
}

impl Accumulator for MemoryAccumulator {
    fn add_fields(&self, measurement: &str, fields: Fields, tags: Tags) {
        self.points.lock().push(Point {
            measurement: measurement.to_string(),
            tags,
            fields,
            timestamp: Utc::now(),
        });
    }

    fn add_error(&self, error: &dyn std::error::Error) {
        self.errors.lock().push(error.to_string());
    }
}

/// Ships each point as one JSON line on stdout; errors go to the log.
pub struct StdoutAccumulator;

impl Accumulator for StdoutAccumulator {
    fn add_fields(&self, measurement: &str, fields: Fields, tags: Tags) {
        let point = Point {
            measurement: measurement.to_string(),
            tags,
            fields,
            timestamp: Utc::now(),
        };
        match serde_json::to_string(&point) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!("Failed to serialize point: {}", e),
        }
    }

    fn add_error(&self, error: &dyn std::error::Error) {
        tracing::error!("Gather error: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_accumulator_captures_points() {
        let acc = MemoryAccumulator::new();
        let mut tags = Tags::new();
        tags.insert("target_fqdn".to_string(), "google.com".to_string());
        let mut fields = Fields::new();
        fields.insert("number_of_hops".to_string(), FieldValue::Integer(6));

        acc.add_fields("traceroute", fields, tags);

        let points = acc.points_for("traceroute");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].tags["target_fqdn"], "google.com");
        assert_eq!(points[0].fields["number_of_hops"], FieldValue::Integer(6));
    }

    #[test]
    fn test_memory_accumulator_captures_errors() {
        let acc = MemoryAccumulator::new();
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such host");
        acc.add_error(&err);
        assert_eq!(acc.errors(), vec!["no such host"]);
    }

    #[test]
    fn test_point_serializes_flat_field_values() {
        let mut fields = Fields::new();
        fields.insert("hop_rtt".to_string(), FieldValue::Float(1.48));
        fields.insert("hop_fqdn".to_string(), FieldValue::Text("a.net".into()));
        let point = Point {
            measurement: "traceroute_hop_data".to_string(),
            tags: Tags::new(),
            fields,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"hop_rtt\":1.48"));
        assert!(json.contains("\"hop_fqdn\":\"a.net\""));
    }
}
