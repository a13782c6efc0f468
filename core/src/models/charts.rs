//! Chart request payload and time-series response model.
//!
//! # Design
//! Chart payloads arrive as rows of numbers whose width varies by metric:
//! index 0 is always the epoch timestamp and the caller picks which later
//! index holds the value it wants. A row shorter than the requested index
//! yields `0.0`, never a decode error — upstream routinely ships ragged rows.
//! The `summary` block is a dynamic two-level string-keyed map (e.g.
//! `summary.total["Total Revenue"]`); it is only ever read through
//! [`ChartResponse::summary_total`], which defaults every absent level to
//! `0.0`.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Chart identifiers with their stable wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartName {
    Mrr,
    Revenue,
    ActiveSubscriptions,
    ActiveTrials,
    Arr,
    Proceeds,
    ChurnRate,
}

impl ChartName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartName::Mrr => "mrr",
            ChartName::Revenue => "revenue",
            ChartName::ActiveSubscriptions => "actives",
            ChartName::ActiveTrials => "trials",
            ChartName::Arr => "arr",
            ChartName::Proceeds => "proceeds",
            ChartName::ChurnRate => "churn",
        }
    }
}

/// Sample spacing codes accepted by the charts endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartResolution {
    Day,
    Week,
    Month,
    Year,
}

impl ChartResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartResolution::Day => "day",
            ChartResolution::Week => "week",
            ChartResolution::Month => "month",
            ChartResolution::Year => "year",
        }
    }
}

/// Parameters for one chart fetch. `name` selects the path segment
/// (`me/charts_v2/<name>`) and is never sent as a query parameter; dates are
/// preformatted by the caller's clock source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    pub name: ChartName,
    pub resolution: ChartResolution,
    pub start_date: String,
    pub end_date: String,
}

impl ChartRequest {
    pub(crate) fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert(
            "resolution".to_string(),
            Value::String(self.resolution.as_str().to_string()),
        );
        params.insert(
            "start_date".to_string(),
            Value::String(self.start_date.clone()),
        );
        params.insert("end_date".to_string(), Value::String(self.end_date.clone()));
        params
    }
}

/// One decoded chart sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// Epoch seconds, taken from row index 0.
    pub timestamp: f64,
    pub value: f64,
}

/// Raw chart envelope: positional value rows plus the dynamic summary maps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResponse {
    pub values: Option<Vec<Vec<f64>>>,
    pub summary: Option<HashMap<String, HashMap<String, Option<f64>>>>,
}

impl ChartResponse {
    /// Map each row into a [`ChartPoint`], reading the metric from
    /// `value_index`. Missing indices (timestamp included) default to `0.0`.
    pub fn points(&self, value_index: usize) -> Vec<ChartPoint> {
        self.values
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|row| ChartPoint {
                timestamp: row.first().copied().unwrap_or(0.0),
                value: row.get(value_index).copied().unwrap_or(0.0),
            })
            .collect()
    }

    /// `summary.total[key]`, defaulting to `0.0` when the summary block, the
    /// `total` map, the key, or the value itself is absent.
    pub fn summary_total(&self, key: &str) -> f64 {
        self.summary
            .as_ref()
            .and_then(|summary| summary.get("total"))
            .and_then(|total| total.get(key))
            .copied()
            .flatten()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_default_to_zero() {
        let response: ChartResponse = serde_json::from_str(
            r#"{"values": [[1706745600, 120.5], [1706832000], []]}"#,
        )
        .unwrap();
        let points = response.points(1);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].value, 120.5);
        assert_eq!(points[1].timestamp, 1706832000.0);
        assert_eq!(points[1].value, 0.0);
        assert_eq!(points[2].timestamp, 0.0);
        assert_eq!(points[2].value, 0.0);
    }

    #[test]
    fn value_index_beyond_row_width_is_zero_not_error() {
        let response: ChartResponse =
            serde_json::from_str(r#"{"values": [[1706745600, 1.0, 2.0]]}"#).unwrap();
        let points = response.points(7);
        assert_eq!(points[0].value, 0.0);
    }

    #[test]
    fn missing_values_yield_empty_points() {
        let response: ChartResponse = serde_json::from_str("{}").unwrap();
        assert!(response.points(1).is_empty());
    }

    #[test]
    fn summary_total_reads_by_literal_key() {
        let response: ChartResponse = serde_json::from_str(
            r#"{"summary": {"total": {"Total Revenue": 512.25, "Proceeds": null}}}"#,
        )
        .unwrap();
        assert_eq!(response.summary_total("Total Revenue"), 512.25);
        assert_eq!(response.summary_total("Proceeds"), 0.0);
        assert_eq!(response.summary_total("Refunds"), 0.0);

        let empty: ChartResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.summary_total("Total Revenue"), 0.0);
    }

    #[test]
    fn chart_names_map_to_wire_strings() {
        assert_eq!(ChartName::Mrr.as_str(), "mrr");
        assert_eq!(ChartName::ActiveSubscriptions.as_str(), "actives");
        assert_eq!(ChartResolution::Day.as_str(), "day");
    }
}
