use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr, PickFirst};
use thiserror::Error;

/// One inspection record for a location, as returned by `GET /reports`.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub unique_id: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub district: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub regional_division: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub number_of_plants: u64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub affected_plants: u64,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_percentage: Option<f64>,
}

impl Report {
    /// Server-provided percentage, or one derived from the plant counts.
    pub fn affected_percentage(&self) -> f64 {
        self.affected_percentage
            .unwrap_or_else(|| percentage_of(self.affected_plants, self.number_of_plants))
    }

    pub fn severity(&self) -> Severity {
        Severity::from_percentage(self.affected_percentage())
    }

    /// Payout for this report at `rate` rupees per affected plant.
    pub fn incentive(&self, rate: u64) -> u64 {
        self.affected_plants.saturating_mul(rate)
    }
}

/// `part / whole * 100` rounded to two decimals, 0 when `whole` is 0.
pub fn percentage_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Decodes a 2xx list body. An empty or non-JSON body (an HTML fallback page
/// from a proxy, say) is treated like `null` and yields an empty list.
pub fn decode_report_list(bytes: &[u8]) -> Vec<Report> {
    if bytes.is_empty() {
        return coerce_report_list(Value::Null);
    }

    match serde_json::from_slice(bytes) {
        Ok(body) => coerce_report_list(body),
        Err(err) => {
            tracing::warn!(bytes = bytes.len(), "report list body is not JSON: {err}");
            coerce_report_list(Value::Null)
        }
    }
}

/// Pulls the `reports` array out of a list response. Anything other than an
/// object with a `reports` array yields an empty list; undecodable entries are
/// dropped.
pub fn coerce_report_list(body: Value) -> Vec<Report> {
    let Value::Object(mut map) = body else {
        tracing::warn!("report list response is not an object");
        return Vec::new();
    };

    let Some(Value::Array(items)) = map.remove("reports") else {
        tracing::warn!("report list response has no reports array");
        return Vec::new();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, item)| match serde_json::from_value::<Report>(item) {
                Ok(report) => Some(report),
                Err(err) => {
                    tracing::warn!(index, "skipping malformed report: {err}");
                    None
                }
            },
        )
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    All,
    Today,
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 5] = [
        TimeRange::All,
        TimeRange::Today,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Year => "This Year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time range: {0}")]
pub struct UnknownTimeRange(pub String);

impl FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == value.trim())
            .ok_or_else(|| UnknownTimeRange(value.to_string()))
    }
}

/// Badge tier for an affected percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    const MEDIUM_FROM: f64 = 30.0;
    const HIGH_FROM: f64 = 50.0;

    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < Self::MEDIUM_FROM {
            Self::Low
        } else if percentage < Self::HIGH_FROM {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn badge_classes(self) -> &'static str {
        match self {
            Self::Low => "bg-green-100 text-green-800",
            Self::Medium => "bg-yellow-100 text-yellow-800",
            Self::High => "bg-red-100 text-red-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_thresholds() {
        assert_eq!(Severity::from_percentage(0.0), Severity::Low);
        assert_eq!(Severity::from_percentage(29.0), Severity::Low);
        assert_eq!(Severity::from_percentage(29.99), Severity::Low);
        assert_eq!(Severity::from_percentage(30.0), Severity::Medium);
        assert_eq!(Severity::from_percentage(49.0), Severity::Medium);
        assert_eq!(Severity::from_percentage(50.0), Severity::High);
        assert_eq!(Severity::from_percentage(100.0), Severity::High);
    }

    #[test]
    fn decodes_full_report() {
        let report: Report = serde_json::from_value(json!({
            "_id": "665f1c",
            "uniqueId": "RPT-0001",
            "fullName": "Nimal Perera",
            "createdAt": "2026-03-14T08:30:00.000Z",
            "province": "Western Province",
            "district": "Gampaha",
            "regionalDivision": "Minuwangoda",
            "numberOfPlants": 100,
            "affectedPlants": 20,
            "affectedPercentage": 20
        }))
        .unwrap();

        assert_eq!(report.id, "665f1c");
        assert_eq!(report.unique_id, "RPT-0001");
        assert_eq!(report.regional_division, "Minuwangoda");
        assert_eq!(report.affected_percentage(), 20.0);
        assert_eq!(report.severity(), Severity::Low);
        assert_eq!(report.incentive(3_000), 60_000);
    }

    #[test]
    fn decodes_lenient_fields() {
        let report: Report = serde_json::from_value(json!({
            "_id": "a1",
            "district": null,
            "numberOfPlants": null,
            "affectedPlants": 3,
            "affectedPercentage": "37.50"
        }))
        .unwrap();

        assert_eq!(report.district, "");
        assert_eq!(report.number_of_plants, 0);
        assert_eq!(report.affected_percentage, Some(37.5));
        assert_eq!(report.severity(), Severity::Medium);
    }

    #[test]
    fn derives_percentage_when_missing() {
        let report: Report = serde_json::from_value(json!({
            "_id": "a2",
            "numberOfPlants": 3,
            "affectedPlants": 2
        }))
        .unwrap();

        assert_eq!(report.affected_percentage, None);
        assert_eq!(report.affected_percentage(), 66.67);
        assert_eq!(report.severity(), Severity::High);
    }

    #[test]
    fn coerces_unexpected_shapes_to_empty() {
        assert!(coerce_report_list(json!({})).is_empty());
        assert!(coerce_report_list(json!({ "reports": null })).is_empty());
        assert!(coerce_report_list(json!({ "reports": "nope" })).is_empty());
        assert!(coerce_report_list(json!([{ "_id": "x" }])).is_empty());
    }

    #[test]
    fn non_json_bodies_decode_to_empty() {
        assert!(decode_report_list(b"").is_empty());
        assert!(decode_report_list(b"<!doctype html><html><body>app</body></html>").is_empty());
        assert!(decode_report_list(b"{\"reports\": [").is_empty());
    }

    #[test]
    fn json_bodies_decode_reports() {
        let reports = decode_report_list(br#"{"reports":[{"_id":"r1","numberOfPlants":4}]}"#);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, "r1");
        assert_eq!(reports[0].number_of_plants, 4);
    }

    #[test]
    fn skips_malformed_entries() {
        let reports = coerce_report_list(json!({
            "reports": [
                { "_id": "ok-1", "numberOfPlants": 10 },
                { "numberOfPlants": 5 },
                { "_id": "ok-2", "affectedPlants": "many" },
                { "_id": "ok-3" }
            ]
        }));

        let ids: Vec<_> = reports.iter().map(|report| report.id.as_str()).collect();
        assert_eq!(ids, vec!["ok-1", "ok-3"]);
    }

    #[test]
    fn time_range_parses_wire_names() {
        assert_eq!("week".parse::<TimeRange>(), Ok(TimeRange::Week));
        assert_eq!(" year ".parse::<TimeRange>(), Ok(TimeRange::Year));
        assert_eq!(
            "fortnight".parse::<TimeRange>(),
            Err(UnknownTimeRange("fortnight".into()))
        );
        assert_eq!(TimeRange::default().to_string(), "all");
        assert_eq!(serde_json::to_value(TimeRange::Month).unwrap(), json!("month"));
    }
}
