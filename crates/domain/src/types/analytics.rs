//! Site analytics types

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Reporting window for the analytics summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum AnalyticsPeriod {
    Day,
    Week,
    Month,
}

crate::impl_portal_status_conversions!(AnalyticsPeriod {
    Day => "day",
    Week => "week",
    Month => "month",
});

/// Visit counts for one reporting window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AnalyticsSummary {
    pub period: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub total_visits: i64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub unique_visitors: i64,
    #[serde(default)]
    pub top_pages: Vec<PageCount>,
}

/// Visit count for a single page path
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PageCount {
    pub path: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub count: i64,
}

/// IP addresses excluded from analytics collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ExcludedIps {
    pub ips: Vec<String>,
}

/// The caller's own public IP, for the exclusion shortcut
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct IpLookup {
    pub ip: String,
}
