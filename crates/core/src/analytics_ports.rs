//! Site analytics port.
//!
//! Read-mostly introspection of visit data plus the excluded-IP list used to
//! keep staff traffic out of the numbers. Collection itself happens
//! elsewhere; this port only reads and configures it.
//!
//! # Example
//!
//! ```no_run
//! use portico_core::AnalyticsGateway;
//! use portico_domain::AnalyticsPeriod;
//!
//! async fn print_weekly(analytics: &impl AnalyticsGateway) {
//!     let summary = analytics.summary(AnalyticsPeriod::Week).await.unwrap();
//!     println!("{} visits this week", summary.total_visits);
//! }
//! ```

use async_trait::async_trait;
use portico_domain::{AnalyticsPeriod, AnalyticsSummary, ExcludedIps, IpLookup, Result};

/// Port for the analytics backend
#[async_trait]
pub trait AnalyticsGateway: Send + Sync {
    /// Visit summary for one reporting window.
    async fn summary(&self, period: AnalyticsPeriod) -> Result<AnalyticsSummary>;

    /// IP addresses currently excluded from collection.
    async fn excluded_ips(&self) -> Result<ExcludedIps>;

    /// Replace the excluded-IP list, returning the stored result.
    async fn set_excluded_ips(&self, ips: &ExcludedIps) -> Result<ExcludedIps>;

    /// The caller's own public IP, for the "exclude my IP" shortcut.
    async fn my_ip(&self) -> Result<IpLookup>;
}
