//! Site analytics gateway backed by the portal REST API

use std::sync::Arc;

use async_trait::async_trait;
use portico_core::AnalyticsGateway;
use portico_domain::{AnalyticsPeriod, AnalyticsSummary, ExcludedIps, IpLookup, Result};

use super::client::PortalClient;

/// Gateway for the analytics endpoints
pub struct AnalyticsApi {
    client: Arc<PortalClient>,
}

impl AnalyticsApi {
    /// Create a gateway over an existing client
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsGateway for AnalyticsApi {
    async fn summary(&self, period: AnalyticsPeriod) -> Result<AnalyticsSummary> {
        let path = format!("/analytics/summary?period={}", period);
        Ok(self.client.get(&path).await?)
    }

    async fn excluded_ips(&self) -> Result<ExcludedIps> {
        Ok(self.client.get("/analytics/excluded-ips").await?)
    }

    async fn set_excluded_ips(&self, ips: &ExcludedIps) -> Result<ExcludedIps> {
        Ok(self.client.put("/analytics/excluded-ips", ips).await?)
    }

    async fn my_ip(&self) -> Result<IpLookup> {
        Ok(self.client.get("/analytics/my-ip").await?)
    }
}
