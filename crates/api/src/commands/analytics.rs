//! Site analytics commands, admin-only
//!
//! Thin pass-throughs over the analytics gateway. Collection happens
//! elsewhere; every command here rejects non-admin viewers locally before
//! anything leaves the process.

use std::time::Instant;

use portico_domain::{AnalyticsPeriod, AnalyticsSummary, ExcludedIps, IpLookup, Result};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::access::ensure_admin;
use crate::utils::logging::{error_label, log_command_execution};

/// Visit summary for one reporting window.
pub async fn get_analytics_summary(
    ctx: &AppContext,
    period: AnalyticsPeriod,
) -> Result<AnalyticsSummary> {
    let command_name = "analytics::get_analytics_summary";
    let start = Instant::now();

    info!(command = command_name, period = %period, "Fetching analytics summary");

    let result = fetch_summary(ctx, period).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// IP addresses currently excluded from collection.
pub async fn get_excluded_ips(ctx: &AppContext) -> Result<ExcludedIps> {
    let command_name = "analytics::get_excluded_ips";
    let start = Instant::now();

    info!(command = command_name, "Fetching excluded IPs");

    let result = fetch_excluded_ips(ctx).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// Replace the excluded-IP list, returning the stored result.
pub async fn set_excluded_ips(ctx: &AppContext, ips: ExcludedIps) -> Result<ExcludedIps> {
    let command_name = "analytics::set_excluded_ips";
    let start = Instant::now();

    info!(command = command_name, count = ips.ips.len(), "Replacing excluded IPs");

    let result = store_excluded_ips(ctx, &ips).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// The caller's own public IP, for the "exclude my IP" shortcut.
pub async fn get_my_ip(ctx: &AppContext) -> Result<IpLookup> {
    let command_name = "analytics::get_my_ip";
    let start = Instant::now();

    info!(command = command_name, "Looking up caller IP");

    let result = fetch_my_ip(ctx).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn fetch_summary(ctx: &AppContext, period: AnalyticsPeriod) -> Result<AnalyticsSummary> {
    ensure_admin(&ctx.viewer)?;
    ctx.analytics.summary(period).await
}

async fn fetch_excluded_ips(ctx: &AppContext) -> Result<ExcludedIps> {
    ensure_admin(&ctx.viewer)?;
    ctx.analytics.excluded_ips().await
}

async fn store_excluded_ips(ctx: &AppContext, ips: &ExcludedIps) -> Result<ExcludedIps> {
    ensure_admin(&ctx.viewer)?;
    ctx.analytics.set_excluded_ips(ips).await
}

async fn fetch_my_ip(ctx: &AppContext) -> Result<IpLookup> {
    ensure_admin(&ctx.viewer)?;
    ctx.analytics.my_ip().await
}
