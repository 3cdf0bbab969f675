//! Payment flow commands
//!
//! The provider redirect itself happens outside; these commands only open a
//! session for a payable project and verify the outcome when the redirect
//! returns.

use std::time::Instant;

use portico_domain::{PaymentSession, PaymentVerification, Result};
use serde::Serialize;
use tracing::{info, warn};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::commands::workspace::{reload, WorkspaceView};
use crate::context::AppContext;
use crate::utils::access::visible_project;
use crate::utils::logging::{error_label, log_command_execution};

/// Verification result together with the refreshed workspace
///
/// Payment settles server-side, so the snapshot taken before verification is
/// stale by definition; the caller gets the fresh one in the same response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PaymentOutcome {
    pub verification: PaymentVerification,
    pub view: WorkspaceView,
}

/// Start the payment flow for a project's invoice.
///
/// Only projects in `pending-payment` status and visible to the viewer can
/// open a session; the returned URL is where the embedding UI redirects.
pub async fn start_payment(ctx: &AppContext, project_id: &str) -> Result<PaymentSession> {
    let command_name = "payments::start_payment";
    let start = Instant::now();

    info!(command = command_name, project_id, "Starting payment");

    let result = open_session(ctx, project_id).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

/// Verify a payment session after the provider redirect returns.
pub async fn verify_payment(ctx: &AppContext, session_id: &str) -> Result<PaymentOutcome> {
    let command_name = "payments::verify_payment";
    let start = Instant::now();

    info!(command = command_name, session_id, "Verifying payment");

    let result = confirm_session(ctx, session_id).await;
    let elapsed = start.elapsed();
    let success = result.is_ok();

    if let Err(err) = result.as_ref() {
        warn!(command = command_name, error = error_label(err), "Command failed");
    }
    log_command_execution(command_name, elapsed, success);

    result
}

async fn open_session(ctx: &AppContext, project_id: &str) -> Result<PaymentSession> {
    let project = {
        let session = ctx.session();
        visible_project(&ctx.viewer, &session.records.projects, project_id)?.clone()
    };

    ctx.payments.start(&project).await
}

async fn confirm_session(ctx: &AppContext, session_id: &str) -> Result<PaymentOutcome> {
    let verification = ctx.payments.verify(session_id).await?;
    let view = reload(ctx).await?;

    Ok(PaymentOutcome { verification, view })
}
