//! End-to-end claim workflow

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::confirmation::confirm_start;
use crate::services::{AcquisitionRun, NameserverResolver, ServiceContext, TakeoverStateChecker};
use crate::types::{AcquisitionSettings, ClaimedZone, Domain};
use crate::utils::CancellationFlag;

/// What the operator asked for.
#[derive(Debug, Clone)]
pub struct ClaimRequest {
    pub domain: Domain,
    /// Explicit target nameservers. Empty means look them up in WHOIS.
    pub name_servers: Vec<String>,
    /// Proceed even when NS records still resolve.
    pub force: bool,
    /// Skip the start confirmation.
    pub assume_yes: bool,
    pub settings: AcquisitionSettings,
}

/// Runs the gates in order, then the acquisition loop:
/// resolve target, validate marker, check live NS, connect, confirm, acquire.
///
/// No provider call is made until the first three gates pass.
pub struct ClaimWorkflow {
    ctx: Arc<ServiceContext>,
}

impl ClaimWorkflow {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn run(
        &self,
        request: &ClaimRequest,
        cancel: CancellationFlag,
    ) -> CoreResult<ClaimedZone> {
        let metadata = self.ctx.connector.metadata();

        let resolver = NameserverResolver::new(self.ctx.whois.clone(), self.ctx.progress.clone());
        let target = resolver
            .resolve_target(
                &request.domain,
                &request.name_servers,
                &metadata.delegation_marker,
            )
            .await?;

        TakeoverStateChecker::new(self.ctx.ns_probe.clone(), self.ctx.progress.clone())
            .check(&request.domain, request.force)
            .await?;

        Self::check_cancelled(&cancel)?;
        let provider = self.ctx.connector.connect().await?;

        Self::check_cancelled(&cancel)?;
        if request.assume_yes {
            log::debug!("Start confirmation skipped");
        } else {
            confirm_start(self.ctx.decisions.as_ref(), &request.domain, &target).await?;
        }

        AcquisitionRun::new(
            provider,
            self.ctx.decisions.clone(),
            self.ctx.progress.clone(),
            cancel,
            request.settings.clone(),
            request.domain.clone(),
            target,
        )
        .run()
        .await
    }

    /// Ctrl-C before the first create: nothing exists yet, so nothing is outstanding.
    fn check_cancelled(cancel: &CancellationFlag) -> CoreResult<()> {
        if cancel.is_cancelled() {
            log::warn!("Interrupted before any hosted zone was created");
            return Err(CoreError::Interrupted {
                outstanding: Vec::new(),
            });
        }
        Ok(())
    }
}
