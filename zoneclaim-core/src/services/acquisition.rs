//! Hosted zone acquisition loop
//!
//! Creates hosted zones one at a time until the provider assigns one whose
//! delegation set shares a nameserver with the target. Every rejected zone is
//! deleted again; a throttled delete leaves the zone pending for a later pass.

use std::sync::Arc;

use zoneclaim_provider::{CreateHostedZoneRequest, HostedZoneProvider, ProviderError};

use crate::error::{CoreError, CoreResult};
use crate::services::confirmation::confirm_cleanup;
use crate::traits::{DecisionProvider, ProgressSink};
use crate::types::{
    AcquisitionAttempt, AcquisitionSettings, AttemptOutcome, ClaimedZone, Domain, HostedZone,
    NameserverSet, ProgressEvent, ZoneLedger, ZoneState,
};
use crate::utils::{CancellationFlag, CreationReferenceGenerator};

/// How a deletion pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassOutcome {
    /// Every pending zone was handled.
    Completed,
    /// A delete was throttled; the pass stopped after the backoff.
    Throttled,
}

/// One acquisition run against one domain.
///
/// Owns the [`ZoneLedger`]: every zone created here is tracked until it is
/// claimed, deleted, or reported stale.
pub struct AcquisitionRun {
    provider: Arc<dyn HostedZoneProvider>,
    decisions: Arc<dyn DecisionProvider>,
    progress: Arc<dyn ProgressSink>,
    cancel: CancellationFlag,
    settings: AcquisitionSettings,
    domain: Domain,
    target: NameserverSet,
    references: CreationReferenceGenerator,
    ledger: ZoneLedger,
    attempts: Vec<AcquisitionAttempt>,
    attempted: u32,
}

impl AcquisitionRun {
    #[must_use]
    pub fn new(
        provider: Arc<dyn HostedZoneProvider>,
        decisions: Arc<dyn DecisionProvider>,
        progress: Arc<dyn ProgressSink>,
        cancel: CancellationFlag,
        settings: AcquisitionSettings,
        domain: Domain,
        target: NameserverSet,
    ) -> Self {
        Self {
            provider,
            decisions,
            progress,
            cancel,
            settings,
            references: CreationReferenceGenerator::new(&domain),
            domain,
            target,
            ledger: ZoneLedger::new(),
            attempts: Vec::new(),
            attempted: 0,
        }
    }

    pub fn ledger(&self) -> &ZoneLedger {
        &self.ledger
    }

    pub fn attempts(&self) -> &[AcquisitionAttempt] {
        &self.attempts
    }

    /// Run until a zone is claimed, the operator interrupts, the attempt bound
    /// is hit, or a provider call fails.
    pub async fn run(&mut self) -> CoreResult<ClaimedZone> {
        log::info!(
            "Acquiring a hosted zone for {} delegated to [{}]",
            self.domain,
            self.target
        );

        loop {
            if self.cancel.is_cancelled() {
                return Err(self.interrupted().await);
            }

            if let Some(max) = self.settings.max_attempts
                && self.attempted >= max
            {
                log::warn!("Giving up after {max} attempt(s)");
                self.cleanup().await;
                return Err(CoreError::AttemptsExhausted {
                    attempts: self.attempted,
                    outstanding: self.ledger.outstanding(),
                });
            }

            self.attempted += 1;
            let ordinal = self.attempted;
            let zone = self.create_candidate(ordinal).await?;

            let matched = zone.delegation.intersection(&self.target);
            if !matched.is_empty() {
                self.ledger.mark_claimed(&zone.id);
                self.finish_attempt(ordinal, &zone, AttemptOutcome::Claimed);
                log::info!(
                    "Attempt {ordinal}: hosted zone {} matches on [{matched}]",
                    zone.id
                );
                self.cleanup().await;
                return Ok(ClaimedZone {
                    zone,
                    matched,
                    attempts: ordinal,
                    stale: self.ledger.outstanding(),
                });
            }

            log::info!(
                "Attempt {ordinal}: hosted zone {} got [{}], no match",
                zone.id,
                zone.delegation
            );
            if let Err(e) = self.deletion_pass(Some(&zone.id)).await {
                self.give_up_pending();
                return Err(e);
            }
            let outcome = match self.ledger.state_of(&zone.id) {
                Some(ZoneState::Deleted) => AttemptOutcome::Failed,
                _ => AttemptOutcome::Throttled,
            };
            self.finish_attempt(ordinal, &zone, outcome);
        }
    }

    async fn create_candidate(&mut self, ordinal: u32) -> CoreResult<HostedZone> {
        let reference = self.references.next_reference();
        let request = CreateHostedZoneRequest {
            name: self.domain.to_string(),
            reference: reference.clone(),
            comment: Some(self.settings.comment.clone()).filter(|c| !c.is_empty()),
        };
        log::debug!("Attempt {ordinal}: creating hosted zone (reference {reference})");

        let created = match self.provider.create_hosted_zone(&request).await {
            Ok(created) => created,
            Err(source) => {
                log::error!("Attempt {ordinal}: create failed: {source}");
                return Err(CoreError::AcquisitionAborted {
                    source,
                    outstanding: self.give_up_pending(),
                });
            }
        };

        let zone = HostedZone::from_provider(created, reference);
        self.ledger.record(zone.clone());
        self.progress.on_event(&ProgressEvent::ZoneCreated {
            ordinal,
            zone_id: zone.id.clone(),
            delegation: zone.delegation.clone(),
        });
        Ok(zone)
    }

    fn finish_attempt(&mut self, ordinal: u32, zone: &HostedZone, outcome: AttemptOutcome) {
        let attempt = AcquisitionAttempt {
            ordinal,
            zone_id: zone.id.clone(),
            outcome,
            delegation: zone.delegation.clone(),
        };
        self.progress.on_event(&ProgressEvent::AttemptFinished {
            attempt: attempt.clone(),
        });
        self.attempts.push(attempt);
    }

    /// Delete pending zones, `first` ahead of the rest, then the others in creation order.
    ///
    /// Stops at the first throttled delete after sleeping the backoff. A zone
    /// the provider no longer has counts as deleted. Any other failure aborts.
    async fn deletion_pass(&mut self, first: Option<&str>) -> CoreResult<PassOutcome> {
        let mut queue = self.ledger.pending_ids();
        if let Some(first) = first
            && let Some(pos) = queue.iter().position(|id| id == first)
        {
            let id = queue.remove(pos);
            queue.insert(0, id);
        }

        for zone_id in queue {
            match self.provider.delete_hosted_zone(&zone_id).await {
                Ok(()) => {
                    log::info!("Deleted hosted zone {zone_id}");
                    self.zone_deleted(zone_id);
                }
                Err(ProviderError::HostedZoneNotFound { .. }) => {
                    log::warn!("Hosted zone {zone_id} was already gone");
                    self.zone_deleted(zone_id);
                }
                Err(e) if e.is_throttled() => {
                    let backoff = self.settings.throttle_backoff;
                    log::warn!("Deleting {zone_id} was throttled; pausing {backoff:?}");
                    self.progress.on_event(&ProgressEvent::DeleteThrottled { zone_id, backoff });
                    tokio::time::sleep(backoff).await;
                    return Ok(PassOutcome::Throttled);
                }
                Err(source) => {
                    log::error!("Deleting {zone_id} failed: {source}");
                    return Err(CoreError::DeleteFailed {
                        zone_id,
                        source,
                        outstanding: self.ledger.outstanding(),
                    });
                }
            }
        }
        Ok(PassOutcome::Completed)
    }

    fn zone_deleted(&mut self, zone_id: String) {
        self.ledger.mark_deleted(&zone_id);
        self.progress.on_event(&ProgressEvent::ZoneDeleted { zone_id });
    }

    /// Bounded cleanup: up to `cleanup_rounds` passes, then whatever is left
    /// is reported stale. Delete failures end the cleanup early.
    async fn cleanup(&mut self) {
        for round in 1..=self.settings.cleanup_rounds {
            if self.ledger.pending_ids().is_empty() {
                break;
            }
            log::debug!("Cleanup pass {round}/{}", self.settings.cleanup_rounds);
            match self.deletion_pass(None).await {
                Ok(PassOutcome::Completed) => break,
                Ok(PassOutcome::Throttled) => {}
                Err(e) => {
                    log::error!("Cleanup stopped: {e}");
                    break;
                }
            }
        }

        self.give_up_pending();
    }

    /// Report every zone still pending as stale; returns the outstanding ids.
    fn give_up_pending(&mut self) -> Vec<String> {
        let stale = self.ledger.report_stale();
        if !stale.is_empty() {
            log::warn!(
                "{} hosted zone(s) left behind: {}",
                stale.len(),
                stale.join(", ")
            );
            self.progress
                .on_event(&ProgressEvent::StaleZones { zone_ids: stale });
        }
        self.ledger.outstanding()
    }

    async fn interrupted(&mut self) -> CoreError {
        let pending = self.ledger.pending_ids();
        log::warn!(
            "Interrupted after {} attempt(s), {} zone(s) pending deletion",
            self.attempted,
            pending.len()
        );
        if !pending.is_empty() && confirm_cleanup(self.decisions.as_ref(), pending.len()).await {
            self.cleanup().await;
        } else {
            self.give_up_pending();
        }
        CoreError::Interrupted {
            outstanding: self.ledger.outstanding(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use super::*;
    use crate::test_utils::{
        MockProvider, RecordingProgress, ScriptedDecisions, domain, hosted_zone, not_found,
        permission_denied, throttled,
    };

    const TARGET_NS: &str = "ns1.awsdns-00.com";

    fn target() -> NameserverSet {
        NameserverSet::from_names([TARGET_NS])
    }

    fn settings() -> AcquisitionSettings {
        AcquisitionSettings {
            throttle_backoff: Duration::from_secs(3),
            cleanup_rounds: 3,
            ..AcquisitionSettings::default()
        }
    }

    struct Harness {
        provider: Arc<MockProvider>,
        decisions: Arc<ScriptedDecisions>,
        progress: Arc<RecordingProgress>,
        cancel: CancellationFlag,
    }

    impl Harness {
        fn new(provider: MockProvider, answers: &[&str]) -> Self {
            Self {
                provider: Arc::new(provider),
                decisions: Arc::new(ScriptedDecisions::new(answers.iter().copied())),
                progress: Arc::new(RecordingProgress::new()),
                cancel: CancellationFlag::new(),
            }
        }

        fn run(&self, settings: AcquisitionSettings) -> AcquisitionRun {
            AcquisitionRun::new(
                self.provider.clone(),
                self.decisions.clone(),
                self.progress.clone(),
                self.cancel.clone(),
                settings,
                domain(),
                target(),
            )
        }
    }

    /// 每个创建出来的 zone 最终都已删除、被认领或被报告为 stale
    fn assert_ledger_settled(run: &AcquisitionRun) {
        assert!(run.ledger().pending_ids().is_empty());
        assert!(run.ledger().count(ZoneState::Claimed) <= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_candidate_is_claimed() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &["ns1.awsdns-00.com.", "ns9.awsdns-09.net"])));
        let h = Harness::new(provider, &[]);
        let mut run = h.run(settings());

        let claimed = run.run().await.unwrap();

        assert_eq!(claimed.zone.id, "Z2");
        assert_eq!(claimed.attempts, 2);
        assert_eq!(claimed.matched.to_vec(), [TARGET_NS]);
        assert!(claimed.stale.is_empty());
        assert_eq!(h.provider.deleted().await, ["Z1"]);
        assert_eq!(run.ledger().state_of("Z1"), Some(ZoneState::Deleted));
        assert_eq!(run.ledger().state_of("Z2"), Some(ZoneState::Claimed));
        assert_eq!(
            run.attempts().iter().map(|a| a.outcome).collect::<Vec<_>>(),
            [AttemptOutcome::Failed, AttemptOutcome::Claimed]
        );
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_references_are_unique_per_create() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &["ns6.other.com"])))
            .with_create(Ok(hosted_zone("Z3", &[TARGET_NS])));
        let h = Harness::new(provider, &[]);
        h.run(settings()).run().await.unwrap();

        let requests = h.provider.create_requests().await;
        assert_eq!(requests.len(), 3);
        let references: HashSet<_> = requests.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(references.len(), 3);
        assert!(requests.iter().all(|r| r.name == "victim.example.com"));
        assert!(
            requests
                .iter()
                .all(|r| r.comment.as_deref() == Some("zoneclaim delegation check"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttled_delete_retried_after_backoff() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &["ns6.other.com"])))
            .with_create(Ok(hosted_zone("Z3", &[TARGET_NS])))
            .with_delete(Err(throttled()));
        let h = Harness::new(provider, &[]);
        let mut run = h.run(settings());

        let started = tokio::time::Instant::now();
        let claimed = run.run().await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(3));
        assert_eq!(claimed.zone.id, "Z3");
        // Z1 第一次删除被限流，在 Z2 删除后的清扫中删除
        assert_eq!(h.provider.deleted().await, ["Z2", "Z1"]);
        assert_eq!(h.provider.delete_calls().await, 3);
        assert_eq!(run.attempts()[0].outcome, AttemptOutcome::Throttled);
        assert_eq!(run.attempts()[1].outcome, AttemptOutcome::Failed);
        assert!(
            h.progress
                .events()
                .iter()
                .any(|e| matches!(e, ProgressEvent::DeleteThrottled { zone_id, .. } if zone_id == "Z1"))
        );
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_claim_cleans_up_pending_zones() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &[TARGET_NS])))
            .with_delete(Err(throttled()));
        let h = Harness::new(provider, &[]);
        let mut run = h.run(settings());

        let claimed = run.run().await.unwrap();

        assert_eq!(claimed.zone.id, "Z2");
        assert!(claimed.stale.is_empty());
        assert_eq!(h.provider.deleted().await, ["Z1"]);
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_throttling_reports_stale() {
        let mut provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &[TARGET_NS])));
        for _ in 0..10 {
            provider = provider.with_delete(Err(throttled()));
        }
        let h = Harness::new(provider, &[]);
        let mut run = h.run(settings());

        let claimed = run.run().await.unwrap();

        assert_eq!(claimed.stale, ["Z1"]);
        assert_eq!(run.ledger().state_of("Z1"), Some(ZoneState::Stale));
        // 1 次循环内删除 + 3 轮清理
        assert_eq!(h.provider.delete_calls().await, 4);
        assert!(
            h.progress
                .events()
                .iter()
                .any(|e| matches!(e, ProgressEvent::StaleZones { .. }))
        );
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_zone_counts_as_deleted() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &[TARGET_NS])))
            .with_delete(Err(not_found("Z1")));
        let h = Harness::new(provider, &[]);
        let mut run = h.run(settings());

        run.run().await.unwrap();
        assert_eq!(run.ledger().state_of("Z1"), Some(ZoneState::Deleted));
        assert_eq!(run.attempts()[0].outcome, AttemptOutcome::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_failure_aborts() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_delete(Err(permission_denied()));
        let h = Harness::new(provider, &[]);
        let mut run = h.run(settings());

        let err = run.run().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::DeleteFailed { ref zone_id, ref outstanding, .. }
                if zone_id == "Z1" && outstanding == &["Z1"]
        ));
        assert_eq!(h.provider.create_calls().await, 1);
        assert_eq!(run.ledger().state_of("Z1"), Some(ZoneState::Stale));
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_failure_aborts_without_retry() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Err(throttled()))
            .with_delete(Err(throttled()));
        let h = Harness::new(provider, &[]);
        let mut run = h.run(settings());

        let err = run.run().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::AcquisitionAborted { ref outstanding, .. } if outstanding == &["Z1"]
        ));
        assert_eq!(h.provider.create_calls().await, 2);
        assert_eq!(run.ledger().state_of("Z1"), Some(ZoneState::Stale));
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempt_bound() {
        let provider = MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &["ns6.other.com"])))
            .with_create(Ok(hosted_zone("Z3", &[TARGET_NS])));
        let h = Harness::new(provider, &[]);
        let mut run = h.run(AcquisitionSettings {
            max_attempts: Some(2),
            ..settings()
        });

        let err = run.run().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::AttemptsExhausted { attempts: 2, ref outstanding } if outstanding.is_empty()
        ));
        assert_eq!(h.provider.create_calls().await, 2);
        assert_ledger_settled(&run);
    }

    fn three_pending() -> MockProvider {
        MockProvider::new()
            .with_create(Ok(hosted_zone("Z1", &["ns5.other.com"])))
            .with_create(Ok(hosted_zone("Z2", &["ns6.other.com"])))
            .with_create(Ok(hosted_zone("Z3", &["ns7.other.com"])))
            .with_delete(Err(throttled()))
            .with_delete(Err(throttled()))
            .with_delete(Err(throttled()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_with_cleanup() {
        let h = Harness::new(three_pending(), &["Y"]);
        h.provider.cancel_after_creates(3, h.cancel.clone()).await;
        let mut run = h.run(settings());

        let err = run.run().await.unwrap_err();

        assert!(matches!(err, CoreError::Interrupted { ref outstanding } if outstanding.is_empty()));
        assert_eq!(h.provider.deleted().await, ["Z1", "Z2", "Z3"]);
        assert_eq!(h.decisions.prompts().await.len(), 1);
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_without_cleanup() {
        let h = Harness::new(three_pending(), &["n"]);
        h.provider.cancel_after_creates(3, h.cancel.clone()).await;
        let mut run = h.run(settings());

        let err = run.run().await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Interrupted { ref outstanding } if outstanding == &["Z1", "Z2", "Z3"]
        ));
        assert!(h.provider.deleted().await.is_empty());
        assert_eq!(h.provider.delete_calls().await, 3);
        assert_eq!(run.ledger().count(ZoneState::Stale), 3);
        assert!(
            h.progress
                .events()
                .iter()
                .any(|e| matches!(e, ProgressEvent::StaleZones { zone_ids } if zone_ids.len() == 3))
        );
        assert_ledger_settled(&run);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_with_nothing_pending_skips_prompt() {
        let h = Harness::new(MockProvider::new(), &[]);
        h.cancel.cancel();
        let mut run = h.run(settings());

        let err = run.run().await.unwrap_err();
        assert!(matches!(err, CoreError::Interrupted { ref outstanding } if outstanding.is_empty()));
        assert!(h.decisions.prompts().await.is_empty());
        assert_eq!(h.provider.create_calls().await, 0);
    }
}
