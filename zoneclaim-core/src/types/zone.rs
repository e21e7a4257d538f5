//! Hosted zone 与获取尝试

use serde::Serialize;
use zoneclaim_provider::ProviderHostedZone;

use super::NameserverSet;

/// A hosted zone created during this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Provider zone identifier (no `/hostedzone/` prefix).
    pub id: String,
    /// Zone apex.
    pub name: String,
    /// Delegation set the provider assigned.
    pub delegation: NameserverSet,
    /// Creation reference the zone was requested with.
    pub reference: String,
}

impl HostedZone {
    pub fn from_provider(zone: ProviderHostedZone, reference: String) -> Self {
        Self {
            delegation: NameserverSet::from_names(&zone.name_servers),
            id: zone.id,
            name: zone.name,
            reference,
        }
    }
}

/// How one create attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptOutcome {
    /// Delegation intersected the target; the zone is kept.
    Claimed,
    /// No intersection; the zone was deleted.
    Failed,
    /// No intersection, and deleting it was throttled. The zone stays pending.
    Throttled,
}

/// One iteration of the acquisition loop.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquisitionAttempt {
    /// 1-based attempt number.
    pub ordinal: u32,
    pub zone_id: String,
    pub outcome: AttemptOutcome,
    /// Delegation set of the candidate zone.
    pub delegation: NameserverSet,
}

/// Successful result of an acquisition run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedZone {
    pub zone: HostedZone,
    /// Nameservers shared by the zone's delegation and the target set.
    pub matched: NameserverSet,
    /// Number of create attempts, including the successful one.
    pub attempts: u32,
    /// Zones that could not be deleted during final cleanup.
    pub stale: Vec<String>,
}
