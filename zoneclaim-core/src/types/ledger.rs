//! Zone ledger
//!
//! 记录本次运行创建的每一个 hosted zone 及其生命周期状态，按创建顺序保存。

use serde::Serialize;

use super::HostedZone;

/// Lifecycle state of a created zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneState {
    /// Delegation matched; the zone is kept.
    Claimed,
    /// Created and owed a delete.
    PendingDeletion,
    /// Deleted (or already gone at the provider).
    Deleted,
    /// Gave up deleting; reported to the operator.
    Stale,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    pub zone: HostedZone,
    pub state: ZoneState,
}

/// Every zone created in one run, in creation order.
///
/// At most one entry is ever [`ZoneState::Claimed`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneLedger {
    entries: Vec<LedgerEntry>,
}

impl ZoneLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a freshly created zone. It starts out owed a delete.
    pub fn record(&mut self, zone: HostedZone) {
        log::debug!("Ledger: recorded {}", zone.id);
        self.entries.push(LedgerEntry {
            zone,
            state: ZoneState::PendingDeletion,
        });
    }

    /// Mark `zone_id` claimed. Returns `false` when the zone is unknown or
    /// another zone is already claimed.
    pub fn mark_claimed(&mut self, zone_id: &str) -> bool {
        if self.claimed().is_some() {
            return false;
        }
        self.transition(zone_id, ZoneState::Claimed)
    }

    pub fn mark_deleted(&mut self, zone_id: &str) -> bool {
        self.transition(zone_id, ZoneState::Deleted)
    }

    fn transition(&mut self, zone_id: &str, state: ZoneState) -> bool {
        match self.entries.iter_mut().find(|e| e.zone.id == zone_id) {
            Some(entry) => {
                entry.state = state;
                true
            }
            None => false,
        }
    }

    /// Zones still owed a delete, in creation order.
    #[must_use]
    pub fn pending_ids(&self) -> Vec<String> {
        self.ids_in(|s| s == ZoneState::PendingDeletion)
    }

    /// Zones that still exist and are not the claimed one.
    #[must_use]
    pub fn outstanding(&self) -> Vec<String> {
        self.ids_in(|s| matches!(s, ZoneState::PendingDeletion | ZoneState::Stale))
    }

    /// Give up on every pending zone and return all stale ids.
    pub fn report_stale(&mut self) -> Vec<String> {
        for entry in &mut self.entries {
            if entry.state == ZoneState::PendingDeletion {
                entry.state = ZoneState::Stale;
            }
        }
        self.ids_in(|s| s == ZoneState::Stale)
    }

    #[must_use]
    pub fn claimed(&self) -> Option<&HostedZone> {
        self.entries
            .iter()
            .find(|e| e.state == ZoneState::Claimed)
            .map(|e| &e.zone)
    }

    #[must_use]
    pub fn state_of(&self, zone_id: &str) -> Option<ZoneState> {
        self.entries
            .iter()
            .find(|e| e.zone.id == zone_id)
            .map(|e| e.state)
    }

    #[must_use]
    pub fn count(&self, state: ZoneState) -> usize {
        self.entries.iter().filter(|e| e.state == state).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    fn ids_in(&self, keep: impl Fn(ZoneState) -> bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| keep(e.state))
            .map(|e| e.zone.id.clone())
            .collect()
    }
}
