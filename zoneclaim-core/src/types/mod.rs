//! 类型定义模块

mod delegation;
mod domain;
mod ledger;
mod nameserver;
mod progress;
mod settings;
mod zone;

pub use delegation::{DelegationState, NameserverSource};
pub use domain::Domain;
pub use ledger::{LedgerEntry, ZoneLedger, ZoneState};
pub use nameserver::NameserverSet;
pub use progress::ProgressEvent;
pub use settings::{
    AcquisitionSettings, DEFAULT_CLEANUP_ROUNDS, DEFAULT_THROTTLE_BACKOFF, DEFAULT_ZONE_COMMENT,
};
pub use zone::{AcquisitionAttempt, AttemptOutcome, ClaimedZone, HostedZone};

// Re-export provider 库的公共类型
pub use zoneclaim_provider::{
    CreateHostedZoneRequest, ProviderCredentials, ProviderHostedZone, ProviderMetadata,
    ProviderType,
};
