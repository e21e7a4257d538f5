//! 进度事件

use std::time::Duration;

use serde::Serialize;

use super::{AcquisitionAttempt, DelegationState, NameserverSet, NameserverSource};

/// Observable step of a run, delivered to a
/// [`ProgressSink`](crate::traits::ProgressSink).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ProgressEvent {
    /// Target nameserver set decided.
    NameserversResolved {
        source: NameserverSource,
        name_servers: NameserverSet,
    },
    /// Live NS state checked.
    DelegationChecked { state: DelegationState },
    /// A candidate zone was created.
    ZoneCreated {
        ordinal: u32,
        zone_id: String,
        delegation: NameserverSet,
    },
    /// A candidate was compared against the target and handled.
    AttemptFinished { attempt: AcquisitionAttempt },
    /// A zone was deleted (or was already gone).
    ZoneDeleted { zone_id: String },
    /// A delete was throttled; the loop pauses for `backoff`.
    DeleteThrottled {
        zone_id: String,
        #[serde(with = "duration_secs")]
        backoff: Duration,
    },
    /// Cleanup gave up on these zones.
    StaleZones { zone_ids: Vec<String> },
    /// Non-fatal condition the operator should see.
    Warning { message: String },
}

mod duration_secs {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }
}
