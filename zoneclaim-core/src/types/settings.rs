//! 获取循环参数

use std::time::Duration;

/// Default pause after a throttled delete.
pub const DEFAULT_THROTTLE_BACKOFF: Duration = Duration::from_secs(3);

/// Default number of deletion passes during cleanup.
pub const DEFAULT_CLEANUP_ROUNDS: u32 = 5;

/// Default comment attached to every created zone.
pub const DEFAULT_ZONE_COMMENT: &str = "zoneclaim delegation check";

/// Tunables for [`AcquisitionRun`](crate::services::AcquisitionRun).
#[derive(Debug, Clone)]
pub struct AcquisitionSettings {
    /// Sleep after a throttled delete before the next iteration.
    pub throttle_backoff: Duration,
    /// Deletion passes attempted when cleaning up (after a claim, interrupt or exhaustion).
    pub cleanup_rounds: u32,
    /// Stop after this many create attempts. `None` runs until claimed or interrupted.
    pub max_attempts: Option<u32>,
    /// Comment stored on created zones.
    pub comment: String,
}

impl Default for AcquisitionSettings {
    fn default() -> Self {
        Self {
            throttle_backoff: DEFAULT_THROTTLE_BACKOFF,
            cleanup_rounds: DEFAULT_CLEANUP_ROUNDS,
            max_attempts: None,
            comment: DEFAULT_ZONE_COMMENT.to_string(),
        }
    }
}
