//! Creation reference generation
//!
//! The provider deduplicates zone creation on the caller reference, so every
//! create in a run needs a fresh one. Format:
//! `zoneclaim-<domain>-<UTC timestamp, microseconds>-<sequence>`.

use chrono::{DateTime, Utc};

use crate::types::Domain;

/// Provider limit on reference length.
pub const MAX_REFERENCE_LEN: usize = 128;

const REFERENCE_PREFIX: &str = "zoneclaim";
const MAX_DOMAIN_PART: usize = 60;

/// Produces unique, time-ordered creation references for one domain.
#[derive(Debug, Clone)]
pub struct CreationReferenceGenerator {
    domain: String,
    sequence: u64,
}

impl CreationReferenceGenerator {
    #[must_use]
    pub fn new(domain: &Domain) -> Self {
        Self {
            domain: domain.as_str().to_string(),
            sequence: 0,
        }
    }

    /// Next reference stamped with the current time.
    pub fn next_reference(&mut self) -> String {
        self.next_at(Utc::now())
    }

    /// Next reference stamped with `now`. The sequence number keeps references
    /// distinct even when the clock does not advance.
    pub fn next_at(&mut self, now: DateTime<Utc>) -> String {
        self.sequence += 1;
        let suffix = format!(
            "-{}-{}",
            now.format("%Y%m%dT%H%M%S%.6fZ"),
            self.sequence
        );
        let room = MAX_REFERENCE_LEN
            .saturating_sub(REFERENCE_PREFIX.len() + 1 + suffix.len())
            .min(MAX_DOMAIN_PART);
        // 域名已是 ASCII，按字节截断安全
        let domain = &self.domain[..self.domain.len().min(room)];
        format!("{REFERENCE_PREFIX}-{domain}{suffix}")
    }
}
