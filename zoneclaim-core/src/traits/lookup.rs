//! Network lookup traits

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{DelegationState, Domain};

/// WHOIS lookup.
#[async_trait]
pub trait WhoisSource: Send + Sync {
    /// Name servers listed in the WHOIS record.
    ///
    /// `Ok(None)` means the registry has no record for the domain.
    /// An empty list means a record exists but carries no name servers.
    async fn name_servers(&self, domain: &Domain) -> CoreResult<Option<Vec<String>>>;
}

/// Live NS query.
#[async_trait]
pub trait NsProbe: Send + Sync {
    /// Classify the domain's current NS state.
    ///
    /// Transport failures (timeout, no reachable resolver) are
    /// [`CoreError::DnsInconclusive`](crate::CoreError::DnsInconclusive).
    async fn probe(&self, domain: &Domain) -> CoreResult<DelegationState>;
}
