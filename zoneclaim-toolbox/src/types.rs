//! Public types returned by toolbox operations.

use serde::{Deserialize, Serialize};

/// Delegation data parsed from a WHOIS response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisResult {
    /// The queried domain (ASCII form).
    pub domain: String,
    /// Whether the registry holds a record for the domain.
    pub found: bool,
    /// Delegated name servers, lowercased and deduplicated, in response order.
    pub name_servers: Vec<String>,
}

/// What a live NS query says about a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NsProbeOutcome {
    /// NS records resolve.
    Delegated {
        /// Nameserver hostnames from the answer, trailing dot stripped.
        name_servers: Vec<String>,
    },
    /// Authoritative negative answer (NXDOMAIN, or NOERROR with an empty answer).
    NoRecord {
        /// Response code from the negative answer.
        response_code: String,
    },
    /// The resolver answered SERVFAIL or REFUSED, as it does for a lame delegation.
    Unresolvable {
        /// Response code the resolver returned.
        response_code: String,
    },
}

/// Result of an NS probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NsProbeResult {
    /// The queried domain.
    pub domain: String,
    /// Classified outcome.
    pub outcome: NsProbeOutcome,
}
