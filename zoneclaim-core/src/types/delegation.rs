//! 线上委派状态

use serde::Serialize;

use super::NameserverSet;

/// Live NS state of the target domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DelegationState {
    /// NS records resolve; the domain is not dangling.
    Delegated { name_servers: NameserverSet },
    /// NXDOMAIN or an empty answer.
    Dangling { response_code: String },
    /// The delegated servers answer SERVFAIL or REFUSED (lame delegation).
    Unresolvable { response_code: String },
}

/// Where the target nameserver set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameserverSource {
    /// `--nameserver` flags.
    Explicit,
    /// The WHOIS record.
    Whois,
}
