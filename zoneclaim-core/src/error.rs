//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use zoneclaim_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Input validation failed (malformed domain, bad flag value)
    #[error("Validation error: {0}")]
    Validation(String),

    /// WHOIS has no record for the domain
    #[error("Domain not found in WHOIS: {0}")]
    DomainNotFound(String),

    /// WHOIS record carries no name servers. Reported as a warning; resolution continues.
    #[error("No name servers found in WHOIS for {0}; pass them with --nameserver")]
    NoNameserversFound(String),

    /// None of the target nameservers belongs to the provider's delegation pool
    #[error("No nameserver contains '{marker}' (got: {name_servers})")]
    NotProviderDelegated { marker: String, name_servers: String },

    /// NS records already resolve
    #[error("{domain} already resolves NS records ({}); use --force to proceed anyway", name_servers.join(" "))]
    AlreadyDelegated {
        domain: String,
        name_servers: Vec<String>,
    },

    /// The NS query failed, so the delegation state is unknown
    #[error("DNS state inconclusive: {0}")]
    DnsInconclusive(String),

    /// WHOIS transport failure
    #[error("WHOIS lookup failed: {0}")]
    Whois(String),

    /// Neither a profile nor static keys were supplied
    #[error("No credentials: pass --profile, or --access and --secret")]
    AuthenticationRequired,

    /// Credentials could not be loaded or were rejected
    #[error("Credential error: {0}")]
    Credentials(String),

    /// The operator answered no at the start confirmation
    #[error("Aborted by operator")]
    OperatorDeclined,

    /// Prompt I/O failed
    #[error("Operator prompt failed: {0}")]
    Operator(String),

    /// Cancelled by the operator mid-run
    #[error("Interrupted; {} hosted zone(s) outstanding", outstanding.len())]
    Interrupted { outstanding: Vec<String> },

    /// A hosted zone could not be deleted
    #[error("Failed to delete hosted zone {zone_id}: {source}")]
    DeleteFailed {
        zone_id: String,
        source: ProviderError,
        outstanding: Vec<String>,
    },

    /// Zone creation failed
    #[error("Acquisition aborted: {source}")]
    AcquisitionAborted {
        source: ProviderError,
        outstanding: Vec<String>,
    },

    /// The attempt bound was reached without a match
    #[error("No matching delegation after {attempts} attempt(s)")]
    AttemptsExhausted {
        attempts: u32,
        outstanding: Vec<String>,
    },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (operator input, domain state, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::DomainNotFound(_)
            | Self::NoNameserversFound(_)
            | Self::NotProviderDelegated { .. }
            | Self::AlreadyDelegated { .. }
            | Self::AuthenticationRequired
            | Self::OperatorDeclined
            | Self::Interrupted { .. }
            | Self::AttemptsExhausted { .. } => true,
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }

    /// Hosted zones created in this run that still exist and are not the claimed zone.
    #[must_use]
    pub fn outstanding(&self) -> &[String] {
        match self {
            Self::Interrupted { outstanding }
            | Self::DeleteFailed { outstanding, .. }
            | Self::AcquisitionAborted { outstanding, .. }
            | Self::AttemptsExhausted { outstanding, .. } => outstanding,
            _ => &[],
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
