//! zoneclaim Core Library
//!
//! Workflow for re-claiming a dangling Route 53 delegation:
//! - resolve the target nameservers (explicit or WHOIS) and check they belong to the provider
//! - confirm via live DNS that the domain is dangling
//! - create hosted zones until one is assigned an overlapping delegation set, deleting the rest
//!
//! Network lookups, credentials and operator interaction are injected through
//! the traits in [`traits`], so the workflow runs the same under tests and the CLI.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ClaimRequest, ClaimWorkflow, ServiceContext};
pub use traits::{DecisionProvider, NsProbe, ProgressSink, ProviderConnector, WhoisSource};
pub use utils::CancellationFlag;
