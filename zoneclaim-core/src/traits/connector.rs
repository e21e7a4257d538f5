//! Provider connection trait

use std::sync::Arc;

use async_trait::async_trait;
use zoneclaim_provider::{HostedZoneProvider, ProviderMetadata};

use crate::error::CoreResult;

/// Produces an authenticated provider session.
///
/// Credentials are read in [`connect`](Self::connect), which the workflow
/// calls only after the takeover gate.
#[async_trait]
pub trait ProviderConnector: Send + Sync {
    /// Static metadata, available before credentials are loaded.
    fn metadata(&self) -> ProviderMetadata;

    /// Load credentials, build the provider and verify the credentials are accepted.
    async fn connect(&self) -> CoreResult<Arc<dyn HostedZoneProvider>>;
}
