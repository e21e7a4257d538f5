//! Provider factory functions and metadata.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::HostedZoneProvider;
use crate::types::{ProviderCredentials, ProviderMetadata, ProviderType};

#[cfg(feature = "route53")]
use crate::providers::Route53Provider;

/// Creates a [`HostedZoneProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
///
/// # Examples
///
/// ```rust,no_run
/// use zoneclaim_provider::{create_provider, ProviderCredentials};
///
/// let credentials = ProviderCredentials::route53("AKIA...", "secret", None).unwrap();
/// let provider = create_provider(credentials).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn HostedZoneProvider>> {
    match credentials {
        #[cfg(feature = "route53")]
        ProviderCredentials::Route53 {
            access_key_id,
            secret_access_key,
            session_token,
        } => Ok(Arc::new(
            Route53Provider::builder(access_key_id, secret_access_key)
                .session_token(session_token)
                .build(),
        )),
    }
}

/// Static metadata for one provider type, available before credentials exist.
pub fn provider_metadata(provider: ProviderType) -> ProviderMetadata {
    match provider {
        #[cfg(feature = "route53")]
        ProviderType::Route53 => Route53Provider::metadata(),
    }
}
