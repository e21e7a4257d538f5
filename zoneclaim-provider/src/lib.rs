//! # zoneclaim-provider
//!
//! Hosted-zone provider abstraction: create and delete hosted zones on a cloud
//! DNS service and read back the delegation set each new zone is assigned.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Amazon Route 53](https://aws.amazon.com/route53/) | `route53` | AWS Signature V4 |
//!
//! ## Feature Flags
//!
//! - **`route53`** *(default)*: the Route 53 provider.
//! - **`rustls`** *(default)*: use rustls for TLS.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zoneclaim_provider::{create_provider, CreateHostedZoneRequest, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ProviderCredentials::route53("AKIA...", "secret", None)?;
//!     let provider = create_provider(credentials)?;
//!
//!     if !provider.validate_credentials().await? {
//!         return Err("credentials rejected".into());
//!     }
//!
//!     let zone = provider
//!         .create_hosted_zone(&CreateHostedZoneRequest {
//!             name: "example.com".to_string(),
//!             reference: "my-unique-reference-1".to_string(),
//!             comment: None,
//!         })
//!         .await?;
//!     println!("{} -> {:?}", zone.id, zone.name_servers);
//!
//!     provider.delete_hosted_zone(&zone.id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Throttled`]: API rate limit hit; the caller decides how to back off
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::HostedZoneNotFound`]: the zone no longer exists
//! - [`ProviderError::NetworkError`]: connectivity issue (retried for idempotent requests)
//!
//! Zone creation is never retried automatically.

mod error;
mod factory;
mod http_client;
mod profile;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use factory::{create_provider, provider_metadata};

// Internal traits (error mapping) are not exported
pub use traits::HostedZoneProvider;

pub use types::{
    CreateHostedZoneRequest, CredentialValidationError, ProviderCredentials, ProviderHostedZone,
    ProviderMetadata, ProviderType,
};

#[cfg(feature = "route53")]
pub use profile::{load_profile_credentials, load_profile_credentials_from, parse_shared_credentials};
pub use profile::{ProfileError, SHARED_CREDENTIALS_FILE_ENV, shared_credentials_path};

pub use utils::log_sanitizer;

#[cfg(feature = "route53")]
pub use providers::{Route53Provider, Route53ProviderBuilder};
