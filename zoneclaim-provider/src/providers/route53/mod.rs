//! Amazon Route 53 Provider

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 XML request/response handling.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

/// Route 53 API host (global endpoint).
pub(crate) const ROUTE53_HOST: &str = "route53.amazonaws.com";
/// Signing region for the global endpoint.
pub(crate) const ROUTE53_REGION: &str = "us-east-1";
/// Signing service name.
pub(crate) const ROUTE53_SERVICE: &str = "route53";
/// REST API version path segment.
pub(crate) const ROUTE53_API_VERSION: &str = "2013-04-01";
/// Prefix Route 53 puts in front of hosted zone IDs.
pub(crate) const HOSTED_ZONE_ID_PREFIX: &str = "/hostedzone/";

/// Amazon Route 53 hosted-zone provider.
///
/// Authenticates with AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use zoneclaim_provider::Route53Provider;
///
/// let provider = Route53Provider::builder(
///     "AKIA...".to_string(),
///     "secret".to_string(),
/// )
/// .max_retries(3)
/// .build();
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) session_token: Option<String>,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    max_retries: u32,
}

impl Route53ProviderBuilder {
    fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            session_token: None,
            max_retries: 2,
        }
    }

    /// Attach a session token (temporary credentials).
    #[must_use]
    pub fn session_token(mut self, token: Option<String>) -> Self {
        self.session_token = token;
        self
    }

    /// Set the maximum number of automatic retries for network errors on
    /// idempotent requests (default: 2). Zone creation is never retried.
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Route53Provider {
        Route53Provider {
            client: create_http_client(),
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            session_token: self.session_token,
            max_retries: self.max_retries,
        }
    }
}

impl Route53Provider {
    /// Creates a new provider with default settings.
    pub fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self::builder(access_key_id, secret_access_key).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, secret_access_key: String) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(access_key_id, secret_access_key)
    }
}
