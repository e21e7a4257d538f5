//! 凭证选择与 provider 连接

use std::sync::Arc;

use async_trait::async_trait;
use zoneclaim_provider::{
    HostedZoneProvider, ProviderCredentials, ProviderMetadata, ProviderType, create_provider,
    load_profile_credentials, log_sanitizer::mask_key, provider_metadata,
};

use crate::error::{CoreError, CoreResult};
use crate::traits::ProviderConnector;

/// Credential inputs as the operator supplied them.
///
/// A named profile takes precedence over static keys.
#[derive(Clone, Default)]
pub struct CredentialOptions {
    pub profile: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for CredentialOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialOptions")
            .field("profile", &self.profile)
            .field("access_key_id", &self.access_key_id.as_deref().map(mask_key))
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "<redacted>"))
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl CredentialOptions {
    /// Pick the credential source. Reads the shared credentials file when a profile is named.
    pub fn resolve(&self) -> CoreResult<ProviderCredentials> {
        let access = non_blank(self.access_key_id.as_ref());
        let secret = non_blank(self.secret_access_key.as_ref());

        if let Some(profile) = non_blank(self.profile.as_ref()) {
            if access.is_some() || secret.is_some() {
                log::warn!("Both a profile and static keys were given; using profile '{profile}'");
            }
            return load_profile_credentials(profile)
                .map_err(|e| CoreError::Credentials(e.to_string()));
        }

        match (access, secret) {
            (Some(access), Some(secret)) => ProviderCredentials::route53(
                access,
                secret,
                non_blank(self.session_token.as_ref()),
            )
            .map_err(|e| CoreError::Credentials(e.to_string())),
            (None, None) => Err(CoreError::AuthenticationRequired),
            (Some(_), None) => Err(CoreError::Credentials(
                "--access was given without --secret".to_string(),
            )),
            (None, Some(_)) => Err(CoreError::Credentials(
                "--secret was given without --access".to_string(),
            )),
        }
    }
}

/// Connects to Route 53 with operator-supplied credentials.
#[derive(Debug, Clone)]
pub struct CredentialConnector {
    options: CredentialOptions,
}

impl CredentialConnector {
    #[must_use]
    pub fn new(options: CredentialOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ProviderConnector for CredentialConnector {
    fn metadata(&self) -> ProviderMetadata {
        provider_metadata(ProviderType::Route53)
    }

    async fn connect(&self) -> CoreResult<Arc<dyn HostedZoneProvider>> {
        let credentials = self.options.resolve()?;
        let provider = create_provider(credentials)?;
        if !provider.validate_credentials().await? {
            return Err(CoreError::Credentials(format!(
                "{} rejected the supplied credentials",
                self.metadata().name
            )));
        }
        log::info!("Authenticated with {}", self.metadata().name);
        Ok(provider)
    }
}
