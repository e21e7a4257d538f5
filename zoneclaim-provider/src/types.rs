use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which hosted-zone provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Amazon Route 53. Requires feature `route53`.
    #[cfg(feature = "route53")]
    Route53,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "route53")]
            Self::Route53 => write!(f, "route53"),
        }
    }
}

// ============ Hosted Zone Types ============

/// Parameters for creating a hosted zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostedZoneRequest {
    /// Zone apex (e.g. `"example.com"`).
    pub name: String,
    /// Unique request reference; the provider deduplicates creates on it.
    pub reference: String,
    /// Free-form comment stored with the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A hosted zone as returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderHostedZone {
    /// Provider-specific zone identifier, without any path prefix.
    pub id: String,
    /// Zone name, without the trailing dot.
    pub name: String,
    /// Nameservers the provider assigned to this zone, in response order.
    pub name_servers: Vec<String>,
}

// ============ Provider Metadata Types ============

/// Static metadata describing a hosted-zone provider.
///
/// Obtain via [`HostedZoneProvider::metadata()`](crate::HostedZoneProvider::metadata) or
/// [`provider_metadata()`](crate::provider_metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider type identifier.
    pub id: ProviderType,
    /// Human-readable provider name.
    pub name: String,
    /// Substring that identifies the provider's delegation nameserver pool
    /// (e.g. `"awsdns"` in `ns-1.awsdns-00.com`).
    pub delegation_marker: String,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for the supported providers.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// AWS credentials for Route 53. Requires feature `route53`.
    #[cfg(feature = "route53")]
    #[serde(rename = "route53")]
    Route53 {
        /// AWS access key ID.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
        /// Session token for temporary credentials.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session_token: Option<String>,
    },
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "route53")]
            Self::Route53 {
                access_key_id,
                session_token,
                ..
            } => f
                .debug_struct("Route53")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &"<redacted>")
                .field("session_token", &session_token.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

impl ProviderCredentials {
    /// The provider these credentials belong to.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "route53")]
            Self::Route53 { .. } => ProviderType::Route53,
        }
    }

    /// Build Route 53 credentials, rejecting blank key material.
    #[cfg(feature = "route53")]
    pub fn route53(
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<&str>,
    ) -> Result<Self, CredentialValidationError> {
        let provider = ProviderType::Route53;
        Ok(Self::Route53 {
            access_key_id: Self::non_empty(provider, "accessKeyId", "Access Key ID", access_key_id)?,
            secret_access_key: Self::non_empty(
                provider,
                "secretAccessKey",
                "Secret Access Key",
                secret_access_key,
            )?,
            session_token: session_token
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToString::to_string),
        })
    }

    fn non_empty(
        provider: ProviderType,
        key: &str,
        label: &str,
        value: &str,
    ) -> Result<String, CredentialValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CredentialValidationError::EmptyField {
                provider,
                field: key.to_string(),
                label: label.to_string(),
            });
        }
        Ok(value.to_string())
    }
}
