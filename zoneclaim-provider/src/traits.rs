use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateHostedZoneRequest, ProviderHostedZone, ProviderMetadata};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Hosted zone ID (for `HostedZoneNotFound`)
    pub zone_id: Option<String>,
    /// Creation reference (for `ReferenceConflict`)
    pub reference: Option<String>,
    /// Zone name (for `InvalidParameter`)
    pub zone_name: Option<String>,
}

/// Maps raw provider API errors onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in error values and logs.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// A cloud DNS service that can provision and remove hosted zones.
///
/// Implementations must not retry zone creation on their own: a replayed create
/// can leave a zone behind that the caller never learns about.
#[async_trait]
pub trait HostedZoneProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// Static provider metadata (name, delegation marker).
    ///
    /// Available without an instance, so validation can run before credentials exist.
    fn metadata() -> ProviderMetadata
    where
        Self: Sized;

    /// Check the credentials against a read-only endpoint.
    ///
    /// Returns `Ok(false)` when the provider rejects the credentials.
    async fn validate_credentials(&self) -> Result<bool>;

    /// Create a hosted zone and return it with its assigned delegation set.
    async fn create_hosted_zone(&self, req: &CreateHostedZoneRequest)
        -> Result<ProviderHostedZone>;

    /// Delete a hosted zone by identifier.
    async fn delete_hosted_zone(&self, zone_id: &str) -> Result<()>;
}
