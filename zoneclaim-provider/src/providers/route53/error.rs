//! Route 53 错误映射
//!
//! 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! ## 错误码分类
//!
//! - **限流**：Throttling, ThrottlingException, PriorRequestNotComplete, RequestLimitExceeded
//! - **认证错误**：InvalidClientTokenId, SignatureDoesNotMatch, IncompleteSignature,
//!   MissingAuthenticationToken, ExpiredToken, InvalidSignatureException, UnrecognizedClientException
//! - **权限拒绝**：AccessDenied, AccessDeniedException
//! - **Zone 不存在**：NoSuchHostedZone
//! - **配额超限**：TooManyHostedZones, LimitsExceeded
//! - **参数错误**：InvalidDomainName, InvalidInput, InvalidArgument
//! - **引用冲突**：HostedZoneAlreadyExists（CallerReference 重复）
//!
//! 其余（DelegationSet 相关、VPC 关联等）fallback 到 Unknown。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        match raw.code.as_deref() {
            // ============ 限流 ============
            Some(
                "Throttling"
                | "ThrottlingException"
                | "PriorRequestNotComplete" // 同一资源上一个变更尚未完成
                | "RequestLimitExceeded",
            ) => ProviderError::Throttled {
                provider,
                retry_after: None,
                raw_code: raw.code,
                raw_message: Some(raw.message),
            },

            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken"
                | "InvalidSignatureException"
                | "UnrecognizedClientException",
            ) => ProviderError::InvalidCredentials {
                provider,
                raw_code: raw.code,
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider,
                raw_code: raw.code,
                raw_message: Some(raw.message),
            },

            // ============ Zone 不存在 ============
            Some("NoSuchHostedZone") => ProviderError::HostedZoneNotFound {
                provider,
                zone_id: context.zone_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 配额 ============
            Some("TooManyHostedZones" | "LimitsExceeded") => ProviderError::QuotaExceeded {
                provider,
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            Some("InvalidDomainName") => ProviderError::InvalidParameter {
                provider,
                param: "name".to_string(),
                detail: format!(
                    "{}: {}",
                    context.zone_name.unwrap_or_default(),
                    raw.message
                ),
            },
            Some("InvalidInput" | "InvalidArgument") => ProviderError::InvalidParameter {
                provider,
                param: "request".to_string(),
                detail: raw.message,
            },

            // ============ CallerReference 重复 ============
            Some("HostedZoneAlreadyExists") => ProviderError::ReferenceConflict {
                provider,
                reference: context.reference.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}
