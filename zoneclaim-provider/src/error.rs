use serde::{Deserialize, Serialize};

/// Unified error type for all hosted-zone provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. Variants that originate from an API error response keep
/// the provider's original code and/or message for diagnostics.
///
/// # Transient Errors
///
/// - [`NetworkError`](Self::NetworkError) and [`Timeout`](Self::Timeout) are retried by the
///   built-in HTTP client for idempotent requests.
/// - [`Throttled`](Self::Throttled) is never retried by the HTTP client. Callers decide how
///   to back off, since the right reaction depends on the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provided credentials are invalid, expired or badly signed.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error code from the provider API, if available.
        raw_code: Option<String>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated principal lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error code from the provider API, if available.
        raw_code: Option<String>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The API rejected the request because of rate limiting.
    ///
    /// Unlike [`QuotaExceeded`](Self::QuotaExceeded), the request should succeed after waiting.
    Throttled {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error code from the provider API, if available.
        raw_code: Option<String>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified hosted zone does not exist (or no longer exists).
    HostedZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Identifier of the zone that was not found.
        zone_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A hosted zone was already created with the same creation reference.
    ReferenceConflict {
        /// Provider that produced the error.
        provider: String,
        /// The creation reference that was replayed.
        reference: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The account's hosted-zone quota has been exceeded.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (e.g. malformed domain name).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否属于预期错误（凭证、限流、资源不存在等），决定日志级别。
    ///
    /// `true` 记 `warn`，`false` 记 `error`。新增变体时同步更新。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::Throttled { .. }
                | Self::HostedZoneNotFound { .. }
                | Self::QuotaExceeded { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the provider rejected the request because of rate limiting.
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        matches!(self, Self::Throttled { .. })
    }

    /// Whether the error is an authentication or authorization failure.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::PermissionDenied { .. }
        )
    }
}

fn write_with_message(
    f: &mut std::fmt::Formatter<'_>,
    head: std::fmt::Arguments<'_>,
    raw_message: Option<&String>,
) -> std::fmt::Result {
    match raw_message {
        Some(msg) => write!(f, "{head}: {msg}"),
        None => write!(f, "{head}"),
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
                ..
            } => write_with_message(
                f,
                format_args!("[{provider}] Invalid credentials"),
                raw_message.as_ref(),
            ),
            Self::PermissionDenied {
                provider,
                raw_message,
                ..
            } => write_with_message(
                f,
                format_args!("[{provider}] Permission denied"),
                raw_message.as_ref(),
            ),
            Self::Throttled {
                provider,
                retry_after,
                raw_message,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write_with_message(
                        f,
                        format_args!("[{provider}] Throttled (retry after {secs}s)"),
                        raw_message.as_ref(),
                    )
                } else {
                    write_with_message(
                        f,
                        format_args!("[{provider}] Throttled"),
                        raw_message.as_ref(),
                    )
                }
            }
            Self::HostedZoneNotFound {
                provider, zone_id, ..
            } => {
                write!(f, "[{provider}] Hosted zone '{zone_id}' not found")
            }
            Self::ReferenceConflict {
                provider,
                reference,
                ..
            } => {
                write!(
                    f,
                    "[{provider}] Creation reference '{reference}' was already used"
                )
            }
            Self::QuotaExceeded {
                provider,
                raw_message,
            } => write_with_message(
                f,
                format_args!("[{provider}] Hosted zone quota exceeded"),
                raw_message.as_ref(),
            ),
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => match raw_code {
                Some(code) => write!(f, "[{provider}] {code}: {raw_message}"),
                None => write!(f, "[{provider}] {raw_message}"),
            },
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
