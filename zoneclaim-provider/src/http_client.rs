//! Shared HTTP send path
//!
//! Providers build and sign their own `RequestBuilder`; [`HttpUtils`] sends it,
//! logs both directions and turns transport-level failures into [`ProviderError`].
//! Body parsing stays with the provider (Route 53 answers in XML).

use std::time::Duration;

use reqwest::RequestBuilder;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Upper bound for the transport retry delay.
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Identifies a request in logs and errors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLabel<'a> {
    pub provider: &'a str,
    pub method: &'a str,
    pub url: &'a str,
}

/// HTTP 请求工具集
pub struct HttpUtils;

impl HttpUtils {
    /// Send once and return `(status, body)`.
    ///
    /// 429 becomes [`ProviderError::Throttled`]; 502–504 and connection failures
    /// become [`ProviderError::NetworkError`]; timeouts become [`ProviderError::Timeout`].
    /// Every other status is handed back for the provider to interpret.
    pub(crate) async fn send(
        request: RequestBuilder,
        label: &RequestLabel<'_>,
    ) -> Result<(u16, String), ProviderError> {
        let provider = label.provider;
        log::debug!("[{provider}] {} {}", label.method, label.url);

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(provider, &e))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: format!("Reading response body failed: {e}"),
            })?;
        log::debug!("[{provider}] HTTP {status}: {}", truncate_for_log(&body));

        match status_error(provider, status, retry_after, &body) {
            Some(e) => {
                log::warn!("{e}");
                Err(e)
            }
            None => Ok((status, body)),
        }
    }

    /// [`send`](Self::send), retrying transport failures up to `max_retries` times.
    ///
    /// Delays double from 100 ms up to 10 s. Throttling is never retried here.
    /// `max_retries = 0` sends exactly once.
    pub(crate) async fn send_with_retry(
        request: RequestBuilder,
        label: &RequestLabel<'_>,
        max_retries: u32,
    ) -> Result<(u16, String), ProviderError> {
        let mut attempt = 0;
        loop {
            if attempt >= max_retries {
                return Self::send(request, label).await;
            }
            // RequestBuilder 只能发送一次，重试需要克隆
            let Some(replay) = request.try_clone() else {
                log::warn!(
                    "[{}] Request body cannot be cloned, sending without retry",
                    label.provider
                );
                return Self::send(request, label).await;
            };

            match Self::send(replay, label).await {
                Err(e) if is_retryable(&e) => {
                    let delay = backoff_delay(attempt);
                    attempt += 1;
                    log::warn!("{e}; retry {attempt}/{max_retries} in {}ms", delay.as_millis());
                    tokio::time::sleep(delay).await;
                }
                other => return other,
            }
        }
    }
}

fn transport_error(provider: &str, e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: e.to_string(),
        }
    }
}

/// Statuses handled before the provider sees the body.
fn status_error(
    provider: &str,
    status: u16,
    retry_after: Option<u64>,
    body: &str,
) -> Option<ProviderError> {
    match status {
        429 => Some(ProviderError::Throttled {
            provider: provider.to_string(),
            retry_after,
            raw_code: None,
            raw_message: Some(truncate_for_log(body)).filter(|b| !b.is_empty()),
        }),
        502..=504 => Some(ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("HTTP {status}: {}", truncate_for_log(body)),
        }),
        _ => None,
    }
}

/// Only transport failures are worth replaying.
fn is_retryable(error: &ProviderError) -> bool {
    matches!(
        error,
        ProviderError::NetworkError { .. } | ProviderError::Timeout { .. }
    )
}

fn backoff_delay(attempt: u32) -> Duration {
    let factor = 1_u64 << attempt.min(16);
    Duration::from_millis(100_u64.saturating_mul(factor)).min(MAX_BACKOFF)
}
