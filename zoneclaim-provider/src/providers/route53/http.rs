//! Route 53 HTTP 请求方法

use chrono::Utc;
use reqwest::Method;

use crate::error::Result;
use crate::http_client::{HttpUtils, RequestLabel};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::sign::SignableRequest;
use super::types::parse_error_response;
use super::{ROUTE53_API_VERSION, ROUTE53_HOST, Route53Provider};

impl Route53Provider {
    // ==================== 辅助方法 ====================

    /// 统一处理 Route 53 响应错误
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Some(error) = parse_error_response(response_text) {
            return Err(self.map_error(
                RawApiError {
                    code: error.code,
                    message: error.message.unwrap_or_default(),
                },
                ctx,
            ));
        }

        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {status}: {}",
            truncate_for_log(response_text)
        ))))
    }

    /// Sign and send a request against `/2013-04-01/{resource}`.
    ///
    /// `max_retries` applies to transport failures only; pass 0 for requests that
    /// must not be replayed.
    pub(crate) async fn send(
        &self,
        method: Method,
        resource: &str,
        payload: Option<String>,
        ctx: ErrorContext,
        max_retries: u32,
    ) -> Result<String> {
        let path = format!("/{ROUTE53_API_VERSION}/{resource}");
        let amz_date = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        let body = payload.unwrap_or_default();

        let mut headers = vec![
            ("Host".to_string(), ROUTE53_HOST.to_string()),
            ("X-Amz-Date".to_string(), amz_date.clone()),
        ];
        if !body.is_empty() {
            headers.push(("Content-Type".to_string(), "text/xml".to_string()));
            log::debug!("Request Body: {}", truncate_for_log(&body));
        }
        if let Some(token) = &self.session_token {
            headers.push(("X-Amz-Security-Token".to_string(), token.clone()));
        }

        let authorization = self.sign(&SignableRequest {
            method: method.as_str(),
            path: &path,
            query: "",
            headers: &headers,
            payload: &body,
            amz_date: &amz_date,
        });

        let url = format!("https://{ROUTE53_HOST}{path}");
        let mut request = self.client.request(method.clone(), &url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = request.header("Authorization", authorization);
        if !body.is_empty() {
            request = request.body(body);
        }

        let label = RequestLabel {
            provider: self.provider_name(),
            method: method.as_str(),
            url: &url,
        };
        let (status, response_text) =
            HttpUtils::send_with_retry(request, &label, max_retries).await?;

        self.handle_response_error(status, &response_text, ctx)?;
        Ok(response_text)
    }
}
