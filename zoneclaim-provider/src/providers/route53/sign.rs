//! AWS Signature Version 4 (`AWS4-HMAC-SHA256`)

use std::fmt::Write;

use sha2::{Digest, Sha256};

use crate::providers::common::hmac_sha256;
use crate::utils::log_sanitizer::truncate_for_log;

use super::{ROUTE53_REGION, ROUTE53_SERVICE, Route53Provider};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// The parts of an HTTP request that go into the signature.
pub(crate) struct SignableRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    /// Raw query string, already URI-encoded (may be empty).
    pub query: &'a str,
    /// Headers to sign. Names are case-insensitive.
    pub headers: &'a [(String, String)],
    pub payload: &'a str,
    /// Request time in `%Y%m%dT%H%M%SZ` format (the `x-amz-date` value).
    pub amz_date: &'a str,
}

impl Route53Provider {
    /// Build the `Authorization` header value for a Route 53 request.
    pub(crate) fn sign(&self, request: &SignableRequest<'_>) -> String {
        sign_v4(
            &self.access_key_id,
            &self.secret_access_key,
            ROUTE53_REGION,
            ROUTE53_SERVICE,
            request,
        )
    }
}

/// Compute a SigV4 `Authorization` header value.
/// Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>
pub(crate) fn sign_v4(
    access_key_id: &str,
    secret_access_key: &str,
    region: &str,
    service: &str,
    request: &SignableRequest<'_>,
) -> String {
    let date = request.amz_date.get(..8).unwrap_or(request.amz_date);

    // 1. Canonical query: parameters sorted by name
    let canonical_query = if request.query.is_empty() {
        String::new()
    } else {
        let mut params: Vec<&str> = request.query.split('&').collect();
        params.sort_unstable();
        params.join("&")
    };

    // 2. Canonical headers: lowercase names, trimmed values, sorted
    let mut sorted_headers: Vec<(String, &str)> = request
        .headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.trim()))
        .collect();
    sorted_headers.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers = sorted_headers
        .iter()
        .fold(String::new(), |mut acc, (k, v)| {
            let _ = writeln!(acc, "{k}:{v}");
            acc
        });
    let signed_headers = sorted_headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let hashed_payload = hex::encode(Sha256::digest(request.payload.as_bytes()));
    let canonical_request = format!(
        "{}\n{}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}",
        request.method, request.path
    );

    log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

    // 3. String to sign
    let credential_scope = format!("{date}/{region}/{service}/aws4_request");
    let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign = format!(
        "{ALGORITHM}\n{}\n{credential_scope}\n{hashed_canonical_request}",
        request.amz_date
    );

    // 4. Derive the signing key and sign
    let k_date = hmac_sha256(
        format!("AWS4{secret_access_key}").as_bytes(),
        date.as_bytes(),
    );
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    let k_signing = hmac_sha256(&k_service, b"aws4_request");
    let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

    format!(
        "{ALGORITHM} Credential={access_key_id}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}
