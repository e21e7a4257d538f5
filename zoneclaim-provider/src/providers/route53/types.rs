//! Route 53 REST-XML 请求体与响应结构
//!
//! Route 53 只接受和返回 XML，这里用 serde 结构经 quick-xml 编解码。

use quick_xml::de::DeError;
use serde::{Deserialize, Serialize};

use crate::providers::common::normalize_domain_name;
use crate::types::{CreateHostedZoneRequest, ProviderHostedZone};

use super::{HOSTED_ZONE_ID_PREFIX, ROUTE53_API_VERSION};

// ============ 请求体 ============

#[derive(Debug, Serialize)]
#[serde(rename = "CreateHostedZoneRequest", rename_all = "PascalCase")]
struct CreateHostedZoneBody<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: String,
    name: &'a str,
    caller_reference: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosted_zone_config: Option<HostedZoneConfig<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct HostedZoneConfig<'a> {
    comment: &'a str,
}

/// Encode the `CreateHostedZoneRequest` XML document.
pub fn create_hosted_zone_body(req: &CreateHostedZoneRequest) -> Result<String, DeError> {
    let body = CreateHostedZoneBody {
        xmlns: format!("https://route53.amazonaws.com/doc/{ROUTE53_API_VERSION}/"),
        name: &req.name,
        caller_reference: &req.reference,
        hosted_zone_config: req
            .comment
            .as_deref()
            .map(|comment| HostedZoneConfig { comment }),
    };
    quick_xml::se::to_string(&body)
}

// ============ 响应 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CreateHostedZoneResponse {
    hosted_zone: HostedZoneXml,
    delegation_set: DelegationSetXml,
}

/// `<HostedZone>`; `<ChangeInfo>` has its own `<Id>` and is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct HostedZoneXml {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DelegationSetXml {
    name_servers: NameServersXml,
}

#[derive(Debug, Default, Deserialize)]
struct NameServersXml {
    #[serde(rename = "NameServer", default)]
    name_server: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetHostedZoneCountResponse {
    hosted_zone_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorEnvelope {
    error: ErrorResponse,
}

/// Route 53 API error body (`<ErrorResponse><Error>...`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Strip the `/hostedzone/` prefix Route 53 puts on zone identifiers.
pub fn strip_zone_id_prefix(id: &str) -> &str {
    id.strip_prefix(HOSTED_ZONE_ID_PREFIX).unwrap_or(id)
}

/// Decode a `CreateHostedZoneResponse`.
pub fn parse_create_response(xml: &str) -> Result<ProviderHostedZone, DeError> {
    let response: CreateHostedZoneResponse = quick_xml::de::from_str(xml)?;
    let name_servers = response
        .delegation_set
        .name_servers
        .name_server
        .iter()
        .map(|ns| normalize_domain_name(ns))
        .filter(|ns| !ns.is_empty())
        .collect();

    Ok(ProviderHostedZone {
        id: strip_zone_id_prefix(response.hosted_zone.id.trim()).to_string(),
        name: normalize_domain_name(&response.hosted_zone.name),
        name_servers,
    })
}

/// Decode an error body. `None` when the body is not a Route 53 error document.
pub fn parse_error_response(xml: &str) -> Option<ErrorResponse> {
    let envelope: ErrorEnvelope = quick_xml::de::from_str(xml).ok()?;
    let non_empty = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    Some(ErrorResponse {
        code: non_empty(envelope.error.code),
        message: non_empty(envelope.error.message),
    })
}

/// Decode a `GetHostedZoneCountResponse`.
pub fn parse_hosted_zone_count(xml: &str) -> Option<u64> {
    quick_xml::de::from_str::<GetHostedZoneCountResponse>(xml)
        .ok()
        .map(|r| r.hosted_zone_count)
}
