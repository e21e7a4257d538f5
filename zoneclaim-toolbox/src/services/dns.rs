//! DNS NS 探测模块

use hickory_resolver::{
    ResolveError,
    proto::{ProtoErrorKind, op::ResponseCode},
};

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::{NsProbeOutcome, NsProbeResult};

use super::resolver::probe_resolver;

/// 查询域名的 NS 记录并分类结果
///
/// - 有 NS 记录 → `Delegated`
/// - NXDOMAIN / NOERROR 空应答 → `NoRecord`
/// - SERVFAIL / REFUSED → `Unresolvable`
/// - 超时、I/O、无可用服务器 → `ToolboxError::NetworkError`
pub async fn ns_probe(domain: &str) -> ToolboxResult<NsProbeResult> {
    log::debug!("NS probe {domain}");

    // 绝对名称，避免 search 域拼接
    let outcome = match probe_resolver().ns_lookup(format!("{domain}.")).await {
        Ok(response) => {
            let name_servers: Vec<String> = response
                .iter()
                .map(|ns| ns.to_string().trim_end_matches('.').to_lowercase())
                .collect();
            if name_servers.is_empty() {
                NsProbeOutcome::NoRecord {
                    response_code: format!("{:?}", ResponseCode::NoError),
                }
            } else {
                NsProbeOutcome::Delegated { name_servers }
            }
        }
        Err(e) => classify_resolve_error(&e).ok_or_else(|| {
            ToolboxError::NetworkError(format!("NS lookup for {domain} failed: {e}"))
        })?,
    };

    Ok(NsProbeResult {
        domain: domain.to_string(),
        outcome,
    })
}

/// Map a resolver error onto a negative outcome. `None` means the query itself failed.
fn classify_resolve_error(err: &ResolveError) -> Option<NsProbeOutcome> {
    let proto = err.proto()?;
    match proto.kind() {
        ProtoErrorKind::NoRecordsFound { response_code, .. } => {
            classify_response_code(*response_code)
        }
        _ => None,
    }
}

/// Classify the response code of an answer that carried no NS records.
pub(crate) fn classify_response_code(code: ResponseCode) -> Option<NsProbeOutcome> {
    let response_code = format!("{code:?}");
    match code {
        ResponseCode::NXDomain | ResponseCode::NoError => {
            Some(NsProbeOutcome::NoRecord { response_code })
        }
        ResponseCode::ServFail | ResponseCode::Refused => {
            Some(NsProbeOutcome::Unresolvable { response_code })
        }
        _ => None,
    }
}
