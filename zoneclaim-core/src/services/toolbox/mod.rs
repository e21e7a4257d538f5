//! 工具箱适配
//!
//! 把 `zoneclaim-toolbox` 的无状态查询接到 [`WhoisSource`] / [`NsProbe`] 上。

use async_trait::async_trait;
use zoneclaim_toolbox::{NsProbeOutcome, ToolboxError, ToolboxService};

use crate::error::{CoreError, CoreResult};
use crate::traits::{NsProbe, WhoisSource};
use crate::types::{DelegationState, Domain, NameserverSet};

/// WHOIS over the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolboxWhoisSource;

#[async_trait]
impl WhoisSource for ToolboxWhoisSource {
    async fn name_servers(&self, domain: &Domain) -> CoreResult<Option<Vec<String>>> {
        let result = ToolboxService::whois_lookup(domain.as_str())
            .await
            .map_err(|e| match e {
                ToolboxError::ValidationError(msg) => CoreError::Validation(msg),
                ToolboxError::NetworkError(msg) => CoreError::Whois(msg),
            })?;
        log::debug!(
            "WHOIS {}: found={}, {} name server(s)",
            result.domain,
            result.found,
            result.name_servers.len()
        );
        Ok(result.found.then_some(result.name_servers))
    }
}

/// NS query through the system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolboxNsProbe;

#[async_trait]
impl NsProbe for ToolboxNsProbe {
    async fn probe(&self, domain: &Domain) -> CoreResult<DelegationState> {
        let result = ToolboxService::ns_probe(domain.as_str())
            .await
            .map_err(|e| match e {
                ToolboxError::ValidationError(msg) => CoreError::Validation(msg),
                ToolboxError::NetworkError(msg) => CoreError::DnsInconclusive(msg),
            })?;
        log::debug!("NS probe {}: {:?}", result.domain, result.outcome);
        Ok(delegation_state(result.outcome))
    }
}

fn delegation_state(outcome: NsProbeOutcome) -> DelegationState {
    match outcome {
        NsProbeOutcome::Delegated { name_servers } => DelegationState::Delegated {
            name_servers: NameserverSet::from_names(name_servers),
        },
        NsProbeOutcome::NoRecord { response_code } => DelegationState::Dangling { response_code },
        NsProbeOutcome::Unresolvable { response_code } => {
            DelegationState::Unresolvable { response_code }
        }
    }
}
