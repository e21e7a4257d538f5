//! 悬空委派检查

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{NsProbe, ProgressSink};
use crate::types::{DelegationState, Domain, ProgressEvent};

/// Gate in front of the acquisition loop: only dangling domains pass.
pub struct TakeoverStateChecker {
    probe: Arc<dyn NsProbe>,
    progress: Arc<dyn ProgressSink>,
}

impl TakeoverStateChecker {
    #[must_use]
    pub fn new(probe: Arc<dyn NsProbe>, progress: Arc<dyn ProgressSink>) -> Self {
        Self { probe, progress }
    }

    /// Check the live NS state.
    ///
    /// - NS records resolve: [`CoreError::AlreadyDelegated`] unless `force`
    /// - NXDOMAIN / empty answer: pass
    /// - SERVFAIL / REFUSED: pass with a warning
    /// - query failure: [`CoreError::DnsInconclusive`], `force` does not bypass it
    pub async fn check(&self, domain: &Domain, force: bool) -> CoreResult<DelegationState> {
        let state = self.probe.probe(domain).await?;
        self.progress.on_event(&ProgressEvent::DelegationChecked {
            state: state.clone(),
        });

        match &state {
            DelegationState::Delegated { name_servers } if !force => {
                return Err(CoreError::AlreadyDelegated {
                    domain: domain.to_string(),
                    name_servers: name_servers.to_vec(),
                });
            }
            DelegationState::Delegated { name_servers } => {
                self.warn(format!(
                    "{domain} still resolves NS records ({name_servers}); continuing because of --force"
                ));
            }
            DelegationState::Unresolvable { response_code } => {
                self.warn(format!(
                    "NS query for {domain} returned {response_code}; treating the delegation as lame"
                ));
            }
            DelegationState::Dangling { response_code } => {
                log::info!("{domain} has no live NS records ({response_code})");
            }
        }
        Ok(state)
    }

    fn warn(&self, message: String) {
        log::warn!("{message}");
        self.progress.on_event(&ProgressEvent::Warning { message });
    }
}
