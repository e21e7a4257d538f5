//! 目标名称服务器解析

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{ProgressSink, WhoisSource};
use crate::types::{Domain, NameserverSet, NameserverSource, ProgressEvent};

/// Decides which nameservers a candidate zone has to hit.
pub struct NameserverResolver {
    whois: Arc<dyn WhoisSource>,
    progress: Arc<dyn ProgressSink>,
}

impl NameserverResolver {
    #[must_use]
    pub fn new(whois: Arc<dyn WhoisSource>, progress: Arc<dyn ProgressSink>) -> Self {
        Self { whois, progress }
    }

    /// Explicit names win; WHOIS is only consulted when none are given.
    ///
    /// A WHOIS record without name servers is a warning, not an error: the
    /// empty set is returned and [`validate`](Self::validate) rejects it.
    pub async fn resolve(&self, domain: &Domain, explicit: &[String]) -> CoreResult<NameserverSet> {
        let explicit_set = NameserverSet::from_names(explicit);
        let (source, name_servers) = if explicit_set.is_empty() {
            if !explicit.is_empty() {
                log::warn!("All --nameserver values were blank; falling back to WHOIS");
            }
            let Some(names) = self.whois.name_servers(domain).await? else {
                return Err(CoreError::DomainNotFound(domain.to_string()));
            };
            let set = NameserverSet::from_names(names);
            if set.is_empty() {
                let warning = CoreError::NoNameserversFound(domain.to_string());
                log::warn!("{warning}");
                self.progress.on_event(&ProgressEvent::Warning {
                    message: warning.to_string(),
                });
            }
            (NameserverSource::Whois, set)
        } else {
            (NameserverSource::Explicit, explicit_set)
        };

        log::info!("Target name servers ({source:?}): {name_servers}");
        self.progress.on_event(&ProgressEvent::NameserversResolved {
            source,
            name_servers: name_servers.clone(),
        });
        Ok(name_servers)
    }

    /// At least one target name must belong to the provider's pool.
    pub fn validate(&self, name_servers: &NameserverSet, marker: &str) -> CoreResult<()> {
        if name_servers.any_contains_marker(marker) {
            Ok(())
        } else {
            Err(CoreError::NotProviderDelegated {
                marker: marker.to_string(),
                name_servers: if name_servers.is_empty() {
                    "none".to_string()
                } else {
                    name_servers.to_string()
                },
            })
        }
    }

    /// [`resolve`](Self::resolve) then [`validate`](Self::validate).
    pub async fn resolve_target(
        &self,
        domain: &Domain,
        explicit: &[String],
        marker: &str,
    ) -> CoreResult<NameserverSet> {
        let name_servers = self.resolve(domain, explicit).await?;
        self.validate(&name_servers, marker)?;
        Ok(name_servers)
    }
}
