//! Stateless service façade exposing all toolbox operations.
//!
//! Every method on [`ToolboxService`] is an async associated function; no instance needed.

mod dns;
mod resolver;
mod whois;

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::{NsProbeResult, WhoisResult};

/// Validate and normalise a domain name.
///
/// Trims whitespace, strips one trailing dot, lowercases, converts
/// internationalised domain names (IDN) to ASCII via IDNA 2008, and rejects
/// empty inputs and bare IP addresses. Strict IDNA processing also enforces the
/// 253-character name and 63-character label limits.
pub fn normalize_domain(domain: &str) -> ToolboxResult<String> {
    let domain = domain.trim();
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
        return Err(ToolboxError::ValidationError(
            "Domain name is required".to_string(),
        ));
    }
    if domain.parse::<std::net::IpAddr>().is_ok() {
        return Err(ToolboxError::ValidationError(format!(
            "Expected a domain name, got an IP address: {domain}"
        )));
    }
    // IDNA processing: converts Unicode labels to Punycode, lowercases and validates.
    idna::domain_to_ascii_strict(domain)
        .map_err(|_| ToolboxError::ValidationError(format!("Invalid domain name: {domain}")))
}

/// Embedded WHOIS server mapping (TLD → server).
const WHOIS_SERVERS: &str = include_str!("whois_servers.json");

/// Entry point for all network diagnostic operations.
///
/// All methods are stateless associated functions; call them directly on the type.
///
/// ```rust,no_run
/// use zoneclaim_toolbox::ToolboxService;
/// # async fn demo() -> zoneclaim_toolbox::ToolboxResult<()> {
/// let whois = ToolboxService::whois_lookup("example.com").await?;
/// let probe = ToolboxService::ns_probe("example.com").await?;
/// # Ok(())
/// # }
/// ```
pub struct ToolboxService;

impl ToolboxService {
    /// Query WHOIS information for a domain.
    ///
    /// Returns the delegated name servers from the raw WHOIS response. A registry
    /// "no match" answer comes back as `found == false`, not as an error.
    pub async fn whois_lookup(domain: &str) -> ToolboxResult<WhoisResult> {
        let domain = normalize_domain(domain)?;
        whois::whois_lookup(&domain, WHOIS_SERVERS).await
    }

    /// Query live NS records through the system resolver and classify the answer.
    pub async fn ns_probe(domain: &str) -> ToolboxResult<NsProbeResult> {
        let domain = normalize_domain(domain)?;
        dns::ns_probe(&domain).await
    }
}
