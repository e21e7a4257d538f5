//! WHOIS lookup module.

use regex::Regex;
use whois_rust::{WhoIs, WhoIsLookupOptions};

use crate::error::{ToolboxError, ToolboxResult};
use crate::types::WhoisResult;

/// Registry phrasings for "no such domain". Matched case-insensitively.
const NOT_FOUND_PATTERNS: &[&str] = &[
    r"(?im)^\s*No match for",
    r"(?im)^\s*NOT FOUND",
    r"(?im)^\s*No Data Found",
    r"(?im)^\s*No entries found",
    r"(?im)^\s*No Object Found",
    r"(?im)^\s*Domain not found",
    r"(?im)^\s*The queried object does not exist",
    r"(?im)^\s*Status:\s*(?:free|available)\s*$",
    r"(?i)is available for registration",
];

/// Perform a WHOIS lookup for a domain.
///
/// A registry "no match" answer is reported as `found == false`; connection and
/// protocol failures are errors.
pub async fn whois_lookup(domain: &str, whois_servers: &str) -> ToolboxResult<WhoisResult> {
    let whois = WhoIs::from_string(whois_servers).map_err(|e| {
        ToolboxError::NetworkError(format!("Failed to initialize WHOIS client: {e}"))
    })?;

    let options = WhoIsLookupOptions::from_string(domain)
        .map_err(|e| ToolboxError::ValidationError(format!("Invalid domain: {e}")))?;

    let raw = whois
        .lookup_async(options)
        .await
        .map_err(|e| ToolboxError::NetworkError(format!("WHOIS query failed: {e}")))?;

    log::debug!("WHOIS response for {domain}: {} bytes", raw.len());

    Ok(parse_whois_response(domain, &raw))
}

/// Parse structured fields from a raw WHOIS response.
fn parse_whois_response(domain: &str, raw: &str) -> WhoisResult {
    WhoisResult {
        domain: domain.to_string(),
        found: !is_not_found(raw),
        name_servers: extract_name_servers(raw),
    }
}

/// An empty body or a registry "no match" phrase.
fn is_not_found(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return true;
    }
    NOT_FOUND_PATTERNS
        .iter()
        .any(|pattern| Regex::new(pattern).is_ok_and(|re| re.is_match(raw)))
}

/// Extract name servers from WHOIS text.
///
/// Keeps only the host part (`nserver: ns1.example.ru. 192.0.2.1` → `ns1.example.ru`).
fn extract_name_servers(text: &str) -> Vec<String> {
    let mut servers = Vec::new();
    let patterns = [
        r"(?im)^\s*Name Server:[ \t]*(\S*)",
        r"(?im)^\s*nserver:[ \t]*(\S*)",
        r"(?im)^\s*DNS:[ \t]*(\S*)",
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            for caps in re.captures_iter(text) {
                if let Some(m) = caps.get(1) {
                    let server = m.as_str().trim().trim_end_matches('.').to_lowercase();
                    if !server.is_empty() && !servers.contains(&server) {
                        servers.push(server);
                    }
                }
            }
        }
    }

    servers
}
