//! 目标域名

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use zoneclaim_toolbox::{ToolboxError, normalize_domain};

use crate::error::{CoreError, CoreResult};

/// A validated, normalised domain name (lowercase ASCII, no trailing dot).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Validate operator input. IDNs are converted to their ASCII form.
    pub fn parse(input: &str) -> CoreResult<Self> {
        normalize_domain(input).map(Self).map_err(|e| match e {
            ToolboxError::ValidationError(msg) | ToolboxError::NetworkError(msg) => {
                CoreError::Validation(msg)
            }
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Domain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalises() {
        let domain = Domain::parse("  Victim.Example.COM. ").unwrap();
        assert_eq!(domain.as_str(), "victim.example.com");
        assert_eq!(domain.to_string(), "victim.example.com");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "192.0.2.10", "bad domain!"] {
            assert!(
                matches!(Domain::parse(input), Err(CoreError::Validation(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str() {
        let domain: Domain = "example.org".parse().unwrap();
        assert_eq!(domain.as_ref(), "example.org");
    }
}
