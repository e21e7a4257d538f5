//! Route 53 `HostedZoneProvider` trait 实现

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, HostedZoneProvider, ProviderErrorMapper};
use crate::types::{
    CreateHostedZoneRequest, ProviderHostedZone, ProviderMetadata, ProviderType,
};

use super::Route53Provider;
use super::types::{create_hosted_zone_body, parse_create_response, parse_hosted_zone_count};

/// Substring shared by every Route 53 delegation nameserver (`ns-N.awsdns-NN.tld`).
pub(crate) const ROUTE53_DELEGATION_MARKER: &str = "awsdns";

#[async_trait]
impl HostedZoneProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: ProviderType::Route53,
            name: "Amazon Route 53".to_string(),
            delegation_marker: ROUTE53_DELEGATION_MARKER.to_string(),
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self
            .send(
                Method::GET,
                "hostedzonecount",
                None,
                ErrorContext::default(),
                self.max_retries,
            )
            .await
        {
            Ok(body) => {
                if let Some(count) = parse_hosted_zone_count(&body) {
                    log::debug!("账户当前 hosted zone 数量: {count}");
                }
                Ok(true)
            }
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            // 签名有效但缺少 ListHostedZones 权限，创建/删除仍可能被允许
            Err(e @ ProviderError::PermissionDenied { .. }) => {
                log::warn!("凭证有效但无法读取 hosted zone 数量: {e}");
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    async fn create_hosted_zone(
        &self,
        req: &CreateHostedZoneRequest,
    ) -> Result<ProviderHostedZone> {
        let ctx = ErrorContext {
            reference: Some(req.reference.clone()),
            zone_name: Some(req.name.clone()),
            ..Default::default()
        };

        let payload = create_hosted_zone_body(req)
            .map_err(|e| self.parse_error(format!("Cannot encode CreateHostedZoneRequest: {e}")))?;

        // 创建不可重放：重试可能留下调用方不知道的 zone
        let body = self
            .send(Method::POST, "hostedzone", Some(payload), ctx, 0)
            .await?;

        parse_create_response(&body)
            .map_err(|e| self.parse_error(format!("Invalid CreateHostedZoneResponse: {e}")))
    }

    async fn delete_hosted_zone(&self, zone_id: &str) -> Result<()> {
        let ctx = ErrorContext {
            zone_id: Some(zone_id.to_string()),
            ..Default::default()
        };

        self.send(
            Method::DELETE,
            &format!("hostedzone/{zone_id}"),
            None,
            ctx,
            self.max_retries,
        )
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_describes_route53() {
        let meta = Route53Provider::metadata();
        assert_eq!(meta.id, ProviderType::Route53);
        assert_eq!(meta.delegation_marker, "awsdns");
    }

    #[test]
    fn id_matches_error_provider_name() {
        let provider = Route53Provider::new("AKID".to_string(), "secret".to_string());
        assert_eq!(provider.id(), provider.provider_name());
    }
}
