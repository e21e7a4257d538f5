//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use zoneclaim_provider::{
    CreateHostedZoneRequest, HostedZoneProvider, ProviderCredentials, ProviderHostedZone,
    create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的 CallerReference
pub fn generate_test_reference() -> String {
    format!("zoneclaim-test-{}", uuid::Uuid::new_v4())
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn HostedZoneProvider>,
    pub domain: String,
}

impl TestContext {
    /// 从 AWS 环境变量创建 Route 53 测试上下文
    pub fn route53() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let session_token = env::var("AWS_SESSION_TOKEN").ok();
        let domain = env::var("TEST_DOMAIN").ok()?;

        let credentials = ProviderCredentials::route53(
            &access_key_id,
            &secret_access_key,
            session_token.as_deref(),
        )
        .ok()?;
        let provider = create_provider(credentials).ok()?;

        Some(Self { provider, domain })
    }

    /// 创建测试 hosted zone
    pub async fn create_test_zone(&self) -> Option<ProviderHostedZone> {
        let request = CreateHostedZoneRequest {
            name: self.domain.clone(),
            reference: generate_test_reference(),
            comment: Some("zoneclaim integration test".to_string()),
        };
        self.provider.create_hosted_zone(&request).await.ok()
    }

    /// 清理测试 hosted zone
    pub async fn cleanup_zone(&self, zone_id: &str) {
        let _ = self.provider.delete_hosted_zone(zone_id).await;
    }
}
