//! 业务逻辑服务层

mod acquisition;
mod confirmation;
mod credentials;
mod nameserver_resolver;
mod takeover_checker;
mod toolbox;
mod workflow;

pub use acquisition::AcquisitionRun;
pub use confirmation::{confirm_cleanup, confirm_start};
pub use credentials::{CredentialConnector, CredentialOptions};
pub use nameserver_resolver::NameserverResolver;
pub use takeover_checker::TakeoverStateChecker;
pub use toolbox::{ToolboxNsProbe, ToolboxWhoisSource};
pub use workflow::{ClaimRequest, ClaimWorkflow};

use std::sync::Arc;

use crate::traits::{DecisionProvider, NsProbe, ProgressSink, ProviderConnector, WhoisSource};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入网络查询、凭证与交互实现。
pub struct ServiceContext {
    /// WHOIS 查询
    pub whois: Arc<dyn WhoisSource>,
    /// 线上 NS 查询
    pub ns_probe: Arc<dyn NsProbe>,
    /// Provider 连接（凭证在此加载）
    pub connector: Arc<dyn ProviderConnector>,
    /// 运营者交互
    pub decisions: Arc<dyn DecisionProvider>,
    /// 进度输出
    pub progress: Arc<dyn ProgressSink>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        whois: Arc<dyn WhoisSource>,
        ns_probe: Arc<dyn NsProbe>,
        connector: Arc<dyn ProviderConnector>,
        decisions: Arc<dyn DecisionProvider>,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            whois,
            ns_probe,
            connector,
            decisions,
            progress,
        }
    }

    /// 使用真实网络查询创建上下文
    #[must_use]
    pub fn with_network_lookups(
        connector: Arc<dyn ProviderConnector>,
        decisions: Arc<dyn DecisionProvider>,
        progress: Arc<dyn ProgressSink>,
    ) -> Self {
        Self::new(
            Arc::new(ToolboxWhoisSource),
            Arc::new(ToolboxNsProbe),
            connector,
            decisions,
            progress,
        )
    }
}
