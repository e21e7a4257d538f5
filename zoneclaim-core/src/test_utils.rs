//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use tokio::sync::Mutex;
use zoneclaim_provider::{
    CreateHostedZoneRequest, HostedZoneProvider, ProviderError, ProviderHostedZone,
    ProviderMetadata, ProviderType, provider_metadata,
};

use crate::error::{CoreError, CoreResult};
use crate::traits::{DecisionProvider, NsProbe, ProgressSink, ProviderConnector, WhoisSource};
use crate::types::{DelegationState, Domain, ProgressEvent};
use crate::utils::CancellationFlag;

pub fn domain() -> Domain {
    Domain::parse("victim.example.com").unwrap()
}

pub fn hosted_zone(id: &str, name_servers: &[&str]) -> ProviderHostedZone {
    ProviderHostedZone {
        id: id.to_string(),
        name: "victim.example.com".to_string(),
        name_servers: name_servers.iter().map(ToString::to_string).collect(),
    }
}

pub fn throttled() -> ProviderError {
    ProviderError::Throttled {
        provider: "route53".to_string(),
        retry_after: None,
        raw_code: Some("Throttling".to_string()),
        raw_message: Some("Rate exceeded".to_string()),
    }
}

pub fn not_found(zone_id: &str) -> ProviderError {
    ProviderError::HostedZoneNotFound {
        provider: "route53".to_string(),
        zone_id: zone_id.to_string(),
        raw_message: None,
    }
}

pub fn permission_denied() -> ProviderError {
    ProviderError::PermissionDenied {
        provider: "route53".to_string(),
        raw_code: Some("AccessDenied".to_string()),
        raw_message: Some("not authorized to perform route53:DeleteHostedZone".to_string()),
    }
}

// ===== MockProvider =====

/// 按脚本返回 create / delete 结果。delete 脚本耗尽后返回 `Ok(())`。
pub struct MockProvider {
    creates: Mutex<VecDeque<Result<ProviderHostedZone, ProviderError>>>,
    deletes: Mutex<VecDeque<Result<(), ProviderError>>>,
    create_requests: Mutex<Vec<CreateHostedZoneRequest>>,
    deleted: Mutex<Vec<String>>,
    delete_calls: AtomicUsize,
    /// 第 N 次 create 之后触发取消（模拟 Ctrl-C）
    cancel_after: Mutex<Option<(usize, CancellationFlag)>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            creates: Mutex::new(VecDeque::new()),
            deletes: Mutex::new(VecDeque::new()),
            create_requests: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            delete_calls: AtomicUsize::new(0),
            cancel_after: Mutex::new(None),
        }
    }

    pub fn with_create(mut self, result: Result<ProviderHostedZone, ProviderError>) -> Self {
        self.creates.get_mut().push_back(result);
        self
    }

    pub fn with_delete(mut self, result: Result<(), ProviderError>) -> Self {
        self.deletes.get_mut().push_back(result);
        self
    }

    pub async fn cancel_after_creates(&self, creates: usize, flag: CancellationFlag) {
        *self.cancel_after.lock().await = Some((creates, flag));
    }

    pub async fn create_requests(&self) -> Vec<CreateHostedZoneRequest> {
        self.create_requests.lock().await.clone()
    }

    pub async fn create_calls(&self) -> usize {
        self.create_requests.lock().await.len()
    }

    /// 成功删除的 zone，按删除顺序
    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.lock().await.clone()
    }

    pub async fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostedZoneProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn metadata() -> ProviderMetadata {
        provider_metadata(ProviderType::Route53)
    }

    async fn validate_credentials(&self) -> zoneclaim_provider::Result<bool> {
        Ok(true)
    }

    async fn create_hosted_zone(
        &self,
        req: &CreateHostedZoneRequest,
    ) -> zoneclaim_provider::Result<ProviderHostedZone> {
        let calls = {
            let mut requests = self.create_requests.lock().await;
            requests.push(req.clone());
            requests.len()
        };
        if let Some((after, flag)) = &*self.cancel_after.lock().await
            && calls >= *after
        {
            flag.cancel();
        }
        self.creates
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected create #{calls}"))
    }

    async fn delete_hosted_zone(&self, zone_id: &str) -> zoneclaim_provider::Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let result = self.deletes.lock().await.pop_front().unwrap_or(Ok(()));
        if result.is_ok() {
            self.deleted.lock().await.push(zone_id.to_string());
        }
        result
    }
}

// ===== MockConnector =====

pub struct MockConnector {
    provider: Arc<MockProvider>,
    connects: AtomicUsize,
    cancel_on_connect: StdMutex<Option<CancellationFlag>>,
}

impl MockConnector {
    pub fn new(provider: Arc<MockProvider>) -> Self {
        Self {
            provider,
            connects: AtomicUsize::new(0),
            cancel_on_connect: StdMutex::new(None),
        }
    }

    /// Simulate Ctrl-C arriving while credentials are being checked.
    pub fn cancel_on_connect(&self, cancel: CancellationFlag) {
        if let Ok(mut slot) = self.cancel_on_connect.lock() {
            *slot = Some(cancel);
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderConnector for MockConnector {
    fn metadata(&self) -> ProviderMetadata {
        provider_metadata(ProviderType::Route53)
    }

    async fn connect(&self) -> CoreResult<Arc<dyn HostedZoneProvider>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if let Ok(slot) = self.cancel_on_connect.lock()
            && let Some(cancel) = slot.as_ref()
        {
            cancel.cancel();
        }
        Ok(self.provider.clone())
    }
}

// ===== MockWhoisSource =====

pub enum WhoisScript {
    Found(Vec<String>),
    NotFound,
    Fail(String),
}

pub struct MockWhoisSource {
    script: WhoisScript,
    calls: AtomicUsize,
}

impl MockWhoisSource {
    pub fn new(script: WhoisScript) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WhoisSource for MockWhoisSource {
    async fn name_servers(&self, _domain: &Domain) -> CoreResult<Option<Vec<String>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            WhoisScript::Found(names) => Ok(Some(names.clone())),
            WhoisScript::NotFound => Ok(None),
            WhoisScript::Fail(msg) => Err(CoreError::Whois(msg.clone())),
        }
    }
}

// ===== MockNsProbe =====

pub enum ProbeScript {
    State(DelegationState),
    Inconclusive(String),
}

pub struct MockNsProbe {
    script: ProbeScript,
}

impl MockNsProbe {
    pub fn new(script: ProbeScript) -> Self {
        Self { script }
    }
}

#[async_trait]
impl NsProbe for MockNsProbe {
    async fn probe(&self, _domain: &Domain) -> CoreResult<DelegationState> {
        match &self.script {
            ProbeScript::State(state) => Ok(state.clone()),
            ProbeScript::Inconclusive(msg) => Err(CoreError::DnsInconclusive(msg.clone())),
        }
    }
}

// ===== ScriptedDecisions =====

/// 依次返回预设回答；回答耗尽时视为输入已关闭。
pub struct ScriptedDecisions {
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedDecisions {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl DecisionProvider for ScriptedDecisions {
    async fn ask(&self, prompt: &str) -> CoreResult<String> {
        self.prompts.lock().await.push(prompt.to_string());
        self.answers
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| CoreError::Operator("input closed".to_string()))
    }
}

// ===== RecordingProgress =====

pub struct RecordingProgress {
    events: StdMutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self {
            events: StdMutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn on_event(&self, event: &ProgressEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
