//! Operator decision trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Asks the operator a question and returns the raw answer.
///
/// Callers interpret the answer; implementations only do I/O. When no answer
/// can be obtained (closed input), return
/// [`CoreError::Operator`](crate::CoreError::Operator).
#[async_trait]
pub trait DecisionProvider: Send + Sync {
    async fn ask(&self, prompt: &str) -> CoreResult<String>;
}
