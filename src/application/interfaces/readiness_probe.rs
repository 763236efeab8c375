use async_trait::async_trait;

use crate::domain::DomainError;

/// Checks whether the launched application answers HTTP at its URL.
///
/// Advisory by design: callers log the outcome but must not let it change
/// the launch reply.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    /// Poll `url` until it answers or the probe's deadline passes.
    /// Returns `true` if any HTTP response arrived in time.
    async fn poll_until_ready(&self, url: &str) -> Result<bool, DomainError>;
}
