use async_trait::async_trait;

use crate::domain::{AppCommand, DomainError, LaunchRecord, LaunchStatus};

/// Spawns external processes and retains ownership of every child it
/// started, so launches can later be inspected and stopped.
///
/// `spawn` must return as soon as the child exists: it never waits for the
/// child to exit or to become ready.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Start `command` as a background child and register it.
    async fn spawn(&self, command: &AppCommand) -> Result<LaunchRecord, DomainError>;

    /// Current state of a registered launch, via non-blocking wait.
    async fn status(&self, id: &str) -> Result<LaunchStatus, DomainError>;

    /// Kill a registered launch and reap it. Stopping an already-exited
    /// child is not an error.
    async fn stop(&self, id: &str) -> Result<(), DomainError>;

    /// Records of every launch made through this launcher, oldest first.
    async fn list(&self) -> Vec<LaunchRecord>;
}
