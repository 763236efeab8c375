use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::application::ProcessLauncher;
use crate::domain::{AppCommand, DomainError, LaunchRecord, LaunchStatus};

struct MockEntry {
    record: LaunchRecord,
    command: AppCommand,
    running: bool,
}

/// Recording launcher used by `--dry-run` and the test suite.
///
/// Spawns nothing: each launch is registered as a running entry with a fake
/// pid, and `stop` flips it to exited. The recorded commands let tests assert
/// exactly what would have been spawned.
pub struct MockProcessLauncher {
    entries: Mutex<Vec<MockEntry>>,
    fail_with: Option<String>,
}

impl MockProcessLauncher {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A launcher whose every spawn fails with `message`, for exercising the
    /// failure path without depending on a missing binary.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Every command handed to `spawn`, oldest first.
    pub async fn spawned_commands(&self) -> Vec<AppCommand> {
        self.entries
            .lock()
            .await
            .iter()
            .map(|e| e.command.clone())
            .collect()
    }

    pub async fn spawn_count(&self) -> usize {
        self.entries.lock().await.len()
    }
}

impl Default for MockProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessLauncher for MockProcessLauncher {
    async fn spawn(&self, command: &AppCommand) -> Result<LaunchRecord, DomainError> {
        if let Some(message) = &self.fail_with {
            return Err(DomainError::spawn(message.clone()));
        }

        let mut entries = self.entries.lock().await;
        let record = LaunchRecord {
            id: Uuid::new_v4().to_string(),
            pid: Some(4300 + entries.len() as u32),
            program: command.program().to_string(),
            args: command.args().to_vec(),
        };

        debug!("Recorded dry-run launch of `{}`", command);

        entries.push(MockEntry {
            record: record.clone(),
            command: command.clone(),
            running: true,
        });

        Ok(record)
    }

    async fn status(&self, id: &str) -> Result<LaunchStatus, DomainError> {
        let entries = self.entries.lock().await;
        let entry = entries
            .iter()
            .find(|e| e.record.id == id)
            .ok_or_else(|| DomainError::not_found(format!("No launch with id {}", id)))?;

        if entry.running {
            Ok(LaunchStatus::Running)
        } else {
            Ok(LaunchStatus::Exited { code: Some(0) })
        }
    }

    async fn stop(&self, id: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.record.id == id)
            .ok_or_else(|| DomainError::not_found(format!("No launch with id {}", id)))?;

        entry.running = false;
        Ok(())
    }

    async fn list(&self) -> Vec<LaunchRecord> {
        self.entries
            .lock()
            .await
            .iter()
            .map(|e| e.record.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_each_spawn() {
        let launcher = MockProcessLauncher::new();
        let command = AppCommand::npm_start();

        launcher.spawn(&command).await.unwrap();
        launcher.spawn(&command).await.unwrap();

        assert_eq!(launcher.spawn_count().await, 2);
        assert_eq!(launcher.spawned_commands().await, vec![command.clone(), command]);
    }

    #[tokio::test]
    async fn test_mock_stop_marks_exited() {
        let launcher = MockProcessLauncher::new();
        let record = launcher.spawn(&AppCommand::npm_start()).await.unwrap();

        assert!(launcher.status(&record.id).await.unwrap().is_running());

        launcher.stop(&record.id).await.unwrap();

        assert_eq!(
            launcher.status(&record.id).await.unwrap(),
            LaunchStatus::Exited { code: Some(0) }
        );
    }

    #[tokio::test]
    async fn test_failing_mock_returns_spawn_error() {
        let launcher = MockProcessLauncher::failing("npm: command not found");

        let err = launcher.spawn(&AppCommand::npm_start()).await.unwrap_err();

        assert!(err.is_spawn());
        assert_eq!(launcher.spawn_count().await, 0);
    }
}
