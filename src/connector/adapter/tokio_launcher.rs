use async_trait::async_trait;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::application::ProcessLauncher;
use crate::domain::{AppCommand, DomainError, LaunchRecord, LaunchStatus};

struct ManagedChild {
    record: LaunchRecord,
    child: Child,
}

/// Real launcher backed by `tokio::process`.
///
/// Children inherit the panel's environment and stdio: the launched
/// application logs straight to the same terminal, matching how it behaves
/// when started by hand. Every child stays registered here until stopped,
/// so it can be inspected and killed later instead of leaking.
pub struct TokioProcessLauncher {
    children: Mutex<Vec<ManagedChild>>,
}

impl TokioProcessLauncher {
    pub fn new() -> Self {
        Self {
            children: Mutex::new(Vec::new()),
        }
    }
}

impl Default for TokioProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessLauncher for TokioProcessLauncher {
    async fn spawn(&self, command: &AppCommand) -> Result<LaunchRecord, DomainError> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.args());

        if let Some(dir) = command.working_dir() {
            cmd.current_dir(dir);
        }

        let child = cmd
            .spawn()
            .map_err(|e| DomainError::spawn(format!("failed to start `{}`: {}", command, e)))?;

        let record = LaunchRecord {
            id: Uuid::new_v4().to_string(),
            pid: child.id(),
            program: command.program().to_string(),
            args: command.args().to_vec(),
        };

        debug!("Spawned `{}` as launch {}", command, record.id);

        self.children.lock().await.push(ManagedChild {
            record: record.clone(),
            child,
        });

        Ok(record)
    }

    async fn status(&self, id: &str) -> Result<LaunchStatus, DomainError> {
        let mut children = self.children.lock().await;
        let managed = children
            .iter_mut()
            .find(|m| m.record.id == id)
            .ok_or_else(|| DomainError::not_found(format!("No launch with id {}", id)))?;

        match managed.child.try_wait()? {
            None => Ok(LaunchStatus::Running),
            Some(exit) => Ok(LaunchStatus::Exited { code: exit.code() }),
        }
    }

    async fn stop(&self, id: &str) -> Result<(), DomainError> {
        let mut children = self.children.lock().await;
        let managed = children
            .iter_mut()
            .find(|m| m.record.id == id)
            .ok_or_else(|| DomainError::not_found(format!("No launch with id {}", id)))?;

        // Already exited: nothing to kill, just make sure it is reaped.
        if managed.child.try_wait()?.is_none() {
            managed.child.start_kill()?;
        }
        managed.child.wait().await?;

        Ok(())
    }

    async fn list(&self) -> Vec<LaunchRecord> {
        self.children
            .lock()
            .await
            .iter()
            .map(|m| m.record.clone())
            .collect()
    }
}
