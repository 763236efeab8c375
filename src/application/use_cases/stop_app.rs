use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ProcessLauncher;
use crate::domain::{DomainError, LaunchRecord};

/// Use case for stopping every child the launcher still owns.
pub struct StopAppUseCase {
    launcher: Arc<dyn ProcessLauncher>,
}

impl StopAppUseCase {
    pub fn new(launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }

    /// Stop all running launches. Returns how many were stopped.
    ///
    /// Best-effort: a launch that fails to poll or kill is logged and
    /// skipped, never blocking teardown of the remaining children.
    pub async fn execute(&self) -> usize {
        let records = self.launcher.list().await;
        let mut stopped = 0;

        for record in records {
            match self.stop_if_running(&record).await {
                Ok(true) => stopped += 1,
                Ok(false) => {}
                Err(e) => warn!("Skipping launch {}: {}", record.id, e),
            }
        }

        stopped
    }

    async fn stop_if_running(&self, record: &LaunchRecord) -> Result<bool, DomainError> {
        if !self.launcher.status(&record.id).await?.is_running() {
            return Ok(false);
        }

        self.launcher.stop(&record.id).await?;
        info!("Stopped launch {} (pid {:?})", record.id, record.pid);

        Ok(true)
    }
}
