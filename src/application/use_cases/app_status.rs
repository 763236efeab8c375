use std::sync::Arc;

use crate::application::ProcessLauncher;
use crate::domain::{DomainError, LaunchView};

/// Use case for listing every launch with its current state.
pub struct AppStatusUseCase {
    launcher: Arc<dyn ProcessLauncher>,
}

impl AppStatusUseCase {
    pub fn new(launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }

    pub async fn execute(&self) -> Result<Vec<LaunchView>, DomainError> {
        let records = self.launcher.list().await;
        let mut views = Vec::with_capacity(records.len());

        for record in records {
            let status = self.launcher.status(&record.id).await?;
            views.push(LaunchView { record, status });
        }

        Ok(views)
    }
}
