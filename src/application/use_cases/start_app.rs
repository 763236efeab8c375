use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{ProcessLauncher, ReadinessProbe};
use crate::domain::{started_message, AppCommand, DomainError, StartReport};

/// Use case for starting the external application.
///
/// Spawns the configured command once and replies with the fixed status
/// string. The reply never depends on whether the application actually comes
/// up: when a readiness probe is attached its outcome is only logged, so the
/// reply stays byte-for-byte identical in both modes.
pub struct StartAppUseCase {
    launcher: Arc<dyn ProcessLauncher>,
    probe: Option<Arc<dyn ReadinessProbe>>,
    command: AppCommand,
    app_url: String,
}

impl StartAppUseCase {
    pub fn new(
        launcher: Arc<dyn ProcessLauncher>,
        command: AppCommand,
        app_url: impl Into<String>,
    ) -> Self {
        Self {
            launcher,
            probe: None,
            command,
            app_url: app_url.into(),
        }
    }

    pub fn with_readiness_probe(mut self, probe: Arc<dyn ReadinessProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub async fn execute(&self) -> Result<StartReport, DomainError> {
        let launch = self.launcher.spawn(&self.command).await?;

        info!(
            "Started `{}` (launch {}, pid {:?})",
            self.command, launch.id, launch.pid
        );

        if let Some(probe) = &self.probe {
            match probe.poll_until_ready(&self.app_url).await {
                Ok(true) => info!("Application is answering at {}", self.app_url),
                Ok(false) => warn!(
                    "Application did not answer at {} before the probe deadline",
                    self.app_url
                ),
                Err(e) => warn!("Readiness probe failed: {}", e),
            }
        }

        Ok(StartReport {
            message: started_message(&self.app_url),
            launch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::connector::MockProcessLauncher;
    use crate::domain::DEFAULT_APP_URL;

    fn use_case(launcher: Arc<MockProcessLauncher>) -> StartAppUseCase {
        StartAppUseCase::new(launcher, AppCommand::npm_start(), DEFAULT_APP_URL)
    }

    #[tokio::test]
    async fn test_execute_returns_fixed_message_and_spawns_once() {
        let launcher = Arc::new(MockProcessLauncher::new());
        let report = use_case(launcher.clone()).execute().await.unwrap();

        assert_eq!(report.message, started_message(DEFAULT_APP_URL));
        assert!(report.message.contains("http://localhost:3000"));

        let commands = launcher.spawned_commands().await;
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].argv(), vec!["npm".to_string(), "start".to_string()]);
    }

    #[tokio::test]
    async fn test_execute_twice_replies_identically() {
        let launcher = Arc::new(MockProcessLauncher::new());
        let use_case = use_case(launcher.clone());

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first.message, second.message);
        assert_eq!(launcher.spawn_count().await, 2);
    }

    #[tokio::test]
    async fn test_spawn_failure_propagates() {
        let launcher = Arc::new(MockProcessLauncher::failing("npm: command not found"));

        let err = use_case(launcher).execute().await.unwrap_err();

        assert!(err.is_spawn());
    }

    struct NeverReadyProbe;

    #[async_trait]
    impl ReadinessProbe for NeverReadyProbe {
        async fn poll_until_ready(&self, _url: &str) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_probe_outcome_never_changes_the_reply() {
        let launcher = Arc::new(MockProcessLauncher::new());
        let use_case = use_case(launcher).with_readiness_probe(Arc::new(NeverReadyProbe));

        let report = use_case.execute().await.unwrap();

        assert_eq!(report.message, started_message(DEFAULT_APP_URL));
    }
}
