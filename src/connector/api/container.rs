use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{
    AppStatusUseCase, ProcessLauncher, ReadinessProbe, StartAppUseCase, StopAppUseCase,
};
use crate::domain::AppCommand;
use crate::{HttpReadinessProbe, MockProcessLauncher, TokioProcessLauncher};

pub struct ContainerConfig {
    /// Directory containing the external application (where `npm start` runs).
    pub app_dir: String,
    /// URL the launched application advertises.
    pub app_url: String,
    /// Record launches instead of spawning real processes.
    pub dry_run: bool,
    /// Poll the application URL after each launch and log the outcome.
    pub wait_ready: bool,
    /// How long the readiness poll may take before giving up.
    pub probe_deadline: Duration,
}

pub struct Container {
    launcher: Arc<dyn ProcessLauncher>,
    probe: Option<Arc<dyn ReadinessProbe>>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let launcher: Arc<dyn ProcessLauncher> = if config.dry_run {
            debug!("Using recording launcher (dry run)");
            Arc::new(MockProcessLauncher::new())
        } else {
            Arc::new(TokioProcessLauncher::new())
        };

        let probe: Option<Arc<dyn ReadinessProbe>> = if config.wait_ready {
            Some(Arc::new(HttpReadinessProbe::new(config.probe_deadline)?))
        } else {
            None
        };

        Ok(Self {
            launcher,
            probe,
            config,
        })
    }

    /// Build a container around an existing launcher. Test seam.
    pub fn with_launcher(config: ContainerConfig, launcher: Arc<dyn ProcessLauncher>) -> Self {
        Self {
            launcher,
            probe: None,
            config,
        }
    }

    /// The fixed start command, rooted in the configured application directory.
    pub fn app_command(&self) -> AppCommand {
        AppCommand::npm_start().with_working_dir(&self.config.app_dir)
    }

    pub fn start_use_case(&self) -> StartAppUseCase {
        let mut use_case = StartAppUseCase::new(
            self.launcher.clone(),
            self.app_command(),
            &self.config.app_url,
        );

        if let Some(probe) = self.probe.clone() {
            use_case = use_case.with_readiness_probe(probe);
        }

        use_case
    }

    pub fn status_use_case(&self) -> AppStatusUseCase {
        AppStatusUseCase::new(self.launcher.clone())
    }

    pub fn stop_use_case(&self) -> StopAppUseCase {
        StopAppUseCase::new(self.launcher.clone())
    }

    pub fn app_url(&self) -> &str {
        &self.config.app_url
    }
}
