pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    AppStatusUseCase, ProcessLauncher, ReadinessProbe, StartAppUseCase, StopAppUseCase,
};

pub use connector::{
    build_router, serve, serve_with_shutdown, Container, ContainerConfig, HttpReadinessProbe,
    MockProcessLauncher, TokioProcessLauncher,
};

pub use domain::{
    started_message, AppCommand, DomainError, LaunchRecord, LaunchStatus, LaunchView, StartReport,
    DEFAULT_APP_URL,
};
