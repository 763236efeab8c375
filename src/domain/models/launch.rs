use serde::Serialize;

/// Default URL where the external Next.js application serves once started.
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// The status string returned after a launch.
///
/// Deliberately unconditional: it is produced right after the spawn succeeds
/// and does not claim the application is already listening. See the
/// `ReadinessProbe` for the opt-in check.
pub fn started_message(app_url: &str) -> String {
    format!(
        "Next.js server started. It is reachable at {}.",
        app_url
    )
}

/// One launched child process, as retained by the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRecord {
    pub id: String,
    pub pid: Option<u32>,
    pub program: String,
    pub args: Vec<String>,
}

/// Current state of a launched child, from a non-blocking wait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LaunchStatus {
    Running,
    Exited { code: Option<i32> },
}

impl LaunchStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Outcome of the start use case: the user-facing message plus the record of
/// the child it spawned.
#[derive(Debug, Clone, Serialize)]
pub struct StartReport {
    pub message: String,
    pub launch: LaunchRecord,
}

/// A launch joined with its current status, for the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchView {
    #[serde(flatten)]
    pub record: LaunchRecord,
    pub status: LaunchStatus,
}
