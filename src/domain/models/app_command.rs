use std::path::{Path, PathBuf};

use serde::Serialize;

/// Command line for the external application the panel launches.
///
/// The default is `npm start` in the current working directory, which is what
/// the Next.js demo expects. The builder methods exist so deployments can
/// point the panel at a checkout elsewhere on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppCommand {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl AppCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// The fixed start command of the external Next.js application.
    pub fn npm_start() -> Self {
        Self::new("npm").with_args(["start"])
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Full argv as spawned, program first.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(1 + self.args.len());
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl std::fmt::Display for AppCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}
