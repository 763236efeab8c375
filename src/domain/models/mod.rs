mod app_command;
mod launch;

pub use app_command::*;
pub use launch::*;
