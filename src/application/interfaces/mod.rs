mod process_launcher;
mod readiness_probe;

pub use process_launcher::*;
pub use readiness_probe::*;
