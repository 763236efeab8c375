mod http_probe;
mod mock_launcher;
mod tokio_launcher;

pub use http_probe::*;
pub use mock_launcher::*;
pub use tokio_launcher::*;
