mod app_status;
mod start_app;
mod stop_app;

pub use app_status::*;
pub use start_app::*;
pub use stop_app::*;
