pub mod container;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig};
pub use router::build_router;
pub use server::{serve, serve_with_shutdown};
