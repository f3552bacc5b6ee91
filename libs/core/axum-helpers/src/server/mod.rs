//! Server infrastructure module.
//!
//! - Router setup with OpenAPI documentation and common middleware
//! - Graceful shutdown on SIGINT/SIGTERM with a bounded cleanup phase

pub mod app;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_until};
pub use shutdown::shutdown_signal;
