//! MongoDB connector and utilities
//!
//! Client construction from discrete connection settings, startup retry and
//! ping-based health probes.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{client_options, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
