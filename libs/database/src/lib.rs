//! Database library providing the MongoDB connector used by the blog service
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, retry and health probes
//! - `config` - Load [`mongodb::MongoConfig`] through `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::new("localhost", 27017, "blogs");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
