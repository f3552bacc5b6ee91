//! Shared application state passed to the API routers.

use domain_blogs::{BlogService, MongoBlogRepository};
use mongodb::Client;
use std::sync::Arc;

/// Shared application state.
///
/// Cloning is cheap: the client and service share their pools and data.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// Blog service backed by the configured collection
    pub blogs: Arc<BlogService<MongoBlogRepository>>,
}

impl AppState {
    pub fn new(config: crate::config::Config, mongo_client: Client) -> Self {
        let db = mongo_client.database(config.mongodb.database());
        let repository = MongoBlogRepository::new(db, config.mongodb.collection());
        let blogs = Arc::new(BlogService::with_timeouts(repository, config.timeouts));

        Self {
            config,
            mongo_client,
            blogs,
        }
    }
}
