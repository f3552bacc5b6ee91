//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that runs MongoDB in a container for testing.

use database::mongodb::{self, Client, Database, MongoConfig};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::mongo::Mongo;

const MONGO_PORT: u16 = 27017;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let collection = mongo.database().collection::<mongodb::bson::Document>("blogs");
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub config: MongoConfig,
}

impl TestMongo {
    /// Start a MongoDB container and connect to a database named `blogs`
    pub async fn new() -> Self {
        Self::with_database("blogs").await
    }

    /// Start a MongoDB container and connect to the given database
    pub async fn with_database(database: &str) -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host = container
            .get_host()
            .await
            .expect("Failed to get MongoDB host")
            .to_string();
        let port = container
            .get_host_port_ipv4(MONGO_PORT)
            .await
            .expect("Failed to get MongoDB port");

        let config = MongoConfig::new(host, port, database).with_app_name("test-utils");

        let client = mongodb::connect_from_config_with_retry(&config, None)
            .await
            .expect("Failed to connect to MongoDB");

        tracing::info!(port, database, "Test MongoDB ready");

        Self {
            container,
            client,
            config,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Handle to the configured database
    pub fn database(&self) -> Database {
        self.client.database(self.config.database())
    }

    /// Drop every document in the configured collection
    pub async fn clear(&self) {
        self.database()
            .collection::<::mongodb::bson::Document>(self.config.collection())
            .delete_many(::mongodb::bson::doc! {})
            .await
            .expect("Failed to clear collection");
    }
}
