use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Credential};
use mongodb::Client;
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff_if};

/// Build driver options from a [`MongoConfig`]
///
/// The credential is attached only when a username is configured.
pub fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    if config.host.trim().is_empty() {
        return Err(DatabaseError::ConfigError("host must not be empty".to_string()));
    }
    if config.database.trim().is_empty() {
        return Err(DatabaseError::ConfigError(
            "database name must not be empty".to_string(),
        ));
    }

    let mut options = ClientOptions::builder()
        .hosts(vec![mongodb::options::ServerAddress::Tcp {
            host: config.host.clone(),
            port: Some(config.port),
        }])
        .build();

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone();

    if let Some(ref username) = config.username {
        let mut credential = Credential::default();
        credential.username = Some(username.clone());
        credential.password = config.password.clone();
        credential.source = config.auth_source.clone();
        options.credential = Some(credential);
    }

    Ok(options)
}

/// Connect using a MongoConfig and verify the server answers `ping`
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::new("localhost", 27017, "blogs");
/// let client = connect_from_config(&config).await?;
/// let db = client.database(config.database());
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(url = %config.url(), database = %config.database, "Attempting to connect to MongoDB");

    let options = client_options(config)?;
    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect from config, retrying transient failures with exponential backoff
///
/// Configuration errors are returned without retrying.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config_with_retry};
/// use database::common::RetryConfig;
///
/// let config = MongoConfig::from_env()?;
/// let client = connect_from_config_with_retry(&config, Some(RetryConfig::new().with_max_retries(5))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    retry_with_backoff_if(
        || connect_from_config(config),
        retry_config.unwrap_or_default(),
        DatabaseError::is_retryable,
    )
    .await
}
