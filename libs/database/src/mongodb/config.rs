#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_or_default, env_parse_or, env_required};

/// MongoDB connection settings
///
/// Built from discrete host/port/credential parts rather than a connection
/// string. Credentials stay out of [`MongoConfig::url`] so the URL is safe to log.
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::new("localhost", 27017, "blogs")
///     .with_credentials("root", "pass")
///     .with_auth_source("admin");
/// ```
#[derive(Clone)]
pub struct MongoConfig {
    pub host: String,
    pub port: u16,

    /// Credentials are applied only when a username is set
    pub username: Option<String>,
    pub password: Option<String>,

    /// Database holding the users collection used for authentication
    pub auth_source: Option<String>,

    /// Database name to use
    pub database: String,

    /// Collection name, defaults to the database name
    pub collection: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(host: impl Into<String>, port: u16, database: impl Into<String>) -> Self {
        let database = database.into();
        Self {
            host: host.into(),
            port,
            collection: database.clone(),
            database,
            ..Self::default()
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_auth_source(mut self, auth_source: impl Into<String>) -> Self {
        self.auth_source = Some(auth_source.into());
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_server_selection_timeout(mut self, secs: u64) -> Self {
        self.server_selection_timeout_secs = secs;
        self
    }

    /// Connection URL without credentials
    pub fn url(&self) -> String {
        format!("mongodb://{}:{}/", self.host, self.port)
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn has_credentials(&self) -> bool {
        self.username.is_some()
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            username: None,
            password: None,
            auth_source: None,
            database: "blogs".to_string(),
            collection: "blogs".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

// Manual impl keeps the password out of logs.
impl std::fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("auth_source", &self.auth_source)
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("app_name", &self.app_name)
            .field("max_pool_size", &self.max_pool_size)
            .field("min_pool_size", &self.min_pool_size)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field(
                "server_selection_timeout_secs",
                &self.server_selection_timeout_secs,
            )
            .finish()
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `DB_HOST` (optional, default: localhost)
/// - `DB_PORT` (optional, default: 27017)
/// - `DB_USERNAME` / `DB_PASSWORD` (optional)
/// - `DB_AUTHSOURCE` (optional)
/// - `DB_DATABASE` (required)
/// - `DB_COLLECTION` (optional, default: value of `DB_DATABASE`)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let database = env_required("DB_DATABASE")?;
        let collection = env_optional("DB_COLLECTION").unwrap_or_else(|| database.clone());

        Ok(Self {
            host: env_or_default("DB_HOST", &defaults.host),
            port: env_parse_or("DB_PORT", defaults.port)?,
            username: env_optional("DB_USERNAME"),
            password: env_optional("DB_PASSWORD"),
            auth_source: env_optional("DB_AUTHSOURCE"),
            database,
            collection,
            app_name: env_optional("MONGODB_APP_NAME"),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}
