use core_config::{FromEnv, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_blogs::OperationTimeouts;

pub use core_config::Environment;

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub timeouts: OperationTimeouts,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            mongodb: MongoConfig::from_env()?,
            server: ServerConfig::from_env()?,
            timeouts: OperationTimeouts::from_env()?,
            environment: Environment::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_env_uses_database_as_collection() {
        temp_env::with_vars(
            [
                ("DB_HOST", Some("mongo.internal")),
                ("DB_PORT", Some("27018")),
                ("DB_DATABASE", Some("posts")),
                ("DB_COLLECTION", None),
                ("PORT", Some("9000")),
                ("BLOG_CREATE_TIMEOUT_MS", Some("2500")),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.mongodb.url(), "mongodb://mongo.internal:27018/");
                assert_eq!(config.mongodb.database(), "posts");
                assert_eq!(config.mongodb.collection(), "posts");
                assert_eq!(config.server.port, 9000);
                assert_eq!(config.timeouts.create, Duration::from_millis(2500));
            },
        );
    }

    #[test]
    fn test_from_env_requires_database() {
        temp_env::with_var_unset("DB_DATABASE", || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_from_env_rejects_bad_port() {
        temp_env::with_vars(
            [("DB_DATABASE", Some("posts")), ("PORT", Some("eighty"))],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
