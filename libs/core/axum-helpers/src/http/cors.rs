use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, env_optional};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

const METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Creates a CORS layer restricted to the given origins.
///
/// - Methods used by the API (GET, POST, PUT, DELETE, OPTIONS)
/// - Content-Type and Accept headers
/// - Credentials allowed
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Creates a CORS layer accepting any origin, without credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(METHODS)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated).
///
/// Unset or blank falls back to [`create_permissive_cors_layer`].
pub fn cors_layer_from_env() -> Result<CorsLayer, ConfigError> {
    let Some(raw) = env_optional("CORS_ALLOWED_ORIGIN") else {
        return Ok(create_permissive_cors_layer());
    };

    let origins = parse_origins(&raw)?;
    tracing::info!(origins = %raw, "CORS restricted to configured origins");
    Ok(create_cors_layer(origins))
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: format!("{origin}: {e}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, https://blog.example.com,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://blog.example.com");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header() {
        let err = parse_origins("http://bad\norigin").unwrap_err();
        assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
    }

    #[test]
    fn test_cors_layer_from_env_unset_is_permissive() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env().is_ok());
        });
    }

    #[test]
    fn test_cors_layer_from_env_with_origin() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000"), || {
            assert!(cors_layer_from_env().is_ok());
        });
    }
}
