use mongodb::bson::doc;
use mongodb::{Client, Database};
use std::time::Instant;

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the server answered the ping
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    /// Round-trip time in milliseconds
    pub response_time_ms: u64,
}

async fn ping(db: &Database) -> mongodb::error::Result<()> {
    db.run_command(doc! { "ping": 1 }).await.map(|_| ())
}

/// Check MongoDB health with a `ping` against the admin database
pub async fn check_health(client: &Client) -> bool {
    ping(&client.database("admin")).await.is_ok()
}

/// Check MongoDB health with latency and error details
///
/// # Example
/// ```ignore
/// let status = check_health_detailed(&client).await;
/// if !status.healthy {
///     warn!(message = ?status.message, "MongoDB unhealthy");
/// }
/// ```
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = ping(&client.database("admin")).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    HealthStatus {
        healthy: result.is_ok(),
        message: result.err().map(|e| e.to_string()),
        response_time_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::options::ClientOptions;
    use std::time::Duration;

    #[tokio::test]
    async fn test_check_health_detailed_unreachable() {
        let mut options = ClientOptions::parse("mongodb://127.0.0.1:1/").await.unwrap();
        options.server_selection_timeout = Some(Duration::from_millis(200));
        let client = Client::with_options(options).unwrap();

        let status = check_health_detailed(&client).await;
        assert!(!status.healthy);
        assert!(status.message.is_some());
        assert!(!check_health(&client).await);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let status = check_health_detailed(&client).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }
}
