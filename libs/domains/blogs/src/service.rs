//! Blog Service - deadlines and request validation in front of the repository

use core_config::{ConfigError, FromEnv, env_parse_or};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, warn};
use validator::Validate;

use crate::error::{BlogError, BlogResult};
use crate::models::{Blog, CreateBlog, UpdateBlog};
use crate::repository::BlogRepository;

/// Per-operation deadlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTimeouts {
    pub health: Duration,
    pub create: Duration,
    /// Reads, updates and deletes
    pub query: Duration,
}

const DEFAULT_HEALTH_TIMEOUT_MS: u64 = 1_000;
const DEFAULT_CREATE_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_QUERY_TIMEOUT_MS: u64 = 1_000;

impl Default for OperationTimeouts {
    fn default() -> Self {
        Self {
            health: Duration::from_millis(DEFAULT_HEALTH_TIMEOUT_MS),
            create: Duration::from_millis(DEFAULT_CREATE_TIMEOUT_MS),
            query: Duration::from_millis(DEFAULT_QUERY_TIMEOUT_MS),
        }
    }
}

impl FromEnv for OperationTimeouts {
    /// Reads from environment variables:
    /// - BLOG_HEALTH_TIMEOUT_MS: defaults to 1000
    /// - BLOG_CREATE_TIMEOUT_MS: defaults to 10000
    /// - BLOG_QUERY_TIMEOUT_MS: defaults to 1000
    fn from_env() -> Result<Self, ConfigError> {
        let millis = |key: &str, default: u64| env_parse_or(key, default).map(Duration::from_millis);

        Ok(Self {
            health: millis("BLOG_HEALTH_TIMEOUT_MS", DEFAULT_HEALTH_TIMEOUT_MS)?,
            create: millis("BLOG_CREATE_TIMEOUT_MS", DEFAULT_CREATE_TIMEOUT_MS)?,
            query: millis("BLOG_QUERY_TIMEOUT_MS", DEFAULT_QUERY_TIMEOUT_MS)?,
        })
    }
}

/// Blog service running every repository call under its deadline
pub struct BlogService<R: BlogRepository> {
    repository: Arc<R>,
    timeouts: OperationTimeouts,
}

impl<R: BlogRepository> BlogService<R> {
    /// Create a new BlogService with default deadlines
    pub fn new(repository: R) -> Self {
        Self::with_timeouts(repository, OperationTimeouts::default())
    }

    pub fn with_timeouts(repository: R, timeouts: OperationTimeouts) -> Self {
        Self {
            repository: Arc::new(repository),
            timeouts,
        }
    }

    pub fn timeouts(&self) -> OperationTimeouts {
        self.timeouts
    }

    /// Check the store answers within the health deadline
    #[instrument(skip(self))]
    pub async fn health(&self) -> BlogResult<()> {
        self.repository.health(self.timeouts.health).await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_blog(&self, input: CreateBlog) -> BlogResult<String> {
        input
            .validate()
            .map_err(|e| BlogError::Validation(e.to_string()))?;

        with_deadline(
            "create_blog",
            self.timeouts.create,
            self.repository.create_blog(input),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_blog(&self, id: &str) -> BlogResult<Blog> {
        with_deadline("get_blog", self.timeouts.query, self.repository.get_blog(id)).await
    }

    /// All blogs, or only those matching `term` when it is non-empty
    #[instrument(skip(self))]
    pub async fn list_blogs(&self, term: Option<&str>) -> BlogResult<Vec<Blog>> {
        match term.filter(|t| !t.is_empty()) {
            Some(term) => {
                with_deadline(
                    "get_blogs_by_term",
                    self.timeouts.query,
                    self.repository.get_blogs_by_term(term),
                )
                .await
            }
            None => with_deadline("get_blogs", self.timeouts.query, self.repository.get_blogs()).await,
        }
    }

    #[instrument(skip(self, input), fields(blog_id = %input.id))]
    pub async fn update_blog(&self, input: UpdateBlog) -> BlogResult<Blog> {
        with_deadline(
            "update_blog",
            self.timeouts.query,
            self.repository.update_blog(input),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_blog(&self, id: &str) -> BlogResult<Blog> {
        with_deadline("delete_blog", self.timeouts.query, self.repository.delete_blog(id)).await
    }
}

/// Run `operation`, abandoning it with `Connectivity` once `deadline` passes
async fn with_deadline<T>(
    name: &'static str,
    deadline: Duration,
    operation: impl Future<Output = BlogResult<T>>,
) -> BlogResult<T> {
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => {
            warn!(operation = name, ?deadline, "Blog operation timed out");
            Err(BlogError::Connectivity(format!(
                "{} timed out after {:?}",
                name, deadline
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogErrorKind;
    use crate::repository::MockBlogRepository;
    use mockall::predicate::eq;

    fn create_input(title: &str) -> CreateBlog {
        CreateBlog {
            title: title.to_string(),
            category: "Programming".to_string(),
            content: "Body".to_string(),
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_blog_validates_before_repository() {
        let mut repo = MockBlogRepository::new();
        repo.expect_create_blog().never();

        let service = BlogService::new(repo);
        let err = service.create_blog(create_input("")).await.unwrap_err();

        assert_eq!(err.kind(), BlogErrorKind::ValidationFailure);
    }

    #[tokio::test]
    async fn test_create_blog_returns_repository_id() {
        let mut repo = MockBlogRepository::new();
        repo.expect_create_blog()
            .times(1)
            .returning(|_| Ok("6650b1f0c0a8f3a1d2e4b5c6".to_string()));

        let service = BlogService::new(repo);
        let id = service.create_blog(create_input("Rust")).await.unwrap();

        assert_eq!(id, "6650b1f0c0a8f3a1d2e4b5c6");
    }

    #[tokio::test]
    async fn test_list_blogs_routes_on_term() {
        let mut repo = MockBlogRepository::new();
        repo.expect_get_blogs().times(2).returning(|| Ok(vec![]));
        repo.expect_get_blogs_by_term()
            .withf(|term| term == "rust")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = BlogService::new(repo);
        service.list_blogs(None).await.unwrap();
        service.list_blogs(Some("")).await.unwrap();
        service.list_blogs(Some("rust")).await.unwrap();
    }

    #[tokio::test]
    async fn test_health_passes_configured_deadline() {
        let timeouts = OperationTimeouts {
            health: Duration::from_millis(250),
            ..OperationTimeouts::default()
        };

        let mut repo = MockBlogRepository::new();
        repo.expect_health()
            .with(eq(Duration::from_millis(250)))
            .times(1)
            .returning(|_| Ok(()));

        let service = BlogService::with_timeouts(repo, timeouts);
        service.health().await.unwrap();
    }

    #[tokio::test]
    async fn test_deadline_expiry_is_connectivity_failure() {
        let result: BlogResult<()> = with_deadline("slow", Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok(())
        })
        .await;

        assert_eq!(result.unwrap_err().kind(), BlogErrorKind::ConnectivityFailure);
    }

    #[test]
    fn test_operation_timeouts_from_env() {
        temp_env::with_vars(
            [
                ("BLOG_HEALTH_TIMEOUT_MS", Some("500")),
                ("BLOG_CREATE_TIMEOUT_MS", None),
                ("BLOG_QUERY_TIMEOUT_MS", Some("2000")),
            ],
            || {
                let timeouts = OperationTimeouts::from_env().unwrap();
                assert_eq!(timeouts.health, Duration::from_millis(500));
                assert_eq!(timeouts.create, Duration::from_secs(10));
                assert_eq!(timeouts.query, Duration::from_secs(2));
            },
        );
    }

    #[test]
    fn test_operation_timeouts_from_env_defaults() {
        temp_env::with_vars_unset(
            [
                "BLOG_HEALTH_TIMEOUT_MS",
                "BLOG_CREATE_TIMEOUT_MS",
                "BLOG_QUERY_TIMEOUT_MS",
            ],
            || {
                assert_eq!(
                    OperationTimeouts::from_env().unwrap(),
                    OperationTimeouts::default()
                );
            },
        );
    }

    #[test]
    fn test_operation_timeouts_from_env_invalid() {
        temp_env::with_var("BLOG_QUERY_TIMEOUT_MS", Some("fast"), || {
            assert!(OperationTimeouts::from_env().is_err());
        });
    }
}
