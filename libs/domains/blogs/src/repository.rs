use async_trait::async_trait;
use std::time::Duration;

use crate::error::BlogResult;
use crate::models::{Blog, CreateBlog, UpdateBlog};

/// Repository trait for Blog persistence
///
/// Identifiers cross this boundary as hex strings; implementations parse and
/// reject malformed ones with `InvalidIdentifier` before touching the store.
/// Bulk reads that match nothing fail with `NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Ping the store, failing with `Connectivity` if it does not answer within `deadline`
    async fn health(&self, deadline: Duration) -> BlogResult<()>;

    /// Insert a new blog and return its identifier
    async fn create_blog(&self, input: CreateBlog) -> BlogResult<String>;

    async fn get_blog(&self, id: &str) -> BlogResult<Blog>;

    /// Every stored blog, in store order
    async fn get_blogs(&self) -> BlogResult<Vec<Blog>>;

    /// Blogs whose title, content or category match `term`, case-insensitively
    async fn get_blogs_by_term(&self, term: &str) -> BlogResult<Vec<Blog>>;

    /// Merge the present fields of `input` and return the blog after the change
    async fn update_blog(&self, input: UpdateBlog) -> BlogResult<Blog>;

    /// Remove a blog and return it as it was before removal
    async fn delete_blog(&self, id: &str) -> BlogResult<Blog>;
}
