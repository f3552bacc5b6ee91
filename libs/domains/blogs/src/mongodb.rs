//! MongoDB implementation of BlogRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use std::time::Duration;
use tracing::{info, instrument};

use crate::error::{BlogError, BlogResult};
use crate::models::{Blog, CreateBlog, Field, UpdateBlog};
use crate::repository::BlogRepository;

/// Fields matched by term search
const SEARCH_FIELDS: [&str; 3] = ["title", "content", "category"];

/// MongoDB implementation of the BlogRepository
pub struct MongoBlogRepository {
    db: Database,
    collection: Collection<Blog>,
}

impl MongoBlogRepository {
    /// Create a repository over `collection_name` in `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = database::mongodb::connect_from_config(&config).await?;
    /// let repo = MongoBlogRepository::new(client.database("blogs"), "blogs");
    /// ```
    pub fn new(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Blog>(collection_name);
        Self { db, collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Blog> {
        &self.collection
    }
}

/// Parse a hex identifier, rejecting anything that is not a valid ObjectId
pub(crate) fn parse_id(id: &str) -> BlogResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| BlogError::InvalidIdentifier(id.to_string()))
}

/// Build the `$set` document for an update.
///
/// Only present fields are included and `updated_at` is always added. Fails
/// with `Validation` when no optional field is present.
pub(crate) fn build_merge_set(input: &UpdateBlog, now: DateTime<Utc>) -> BlogResult<Document> {
    let mut set = Document::new();

    if let Field::Present(title) = &input.title {
        set.insert("title", title.as_str());
    }
    if let Field::Present(category) = &input.category {
        set.insert("category", category.as_str());
    }
    if let Field::Present(content) = &input.content {
        set.insert("content", content.as_str());
    }
    if let Field::Present(tags) = &input.tags {
        set.insert("tags", tags.clone());
    }

    if set.is_empty() {
        return Err(BlogError::Validation(
            "at least one of title, category, content or tags must be provided".to_string(),
        ));
    }

    set.insert("updated_at", bson::DateTime::from_chrono(now));
    Ok(set)
}

/// Case-insensitive `$regex` match of `term` on any search field
pub(crate) fn build_term_filter(term: &str) -> Document {
    let clauses: Vec<Document> = SEARCH_FIELDS
        .iter()
        .map(|field| {
            let mut clause = Document::new();
            clause.insert(*field, doc! { "$regex": term, "$options": "i" });
            clause
        })
        .collect();

    doc! { "$or": clauses }
}

fn not_found(id: &str) -> BlogError {
    BlogError::NotFound(format!("Blog {} not found", id))
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    #[instrument(skip(self))]
    async fn health(&self, deadline: Duration) -> BlogResult<()> {
        match tokio::time::timeout(deadline, self.db.run_command(doc! { "ping": 1 })).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(BlogError::Connectivity(e.to_string())),
            Err(_) => Err(BlogError::Connectivity(format!(
                "ping timed out after {:?}",
                deadline
            ))),
        }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_blog(&self, input: CreateBlog) -> BlogResult<String> {
        let blog = Blog::new(input);

        self.collection.insert_one(&blog).await?;

        let id = blog.id.to_hex();
        info!(blog_id = %id, "Blog created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn get_blog(&self, id: &str) -> BlogResult<Blog> {
        let oid = parse_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(self))]
    async fn get_blogs(&self) -> BlogResult<Vec<Blog>> {
        let blogs: Vec<Blog> = self.collection.find(doc! {}).await?.try_collect().await?;

        if blogs.is_empty() {
            return Err(BlogError::NotFound("No blogs found".to_string()));
        }
        Ok(blogs)
    }

    #[instrument(skip(self))]
    async fn get_blogs_by_term(&self, term: &str) -> BlogResult<Vec<Blog>> {
        let blogs: Vec<Blog> = self
            .collection
            .find(build_term_filter(term))
            .await?
            .try_collect()
            .await?;

        if blogs.is_empty() {
            return Err(BlogError::NotFound(
                "No blogs match the search term".to_string(),
            ));
        }
        Ok(blogs)
    }

    #[instrument(skip(self, input), fields(blog_id = %input.id))]
    async fn update_blog(&self, input: UpdateBlog) -> BlogResult<Blog> {
        let oid = parse_id(&input.id)?;
        let set = build_merge_set(&input, Utc::now())?;

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| not_found(&input.id))?;

        info!(blog_id = %input.id, "Blog updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_blog(&self, id: &str) -> BlogResult<Blog> {
        let oid = parse_id(id)?;

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(blog_id = %id, "Blog deleted successfully");
        Ok(deleted)
    }
}
