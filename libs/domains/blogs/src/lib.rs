//! Blogs Domain
//!
//! Blog post storage, retrieval, partial update and keyword search on MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, /health
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, per-operation deadlines
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Blog entity, DTOs, partial update fields
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_blogs::{handlers, mongodb::MongoBlogRepository, service::BlogService};
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoBlogRepository::new(client.database("blogs"), "blogs");
//! let service = Arc::new(BlogService::new(repository));
//!
//! let router = handlers::router(service.clone()).merge(handlers::health_router(service));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{BlogError, BlogErrorKind, BlogResult};
pub use handlers::ApiDoc;
pub use models::{Blog, BlogQuery, BlogResponse, CreateBlog, CreatedResponse, Field, UpdateBlog};
pub use crate::mongodb::MongoBlogRepository;
pub use repository::BlogRepository;
pub use service::{BlogService, OperationTimeouts};
